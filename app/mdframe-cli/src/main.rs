//! FILENAME: app/mdframe-cli/src/main.rs
//! mdframe CLI
//!
//! Loads a frame from a JSON manifest and flattens it into a CSV table.

mod logging;
mod manifest;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use mdframe::{cartesian_count, Frame};
use persistence::{export_table_with, ExportOptions};

use crate::manifest::FrameManifest;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Also write log lines to this file
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log layout details
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Export a frame manifest to CSV
    Export {
        /// Frame manifest (JSON)
        manifest: PathBuf,
        /// Destination CSV file
        output: PathBuf,
        /// Omit the header line
        #[clap(long)]
        no_header: bool,
    },
    /// Print the dimensions and variables of a frame manifest
    Inspect {
        /// Frame manifest (JSON)
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.log_file.as_deref(), args.verbose).map_err(|e| anyhow!(e))?;

    match args.cmd {
        Command::Export {
            manifest,
            output,
            no_header,
        } => run_export(&manifest, &output, no_header),
        Command::Inspect { manifest } => run_inspect(&manifest),
    }
}

fn load_frame(path: &Path) -> Result<(Frame, FrameManifest)> {
    let manifest = FrameManifest::from_path(path)?;
    let frame = manifest
        .to_frame()
        .with_context(|| format!("Invalid frame in {}", path.display()))?;
    log::debug!(
        target: "CLI",
        "loaded manifest={} dimensions={} variables={}",
        path.display(),
        frame.dimension_count(),
        frame.variable_count()
    );
    Ok((frame, manifest))
}

fn run_export(manifest_path: &Path, output: &Path, no_header: bool) -> Result<()> {
    let (frame, manifest) = load_frame(manifest_path)?;

    let mut options = manifest.options.unwrap_or_default();
    if no_header {
        options = ExportOptions::new(false);
    }

    let rows = export_table_with(&frame, output, &options)
        .with_context(|| format!("Failed to export {}", output.display()))?;
    log::info!(target: "CLI", "export done rows={}", rows);
    Ok(())
}

fn run_inspect(manifest_path: &Path) -> Result<()> {
    let (frame, _) = load_frame(manifest_path)?;

    println!("dimensions:");
    for dim in frame.sorted_dimensions() {
        println!("  {} {}", dim.name, dim.size);
    }

    println!("variables:");
    for var in frame.sorted_variables() {
        println!(
            "  {} {:?} [{}]",
            var.name,
            var.kind(),
            var.dimensions.join(",")
        );
    }

    let shape: Vec<usize> = frame.sorted_dimensions().iter().map(|d| d.size).collect();
    match cartesian_count(&shape) {
        Some(rows) => println!("rows: {}", rows),
        None => println!("rows: overflow"),
    }
    Ok(())
}
