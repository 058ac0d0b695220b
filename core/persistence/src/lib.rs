//! FILENAME: core/persistence/src/lib.rs
//! Frame Persistence Module
//!
//! Flattens a multi-dimensional frame into a deterministic CSV table:
//! columns are the variables sorted by name, rows are the cartesian
//! product of the dimensions sorted by name.

mod csv_writer;
mod error;
mod layout;
mod options;

pub use csv_writer::{export_table, export_table_with, write_table};
pub use error::ExportError;
pub use layout::{IndexMap, TableLayout};
pub use options::ExportOptions;
