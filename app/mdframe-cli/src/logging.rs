//! FILENAME: app/mdframe-cli/src/logging.rs
// PURPOSE: Unified logging for the command-line front end.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter, one tick per log line
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Optional log file handle, set by `init`
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats a line as `seq|LEVEL|CATEGORY|message`.
pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Write a log line to stderr and, if one is open, the log file.
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    eprintln!("{}", line);
}

struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_log(
            record.level().as_str(),
            record.target(),
            &record.args().to_string(),
        );
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Installs the logger. With `log_path`, lines are also appended to that file
/// (truncated first).
pub fn init(log_path: Option<&Path>, verbose: bool) -> Result<(), String> {
    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| format!("Failed to create log file {:?}: {}", path, e))?;

        let mut guard = LOG_FILE
            .lock()
            .map_err(|e| format!("Lock error: {}", e))?;
        *guard = Some(file);
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    log::set_logger(&LOGGER).map_err(|e| format!("Logger already set: {}", e))?;
    log::set_max_level(level);
    Ok(())
}
