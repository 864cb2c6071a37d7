// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::uptime};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    /// Append to `.store/debug.log` (GUI; there is no console on Windows).
    File,
    /// Plain stderr (CLI).
    Stderr,
}

fn open_log_file() -> Option<File> {
    if let Err(e) = fs::create_dir_all(STORE_DIR) {
        eprintln!("Log: cannot create {STORE_DIR}: {e}");
        return None;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(STORE_DIR).join(LOG_FILE))
        .ok()
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
/// Filter comes from `RUST_LOG`, default `info`.
pub fn init(sink: LogSink) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(uptime())
        .with_target(false);

    let res = match sink {
        LogSink::File => match open_log_file() {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        },
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    // Already initialised by an earlier call (tests, GUI + CLI in one process).
    drop(res);
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
