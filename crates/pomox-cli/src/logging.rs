use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use pomox_core::storage::data_dir;

const LOG_ENV: &str = "POMOX_LOG";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::new(std::env::var(LOG_ENV).unwrap_or_else(|_| default_level.to_string()))
}

/// Foreground commands log warnings to stderr.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

/// The daemon has no terminal, so it appends to `daemon.log` in the data
/// directory. Falls back to stderr if the file cannot be opened.
pub fn init_daemon() {
    let file = data_dir().and_then(|dir| {
        Ok(OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("daemon.log"))?)
    });

    match file {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            init();
            tracing::warn!("could not open daemon log: {e}");
        }
    }
}
