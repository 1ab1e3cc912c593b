//! Tracing initialization

use crate::config::LogConfig;
use std::fs::File;
use std::io;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable that overrides `log.filter`
pub const LOG_ENV: &str = "WORDLE_UZ_LOG";

/// Initialize the tracing/logging system.
///
/// Reads `WORDLE_UZ_LOG` for filter directives, e.g.
/// `WORDLE_UZ_LOG=wordle_uz=debug`. Falls back to `config.filter`.
///
/// Logs go to `config.file` when set (needed while the TUI owns the terminal),
/// stderr otherwise. If the file cannot be created logging falls back to
/// stderr.
///
/// Calling this more than once is a no-op.
pub fn init_tracing(config: &LogConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.filter));

        let registry = tracing_subscriber::registry().with(filter);

        match config.file.as_deref().map(|path| (path, File::create(path))) {
            Some((_, Ok(file))) => registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(true)
                        .with_writer(Mutex::new(file)),
                )
                .init(),
            Some((path, Err(e))) => {
                registry
                    .with(fmt::layer().with_target(true).with_writer(io::stderr))
                    .init();
                tracing::warn!(path = %path.display(), error = %e, "cannot open log file, using stderr");
            }
            None => registry
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .init(),
        }
    });
}
