use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::RUN_LOG;

/// Initializes logging with console output plus a JSON log file inside
/// the run's output directory.
pub fn init_logging(out_dir: &Path) {
    let file_appender = tracing_appender::rolling::never(out_dir, RUN_LOG);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("bp_dq=info".parse().unwrap()))
        .with(file_layer)
        .with(console_layer)
        .init();

    // We need to keep the guard in scope to ensure logs are flushed on exit
    std::mem::forget(guard);
}
