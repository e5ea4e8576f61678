//! File variant: stdin → parse → timestamped log lines appended to a
//! local file (`/tmp/message.log` by default, `MESSAGE_LOG_PATH` to
//! override). No rotation, no size limits.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use event_intake::config;
use event_intake::intake;

fn main() -> anyhow::Result<()> {
    let path = config::log_file_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    // Same single-shot semantics as the console variant, minus the raw
    // input line. Errors are logged to the file and swallowed.
    if let Err(err) = intake::run(false) {
        intake::log_failure(&err);
    }

    Ok(())
}
