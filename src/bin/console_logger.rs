//! Console variant: stdin → parse → timestamped log lines on stdout.

use tracing_subscriber::EnvFilter;

use event_intake::intake;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .init();

    // Raw input is logged before parsing, for diagnostics. Parse and
    // unexpected errors are logged and swallowed; the process exits
    // normally either way.
    if let Err(err) = intake::run(true) {
        intake::log_failure(&err);
    }
}
