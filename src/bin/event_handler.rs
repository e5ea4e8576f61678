//! Local driver for the relational sink variant.
//!
//! Stands in for the external invoking framework: reads one JSON event
//! from stdin, decodes it, and invokes [`event_intake::handler::handle`]
//! with a fresh invocation context. Unlike the console and file variants,
//! a handler failure propagates as a non-zero exit.

use tracing_subscriber::EnvFilter;

use event_intake::handler::{self, InvocationContext};
use event_intake::intake;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let raw = intake::read_stdin()?;
    let event: serde_json::Value = serde_json::from_str(&raw)?;

    let context = InvocationContext::new();
    let result = handler::handle(event, &context).await?;
    tracing::info!("{result}");

    Ok(())
}
