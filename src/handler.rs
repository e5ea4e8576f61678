//! Embedded handler for the relational sink variant.
//!
//! An external invoking framework calls [`handle`] with an
//! already-decoded event and an [`InvocationContext`]. The handler
//! connects, ensures the schema, inserts one row, commits, and returns a
//! fixed success string. Any failure is logged and returned to the caller;
//! the framework is responsible for surfacing or retrying at a higher
//! level.

use serde_json::Value;
use uuid::Uuid;

use crate::config::DbConfig;
use crate::error::IntakeError;
use crate::event::Event;
use crate::persistence::EventStore;

/// Result string returned to the invoking framework on success.
pub const SUCCESS_MESSAGE: &str = "Event logged successfully";

/// Per-invocation context supplied by the invoking framework.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Unique request identifier, used only for log correlation.
    pub request_id: Uuid,
}

impl InvocationContext {
    /// Creates a context with a fresh request ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Persists one already-decoded event to the configured database.
///
/// Connection settings are read from the environment once per invocation
/// (see [`DbConfig::from_env`]); the connection lives only for this call.
///
/// # Errors
///
/// Returns [`IntakeError::Config`] when connection settings are missing
/// and [`IntakeError::Database`] on connect or insert failure, after
/// logging. No internal retry.
pub async fn handle(event: Value, context: &InvocationContext) -> Result<String, IntakeError> {
    let event = Event::from_value(event);
    tracing::info!(
        request_id = %context.request_id,
        detail_type = %event.detail_type(),
        "Received event"
    );

    match log_event(&event).await {
        Ok(id) => {
            tracing::info!(request_id = %context.request_id, row_id = id, "Event logged");
            Ok(SUCCESS_MESSAGE.to_string())
        }
        Err(err) => {
            tracing::error!(request_id = %context.request_id, "Failed to log event: {err}");
            Err(err)
        }
    }
}

/// Connect, bootstrap schema, insert one row.
async fn log_event(event: &Event) -> Result<i64, IntakeError> {
    let config = DbConfig::from_env()?;
    let store = EventStore::connect(&config).await?;
    store.ensure_schema().await?;
    store.insert_event(event).await
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contexts_carry_unique_request_ids() {
        let a = InvocationContext::new();
        let b = InvocationContext::new();
        assert_ne!(a.request_id, b.request_id);
    }

    #[tokio::test]
    async fn handle_without_configuration_is_a_config_error() {
        // The DB_* variables are not set in the test environment, so the
        // handler must fail before attempting a connection.
        if std::env::var("DB_HOST").is_ok() {
            return;
        }
        let ctx = InvocationContext::new();
        let result = handle(json!({"detail-type": "test"}), &ctx).await;
        assert!(matches!(result, Err(IntakeError::Config(_))));
    }
}
