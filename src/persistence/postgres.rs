//! PostgreSQL implementation of the relational sink.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::EventLogRecord;
use crate::config::DbConfig;
use crate::error::IntakeError;
use crate::event::Event;

/// Idempotent schema bootstrap. Concurrent invocations rely on the
/// database's own `IF NOT EXISTS` guarantees; no application-level locking.
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS event_log (\
     id BIGSERIAL PRIMARY KEY, \
     detail_type TEXT, \
     payload JSONB NOT NULL, \
     received_at TIMESTAMPTZ NOT NULL DEFAULT now())";

/// PostgreSQL-backed event store using `sqlx::PgPool`.
///
/// The pool is capped at a single connection: it is scoped to one
/// invocation, acquired and released within it.
#[derive(Debug, Clone)]
pub struct EventStore {
    pool: PgPool,
}

impl EventStore {
    /// Opens a connection using the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Database`] if the connection cannot be
    /// established. There is no retry or backoff.
    pub async fn connect(config: &DbConfig) -> Result<Self, IntakeError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&config.connection_url())
            .await
            .map_err(|e| IntakeError::Database(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Creates the `event_log` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Database`] on database failure.
    pub async fn ensure_schema(&self) -> Result<(), IntakeError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| IntakeError::Database(e.to_string()))?;

        Ok(())
    }

    /// Inserts one event row and returns the new auto-increment ID.
    ///
    /// The type tag comes from the event's `detail-type` field with an
    /// `"Unknown"` default; the full event is stored as JSONB. The receipt
    /// timestamp is assigned server-side.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Database`] on database failure.
    pub async fn insert_event(&self, event: &Event) -> Result<i64, IntakeError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO event_log (detail_type, payload) VALUES ($1, $2) RETURNING id",
        )
        .bind(event.detail_type())
        .bind(event.as_value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IntakeError::Database(e.to_string()))?;

        Ok(id)
    }

    /// Loads event rows received after the given timestamp, oldest first.
    ///
    /// The intake path itself never reads rows back; this exists for
    /// verification and operational inspection.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Database`] on database failure.
    pub async fn load_events_after(
        &self,
        after: DateTime<Utc>,
    ) -> Result<Vec<EventLogRecord>, IntakeError> {
        let rows = sqlx::query_as::<_, (i64, Option<String>, serde_json::Value, DateTime<Utc>)>(
            "SELECT id, detail_type, payload, received_at FROM event_log \
             WHERE received_at > $1 ORDER BY received_at ASC, id ASC",
        )
        .bind(after)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IntakeError::Database(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, detail_type, payload, received_at)| EventLogRecord {
                id,
                detail_type,
                payload,
                received_at,
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn table_creation_is_idempotent_sql() {
        assert!(CREATE_TABLE_SQL.contains("IF NOT EXISTS"));
    }

    #[test]
    fn receipt_timestamp_is_server_assigned() {
        assert!(CREATE_TABLE_SQL.contains("DEFAULT now()"));
    }

    // Requires a reachable database; skipped when DB_HOST is unset.
    #[tokio::test]
    async fn insert_assigns_distinct_increasing_ids() {
        if std::env::var("DB_HOST").is_err() {
            return;
        }
        let Ok(config) = DbConfig::from_env() else {
            panic!("incomplete database configuration");
        };
        let Ok(store) = EventStore::connect(&config).await else {
            panic!("database unreachable");
        };

        // Bootstrapping twice must be a no-op the second time.
        let Ok(()) = store.ensure_schema().await else {
            panic!("schema bootstrap failed");
        };
        let Ok(()) = store.ensure_schema().await else {
            panic!("schema bootstrap is not idempotent");
        };

        let started = Utc::now();
        let first = Event::from_value(serde_json::json!({"detail-type": "first"}));
        let second = Event::from_value(serde_json::json!({"seq": 2}));
        let Ok(first_id) = store.insert_event(&first).await else {
            panic!("first insert failed");
        };
        let Ok(second_id) = store.insert_event(&second).await else {
            panic!("second insert failed");
        };
        assert!(second_id > first_id);

        let Ok(rows) = store.load_events_after(started - chrono::Duration::minutes(1)).await
        else {
            panic!("load failed");
        };
        let Some(first_row) = rows.iter().find(|r| r.id == first_id) else {
            panic!("first row missing");
        };
        let Some(second_row) = rows.iter().find(|r| r.id == second_id) else {
            panic!("second row missing");
        };
        assert_eq!(first_row.detail_type.as_deref(), Some("first"));
        assert_eq!(second_row.detail_type.as_deref(), Some("Unknown"));
        assert!(second_row.received_at >= first_row.received_at);
    }
}
