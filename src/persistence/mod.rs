//! Persistence layer: PostgreSQL event log.
//!
//! Durable storage for the relational sink variant. The concrete
//! implementation uses `sqlx::PgPool` for async PostgreSQL access, capped
//! at one connection per invocation.

pub mod models;
pub mod postgres;

pub use models::EventLogRecord;
pub use postgres::EventStore;
