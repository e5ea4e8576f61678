//! # event-intake
//!
//! Minimal event intake logger. Each binary reads exactly one JSON-encoded
//! event from a single channel, parses it strictly, and records it in one
//! sink. One-shot, stateless across invocations; no batching, retries, or
//! delivery guarantees.
//!
//! ## Variants
//!
//! ```text
//! Input Reader ──▶ Event Parser ──▶ Sink
//!
//!   stdin           serde_json       console log stream  (console-logger)
//!   stdin           serde_json       append-only file    (file-logger)
//!   function arg    serde_json       PostgreSQL row      (handler::handle)
//! ```
//!
//! The console and file variants swallow errors after logging them; the
//! embedded handler re-raises so the invoking framework can decide.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod intake;
pub mod persistence;
