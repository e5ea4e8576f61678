//! The parsed event and its conventional fields.
//!
//! An [`Event`] is an arbitrary JSON value; no schema is enforced. The only
//! conventional field is `detail-type`, read with a default of `"Unknown"`
//! when absent or not a string.

use serde_json::Value;

use crate::error::IntakeError;

/// Type tag used when an event carries no usable `detail-type` field.
pub const UNKNOWN_DETAIL_TYPE: &str = "Unknown";

/// A single decoded intake event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event(Value);

impl Event {
    /// Strictly decodes raw text as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Parse`] on malformed input, carrying the
    /// decode position and reason.
    pub fn parse(raw: &str) -> Result<Self, IntakeError> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    /// Wraps an already-decoded value, as supplied by an invoking framework.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// The event's type tag, taken from the conventional `detail-type`
    /// field. Falls back to [`UNKNOWN_DETAIL_TYPE`] when the field is
    /// missing or not a string.
    #[must_use]
    pub fn detail_type(&self) -> &str {
        self.0
            .get("detail-type")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_DETAIL_TYPE)
    }

    /// Indented JSON re-serialization of the event, for log output.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Parse`] if serialization fails.
    pub fn pretty(&self) -> Result<String, IntakeError> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Borrows the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}
