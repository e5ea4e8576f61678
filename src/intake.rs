//! The shared read → parse → log pipeline.
//!
//! Used by the console and file variants. Each process invocation handles
//! exactly one event: read everything the input channel yields, parse it
//! strictly, emit one log line with the indented re-serialization. Empty
//! input is an informational outcome, not an error.

use std::io::Read;

use crate::error::IntakeError;
use crate::event::Event;

/// Terminal outcome of one intake run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An event was parsed and logged.
    Logged,
    /// The input channel yielded no data; nothing was parsed.
    NoInput,
}

/// Reads the whole of standard input as text.
///
/// # Errors
///
/// Returns [`IntakeError::Input`] if the read fails.
pub fn read_stdin() -> Result<String, IntakeError> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(raw)
}

/// Parses and logs one raw input blob.
///
/// When `log_raw` is set the unparsed text is logged verbatim first, for
/// diagnostics; only the console variant does this. Only exactly-empty
/// input counts as no input; anything else, whitespace included, goes to
/// the parser.
///
/// # Errors
///
/// Returns [`IntakeError::Parse`] on malformed JSON.
pub fn process(raw: &str, log_raw: bool) -> Result<Outcome, IntakeError> {
    if raw.is_empty() {
        tracing::info!("No input received");
        return Ok(Outcome::NoInput);
    }

    if log_raw {
        tracing::info!(raw = %raw, "Raw input");
    }

    let event = Event::parse(raw)?;
    tracing::info!("Received event: {}", event.pretty()?);

    Ok(Outcome::Logged)
}

/// Runs one intake pass over standard input.
///
/// # Errors
///
/// Returns [`IntakeError::Input`] if stdin cannot be read and
/// [`IntakeError::Parse`] on malformed JSON.
pub fn run(log_raw: bool) -> Result<Outcome, IntakeError> {
    process(&read_stdin()?, log_raw)
}

/// Logs a pipeline failure, distinguishing malformed JSON from any other
/// unexpected error. The console and file variants exit normally after
/// this; they do not re-raise.
pub fn log_failure(err: &IntakeError) {
    if err.is_parse() {
        tracing::error!("Failed to decode JSON from stdin: {err}");
    } else {
        tracing::error!("An unexpected error occurred: {err}");
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_not_parsed() {
        let Ok(outcome) = process("", false) else {
            panic!("empty input must not error");
        };
        assert_eq!(outcome, Outcome::NoInput);
    }

    #[test]
    fn whitespace_only_input_is_a_parse_error() {
        let result = process("  \n\t", true);
        assert!(matches!(result, Err(IntakeError::Parse(_))));
    }

    #[test]
    fn well_formed_input_is_logged() {
        let Ok(outcome) = process(r#"{"detail-type": "ping"}"#, true) else {
            panic!("valid JSON must not error");
        };
        assert_eq!(outcome, Outcome::Logged);
    }

    #[test]
    fn malformed_input_yields_parse_error() {
        let result = process("{\"unterminated\": ", false);
        assert!(matches!(result, Err(IntakeError::Parse(_))));
    }
}
