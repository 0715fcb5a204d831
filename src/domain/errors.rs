//! Domain errors for the codechat configuration system.

use thiserror::Error;

/// Join rule violation messages into a single human-readable string.
fn format_messages(messages: &[String]) -> String {
    messages.join("; ")
}

/// Aggregate of configuration rule violations.
///
/// Each entry is an independent, user-facing message for one violated rule.
/// A non-empty list is the only failure signal the validator produces, and
/// it is always recoverable: callers print the messages and re-collect
/// input instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration: {}", format_messages(.messages))]
pub struct ValidationError {
    /// One message per violated rule, in rule order.
    pub messages: Vec<String>,
}

impl ValidationError {
    #[must_use]
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}
