//! Error types for skill request handling.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while handling a skill event.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SkillErrorKind {
    /// The event's application id is not the one this skill answers to.
    #[display("Invalid application id: {}", _0)]
    InvalidApplicationId(String),

    /// An intent request named an intent this skill does not recognize.
    #[display("Invalid intent: {}", _0)]
    InvalidIntent(String),

    /// The event could not be parsed.
    #[display("Malformed event: {}", _0)]
    MalformedEvent(String),
}

/// Skill error with location tracking.
///
/// Every variant aborts the whole invocation; no response is produced.
#[derive(Debug, Clone, Display, Error)]
#[display("Skill error: {} at {}:{}", kind, file, line)]
pub struct SkillError {
    /// What went wrong.
    pub kind: SkillErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SkillError {
    /// Creates a new skill error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SkillErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &SkillErrorKind {
        &self.kind
    }
}

impl From<serde_json::Error> for SkillError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(SkillErrorKind::MalformedEvent(err.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
