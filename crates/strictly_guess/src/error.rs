//! Error types for target validation.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::{TARGET_MAX, TARGET_MIN};

/// A value fell outside the closed target range, with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "Target number {} outside {}..={} at {}:{}",
    value,
    TARGET_MIN,
    TARGET_MAX,
    file,
    line
)]
pub struct RangeError {
    /// The rejected value.
    pub value: u32,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RangeError {
    /// Creates a new range error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(value: u32) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            value,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
