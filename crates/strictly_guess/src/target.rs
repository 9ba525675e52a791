//! The number the skill is thinking of.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::RangeError;

/// Smallest number the skill will think of.
pub const TARGET_MIN: u32 = 1;

/// Largest number the skill will think of.
pub const TARGET_MAX: u32 = 100;

/// Closed range every target is drawn from.
pub const TARGET_RANGE: RangeInclusive<u32> = TARGET_MIN..=TARGET_MAX;

/// A target number guaranteed to lie in [`TARGET_RANGE`].
///
/// On the wire this is a bare JSON integer. Deserializing an integer outside
/// the range fails rather than producing an unchecked target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TargetNumber(u32);

impl TargetNumber {
    /// Validates `value` against [`TARGET_RANGE`].
    #[track_caller]
    #[instrument]
    pub fn new(value: u32) -> Result<Self, RangeError> {
        if TARGET_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            warn!(value, "Rejected out-of-range target number");
            Err(RangeError::new(value))
        }
    }

    /// Draws a target uniformly from [`TARGET_RANGE`].
    #[instrument(skip(rng))]
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let value = rng.gen_range(TARGET_RANGE);
        debug!(value, "Drew target number");
        Self(value)
    }

    /// Draws a target using the thread-local generator.
    #[instrument]
    pub fn random() -> Self {
        Self::draw(&mut rand::thread_rng())
    }

    /// Returns the raw value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for TargetNumber {
    type Error = RangeError;

    #[track_caller]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TargetNumber> for u32 {
    fn from(target: TargetNumber) -> Self {
        target.0
    }
}

impl std::fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
