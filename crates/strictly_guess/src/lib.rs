//! Pure guess-the-number game logic.
//!
//! The only state a guessing game needs is the number the skill is thinking
//! of. [`TargetNumber`] makes an out-of-range target unrepresentable: it can
//! only be drawn from, or validated against, the closed range
//! [`TARGET_MIN`]..=[`TARGET_MAX`].
//!
//! # Example
//!
//! ```
//! use strictly_guess::{TargetNumber, TARGET_RANGE};
//!
//! let target = TargetNumber::random();
//! assert!(TARGET_RANGE.contains(&target.value()));
//!
//! assert!(TargetNumber::new(0).is_err());
//! assert_eq!(TargetNumber::new(42).unwrap().to_string(), "42");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod target;

pub use error::RangeError;
pub use target::{TARGET_MAX, TARGET_MIN, TARGET_RANGE, TargetNumber};
