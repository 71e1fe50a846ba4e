//! This crate provides a signed duration type with a fixed-size microsecond
//! representation. Unlike `core::time::Duration`, a [`Duration`] may be
//! negative and has two explicit infinities which order after and before every
//! finite value.
//!
//! All arithmetic saturates. An overflow produces the infinity with the sign of
//! the overflow instead of wrapping or panicking, which means ordinary math on
//! durations never introduces a failure path.
//!
//! ```
//! use timedelta::Duration;
//!
//! let a = Duration::from_millis(267);
//! let b = Duration::from_millis(450);
//!
//! assert_eq!((a + b).as_millis(), 717);
//! assert_eq!(b / a, 450.0 / 267.0);
//! assert!((Duration::PLUS_INFINITY + a).is_plus_infinity());
//! ```
//!
//! The internal representation is a single `i64`, so the type is cheap to
//! copy and may be shared between threads through [`AtomicDuration`].

mod atomic_duration;
mod duration;
mod error;
mod format;

pub use atomic_duration::AtomicDuration;
pub use duration::Duration;
pub use error::{ParseDurationError, TryFromDurationError};

const MICROS_PER_MILLI: i64 = 1_000;
const MICROS_PER_SEC: i64 = 1_000_000;
const NANOS_PER_MICRO: i64 = 1_000;
