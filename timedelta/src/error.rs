use thiserror::Error;

/// Errors returned when parsing a [`crate::Duration`] from text.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("cannot parse duration from empty string")]
    Empty,
    #[error("duration is missing a unit, expected one of: s, ms, us")]
    MissingUnit,
    #[error("unknown duration unit, expected one of: s, ms, us")]
    UnknownUnit,
    #[error("invalid number in duration")]
    InvalidNumber,
}

/// Errors returned when converting a [`crate::Duration`] into a
/// `core::time::Duration`, which cannot represent these values.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryFromDurationError {
    #[error("can not convert to core::time::Duration: value is negative")]
    Negative,
    #[error("can not convert to core::time::Duration: value is infinite")]
    Infinite,
}
