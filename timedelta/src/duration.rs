use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::{TryFromDurationError, MICROS_PER_MILLI, MICROS_PER_SEC, NANOS_PER_MICRO};

/// A duration represents a signed span of time. The internal representation
/// is a single `i64` count of microseconds, giving a finite range of roughly
/// +/- 292,000 years.
///
/// The two extreme values of the representation are reserved for positive
/// and negative infinity. Every operation which would produce a value outside
/// of the finite range saturates to the infinity with the matching sign, and
/// no finite computation can produce an infinity by accident. Since the
/// infinities sit at the ends of the integer range, the derived ordering is
/// `MINUS_INFINITY < finite < PLUS_INFINITY`.
///
/// Scalar multiplication and division take `i64` or `f64`. Float scalars
/// round the result to the nearest microsecond; whole float scalars are
/// computed exactly.
///
/// Integer accessors truncate toward zero. Floating point accessors return
/// `f64::INFINITY` or `f64::NEG_INFINITY` for the infinities. Integer
/// accessors on an infinite duration saturate to `i64::MAX` or `i64::MIN`;
/// use the `*_or()` variants to substitute a value of your choosing.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(transparent)
)]
pub struct Duration {
    pub(crate) us: i64,
}

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Duration = Duration { us: 0 };

    /// A duration longer than any finite duration.
    pub const PLUS_INFINITY: Duration = Duration { us: i64::MAX };

    /// A duration shorter than any finite duration.
    pub const MINUS_INFINITY: Duration = Duration { us: i64::MIN };

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn plus_infinity() -> Self {
        Self::PLUS_INFINITY
    }

    pub const fn minus_infinity() -> Self {
        Self::MINUS_INFINITY
    }

    /// Clamp a wide intermediate result into the representable range. All
    /// integer math funnels through here.
    pub(crate) const fn saturating(us: i128) -> Self {
        if us >= i64::MAX as i128 {
            Self::PLUS_INFINITY
        } else if us <= i64::MIN as i128 {
            Self::MINUS_INFINITY
        } else {
            Self { us: us as i64 }
        }
    }

    /// Round a floating point microsecond count to the nearest whole
    /// microsecond, saturating to the infinities when it does not fit.
    fn saturating_f64(us: f64) -> Self {
        if us.is_nan() {
            debug!("indeterminate duration arithmetic, using +inf");
            return Self::PLUS_INFINITY;
        }

        let us = us.round();

        // `i64::MAX as f64` is 2^63, so anything strictly inside the bounds
        // converts without landing on a reserved value
        if us >= i64::MAX as f64 {
            Self::PLUS_INFINITY
        } else if us <= i64::MIN as f64 {
            Self::MINUS_INFINITY
        } else {
            Self { us: us as i64 }
        }
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self::saturating(secs as i128 * MICROS_PER_SEC as i128)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self::saturating(millis as i128 * MICROS_PER_MILLI as i128)
    }

    pub const fn from_micros(micros: i64) -> Self {
        Self::saturating(micros as i128)
    }

    /// Create a duration from a floating point number of seconds, rounded to
    /// the nearest microsecond.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::saturating_f64(secs * MICROS_PER_SEC as f64)
    }

    /// Create a duration from a floating point number of milliseconds,
    /// rounded to the nearest microsecond.
    pub fn from_millis_f64(millis: f64) -> Self {
        Self::saturating_f64(millis * MICROS_PER_MILLI as f64)
    }

    /// Create a duration from a floating point number of microseconds,
    /// rounded to the nearest microsecond.
    pub fn from_micros_f64(micros: f64) -> Self {
        Self::saturating_f64(micros)
    }

    pub const fn as_secs(&self) -> i64 {
        if self.is_infinite() {
            self.us
        } else {
            self.us / MICROS_PER_SEC
        }
    }

    pub const fn as_millis(&self) -> i64 {
        if self.is_infinite() {
            self.us
        } else {
            self.us / MICROS_PER_MILLI
        }
    }

    pub const fn as_micros(&self) -> i64 {
        self.us
    }

    /// Returns the number of whole nanoseconds, saturating to `i64::MAX` or
    /// `i64::MIN` when the value does not fit.
    pub const fn as_nanos(&self) -> i64 {
        Self::saturating(self.us as i128 * NANOS_PER_MICRO as i128).us
    }

    pub const fn as_secs_or(&self, fallback: i64) -> i64 {
        if self.is_finite() {
            self.as_secs()
        } else {
            fallback
        }
    }

    pub const fn as_millis_or(&self, fallback: i64) -> i64 {
        if self.is_finite() {
            self.as_millis()
        } else {
            fallback
        }
    }

    pub const fn as_micros_or(&self, fallback: i64) -> i64 {
        if self.is_finite() {
            self.as_micros()
        } else {
            fallback
        }
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.as_micros_f64() / MICROS_PER_SEC as f64
    }

    pub fn as_millis_f64(&self) -> f64 {
        self.as_micros_f64() / MICROS_PER_MILLI as f64
    }

    pub fn as_micros_f64(&self) -> f64 {
        match self.us {
            i64::MAX => f64::INFINITY,
            i64::MIN => f64::NEG_INFINITY,
            us => us as f64,
        }
    }

    pub fn as_nanos_f64(&self) -> f64 {
        self.as_micros_f64() * NANOS_PER_MICRO as f64
    }

    pub const fn is_zero(&self) -> bool {
        self.us == 0
    }

    pub const fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    pub const fn is_infinite(&self) -> bool {
        self.is_plus_infinity() || self.is_minus_infinity()
    }

    pub const fn is_plus_infinity(&self) -> bool {
        self.us == i64::MAX
    }

    pub const fn is_minus_infinity(&self) -> bool {
        self.us == i64::MIN
    }

    /// Returns the magnitude of the duration. Both infinities map to
    /// `PLUS_INFINITY`.
    pub fn abs(&self) -> Self {
        if self.us < 0 {
            -*self
        } else {
            *self
        }
    }

    fn mul_int(self, rhs: i64) -> Self {
        if self.is_finite() {
            return Self::saturating(self.us as i128 * rhs as i128);
        }

        match rhs.signum() {
            1 => self,
            -1 => -self,
            // infinity times zero has no meaningful value, positive infinity
            // wins as it does for the other indeterminate forms
            _ => Self::PLUS_INFINITY,
        }
    }

    fn div_int(self, rhs: i64) -> Self {
        if rhs == 0 {
            return if self.us < 0 {
                Self::MINUS_INFINITY
            } else {
                Self::PLUS_INFINITY
            };
        }

        if self.is_finite() {
            Self::saturating(self.us as i128 / rhs as i128)
        } else if rhs > 0 {
            self
        } else {
            -self
        }
    }

    /// Division of a finite duration by a non-zero integer, rounding half
    /// away from zero to match `f64::round`.
    fn div_round(self, rhs: i64) -> Self {
        let (us, rhs) = (self.us as i128, rhs as i128);
        let mut quotient = us / rhs;

        if 2 * (us % rhs).abs() >= rhs.abs() {
            quotient += if (us < 0) == (rhs < 0) { 1 } else { -1 };
        }

        Self::saturating(quotient)
    }
}

/// A float scalar with no fractional part which fits in an `i64`. Scaling by
/// these stays in integer math so large durations keep full precision.
fn whole_scalar(scalar: f64) -> Option<i64> {
    // `fract()` is NaN for the infinities
    if scalar.fract() == 0.0 && scalar.abs() < i64::MAX as f64 {
        Some(scalar as i64)
    } else {
        None
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Self::Output {
        match self.us {
            i64::MAX => Duration::MINUS_INFINITY,
            i64::MIN => Duration::PLUS_INFINITY,
            us => Duration::saturating(-(us as i128)),
        }
    }
}

/// Positive infinity dominates: `+inf + -inf` is `+inf`.
impl Add<Duration> for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Self::Output {
        if self.is_plus_infinity() || rhs.is_plus_infinity() {
            Duration::PLUS_INFINITY
        } else if self.is_minus_infinity() || rhs.is_minus_infinity() {
            Duration::MINUS_INFINITY
        } else {
            Duration::saturating(self.us as i128 + rhs.us as i128)
        }
    }
}

impl AddAssign<Duration> for Duration {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

/// Positive infinity dominates: `+inf - +inf` and `-inf - -inf` are both
/// `+inf`.
impl Sub<Duration> for Duration {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Self::Output {
        if self.is_plus_infinity() || rhs.is_minus_infinity() {
            Duration::PLUS_INFINITY
        } else if self.is_minus_infinity() || rhs.is_plus_infinity() {
            Duration::MINUS_INFINITY
        } else {
            Duration::saturating(self.us as i128 - rhs.us as i128)
        }
    }
}

impl SubAssign<Duration> for Duration {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: i64) -> Self::Output {
        self.mul_int(rhs)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Self::Output {
        rhs.mul_int(self)
    }
}

impl MulAssign<i64> for Duration {
    fn mul_assign(&mut self, rhs: i64) {
        *self = self.mul_int(rhs);
    }
}

/// Integer division truncates toward zero.
impl Div<i64> for Duration {
    type Output = Duration;

    fn div(self, rhs: i64) -> Self::Output {
        self.div_int(rhs)
    }
}

impl DivAssign<i64> for Duration {
    fn div_assign(&mut self, rhs: i64) {
        *self = self.div_int(rhs);
    }
}

/// The product is rounded to the nearest microsecond.
impl Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, rhs: f64) -> Self::Output {
        match whole_scalar(rhs) {
            Some(rhs) if self.is_finite() => self.mul_int(rhs),
            _ => Duration::saturating_f64(self.as_micros_f64() * rhs),
        }
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Duration {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// The quotient is rounded to the nearest microsecond.
impl Div<f64> for Duration {
    type Output = Duration;

    fn div(self, rhs: f64) -> Self::Output {
        match whole_scalar(rhs) {
            Some(rhs) if self.is_finite() && rhs != 0 => self.div_round(rhs),
            _ => Duration::saturating_f64(self.as_micros_f64() / rhs),
        }
    }
}

impl DivAssign<f64> for Duration {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Dividing one duration by another gives their ratio.
impl Div<Duration> for Duration {
    type Output = f64;

    fn div(self, rhs: Duration) -> Self::Output {
        self.as_micros_f64() / rhs.as_micros_f64()
    }
}

/// Sub-microsecond precision is truncated. Values too large to represent
/// become `PLUS_INFINITY`.
impl From<core::time::Duration> for Duration {
    fn from(other: core::time::Duration) -> Self {
        let duration = Duration::saturating(other.as_micros() as i128);
        if duration.is_infinite() {
            debug!("{other:?} exceeds the representable range, saturating");
        }
        duration
    }
}

impl TryFrom<Duration> for core::time::Duration {
    type Error = TryFromDurationError;

    fn try_from(other: Duration) -> Result<Self, Self::Error> {
        if other.is_infinite() {
            Err(TryFromDurationError::Infinite)
        } else if other.us < 0 {
            Err(TryFromDurationError::Negative)
        } else {
            Ok(core::time::Duration::from_micros(other.us as u64))
        }
    }
}
