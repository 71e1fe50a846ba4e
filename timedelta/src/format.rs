use core::fmt;
use core::str::FromStr;

use crate::{Duration, ParseDurationError, MICROS_PER_MILLI, MICROS_PER_SEC};

/// Durations are written in the coarsest unit which represents them exactly:
/// `"3 s"`, `"1500 ms"`, `"17017 us"`. Zero is written as `"0 us"` and the
/// infinities as `"+inf ms"` and `"-inf ms"`.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plus_infinity() {
            f.write_str("+inf ms")
        } else if self.is_minus_infinity() {
            f.write_str("-inf ms")
        } else if self.us == 0 || self.us % MICROS_PER_MILLI != 0 {
            write!(f, "{} us", self.us)
        } else if self.us % MICROS_PER_SEC != 0 {
            write!(f, "{} ms", self.as_millis())
        } else {
            write!(f, "{} s", self.as_secs())
        }
    }
}

#[derive(Copy, Clone)]
enum Unit {
    Seconds,
    Millis,
    Micros,
}

impl Unit {
    fn integer(self, value: i64) -> Duration {
        match self {
            Self::Seconds => Duration::from_secs(value),
            Self::Millis => Duration::from_millis(value),
            Self::Micros => Duration::from_micros(value),
        }
    }

    fn float(self, value: f64) -> Duration {
        match self {
            Self::Seconds => Duration::from_secs_f64(value),
            Self::Millis => Duration::from_millis_f64(value),
            Self::Micros => Duration::from_micros_f64(value),
        }
    }
}

/// Parses the format produced by `Display`. The whitespace between the
/// number and the unit is optional and the number may have a fractional part,
/// which is rounded to the nearest microsecond. Values which are too large
/// saturate to the infinities.
impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDurationError::Empty);
        }

        let split = s.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len();
        let (number, unit) = s.split_at(split);
        let number = number.trim_end();

        if unit.is_empty() {
            return Err(ParseDurationError::MissingUnit);
        }

        let unit = match unit {
            "s" => Unit::Seconds,
            "ms" => Unit::Millis,
            "us" => Unit::Micros,
            _ => return Err(ParseDurationError::UnknownUnit),
        };

        match number {
            "inf" | "+inf" => return Ok(Duration::PLUS_INFINITY),
            "-inf" => return Ok(Duration::MINUS_INFINITY),
            _ => {}
        }

        if let Ok(value) = number.parse::<i64>() {
            return Ok(unit.integer(value));
        }

        match number.parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(unit.float(value)),
            _ => Err(ParseDurationError::InvalidNumber),
        }
    }
}
