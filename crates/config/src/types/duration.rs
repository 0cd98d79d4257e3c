//! Human-readable duration type for configuration values.
//!
//! Responsibilities:
//! - Parse textual spans such as `"30s"`, `"2m30s"` or `"1.5h"` into a `Duration`.
//! - Render durations back into the same textual form.
//! - Serialize and deserialize as JSON strings.
//!
//! Does NOT handle:
//! - Negative spans (rejected; configuration timeouts are unsigned).
//! - Calendar units such as days or months.
//!
//! Invariants:
//! - `"0"` is the only unit-less value accepted.
//! - Parsing the `Display` output yields the same `Duration`.
//! - JSON numbers are rejected; only strings are accepted.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Largest span representable by `Duration`, in nanoseconds.
const MAX_NANOS: u128 = (u64::MAX as u128) * NANOS_PER_SEC + (NANOS_PER_SEC - 1);

/// Error returned when a duration string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid duration {input:?}: {reason}")]
pub struct DurationParseError {
    /// The rejected input, verbatim.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl DurationParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A time span written in human-readable form, e.g. `"10s"` or `"2m30s"`.
///
/// The zero value (`HumanDuration::default()`) is an empty span and is what a
/// configuration field holds when neither the file nor the environment sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HumanDuration(Duration);

impl HumanDuration {
    pub const ZERO: HumanDuration = HumanDuration(Duration::ZERO);

    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for HumanDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<HumanDuration> for Duration {
    fn from(duration: HumanDuration) -> Self {
        duration.0
    }
}

/// Nanoseconds per unit suffix. Longer suffixes come first so `ms` wins over `m`.
fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

impl FromStr for HumanDuration {
    type Err = DurationParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut rest = input.strip_prefix('+').unwrap_or(input);
        if rest.starts_with('-') {
            return Err(DurationParseError::new(input, "negative durations are not supported"));
        }
        if rest == "0" {
            return Ok(Self::ZERO);
        }
        if rest.is_empty() {
            return Err(DurationParseError::new(input, "empty duration"));
        }

        let mut total: u128 = 0;
        while !rest.is_empty() {
            let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            let (int_part, after_int) = rest.split_at(int_len);

            let (frac_part, after_number) = match after_int.strip_prefix('.') {
                Some(after_dot) => {
                    let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
                    after_dot.split_at(frac_len)
                }
                None => ("", after_int),
            };
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(DurationParseError::new(input, "expected a number"));
            }

            let unit_len = after_number
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(after_number.len());
            let (unit, remaining) = after_number.split_at(unit_len);
            if unit.is_empty() {
                return Err(DurationParseError::new(input, "missing unit"));
            }
            let scale = unit_nanos(unit)
                .ok_or_else(|| DurationParseError::new(input, "unknown unit"))?;

            let whole: u128 = if int_part.is_empty() {
                0
            } else {
                int_part
                    .parse()
                    .map_err(|_| DurationParseError::new(input, "value out of range"))?
            };
            let mut nanos = whole
                .checked_mul(scale)
                .ok_or_else(|| DurationParseError::new(input, "value out of range"))?;

            // Digits past nanosecond precision are truncated.
            let mut place = scale;
            for digit in frac_part.bytes() {
                place /= 10;
                if place == 0 {
                    break;
                }
                nanos = nanos
                    .checked_add(u128::from(digit - b'0') * place)
                    .ok_or_else(|| DurationParseError::new(input, "value out of range"))?;
            }

            total = total
                .checked_add(nanos)
                .filter(|t| *t <= MAX_NANOS)
                .ok_or_else(|| DurationParseError::new(input, "value out of range"))?;
            rest = remaining;
        }

        let secs = (total / NANOS_PER_SEC) as u64;
        let subsec = (total % NANOS_PER_SEC) as u32;
        Ok(Self(Duration::new(secs, subsec)))
    }
}

/// Writes `value / scale` with the remainder as a trimmed decimal fraction.
fn write_scaled(f: &mut fmt::Formatter<'_>, value: u128, scale: u128, unit: &str) -> fmt::Result {
    write!(f, "{}", value / scale)?;
    let mut remainder = value % scale;
    if remainder != 0 {
        let mut digits = String::new();
        let mut place = scale;
        while remainder != 0 {
            place /= 10;
            digits.push(char::from(b'0' + (remainder / place) as u8));
            remainder %= place;
        }
        write!(f, ".{digits}")?;
    }
    f.write_str(unit)
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos == 0 {
            return f.write_str("0s");
        }
        if nanos < NANOS_PER_MICRO {
            return write!(f, "{nanos}ns");
        }
        if nanos < NANOS_PER_MILLI {
            return write_scaled(f, nanos, NANOS_PER_MICRO, "\u{00b5}s");
        }
        if nanos < NANOS_PER_SEC {
            return write_scaled(f, nanos, NANOS_PER_MILLI, "ms");
        }

        let hours = nanos / NANOS_PER_HOUR;
        let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
        let seconds = nanos % NANOS_PER_MINUTE;
        if hours > 0 {
            write!(f, "{hours}h{minutes}m")?;
        } else if minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write_scaled(f, seconds, NANOS_PER_SEC, "s")
    }
}

impl Serialize for HumanDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct HumanDurationVisitor;

impl Visitor<'_> for HumanDurationVisitor {
    type Value = HumanDuration;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a duration string such as \"30s\" or \"2m30s\"")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for HumanDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(HumanDurationVisitor)
    }
}
