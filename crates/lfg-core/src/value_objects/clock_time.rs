//! Clock time - wall-clock `HH:MM` stored as minutes since midnight
//!
//! Ads carry an availability window expressed as two clock times. The API
//! speaks `HH:MM` strings, the database stores the integer minute offset.
//!
//! - `encode("08:00") == 480`
//! - `decode(480) == "08:00"`
//!
//! Both directions reject values outside a single day (`00:00..=23:59`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one day; valid offsets are `0..MINUTES_PER_DAY`
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

/// Errors produced by the clock time codec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockTimeError {
    #[error("expected HH:MM, got {0:?}")]
    MissingSeparator(String),

    #[error("invalid number in clock time {0:?}")]
    InvalidNumber(String),

    #[error("clock time {0:?} is outside 00:00-23:59")]
    InvalidTime(String),

    #[error("minute offset {0} is outside 0-1439")]
    OutOfRange(i64),
}

impl ClockTime {
    /// Build from an hour/minute pair
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ClockTimeError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Build from a minute offset, rejecting anything outside one day
    pub fn from_minutes(minutes: i64) -> Result<Self, ClockTimeError> {
        u16::try_from(minutes)
            .ok()
            .filter(|m| *m < MINUTES_PER_DAY)
            .map(Self)
            .ok_or(ClockTimeError::OutOfRange(minutes))
    }

    /// Minutes since midnight, always in `0..1440`
    #[inline]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parse an `H:MM` / `HH:MM` string
    ///
    /// The hour may have one or two digits, the minute must have two.
    pub fn parse(s: &str) -> Result<Self, ClockTimeError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ClockTimeError::MissingSeparator(s.to_string()))?;

        let digits_ok = |part: &str, widths: &[usize]| {
            widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits_ok(hour, &[1, 2]) || !digits_ok(minute, &[2]) {
            return Err(ClockTimeError::InvalidNumber(s.to_string()));
        }

        let hour: u16 = hour
            .parse()
            .map_err(|_| ClockTimeError::InvalidNumber(s.to_string()))?;
        let minute: u16 = minute
            .parse()
            .map_err(|_| ClockTimeError::InvalidNumber(s.to_string()))?;

        Self::from_hm(hour, minute).map_err(|_| ClockTimeError::InvalidTime(s.to_string()))
    }
}

/// Convert an `HH:MM` string to minutes since midnight
pub fn encode(s: &str) -> Result<u16, ClockTimeError> {
    ClockTime::parse(s).map(ClockTime::minutes)
}

/// Convert minutes since midnight to a zero-padded `HH:MM` string
pub fn decode(minutes: i64) -> Result<String, ClockTimeError> {
    ClockTime::from_minutes(minutes).map(|t| t.to_string())
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i32> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::from_minutes(i64::from(minutes))
    }
}

impl From<ClockTime> for i32 {
    fn from(time: ClockTime) -> Self {
        i32::from(time.0)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
