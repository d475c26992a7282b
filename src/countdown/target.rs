//! Countdown target parsing

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use super::Remaining;
use crate::error::CountdownError;

/// Accepted layouts for a target without an offset; read as host-local time
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The instant a countdown runs toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountdownTarget(DateTime<Utc>);

impl CountdownTarget {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 timestamp, or a naive timestamp in local time.
    pub fn parse(input: &str) -> Result<Self, CountdownError> {
        let input = input.trim();

        if let Ok(at) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(at.with_timezone(&Utc)));
        }

        let naive = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .ok_or_else(|| CountdownError::InvalidTarget(input.to_string()))?;

        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|at| Self(at.with_timezone(&Utc)))
            .ok_or_else(|| CountdownError::NonexistentLocalTime(input.to_string()))
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        now >= self.0
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> Remaining {
        Remaining::between(self.0, now)
    }
}

impl FromStr for CountdownTarget {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CountdownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let target = CountdownTarget::parse("2025-05-15T09:00:00+05:30").unwrap();
        assert_eq!(
            target.instant(),
            Utc.with_ymd_and_hms(2025, 5, 15, 3, 30, 0).unwrap()
        );
    }

    #[test]
    fn naive_targets_are_local_time() {
        let target: CountdownTarget = "2025-05-15T09:00:00".parse().unwrap();
        let naive = NaiveDateTime::parse_from_str("2025-05-15T09:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let expected = Local.from_local_datetime(&naive).earliest().unwrap();
        assert_eq!(target.instant(), expected.with_timezone(&Utc));

        assert_eq!(
            CountdownTarget::parse(" 2025-05-15 09:00 ").unwrap(),
            target
        );
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "soon", "2025-13-40T09:00:00", "15/05/2025"] {
            assert_eq!(
                CountdownTarget::parse(input),
                Err(CountdownError::InvalidTarget(input.to_string())),
                "input {input:?}"
            );
        }
    }
}
