//! Remaining-time breakdown

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Time left until a target, split into whole days, hours, minutes and seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Compute the breakdown for `target - now`.
    ///
    /// Sub-second remainders are truncated. Anything at or past the target
    /// clamps to [`Remaining::ZERO`].
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let difference = target.signed_duration_since(now);
        if difference <= Duration::zero() {
            return Self::ZERO;
        }

        // num_seconds truncates toward zero, which is floor for a positive delta
        Self::from_seconds(difference.num_seconds().unsigned_abs())
    }

    /// Split a whole number of seconds with a 24-hour day
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn origin() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn splits_with_a_24_hour_day() {
        let target = origin() + Duration::days(13) + Duration::hours(21) + Duration::minutes(4) + Duration::seconds(9);
        assert_eq!(
            Remaining::between(target, origin()),
            Remaining { days: 13, hours: 21, minutes: 4, seconds: 9 }
        );
    }

    #[test]
    fn truncates_partial_seconds() {
        let target = origin() + Duration::milliseconds(61_999);
        assert_eq!(
            Remaining::between(target, origin()),
            Remaining { days: 0, hours: 0, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn clamps_at_and_after_target() {
        assert!(Remaining::between(origin(), origin()).is_zero());
        assert!(Remaining::between(origin(), origin() + Duration::days(400)).is_zero());
    }

    proptest! {
        #[test]
        fn components_sum_to_whole_seconds(millis in 1i64..(5 * 365 * 86_400_000)) {
            let target = origin() + Duration::milliseconds(millis);
            let remaining = Remaining::between(target, origin());

            prop_assert_eq!(remaining.total_seconds(), (millis / 1000) as u64);
            prop_assert!(remaining.hours < 24);
            prop_assert!(remaining.minutes < 60);
            prop_assert!(remaining.seconds < 60);
        }

        #[test]
        fn past_targets_are_zero(millis in 0i64..(5 * 365 * 86_400_000)) {
            let now = origin() + Duration::milliseconds(millis);
            prop_assert_eq!(Remaining::between(origin(), now), Remaining::ZERO);
        }
    }
}
