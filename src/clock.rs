//! Host-clock adapter: resolving a [`SystemTime`] into a calendar date.

use crate::CivilDate;
use crate::consts::UNIX_EPOCH_DAY_NUMBER;
use crate::julian;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// Error type for host-clock resolution.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The system clock reports a time before the Unix epoch.
    #[error("failed to resolve the system clock: {0}")]
    BeforeEpoch(#[from] SystemTimeError),

    /// The system clock resolves to a date after the supported year range.
    #[error("system clock resolves to a date after the supported year range")]
    OutOfRange,
}

impl CivilDate {
    /// Today's date in UTC according to the system clock.
    ///
    /// # Errors
    /// Returns a `ClockError` when the clock cannot be resolved to an
    /// admissible date.
    pub fn today() -> Result<Self, ClockError> {
        Self::try_from(SystemTime::now())
    }
}

impl TryFrom<SystemTime> for CivilDate {
    type Error = ClockError;

    /// Resolves a timestamp to its UTC calendar date.
    ///
    /// The timestamp is measured in whole days from the Unix epoch and
    /// range-checked before conversion, so the clamping fallback of
    /// [`CivilDate::from_day_number`] never engages here.
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(timestamp: SystemTime) -> Result<Self, Self::Error> {
        let elapsed = timestamp.duration_since(UNIX_EPOCH)?;
        let days = elapsed.as_secs() / SECONDS_PER_DAY;

        let day_number = i64::try_from(days)
            .ok()
            .and_then(|d| d.checked_add(i64::from(UNIX_EPOCH_DAY_NUMBER)))
            .ok_or(ClockError::OutOfRange)?;
        if day_number > i64::from(julian::MAX_DAY_NUMBER) {
            return Err(ClockError::OutOfRange);
        }

        Ok(Self::from_day_number(day_number as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unix_epoch_is_first_of_1970() {
        let d = CivilDate::try_from(UNIX_EPOCH).unwrap();
        assert_eq!(d, CivilDate::from_clamped(1, 1, 1970));
        assert_eq!(d.weekday(), crate::Weekday::Thursday);
    }

    #[test]
    fn test_partial_day_still_same_date() {
        let late_evening = UNIX_EPOCH + Duration::from_secs(SECONDS_PER_DAY - 1);
        let d = CivilDate::try_from(late_evening).unwrap();
        assert_eq!(d, CivilDate::from_clamped(1, 1, 1970));
    }

    #[test]
    fn test_whole_days_advance_the_date() {
        let ten_days_in = UNIX_EPOCH + Duration::from_secs(10 * SECONDS_PER_DAY);
        let d = CivilDate::try_from(ten_days_in).unwrap();
        assert_eq!(d, CivilDate::from_clamped(11, 1, 1970));

        // 1972 is the first leap year after the epoch.
        let into_1972 = UNIX_EPOCH + Duration::from_secs((365 * 2 + 59) * SECONDS_PER_DAY);
        let d = CivilDate::try_from(into_1972).unwrap();
        assert_eq!(d, CivilDate::from_clamped(29, 2, 1972));
    }

    #[test]
    fn test_pre_epoch_clock_fails() {
        let before = UNIX_EPOCH.checked_sub(Duration::from_secs(1)).unwrap();
        assert!(matches!(
            CivilDate::try_from(before),
            Err(ClockError::BeforeEpoch(_))
        ));
    }

    #[test]
    fn test_far_future_clock_fails() {
        let last_supported_day = u64::try_from(julian::MAX_DAY_NUMBER - UNIX_EPOCH_DAY_NUMBER).unwrap();
        let beyond = UNIX_EPOCH + Duration::from_secs((last_supported_day + 1) * SECONDS_PER_DAY);
        assert!(matches!(CivilDate::try_from(beyond), Err(ClockError::OutOfRange)));

        let at_edge = UNIX_EPOCH + Duration::from_secs(last_supported_day * SECONDS_PER_DAY);
        assert_eq!(CivilDate::try_from(at_edge).unwrap(), CivilDate::MAX);
    }

    #[test]
    fn test_today_resolves() {
        let today = CivilDate::today().unwrap();
        assert!(today >= CivilDate::from_clamped(1, 1, 2020));
        assert!(today <= CivilDate::MAX);
    }
}
