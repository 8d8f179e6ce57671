mod clock;
mod consts;
mod julian;
mod prelude;
mod random;
mod stream;
mod types;

pub use clock::ClockError;
pub use consts::*;
pub use stream::{ReadError, read_date};
pub use types::{Weekday, days_in_month, is_leap_year};

use crate::prelude::*;
use crate::types::month_length;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A calendar date in the proleptic Gregorian calendar.
///
/// A `CivilDate` is always valid: the month lies in `1..=12`, the day fits
/// the month's length for its year, and the year lies in
/// `YEAR_MIN..=YEAR_MAX`. Construction goes through one of two policies:
/// the clamping path ([`CivilDate::from_clamped`]) silently saturates
/// out-of-range fields, while the rejecting path ([`CivilDate::new`] and the
/// field setters) fails with [`DateError`] on an invalid month or day.
///
/// All arithmetic projects through the Julian Day Number
/// ([`CivilDate::to_day_number`]), so adding or subtracting days can never
/// produce an invalid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Please enter date in format: dd/mm/yyyy")]
    MissingSeparator,
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: i32, month: i32, year: i32 },
}

impl std::error::Error for DateError {}

impl CivilDate {
    /// Earliest supported date, 1900-01-01.
    pub const MIN: Self = Self {
        year: YEAR_MIN,
        month: 1,
        day: 1,
    };

    /// Latest supported date, 2199-12-31.
    pub const MAX: Self = Self {
        year: YEAR_MAX,
        month: 12,
        day: 31,
    };

    /// Creates a date by clamping each field into range: year into
    /// `YEAR_MIN..=YEAR_MAX`, month into `1..=12`, day into
    /// `1..=days_in_month`. Never fails; out-of-range input silently
    /// saturates to the nearest admissible value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_clamped(day: i32, month: i32, year: i32) -> Self {
        let year = year.clamp(YEAR_MIN, YEAR_MAX);
        let month = month.clamp(1, i32::from(MAX_MONTH)) as u8;
        let day = day.clamp(i32::from(MIN_DAY), i32::from(month_length(month, year))) as u8;
        Self { year, month, day }
    }

    /// Creates a date through the rejecting validation path.
    ///
    /// The year is clamped into the supported range; month and day are
    /// validated in that order, since day validity depends on both month
    /// and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`, and
    /// `DateError::InvalidDay` if `day` does not fit the month.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, DateError> {
        let year = year.clamp(YEAR_MIN, YEAR_MAX);
        if !(1..=i32::from(MAX_MONTH)).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        let month_u8 = month as u8;
        if !(1..=i32::from(month_length(month_u8, year))).contains(&day) {
            return Err(DateError::InvalidDay { day, month, year });
        }
        Ok(Self {
            year,
            month: month_u8,
            day: day as u8,
        })
    }

    /// Reconstructs a date from its Julian Day Number, saturating at the
    /// supported range edges.
    pub fn from_day_number(day_number: i32) -> Self {
        let (day, month, year) = julian::civil_from_day_number(
            day_number.clamp(julian::MIN_DAY_NUMBER, julian::MAX_DAY_NUMBER),
        );
        Self { year, month, day }
    }

    /// Julian Day Number of this date, the continuous day count underlying
    /// all arithmetic and exact inverse of [`CivilDate::from_day_number`].
    pub const fn to_day_number(self) -> i32 {
        julian::day_number_from_civil(self.day, self.month, self.year)
    }

    // --- accessors ---

    /// Day of the month, `1..=31`
    #[inline]
    pub const fn month_day(self) -> u8 {
        self.day
    }

    /// Month of the year, `1..=12`
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Year, `YEAR_MIN..=YEAR_MAX`
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// 1-based ordinal day within the year: 1 for January 1st, 365 or 366
    /// for December 31st.
    pub const fn year_day(self) -> u16 {
        let mut total = self.day as u16;
        let mut m = 1u8;
        while m < self.month {
            total += month_length(m, self.year) as u16;
            m += 1;
        }
        total
    }

    /// Day of the week, by Zeller's congruence (January and February are
    /// treated as months 13 and 14 of the previous year).
    pub const fn weekday(self) -> Weekday {
        let mut m = self.month as i32;
        let mut y = self.year;
        if m < 3 {
            m += 12;
            y -= 1;
        }

        let q = self.day as i32;
        let k = y % 100;
        let j = y / 100;
        let h = (q + 13 * (m + 1) / 5 + k + k / 4 + j / 4 + 5 * j) % 7;

        // Zeller counts 0 as Saturday; shift so Sunday sits at position 0.
        Weekday::from_index(((h + 6) % 7) as u8)
    }

    /// Length of this date's own month.
    pub const fn days_in_month(self) -> u8 {
        month_length(self.month, self.year)
    }

    /// Length of `month` in this date's year. Agrees exactly with the free
    /// [`days_in_month`] function for the same month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`.
    pub fn days_in_month_of(self, month: i32) -> Result<u8, DateError> {
        days_in_month(month, self.year)
    }

    // --- setters ---

    /// Replaces the whole value through the rejecting path. On failure the
    /// date is left unchanged.
    ///
    /// # Errors
    /// Same conditions as [`CivilDate::new`].
    pub fn set(&mut self, day: i32, month: i32, year: i32) -> Result<&mut Self, DateError> {
        *self = Self::new(day, month, year)?;
        Ok(self)
    }

    /// Sets the year, clamping it into the supported range. Leaving a leap
    /// February clamps the day down to the 28th.
    pub fn set_year(&mut self, year: i32) -> &mut Self {
        self.year = year.clamp(YEAR_MIN, YEAR_MAX);
        let len = month_length(self.month, self.year);
        if self.day > len {
            self.day = len;
        }
        self
    }

    /// Sets the month, rejecting values outside `1..=12` and months the
    /// current day of month does not fit.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_month(&mut self, month: i32) -> Result<&mut Self, DateError> {
        if !(1..=i32::from(MAX_MONTH)).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        let month_u8 = month as u8;
        if self.day > month_length(month_u8, self.year) {
            return Err(DateError::InvalidDay {
                day: i32::from(self.day),
                month,
                year: self.year,
            });
        }
        self.month = month_u8;
        Ok(self)
    }

    /// Sets the day of month, rejecting values that do not fit the current
    /// month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_month_day(&mut self, day: i32) -> Result<&mut Self, DateError> {
        if !(1..=i32::from(self.days_in_month())).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month: i32::from(self.month),
                year: self.year,
            });
        }
        self.day = day as u8;
        Ok(self)
    }

    // --- day arithmetic ---

    /// The date `days` later (earlier for negative `days`), saturating at
    /// the supported range edges.
    pub fn add_days(self, days: i32) -> Self {
        Self::from_day_number(self.to_day_number().saturating_add(days))
    }

    /// The following day.
    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn previous_day(self) -> Self {
        self.add_days(-1)
    }

    /// Advances one day in place and returns the updated value
    /// (pre-increment).
    pub fn increment(&mut self) -> Self {
        *self = self.next_day();
        *self
    }

    /// Advances one day in place and returns the value from before the
    /// step (post-increment).
    pub fn post_increment(&mut self) -> Self {
        let before = *self;
        *self = self.next_day();
        before
    }

    /// Steps back one day in place and returns the updated value
    /// (pre-decrement).
    pub fn decrement(&mut self) -> Self {
        *self = self.previous_day();
        *self
    }

    /// Steps back one day in place and returns the value from before the
    /// step (post-decrement).
    pub fn post_decrement(&mut self) -> Self {
        let before = *self;
        *self = self.previous_day();
        before
    }

    /// Canonical `dd/mm/yyyy` rendering, the form [`FromStr`] parses and
    /// serde serializes.
    pub fn to_dmy_string(self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl Default for CivilDate {
    /// The earliest supported date, 1900-01-01.
    fn default() -> Self {
        Self::MIN
    }
}

impl Add<i32> for CivilDate {
    type Output = Self;

    fn add(self, days: i32) -> Self {
        self.add_days(days)
    }
}

impl Add<CivilDate> for i32 {
    type Output = CivilDate;

    fn add(self, date: CivilDate) -> CivilDate {
        date.add_days(self)
    }
}

impl Sub<i32> for CivilDate {
    type Output = Self;

    fn sub(self, days: i32) -> Self {
        Self::from_day_number(self.to_day_number().saturating_sub(days))
    }
}

/// Signed whole-day difference between two dates.
impl Sub for CivilDate {
    type Output = i32;

    fn sub(self, other: Self) -> i32 {
        self.to_day_number() - other.to_day_number()
    }
}

impl AddAssign<i32> for CivilDate {
    fn add_assign(&mut self, days: i32) {
        *self = *self + days;
    }
}

impl SubAssign<i32> for CivilDate {
    fn sub_assign(&mut self, days: i32) {
        *self = *self - days;
    }
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic on (year, day of year); coincides with Julian Day
        // Number ordering over the whole supported range.
        (self.year, self.year_day()).cmp(&(other.year, other.year_day()))
    }
}

impl fmt::Display for CivilDate {
    /// Renders as `<day> <month name> <year> <weekday name>`,
    /// e.g. `23 April 2024 Tuesday`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.day,
            MONTH_NAMES[self.month as usize],
            self.year,
            self.weekday()
        )
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    /// Parses the exact `dd/mm/yyyy` form: three decimal fields of any
    /// width separated by exactly two slashes, validated through the
    /// rejecting path (month and day are never clamped).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::MissingSeparator);
        }

        let day = parse_field(parts[0])?;
        let month = parse_field(parts[1])?;
        let year = parse_field(parts[2])?;

        Self::new(day, month, year)
    }
}

// --- helpers for parsing ---
fn parse_field(s: &str) -> Result<i32, DateError> {
    s.parse::<i32>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_dmy_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
