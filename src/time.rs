//! Calendar dates and Julian Day arithmetic.
//!
//! Dates are proleptic Gregorian and are always evaluated at 12:00 UTC, which is the
//! instant the low-precision solar position is computed for.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// A proleptic Gregorian calendar date, evaluated at noon UTC.
///
/// # Example
/// ```
/// # use solar_zmanim::CalendarDate;
/// let date = CalendarDate::new(2000, 1, 1).unwrap();
/// assert_eq!(date.julian_day(), 2_451_545.0);
/// assert_eq!(date.julian_century(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date from year, month and day.
    ///
    /// # Arguments
    /// * `year` - Year (astronomical numbering, can be zero or negative)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31, limited by the month length)
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in
    /// that month of the proleptic Gregorian calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a calendar date from any chrono date-like value.
    ///
    /// Only the calendar fields are used; a `DateTime` contributes its own local date,
    /// not the UTC date of its instant.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_date_like<D: Datelike>(date: D) -> Self {
        // chrono already guarantees a valid proleptic Gregorian date
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Converts to a chrono `NaiveDate`.
    ///
    /// Returns `None` only for years outside chrono's supported range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day of 12:00 UTC on this date.
    ///
    /// January and February count as months 13 and 14 of the previous year, and the
    /// Gregorian century correction is applied for every date.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        let (y, m) = if self.month <= 2 {
            (f64::from(self.year) - 1.0, f64::from(self.month) + 12.0)
        } else {
            (f64::from(self.year), f64::from(self.month))
        };

        let a = floor(y / 100.0);
        let b = 2.0 - a + floor(a / 4.0);

        // -1524.5 lands on midnight, the extra half day moves it to noon
        floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(self.day) + b
            - 1524.5
            + 0.5
    }

    /// Julian centuries elapsed since J2000.0 at noon UTC on this date.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.julian_day() - J2000_JDN) / DAYS_PER_CENTURY
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::from_date_like(date)
    }
}

impl core::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_j2000_epoch() {
        let date = CalendarDate::new(2000, 1, 1).unwrap();
        assert!((date.julian_day() - J2000_JDN).abs() < EPSILON);
        assert!(date.julian_century().abs() < EPSILON);
    }

    #[test]
    fn test_specific_julian_days() {
        // Unix epoch, noon
        let date = CalendarDate::new(1970, 1, 1).unwrap();
        assert!((date.julian_day() - 2_440_588.0).abs() < 1e-6);

        // Leap day falls between Feb 28 and Mar 1
        let feb28 = CalendarDate::new(2024, 2, 28).unwrap().julian_day();
        let feb29 = CalendarDate::new(2024, 2, 29).unwrap().julian_day();
        let mar01 = CalendarDate::new(2024, 3, 1).unwrap().julian_day();
        assert_eq!(feb29 - feb28, 1.0);
        assert_eq!(mar01 - feb29, 1.0);

        // Year boundary
        let dec31 = CalendarDate::new(1999, 12, 31).unwrap().julian_day();
        assert_eq!(J2000_JDN - dec31, 1.0);
    }

    #[test]
    fn test_proleptic_gregorian_has_no_1582_gap() {
        let oct04 = CalendarDate::new(1582, 10, 4).unwrap().julian_day();
        let oct10 = CalendarDate::new(1582, 10, 10).unwrap().julian_day();
        let oct15 = CalendarDate::new(1582, 10, 15).unwrap().julian_day();
        assert_eq!(oct10 - oct04, 6.0);
        assert_eq!(oct15 - oct04, 11.0);
    }

    #[test]
    fn test_julian_century_sign() {
        let before = CalendarDate::new(1950, 6, 1).unwrap();
        let after = CalendarDate::new(2050, 6, 1).unwrap();
        assert!(before.julian_century() < 0.0);
        assert!(after.julian_century() > 0.0);
        assert!((after.julian_century() - 0.5042).abs() < 1e-3);
    }

    #[test]
    fn test_date_validation() {
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
        assert!(CalendarDate::new(2024, 1, 32).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(1500, 2, 29).is_err());
    }

    #[test]
    fn test_accessors_and_display() {
        let date = CalendarDate::new(987, 3, 5).unwrap();
        assert_eq!(date.year(), 987);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 5);
        #[cfg(feature = "std")]
        assert_eq!(date.to_string(), "0987-03-05");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_from_date_like() {
        use chrono::{DateTime, FixedOffset, NaiveDate};

        let naive = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let expected = CalendarDate::new(2024, 6, 21).unwrap();
        assert_eq!(CalendarDate::from_date_like(naive), expected);
        assert_eq!(CalendarDate::from(naive), expected);
        assert_eq!(expected.to_naive_date(), Some(naive));

        // The local calendar date is used, not the UTC date of the instant
        let late_evening = "2024-06-21T23:30:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(CalendarDate::from_date_like(late_evening), expected);
    }
}
