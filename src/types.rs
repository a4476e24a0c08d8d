//! Core data types for solar event calculations.

use crate::error::{check_coordinates, check_depression_angle};
use crate::Result;
#[cfg(feature = "chrono")]
use crate::time::CalendarDate;

/// Depression of the standard sunrise/sunset horizon in degrees.
///
/// 50 arcminutes: 34' of refraction plus 16' for the radius of the solar disk.
pub const STANDARD_HORIZON_DEPRESSION: f64 = 50.0 / 60.0;

/// Geographic observer position in degrees.
///
/// Longitude is positive east of Greenwich, negative west.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate without range checks.
    ///
    /// Out-of-range or non-finite values flow into the trigonometry unchanged and
    /// typically surface as absent events.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate after validating latitude (±90°) and longitude (±180°).
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Solar depression below the horizon that defines an event.
///
/// The zenith angle used for the hour angle is `90° + depression`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Depression {
    /// Standard sunrise/sunset (upper limb on the horizon, with refraction)
    Standard,
    /// Civil twilight (sun is 6° below horizon)
    Civil,
    /// Nautical twilight (sun is 12° below horizon)
    Nautical,
    /// Astronomical twilight (sun is 18° below horizon)
    Astronomical,
    /// Custom depression angle in degrees below the horizon
    Custom(f64),
}

impl Depression {
    /// Gets the depression angle in degrees below the horizon.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Standard => STANDARD_HORIZON_DEPRESSION,
            Self::Civil => 6.0,
            Self::Nautical => 12.0,
            Self::Astronomical => 18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the zenith angle of the event in degrees (`90 + depression`).
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        90.0 + self.degrees()
    }

    /// Creates a custom depression after checking it lies in `[0, 90]` degrees.
    ///
    /// # Errors
    /// Returns `InvalidDepressionAngle` if the angle is NaN or outside 0 to 90 degrees.
    pub fn custom(angle: f64) -> Result<Self> {
        check_depression_angle(angle)?;
        Ok(Self::Custom(angle))
    }
}

impl Eq for Depression {}

impl core::hash::Hash for Depression {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Standard => 0.hash(state),
            Self::Civil => 1.hash(state),
            Self::Nautical => 2.hash(state),
            Self::Astronomical => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// Time of a solar event as a fraction of the UTC day, or its absence.
///
/// `Absent` means the sun does not cross the requested depression on that date at that
/// latitude (polar day, polar night, or a degenerate pole geometry).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTime {
    /// Event occurs at this fraction of the UTC day, in `[0, 1)`
    Present(f64),
    /// No such crossing on this date
    Absent,
}

impl EventTime {
    /// Wraps a fraction of day, mapping non-finite values to `Absent`.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_finite() {
            Self::Present(fraction)
        } else {
            Self::Absent
        }
    }

    /// Gets the UTC day fraction if the event occurs.
    #[must_use]
    pub const fn fraction(&self) -> Option<f64> {
        match self {
            Self::Present(fraction) => Some(*fraction),
            Self::Absent => None,
        }
    }

    /// Gets hours after midnight UTC (0.0 to < 24.0) if the event occurs.
    #[must_use]
    pub fn hours(&self) -> Option<f64> {
        self.fraction().map(|fraction| fraction * 24.0)
    }

    /// Checks if the event occurs on this date.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Checks if the event is absent on this date.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Converts the event to a UTC instant on the given calendar date.
    ///
    /// The fraction is truncated to whole milliseconds after 00:00 UTC.
    /// Returns `None` for absent events and for dates outside chrono's range.
    ///
    /// # Example
    /// ```
    /// # use solar_zmanim::{CalendarDate, EventTime};
    /// let date = CalendarDate::new(2024, 6, 21).unwrap();
    /// let utc = EventTime::Present(0.25).to_utc(date).unwrap();
    /// assert_eq!(utc.to_rfc3339(), "2024-06-21T06:00:00+00:00");
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_utc(&self, date: CalendarDate) -> Option<chrono::DateTime<chrono::Utc>> {
        const MS_PER_DAY: f64 = 86_400_000.0;

        let fraction = self.fraction()?;
        let midnight = date.to_naive_date()?.and_hms_opt(0, 0, 0)?.and_utc();
        let millis = (MS_PER_DAY * fraction) as i64;
        midnight.checked_add_signed(chrono::TimeDelta::try_milliseconds(millis)?)
    }

    /// Converts the event to local wall-clock time in an IANA timezone.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` if `timezone_id` is not in the timezone database.
    #[cfg(feature = "tz")]
    pub fn to_local(
        &self,
        date: CalendarDate,
        timezone_id: &str,
    ) -> Result<Option<chrono::DateTime<chrono_tz::Tz>>> {
        let tz = timezone_id
            .parse::<chrono_tz::Tz>()
            .map_err(|_| crate::Error::UnknownTimeZone)?;
        Ok(self.to_utc(date).map(|utc| utc.with_timezone(&tz)))
    }
}

/// Classification of a date at a location against the standard horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// Sun rises and sets
    Regular,
    /// Sun stays above the standard horizon all day
    PolarDay,
    /// Sun stays below the standard horizon all day
    PolarNight,
}

/// Morning and evening crossing of a single depression angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventPair {
    /// Crossing before solar noon (sunrise side)
    pub morning: EventTime,
    /// Crossing after solar noon (sunset side)
    pub evening: EventTime,
}

/// Event times for one date at one location.
///
/// All fields derive from the same declination and equation of time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTimes {
    /// Solar transit
    pub solar_noon: EventTime,
    /// Standard sunrise
    pub sunrise: EventTime,
    /// Standard sunset
    pub sunset: EventTime,
    /// Morning crossing of the dawn depression, `None` if no dawn angle was requested
    pub dawn: Option<EventTime>,
    /// Evening crossing of the dusk depression, `None` if no dusk angle was requested
    pub dusk: Option<EventTime>,
    /// Regular day, polar day or polar night
    pub day_kind: DayKind,
}

impl EventTimes {
    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self.day_kind, DayKind::Regular)
    }

    /// Checks if this represents a polar day (sun never sets).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self.day_kind, DayKind::PolarDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self.day_kind, DayKind::PolarNight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depression_angles() {
        assert!((Depression::Standard.degrees() - 0.833_333).abs() < 1e-6);
        assert!((Depression::Standard.zenith() - 90.833_333).abs() < 1e-6);
        assert_eq!(Depression::Civil.zenith(), 96.0);
        assert_eq!(Depression::Nautical.degrees(), 12.0);
        assert_eq!(Depression::Astronomical.degrees(), 18.0);

        let dusk = Depression::custom(8.5).unwrap();
        assert_eq!(dusk.degrees(), 8.5);
        assert_eq!(dusk.zenith(), 98.5);

        assert!(Depression::custom(-1.0).is_err());
        assert!(Depression::custom(91.0).is_err());
        assert!(Depression::custom(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_depression_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Depression::Custom(0.0));
        set.insert(Depression::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_geo_coordinate() {
        let jerusalem = GeoCoordinate::checked(31.77509, 35.23269).unwrap();
        assert_eq!(jerusalem.latitude(), 31.77509);
        assert_eq!(jerusalem.longitude(), 35.23269);

        assert!(GeoCoordinate::checked(91.0, 0.0).is_err());
        assert!(GeoCoordinate::checked(0.0, -181.0).is_err());

        // unchecked construction keeps whatever it is given
        let odd = GeoCoordinate::new(120.0, f64::NAN);
        assert_eq!(odd.latitude(), 120.0);
        assert!(odd.longitude().is_nan());
    }

    #[test]
    fn test_event_time() {
        let sunrise = EventTime::from_fraction(0.25);
        assert!(sunrise.is_present());
        assert_eq!(sunrise.fraction(), Some(0.25));
        assert_eq!(sunrise.hours(), Some(6.0));

        let never = EventTime::from_fraction(f64::NAN);
        assert!(never.is_absent());
        assert_eq!(never.fraction(), None);
        assert_eq!(never.hours(), None);
        assert_eq!(EventTime::from_fraction(f64::INFINITY), EventTime::Absent);
    }

    #[test]
    fn test_event_times_day_kind() {
        let times = EventTimes {
            solar_noon: EventTime::Present(0.5),
            sunrise: EventTime::Absent,
            sunset: EventTime::Absent,
            dawn: None,
            dusk: Some(EventTime::Absent),
            day_kind: DayKind::PolarNight,
        };
        assert!(times.is_polar_night());
        assert!(!times.is_polar_day());
        assert!(!times.is_regular_day());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_event_time_to_utc() {
        use chrono::{TimeZone, Utc};

        let date = CalendarDate::new(2024, 3, 10).unwrap();
        let noon = EventTime::Present(0.5).to_utc(date).unwrap();
        assert_eq!(noon, Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());

        // 0.1 day = 2h 24m; sub-millisecond remainder is truncated
        let early = EventTime::Present(0.1).to_utc(date).unwrap();
        assert_eq!(early, Utc.with_ymd_and_hms(2024, 3, 10, 2, 24, 0).unwrap());

        assert_eq!(EventTime::Absent.to_utc(date), None);
    }
}
