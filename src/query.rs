//! Caller-owned zmanim request.
//!
//! A [`ZmanimQuery`] bundles a city name, date and twilight angles, validates them and
//! runs the calculation. Nothing is cached between queries.

use crate::error::check_depression_angle;
use crate::locations::{DEFAULT_LOCATION, Location};
use crate::noaa;
use crate::seasonal::SeasonalHours;
use crate::time::CalendarDate;
use crate::types::{Depression, EventTimes, GeoCoordinate};
use crate::Result;

/// Dusk depression used when none is given, in degrees below the horizon.
pub const DEFAULT_DUSK_ANGLE: f64 = 5.0;

/// Input for one zmanim calculation.
///
/// # Example
/// ```
/// # use solar_zmanim::{CalendarDate, ZmanimQuery};
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let report = ZmanimQuery::new(date)
///     .with_location("jerusalem")
///     .with_dawn(16.1)
///     .with_dusk(8.5)
///     .compute()
///     .unwrap();
///
/// assert_eq!(report.location().display_name(), "Jerusalem");
/// assert!(report.times().dawn.unwrap().is_present());
/// assert!(report.seasonal_hours().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZmanimQuery<'a> {
    /// City key, looked up case-insensitively
    pub location: &'a str,
    /// Calendar date of the calculation
    pub date: CalendarDate,
    /// Dawn depression in degrees, `None` to skip dawn
    pub dawn: Option<f64>,
    /// Dusk depression in degrees
    pub dusk: f64,
}

impl ZmanimQuery<'static> {
    /// Creates a query for `date` at the default location with the default dusk angle.
    #[must_use]
    pub const fn new(date: CalendarDate) -> Self {
        Self {
            location: DEFAULT_LOCATION,
            date,
            dawn: None,
            dusk: DEFAULT_DUSK_ANGLE,
        }
    }
}

impl ZmanimQuery<'_> {
    /// Replaces the city key.
    #[must_use]
    pub const fn with_location<'b>(self, location: &'b str) -> ZmanimQuery<'b> {
        ZmanimQuery {
            location,
            date: self.date,
            dawn: self.dawn,
            dusk: self.dusk,
        }
    }

    /// Requests a dawn time at `angle` degrees below the horizon.
    #[must_use]
    pub const fn with_dawn(mut self, angle: f64) -> Self {
        self.dawn = Some(angle);
        self
    }

    /// Sets the dusk angle in degrees below the horizon.
    #[must_use]
    pub const fn with_dusk(mut self, angle: f64) -> Self {
        self.dusk = angle;
        self
    }

    /// Checks the query and resolves its location.
    ///
    /// # Errors
    /// Returns `UnknownLocation` if the city is not in the table, and
    /// `InvalidDepressionAngle` if the dusk or dawn angle is NaN or outside 0 to 90 degrees.
    pub fn validate(&self) -> Result<Location> {
        let location = Location::lookup(self.location)?;
        check_depression_angle(self.dusk)?;
        if let Some(dawn) = self.dawn {
            check_depression_angle(dawn)?;
        }
        Ok(location)
    }

    /// Validates the query and computes its event times.
    ///
    /// # Errors
    /// Same as [`validate`](Self::validate).
    pub fn compute(&self) -> Result<ZmanimReport> {
        let location = self.validate()?;
        log::debug!(
            "computing zmanim for {} on {} (dawn {:?}, dusk {})",
            location.key(),
            self.date,
            self.dawn,
            self.dusk
        );

        let times = noaa::event_times(
            self.date,
            location.coordinate(),
            self.dawn.map(Depression::Custom),
            Some(Depression::Custom(self.dusk)),
        );

        Ok(ZmanimReport {
            location,
            date: self.date,
            times,
            seasonal_hours: SeasonalHours::from_times(&times),
        })
    }
}

/// Result of [`ZmanimQuery::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZmanimReport {
    location: Location,
    date: CalendarDate,
    times: EventTimes,
    seasonal_hours: Option<SeasonalHours>,
}

impl ZmanimReport {
    /// Resolved location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// Calculation date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Observer coordinate of the location.
    #[must_use]
    pub const fn coordinate(&self) -> GeoCoordinate {
        self.location.coordinate()
    }

    /// Event times as UTC day fractions.
    #[must_use]
    pub const fn times(&self) -> &EventTimes {
        &self.times
    }

    /// Seasonal hours, `None` when sunrise or sunset is absent.
    #[must_use]
    pub const fn seasonal_hours(&self) -> Option<SeasonalHours> {
        self.seasonal_hours
    }

    /// Converts the event times to the location's local wall-clock time.
    ///
    /// # Errors
    /// Returns `UnknownTimeZone` if the location's timezone is unknown to `chrono-tz`.
    #[cfg(feature = "tz")]
    pub fn local_times(&self) -> Result<LocalEventTimes> {
        let timezone = self.location.timezone_id();
        let convert = |event: crate::EventTime| event.to_local(self.date, timezone);

        Ok(LocalEventTimes {
            solar_noon: convert(self.times.solar_noon)?,
            sunrise: convert(self.times.sunrise)?,
            sunset: convert(self.times.sunset)?,
            dawn: self.times.dawn.map(convert).transpose()?.flatten(),
            dusk: self.times.dusk.map(convert).transpose()?.flatten(),
        })
    }
}

/// Event times in local wall-clock time. `None` marks an absent or unrequested event.
#[cfg(feature = "tz")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalEventTimes {
    /// Solar transit
    pub solar_noon: Option<chrono::DateTime<chrono_tz::Tz>>,
    /// Standard sunrise
    pub sunrise: Option<chrono::DateTime<chrono_tz::Tz>>,
    /// Standard sunset
    pub sunset: Option<chrono::DateTime<chrono_tz::Tz>>,
    /// Dawn at the requested depression
    pub dawn: Option<chrono::DateTime<chrono_tz::Tz>>,
    /// Dusk at the requested depression
    pub dusk: Option<chrono::DateTime<chrono_tz::Tz>>,
}
