//! Seasonal (proportional) hours.
//!
//! Daylight from sunrise to sunset is divided into twelve equal parts, and halachic
//! markers are placed a fixed number of those parts after sunrise. The hour is longer in
//! summer and shorter in winter, hence "seasonal".

use crate::math::normalize_day_fraction;
use crate::types::{EventTime, EventTimes};

/// Proportional daytime markers, in seasonal hours after sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProportionalMarker {
    /// Latest time for the morning Shema (3 hours)
    EndOfShema,
    /// Latest time for the morning prayer (4 hours)
    EndOfTefillah,
    /// Earliest afternoon prayer, Mincha Gedola (6.5 hours)
    MinchaGedola,
    /// Mincha Ketana (9.5 hours)
    MinchaKetana,
    /// Plag HaMincha (10.75 hours)
    PlagHamincha,
    /// Any other offset in seasonal hours
    Custom(f64),
}

impl ProportionalMarker {
    /// Offset from sunrise in seasonal hours.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        match self {
            Self::EndOfShema => 3.0,
            Self::EndOfTefillah => 4.0,
            Self::MinchaGedola => 6.5,
            Self::MinchaKetana => 9.5,
            Self::PlagHamincha => 10.75,
            Self::Custom(hours) => *hours,
        }
    }
}

/// One twelfth of the daylight span of a specific day.
///
/// # Example
/// ```
/// # use solar_zmanim::{EventTime, SeasonalHours};
/// let hours = SeasonalHours::from_events(EventTime::Present(0.25), EventTime::Present(0.75))
///     .unwrap();
/// assert!((hours.hour_length() - 0.5 / 12.0).abs() < 1e-15);
/// let midday = hours.at(6.0).fraction().unwrap();
/// assert!((midday - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonalHours {
    sunrise: f64,
    hour_length: f64,
}

impl SeasonalHours {
    /// Builds the subdivision from sunrise and sunset.
    ///
    /// A sunset that wrapped to before sunrise in UTC (far-east or far-west longitudes)
    /// is taken to fall on the following UTC day. Returns `None` unless both events occur.
    #[must_use]
    pub fn from_events(sunrise: EventTime, sunset: EventTime) -> Option<Self> {
        let sunrise = sunrise.fraction()?;
        let sunset = sunset.fraction()?;

        let mut daylight = sunset - sunrise;
        if daylight < 0.0 {
            daylight += 1.0;
        }

        Some(Self {
            sunrise,
            hour_length: daylight / 12.0,
        })
    }

    /// Builds the subdivision from a day's standard sunrise and sunset.
    #[must_use]
    pub fn from_times(times: &EventTimes) -> Option<Self> {
        Self::from_events(times.sunrise, times.sunset)
    }

    /// Sunrise as a fraction of the UTC day.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Length of one seasonal hour as a fraction of a day.
    #[must_use]
    pub const fn hour_length(&self) -> f64 {
        self.hour_length
    }

    /// Total daylight as a fraction of a day.
    #[must_use]
    pub fn daylight(&self) -> f64 {
        self.hour_length * 12.0
    }

    /// Time `hours` seasonal hours after sunrise, wrapped into the UTC day.
    #[must_use]
    pub fn at(&self, hours: f64) -> EventTime {
        EventTime::from_fraction(normalize_day_fraction(self.sunrise + hours * self.hour_length))
    }

    /// Time of a named proportional marker.
    #[must_use]
    pub fn marker(&self, marker: ProportionalMarker) -> EventTime {
        self.at(marker.hours())
    }
}
