//! NOAA low-precision solar event algorithm.
//!
//! Computes the sun's apparent declination and the equation of time once per date, then
//! turns any number of depression angles into hour angles and UTC event times. Accuracy
//! is about one minute for dates within a few centuries of J2000.0, which is what the
//! NOAA solar calculator spreadsheet achieves with the same series.
//!
//! Reference: Meeus, J. (1998). Astronomical Algorithms, 2nd ed., chapters 25 and 28, as
//! simplified by the NOAA Global Monitoring Laboratory solar calculator.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    abs, acos, asin, cos, degrees_to_radians, normalize_day_fraction, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::CalendarDate;
use crate::types::{DayKind, Depression, EventPair, EventTime, EventTimes, GeoCoordinate};

/// Below this value of `cos(latitude)·cos(declination)` the hour angle is undefined.
const POLE_SINGULARITY_LIMIT: f64 = 1e-10;

/// Minutes per day, for converting the equation of time to a day fraction.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Sun position quantities for one date at 12:00 UTC.
///
/// Independent of the observer, so a single value serves every location and every
/// depression angle on that date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    julian_century: f64,
    mean_longitude: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    apparent_longitude: f64,
    obliquity: f64,
    declination: f64,
    equation_of_time: f64,
}

impl SolarPosition {
    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Geometric mean longitude of the sun in degrees, reduced modulo 360.
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Mean anomaly of the sun in degrees (not reduced).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Eccentricity of Earth's orbit.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Apparent ecliptic longitude of the sun in degrees (nutation and aberration applied).
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Corrected obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn obliquity(&self) -> f64 {
        self.obliquity
    }

    /// Apparent declination of the sun in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Calculate the sun's declination and equation of time for a date at noon UTC.
///
/// # Example
/// ```
/// use solar_zmanim::{noaa, CalendarDate};
///
/// let position = noaa::solar_position(CalendarDate::new(2024, 6, 21).unwrap());
/// assert!((position.declination() - 23.44).abs() < 0.01);
/// assert!(position.equation_of_time() < 0.0);
/// ```
#[must_use]
pub fn solar_position(date: CalendarDate) -> SolarPosition {
    let jc = date.julian_century();

    // Geometric mean longitude keeps the sign of the truncating remainder
    let l0 = polynomial(&[280.46646, 36000.76983, 0.0003032], jc) % 360.0;
    let m = polynomial(&[357.52911, 35999.05029, -0.0001537], jc);
    let e = polynomial(&[0.016708634, -0.000042037, -0.0000001267], jc);

    let m_rad = degrees_to_radians(m);
    let center = sin(m_rad) * polynomial(&[1.914602, -0.004817, -0.000014], jc)
        + sin(2.0 * m_rad) * polynomial(&[0.019993, -0.000101], jc)
        + sin(3.0 * m_rad) * 0.000289;
    let true_longitude = l0 + center;

    let node = degrees_to_radians(125.04 - 1934.136 * jc);
    let lambda = true_longitude - 0.00569 - 0.00478 * sin(node);

    let arcseconds = polynomial(&[21.448, -46.8150, -0.00059, 0.001813], jc);
    let epsilon0 = 23.0 + (26.0 + arcseconds / 60.0) / 60.0;
    let epsilon = epsilon0 + 0.00256 * cos(node);

    let epsilon_rad = degrees_to_radians(epsilon);
    let declination =
        radians_to_degrees(asin(sin(epsilon_rad) * sin(degrees_to_radians(lambda))));

    let y = tan(epsilon_rad / 2.0) * tan(epsilon_rad / 2.0);
    let l0_rad = degrees_to_radians(l0);
    let equation_of_time = 4.0
        * radians_to_degrees(
            y * sin(2.0 * l0_rad) - 2.0 * e * sin(m_rad)
                + 4.0 * e * y * sin(m_rad) * cos(2.0 * l0_rad)
                - 0.5 * y * y * sin(4.0 * l0_rad)
                - 1.25 * e * e * sin(2.0 * m_rad),
        );

    log::trace!(
        "solar position for {date}: jc={jc:.9} declination={declination:.6}° eot={equation_of_time:.4}min"
    );

    SolarPosition {
        julian_century: jc,
        mean_longitude: l0,
        mean_anomaly: m,
        eccentricity: e,
        apparent_longitude: lambda,
        obliquity: epsilon,
        declination,
        equation_of_time,
    }
}

/// Calculate the hour angle at which the sun reaches a zenith angle.
///
/// `cos H = (cos z − sin φ · sin δ) / (cos φ · cos δ)`
///
/// # Arguments
/// * `declination` - Solar declination in degrees
/// * `latitude` - Observer latitude in degrees
/// * `zenith` - Zenith angle of the event in degrees (`90 + depression`)
///
/// # Returns
/// Half-arc between solar noon and the crossing in degrees (0 to 180), or `None` if the
/// sun never reaches that zenith angle on this date (always above or always below it),
/// or the observer sits on the pole singularity where the formula is undefined.
///
/// # Example
/// ```
/// use solar_zmanim::noaa::hour_angle;
///
/// // Equinox at the equator: the geometric horizon is a quarter turn from noon
/// assert!((hour_angle(0.0, 0.0, 90.0).unwrap() - 90.0).abs() < 1e-9);
/// // The sun is never within 5° of the zenith at latitude 45° on the equinox
/// assert_eq!(hour_angle(0.0, 45.0, 5.0), None);
/// ```
#[must_use]
pub fn hour_angle(declination: f64, latitude: f64, zenith: f64) -> Option<f64> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);

    let denominator = cos(phi) * cos(delta);
    if abs(denominator) < POLE_SINGULARITY_LIMIT {
        return None;
    }

    let cos_h = (cos(degrees_to_radians(zenith)) - sin(phi) * sin(delta)) / denominator;

    // > 1: sun stays below the threshold all day; < -1: stays above; NaN: garbage input
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    Some(radians_to_degrees(acos(cos_h)))
}

/// Calculate solar noon as a fraction of the UTC day.
///
/// `noon = 0.5 − longitude/360 − eot/1440`, wrapped into `[0, 1)`.
#[must_use]
pub fn solar_noon(position: &SolarPosition, longitude: f64) -> f64 {
    normalize_day_fraction(
        0.5 - longitude / 360.0 - position.equation_of_time / MINUTES_PER_DAY,
    )
}

/// Calculate the sun's altitude at local solar noon in degrees.
#[must_use]
pub fn noon_altitude(position: &SolarPosition, latitude: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(position.declination);
    let sin_altitude = sin(phi) * sin(delta) + cos(phi) * cos(delta);
    radians_to_degrees(asin(sin_altitude.clamp(-1.0, 1.0)))
}

/// Calculate solar noon, sunrise, sunset and optional dawn and dusk for one date.
///
/// Dawn is the morning crossing of the `dawn` depression, dusk the evening crossing of
/// the `dusk` depression. Neither is computed when its angle is `None`.
///
/// When the sun never crosses the standard horizon, the noon altitude decides between
/// polar night (dawn, sunrise, sunset and dusk all absent) and polar day (sunrise and
/// sunset absent, dawn and dusk evaluated on their own depression).
///
/// # Example
/// ```
/// use solar_zmanim::{noaa, CalendarDate, Depression, GeoCoordinate};
///
/// let jerusalem = GeoCoordinate::new(31.77509, 35.23269);
/// let date = CalendarDate::new(2024, 6, 21).unwrap();
/// let dawn = Some(Depression::Custom(16.1));
/// let dusk = Some(Depression::Custom(8.5));
/// let times = noaa::event_times(date, jerusalem, dawn, dusk);
///
/// let sunrise = times.sunrise.fraction().unwrap();
/// let sunset = times.sunset.fraction().unwrap();
/// assert!(sunrise > 0.0 && sunrise < 0.5);
/// assert!(sunset > 0.5 && sunset < 1.0);
/// assert!(times.dawn.unwrap().fraction().unwrap() < sunrise);
/// ```
#[must_use]
pub fn event_times(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    dawn: Option<Depression>,
    dusk: Option<Depression>,
) -> EventTimes {
    let position = solar_position(date);
    event_times_with_position(&position, coordinate, dawn, dusk)
}

/// Same as [`event_times`] but reuses a precomputed [`SolarPosition`].
///
/// Useful for sweeping many locations on one date.
#[must_use]
pub fn event_times_with_position(
    position: &SolarPosition,
    coordinate: GeoCoordinate,
    dawn: Option<Depression>,
    dusk: Option<Depression>,
) -> EventTimes {
    let latitude = coordinate.latitude();
    let noon = solar_noon(position, coordinate.longitude());

    let standard = hour_angle(position.declination, latitude, Depression::Standard.zenith());
    let day_kind = classify_day(position, latitude, standard);
    let sunrise_sunset = pair_from_hour_angle(noon, standard);

    let polar_night = day_kind == DayKind::PolarNight;
    let dawn = dawn.map(|depression| {
        if polar_night {
            EventTime::Absent
        } else {
            crossing(position, noon, latitude, depression).morning
        }
    });
    let dusk = dusk.map(|depression| {
        if polar_night {
            EventTime::Absent
        } else {
            crossing(position, noon, latitude, depression).evening
        }
    });

    EventTimes {
        solar_noon: EventTime::from_fraction(noon),
        sunrise: sunrise_sunset.morning,
        sunset: sunrise_sunset.evening,
        dawn,
        dusk,
        day_kind,
    }
}

/// Calculate morning and evening crossings for several depressions efficiently.
///
/// The solar position and solar noon are computed once and shared by every depression.
/// On a polar night every pair is absent, matching [`event_times`].
///
/// # Example
/// ```
/// use solar_zmanim::{noaa, CalendarDate, Depression, GeoCoordinate};
///
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// let toronto = GeoCoordinate::new(43.7167, -79.4333);
/// let depressions = [Depression::Standard, Depression::Civil, Depression::Custom(16.1)];
///
/// for (depression, pair) in noaa::crossings(date, toronto, depressions) {
///     println!("{depression:?}: {:?} / {:?}", pair.morning, pair.evening);
/// }
/// ```
pub fn crossings<I>(
    date: CalendarDate,
    coordinate: GeoCoordinate,
    depressions: I,
) -> impl Iterator<Item = (Depression, EventPair)>
where
    I: IntoIterator<Item = Depression>,
{
    let position = solar_position(date);
    let latitude = coordinate.latitude();
    let noon = solar_noon(&position, coordinate.longitude());
    let standard = hour_angle(position.declination, latitude, Depression::Standard.zenith());
    let polar_night = classify_day(&position, latitude, standard) == DayKind::PolarNight;

    depressions.into_iter().map(move |depression| {
        let pair = if polar_night {
            EventPair {
                morning: EventTime::Absent,
                evening: EventTime::Absent,
            }
        } else {
            crossing(&position, noon, latitude, depression)
        };
        (depression, pair)
    })
}

/// Morning and evening crossing of one depression around a known solar noon.
fn crossing(
    position: &SolarPosition,
    noon: f64,
    latitude: f64,
    depression: Depression,
) -> EventPair {
    pair_from_hour_angle(
        noon,
        hour_angle(position.declination, latitude, depression.zenith()),
    )
}

fn pair_from_hour_angle(noon: f64, hour_angle: Option<f64>) -> EventPair {
    match hour_angle {
        Some(h) => EventPair {
            morning: EventTime::from_fraction(normalize_day_fraction(noon - h / 360.0)),
            evening: EventTime::from_fraction(normalize_day_fraction(noon + h / 360.0)),
        },
        None => EventPair {
            morning: EventTime::Absent,
            evening: EventTime::Absent,
        },
    }
}

/// Decide regular day, polar day or polar night from the standard hour angle.
fn classify_day(position: &SolarPosition, latitude: f64, standard: Option<f64>) -> DayKind {
    if standard.is_some() {
        return DayKind::Regular;
    }

    let altitude = noon_altitude(position, latitude);
    let threshold = 90.0 - Depression::Standard.zenith();
    // a NaN altitude counts as night: no crossing can be computed from it anyway
    let day_kind = if altitude > threshold {
        DayKind::PolarDay
    } else {
        DayKind::PolarNight
    };

    log::debug!(
        "no standard sunrise at latitude {latitude}: noon altitude {altitude:.3}°, {day_kind:?}"
    );
    day_kind
}
