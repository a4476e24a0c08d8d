//! # Solar Zmanim
//!
//! Low-precision solar event times (sunrise, solar noon, sunset, twilight at any
//! depression angle) and seasonal hours, based on the NOAA solar calculator equations.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For a calendar date and an observer's latitude and longitude the library computes
//! the sun's declination and the equation of time at 12:00 UTC, and from those the
//! moments at which the sun crosses a given depression below the horizon. Results are
//! fractions of the UTC day in `[0, 1)`.
//!
//! Dates where the sun never crosses a depression do not produce errors. The affected
//! events are [`EventTime::Absent`], and [`DayKind`] tells polar day from polar night.
//!
//! ## Features
//!
//! - Pure computation: no I/O, no global state, every type is plain `Copy` data
//! - `std` or `no_std`, with math via native functions or `libm`
//! - Optional chrono and timezone integration for turning day fractions into instants
//! - Built-in city table and a validated query type for the common "city, date, dusk
//!   angle" request
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Build dates from chrono types, convert events to `DateTime<Utc>`
//! - `tz`: Convert events to local wall-clock time through `chrono-tz`
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the data types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-zmanim = "0.1"
//!
//! # Local times for the built-in cities
//! solar-zmanim = { version = "0.1", features = ["tz"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-zmanim = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - NOAA Global Monitoring Laboratory, Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//!
//! ## Quick Start
//!
//! ### Event times (numeric API)
//! ```rust
//! use solar_zmanim::{noaa, CalendarDate, Depression, GeoCoordinate};
//!
//! let date = CalendarDate::new(2024, 6, 21).unwrap();
//! let jerusalem = GeoCoordinate::new(31.77509, 35.23269);
//!
//! let times = noaa::event_times(date, jerusalem, None, Some(Depression::Custom(8.5)));
//!
//! println!("Sunrise: {:?} h UTC", times.sunrise.hours());
//! println!("Solar noon: {:?} h UTC", times.solar_noon.hours());
//! println!("Sunset: {:?} h UTC", times.sunset.hours());
//! println!("Dusk (8.5°): {:?} h UTC", times.dusk.and_then(|dusk| dusk.hours()));
//! ```
//!
//! ### Built-in cities and seasonal hours
//! ```rust
//! use solar_zmanim::{CalendarDate, ProportionalMarker, ZmanimQuery};
//!
//! let date = CalendarDate::new(2024, 12, 1).unwrap();
//! let report = ZmanimQuery::new(date).with_location("lakewood").compute().unwrap();
//!
//! if let Some(hours) = report.seasonal_hours() {
//!     let shema = hours.marker(ProportionalMarker::EndOfShema);
//!     println!("End of Shema: {:?} h UTC", shema.hours());
//! }
//! ```
//!
//! ### Converting to instants (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_zmanim::{noaa, CalendarDate, GeoCoordinate};
//!
//! let date = CalendarDate::from_date_like(chrono::NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
//! let toronto = GeoCoordinate::new(43.7167, -79.4333);
//! let times = noaa::event_times(date, toronto, None, None);
//!
//! if let Some(sunrise) = times.sunrise.to_utc(date) {
//!     println!("Sunrise: {sunrise}");
//! }
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Longitude**: positive east of Greenwich, negative west
//! - **Depression**: degrees below the horizon; the event zenith is `90° + depression`
//! - **Standard horizon**: 50 arcminutes below the geometric horizon

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::locations::{DEFAULT_LOCATION, Location};
pub use crate::math::normalize_day_fraction;
pub use crate::noaa::SolarPosition;
#[cfg(feature = "tz")]
pub use crate::query::LocalEventTimes;
pub use crate::query::{DEFAULT_DUSK_ANGLE, ZmanimQuery, ZmanimReport};
pub use crate::seasonal::{ProportionalMarker, SeasonalHours};
pub use crate::time::CalendarDate;
pub use crate::types::{
    DayKind, Depression, EventPair, EventTime, EventTimes, GeoCoordinate,
    STANDARD_HORIZON_DEPRESSION,
};

// Algorithm module
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod locations;
pub mod query;
pub mod seasonal;
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, NaiveDate};

    #[test]
    fn test_chrono_and_numeric_dates_agree() {
        let numeric = CalendarDate::new(2023, 6, 21).unwrap();
        let naive = CalendarDate::from(NaiveDate::from_ymd_opt(2023, 6, 21).unwrap());
        let zoned = CalendarDate::from_date_like(
            "2023-06-21T12:00:00-07:00"
                .parse::<DateTime<FixedOffset>>()
                .unwrap(),
        );

        let san_francisco = GeoCoordinate::new(37.7749, -122.4194);
        let expected = noaa::event_times(numeric, san_francisco, None, None);
        assert_eq!(noaa::event_times(naive, san_francisco, None, None), expected);
        assert_eq!(noaa::event_times(zoned, san_francisco, None, None), expected);
    }

    #[test]
    fn test_event_order_and_instants() {
        let date = CalendarDate::new(2023, 6, 21).unwrap();
        let san_francisco = GeoCoordinate::new(37.7749, -122.4194);
        let times = noaa::event_times(
            date,
            san_francisco,
            Some(Depression::Civil),
            Some(Depression::Civil),
        );

        // San Francisco sunset is after 00:00 UTC, so it wraps to the start of the UTC day
        let sunrise = times.sunrise.to_utc(date).unwrap();
        let noon = times.solar_noon.to_utc(date).unwrap();
        let dawn = times.dawn.unwrap().to_utc(date).unwrap();
        assert!(dawn < sunrise);
        assert!(sunrise < noon);
        assert!(times.sunset.fraction().unwrap() < times.sunrise.fraction().unwrap());
        assert!(times.dusk.unwrap().fraction().unwrap() > times.sunset.fraction().unwrap());
    }
}
