//! Built-in city table.
//!
//! Callers are free to ignore this table and pass a [`GeoCoordinate`] directly to the
//! calculation functions.

use crate::types::GeoCoordinate;
use crate::{Error, Result};

/// Key of the location used when none is specified.
pub const DEFAULT_LOCATION: &str = "toronto";

/// A named place with its coordinate and IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    key: &'static str,
    display_name: &'static str,
    coordinate: GeoCoordinate,
    timezone_id: &'static str,
}

const LOCATIONS: [Location; 4] = [
    Location {
        key: "toronto",
        display_name: "Toronto",
        coordinate: GeoCoordinate::new(43.7167, -79.4333),
        timezone_id: "America/Toronto",
    },
    Location {
        key: "jerusalem",
        display_name: "Jerusalem",
        coordinate: GeoCoordinate::new(31.77509, 35.23269),
        timezone_id: "Asia/Jerusalem",
    },
    Location {
        key: "lakewood",
        display_name: "Lakewood",
        coordinate: GeoCoordinate::new(40.072_108_7, -74.240_024_3),
        timezone_id: "America/New_York",
    },
    Location {
        key: "frankfurt",
        display_name: "Frankfurt",
        coordinate: GeoCoordinate::new(50.110_924, 8.682_127),
        timezone_id: "Europe/Berlin",
    },
];

impl Location {
    /// Finds a location by key, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `UnknownLocation` if no entry matches.
    ///
    /// # Example
    /// ```
    /// # use solar_zmanim::Location;
    /// let city = Location::lookup("  Jerusalem ").unwrap();
    /// assert_eq!(city.key(), "jerusalem");
    /// assert_eq!(city.timezone_id(), "Asia/Jerusalem");
    /// ```
    pub fn lookup(name: &str) -> Result<Self> {
        let name = name.trim();
        LOCATIONS
            .iter()
            .find(|location| location.key.eq_ignore_ascii_case(name))
            .copied()
            .ok_or(Error::UnknownLocation)
    }

    /// All built-in locations in table order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &LOCATIONS
    }

    /// The location named by [`DEFAULT_LOCATION`].
    #[must_use]
    pub const fn default_location() -> Self {
        LOCATIONS[0]
    }

    /// Lowercase lookup key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Key with its first letter capitalized, for display.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Observer coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// IANA timezone identifier, e.g. `Europe/Berlin`.
    #[must_use]
    pub const fn timezone_id(&self) -> &'static str {
        self.timezone_id
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::default_location()
    }
}
