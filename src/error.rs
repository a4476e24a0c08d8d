//! Error types for the solar event library.
//!
//! The calculation engine itself never fails: degenerate geometry is reported as
//! [`EventTime::Absent`](crate::EventTime::Absent). Errors only come from the
//! caller-side constructors and validators in this module.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while validating caller input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid solar depression angle (must be between 0 and 90 degrees below the horizon).
    InvalidDepressionAngle {
        /// The invalid depression angle value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Location name not present in the city table.
    UnknownLocation,
    /// Timezone identifier not known to the timezone database.
    UnknownTimeZone,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDepressionAngle { value } => {
                write!(
                    f,
                    "invalid depression angle {value}° (must be between 0° and 90°)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::UnknownLocation => write!(f, "unknown location"),
            Self::UnknownTimeZone => write!(f, "unknown timezone identifier"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid depression angle error.
    #[must_use]
    pub const fn invalid_depression_angle(value: f64) -> Self {
        Self::InvalidDepressionAngle { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a depression angle lies in `[0, 90]` degrees below the horizon.
///
/// # Errors
/// Returns `InvalidDepressionAngle` for NaN or out-of-range angles.
pub fn check_depression_angle(angle: f64) -> Result<()> {
    if !(0.0..=90.0).contains(&angle) {
        return Err(Error::invalid_depression_angle(angle));
    }
    Ok(())
}
