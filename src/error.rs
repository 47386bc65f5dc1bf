//! Error types and input validation for solar position calculations.
//!
//! The SPA pipeline itself never fails: out-of-range inputs propagate NaN or infinities.
//! The checks here back the opt-in validation in [`Observation::validate`](crate::Observation::validate).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported when validating an observation.
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
    /// Invalid observer elevation (must be finite and above -6,500,000 meters).
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
    /// Invalid pressure value for atmospheric refraction calculations.
    InvalidPressure {
        /// The invalid pressure value provided.
        value: f64,
    },
    /// Invalid temperature value for atmospheric refraction calculations.
    InvalidTemperature {
        /// The invalid temperature value provided.
        value: f64,
    },
    /// Invalid surface slope or surface azimuth rotation.
    InvalidSurfaceOrientation {
        /// The invalid angle provided.
        value: f64,
    },
    /// Invalid ΔT value.
    InvalidDeltaT {
        /// The invalid ΔT value provided, in seconds.
        value: f64,
    },
    /// Invalid date/time for the algorithm's valid range.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
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
            Self::InvalidElevation { value } => {
                write!(
                    f,
                    "invalid elevation {value} m (must be above -6500000 m)"
                )
            }
            Self::InvalidPressure { value } => {
                write!(
                    f,
                    "invalid pressure {value} hPa (must be between 0 and 5000)"
                )
            }
            Self::InvalidTemperature { value } => {
                write!(
                    f,
                    "invalid temperature {value}°C (must be between -273.15 and 6000)"
                )
            }
            Self::InvalidSurfaceOrientation { value } => {
                write!(
                    f,
                    "invalid surface angle {value}° (must be between -360° and +360°)"
                )
            }
            Self::InvalidDeltaT { value } => {
                write!(f, "invalid delta T {value} s (must be within ±8000 s)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
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

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid pressure error.
    #[must_use]
    pub const fn invalid_pressure(value: f64) -> Self {
        Self::InvalidPressure { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Creates an invalid surface orientation error.
    #[must_use]
    pub const fn invalid_surface_orientation(value: f64) -> Self {
        Self::InvalidSurfaceOrientation { value }
    }

    /// Creates an invalid ΔT error.
    #[must_use]
    pub const fn invalid_delta_t(value: f64) -> Self {
        Self::InvalidDeltaT { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
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

/// Validates the observer elevation.
///
/// # Errors
/// Returns `InvalidElevation` if elevation is not finite or below -6,500,000 meters.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() || elevation < -6_500_000.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates pressure is positive and reasonable for atmospheric calculations.
///
/// # Errors
/// Returns `InvalidPressure` if pressure is not in (0, 5000] hPa.
pub fn check_pressure(pressure: f64) -> Result<()> {
    if !pressure.is_finite() || pressure <= 0.0 || pressure > 5000.0 {
        return Err(Error::invalid_pressure(pressure));
    }
    Ok(())
}

/// Validates temperature is above absolute zero and reasonable for atmospheric calculations.
///
/// # Errors
/// Returns `InvalidTemperature` if temperature is outside -273.15 to 6000°C.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !(-273.15..=6000.0).contains(&temperature) {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}

/// Validates a surface slope or surface azimuth rotation angle.
///
/// # Errors
/// Returns `InvalidSurfaceOrientation` if the angle is outside -360 to +360 degrees.
pub fn check_surface_angle(angle: f64) -> Result<()> {
    if !(-360.0..=360.0).contains(&angle) {
        return Err(Error::invalid_surface_orientation(angle));
    }
    Ok(())
}

/// Validates a ΔT value.
///
/// # Errors
/// Returns `InvalidDeltaT` if ΔT is outside ±8000 seconds.
pub fn check_delta_t(delta_t: f64) -> Result<()> {
    if !(-8000.0..=8000.0).contains(&delta_t) {
        return Err(Error::invalid_delta_t(delta_t));
    }
    Ok(())
}

/// Validates calendar and clock components.
///
/// # Errors
/// Returns `InvalidDateTime` describing the first component out of range.
pub fn check_date_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    timezone: f64,
) -> Result<()> {
    if !(-2000..=6000).contains(&year) {
        return Err(Error::invalid_datetime(
            "year must be between -2000 and 6000",
        ));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_datetime("day must be between 1 and 31"));
    }
    if hour > 24 {
        return Err(Error::invalid_datetime("hour must be between 0 and 24"));
    }
    if minute > 59 {
        return Err(Error::invalid_datetime("minute must be between 0 and 59"));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(Error::invalid_datetime(
            "second must be between 0 and 59.999...",
        ));
    }
    if !(-18.0..=18.0).contains(&timezone) {
        return Err(Error::invalid_datetime(
            "timezone must be between -18 and +18 hours",
        ));
    }
    Ok(())
}
