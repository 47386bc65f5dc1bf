//! Core data types: the observation input and the SPA result record.

use crate::error::{
    check_coordinates, check_date_time, check_delta_t, check_elevation, check_pressure,
    check_surface_angle, check_temperature,
};
use crate::Result;
use crate::time::DeltaT;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

/// Standard atmospheric pressure in millibars (hPa).
pub const STANDARD_PRESSURE: f64 = 1013.25;

/// An observation request: when, where, and under which atmosphere to locate the sun.
///
/// Optional fields are left as `None` and filled in by [`Observation::resolve_defaults`].
/// All angles are in degrees, longitude positive east.
///
/// # Example
/// ```
/// # use spa_topocentric::Observation;
/// let observation = Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
///     .with_time(12, 30, 30.0)
///     .with_elevation(1830.14)
///     .with_pressure(820.0)
///     .with_surface(30.0, -10.0)
///     .with_delta_t(67.0);
///
/// let resolved = observation.resolve_defaults();
/// assert_eq!(resolved.hour, 12);
/// assert_eq!(resolved.pressure, 820.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Year (astronomical numbering)
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month
    pub day: u32,
    /// Local hour
    pub hour: Option<u32>,
    /// Local minute
    pub minute: Option<u32>,
    /// Local second, may be fractional
    pub second: Option<f64>,
    /// Offset from UTC in hours (positive east)
    pub timezone: f64,
    /// Observer latitude in degrees
    pub latitude: f64,
    /// Observer longitude in degrees, positive east of Greenwich
    pub longitude: f64,
    /// Observer elevation in meters (default 0)
    pub elevation: Option<f64>,
    /// Annual average local pressure in millibars (default 1013.25)
    pub pressure: Option<f64>,
    /// Annual average local temperature in degrees Celsius
    pub temperature: f64,
    /// Surface slope measured from the horizontal plane (default 0)
    pub surface_slope: Option<f64>,
    /// Surface azimuth rotation measured from south, positive west (default 0)
    pub surface_azimuth_rotation: Option<f64>,
    /// ΔT in seconds (default: estimated from year and month)
    pub delta_t: Option<f64>,
}

/// An observation with every optional field resolved to a concrete value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedObservation {
    /// Year (astronomical numbering)
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Day of month
    pub day: u32,
    /// Local hour
    pub hour: u32,
    /// Local minute
    pub minute: u32,
    /// Local second
    pub second: f64,
    /// Offset from UTC in hours
    pub timezone: f64,
    /// Observer latitude in degrees
    pub latitude: f64,
    /// Observer longitude in degrees
    pub longitude: f64,
    /// Observer elevation in meters
    pub elevation: f64,
    /// Pressure in millibars
    pub pressure: f64,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Surface slope in degrees
    pub surface_slope: f64,
    /// Surface azimuth rotation in degrees
    pub surface_azimuth_rotation: f64,
    /// ΔT in seconds
    pub delta_t: f64,
}

impl Observation {
    /// Creates an observation at local noon with every optional field unset.
    ///
    /// # Arguments
    /// * `year`, `month`, `day` - Local calendar date
    /// * `timezone` - Offset from UTC in hours (e.g. -7.0 for MST)
    /// * `latitude` - Observer latitude in degrees
    /// * `longitude` - Observer longitude in degrees (positive east)
    /// * `temperature` - Temperature in degrees Celsius
    #[must_use]
    pub const fn new(
        year: i32,
        month: u32,
        day: u32,
        timezone: f64,
        latitude: f64,
        longitude: f64,
        temperature: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: None,
            second: None,
            timezone,
            latitude,
            longitude,
            elevation: None,
            pressure: None,
            temperature,
            surface_slope: None,
            surface_azimuth_rotation: None,
            delta_t: None,
        }
    }

    /// Creates an observation from a timezone-aware chrono `DateTime`.
    ///
    /// The local calendar fields and the UTC offset in effect at that instant are taken from
    /// the datetime; sub-second precision is kept.
    ///
    /// # Example
    /// ```
    /// # use spa_topocentric::Observation;
    /// use chrono::{FixedOffset, TimeZone};
    ///
    /// let datetime = FixedOffset::west_opt(7 * 3600)
    ///     .unwrap()
    ///     .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
    ///     .unwrap();
    /// let observation = Observation::from_datetime(&datetime, 39.742476, -105.1786, 11.0);
    /// assert_eq!(observation.timezone, -7.0);
    /// assert_eq!(observation.hour, Some(12));
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        temperature: f64,
    ) -> Self {
        let offset_seconds = datetime.offset().fix().local_minus_utc();
        let second =
            f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;

        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            f64::from(offset_seconds) / 3600.0,
            latitude,
            longitude,
            temperature,
        )
        .with_time(datetime.hour(), datetime.minute(), second)
    }

    /// Sets hour, minute and second together.
    #[must_use]
    pub const fn with_time(self, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..self
        }
    }

    /// Sets the hour; unset minute and second then default to zero.
    #[must_use]
    pub const fn with_hour(self, hour: u32) -> Self {
        Self {
            hour: Some(hour),
            ..self
        }
    }

    /// Sets the minute; unset hour and second then default to zero.
    #[must_use]
    pub const fn with_minute(self, minute: u32) -> Self {
        Self {
            minute: Some(minute),
            ..self
        }
    }

    /// Sets the second; unset hour and minute then default to zero.
    #[must_use]
    pub const fn with_second(self, second: f64) -> Self {
        Self {
            second: Some(second),
            ..self
        }
    }

    /// Sets the observer elevation in meters.
    #[must_use]
    pub const fn with_elevation(self, elevation: f64) -> Self {
        Self {
            elevation: Some(elevation),
            ..self
        }
    }

    /// Sets the atmospheric pressure in millibars.
    #[must_use]
    pub const fn with_pressure(self, pressure: f64) -> Self {
        Self {
            pressure: Some(pressure),
            ..self
        }
    }

    /// Sets the slope and azimuth rotation of the receiving surface, in degrees.
    #[must_use]
    pub const fn with_surface(self, slope: f64, azimuth_rotation: f64) -> Self {
        Self {
            surface_slope: Some(slope),
            surface_azimuth_rotation: Some(azimuth_rotation),
            ..self
        }
    }

    /// Sets ΔT in seconds instead of estimating it.
    #[must_use]
    pub const fn with_delta_t(self, delta_t: f64) -> Self {
        Self {
            delta_t: Some(delta_t),
            ..self
        }
    }

    /// Returns a copy with all optional fields filled in.
    ///
    /// With no time of day given the observation is taken at 12:00:00. As soon as one of
    /// hour, minute or second is given, the others default to zero. Elevation, surface slope
    /// and surface azimuth rotation default to zero, pressure to 1013.25 millibars, and ΔT to
    /// [`DeltaT::estimate`] for the observation's year and month.
    #[must_use]
    pub fn resolve_defaults(&self) -> ResolvedObservation {
        let (hour, minute, second) = match (self.hour, self.minute, self.second) {
            (None, None, None) => (12, 0, 0.0),
            (hour, minute, second) => (
                hour.unwrap_or(0),
                minute.unwrap_or(0),
                second.unwrap_or(0.0),
            ),
        };

        ResolvedObservation {
            year: self.year,
            month: self.month,
            day: self.day,
            hour,
            minute,
            second,
            timezone: self.timezone,
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation.unwrap_or(0.0),
            pressure: self.pressure.unwrap_or(STANDARD_PRESSURE),
            temperature: self.temperature,
            surface_slope: self.surface_slope.unwrap_or(0.0),
            surface_azimuth_rotation: self.surface_azimuth_rotation.unwrap_or(0.0),
            delta_t: self
                .delta_t
                .unwrap_or_else(|| DeltaT::estimate(self.year, self.month)),
        }
    }

    /// Checks every field against the range the algorithm is validated for.
    ///
    /// The calculation itself does not require this; unchecked inputs just propagate NaN.
    ///
    /// # Errors
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<()> {
        self.resolve_defaults().validate()
    }
}

impl ResolvedObservation {
    /// Checks every field against the range the algorithm is validated for.
    ///
    /// # Errors
    /// Returns the first out-of-range field found.
    pub fn validate(&self) -> Result<()> {
        check_date_time(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.timezone,
        )?;
        check_coordinates(self.latitude, self.longitude)?;
        check_elevation(self.elevation)?;
        check_pressure(self.pressure)?;
        check_temperature(self.temperature)?;
        check_surface_angle(self.surface_slope)?;
        check_surface_angle(self.surface_azimuth_rotation)?;
        check_delta_t(self.delta_t)?;
        Ok(())
    }
}

/// Full SPA result: one field per pipeline stage.
///
/// Angles are in degrees unless noted. Azimuths follow two conventions:
/// - `topocentric_astronomers_azimuth`: measured westward from south
/// - `topocentric_azimuth`: 0° = North, increasing clockwise (navigators' convention)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaOutput {
    /// ΔT used for the calculation (seconds)
    pub delta_t: f64,
    /// Julian Day
    pub julian_day: f64,
    /// Julian Ephemeris Day
    pub julian_ephemeris_day: f64,
    /// Julian Century
    pub julian_century: f64,
    /// Julian Ephemeris Century
    pub julian_ephemeris_century: f64,
    /// Julian Ephemeris Millennium
    pub julian_ephemeris_millennium: f64,
    /// Earth heliocentric longitude, L
    pub earth_heliocentric_longitude: f64,
    /// Earth heliocentric latitude, B
    pub earth_heliocentric_latitude: f64,
    /// Earth radius vector, R (AU)
    pub earth_radius_vector: f64,
    /// Geocentric longitude, Θ
    pub geocentric_longitude: f64,
    /// Geocentric latitude, β
    pub geocentric_latitude: f64,
    /// Mean elongation of the moon from the sun, X0
    pub mean_elongation_moon_sun: f64,
    /// Mean anomaly of the sun, X1
    pub mean_anomaly_sun: f64,
    /// Mean anomaly of the moon, X2
    pub mean_anomaly_moon: f64,
    /// Moon's argument of latitude, X3
    pub argument_latitude_moon: f64,
    /// Longitude of the ascending node of the moon's mean orbit, X4
    pub ascending_longitude_moon: f64,
    /// Nutation in longitude, Δψ
    pub nutation_longitude: f64,
    /// Nutation in obliquity, Δε
    pub nutation_obliquity: f64,
    /// Mean obliquity of the ecliptic, ε0 (arcseconds)
    pub ecliptic_mean_obliquity: f64,
    /// True obliquity of the ecliptic, ε
    pub ecliptic_true_obliquity: f64,
    /// Aberration correction, Δτ
    pub aberration_correction: f64,
    /// Apparent sun longitude, λ
    pub apparent_sun_longitude: f64,
    /// Greenwich mean sidereal time, ν0
    pub greenwich_mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time, ν
    pub greenwich_sidereal_time: f64,
    /// Geocentric sun right ascension, α
    pub geocentric_sun_right_ascension: f64,
    /// Geocentric sun declination, δ
    pub geocentric_sun_declination: f64,
    /// Observer local hour angle, H
    pub observer_hour_angle: f64,
    /// Equatorial horizontal parallax of the sun, ξ
    pub equatorial_horizontal_parallax: f64,
    /// Parallax in the sun right ascension, Δα
    pub sun_right_ascension_parallax: f64,
    /// Topocentric sun right ascension, α′
    pub topocentric_sun_right_ascension: f64,
    /// Topocentric sun declination, δ′
    pub topocentric_sun_declination: f64,
    /// Topocentric local hour angle, H′
    pub topocentric_local_hour_angle: f64,
    /// Topocentric elevation angle without refraction, e0
    pub topocentric_elevation_angle_uncorrected: f64,
    /// Atmospheric refraction correction, Δe (never negative)
    pub atmospheric_refraction_correction: f64,
    /// Topocentric elevation angle, e
    pub topocentric_elevation_angle: f64,
    /// Topocentric zenith angle, θ
    pub topocentric_zenith_angle: f64,
    /// Topocentric astronomers azimuth angle, Γ (westward from south)
    pub topocentric_astronomers_azimuth: f64,
    /// Topocentric azimuth angle, Φ (eastward from north)
    pub topocentric_azimuth: f64,
    /// Incidence angle on the configured surface, I
    pub surface_incidence_angle: f64,
}

impl SpaOutput {
    /// Gets the topocentric zenith angle in degrees (0° = zenith, 90° = horizon).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.topocentric_zenith_angle
    }

    /// Gets the azimuth angle in degrees (0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.topocentric_azimuth
    }

    /// Gets the refraction-corrected elevation angle in degrees.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.topocentric_elevation_angle
    }

    /// Gets the incidence angle on the configured surface in degrees.
    #[must_use]
    pub const fn incidence_angle(&self) -> f64 {
        self.surface_incidence_angle
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation_angle() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden() -> Observation {
        Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
    }

    #[test]
    fn test_defaults_to_noon_when_no_time_given() {
        let resolved = golden().resolve_defaults();
        assert_eq!(resolved.hour, 12);
        assert_eq!(resolved.minute, 0);
        assert_eq!(resolved.second, 0.0);
    }

    #[test]
    fn test_partial_time_defaults_to_zero() {
        let resolved = golden().with_minute(45).resolve_defaults();
        assert_eq!(resolved.hour, 0);
        assert_eq!(resolved.minute, 45);
        assert_eq!(resolved.second, 0.0);

        let resolved = golden().with_hour(9).resolve_defaults();
        assert_eq!((resolved.hour, resolved.minute), (9, 0));

        let resolved = golden().with_second(30.5).resolve_defaults();
        assert_eq!((resolved.hour, resolved.minute), (0, 0));
        assert_eq!(resolved.second, 30.5);
    }

    #[test]
    fn test_optional_field_defaults() {
        let resolved = golden().resolve_defaults();
        assert_eq!(resolved.elevation, 0.0);
        assert_eq!(resolved.pressure, STANDARD_PRESSURE);
        assert_eq!(resolved.surface_slope, 0.0);
        assert_eq!(resolved.surface_azimuth_rotation, 0.0);
        assert_eq!(resolved.delta_t, DeltaT::estimate(2003, 10));
        assert_eq!(resolved.temperature, 11.0);
    }

    #[test]
    fn test_explicit_zero_values_are_kept() {
        let resolved = golden().with_delta_t(0.0).with_pressure(0.0).resolve_defaults();
        assert_eq!(resolved.delta_t, 0.0);
        assert_eq!(resolved.pressure, 0.0);
    }

    #[test]
    fn test_resolve_defaults_leaves_input_untouched() {
        let observation = golden();
        let _ = observation.resolve_defaults();
        assert_eq!(observation, golden());
        assert!(observation.hour.is_none());
        assert!(observation.delta_t.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(golden().validate().is_ok());
        assert!(golden().with_pressure(0.0).validate().is_err());

        let mut bad_latitude = golden();
        bad_latitude.latitude = 95.0;
        assert_eq!(
            bad_latitude.validate(),
            Err(crate::Error::invalid_latitude(95.0))
        );

        let mut bad_year = golden();
        bad_year.year = 7000;
        assert!(bad_year.validate().is_err());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_datetime_keeps_local_fields_and_offset() {
        use chrono::{FixedOffset, TimeZone};

        let datetime = FixedOffset::east_opt(5 * 3600 + 1800)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 1, 6, 15, 42)
            .unwrap();
        let observation = Observation::from_datetime(&datetime, 28.6, 77.2, 25.0);

        assert_eq!(observation.year, 2024);
        assert_eq!(observation.month, 3);
        assert_eq!(observation.day, 1);
        assert_eq!(observation.hour, Some(6));
        assert_eq!(observation.minute, Some(15));
        assert_eq!(observation.second, Some(42.0));
        assert_eq!(observation.timezone, 5.5);
        assert_eq!(observation.temperature, 25.0);
    }
}
