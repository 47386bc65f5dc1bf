//! SPA algorithm implementation.
//!
//! Topocentric solar position based on the NREL algorithm by Reda & Andreas (2003).
//! Accuracy: ±0.0003° for years -2000 to 6000.
//!
//! The pipeline is a single forward pass. Each step is exposed as a small pure function
//! working in degrees so that individual stages can be checked against the worked example
//! in the paper; [`solar_position`] chains them and records every intermediate value in
//! [`SpaOutput`].
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{
    acos, asin, atan, atan2, cos, cos_deg, limit_degrees, polynomial, powi, rad_to_degrees, sin,
    sin_deg, tan_deg,
};
use crate::time::JulianDate;
use crate::types::{Observation, ResolvedObservation, SpaOutput};
use crate::Result;

pub mod coefficients;
use coefficients::{
    NUTATION_TERMS, OBLIQUITY_COEFFS, PeriodicTerm, TERMS_B, TERMS_L, TERMS_R,
};

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Earth flattening factor (1 - f).
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Earth equatorial radius in meters.
const EARTH_RADIUS_METERS: f64 = 6378140.0;

/// Equatorial horizontal parallax of the sun at 1 AU, in arcseconds.
const SUN_PARALLAX_ARCSEC: f64 = 8.794;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Calculate the topocentric solar position for an observation.
///
/// Optional fields of the observation are resolved first (see
/// [`Observation::resolve_defaults`]). Inputs are not range-checked: values outside the
/// physical domain propagate NaN or infinities into the result. Use
/// [`checked_solar_position`] to reject them up front.
///
/// # Example
/// ```rust
/// use spa_topocentric::{spa, Observation};
///
/// let observation = Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
///     .with_time(12, 30, 30.0)
///     .with_elevation(1830.14)
///     .with_pressure(820.0)
///     .with_surface(30.0, -10.0)
///     .with_delta_t(67.0);
///
/// let position = spa::solar_position(&observation);
///
/// assert!((position.zenith_angle() - 50.11162).abs() < 1e-4);
/// assert!((position.azimuth() - 194.34024).abs() < 1e-4);
/// ```
#[must_use]
pub fn solar_position(observation: &Observation) -> SpaOutput {
    solar_position_resolved(&observation.resolve_defaults())
}

/// Calculate the topocentric solar position after validating the observation.
///
/// # Errors
/// Returns the first out-of-range field (see [`Observation::validate`]).
pub fn checked_solar_position(observation: &Observation) -> Result<SpaOutput> {
    let input = observation.resolve_defaults();
    input.validate()?;
    Ok(solar_position_resolved(&input))
}

/// Calculate the topocentric solar position for an observation with all defaults applied.
#[must_use]
pub fn solar_position_resolved(input: &ResolvedObservation) -> SpaOutput {
    // 3.1. Calculate the Julian and Julian Ephemeris Day, Century, and Millennium
    let jd = JulianDate::from_calendar(
        input.year,
        input.month,
        input.day,
        input.hour,
        input.minute,
        input.second,
        input.timezone,
        input.delta_t,
    );
    let jc = jd.julian_century();
    let jce = jd.julian_ephemeris_century();
    let jme = jd.julian_ephemeris_millennium();

    // 3.2. Calculate the Earth heliocentric longitude, latitude, and radius vector
    let l = earth_heliocentric_longitude(jme);
    let b = earth_heliocentric_latitude(jme);
    let r = earth_radius_vector(jme);

    // 3.3. Calculate the geocentric longitude and latitude
    let theta = geocentric_longitude(l);
    let beta = geocentric_latitude(b);

    // 3.4. Calculate the nutation in longitude and obliquity
    let x = nutation_arguments(jce);
    let nutation = nutation_longitude_and_obliquity(jce, &x);

    // 3.5. Calculate the true obliquity of the ecliptic
    let epsilon0 = ecliptic_mean_obliquity(jme);
    let epsilon = ecliptic_true_obliquity(nutation.obliquity, epsilon0);

    // 3.6. Calculate the aberration correction
    let delta_tau = aberration_correction(r);

    // 3.7. Calculate the apparent sun longitude
    let lambda = apparent_sun_longitude(theta, nutation.longitude, delta_tau);

    // 3.8. Calculate the apparent sidereal time at Greenwich
    let nu0 = greenwich_mean_sidereal_time(jd.julian_date(), jc);
    let nu = greenwich_sidereal_time(nu0, nutation.longitude, epsilon);

    // 3.9. Calculate the geocentric sun right ascension and declination
    let alpha = geocentric_right_ascension(lambda, epsilon, beta);
    let delta = geocentric_declination(beta, epsilon, lambda);

    // 3.10. Calculate the observer local hour angle
    let h = observer_hour_angle(nu, input.longitude, alpha);

    // 3.11. Calculate the topocentric sun right ascension and declination
    let xi = sun_equatorial_horizontal_parallax(r);
    let parallax = topocentric_parallax(input.latitude, input.elevation, xi, h, delta);
    let alpha_prime = topocentric_right_ascension(alpha, parallax.right_ascension);

    // 3.12. Calculate the topocentric local hour angle
    let h_prime = topocentric_local_hour_angle(h, parallax.right_ascension);

    // 3.13. Calculate the topocentric zenith angle
    let e0 = topocentric_elevation_angle(input.latitude, parallax.declination, h_prime);
    let delta_e = atmospheric_refraction_correction(input.pressure, input.temperature, e0);
    let e = topocentric_elevation_angle_corrected(e0, delta_e);
    let zenith = topocentric_zenith_angle(e);

    // 3.14. Calculate the topocentric azimuth angle
    let gamma = topocentric_astronomers_azimuth(h_prime, parallax.declination, input.latitude);
    let phi = topocentric_azimuth(gamma);

    // 3.15. Calculate the incidence angle for a surface oriented in any direction
    let incidence = surface_incidence_angle(
        zenith,
        gamma,
        input.surface_slope,
        input.surface_azimuth_rotation,
    );

    SpaOutput {
        delta_t: jd.delta_t(),
        julian_day: jd.julian_date(),
        julian_ephemeris_day: jd.julian_ephemeris_day(),
        julian_century: jc,
        julian_ephemeris_century: jce,
        julian_ephemeris_millennium: jme,
        earth_heliocentric_longitude: l,
        earth_heliocentric_latitude: b,
        earth_radius_vector: r,
        geocentric_longitude: theta,
        geocentric_latitude: beta,
        mean_elongation_moon_sun: x.mean_elongation_moon_sun,
        mean_anomaly_sun: x.mean_anomaly_sun,
        mean_anomaly_moon: x.mean_anomaly_moon,
        argument_latitude_moon: x.argument_latitude_moon,
        ascending_longitude_moon: x.ascending_longitude_moon,
        nutation_longitude: nutation.longitude,
        nutation_obliquity: nutation.obliquity,
        ecliptic_mean_obliquity: epsilon0,
        ecliptic_true_obliquity: epsilon,
        aberration_correction: delta_tau,
        apparent_sun_longitude: lambda,
        greenwich_mean_sidereal_time: nu0,
        greenwich_sidereal_time: nu,
        geocentric_sun_right_ascension: alpha,
        geocentric_sun_declination: delta,
        observer_hour_angle: h,
        equatorial_horizontal_parallax: xi,
        sun_right_ascension_parallax: parallax.right_ascension,
        topocentric_sun_right_ascension: alpha_prime,
        topocentric_sun_declination: parallax.declination,
        topocentric_local_hour_angle: h_prime,
        topocentric_elevation_angle_uncorrected: e0,
        atmospheric_refraction_correction: delta_e,
        topocentric_elevation_angle: e,
        topocentric_zenith_angle: zenith,
        topocentric_astronomers_azimuth: gamma,
        topocentric_azimuth: phi,
        surface_incidence_angle: incidence,
    }
}

/// Sum a periodic term group: `Σ a * cos(b + c * jme)`.
#[must_use]
pub fn earth_periodic_term_summation(terms: &[PeriodicTerm], jme: f64) -> f64 {
    terms
        .iter()
        .map(|term| term.a * cos(term.b + term.c * jme))
        .sum()
}

/// Combine per-group sums into `(Σ sumᵢ · jmeⁱ) / 10⁸`.
#[must_use]
pub fn earth_values(term_sums: &[f64], jme: f64) -> f64 {
    let mut sum = 0.0;
    for (power, term_sum) in (0_i32..).zip(term_sums) {
        sum += term_sum * powi(jme, power);
    }
    sum / 1.0e8
}

/// Evaluate every group of a series and combine them (radians or AU).
fn earth_series<const N: usize>(groups: [&[PeriodicTerm]; N], jme: f64) -> f64 {
    let sums = groups.map(|terms| earth_periodic_term_summation(terms, jme));
    earth_values(&sums, jme)
}

/// Earth heliocentric longitude L in degrees, limited to [0, 360).
#[must_use]
pub fn earth_heliocentric_longitude(jme: f64) -> f64 {
    limit_degrees(rad_to_degrees(earth_series(TERMS_L, jme)))
}

/// Earth heliocentric latitude B in degrees (not limited, usually a tiny signed value).
#[must_use]
pub fn earth_heliocentric_latitude(jme: f64) -> f64 {
    rad_to_degrees(earth_series(TERMS_B, jme))
}

/// Earth radius vector R in astronomical units.
#[must_use]
pub fn earth_radius_vector(jme: f64) -> f64 {
    earth_series(TERMS_R, jme)
}

/// Geocentric longitude Θ in degrees.
#[must_use]
pub fn geocentric_longitude(l: f64) -> f64 {
    limit_degrees(l + 180.0)
}

/// Geocentric latitude β in degrees.
#[must_use]
pub fn geocentric_latitude(b: f64) -> f64 {
    -b
}

/// The five fundamental arguments of the nutation series, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationArguments {
    /// X0
    pub mean_elongation_moon_sun: f64,
    /// X1
    pub mean_anomaly_sun: f64,
    /// X2
    pub mean_anomaly_moon: f64,
    /// X3
    pub argument_latitude_moon: f64,
    /// X4
    pub ascending_longitude_moon: f64,
}

impl NutationArguments {
    /// Arguments in series order X0..X4.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.mean_elongation_moon_sun,
            self.mean_anomaly_sun,
            self.mean_anomaly_moon,
            self.argument_latitude_moon,
            self.ascending_longitude_moon,
        ]
    }
}

/// Nutation in longitude (Δψ) and obliquity (Δε), in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude: f64,
    /// Δε
    pub obliquity: f64,
}

/// Evaluate the fundamental nutation arguments for a Julian Ephemeris Century.
#[must_use]
pub fn nutation_arguments(jce: f64) -> NutationArguments {
    let jce2 = jce * jce;
    let jce3 = jce2 * jce;

    NutationArguments {
        mean_elongation_moon_sun: 297.85036 + 445267.111480 * jce - 0.0019142 * jce2
            + jce3 / 189474.0,
        mean_anomaly_sun: 357.52772 + 35999.050340 * jce - 0.0001603 * jce2 - jce3 / 300000.0,
        mean_anomaly_moon: 134.96298 + 477198.867398 * jce + 0.0086972 * jce2
            + jce3 / 56250.0,
        argument_latitude_moon: 93.27191 + 483202.017538 * jce - 0.0036825 * jce2
            + jce3 / 327270.0,
        ascending_longitude_moon: 125.04452 - 1934.136261 * jce + 0.0020708 * jce2
            + jce3 / 450000.0,
    }
}

/// Sum the nutation series for the given century and fundamental arguments.
#[must_use]
pub fn nutation_longitude_and_obliquity(jce: f64, x: &NutationArguments) -> Nutation {
    let x = x.as_array();
    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;

    for term in &NUTATION_TERMS {
        let argument: f64 = x
            .iter()
            .zip(term.y)
            .map(|(&x_j, y_j)| x_j * f64::from(y_j))
            .sum();

        sum_psi += (term.a + term.b * jce) * sin_deg(argument);
        sum_epsilon += (term.c + term.d * jce) * cos_deg(argument);
    }

    Nutation {
        longitude: sum_psi / 36_000_000.0,
        obliquity: sum_epsilon / 36_000_000.0,
    }
}

/// Mean obliquity of the ecliptic ε0, in arcseconds.
#[must_use]
pub fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    polynomial(&OBLIQUITY_COEFFS, jme / 10.0)
}

/// True obliquity of the ecliptic ε, in degrees.
#[must_use]
pub fn ecliptic_true_obliquity(delta_epsilon: f64, epsilon0: f64) -> f64 {
    epsilon0 / SECONDS_PER_HOUR + delta_epsilon
}

/// Aberration correction Δτ in degrees.
#[must_use]
pub fn aberration_correction(r: f64) -> f64 {
    ABERRATION_CONSTANT / (SECONDS_PER_HOUR * r)
}

/// Apparent sun longitude λ in degrees.
#[must_use]
pub fn apparent_sun_longitude(theta: f64, delta_psi: f64, delta_tau: f64) -> f64 {
    theta + delta_psi + delta_tau
}

/// Mean sidereal time at Greenwich ν0 in degrees.
#[must_use]
pub fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(
        280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * jc * jc
            - jc * jc * jc / 38710000.0,
    )
}

/// Apparent sidereal time at Greenwich ν in degrees.
#[must_use]
pub fn greenwich_sidereal_time(nu0: f64, delta_psi: f64, epsilon: f64) -> f64 {
    nu0 + delta_psi * cos_deg(epsilon)
}

/// Geocentric sun right ascension α in degrees.
#[must_use]
pub fn geocentric_right_ascension(lambda: f64, epsilon: f64, beta: f64) -> f64 {
    let alpha = atan2(
        sin_deg(lambda) * cos_deg(epsilon) - tan_deg(beta) * sin_deg(epsilon),
        cos_deg(lambda),
    );
    limit_degrees(rad_to_degrees(alpha))
}

/// Geocentric sun declination δ in degrees.
#[must_use]
pub fn geocentric_declination(beta: f64, epsilon: f64, lambda: f64) -> f64 {
    rad_to_degrees(asin(
        sin_deg(beta) * cos_deg(epsilon) + cos_deg(beta) * sin_deg(epsilon) * sin_deg(lambda),
    ))
}

/// Observer local hour angle H in degrees.
#[must_use]
pub fn observer_hour_angle(nu: f64, longitude: f64, alpha: f64) -> f64 {
    limit_degrees(nu + longitude - alpha)
}

/// Equatorial horizontal parallax of the sun ξ in degrees.
#[must_use]
pub fn sun_equatorial_horizontal_parallax(r: f64) -> f64 {
    SUN_PARALLAX_ARCSEC / (SECONDS_PER_HOUR * r)
}

/// Parallax results of step 3.11, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricParallax {
    /// Parallax in the sun right ascension, Δα
    pub right_ascension: f64,
    /// Topocentric sun declination, δ′
    pub declination: f64,
}

/// Parallax in right ascension and topocentric declination for an observer.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `elevation` - Observer elevation in meters
/// * `xi` - Equatorial horizontal parallax in degrees
/// * `h` - Observer local hour angle in degrees
/// * `delta` - Geocentric sun declination in degrees
#[must_use]
pub fn topocentric_parallax(
    latitude: f64,
    elevation: f64,
    xi: f64,
    h: f64,
    delta: f64,
) -> TopocentricParallax {
    let u = atan(EARTH_FLATTENING_FACTOR * tan_deg(latitude));
    let height_ratio = elevation / EARTH_RADIUS_METERS;
    let x = cos(u) + height_ratio * cos_deg(latitude);
    let y = EARTH_FLATTENING_FACTOR * sin(u) + height_ratio * cos_deg(latitude);

    let denominator = cos_deg(delta) - x * sin_deg(xi) * cos_deg(h);
    let delta_alpha = rad_to_degrees(atan2(-x * sin_deg(xi) * sin_deg(h), denominator));
    let delta_prime = rad_to_degrees(atan2(
        (sin_deg(delta) - y * sin_deg(xi)) * cos_deg(delta_alpha),
        denominator,
    ));

    TopocentricParallax {
        right_ascension: delta_alpha,
        declination: delta_prime,
    }
}

/// Topocentric sun right ascension α′ in degrees.
#[must_use]
pub fn topocentric_right_ascension(alpha: f64, delta_alpha: f64) -> f64 {
    alpha + delta_alpha
}

/// Topocentric local hour angle H′ in degrees.
#[must_use]
pub fn topocentric_local_hour_angle(h: f64, delta_alpha: f64) -> f64 {
    h - delta_alpha
}

/// Topocentric elevation angle e0 without atmospheric refraction, in degrees.
#[must_use]
pub fn topocentric_elevation_angle(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    rad_to_degrees(asin(
        sin_deg(latitude) * sin_deg(delta_prime)
            + cos_deg(latitude) * cos_deg(delta_prime) * cos_deg(h_prime),
    ))
}

/// Atmospheric refraction correction Δe in degrees.
///
/// Where the empirical formula turns negative (sun well below the horizon) the correction
/// is floored at zero.
#[must_use]
pub fn atmospheric_refraction_correction(pressure: f64, temperature: f64, e0: f64) -> f64 {
    let delta_e = (pressure / 1010.0)
        * (283.0 / (273.0 + temperature))
        * (1.02 / (60.0 * tan_deg(e0 + 10.3 / (e0 + 5.11))));

    if delta_e < 0.0 { 0.0 } else { delta_e }
}

/// Topocentric elevation angle e in degrees.
#[must_use]
pub fn topocentric_elevation_angle_corrected(e0: f64, delta_e: f64) -> f64 {
    e0 + delta_e
}

/// Topocentric zenith angle θ in degrees.
#[must_use]
pub fn topocentric_zenith_angle(e: f64) -> f64 {
    90.0 - e
}

/// Topocentric astronomers azimuth angle Γ in degrees, measured westward from south.
#[must_use]
pub fn topocentric_astronomers_azimuth(h_prime: f64, delta_prime: f64, latitude: f64) -> f64 {
    limit_degrees(rad_to_degrees(atan2(
        sin_deg(h_prime),
        cos_deg(h_prime) * sin_deg(latitude) - tan_deg(delta_prime) * cos_deg(latitude),
    )))
}

/// Topocentric azimuth angle Φ in degrees, measured eastward from north.
#[must_use]
pub fn topocentric_azimuth(gamma: f64) -> f64 {
    limit_degrees(gamma + 180.0)
}

/// Incidence angle I in degrees for a surface with the given slope and azimuth rotation.
///
/// # Arguments
/// * `zenith` - Topocentric zenith angle in degrees
/// * `gamma` - Topocentric astronomers azimuth in degrees
/// * `slope` - Surface slope from the horizontal in degrees
/// * `azimuth_rotation` - Surface azimuth rotation from south, positive west, in degrees
#[must_use]
pub fn surface_incidence_angle(zenith: f64, gamma: f64, slope: f64, azimuth_rotation: f64) -> f64 {
    rad_to_degrees(acos(
        cos_deg(zenith) * cos_deg(slope)
            + sin_deg(slope) * sin_deg(zenith) * cos_deg(gamma - azimuth_rotation),
    ))
}
