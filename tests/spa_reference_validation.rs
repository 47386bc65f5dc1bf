//! Validation against the worked example published with the NREL SPA.
//!
//! Reda & Andreas (2003), appendix A.5: Golden, Colorado on 17 October 2003 at 12:30:30
//! local standard time (UTC-7).

use spa_topocentric::{Error, Observation, SpaOutput, spa};

fn golden_observation() -> Observation {
    Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
        .with_time(12, 30, 30.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0)
}

fn assert_close(actual: f64, expected: f64, tolerance: f64, name: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{name}: {actual} differs from {expected} by more than {tolerance}"
    );
}

#[test]
fn test_reference_outputs() {
    let result = spa::solar_position(&golden_observation());

    assert_close(result.topocentric_zenith_angle, 50.11162, 1e-4, "zenith");
    assert_close(result.topocentric_azimuth, 194.34024, 1e-4, "azimuth");
    assert_close(result.surface_incidence_angle, 25.18700, 1e-3, "incidence");
}

#[test]
fn test_reference_intermediate_values() {
    let r: SpaOutput = spa::solar_position(&golden_observation());

    assert_eq!(r.delta_t, 67.0);
    assert_close(r.julian_day, 2452930.312847, 1e-6, "JD");
    assert_close(r.earth_heliocentric_longitude, 24.0182616917, 1e-6, "L");
    assert_close(r.earth_heliocentric_latitude, -0.0001011219, 1e-8, "B");
    assert_close(r.earth_radius_vector, 0.9965422974, 1e-8, "R");
    assert_close(r.geocentric_longitude, 204.0182616917, 1e-6, "Θ");
    assert_close(r.geocentric_latitude, 0.0001011219, 1e-8, "β");
    assert_close(r.nutation_longitude, -0.00399840, 1e-7, "Δψ");
    assert_close(r.nutation_obliquity, 0.00166657, 1e-7, "Δε");
    assert_close(r.ecliptic_true_obliquity, 23.440465, 1e-6, "ε");
    assert_close(r.aberration_correction, -0.005711359, 1e-8, "Δτ");
    assert_close(r.apparent_sun_longitude, 204.0085519281, 1e-6, "λ");
    assert_close(r.greenwich_sidereal_time, 318.5119, 1e-4, "ν");
    assert_close(r.geocentric_sun_right_ascension, 202.22741, 1e-5, "α");
    assert_close(r.geocentric_sun_declination, -9.31434, 1e-5, "δ");
    assert_close(r.observer_hour_angle, 11.105902, 1e-6, "H");
    assert_close(r.topocentric_local_hour_angle, 11.10627, 1e-5, "H′");
    assert_close(r.topocentric_sun_declination, -9.316179, 1e-6, "δ′");
    assert_close(r.topocentric_sun_right_ascension, 202.22704, 1e-5, "α′");
    assert_close(r.topocentric_elevation_angle_uncorrected, 39.872046, 1e-6, "e0");
    assert_close(r.atmospheric_refraction_correction, 0.016332, 1e-6, "Δe");
    assert_close(r.topocentric_elevation_angle, 39.888378, 1e-6, "e");
}

#[test]
fn test_stage_relations_hold() {
    let r = spa::solar_position(&golden_observation());

    assert_close(
        r.topocentric_zenith_angle,
        90.0 - r.topocentric_elevation_angle,
        1e-12,
        "zenith = 90 - e",
    );
    assert_close(
        r.topocentric_elevation_angle,
        r.topocentric_elevation_angle_uncorrected + r.atmospheric_refraction_correction,
        1e-12,
        "e = e0 + Δe",
    );
    assert_close(
        r.topocentric_sun_right_ascension,
        r.geocentric_sun_right_ascension + r.sun_right_ascension_parallax,
        1e-12,
        "α′ = α + Δα",
    );
    assert_close(
        r.topocentric_local_hour_angle,
        r.observer_hour_angle - r.sun_right_ascension_parallax,
        1e-12,
        "H′ = H - Δα",
    );
    assert_close(
        r.julian_ephemeris_day,
        r.julian_day + r.delta_t / 86400.0,
        1e-9,
        "JDE",
    );
    assert_close(
        r.julian_ephemeris_millennium,
        r.julian_ephemeris_century / 10.0,
        1e-15,
        "JME",
    );
    assert_close(
        spa_topocentric::math::limit_degrees(r.topocentric_astronomers_azimuth + 180.0),
        r.topocentric_azimuth,
        1e-12,
        "Φ = Γ + 180",
    );
}

#[test]
fn test_results_are_deterministic() {
    let observation = golden_observation();
    assert_eq!(
        spa::solar_position(&observation),
        spa::solar_position(&observation)
    );
}

#[test]
fn test_utc_and_local_time_agree() {
    let local = spa::solar_position(&golden_observation());
    let mut utc_observation = golden_observation().with_time(19, 30, 30.0);
    utc_observation.timezone = 0.0;
    let utc = spa::solar_position(&utc_observation);

    assert_close(utc.julian_day, local.julian_day, 1e-8, "JD");
    assert_close(utc.topocentric_zenith_angle, local.topocentric_zenith_angle, 1e-6, "zenith");
    assert_close(utc.topocentric_azimuth, local.topocentric_azimuth, 1e-6, "azimuth");
}

#[test]
fn test_horizontal_surface_incidence_equals_zenith() {
    let result = spa::solar_position(&golden_observation().with_surface(0.0, 0.0));
    assert_close(
        result.surface_incidence_angle,
        result.topocentric_zenith_angle,
        1e-9,
        "incidence",
    );
}

#[test]
fn test_refraction_correction_is_zero_at_night() {
    let midnight = golden_observation().with_time(0, 0, 0.0);
    let result = spa::solar_position(&midnight);

    assert!(result.topocentric_elevation_angle_uncorrected < -50.0);
    assert_eq!(result.atmospheric_refraction_correction, 0.0);
    assert_eq!(
        result.topocentric_elevation_angle,
        result.topocentric_elevation_angle_uncorrected
    );
    assert!(result.is_sun_down());
}

#[test]
fn test_explicit_zero_delta_t_is_used() {
    let result = spa::solar_position(&golden_observation().with_delta_t(0.0));

    assert_eq!(result.delta_t, 0.0);
    assert_eq!(result.julian_ephemeris_day, result.julian_day);
    assert_close(result.topocentric_zenith_angle, 50.11148, 1e-4, "zenith");
}

#[test]
fn test_estimated_delta_t_when_not_supplied() {
    let mut observation = golden_observation();
    observation.delta_t = None;
    let result = spa::solar_position(&observation);

    assert!((64.0..66.0).contains(&result.delta_t), "{}", result.delta_t);
    assert_close(result.topocentric_zenith_angle, 50.11162, 1e-3, "zenith");
}

#[test]
fn test_out_of_range_inputs_propagate_nan() {
    let observation = Observation::new(2003, 10, 17, -7.0, f64::NAN, -105.1786, 11.0);
    let result = spa::solar_position(&observation);

    assert!(result.topocentric_zenith_angle.is_nan());
    assert!(!result.julian_day.is_nan());
}

#[test]
fn test_checked_solar_position() {
    let checked = spa::checked_solar_position(&golden_observation()).unwrap();
    assert_eq!(checked, spa::solar_position(&golden_observation()));

    let bad_pressure = golden_observation().with_pressure(0.0);
    assert_eq!(
        spa::checked_solar_position(&bad_pressure),
        Err(Error::invalid_pressure(0.0))
    );

    let bad_month = Observation::new(2003, 13, 17, -7.0, 39.742476, -105.1786, 11.0);
    assert!(matches!(
        spa::checked_solar_position(&bad_month),
        Err(Error::InvalidDateTime { .. })
    ));
}

#[cfg(feature = "chrono")]
#[test]
fn test_from_datetime_matches_numeric_api() {
    use chrono::{FixedOffset, TimeZone};

    let datetime = FixedOffset::west_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2003, 10, 17, 12, 30, 30)
        .unwrap();
    let observation = Observation::from_datetime(&datetime, 39.742476, -105.1786, 11.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0);

    assert_eq!(observation, golden_observation());
    assert_eq!(
        spa::solar_position(&observation),
        spa::solar_position(&golden_observation())
    );
}

#[cfg(all(feature = "chrono", feature = "std"))]
#[test]
fn test_parsed_datetime_with_boxed_errors() -> Result<(), Box<dyn std::error::Error>> {
    use chrono::{DateTime, FixedOffset};

    let datetime = "2003-10-17T12:30:30-07:00".parse::<DateTime<FixedOffset>>()?;
    let observation = Observation::from_datetime(&datetime, 39.742476, -105.1786, 11.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0);

    let result = spa::checked_solar_position(&observation)?;
    assert_close(result.topocentric_zenith_angle, 50.11162, 1e-4, "zenith");

    let malformed = "2003-10-17 noon".parse::<DateTime<FixedOffset>>();
    let boxed: Box<dyn std::error::Error> = malformed.unwrap_err().into();
    assert!(!boxed.to_string().is_empty());
    Ok(())
}
