//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use spa_topocentric::{Observation, spa, time::DeltaT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: The worked example from Reda & Andreas (2003), numeric API
    let golden = Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
        .with_time(12, 30, 30.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_surface(30.0, -10.0)
        .with_delta_t(67.0);

    let result = spa::checked_solar_position(&golden)?;

    println!("Golden, Colorado on October 17, 2003 at 12:30:30 MST:");
    println!("  Julian Day:    {:.6}", result.julian_day);
    println!("  L:             {:.6e}°", result.earth_heliocentric_longitude);
    println!("  B:             {:.6e}°", result.earth_heliocentric_latitude);
    println!("  R:             {:.6} AU", result.earth_radius_vector);
    println!("  H:             {:.6}°", result.observer_hour_angle);
    println!("  Delta Psi:     {:.6e}°", result.nutation_longitude);
    println!("  Delta Epsilon: {:.6e}°", result.nutation_obliquity);
    println!("  Epsilon:       {:.6}°", result.ecliptic_true_obliquity);
    println!("  Zenith:        {:.6}°", result.zenith_angle());
    println!("  Azimuth:       {:.6}°", result.azimuth());
    println!("  Incidence:     {:.6}°", result.incidence_angle());

    // Example 2: Same moment for San Francisco, from chrono values in two timezones
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc
        .with_ymd_and_hms(2023, 6, 21, 19, 0, 0)
        .single()
        .ok_or("ambiguous datetime")?; // 19:00 UTC = 12:00 PDT
    let latitude = 37.7749;
    let longitude = -122.4194;
    let delta_t = DeltaT::estimate_from_date_like(datetime_fixed);

    let position_fixed = spa::solar_position(
        &Observation::from_datetime(&datetime_fixed, latitude, longitude, 15.0)
            .with_delta_t(delta_t),
    );
    let position_utc = spa::solar_position(
        &Observation::from_datetime(&datetime_utc, latitude, longitude, 15.0)
            .with_delta_t(delta_t),
    );

    println!("\nSan Francisco on June 21, 2023 at noon Pacific Time (ΔT {delta_t:.2} s):");
    println!("Using FixedOffset timezone:");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth());
    println!("  Elevation: {:.3}°", position_fixed.elevation_angle());
    println!("  Zenith angle: {:.3}°", position_fixed.zenith_angle());

    println!("\nUsing UTC timezone (same moment):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth());
    println!("  Elevation: {:.3}°", position_utc.elevation_angle());
    println!("  Zenith angle: {:.3}°", position_utc.zenith_angle());

    Ok(())
}
