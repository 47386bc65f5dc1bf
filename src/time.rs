//! Time-scale conversions for the SPA pipeline.
//!
//! This module provides the civil-to-Julian-day conversion, the derived ephemeris time
//! scales (JDE, JC, JCE, JME) and a piecewise polynomial ΔT (Delta T) estimate.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{polynomial, powi, trunc};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day to which the Gregorian calendar correction applies.
const GREGORIAN_REFORM_JD: f64 = 2_299_160.0;

/// Converts a civil date and time at a fixed UTC offset to a Julian Day.
///
/// January and February count as months 13 and 14 of the preceding year. The Gregorian
/// correction is applied from JD 2299160 onwards; earlier dates are taken as Julian calendar
/// dates. No range checks are performed: out-of-range components simply roll over into the
/// neighbouring days.
///
/// # Arguments
/// * `year` - Year (astronomical numbering, 0 = 1 BCE)
/// * `month` - Month (1-12)
/// * `day` - Day of month
/// * `hour`, `minute`, `second` - Local time of day
/// * `timezone` - Offset from UTC in hours (positive east)
///
/// # Example
/// ```
/// use spa_topocentric::time::julian_day;
///
/// assert_eq!(julian_day(2000, 1, 1, 12, 0, 0.0, 0.0), 2_451_545.0);
/// assert_eq!(julian_day(2000, 1, 1, 19, 0, 0.0, 7.0), 2_451_545.0);
/// ```
#[must_use]
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    timezone: f64,
) -> f64 {
    let (y, m) = if month > 2 {
        (f64::from(year), f64::from(month))
    } else {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    };

    let d = f64::from(day) + f64::from(hour) / 24.0 + f64::from(minute) / (24.0 * 60.0)
        + second / (24.0 * 60.0 * 60.0)
        - timezone / 24.0;

    let jd = trunc(365.25 * (y + 4716.0)) + trunc(30.6001 * (m + 1.0)) + d - 1524.5;

    if jd >= GREGORIAN_REFORM_JD {
        let a = trunc(y / 100.0);
        jd + 2.0 - a + trunc(a / 4.0)
    } else {
        jd
    }
}

/// Julian Day together with the ΔT needed to derive the ephemeris time scales.
///
/// Follows the SPA algorithm described in Reda & Andreas (2003).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Day (JD) - referenced to UT
    jd: f64,
    /// Delta T in seconds - difference between TT and UT
    delta_t: f64,
}

impl JulianDate {
    /// Wraps an existing Julian Day and ΔT.
    #[must_use]
    pub const fn new(jd: f64, delta_t: f64) -> Self {
        Self { jd, delta_t }
    }

    /// Creates a Julian date from civil date/time components at a fixed UTC offset.
    ///
    /// See [`julian_day`] for the conversion rules.
    ///
    /// # Example
    /// ```
    /// # use spa_topocentric::time::JulianDate;
    /// let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, -7.0, 67.0);
    /// assert!((jd.julian_date() - 2_452_930.312847).abs() < 1e-6);
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        timezone: f64,
        delta_t: f64,
    ) -> Self {
        Self::new(
            julian_day(year, month, day, hour, minute, second, timezone),
            delta_t,
        )
    }

    /// Gets the Julian Day (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Calculates the Julian Ephemeris Day (JDE).
    ///
    /// JDE = JD + ΔT/86400
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Century (JCE) from J2000.0.
    ///
    /// JCE = (JDE - 2451545.0) / 36525
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Calculates the Julian Ephemeris Millennium (JME) from J2000.0.
    ///
    /// JME = JCE / 10
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }
}

/// ΔT (Delta T) estimation functions.
///
/// ΔT represents the difference between Terrestrial Time (TT) and Universal Time (UT).
/// These estimates are the Espenak & Meeus polynomial fits published with the NASA
/// eclipse catalogues. See: <https://eclipse.gsfc.nasa.gov/SEcat5/deltatpoly.html>
pub struct DeltaT;

impl DeltaT {
    /// Estimates ΔT from year and month.
    ///
    /// Uses the decimal year `year + (month - 0.5) / 12`, i.e. the middle of the month.
    ///
    /// # Example
    /// ```
    /// # use spa_topocentric::time::DeltaT;
    /// let delta_t = DeltaT::estimate(2024, 6);
    /// assert!(delta_t > 60.0 && delta_t < 80.0);
    /// ```
    #[must_use]
    pub fn estimate(year: i32, month: u32) -> f64 {
        Self::estimate_from_decimal_year(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
    }

    /// Estimates ΔT for a decimal year.
    ///
    /// The fits cover contiguous half-open ranges from -500 to 2150; the long-term parabola
    /// is used outside them. Every input, including non-finite ones, selects exactly one fit.
    #[allow(clippy::too_many_lines)]
    #[must_use]
    pub fn estimate_from_decimal_year(decimal_year: f64) -> f64 {
        let y = decimal_year;

        if y < -500.0 {
            long_term_parabola(y)
        } else if y < 500.0 {
            let u = y / 100.0;
            polynomial(
                &[
                    10583.6,
                    -1014.41,
                    33.78311,
                    -5.952053,
                    -0.1798452,
                    0.022174192,
                    0.0090316521,
                ],
                u,
            )
        } else if y < 1600.0 {
            let u = (y - 1000.0) / 100.0;
            polynomial(
                &[
                    1574.2,
                    -556.01,
                    71.23472,
                    0.319781,
                    -0.8503463,
                    -0.005050998,
                    0.0083572073,
                ],
                u,
            )
        } else if y < 1700.0 {
            let t = y - 1600.0;
            polynomial(&[120.0, -0.9808, -0.01532, 1.0 / 7129.0], t)
        } else if y < 1800.0 {
            let t = y - 1700.0;
            polynomial(
                &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
                t,
            )
        } else if y < 1860.0 {
            let t = y - 1800.0;
            polynomial(
                &[
                    13.72,
                    -0.332447,
                    0.0068612,
                    0.0041116,
                    -0.00037436,
                    0.0000121272,
                    -0.0000001699,
                    0.000000000875,
                ],
                t,
            )
        } else if y < 1900.0 {
            let t = y - 1860.0;
            polynomial(
                &[
                    7.62,
                    0.5737,
                    -0.251754,
                    0.01680668,
                    -0.0004473624,
                    1.0 / 233_174.0,
                ],
                t,
            )
        } else if y < 1920.0 {
            let t = y - 1900.0;
            polynomial(&[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197], t)
        } else if y < 1941.0 {
            let t = y - 1920.0;
            polynomial(&[21.20, 0.84493, -0.076100, 0.0020936], t)
        } else if y < 1961.0 {
            let t = y - 1950.0;
            polynomial(&[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0], t)
        } else if y < 1986.0 {
            let t = y - 1975.0;
            polynomial(&[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0], t)
        } else if y < 2005.0 {
            let t = y - 2000.0;
            polynomial(
                &[
                    63.86,
                    0.3345,
                    -0.060374,
                    0.0017275,
                    0.000651814,
                    0.00002373599,
                ],
                t,
            )
        } else if y < 2050.0 {
            let t = y - 2000.0;
            polynomial(&[62.92, 0.32217, 0.005589], t)
        } else if y < 2150.0 {
            long_term_parabola(y) - 0.5628 * (2150.0 - y)
        } else {
            long_term_parabola(y)
        }
    }

    /// Estimates ΔT from any date-like type.
    ///
    /// Convenience method that extracts the year and month from any chrono type
    /// that implements `Datelike` (`DateTime`, `NaiveDateTime`, `NaiveDate`, etc.).
    ///
    /// # Example
    /// ```
    /// # use spa_topocentric::time::DeltaT;
    /// # use chrono::NaiveDate;
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// assert_eq!(DeltaT::estimate_from_date_like(date), DeltaT::estimate(2024, 6));
    /// ```
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn estimate_from_date_like<D: Datelike>(date: D) -> f64 {
        Self::estimate(date.year(), date.month())
    }
}

/// Long-term ΔT parabola, valid far outside the historical record.
fn long_term_parabola(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * powi(u, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_julian_day_j2000() {
        assert_eq!(julian_day(2000, 1, 1, 12, 0, 0.0, 0.0), J2000_JDN);
    }

    #[test]
    fn test_julian_day_timezone_offset() {
        assert_eq!(julian_day(2000, 1, 1, 19, 0, 0.0, 7.0), J2000_JDN);
        assert_eq!(julian_day(2000, 1, 1, 5, 0, 0.0, -7.0), J2000_JDN);
        assert_eq!(
            julian_day(1987, 1, 26, 17, 0, 0.0, -7.0),
            julian_day(1987, 1, 27, 0, 0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_julian_day_gregorian_boundary() {
        // 1582-10-04 (Julian) is followed by 1582-10-15 (Gregorian)
        let last_julian = julian_day(1582, 10, 4, 0, 0, 0.0, 0.0);
        let first_gregorian = julian_day(1582, 10, 15, 0, 0, 0.0, 0.0);

        assert_eq!(last_julian, 2_299_159.5);
        assert_eq!(first_gregorian, 2_299_160.5);
        assert!(last_julian < GREGORIAN_REFORM_JD);
        assert!(first_gregorian >= GREGORIAN_REFORM_JD);
    }

    #[test]
    fn test_julian_date_scales() {
        let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0);

        assert!(jd.julian_century().abs() < EPSILON);
        assert!(jd.julian_ephemeris_century().abs() < EPSILON);
        assert!(jd.julian_ephemeris_millennium().abs() < EPSILON);
        assert_eq!(jd.delta_t(), 0.0);
    }

    #[test]
    fn test_julian_ephemeris_day() {
        let delta_t = 69.0;
        let jd = JulianDate::from_calendar(2023, 6, 21, 12, 0, 0.0, 0.0, delta_t);

        let expected = jd.julian_date() + delta_t / SECONDS_PER_DAY;
        assert!((jd.julian_ephemeris_day() - expected).abs() < EPSILON);
        assert!(
            (jd.julian_ephemeris_millennium() * 10.0 - jd.julian_ephemeris_century()).abs()
                < EPSILON
        );
    }

    #[test]
    fn test_delta_t_modern_estimates() {
        let delta_t_2000 = DeltaT::estimate(2000, 1);
        let delta_t_2020 = DeltaT::estimate(2020, 1);

        assert!(delta_t_2000 > 60.0 && delta_t_2000 < 70.0);
        assert!(delta_t_2020 > 65.0 && delta_t_2020 < 75.0);
        assert!(delta_t_2020 > delta_t_2000);
    }

    #[test]
    fn test_delta_t_historical_estimates() {
        let delta_t_1900 = DeltaT::estimate_from_decimal_year(1900.0);
        let delta_t_1950 = DeltaT::estimate_from_decimal_year(1950.0);

        assert!((delta_t_1900 - -2.79).abs() < EPSILON);
        assert!((delta_t_1950 - 29.07).abs() < EPSILON);
        assert!(DeltaT::estimate_from_decimal_year(0.0) > 10_000.0);
    }

    #[test]
    fn test_delta_t_range_boundaries_are_half_open() {
        // Lower bounds belong to the upper range
        assert!((DeltaT::estimate_from_decimal_year(1600.0) - 120.0).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(1700.0) - 8.83).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(1800.0) - 13.72).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(1860.0) - 7.62).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(1920.0) - 21.20).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(2000.0) - 63.86).abs() < EPSILON);

        // 1941 is in the 1950-centred fit, 2005 and 2050 start new fits
        let t = -9.0_f64;
        let expected_1941 = 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
        assert!((DeltaT::estimate_from_decimal_year(1941.0) - expected_1941).abs() < 1e-9);
        let expected_2005 = 62.92 + 0.32217 * 5.0 + 0.005589 * 25.0;
        assert!((DeltaT::estimate_from_decimal_year(2005.0) - expected_2005).abs() < 1e-9);
        let expected_2050 = -20.0 + 32.0 * 2.3 * 2.3 - 0.5628 * 100.0;
        assert!((DeltaT::estimate_from_decimal_year(2050.0) - expected_2050).abs() < 1e-9);
    }

    #[test]
    fn test_delta_t_ancient_and_medieval_fits() {
        // [-500, 500) in u = y / 100, [500, 1600) in u = (y - 1000) / 100
        assert!((DeltaT::estimate_from_decimal_year(0.0) - 10583.6).abs() < EPSILON);
        assert!((DeltaT::estimate_from_decimal_year(1000.0) - 1574.2).abs() < EPSILON);

        let u = -5.0_f64;
        let expected_minus_500 = 10583.6 - 1014.41 * u + 33.78311 * u * u
            - 5.952053 * powi(u, 3)
            - 0.1798452 * powi(u, 4)
            + 0.022174192 * powi(u, 5)
            + 0.0090316521 * powi(u, 6);
        assert!((DeltaT::estimate_from_decimal_year(-500.0) - expected_minus_500).abs() < 1e-8);

        let expected_500 = 1574.2 - 556.01 * u + 71.23472 * u * u + 0.319781 * powi(u, 3)
            - 0.8503463 * powi(u, 4)
            - 0.005050998 * powi(u, 5)
            + 0.0083572073 * powi(u, 6);
        assert!((DeltaT::estimate_from_decimal_year(500.0) - expected_500).abs() < 1e-8);

        // Just below -500 the long-term parabola applies
        let u = (-500.000_001 - 1820.0) / 100.0;
        let expected = -20.0 + 32.0 * u * u;
        assert!((DeltaT::estimate_from_decimal_year(-500.000_001) - expected).abs() < 1e-8);
    }

    #[test]
    fn test_delta_t_late_twentieth_century_fits() {
        assert!((DeltaT::estimate_from_decimal_year(1975.0) - 45.45).abs() < EPSILON);

        // 1961 starts the 1975-centred fit, 1986 the 2000-centred one
        let t = -14.0_f64;
        let expected_1961 = 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
        assert!((DeltaT::estimate_from_decimal_year(1961.0) - expected_1961).abs() < 1e-9);

        let expected_1986 = 63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * powi(t, 3)
            + 0.000651814 * powi(t, 4)
            + 0.00002373599 * powi(t, 5);
        assert!((DeltaT::estimate_from_decimal_year(1986.0) - expected_1986).abs() < 1e-9);

        // The previous fits still apply just below those bounds
        let t = 1960.999_999 - 1950.0;
        let expected = 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
        assert!((DeltaT::estimate_from_decimal_year(1960.999_999) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_delta_t_long_term_parabola() {
        let u = (-1000.0 - 1820.0) / 100.0;
        let expected = -20.0 + 32.0 * u * u;
        assert!((DeltaT::estimate_from_decimal_year(-1000.0) - expected).abs() < 1e-9);

        let u = (2150.0 - 1820.0) / 100.0;
        let expected = -20.0 + 32.0 * u * u;
        assert!((DeltaT::estimate_from_decimal_year(2150.0) - expected).abs() < 1e-9);
        // the 2050-2150 fit meets the parabola at 2150
        assert!((DeltaT::estimate_from_decimal_year(2149.999_999) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_delta_t_is_total() {
        for year in (-3000..=4000).step_by(7) {
            for month in 1..=12 {
                assert!(DeltaT::estimate(year, month).is_finite(), "{year}-{month}");
            }
        }
        assert!(DeltaT::estimate_from_decimal_year(f64::NAN).is_nan());
    }

    #[test]
    fn test_delta_t_uses_mid_month() {
        let from_date = DeltaT::estimate(2024, 6);
        let from_decimal = DeltaT::estimate_from_decimal_year(2024.0 + 5.5 / 12.0);
        assert_eq!(from_date, from_decimal);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_delta_t_from_date_like() {
        use chrono::{FixedOffset, NaiveDate, TimeZone};

        let naive_date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let datetime = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .unwrap();

        assert_eq!(
            DeltaT::estimate_from_date_like(naive_date),
            DeltaT::estimate(2024, 6)
        );
        assert_eq!(
            DeltaT::estimate_from_date_like(datetime),
            DeltaT::estimate(2024, 6)
        );
    }
}
