//! # SPA Topocentric
//!
//! Topocentric solar position with the NREL Solar Position Algorithm (SPA).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a local calendar date and time, an observer location and the local atmosphere, the
//! library computes the sun's zenith angle, azimuth and the incidence angle on an arbitrarily
//! oriented surface. Uncertainty is ±0.0003° for years -2000 to 6000.
//!
//! Every intermediate quantity of the algorithm (Julian dates, heliocentric and geocentric
//! coordinates, nutation, obliquity, sidereal time, parallax, refraction) is returned in
//! [`SpaOutput`], so results can be checked stage by stage against published tables.
//!
//! An estimator for Delta T (ΔT) based on the work of F. Espenak & J. Meeus is included and
//! used whenever the caller does not supply ΔT.
//!
//! ## Features
//!
//! - `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Pure functions on plain `Copy` values: stateless and thread-safe
//! - Opt-in input validation with [`spa::checked_solar_position`]
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Build observations from `DateTime<Tz>` and estimate ΔT from dates
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! spa-topocentric = "0.1"
//!
//! # Minimal std (no chrono)
//! spa-topocentric = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! spa-topocentric = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use spa_topocentric::{spa, Observation};
//!
//! // Golden, Colorado on 2003-10-17 at 12:30:30 local time (UTC-7)
//! let observation = Observation::new(2003, 10, 17, -7.0, 39.742476, -105.1786, 11.0)
//!     .with_time(12, 30, 30.0)
//!     .with_elevation(1830.14)
//!     .with_pressure(820.0)
//!     .with_surface(30.0, -10.0)
//!     .with_delta_t(67.0);
//!
//! let position = spa::solar_position(&observation);
//!
//! println!("Zenith: {:.5}°", position.zenith_angle());
//! println!("Azimuth: {:.5}°", position.azimuth());
//! println!("Incidence: {:.5}°", position.incidence_angle());
//! ```
//!
//! ### From a chrono `DateTime`
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use spa_topocentric::{spa, Observation};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let observation = Observation::from_datetime(&datetime, 48.21, 16.37, 20.0)
//!     .with_elevation(190.0);
//!
//! let position = spa::checked_solar_position(&observation).unwrap();
//! assert!(position.is_sun_up());
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Longitude**: positive east of Greenwich
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Astronomers azimuth**: 0° = South, measured westward
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon (0° to 180°)
//! - **Surface azimuth rotation**: measured from south, positive toward west

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
    clippy::too_many_arguments, // Calendar components are passed individually
)]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::spa::{checked_solar_position, solar_position};
pub use crate::types::{Observation, ResolvedObservation, STANDARD_PRESSURE, SpaOutput};

// Algorithm modules
pub mod spa;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;
