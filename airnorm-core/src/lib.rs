//! Air quality index core for airnorm
//!
//! Converts raw pollutant concentrations from heterogeneous weather
//! providers into a normalized index under any of eight regulatory
//! standards (EU EAQI, China HJ 633 and its 2025 draft, US EPA,
//! three WAQI InstantCast variants, Germany's UBA).
//!
//! Key constraints:
//! - Pure computation: no I/O, no clocks, no shared mutable state
//! - No heap allocation; bounded `heapless` vectors only
//! - Deterministic decimal arithmetic at breakpoint boundaries
//!
//! ```no_run
//! use airnorm_core::{
//!     compute_air_quality, ComputeOptions,
//!     ConcentrationUnit, Pollutant, PollutantReading, StandardName,
//! };
//!
//! let readings = [PollutantReading::new(
//!     Pollutant::Pm25,
//!     12.0,
//!     ConcentrationUnit::MicrogramsPerCubicMeter,
//! )];
//!
//! let result = compute_air_quality(
//!     &readings,
//!     StandardName::EuEaqi,
//!     &ComputeOptions::default(),
//! );
//!
//! if !result.unavailable {
//!     // index 16, category "fair"
//!     let _ = (result.index, result.category);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod diag;

pub mod compute;
pub mod constants;
pub mod decimal;
pub mod errors;
pub mod index;
pub mod primary;
pub mod reading;
pub mod reconcile;
pub mod standards;
pub mod units;

// Public API
pub use compute::{compute_air_quality, AirQualityResult, ComputeOptions};
pub use errors::{AqiError, AqiResult};
pub use index::{category_for, pollutant_to_index, SubIndex, INDEX_UNAVAILABLE};
pub use primary::{select_primary, Selection};
pub use reading::{
    stp_factor, ConcentrationUnit, Pollutant, PollutantReading, Provider, StpReference,
};
pub use reconcile::{reconcile_pollutants, DisplayPreferences, UnitsMode};
pub use standards::epa::nowcast_concentration;
pub use standards::{standard, StandardDefinition, StandardName};

/// Crate version string, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
