//! Common helpers for integration tests
//!
//! Reading builders for each concentration unit plus a tolerance
//! assertion for interpolated values. Exact decimal expectations use
//! plain `assert_eq!` at the call site; `assert_close` is for values
//! that legitimately carry quantization residue.

#![allow(dead_code)]

use airnorm_core::{ConcentrationUnit, Pollutant, PollutantReading};

/// Reading in µg/m³.
pub fn micrograms(pollutant: Pollutant, amount: f64) -> PollutantReading {
    PollutantReading::new(pollutant, amount, ConcentrationUnit::MicrogramsPerCubicMeter)
}

/// Reading in mg/m³.
pub fn milligrams(pollutant: Pollutant, amount: f64) -> PollutantReading {
    PollutantReading::new(pollutant, amount, ConcentrationUnit::MilligramsPerCubicMeter)
}

/// Reading in ppb.
pub fn ppb(pollutant: Pollutant, amount: f64) -> PollutantReading {
    PollutantReading::new(pollutant, amount, ConcentrationUnit::PartsPerBillion)
}

/// Reading in ppm.
pub fn ppm(pollutant: Pollutant, amount: f64) -> PollutantReading {
    PollutantReading::new(pollutant, amount, ConcentrationUnit::PartsPerMillion)
}

/// Assert two floats agree to within 1e-9.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
