//! US EPA Air Quality Index
//!
//! The 40 CFR Part 58 Appendix G index with the May 2024 PM₂.₅ revision,
//! as used for NowCast reporting. Gas tables are volumetric (ppb, CO in
//! ppm) at the 25 °C reference; particulates are µg/m³.
//!
//! EPA rows leave a one-step gap between neighbours (`9.0` then `9.1`),
//! so a truncated reading inside the gap matches the upper row through
//! the ceil-to-precision rule. Two documented table switches are carried
//! as over-range fallbacks:
//! - 8-hour ozone defines no AQI above 200 ppb; higher values use the
//!   1-hour ozone rows
//! - 1-hour SO₂ defines no AQI above 304 ppb; higher values use the
//!   24-hour SO₂ rows
//!
//! The hourly input for particulates is a NowCast weighted average rather
//! than a plain 24-hour mean; [`nowcast_concentration`] implements that
//! average over a newest-first window.
//!
//! Source: 40 CFR Part 58, Appendix G; EPA-454/B-24-002 (May 2024)

use super::{Breakpoint, CategoryBand, PollutantScale, StandardDefinition, StandardName};
use crate::constants;
use crate::reading::{ConcentrationUnit, Pollutant};

/// Fine particulate matter, NowCast (µg/m³), May 2024 breakpoints.
pub(crate) static PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 9.0, 0.0, 50.0),
    Breakpoint::new(9.1, 35.4, 51.0, 100.0),
    Breakpoint::new(35.5, 55.4, 101.0, 150.0),
    Breakpoint::new(55.5, 125.4, 151.0, 200.0),
    Breakpoint::new(125.5, 225.4, 201.0, 300.0),
    Breakpoint::new(225.5, 325.4, 301.0, 500.0),
];

/// Coarse particulate matter, NowCast (µg/m³).
pub(crate) static PM10: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 54.0, 0.0, 50.0),
    Breakpoint::new(55.0, 154.0, 51.0, 100.0),
    Breakpoint::new(155.0, 254.0, 101.0, 150.0),
    Breakpoint::new(255.0, 354.0, 151.0, 200.0),
    Breakpoint::new(355.0, 424.0, 201.0, 300.0),
    Breakpoint::new(425.0, 604.0, 301.0, 500.0),
];

/// Ozone, 8-hour mean (ppb); defines no AQI above 200 ppb.
pub(crate) static O3_8H: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 54.0, 0.0, 50.0),
    Breakpoint::new(55.0, 70.0, 51.0, 100.0),
    Breakpoint::new(71.0, 85.0, 101.0, 150.0),
    Breakpoint::new(86.0, 105.0, 151.0, 200.0),
    Breakpoint::new(106.0, 200.0, 201.0, 300.0),
];

/// Ozone, 1-hour mean (ppb); over-range target for the 8-hour table.
pub(crate) static O3_1H: [Breakpoint; 4] = [
    Breakpoint::new(125.0, 164.0, 101.0, 150.0),
    Breakpoint::new(165.0, 204.0, 151.0, 200.0),
    Breakpoint::new(205.0, 404.0, 201.0, 300.0),
    Breakpoint::new(405.0, 604.0, 301.0, 500.0),
];

/// Nitrogen dioxide, 1-hour mean (ppb).
pub(crate) static NO2_1H: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 53.0, 0.0, 50.0),
    Breakpoint::new(54.0, 100.0, 51.0, 100.0),
    Breakpoint::new(101.0, 360.0, 101.0, 150.0),
    Breakpoint::new(361.0, 649.0, 151.0, 200.0),
    Breakpoint::new(650.0, 1249.0, 201.0, 300.0),
    Breakpoint::new(1250.0, 2049.0, 301.0, 500.0),
];

/// Sulphur dioxide, 1-hour mean (ppb); defines no AQI above 304 ppb.
pub(crate) static SO2_1H: [Breakpoint; 4] = [
    Breakpoint::new(0.0, 35.0, 0.0, 50.0),
    Breakpoint::new(36.0, 75.0, 51.0, 100.0),
    Breakpoint::new(76.0, 185.0, 101.0, 150.0),
    Breakpoint::new(186.0, 304.0, 151.0, 200.0),
];

/// Sulphur dioxide, 24-hour mean (ppb); over-range target for 1-hour.
pub(crate) static SO2_24H: [Breakpoint; 2] = [
    Breakpoint::new(305.0, 604.0, 201.0, 300.0),
    Breakpoint::new(605.0, 1004.0, 301.0, 500.0),
];

/// Carbon monoxide, 8-hour mean (ppm).
pub(crate) static CO_8H: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 4.4, 0.0, 50.0),
    Breakpoint::new(4.5, 9.4, 51.0, 100.0),
    Breakpoint::new(9.5, 12.4, 101.0, 150.0),
    Breakpoint::new(12.5, 15.4, 151.0, 200.0),
    Breakpoint::new(15.5, 30.4, 201.0, 300.0),
    Breakpoint::new(30.5, 50.4, 301.0, 500.0),
];

pub(crate) static BANDS: [CategoryBand; 6] = [
    CategoryBand::new(1, 0.0, 50.0, "good"),
    CategoryBand::new(2, 51.0, 100.0, "moderate"),
    CategoryBand::new(3, 101.0, 150.0, "unhealthy for sensitive groups"),
    CategoryBand::new(4, 151.0, 200.0, "unhealthy"),
    CategoryBand::new(5, 201.0, 300.0, "very unhealthy"),
    CategoryBand::new(6, 301.0, f64::INFINITY, "hazardous"),
];

static SCALES: [(Pollutant, PollutantScale); 6] = [
    (
        Pollutant::Pm25,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM25,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::Pm10,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM10,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::No2,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_NO2_25C),
            breakpoints: &NO2_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::O3,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_O3_25C),
            breakpoints: &O3_8H,
            over_range_fallback: Some(&O3_1H),
        },
    ),
    (
        Pollutant::So2,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_SO2_25C),
            breakpoints: &SO2_1H,
            over_range_fallback: Some(&SO2_24H),
        },
    ),
    (
        Pollutant::Co,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerMillion,
            stp: Some(constants::STP_CO_25C),
            breakpoints: &CO_8H,
            over_range_fallback: None,
        },
    ),
];

/// US EPA AQI definition.
pub static EPA_NOWCAST: StandardDefinition = StandardDefinition {
    name: StandardName::EpaNowcast,
    identifier: "EPA_NOWCAST",
    version: "2024 revision",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &BANDS,
    scales: &SCALES,
};

/// NowCast weighted average over a newest-first hourly window.
///
/// `hourly[0]` is the most recent hour; entries beyond the 12-hour window
/// are ignored. An hour is valid when finite and non-negative; invalid
/// hours drop out of both sums. Returns `None` when fewer than two of the
/// three most recent hours are valid, the condition under which EPA
/// declares the NowCast missing.
///
/// The weight is the min/max concentration ratio floored at 0.5 (the
/// particulate variant), decayed once per hour of age:
///
/// ```text
/// nowcast = Σ wⁱ·cᵢ / Σ wⁱ
/// ```
pub fn nowcast_concentration(hourly: &[f64]) -> Option<f64> {
    let window = &hourly[..hourly.len().min(constants::NOWCAST_WINDOW_HOURS)];

    let mut lowest = f64::INFINITY;
    let mut highest = f64::NEG_INFINITY;
    let mut recent_valid = 0;
    for (hour, &concentration) in window.iter().enumerate() {
        if !hour_is_valid(concentration) {
            continue;
        }
        if hour < 3 {
            recent_valid += 1;
        }
        if concentration < lowest {
            lowest = concentration;
        }
        if concentration > highest {
            highest = concentration;
        }
    }
    if recent_valid < 2 {
        return None;
    }

    let weight = if highest > 0.0 {
        let ratio = lowest / highest;
        if ratio < 0.5 {
            0.5
        } else {
            ratio
        }
    } else {
        // All valid hours are zero; any weight reproduces the mean
        1.0
    };

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (hour, &concentration) in window.iter().enumerate() {
        if !hour_is_valid(concentration) {
            continue;
        }
        let decayed = libm::pow(weight, hour as f64);
        weighted_sum += decayed * concentration;
        weight_sum += decayed;
    }
    if weight_sum > 0.0 {
        Some(weighted_sum / weight_sum)
    } else {
        None
    }
}

fn hour_is_valid(concentration: f64) -> bool {
    concentration.is_finite() && concentration >= 0.0
}
