//! WAQI InstantCast Standards
//!
//! The aqicn.org convention for scoring instant (1-hour) readings on AQI
//! tables built for longer averaging periods. Three flavors are
//! registered:
//! - US: the EPA tables with 8-hour ozone swapped for a 1-hour ozone
//!   table extended down to zero, so low instant readings still score
//! - CN: the HJ 633-2012 tables unchanged
//! - CN 2025 draft: the HJ 633 draft tables unchanged
//!
//! The CN display rule (no primary pollutant while the index is 50 or
//! lower) is composite-level policy and lives with the computation, not
//! in these tables.
//!
//! Source: aqicn.org InstantCast methodology note

use super::{epa, hj633, Breakpoint, PollutantScale, StandardDefinition, StandardName};
use crate::constants;
use crate::reading::{ConcentrationUnit, Pollutant};

/// Ozone, 1-hour mean (ppb), extended down to zero.
///
/// Rows at and above 125 ppb are the EPA 1-hour rows; the two below are
/// the InstantCast extension covering the range the EPA table leaves to
/// the 8-hour average.
pub(crate) static O3_1H_INSTANT: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 62.0, 0.0, 50.0),
    Breakpoint::new(63.0, 124.0, 51.0, 100.0),
    Breakpoint::new(125.0, 164.0, 101.0, 150.0),
    Breakpoint::new(165.0, 204.0, 151.0, 200.0),
    Breakpoint::new(205.0, 404.0, 201.0, 300.0),
    Breakpoint::new(405.0, 604.0, 301.0, 500.0),
];

static SCALES_US: [(Pollutant, PollutantScale); 6] = [
    (
        Pollutant::Pm25,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &epa::PM25,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::Pm10,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &epa::PM10,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::No2,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_NO2_25C),
            breakpoints: &epa::NO2_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::O3,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_O3_25C),
            breakpoints: &O3_1H_INSTANT,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::So2,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerBillion,
            stp: Some(constants::STP_SO2_25C),
            breakpoints: &epa::SO2_1H,
            over_range_fallback: Some(&epa::SO2_24H),
        },
    ),
    (
        Pollutant::Co,
        PollutantScale {
            target_unit: ConcentrationUnit::PartsPerMillion,
            stp: Some(constants::STP_CO_25C),
            breakpoints: &epa::CO_8H,
            over_range_fallback: None,
        },
    ),
];

/// InstantCast over the EPA tables.
pub static INSTANTCAST_US: StandardDefinition = StandardDefinition {
    name: StandardName::InstantCastUs,
    identifier: "WAQI_InstantCast_US",
    version: "EPA 2024 tables, 1-hour ozone",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &epa::BANDS,
    scales: &SCALES_US,
};

/// InstantCast over the HJ 633-2012 tables.
pub static INSTANTCAST_CN: StandardDefinition = StandardDefinition {
    name: StandardName::InstantCastCn,
    identifier: "WAQI_InstantCast_CN",
    version: "HJ 633-2012 tables",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &hj633::BANDS,
    scales: &hj633::SCALES_2012,
};

/// InstantCast over the HJ 633 2025 draft tables.
pub static INSTANTCAST_CN_25_DRAFT: StandardDefinition = StandardDefinition {
    name: StandardName::InstantCastCn25,
    identifier: "WAQI_InstantCast_CN_25_DRAFT",
    version: "HJ 633 2025 draft tables",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &hj633::BANDS,
    scales: &hj633::SCALES_DRAFT25,
};
