//! China HJ 633-2012 Air Quality Index
//!
//! The MEP technical regulation: one IAQI per pollutant from Appendix A,
//! composite AQI is the worst of them, primary pollutant reported once the
//! AQI passes 50. This rendering uses the realtime convention (1-hour gas
//! tables, 24-hour particulate tables), which is what the regulation
//! prescribes for hourly publication.
//!
//! Two table quirks are encoded rather than special-cased:
//! - 1-hour SO₂ is only defined up to 800 µg/m³; Appendix A directs
//!   readings above that onto the 24-hour SO₂ table, carried here as the
//!   scale's over-range fallback
//! - IAQI above 500 is officially "beyond scale"; the cap is expressed as
//!   `max_index` so clamping stays a composite-level decision
//!
//! Concentrations are µg/m³ (CO: mg/m³) at the GB 3095 reference, which
//! the 2018 modification moved to 25 °C; gas rows therefore carry the
//! 25 °C STP factors.
//!
//! The 2025 consultation draft tightens both particulate tables and
//! leaves the gas tables untouched; it is registered as a separate
//! standard so the published and draft indices can run side by side.
//!
//! Source: HJ 633-2012, Appendix A; 2025 revision consultation draft

use super::{Breakpoint, CategoryBand, PollutantScale, StandardDefinition, StandardName};
use crate::constants;
use crate::reading::{ConcentrationUnit, Pollutant};

/// Fine particulate matter, 24-hour mean (µg/m³).
pub(crate) static PM25_24H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 35.0, 0.0, 50.0),
    Breakpoint::new(35.0, 75.0, 50.0, 100.0),
    Breakpoint::new(75.0, 115.0, 100.0, 150.0),
    Breakpoint::new(115.0, 150.0, 150.0, 200.0),
    Breakpoint::new(150.0, 250.0, 200.0, 300.0),
    Breakpoint::new(250.0, 350.0, 300.0, 400.0),
    Breakpoint::new(350.0, 500.0, 400.0, 500.0),
];

/// Fine particulate matter, 24-hour mean, 2025 draft (µg/m³).
pub(crate) static PM25_24H_DRAFT25: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 25.0, 0.0, 50.0),
    Breakpoint::new(25.0, 50.0, 50.0, 100.0),
    Breakpoint::new(50.0, 75.0, 100.0, 150.0),
    Breakpoint::new(75.0, 115.0, 150.0, 200.0),
    Breakpoint::new(115.0, 150.0, 200.0, 300.0),
    Breakpoint::new(150.0, 250.0, 300.0, 400.0),
    Breakpoint::new(250.0, 350.0, 400.0, 500.0),
];

/// Coarse particulate matter, 24-hour mean (µg/m³).
pub(crate) static PM10_24H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 50.0, 0.0, 50.0),
    Breakpoint::new(50.0, 150.0, 50.0, 100.0),
    Breakpoint::new(150.0, 250.0, 100.0, 150.0),
    Breakpoint::new(250.0, 350.0, 150.0, 200.0),
    Breakpoint::new(350.0, 420.0, 200.0, 300.0),
    Breakpoint::new(420.0, 500.0, 300.0, 400.0),
    Breakpoint::new(500.0, 600.0, 400.0, 500.0),
];

/// Coarse particulate matter, 24-hour mean, 2025 draft (µg/m³).
pub(crate) static PM10_24H_DRAFT25: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 40.0, 0.0, 50.0),
    Breakpoint::new(40.0, 100.0, 50.0, 100.0),
    Breakpoint::new(100.0, 180.0, 100.0, 150.0),
    Breakpoint::new(180.0, 250.0, 150.0, 200.0),
    Breakpoint::new(250.0, 350.0, 200.0, 300.0),
    Breakpoint::new(350.0, 420.0, 300.0, 400.0),
    Breakpoint::new(420.0, 500.0, 400.0, 500.0),
];

/// Nitrogen dioxide, 1-hour mean (µg/m³).
pub(crate) static NO2_1H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 100.0, 0.0, 50.0),
    Breakpoint::new(100.0, 200.0, 50.0, 100.0),
    Breakpoint::new(200.0, 700.0, 100.0, 150.0),
    Breakpoint::new(700.0, 1200.0, 150.0, 200.0),
    Breakpoint::new(1200.0, 2340.0, 200.0, 300.0),
    Breakpoint::new(2340.0, 3090.0, 300.0, 400.0),
    Breakpoint::new(3090.0, 3840.0, 400.0, 500.0),
];

/// Ozone, 1-hour mean (µg/m³).
pub(crate) static O3_1H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 160.0, 0.0, 50.0),
    Breakpoint::new(160.0, 200.0, 50.0, 100.0),
    Breakpoint::new(200.0, 300.0, 100.0, 150.0),
    Breakpoint::new(300.0, 400.0, 150.0, 200.0),
    Breakpoint::new(400.0, 800.0, 200.0, 300.0),
    Breakpoint::new(800.0, 1000.0, 300.0, 400.0),
    Breakpoint::new(1000.0, 1200.0, 400.0, 500.0),
];

/// Sulphur dioxide, 1-hour mean (µg/m³); defined up to 800 only.
pub(crate) static SO2_1H: [Breakpoint; 4] = [
    Breakpoint::new(0.0, 150.0, 0.0, 50.0),
    Breakpoint::new(150.0, 500.0, 50.0, 100.0),
    Breakpoint::new(500.0, 650.0, 100.0, 150.0),
    Breakpoint::new(650.0, 800.0, 150.0, 200.0),
];

/// Sulphur dioxide, 24-hour mean (µg/m³); over-range target for 1-hour.
pub(crate) static SO2_24H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 50.0, 0.0, 50.0),
    Breakpoint::new(50.0, 150.0, 50.0, 100.0),
    Breakpoint::new(150.0, 475.0, 100.0, 150.0),
    Breakpoint::new(475.0, 800.0, 150.0, 200.0),
    Breakpoint::new(800.0, 1600.0, 200.0, 300.0),
    Breakpoint::new(1600.0, 2100.0, 300.0, 400.0),
    Breakpoint::new(2100.0, 2620.0, 400.0, 500.0),
];

/// Carbon monoxide, 1-hour mean (mg/m³).
pub(crate) static CO_1H: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 5.0, 0.0, 50.0),
    Breakpoint::new(5.0, 10.0, 50.0, 100.0),
    Breakpoint::new(10.0, 35.0, 100.0, 150.0),
    Breakpoint::new(35.0, 60.0, 150.0, 200.0),
    Breakpoint::new(60.0, 90.0, 200.0, 300.0),
    Breakpoint::new(90.0, 120.0, 300.0, 400.0),
    Breakpoint::new(120.0, 150.0, 400.0, 500.0),
];

pub(crate) static BANDS: [CategoryBand; 6] = [
    CategoryBand::new(1, 0.0, 50.0, "excellent"),
    CategoryBand::new(2, 51.0, 100.0, "good"),
    CategoryBand::new(3, 101.0, 150.0, "lightly polluted"),
    CategoryBand::new(4, 151.0, 200.0, "moderately polluted"),
    CategoryBand::new(5, 201.0, 300.0, "heavily polluted"),
    CategoryBand::new(6, 301.0, f64::INFINITY, "severely polluted"),
];

pub(crate) static SCALES_2012: [(Pollutant, PollutantScale); 6] = [
    (
        Pollutant::Pm25,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM25_24H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::Pm10,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM10_24H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::No2,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_NO2_25C),
            breakpoints: &NO2_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::O3,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_O3_25C),
            breakpoints: &O3_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::So2,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_SO2_25C),
            breakpoints: &SO2_1H,
            over_range_fallback: Some(&SO2_24H),
        },
    ),
    (
        Pollutant::Co,
        PollutantScale {
            target_unit: ConcentrationUnit::MilligramsPerCubicMeter,
            stp: Some(constants::STP_CO_25C),
            breakpoints: &CO_1H,
            over_range_fallback: None,
        },
    ),
];

pub(crate) static SCALES_DRAFT25: [(Pollutant, PollutantScale); 6] = [
    (
        Pollutant::Pm25,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM25_24H_DRAFT25,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::Pm10,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &PM10_24H_DRAFT25,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::No2,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_NO2_25C),
            breakpoints: &NO2_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::O3,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_O3_25C),
            breakpoints: &O3_1H,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::So2,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_SO2_25C),
            breakpoints: &SO2_1H,
            over_range_fallback: Some(&SO2_24H),
        },
    ),
    (
        Pollutant::Co,
        PollutantScale {
            target_unit: ConcentrationUnit::MilligramsPerCubicMeter,
            stp: Some(constants::STP_CO_25C),
            breakpoints: &CO_1H,
            over_range_fallback: None,
        },
    ),
];

/// HJ 633-2012 definition, published tables.
pub static HJ633_2012: StandardDefinition = StandardDefinition {
    name: StandardName::Hj633,
    identifier: "HJ6332012",
    version: "2012",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &BANDS,
    scales: &SCALES_2012,
};

/// HJ 633 definition, 2025 consultation draft tables.
pub static HJ633_25_DRAFT: StandardDefinition = StandardDefinition {
    name: StandardName::Hj633Draft25,
    identifier: "HJ633_25_DRAFT",
    version: "2025 consultation draft",
    max_index: Some(500.0),
    significant_category: 3,
    bands: &BANDS,
    scales: &SCALES_DRAFT25,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::pollutant_to_index;

    #[test]
    fn definitions_are_well_formed() {
        HJ633_2012.validate().unwrap();
        HJ633_25_DRAFT.validate().unwrap();
        assert_eq!(HJ633_2012.scales.len(), 6);
        assert_eq!(HJ633_25_DRAFT.scales.len(), 6);
    }

    #[test]
    fn shared_boundaries_land_on_level_values() {
        let scale = HJ633_2012.scale_for(Pollutant::Pm25).unwrap();
        // 75 sits on two rows; the lower row wins and yields exactly 100
        let sub = pollutant_to_index(Pollutant::Pm25, 75.0, scale);
        assert_eq!(sub.index, 100.0);
        let sub = pollutant_to_index(Pollutant::Pm25, 35.0, scale);
        assert_eq!(sub.index, 50.0);
    }

    #[test]
    fn so2_above_800_switches_to_daily_table() {
        let scale = HJ633_2012.scale_for(Pollutant::So2).unwrap();
        // 900 overruns the 1-hour ceiling; on the 24-hour table it falls
        // into [800, 1600] -> [200, 300]
        let sub = pollutant_to_index(Pollutant::So2, 900.0, scale);
        assert_eq!(sub.index, 212.5);
    }

    #[test]
    fn draft_tightens_particulates_only() {
        let published = HJ633_2012.scale_for(Pollutant::Pm25).unwrap();
        let draft = HJ633_25_DRAFT.scale_for(Pollutant::Pm25).unwrap();
        let at_50_published = pollutant_to_index(Pollutant::Pm25, 50.0, published);
        let at_50_draft = pollutant_to_index(Pollutant::Pm25, 50.0, draft);
        assert_eq!(at_50_published.index, 68.75);
        assert_eq!(at_50_draft.index, 100.0);

        assert_eq!(
            HJ633_2012.scale_for(Pollutant::O3).unwrap().breakpoints,
            HJ633_25_DRAFT.scale_for(Pollutant::O3).unwrap().breakpoints
        );
    }

    #[test]
    fn co_is_milligrams() {
        let scale = HJ633_2012.scale_for(Pollutant::Co).unwrap();
        assert_eq!(
            scale.target_unit,
            ConcentrationUnit::MilligramsPerCubicMeter
        );
        let sub = pollutant_to_index(Pollutant::Co, 7.5, scale);
        assert_eq!(sub.index, 75.0);
    }
}
