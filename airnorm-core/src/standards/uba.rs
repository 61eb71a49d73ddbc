//! German UBA Luftqualitätsindex
//!
//! The Umweltbundesamt index over NO₂, PM₁₀ and O₃. The published index
//! is purely categorical: five classes from "sehr gut" to "sehr
//! schlecht", the worst pollutant decides, and the upper bound of each
//! class is inclusive.
//!
//! The tables encode each class interval as one row mapped onto the unit
//! index interval `[k, k+1]`, and the bands cover those same intervals.
//! Under the shared matching rules this reproduces the inclusive upper
//! bounds exactly: a concentration on a class boundary interpolates to a
//! whole number, which the band matcher keeps in the lower class, while
//! anything past the boundary ceils into the next. The composite index
//! reported for this standard is the category number itself.
//!
//! Concentrations are µg/m³ at the EU reference (20 °C).
//!
//! Source: Umweltbundesamt Luftqualitätsindex banding

use super::{Breakpoint, CategoryBand, PollutantScale, StandardDefinition, StandardName};
use crate::constants;
use crate::reading::{ConcentrationUnit, Pollutant};

/// Nitrogen dioxide, 1-hour mean (µg/m³).
pub(crate) static NO2: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 20.0, 1.0, 2.0),
    Breakpoint::new(20.0, 40.0, 2.0, 3.0),
    Breakpoint::new(40.0, 100.0, 3.0, 4.0),
    Breakpoint::new(100.0, 200.0, 4.0, 5.0),
    Breakpoint::new(200.0, 500.0, 5.0, 6.0),
];

/// Coarse particulate matter, 24-hour mean (µg/m³).
pub(crate) static PM10: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 10.0, 1.0, 2.0),
    Breakpoint::new(10.0, 20.0, 2.0, 3.0),
    Breakpoint::new(20.0, 35.0, 3.0, 4.0),
    Breakpoint::new(35.0, 50.0, 4.0, 5.0),
    Breakpoint::new(50.0, 100.0, 5.0, 6.0),
];

/// Ozone, 1-hour mean (µg/m³).
pub(crate) static O3: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 60.0, 1.0, 2.0),
    Breakpoint::new(60.0, 120.0, 2.0, 3.0),
    Breakpoint::new(120.0, 180.0, 3.0, 4.0),
    Breakpoint::new(180.0, 240.0, 4.0, 5.0),
    Breakpoint::new(240.0, 360.0, 5.0, 6.0),
];

static BANDS: [CategoryBand; 5] = [
    CategoryBand::new(1, 1.0, 2.0, "sehr gut"),
    CategoryBand::new(2, 2.0, 3.0, "gut"),
    CategoryBand::new(3, 3.0, 4.0, "mäßig"),
    CategoryBand::new(4, 4.0, 5.0, "schlecht"),
    CategoryBand::new(5, 5.0, f64::INFINITY, "sehr schlecht"),
];

static SCALES: [(Pollutant, PollutantScale); 3] = [
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
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_NO2_20C),
            breakpoints: &NO2,
            over_range_fallback: None,
        },
    ),
    (
        Pollutant::O3,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_O3_20C),
            breakpoints: &O3,
            over_range_fallback: None,
        },
    ),
];

/// UBA Luftqualitätsindex definition.
pub static UBA_LQI: StandardDefinition = StandardDefinition {
    name: StandardName::Uba,
    identifier: "UBA",
    version: "2024 banding",
    max_index: None,
    significant_category: 4,
    bands: &BANDS,
    scales: &SCALES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{category_for, pollutant_to_index};

    #[test]
    fn definition_is_well_formed() {
        UBA_LQI.validate().unwrap();
        assert_eq!(UBA_LQI.scales.len(), 3);
        assert!(!UBA_LQI.requires(Pollutant::Pm25));
    }

    #[test]
    fn class_boundaries_are_inclusive_upper() {
        let scale = UBA_LQI.scale_for(Pollutant::No2).unwrap();
        for (amount, expected) in [
            (20.0, 1),
            (21.0, 2),
            (40.0, 2),
            (100.0, 3),
            (101.0, 4),
            (200.0, 4),
            (201.0, 5),
        ] {
            let sub = pollutant_to_index(Pollutant::No2, amount, scale);
            let category = category_for(sub.index, UBA_LQI.bands);
            assert_eq!(category, expected, "NO2 {amount} µg/m³");
        }
    }

    #[test]
    fn boundary_interpolation_is_whole_numbered() {
        let scale = UBA_LQI.scale_for(Pollutant::O3).unwrap();
        let sub = pollutant_to_index(Pollutant::O3, 120.0, scale);
        assert_eq!(sub.index, 3.0);
        let sub = pollutant_to_index(Pollutant::O3, 180.0, scale);
        assert_eq!(sub.index, 4.0);
    }

    #[test]
    fn readings_above_the_table_stay_worst_class() {
        let scale = UBA_LQI.scale_for(Pollutant::O3).unwrap();
        let sub = pollutant_to_index(Pollutant::O3, 400.0, scale);
        assert!(sub.index > 6.0);
        assert_eq!(category_for(sub.index, UBA_LQI.bands), 5);
    }
}
