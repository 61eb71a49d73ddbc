//! EU European Air Quality Index
//!
//! The EEA viewer index over five pollutants, using the revised
//! WHO-2021-aligned concentration bands. The published index is
//! categorical (six severity classes); this rendering maps each
//! concentration band onto a ten-wide index decade (`good` 0-9, `fair`
//! 10-19, ... `extremely poor` 50+) so interpolation inside a band stays
//! meaningful and the category is recoverable as `index / 10`.
//!
//! Concentrations are µg/m³ at the EU reference (20 °C); gas rows carry
//! the EU STP factor so volumetric provider readings convert correctly.
//! The top category is unbounded, so over-range clamping never applies -
//! amounts above the last row extrapolate on its slope.
//!
//! Source: EEA European Air Quality Index methodology, 2024 revision

use super::{Breakpoint, CategoryBand, PollutantScale, StandardDefinition, StandardName};
use crate::constants;
use crate::reading::{ConcentrationUnit, Pollutant};

/// Fine particulate matter, 24-hour mean (µg/m³).
pub(crate) static PM25: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 5.0, 0.0, 9.0),
    Breakpoint::new(6.0, 15.0, 10.0, 19.0),
    Breakpoint::new(16.0, 25.0, 20.0, 29.0),
    Breakpoint::new(26.0, 50.0, 30.0, 39.0),
    Breakpoint::new(51.0, 75.0, 40.0, 49.0),
    Breakpoint::new(76.0, 800.0, 50.0, 59.0),
];

/// Coarse particulate matter, 24-hour mean (µg/m³).
pub(crate) static PM10: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 15.0, 0.0, 9.0),
    Breakpoint::new(16.0, 45.0, 10.0, 19.0),
    Breakpoint::new(46.0, 80.0, 20.0, 29.0),
    Breakpoint::new(81.0, 120.0, 30.0, 39.0),
    Breakpoint::new(121.0, 160.0, 40.0, 49.0),
    Breakpoint::new(161.0, 1200.0, 50.0, 59.0),
];

/// Nitrogen dioxide, 1-hour mean (µg/m³).
pub(crate) static NO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 10.0, 0.0, 9.0),
    Breakpoint::new(11.0, 25.0, 10.0, 19.0),
    Breakpoint::new(26.0, 60.0, 20.0, 29.0),
    Breakpoint::new(61.0, 100.0, 30.0, 39.0),
    Breakpoint::new(101.0, 150.0, 40.0, 49.0),
    Breakpoint::new(151.0, 1000.0, 50.0, 59.0),
];

/// Ozone, 1-hour mean (µg/m³).
pub(crate) static O3: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 60.0, 0.0, 9.0),
    Breakpoint::new(61.0, 100.0, 10.0, 19.0),
    Breakpoint::new(101.0, 130.0, 20.0, 29.0),
    Breakpoint::new(131.0, 240.0, 30.0, 39.0),
    Breakpoint::new(241.0, 380.0, 40.0, 49.0),
    Breakpoint::new(381.0, 800.0, 50.0, 59.0),
];

/// Sulphur dioxide, 1-hour mean (µg/m³).
pub(crate) static SO2: [Breakpoint; 6] = [
    Breakpoint::new(0.0, 40.0, 0.0, 9.0),
    Breakpoint::new(41.0, 100.0, 10.0, 19.0),
    Breakpoint::new(101.0, 200.0, 20.0, 29.0),
    Breakpoint::new(201.0, 350.0, 30.0, 39.0),
    Breakpoint::new(351.0, 500.0, 40.0, 49.0),
    Breakpoint::new(501.0, 1250.0, 50.0, 59.0),
];

static BANDS: [CategoryBand; 6] = [
    CategoryBand::new(1, 0.0, 9.0, "good"),
    CategoryBand::new(2, 10.0, 19.0, "fair"),
    CategoryBand::new(3, 20.0, 29.0, "moderate"),
    CategoryBand::new(4, 30.0, 39.0, "poor"),
    CategoryBand::new(5, 40.0, 49.0, "very poor"),
    CategoryBand::new(6, 50.0, f64::INFINITY, "extremely poor"),
];

static SCALES: [(Pollutant, PollutantScale); 5] = [
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
    (
        Pollutant::So2,
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: Some(constants::STP_SO2_20C),
            breakpoints: &SO2,
            over_range_fallback: None,
        },
    ),
];

/// EU EAQI definition.
pub static EU_EAQI: StandardDefinition = StandardDefinition {
    name: StandardName::EuEaqi,
    identifier: "EU_EAQI",
    version: "2024 revision",
    max_index: None,
    significant_category: 4,
    bands: &BANDS,
    scales: &SCALES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::pollutant_to_index;

    #[test]
    fn definition_is_well_formed() {
        EU_EAQI.validate().unwrap();
        assert_eq!(EU_EAQI.scales.len(), 5);
        for (_, scale) in EU_EAQI.scales {
            assert_eq!(scale.breakpoints.len(), 6);
        }
    }

    #[test]
    fn fair_band_interpolates_exactly() {
        let scale = EU_EAQI.scale_for(Pollutant::Pm25).unwrap();
        let sub = pollutant_to_index(Pollutant::Pm25, 12.0, scale);
        assert_eq!(sub.index, 16.0);
    }

    #[test]
    fn band_decades_align_with_categories() {
        for (band, expected_lo) in BANDS.iter().zip([0.0, 10.0, 20.0, 30.0, 40.0, 50.0]) {
            assert_eq!(band.index_lo, expected_lo);
        }
        assert!(BANDS[5].index_hi.is_infinite());
    }
}
