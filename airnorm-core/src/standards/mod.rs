//! Standard Registry
//!
//! ## Overview
//!
//! One entry per regulatory standard, each holding its category bands and,
//! per pollutant, the ordered breakpoint rows mapping concentration
//! intervals to index intervals. All tables are `'static` data built at
//! compile time; the registry is read-only and safely shared across any
//! number of threads without locking.
//!
//! ## Table invariants
//!
//! Within a [`PollutantScale`]:
//! - rows are ordered ascending by amount and never overlap
//! - adjacent rows either share a boundary (Chinese and German tables) or
//!   leave a one-precision-step gap (US tables: `9.0` then `9.1`); the
//!   matcher's ceil-to-precision rule covers both
//! - the first row's `amount_lo` is the clamp-low floor; the last row's
//!   `amount_hi` is the over-range ceiling
//! - `over_range_fallback` encodes a documented table switch above the
//!   ceiling (HJ 633 1-hour SO₂, EPA 8-hour ozone), not an alternative
//!   scale
//!
//! [`StandardDefinition::validate`] asserts these invariants and is run
//! over every registered definition in the test suite.
//!
//! ## Dispatch
//!
//! Standards are selected by [`StandardName`], a closed enum - adding a
//! standard means adding a variant and a table module, and the compiler
//! walks every match that needs extending. String identifiers exist only
//! at the settings boundary via [`StandardName::from_identifier`].

pub mod eaqi;
pub mod epa;
pub mod hj633;
pub mod uba;
pub mod waqi;

use crate::decimal;
use crate::reading::{ConcentrationUnit, Pollutant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One breakpoint row: a concentration interval mapped to an index interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lower concentration bound, inclusive
    pub amount_lo: f64,
    /// Upper concentration bound, inclusive
    pub amount_hi: f64,
    /// Index at `amount_lo`
    pub index_lo: f64,
    /// Index at `amount_hi`
    pub index_hi: f64,
}

impl Breakpoint {
    /// Build a row; table modules use this to keep literals compact.
    pub const fn new(amount_lo: f64, amount_hi: f64, index_lo: f64, index_hi: f64) -> Self {
        Self {
            amount_lo,
            amount_hi,
            index_lo,
            index_hi,
        }
    }
}

/// One category band: an index interval with its severity number and label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBand {
    /// Severity number, starting at 1
    pub category: i8,
    /// Lower index bound, inclusive
    pub index_lo: f64,
    /// Upper index bound, inclusive; `f64::INFINITY` for an open top band
    pub index_hi: f64,
    /// Display label in the standard's own vocabulary
    pub label: &'static str,
}

impl CategoryBand {
    /// Build a band.
    pub const fn new(category: i8, index_lo: f64, index_hi: f64, label: &'static str) -> Self {
        Self {
            category,
            index_lo,
            index_hi,
            label,
        }
    }
}

/// Per-pollutant scale under one standard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantScale {
    /// Unit the breakpoint amounts are expressed in
    pub target_unit: ConcentrationUnit,
    /// STP factor (µg/m³ per ppb) at the standard's reference conditions.
    /// For volumetric targets this is the conversion anchor; for mass
    /// targets it is the fallback factor for provider readings that arrive
    /// volumetric without a known reference. `None` for particulates.
    pub stp: Option<f64>,
    /// Ordered breakpoint rows
    pub breakpoints: &'static [Breakpoint],
    /// Documented replacement rows for amounts above the ceiling
    pub over_range_fallback: Option<&'static [Breakpoint]>,
}

/// A complete registered standard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardDefinition {
    /// Closed-enum name used for dispatch
    pub name: StandardName,
    /// Stable string identifier used at the settings boundary
    pub identifier: &'static str,
    /// Publication or revision the tables were taken from
    pub version: &'static str,
    /// Reporting cap applied when over-range clamping is active
    pub max_index: Option<f64>,
    /// Band at or above which a result counts as significant
    pub significant_category: i8,
    /// Ordered category bands
    pub bands: &'static [CategoryBand],
    /// Required pollutants with their scales
    pub scales: &'static [(Pollutant, PollutantScale)],
}

impl StandardDefinition {
    /// Scale for a pollutant, or `None` when the standard does not use it.
    pub fn scale_for(&self, pollutant: Pollutant) -> Option<&PollutantScale> {
        self.scales
            .iter()
            .find(|(candidate, _)| *candidate == pollutant)
            .map(|(_, scale)| scale)
    }

    /// Whether the standard requires this pollutant.
    pub fn requires(&self, pollutant: Pollutant) -> bool {
        self.scale_for(pollutant).is_some()
    }

    /// Check the table invariants this crate's matching logic relies on.
    ///
    /// Exercised over every registered definition by the test suite, so a
    /// mistyped row fails loudly instead of producing a plausible index.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.bands.is_empty() {
            return Err("no category bands");
        }
        for (position, band) in self.bands.iter().enumerate() {
            if band.category <= 0 {
                return Err("category numbers start at 1");
            }
            if band.index_lo < 0.0 || !(band.index_lo <= band.index_hi) {
                return Err("band range inverted");
            }
            if position > 0 {
                let previous = &self.bands[position - 1];
                if band.category <= previous.category {
                    return Err("band categories must ascend");
                }
                if band.index_lo < previous.index_lo {
                    return Err("band bounds must ascend");
                }
                if previous.index_hi.is_infinite() {
                    return Err("only the top band may be unbounded");
                }
            }
        }
        if self.significant_category < 1
            || self.significant_category > self.bands[self.bands.len() - 1].category
        {
            return Err("significant category outside band range");
        }
        if let Some(max_index) = self.max_index {
            if !(max_index > 0.0) {
                return Err("max index must be positive");
            }
        }
        if self.scales.is_empty() {
            return Err("no pollutant scales");
        }
        for (_, scale) in self.scales {
            validate_rows(scale.breakpoints)?;
            if let Some(fallback) = scale.over_range_fallback {
                validate_rows(fallback)?;
            }
        }
        Ok(())
    }
}

/// Row-level invariants shared by main and fallback tables.
fn validate_rows(rows: &[Breakpoint]) -> Result<(), &'static str> {
    if rows.is_empty() {
        return Err("empty breakpoint table");
    }
    for (position, row) in rows.iter().enumerate() {
        if !(row.amount_lo < row.amount_hi) {
            return Err("zero-width or inverted breakpoint");
        }
        if !(row.index_lo <= row.index_hi) {
            return Err("inverted index range");
        }
        if row.amount_lo < 0.0 {
            return Err("negative concentration bound");
        }
        if position > 0 {
            let previous = &rows[position - 1];
            if row.amount_lo < previous.amount_hi {
                return Err("overlapping breakpoints");
            }
            // A gap is only allowed if ceil-to-precision closes it
            let precision = decimal::decimal_places(previous.amount_hi)
                .max(decimal::decimal_places(row.amount_lo));
            let step = libm::pow(10.0, -(precision as f64));
            if decimal::sub(row.amount_lo, previous.amount_hi) > step {
                return Err("gap wider than one precision step");
            }
            if row.index_lo < previous.index_hi {
                return Err("index ranges must ascend");
            }
        }
    }
    Ok(())
}

/// Names of the registered standards
///
/// `None` selects no standard at all: computation is skipped and the
/// result is returned unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum StandardName {
    /// No standard selected; passthrough
    None = 0,
    /// EU European Air Quality Index, revised bands
    EuEaqi = 1,
    /// China HJ 633-2012, realtime convention
    Hj633 = 2,
    /// China HJ 633, 2025 consultation draft
    Hj633Draft25 = 3,
    /// US EPA AQI as used by NowCast reporting
    EpaNowcast = 4,
    /// WAQI InstantCast over the EPA tables
    InstantCastUs = 5,
    /// WAQI InstantCast over the HJ 633-2012 tables
    InstantCastCn = 6,
    /// WAQI InstantCast over the HJ 633 2025 draft tables
    InstantCastCn25 = 7,
    /// German UBA Luftqualitätsindex
    Uba = 8,
}

impl StandardName {
    /// Every name, passthrough included.
    pub const ALL: [StandardName; 9] = [
        StandardName::None,
        StandardName::EuEaqi,
        StandardName::Hj633,
        StandardName::Hj633Draft25,
        StandardName::EpaNowcast,
        StandardName::InstantCastUs,
        StandardName::InstantCastCn,
        StandardName::InstantCastCn25,
        StandardName::Uba,
    ];

    /// Stable identifier used in settings payloads.
    pub const fn identifier(&self) -> &'static str {
        match self {
            StandardName::None => "None",
            StandardName::EuEaqi => "EU_EAQI",
            StandardName::Hj633 => "HJ6332012",
            StandardName::Hj633Draft25 => "HJ633_25_DRAFT",
            StandardName::EpaNowcast => "EPA_NOWCAST",
            StandardName::InstantCastUs => "WAQI_InstantCast_US",
            StandardName::InstantCastCn => "WAQI_InstantCast_CN",
            StandardName::InstantCastCn25 => "WAQI_InstantCast_CN_25_DRAFT",
            StandardName::Uba => "UBA",
        }
    }

    /// Parse a settings identifier; unknown strings yield `Option::None`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.identifier() == identifier)
    }
}

/// Look up a registered standard.
///
/// Returns `Option::None` only for [`StandardName::None`]; every other
/// name has a compile-time definition.
pub fn standard(name: StandardName) -> Option<&'static StandardDefinition> {
    match name {
        StandardName::None => None,
        StandardName::EuEaqi => Some(&eaqi::EU_EAQI),
        StandardName::Hj633 => Some(&hj633::HJ633_2012),
        StandardName::Hj633Draft25 => Some(&hj633::HJ633_25_DRAFT),
        StandardName::EpaNowcast => Some(&epa::EPA_NOWCAST),
        StandardName::InstantCastUs => Some(&waqi::INSTANTCAST_US),
        StandardName::InstantCastCn => Some(&waqi::INSTANTCAST_CN),
        StandardName::InstantCastCn25 => Some(&waqi::INSTANTCAST_CN_25_DRAFT),
        StandardName::Uba => Some(&uba::UBA_LQI),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in StandardName::ALL {
            match name {
                StandardName::None => assert!(standard(name).is_none()),
                _ => {
                    let definition = standard(name).unwrap();
                    assert_eq!(definition.name, name);
                    assert_eq!(definition.identifier, name.identifier());
                }
            }
        }
    }

    #[test]
    fn every_definition_validates() {
        for name in StandardName::ALL {
            if let Some(definition) = standard(name) {
                definition
                    .validate()
                    .unwrap_or_else(|reason| panic!("{}: {reason}", definition.identifier));
            }
        }
    }

    #[test]
    fn identifier_round_trip() {
        for name in StandardName::ALL {
            assert_eq!(StandardName::from_identifier(name.identifier()), Some(name));
        }
        assert_eq!(StandardName::from_identifier("NO_SUCH"), None);
    }

    #[test]
    fn scale_lookup() {
        let definition = standard(StandardName::EuEaqi).unwrap();
        assert!(definition.requires(Pollutant::Pm25));
        assert!(!definition.requires(Pollutant::Co));
        assert!(definition.scale_for(Pollutant::No).is_none());
    }

    #[test]
    fn validate_rejects_malformed_tables() {
        static INVERTED: [Breakpoint; 1] = [Breakpoint::new(10.0, 5.0, 0.0, 50.0)];
        static BANDS: [CategoryBand; 1] = [CategoryBand::new(1, 0.0, 50.0, "good")];
        static SCALES: [(Pollutant, PollutantScale); 1] = [(
            Pollutant::Pm25,
            PollutantScale {
                target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
                stp: None,
                breakpoints: &INVERTED,
                over_range_fallback: None,
            },
        )];
        let broken = StandardDefinition {
            name: StandardName::EuEaqi,
            identifier: "BROKEN",
            version: "test",
            max_index: None,
            significant_category: 1,
            bands: &BANDS,
            scales: &SCALES,
        };
        assert!(broken.validate().is_err());
    }
}
