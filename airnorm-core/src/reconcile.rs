//! Display-Side Pollutant Reconciliation
//!
//! ## Two results, one list
//!
//! A frontend often holds two computations for the same place: the one
//! made from the local payload and an injected one (a server-side
//! recomputation, or a second provider). [`reconcile_pollutants`] picks
//! the injected result whenever it is usable and falls back to the base,
//! then rewrites the winning reading list into the units the user asked
//! for.
//!
//! ## Unit modes
//!
//! The non-force modes follow display convention per pollutant: CO stays
//! in its thousand-scaled unit (mg/m³, ppm) while everything else uses
//! the base unit. Force modes put every reading in one literal unit.
//! Particulates have no volumetric form, so every ppb-family mode leaves
//! them untouched rather than inventing a factor.
//!
//! Reconciliation is display-only and total: a reading that cannot be
//! converted keeps its original amount and unit, and only standards on
//! the preference's replace-list are rewritten at all.

use heapless::Vec;

use crate::compute::AirQualityResult;
use crate::constants::{MAX_POLLUTANTS, MAX_REPLACE_STANDARDS};
use crate::reading::{
    stp_factor, ConcentrationUnit, Pollutant, PollutantReading, StpReference,
};
use crate::standards::{standard, StandardDefinition, StandardName};
use crate::units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display units requested for reconciled readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitsMode {
    /// Each standard's own table units
    #[default]
    Scale,
    /// Mass units; CO in mg/m³
    Ugm3,
    /// Volumetric at the EU reference; CO in ppm, particulates untouched
    EuPpb,
    /// Volumetric at the US reference; CO in ppm, particulates untouched
    UsPpb,
    /// µg/m³ for everything, CO included
    ForceUgm3,
    /// ppb at the EU reference for everything except particulates
    ForceEuPpb,
    /// ppb at the US reference for everything except particulates
    ForceUsPpb,
}

/// Display preferences for reconciliation
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPreferences {
    /// Requested unit mode
    pub units_mode: UnitsMode,
    /// Standards whose readings are rewritten; others display as computed
    pub replace: Vec<StandardName, MAX_REPLACE_STANDARDS>,
}

/// Merge base and injected results and rewrite the readings for display.
///
/// `current_reference` names the STP reference the winning result's
/// volumetric readings are expressed in; it is consulted only for those.
pub fn reconcile_pollutants(
    base: &AirQualityResult,
    injected: Option<&AirQualityResult>,
    preferences: &DisplayPreferences,
    current_reference: StpReference,
) -> Vec<PollutantReading, MAX_POLLUTANTS> {
    let active = match injected {
        Some(candidate) if !candidate.unavailable => candidate,
        _ => base,
    };
    let mut readings = active.pollutants.clone();

    if !preferences.replace.contains(&active.standard) {
        return readings;
    }
    let definition = match standard(active.standard) {
        Some(definition) => definition,
        None => return readings,
    };

    for reading in readings.iter_mut() {
        let (unit, to_stp) =
            match display_target(preferences.units_mode, reading.pollutant, definition) {
                Some(target) => target,
                None => continue,
            };
        let from_stp = if reading.unit.is_volumetric() {
            stp_factor(reading.pollutant, current_reference)
        } else {
            None
        };
        match units::convert(reading.amount, reading.unit, unit, from_stp, to_stp) {
            Ok(amount) => {
                reading.amount = amount;
                reading.unit = unit;
            }
            Err(error) => {
                log_warn!(
                    "{}: display conversion failed, keeping {}: {}",
                    reading.pollutant.symbol(),
                    reading.unit.symbol(),
                    error
                );
            }
        }
    }
    readings
}

/// Target unit and STP factor for one pollutant, or `None` to skip it.
fn display_target(
    mode: UnitsMode,
    pollutant: Pollutant,
    definition: &StandardDefinition,
) -> Option<(ConcentrationUnit, Option<f64>)> {
    match mode {
        UnitsMode::Scale => definition
            .scale_for(pollutant)
            .map(|scale| (scale.target_unit, scale.stp)),
        UnitsMode::Ugm3 => {
            let unit = if pollutant == Pollutant::Co {
                ConcentrationUnit::MilligramsPerCubicMeter
            } else {
                ConcentrationUnit::MicrogramsPerCubicMeter
            };
            Some((unit, None))
        }
        UnitsMode::ForceUgm3 => Some((ConcentrationUnit::MicrogramsPerCubicMeter, None)),
        UnitsMode::EuPpb | UnitsMode::UsPpb | UnitsMode::ForceEuPpb | UnitsMode::ForceUsPpb => {
            if pollutant.is_particulate() {
                return None;
            }
            let reference = match mode {
                UnitsMode::EuPpb | UnitsMode::ForceEuPpb => StpReference::Eu20C,
                _ => StpReference::Us25C,
            };
            let unit = match mode {
                UnitsMode::EuPpb | UnitsMode::UsPpb if pollutant == Pollutant::Co => {
                    ConcentrationUnit::PartsPerMillion
                }
                _ => ConcentrationUnit::PartsPerBillion,
            };
            Some((unit, stp_factor(pollutant, reference)))
        }
    }
}
