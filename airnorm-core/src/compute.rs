//! Composite Index Computation
//!
//! ## Pipeline
//!
//! [`compute_air_quality`] is the crate's main entry point. For one
//! payload of readings and one standard it:
//!
//! 1. copies the readings into the result (the display side works from
//!    these, converted or not)
//! 2. converts each required pollutant into its scale's target unit,
//!    using the provider's STP reference for volumetric readings and the
//!    scale's own factor when no provider is named
//! 3. scores each converted amount into a sub-index
//! 4. takes the worst sub-index as the composite and its pollutant as
//!    primary
//!
//! Readings the standard does not require pass through untouched. A
//! reading that fails conversion, or a required pollutant that is absent,
//! becomes an unavailable sub-index and drops out of selection; the
//! composite is unavailable only when nothing at all was scorable.
//!
//! ## Per-standard policy
//!
//! Three standards override the caller's options, because the behavior
//! is part of the standard rather than a preference:
//! - EU EAQI has an unbounded top band, so over-range clamping never
//!   applies
//! - UBA reports the category number as the index, and a worst-class
//!   reading can only stay worst-class, so clamping is moot
//! - InstantCast CN omits the primary pollutant while the index is 50
//!   or lower, unless the caller forces it

use heapless::Vec;

use crate::constants::MAX_POLLUTANTS;
use crate::index::{pollutant_to_index, SubIndex, INDEX_UNAVAILABLE};
use crate::primary::select_primary;
use crate::reading::{stp_factor, PollutantReading, Provider};
use crate::standards::{standard, StandardName};
use crate::units;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Caller preferences for one computation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputeOptions {
    /// Let the composite exceed the standard's reporting cap
    pub allow_over_range: bool,
    /// Report the primary pollutant even where the standard would omit it
    pub force_primary_pollutant: bool,
    /// Provider the readings came from; fixes the STP reference of
    /// volumetric readings
    pub provider: Option<Provider>,
}

/// Result of one composite computation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirQualityResult {
    /// Rounded composite index, `-1` when unavailable
    pub index: i32,
    /// Category of the worst sub-index, `-1` when unavailable
    pub category: i8,
    /// Whether the category reaches the standard's significance threshold
    pub is_significant: bool,
    /// Pollutant behind the composite, unless unavailable or suppressed
    pub primary_pollutant: Option<crate::reading::Pollutant>,
    /// The input readings, required ones converted to their scale units
    pub pollutants: Vec<PollutantReading, MAX_POLLUTANTS>,
    /// Standard this result was computed under
    pub standard: StandardName,
    /// No pollutant was scorable (or no standard was selected)
    pub unavailable: bool,
}

impl AirQualityResult {
    /// Result carrying no index, before or instead of a computation.
    pub const fn unavailable(standard: StandardName) -> Self {
        Self {
            index: -1,
            category: -1,
            is_significant: false,
            primary_pollutant: None,
            pollutants: Vec::new(),
            standard,
            unavailable: true,
        }
    }
}

/// Compute the composite index for one payload under one standard.
pub fn compute_air_quality(
    readings: &[PollutantReading],
    standard_name: StandardName,
    options: &ComputeOptions,
) -> AirQualityResult {
    let mut result = AirQualityResult::unavailable(standard_name);
    for reading in readings {
        if result.pollutants.push(*reading).is_err() {
            log_warn!(
                "payload exceeds {} pollutants, dropping {}",
                MAX_POLLUTANTS,
                reading.pollutant.symbol()
            );
        }
    }

    let definition = match standard(standard_name) {
        Some(definition) => definition,
        None => return result,
    };

    let allow_over_range = match standard_name {
        StandardName::EuEaqi | StandardName::Uba => true,
        _ => options.allow_over_range,
    };

    let mut sub_indices: Vec<SubIndex, MAX_POLLUTANTS> = Vec::new();
    for (pollutant, scale) in definition.scales {
        let sub = match result
            .pollutants
            .iter_mut()
            .find(|reading| reading.pollutant == *pollutant)
        {
            None => {
                log_warn!(
                    "{}: required by {} but not in the payload",
                    pollutant.symbol(),
                    definition.identifier
                );
                SubIndex {
                    pollutant: *pollutant,
                    index: INDEX_UNAVAILABLE,
                }
            }
            Some(reading) => {
                let from_stp = options
                    .provider
                    .and_then(|provider| stp_factor(*pollutant, provider.stp_reference()))
                    .or(scale.stp);
                match units::convert(
                    reading.amount,
                    reading.unit,
                    scale.target_unit,
                    from_stp,
                    scale.stp,
                ) {
                    Ok(amount) => {
                        reading.amount = amount;
                        reading.unit = scale.target_unit;
                        pollutant_to_index(*pollutant, amount, scale)
                    }
                    Err(error) => {
                        log_warn!("{}: conversion failed: {}", pollutant.symbol(), error);
                        SubIndex {
                            pollutant: *pollutant,
                            index: INDEX_UNAVAILABLE,
                        }
                    }
                }
            }
        };
        if sub_indices.push(sub).is_err() {
            // Cannot fire: no standard scores more pollutants than the cap
            break;
        }
    }

    let selection = select_primary(&sub_indices, definition.bands);
    if selection.index < 0.0 {
        log_warn!("{}: nothing scorable in the payload", definition.identifier);
        return result;
    }

    let mut composite = selection.index;
    if !allow_over_range {
        if let Some(max_index) = definition.max_index {
            if composite > max_index {
                log_warn!(
                    "{}: index {} clamped to the {} cap",
                    definition.identifier,
                    composite,
                    max_index
                );
                composite = max_index;
            }
        }
    }

    let index = match standard_name {
        // UBA's published index is the class number itself
        StandardName::Uba => selection.category as i32,
        _ => libm::round(composite) as i32,
    };

    let suppress_primary = matches!(
        standard_name,
        StandardName::InstantCastCn | StandardName::InstantCastCn25
    ) && !options.force_primary_pollutant
        && index <= 50;

    result.index = index;
    result.category = selection.category;
    result.is_significant = selection.category >= definition.significant_category;
    result.primary_pollutant = if suppress_primary {
        None
    } else {
        selection.pollutant
    };
    result.unavailable = false;
    result
}
