//! Constants for airnorm Core
//!
//! Centralized numeric constants with their provenance. Standard-specific
//! breakpoint tables live with their standard under [`crate::standards`];
//! this module holds the cross-standard values: STP conversion factors,
//! reference molar volumes, and fixed capacities.
//!
//! STP factors convert a gas between volumetric and mass concentration:
//!
//! ```text
//! µg/m³ = ppb × (MW / Vm)
//! ```
//!
//! where MW is the molecular weight (g/mol) and Vm the molar volume of an
//! ideal gas at the reference conditions. Factors below are quoted to four
//! decimals, the precision regulatory converters publish. They are named
//! by reference temperature: 25 °C is the US EPA convention (adopted by
//! China's GB 3095 in its 2018 modification), 20 °C the EU directive
//! convention.

// ===== REFERENCE CONDITIONS =====

/// Molar volume of an ideal gas at 25 °C and 1 atm (L/mol).
///
/// Source: 40 CFR Part 50, Appendix H
pub const MOLAR_VOLUME_25C_L_PER_MOL: f64 = 24.45;

/// Molar volume of an ideal gas at 20 °C and 101.325 kPa (L/mol).
///
/// Source: Directive 2008/50/EC, Annex VI
pub const MOLAR_VOLUME_20C_L_PER_MOL: f64 = 24.06;

// ===== STP CONVERSION FACTORS (µg/m³ per ppb) =====
//
// Factor = MW / molar volume. Molecular weights from IUPAC 2021 atomic
// weights: O3 48.00, NO2 46.006, SO2 64.066, CO 28.010, NO 30.006 g/mol.

/// Ozone at 25 °C: 48.00 / 24.45.
pub const STP_O3_25C: f64 = 1.9632;
/// Ozone at 20 °C: 48.00 / 24.06.
pub const STP_O3_20C: f64 = 1.9950;

/// Nitrogen dioxide at 25 °C: 46.006 / 24.45.
pub const STP_NO2_25C: f64 = 1.8816;
/// Nitrogen dioxide at 20 °C: 46.006 / 24.06.
pub const STP_NO2_20C: f64 = 1.9121;

/// Sulphur dioxide at 25 °C: 64.066 / 24.45.
pub const STP_SO2_25C: f64 = 2.6203;
/// Sulphur dioxide at 20 °C: 64.066 / 24.06.
pub const STP_SO2_20C: f64 = 2.6628;

/// Carbon monoxide at 25 °C: 28.010 / 24.45.
pub const STP_CO_25C: f64 = 1.1456;
/// Carbon monoxide at 20 °C: 28.010 / 24.06.
pub const STP_CO_20C: f64 = 1.1642;

/// Nitric oxide at 25 °C: 30.006 / 24.45.
pub const STP_NO_25C: f64 = 1.2272;
/// Nitric oxide at 20 °C: 30.006 / 24.06.
pub const STP_NO_20C: f64 = 1.2471;

// ===== CAPACITIES =====

/// Maximum pollutants carried through a computation.
///
/// Seven known pollutant kinds plus one slot of headroom; provider payloads
/// never exceed this.
pub const MAX_POLLUTANTS: usize = 8;

/// Maximum standards in a display replace-list.
pub const MAX_REPLACE_STANDARDS: usize = 8;

/// Hourly history window for the NowCast weighted average.
///
/// Source: EPA NowCast technical note (AirNow), 12-hour window
pub const NOWCAST_WINDOW_HOURS: usize = 12;
