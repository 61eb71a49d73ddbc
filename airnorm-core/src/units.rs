//! Concentration Unit Conversion
//!
//! ## Conversion paths
//!
//! Units fall into two families: mass (µg/m³, mg/m³) and volumetric
//! (ppb, ppm). Within a family the conversion is a fixed power-of-ten
//! rescale. Crossing families needs the pollutant's STP factor, the
//! mass of one ppb at the reference conditions:
//!
//! ```text
//! µg/m³ = ppb × factor        factor = MW / molar volume
//! ```
//!
//! ## The two-hop rule
//!
//! A ppb measured at 25 °C and a ppb measured at 20 °C are different
//! physical quantities: the same gas mass occupies a different volume.
//! Converting between them is therefore *not* an identity - it routes
//! through mass:
//!
//! ```text
//! ppb(US) × factor_US = µg/m³,   µg/m³ ÷ factor_EU = ppb(EU)
//! ```
//!
//! A direct copy would silently misreport every gas by the ratio of the
//! molar volumes (~1.6%), which is enough to shift an index near a
//! breakpoint. The converter takes the two-hop path whenever both sides
//! are volumetric and carry different positive factors.
//!
//! All arithmetic goes through [`crate::decimal`] so the published
//! four-decimal factors behave as the decimals they are.

use crate::{
    decimal,
    errors::{AqiError, AqiResult},
    reading::ConcentrationUnit,
};

/// Convert `amount` between concentration units.
///
/// `from_stp`/`to_stp` are the STP factors (µg/m³ per ppb) of the
/// respective sides; they are consulted only when the corresponding side
/// is volumetric. Missing or non-positive factors fail a cross-family
/// conversion with [`AqiError::MissingStpFactor`] - never a silent
/// default.
pub fn convert(
    amount: f64,
    from: ConcentrationUnit,
    to: ConcentrationUnit,
    from_stp: Option<f64>,
    to_stp: Option<f64>,
) -> AqiResult<f64> {
    if !amount.is_finite() {
        return Err(AqiError::InvalidAmount);
    }
    if amount < 0.0 {
        return Err(AqiError::NegativeAmount { amount });
    }

    match (from.is_mass(), to.is_mass()) {
        (true, true) => {
            if from == to {
                Ok(amount)
            } else {
                family_rescale(amount, from, to)
            }
        }
        (false, false) => match (positive(from_stp), positive(to_stp)) {
            // Different reference temperatures: route through mass
            (Some(from_factor), Some(to_factor)) if from_factor != to_factor => {
                let micrograms = mass_equivalent(amount, from, from_factor);
                let base_ppb = decimal::div(micrograms, to_factor)?;
                decimal::div(base_ppb, to.base_scale())
            }
            _ if from == to => Ok(amount),
            _ => family_rescale(amount, from, to),
        },
        (false, true) => {
            let factor =
                positive(from_stp).ok_or(AqiError::MissingStpFactor { unit: from })?;
            let micrograms = mass_equivalent(amount, from, factor);
            decimal::div(micrograms, to.base_scale())
        }
        (true, false) => {
            let factor = positive(to_stp).ok_or(AqiError::MissingStpFactor { unit: to })?;
            let micrograms = decimal::mul(amount, from.base_scale());
            let base_ppb = decimal::div(micrograms, factor)?;
            decimal::div(base_ppb, to.base_scale())
        }
    }
}

/// Rescale within one unit family (µg↔mg, ppb↔ppm).
fn family_rescale(amount: f64, from: ConcentrationUnit, to: ConcentrationUnit) -> AqiResult<f64> {
    let base = decimal::mul(amount, from.base_scale());
    decimal::div(base, to.base_scale())
}

/// Mass of a volumetric amount in µg/m³.
fn mass_equivalent(amount: f64, from: ConcentrationUnit, factor: f64) -> f64 {
    let base_ppb = decimal::mul(amount, from.base_scale());
    decimal::mul(base_ppb, factor)
}

fn positive(factor: Option<f64>) -> Option<f64> {
    factor.filter(|f| f.is_finite() && *f > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConcentrationUnit::*;

    #[test]
    fn same_unit_is_identity() {
        let out = convert(42.5, MicrogramsPerCubicMeter, MicrogramsPerCubicMeter, None, None);
        assert_eq!(out.unwrap(), 42.5);

        let out = convert(0.3, PartsPerMillion, PartsPerMillion, None, None);
        assert_eq!(out.unwrap(), 0.3);
    }

    #[test]
    fn mass_family_rescales_by_thousand() {
        let milligrams = convert(1500.0, MicrogramsPerCubicMeter, MilligramsPerCubicMeter, None, None);
        assert_eq!(milligrams.unwrap(), 1.5);

        let micrograms = convert(1.5, MilligramsPerCubicMeter, MicrogramsPerCubicMeter, None, None);
        assert_eq!(micrograms.unwrap(), 1500.0);
    }

    #[test]
    fn volumetric_family_rescales_by_thousand() {
        let ppm = convert(250.0, PartsPerBillion, PartsPerMillion, None, None);
        assert_eq!(ppm.unwrap(), 0.25);

        let ppb = convert(0.25, PartsPerMillion, PartsPerBillion, None, None);
        assert_eq!(ppb.unwrap(), 250.0);
    }

    #[test]
    fn equal_factors_stay_within_family() {
        // Same reference on both sides: plain ppb↔ppm rescale, no mass hop
        let ppm = convert(1000.0, PartsPerBillion, PartsPerMillion, Some(1.9632), Some(1.9632));
        assert_eq!(ppm.unwrap(), 1.0);
    }

    #[test]
    fn volumetric_to_mass_applies_factor() {
        // 100 ppb O3 at the US reference
        let micrograms = convert(100.0, PartsPerBillion, MicrogramsPerCubicMeter, Some(1.9632), None);
        assert_eq!(micrograms.unwrap(), 196.32);

        // 9.4 ppm CO at the US reference, surfaced in mg/m³
        let milligrams = convert(9.4, PartsPerMillion, MilligramsPerCubicMeter, Some(1.1456), None);
        assert_eq!(milligrams.unwrap(), 10.76864);
    }

    #[test]
    fn mass_to_volumetric_applies_factor() {
        let ppb = convert(196.32, MicrogramsPerCubicMeter, PartsPerBillion, None, Some(1.9632));
        assert_eq!(ppb.unwrap(), 100.0);
    }

    #[test]
    fn cross_family_without_factor_fails() {
        let out = convert(10.0, PartsPerBillion, MicrogramsPerCubicMeter, None, None);
        assert_eq!(
            out,
            Err(AqiError::MissingStpFactor {
                unit: PartsPerBillion
            })
        );

        // Non-positive factors are as missing
        let out = convert(10.0, MicrogramsPerCubicMeter, PartsPerBillion, None, Some(0.0));
        assert!(matches!(out, Err(AqiError::MissingStpFactor { .. })));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let out = convert(-1.0, PartsPerBillion, PartsPerMillion, None, None);
        assert_eq!(out, Err(AqiError::NegativeAmount { amount: -1.0 }));
    }

    #[test]
    fn non_finite_amount_is_rejected() {
        assert_eq!(
            convert(f64::NAN, PartsPerBillion, PartsPerBillion, None, None),
            Err(AqiError::InvalidAmount)
        );
        assert_eq!(
            convert(f64::INFINITY, PartsPerBillion, PartsPerMillion, None, None),
            Err(AqiError::InvalidAmount)
        );
    }

    #[test]
    fn reference_shift_routes_through_mass() {
        // 100 ppb at 25 °C reinterpreted at 20 °C shrinks by Vm_EU/Vm_US
        let shifted = convert(
            100.0,
            PartsPerBillion,
            PartsPerBillion,
            Some(1.9632),
            Some(1.9950),
        )
        .unwrap();

        assert!(shifted < 100.0);

        // Must equal the explicit two-step composition
        let micrograms =
            convert(100.0, PartsPerBillion, MicrogramsPerCubicMeter, Some(1.9632), None).unwrap();
        let manual =
            convert(micrograms, MicrogramsPerCubicMeter, PartsPerBillion, None, Some(1.9950))
                .unwrap();
        assert_eq!(shifted, manual);
    }

    #[test]
    fn round_trip_is_lossless() {
        for amount in [0.0, 0.3, 9.05, 100.0, 612.5] {
            let mass =
                convert(amount, PartsPerBillion, MicrogramsPerCubicMeter, Some(2.6203), None)
                    .unwrap();
            let back =
                convert(mass, MicrogramsPerCubicMeter, PartsPerBillion, None, Some(2.6203))
                    .unwrap();
            assert!((back - amount).abs() < 1e-9, "{amount} -> {mass} -> {back}");
        }
    }
}
