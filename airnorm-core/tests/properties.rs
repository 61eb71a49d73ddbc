//! Property tests over interpolation and unit conversion
//!
//! Covers:
//! - Monotonicity of the sub-index within any single breakpoint row
//! - Unit conversion round trips staying within floating tolerance
//! - Totality of the composite computation over non-negative readings

#![cfg(test)]

use proptest::prelude::*;

use airnorm_core::{
    compute_air_quality, constants, pollutant_to_index, standard, units, ComputeOptions,
    ConcentrationUnit, PollutantReading, StandardName,
};

/// Every STP factor shipped with the registered standards.
static STP_FACTORS: [f64; 10] = [
    constants::STP_O3_25C,
    constants::STP_O3_20C,
    constants::STP_NO2_25C,
    constants::STP_NO2_20C,
    constants::STP_SO2_25C,
    constants::STP_SO2_20C,
    constants::STP_CO_25C,
    constants::STP_CO_20C,
    constants::STP_NO_25C,
    constants::STP_NO_20C,
];

proptest! {
    #[test]
    fn sub_index_is_monotonic_within_a_row(
        standard_pick in 1usize..StandardName::ALL.len(),
        scale_pick in 0usize..8,
        row_pick in 0usize..8,
        f1 in 0.0f64..=1.0,
        f2 in 0.0f64..=1.0,
    ) {
        let name = StandardName::ALL[standard_pick];
        let definition = standard(name).unwrap();
        let (pollutant, scale) = &definition.scales[scale_pick % definition.scales.len()];
        let rows = scale.breakpoints;
        let row = &rows[row_pick % rows.len()];

        let span = row.amount_hi - row.amount_lo;
        let (below, above) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
        let a = row.amount_lo + below * span;
        let b = row.amount_lo + above * span;

        let at_a = pollutant_to_index(*pollutant, a, scale).index;
        let at_b = pollutant_to_index(*pollutant, b, scale).index;
        prop_assert!(at_a >= 0.0, "{a} on {} scored unavailable", definition.identifier);
        prop_assert!(at_b >= 0.0, "{b} on {} scored unavailable", definition.identifier);
        prop_assert!(
            at_a <= at_b,
            "{}: {a} -> {at_a} but {b} -> {at_b}",
            definition.identifier
        );
    }

    #[test]
    fn volumetric_round_trip_preserves_the_amount(
        raw in 1u64..=10_000_000u64,
        factor in prop::sample::select(&STP_FACTORS[..]),
    ) {
        // Three-decimal amounts, the finest resolution providers report
        let amount = raw as f64 / 1000.0;

        let mass = units::convert(
            amount,
            ConcentrationUnit::PartsPerBillion,
            ConcentrationUnit::MicrogramsPerCubicMeter,
            Some(factor),
            None,
        )
        .unwrap();
        let back = units::convert(
            mass,
            ConcentrationUnit::MicrogramsPerCubicMeter,
            ConcentrationUnit::PartsPerBillion,
            None,
            Some(factor),
        )
        .unwrap();

        let relative = ((back - amount) / amount).abs();
        prop_assert!(relative <= 1e-9, "{amount} ppb -> {mass} -> {back}");
    }

    #[test]
    fn mass_family_round_trip_is_exact(raw in 1u64..=10_000_000u64) {
        let amount = raw as f64 / 1000.0;

        let micro = units::convert(
            amount,
            ConcentrationUnit::MilligramsPerCubicMeter,
            ConcentrationUnit::MicrogramsPerCubicMeter,
            None,
            None,
        )
        .unwrap();
        let back = units::convert(
            micro,
            ConcentrationUnit::MicrogramsPerCubicMeter,
            ConcentrationUnit::MilligramsPerCubicMeter,
            None,
            None,
        )
        .unwrap();

        prop_assert_eq!(back, amount);
    }

    #[test]
    fn any_non_negative_reading_computes(
        standard_pick in 1usize..StandardName::ALL.len(),
        amount in 0.0f64..=2000.0,
    ) {
        let name = StandardName::ALL[standard_pick];
        let definition = standard(name).unwrap();
        let (pollutant, scale) = &definition.scales[0];
        let reading = PollutantReading::new(*pollutant, amount, scale.target_unit);

        let result = compute_air_quality(&[reading], name, &ComputeOptions::default());
        prop_assert!(!result.unavailable, "{}: {amount} went unavailable", definition.identifier);
        prop_assert!(result.index >= 0);
        prop_assert!(result.category >= 1);
    }
}
