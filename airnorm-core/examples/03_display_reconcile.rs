//! Display Reconciliation Example
//!
//! This example demonstrates preparing pollutant amounts for display
//! after the index is computed, honoring a user's unit preferences.
//!
//! ## What You'll Learn
//!
//! - Restating scored amounts in the user's preferred units
//! - How the replace list limits which standards get rewritten
//! - Letting an injected upstream result take over the display
//! - Force modes versus convention-following modes
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_display_reconcile
//! ```

use airnorm_core::{
    compute_air_quality, reconcile_pollutants, ComputeOptions, ConcentrationUnit,
    DisplayPreferences, Pollutant, PollutantReading, Provider, StandardName, StpReference,
    UnitsMode,
};

fn main() {
    println!("airnorm Display Reconciliation Example");
    println!("======================================\n");

    // A QWeather payload: gases in ppb, particulates in µg/m³
    let readings = [
        PollutantReading::new(
            Pollutant::Pm25,
            22.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        ),
        PollutantReading::new(Pollutant::O3, 60.0, ConcentrationUnit::PartsPerBillion),
        PollutantReading::new(Pollutant::No2, 30.0, ConcentrationUnit::PartsPerBillion),
    ];

    let result = compute_air_quality(
        &readings,
        StandardName::EuEaqi,
        &ComputeOptions {
            provider: Some(Provider::QWeather),
            ..ComputeOptions::default()
        },
    );
    println!(
        "Computed EU EAQI index {} from {} pollutants\n",
        result.index,
        result.pollutants.len()
    );

    // Scoring normalized everything to the EAQI µg/m³ tables. Display
    // now restates those amounts per the user's preference. The replace
    // list names the standards whose results we are allowed to rewrite.
    let mut preferences = DisplayPreferences::default();
    preferences.replace.push(StandardName::EuEaqi).unwrap();

    let modes = [
        (UnitsMode::Scale, "Scale (each standard's own units)"),
        (UnitsMode::Ugm3, "Ugm3 (mass units, CO in mg/m³)"),
        (UnitsMode::UsPpb, "UsPpb (gases in ppb, US reference)"),
        (UnitsMode::ForceUgm3, "ForceUgm3 (µg/m³ for everything)"),
    ];

    for (mode, description) in modes {
        preferences.units_mode = mode;
        let displayed = reconcile_pollutants(&result, None, &preferences, StpReference::Us25C);

        println!("{}", description);
        for reading in &displayed {
            println!(
                "  {:5} {:10.4} {}",
                reading.pollutant.symbol(),
                reading.amount,
                reading.unit.symbol()
            );
        }
        println!();
    }

    // An upstream service may inject its own authoritative result; when
    // it is usable, its readings drive the display instead of ours.
    let injected = compute_air_quality(
        &[PollutantReading::new(
            Pollutant::Pm25,
            75.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        )],
        StandardName::Hj633,
        &ComputeOptions::default(),
    );
    preferences.units_mode = UnitsMode::Scale;
    preferences.replace.push(StandardName::Hj633).unwrap();

    let displayed = reconcile_pollutants(&result, Some(&injected), &preferences, StpReference::Us25C);
    println!("With an injected HJ 633 result (index {}):", injected.index);
    for reading in &displayed {
        println!(
            "  {:5} {:10.4} {}",
            reading.pollutant.symbol(),
            reading.amount,
            reading.unit.symbol()
        );
    }
    println!();

    println!("{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Scoring units and display units are separate concerns");
    println!("- Results off the replace list pass through untouched");
    println!("- A usable injected result wins over the local one");
    println!("- Failed display conversions keep the scored amount");
}
