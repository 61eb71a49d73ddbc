//! Basic Index Computation Example
//!
//! This example demonstrates the simplest use case of airnorm:
//! scoring one pollutant payload under several regulatory standards.
//!
//! ## What You'll Learn
//!
//! - Building pollutant readings in provider units
//! - Computing a composite index for a chosen standard
//! - Reading the category, band label, and primary pollutant
//! - Why the same air scores differently under different standards
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_compute_index
//! ```

use airnorm_core::{
    compute_air_quality, standard, AirQualityResult, ComputeOptions, ConcentrationUnit, Pollutant,
    PollutantReading, StandardName,
};

fn main() {
    println!("airnorm Basic Index Computation Example");
    println!("=======================================\n");

    // One payload, as a European station might report it: everything
    // in µg/m³ except nothing exotic. CO and SO2 are absent on purpose;
    // standards score whatever subset they receive.
    let readings = [
        PollutantReading::new(
            Pollutant::Pm25,
            35.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        ),
        PollutantReading::new(
            Pollutant::Pm10,
            80.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        ),
        PollutantReading::new(
            Pollutant::O3,
            95.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        ),
        PollutantReading::new(
            Pollutant::No2,
            42.0,
            ConcentrationUnit::MicrogramsPerCubicMeter,
        ),
    ];

    println!("Input readings:");
    for reading in &readings {
        println!(
            "  {:5} {:6.1} {}",
            reading.pollutant.symbol(),
            reading.amount,
            reading.unit.symbol()
        );
    }
    println!();

    // The same air under three different rulebooks
    let standards = [
        StandardName::EuEaqi,
        StandardName::Hj633,
        StandardName::EpaNowcast,
    ];

    for name in standards {
        let result = compute_air_quality(&readings, name, &ComputeOptions::default());
        print_result(&result);
    }

    println!("{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- An index is only meaningful together with its standard");
    println!("- The primary pollutant is whichever sub-index is worst");
    println!("- Missing pollutants never block the composite");
    println!("- EPA scores gases in ppb; mass readings convert on the way in");
}

fn print_result(result: &AirQualityResult) {
    let definition = match standard(result.standard) {
        Some(definition) => definition,
        None => return,
    };

    println!("{} ({})", definition.identifier, definition.version);
    if result.unavailable {
        println!("  index unavailable\n");
        return;
    }

    let label = definition
        .bands
        .iter()
        .find(|band| band.category == result.category)
        .map(|band| band.label)
        .unwrap_or("?");
    let primary = result
        .primary_pollutant
        .map(|pollutant| pollutant.symbol())
        .unwrap_or("-");

    println!("  index:    {:3}", result.index);
    println!("  category: {} ({})", result.category, label);
    println!("  primary:  {}", primary);
    println!("  significant for health guidance: {}", result.is_significant);
    println!();
}
