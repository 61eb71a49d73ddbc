//! Provider Unit Handling Example
//!
//! This example demonstrates how airnorm reconciles the unit
//! conventions of different weather providers before scoring.
//!
//! ## What You'll Learn
//!
//! - Why 100 ppb of ozone is not one fixed mass concentration
//! - How the provider's STP reference changes the converted amount
//! - Reading the normalized amounts back out of the result
//! - Scoring CO reported in ppm against a mg/m³ table
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_provider_units
//! ```

use airnorm_core::{
    compute_air_quality, ComputeOptions, ConcentrationUnit, Pollutant, PollutantReading, Provider,
    StandardName,
};

fn main() {
    println!("airnorm Provider Unit Handling Example");
    println!("======================================\n");

    // The same nominal reading: 100 ppb of ozone
    let ozone = [PollutantReading::new(
        Pollutant::O3,
        100.0,
        ConcentrationUnit::PartsPerBillion,
    )];

    println!("Scoring 100 ppb O3 under EPA NowCast:\n");

    // A ppb is a mole fraction; its mass equivalent depends on the
    // temperature the provider assumed. EU-referenced providers (20 °C)
    // pack more mass into the same ppb than US-referenced ones (25 °C),
    // so the EPA ppb table sees a slightly larger number.
    let sources = [
        (None, "no provider (amounts taken at face value)"),
        (Some(Provider::QWeather), "QWeather (US reference, 25 C)"),
        (
            Some(Provider::ColorfulClouds),
            "ColorfulClouds (EU reference, 20 C)",
        ),
    ];

    for (provider, description) in sources {
        let result = compute_air_quality(
            &ozone,
            StandardName::EpaNowcast,
            &ComputeOptions {
                provider,
                ..ComputeOptions::default()
            },
        );
        let converted = &result.pollutants[0];
        println!("  {}", description);
        println!(
            "    normalized: {:.4} {}  ->  index {}",
            converted.amount,
            converted.unit.symbol(),
            result.index
        );
    }
    println!();

    // Carbon monoxide arrives in ppm from many APIs while the Chinese
    // table is published in mg/m³. The conversion runs through µg/m³.
    println!("Scoring 2.0 ppm CO under HJ 633:\n");
    let carbon_monoxide = [PollutantReading::new(
        Pollutant::Co,
        2.0,
        ConcentrationUnit::PartsPerMillion,
    )];
    let result = compute_air_quality(
        &carbon_monoxide,
        StandardName::Hj633,
        &ComputeOptions {
            provider: Some(Provider::QWeather),
            ..ComputeOptions::default()
        },
    );
    let converted = &result.pollutants[0];
    println!(
        "  normalized: {:.4} {}  ->  index {}",
        converted.amount,
        converted.unit.symbol(),
        result.index
    );
    println!();

    println!("{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Volumetric readings carry their provider's STP assumption");
    println!("- Shifting references re-routes the amount through µg/m³");
    println!("- US- and EU-referenced sources differ by a few percent");
    println!("- The result carries the normalized amounts it scored");
}
