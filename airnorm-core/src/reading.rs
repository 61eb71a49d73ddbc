//! Pollutant Readings and Provider Metadata
//!
//! The input side of the data model: which pollutant was measured, how
//! much, in what unit, and (optionally) which provider reported it. The
//! provider matters only for one thing - picking the reference temperature
//! its volumetric concentrations were measured at, which selects the STP
//! factor table used by [`crate::units`].

use crate::constants;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pollutant kinds carried by provider payloads
///
/// `No` (nitric oxide) appears in some provider payloads but in no
/// standard's required set; it passes through computations unconverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Pollutant {
    /// Fine particulate matter, aerodynamic diameter below 2.5 µm
    Pm25 = 0,
    /// Coarse particulate matter, aerodynamic diameter below 10 µm
    Pm10 = 1,
    /// Ozone
    O3 = 2,
    /// Nitrogen dioxide
    No2 = 3,
    /// Sulphur dioxide
    So2 = 4,
    /// Carbon monoxide
    Co = 5,
    /// Nitric oxide
    No = 6,
}

impl Pollutant {
    /// All pollutant kinds, in payload order.
    pub const ALL: [Pollutant; 7] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::No,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "fine particulate matter",
            Pollutant::Pm10 => "coarse particulate matter",
            Pollutant::O3 => "ozone",
            Pollutant::No2 => "nitrogen dioxide",
            Pollutant::So2 => "sulphur dioxide",
            Pollutant::Co => "carbon monoxide",
            Pollutant::No => "nitric oxide",
        }
    }

    /// Get conventional display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::No => "NO",
        }
    }

    /// Particulates have no molecular weight and thus no volumetric form.
    pub const fn is_particulate(&self) -> bool {
        matches!(self, Pollutant::Pm25 | Pollutant::Pm10)
    }
}

/// Concentration units understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ConcentrationUnit {
    /// Micrograms per cubic metre (mass)
    MicrogramsPerCubicMeter = 0,
    /// Milligrams per cubic metre (mass)
    MilligramsPerCubicMeter = 1,
    /// Parts per billion by volume
    PartsPerBillion = 2,
    /// Parts per million by volume
    PartsPerMillion = 3,
}

impl ConcentrationUnit {
    /// Get conventional display symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            ConcentrationUnit::MicrogramsPerCubicMeter => "µg/m³",
            ConcentrationUnit::MilligramsPerCubicMeter => "mg/m³",
            ConcentrationUnit::PartsPerBillion => "ppb",
            ConcentrationUnit::PartsPerMillion => "ppm",
        }
    }

    /// Mass-based unit (µg/m³ or mg/m³)
    pub const fn is_mass(&self) -> bool {
        matches!(
            self,
            ConcentrationUnit::MicrogramsPerCubicMeter
                | ConcentrationUnit::MilligramsPerCubicMeter
        )
    }

    /// Volumetric unit (ppb or ppm)
    pub const fn is_volumetric(&self) -> bool {
        !self.is_mass()
    }

    /// Scale of this unit relative to its family base (µg/m³ or ppb).
    pub(crate) const fn base_scale(&self) -> f64 {
        match self {
            ConcentrationUnit::MicrogramsPerCubicMeter => 1.0,
            ConcentrationUnit::MilligramsPerCubicMeter => 1000.0,
            ConcentrationUnit::PartsPerBillion => 1.0,
            ConcentrationUnit::PartsPerMillion => 1000.0,
        }
    }
}

/// A single pollutant concentration as reported by a provider
///
/// A valid reading has `amount >= 0`; negative amounts are upstream error
/// sentinels and are rejected before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollutantReading {
    /// What was measured
    pub pollutant: Pollutant,
    /// How much, in `unit`
    pub amount: f64,
    /// Unit of `amount`
    pub unit: ConcentrationUnit,
}

impl PollutantReading {
    /// Create a reading.
    pub const fn new(pollutant: Pollutant, amount: f64, unit: ConcentrationUnit) -> Self {
        Self {
            pollutant,
            amount,
            unit,
        }
    }
}

/// Reference conditions a volumetric concentration was measured at
///
/// The reference temperature changes the molar volume and therefore the
/// mass equivalent of a ppb reading by about 1.6% - enough to move an
/// index across a category boundary near a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum StpReference {
    /// 25 °C, 1 atm - US EPA convention
    Us25C = 0,
    /// 20 °C, 101.325 kPa - EU directive convention
    Eu20C = 1,
}

impl StpReference {
    /// Molar volume of an ideal gas at these conditions (L/mol).
    pub const fn molar_volume_l_per_mol(&self) -> f64 {
        match self {
            StpReference::Us25C => constants::MOLAR_VOLUME_25C_L_PER_MOL,
            StpReference::Eu20C => constants::MOLAR_VOLUME_20C_L_PER_MOL,
        }
    }
}

/// Upstream weather providers whose payloads feed this core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Provider {
    /// ColorfulClouds (caiyunapp.com)
    ColorfulClouds = 0,
    /// QWeather (qweather.com)
    QWeather = 1,
    /// World Air Quality Index project (aqicn.org)
    Waqi = 2,
}

impl Provider {
    /// Reference conditions of this provider's volumetric payloads.
    pub const fn stp_reference(&self) -> StpReference {
        match self {
            // CC publishes EU-referenced gas concentrations
            Provider::ColorfulClouds => StpReference::Eu20C,
            // QWeather and WAQI follow the EPA convention
            Provider::QWeather => StpReference::Us25C,
            Provider::Waqi => StpReference::Us25C,
        }
    }
}

/// STP conversion factor for a pollutant at a reference (µg/m³ per ppb).
///
/// `None` for particulates: PM has no molecular weight, so no volumetric
/// form exists and any volumetric↔mass conversion must fail loudly rather
/// than guess.
pub fn stp_factor(pollutant: Pollutant, reference: StpReference) -> Option<f64> {
    match (pollutant, reference) {
        (Pollutant::O3, StpReference::Us25C) => Some(constants::STP_O3_25C),
        (Pollutant::O3, StpReference::Eu20C) => Some(constants::STP_O3_20C),
        (Pollutant::No2, StpReference::Us25C) => Some(constants::STP_NO2_25C),
        (Pollutant::No2, StpReference::Eu20C) => Some(constants::STP_NO2_20C),
        (Pollutant::So2, StpReference::Us25C) => Some(constants::STP_SO2_25C),
        (Pollutant::So2, StpReference::Eu20C) => Some(constants::STP_SO2_20C),
        (Pollutant::Co, StpReference::Us25C) => Some(constants::STP_CO_25C),
        (Pollutant::Co, StpReference::Eu20C) => Some(constants::STP_CO_20C),
        (Pollutant::No, StpReference::Us25C) => Some(constants::STP_NO_25C),
        (Pollutant::No, StpReference::Eu20C) => Some(constants::STP_NO_20C),
        (Pollutant::Pm25, _) | (Pollutant::Pm10, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gases_have_factors_at_both_references() {
        for pollutant in [
            Pollutant::O3,
            Pollutant::No2,
            Pollutant::So2,
            Pollutant::Co,
            Pollutant::No,
        ] {
            for reference in [StpReference::Us25C, StpReference::Eu20C] {
                let factor = stp_factor(pollutant, reference).unwrap();
                assert!(factor > 0.0, "{} factor must be positive", pollutant.symbol());
            }
        }
    }

    #[test]
    fn particulates_have_no_factor() {
        assert_eq!(stp_factor(Pollutant::Pm25, StpReference::Us25C), None);
        assert_eq!(stp_factor(Pollutant::Pm10, StpReference::Eu20C), None);
    }

    #[test]
    fn eu_factors_exceed_us_factors() {
        // Colder reference means smaller molar volume, so more mass per ppb
        for pollutant in [Pollutant::O3, Pollutant::No2, Pollutant::So2, Pollutant::Co] {
            let us = stp_factor(pollutant, StpReference::Us25C).unwrap();
            let eu = stp_factor(pollutant, StpReference::Eu20C).unwrap();
            assert!(eu > us);
        }
    }

    #[test]
    fn factors_derive_from_molar_volumes() {
        // IUPAC 2021 molecular weights, g/mol
        let molecular_weights = [
            (Pollutant::O3, 48.00),
            (Pollutant::No2, 46.006),
            (Pollutant::So2, 64.066),
            (Pollutant::Co, 28.010),
            (Pollutant::No, 30.006),
        ];
        for (pollutant, weight) in molecular_weights {
            for reference in [StpReference::Us25C, StpReference::Eu20C] {
                let derived = weight / reference.molar_volume_l_per_mol();
                let published = stp_factor(pollutant, reference).unwrap();
                // Published factors are quoted to four decimals
                assert!(
                    (derived - published).abs() < 5e-5,
                    "{} at {:?}: derived {derived}, published {published}",
                    pollutant.symbol(),
                    reference
                );
            }
        }
    }

    #[test]
    fn unit_families() {
        assert!(ConcentrationUnit::MicrogramsPerCubicMeter.is_mass());
        assert!(ConcentrationUnit::MilligramsPerCubicMeter.is_mass());
        assert!(ConcentrationUnit::PartsPerBillion.is_volumetric());
        assert!(ConcentrationUnit::PartsPerMillion.is_volumetric());
    }

    #[test]
    fn provider_reference_mapping() {
        assert_eq!(Provider::QWeather.stp_reference(), StpReference::Us25C);
        assert_eq!(Provider::Waqi.stp_reference(), StpReference::Us25C);
        assert_eq!(
            Provider::ColorfulClouds.stp_reference(),
            StpReference::Eu20C
        );
    }

    #[test]
    fn symbols_are_stable() {
        assert_eq!(Pollutant::Pm25.symbol(), "PM2.5");
        assert_eq!(Pollutant::O3.name(), "ozone");
        assert_eq!(ConcentrationUnit::PartsPerBillion.symbol(), "ppb");
    }
}
