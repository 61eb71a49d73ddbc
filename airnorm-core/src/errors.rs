//! Error Types for Index Computation and Unit Conversion
//!
//! ## Design Philosophy
//!
//! The error system follows the same constraints as the rest of the core:
//!
//! 1. **Small Size**: Every variant carries at most a couple of scalars or a
//!    `&'static str`, so errors stay cheap to return from hot interpolation
//!    and conversion paths.
//!
//! 2. **No Heap Allocation**: No `String` anywhere - all payloads are inline.
//!    This keeps the crate usable on no_std targets.
//!
//! 3. **Copy Semantics**: Errors implement Copy so callers can stash or
//!    re-report them without move gymnastics.
//!
//! 4. **Locally Resolvable**: Nothing in this taxonomy is fatal. A failed
//!    conversion degrades one pollutant to "not computable"; a completely
//!    empty input degrades the whole result to `unavailable`. Callers never
//!    need to unwind.
//!
//! ## Error Categories
//!
//! ### Invalid Input
//! - `NegativeAmount`: concentrations are physical quantities; a negative
//!   amount is an upstream sentinel that must not reach arithmetic
//! - `InvalidAmount`: mathematically invalid (NaN, infinity)
//! - `MissingStpFactor`: a volumetric↔mass conversion was requested for a
//!   pollutant with no molecular-weight factor (particulates)
//!
//! An "unsupported unit" category from older converters does not exist
//! here: `ConcentrationUnit` is a closed enum, so every pair has a defined
//! conversion path and the compiler enforces exhaustiveness.
//!
//! ### Arithmetic
//! - `DivisionByZero`: raised by the decimal division helper; surfaces
//!   zero-width breakpoint rows and degenerate factors

use crate::reading::ConcentrationUnit;
use thiserror_no_std::Error;

/// Result type for index and conversion operations
pub type AqiResult<T> = Result<T, AqiError>;

/// Computation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AqiError {
    /// Division by zero in decimal arithmetic
    #[error("Division by zero")]
    DivisionByZero,

    /// Negative concentration where a physical amount is required
    #[error("Negative amount {amount} is not a physical concentration")]
    NegativeAmount {
        /// The offending input amount
        amount: f64,
    },

    /// Amount makes no numeric sense (NaN, infinity)
    #[error("Invalid amount: not a finite number")]
    InvalidAmount,

    /// Volumetric conversion requested without a positive STP factor
    #[error("Missing STP factor for volumetric unit {unit:?}")]
    MissingStpFactor {
        /// The volumetric unit that needed a factor
        unit: ConcentrationUnit,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DivisionByZero => defmt::write!(fmt, "Division by zero"),
            Self::NegativeAmount { amount } => defmt::write!(fmt, "Negative amount {}", amount),
            Self::InvalidAmount => defmt::write!(fmt, "Invalid amount"),
            Self::MissingStpFactor { .. } => defmt::write!(fmt, "Missing STP factor"),
        }
    }
}
