//! Decimal-Safe Arithmetic for Breakpoint Interpolation
//!
//! ## Motivation
//!
//! Every regulatory breakpoint table in this crate was authored in decimal:
//! `9.1 µg/m³`, `35.4 µg/m³`, index `50`. Binary floating point cannot
//! represent most of those values exactly, and naive arithmetic lets the
//! error show:
//!
//! ```text
//! 0.1 + 0.2                 = 0.30000000000000004
//! (100 - 51) / (35.4 - 9.1) = 1.8631178707224336  (last digits are noise)
//! ```
//!
//! Interpolating across a 0.3-wide ppm range with that noise moves results
//! across category boundaries. The fix used here is the classic scaled-
//! integer trick: count each operand's decimal places, scale both to `i128`,
//! do the operation in integer space, and rescale. Results are then
//! quantized to 15 significant digits so chained operations cannot
//! accumulate drift.
//!
//! ## Scope
//!
//! This is not a general decimal library. Operands are concentrations,
//! index values and published four-decimal conversion factors; the digit
//! counter caps at nine decimal places and anything finer falls back to
//! plain float arithmetic. That trade covers every table in
//! [`crate::standards`] with a wide margin.

use crate::errors::{AqiError, AqiResult};

/// Significant decimal digits preserved by [`quantize`].
pub const SIGNIFICANT_DIGITS: u32 = 15;

/// Deepest decimal place the digit counter will detect.
const MAX_DECIMAL_PLACES: u32 = 9;

/// Relative tolerance when deciding whether a scaled value is integral.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

fn pow10(exp: u32) -> f64 {
    libm::pow(10.0, exp as f64)
}

fn pow10_signed(exp: i32) -> f64 {
    libm::pow(10.0, exp as f64)
}

/// Count decimal places of `x`, capped at nine.
///
/// Works by repeated scaling: the first power of ten that brings `x` within
/// tolerance of an integer is its decimal-place count. The tolerance is
/// relative so large amounts (1013.25) behave like small ones (0.1).
pub(crate) fn decimal_places(x: f64) -> u32 {
    if !x.is_finite() {
        return 0;
    }
    let mut scaled = x;
    for places in 0..MAX_DECIMAL_PLACES {
        let nearest = libm::round(scaled);
        if libm::fabs(scaled - nearest) < relative_tolerance(scaled) {
            return places;
        }
        scaled *= 10.0;
    }
    MAX_DECIMAL_PLACES
}

fn relative_tolerance(scaled: f64) -> f64 {
    let magnitude = libm::fabs(scaled);
    if magnitude > 1.0 {
        INTEGRAL_TOLERANCE * magnitude
    } else {
        INTEGRAL_TOLERANCE
    }
}

fn to_scaled_int(x: f64, places: u32) -> i128 {
    libm::round(x * pow10(places)) as i128
}

/// Quantize to [`SIGNIFICANT_DIGITS`] significant decimal digits.
///
/// Applied after every operation so intermediate binary noise never
/// survives into a comparison against a table boundary.
pub fn quantize(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = libm::floor(libm::log10(libm::fabs(x)));
    let places = SIGNIFICANT_DIGITS as f64 - 1.0 - magnitude;
    if places <= 0.0 || places > 300.0 {
        // Already integral at this magnitude, or too small to rescale
        return x;
    }
    let scale = libm::pow(10.0, places);
    libm::round(x * scale) / scale
}

/// Decimal-exact addition: `0.1 + 0.2 == 0.3`.
pub fn add(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return a + b;
    }
    let places = decimal_places(a).max(decimal_places(b));
    match to_scaled_int(a, places).checked_add(to_scaled_int(b, places)) {
        Some(sum) => quantize(sum as f64 / pow10(places)),
        None => quantize(a + b),
    }
}

/// Decimal-exact subtraction: `0.3 - 0.1 == 0.2`.
pub fn sub(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return a - b;
    }
    let places = decimal_places(a).max(decimal_places(b));
    match to_scaled_int(a, places).checked_sub(to_scaled_int(b, places)) {
        Some(diff) => quantize(diff as f64 / pow10(places)),
        None => quantize(a - b),
    }
}

/// Decimal-exact multiplication: `1.1 * 1.1 == 1.21`.
pub fn mul(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return a * b;
    }
    let places_a = decimal_places(a);
    let places_b = decimal_places(b);
    match to_scaled_int(a, places_a).checked_mul(to_scaled_int(b, places_b)) {
        Some(product) => quantize(product as f64 / pow10(places_a + places_b)),
        None => quantize(a * b),
    }
}

/// Decimal division.
///
/// Fails with [`AqiError::DivisionByZero`] when `b == 0`. Quotients are
/// quantized; a denominator finer than the digit counter's resolution
/// falls back to plain float division.
pub fn div(a: f64, b: f64) -> AqiResult<f64> {
    if b == 0.0 {
        return Err(AqiError::DivisionByZero);
    }
    if !a.is_finite() || !b.is_finite() {
        return Ok(a / b);
    }
    let places_a = decimal_places(a);
    let places_b = decimal_places(b);
    let scaled_b = to_scaled_int(b, places_b);
    if scaled_b == 0 {
        // |b| below decimal resolution
        return Ok(quantize(a / b));
    }
    let scaled_a = to_scaled_int(a, places_a);
    let ratio = scaled_a as f64 / scaled_b as f64;
    Ok(quantize(ratio * pow10_signed(places_b as i32 - places_a as i32)))
}

/// Round to a fixed number of decimal places.
pub fn round_to(x: f64, places: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = pow10(places);
    libm::round(x * scale) / scale
}

/// Ceiling at a fixed number of decimal places.
///
/// Used for boundary matching: a value is compared against a table bound
/// only after being ceiled to the bound's own precision, so `9.05` tests
/// against the `[9.1, 35.4]` row rather than falling into the 0.1-wide gap
/// between rows. Scaled values within tolerance of an integer are snapped
/// first, so float noise like `5.000000000001` still ceils to `5`.
pub fn ceil_to(x: f64, places: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = pow10(places);
    let scaled = x * scale;
    let nearest = libm::round(scaled);
    let snapped = if libm::fabs(scaled - nearest) < relative_tolerance(scaled) {
        nearest
    } else {
        scaled
    };
    libm::ceil(snapped) / scale
}
