//! Sub-Index Interpolation
//!
//! ## From concentration to sub-index
//!
//! Every standard scores a pollutant the same way: find the breakpoint
//! row whose concentration interval holds the amount, then interpolate
//! linearly onto the row's index interval. The row search and the
//! interpolation use different views of the amount:
//!
//! - **Row search** compares the amount ceiled to the row bounds' own
//!   precision ([`crate::decimal::ceil_to`]). That closes the one-step
//!   gaps in US tables (`9.05` matches the `[9.1, 35.4]` row) and makes
//!   shared boundaries in Chinese and German tables deterministic: the
//!   first matching row wins, so a boundary value scores on the lower
//!   row and lands exactly on the boundary index.
//! - **Interpolation** always uses the raw amount, multiplied before
//!   dividing so that boundary values come out decimal-exact.
//!
//! ## Out-of-range amounts
//!
//! Below the first row the sub-index clamps to the row floor. Above the
//! last row the scale's documented fallback table is consulted first
//! (HJ 633 1-hour SO₂, EPA 8-hour ozone); without one, or beyond the
//! fallback's own ceiling, the top row's interpolation keeps running
//! with its base moved to the row's upper index, so the sub-index keeps
//! growing. Whether an over-range composite is clamped back down is
//! decided per standard in [`crate::compute`], not here.
//!
//! Unusable amounts produce [`INDEX_UNAVAILABLE`], never an error: one
//! bad pollutant must not take down the composite.

use crate::decimal;
use crate::reading::Pollutant;
use crate::standards::{Breakpoint, CategoryBand, PollutantScale};

/// Sub-index value when a pollutant cannot be scored.
pub const INDEX_UNAVAILABLE: f64 = -1.0;

/// One pollutant's contribution to the composite index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubIndex {
    /// The scored pollutant
    pub pollutant: Pollutant,
    /// Interpolated index, or [`INDEX_UNAVAILABLE`]
    pub index: f64,
}

/// Score one pollutant amount against a standard's scale.
///
/// `amount` must already be in the scale's target unit; conversion is the
/// caller's job. A non-finite or negative amount yields
/// [`INDEX_UNAVAILABLE`].
pub fn pollutant_to_index(pollutant: Pollutant, amount: f64, scale: &PollutantScale) -> SubIndex {
    SubIndex {
        pollutant,
        index: index_for_amount(pollutant, amount, scale),
    }
}

fn index_for_amount(pollutant: Pollutant, amount: f64, scale: &PollutantScale) -> f64 {
    if !amount.is_finite() || amount < 0.0 {
        log_warn!(
            "{}: amount {} is not scorable",
            pollutant.symbol(),
            amount
        );
        return INDEX_UNAVAILABLE;
    }

    let rows = scale.breakpoints;
    let (first, last) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return INDEX_UNAVAILABLE,
    };

    if amount < first.amount_lo {
        log_warn!(
            "{}: {} below the table floor {}, clamping",
            pollutant.symbol(),
            amount,
            first.amount_lo
        );
        return first.index_lo;
    }

    if amount > last.amount_hi {
        log_warn!(
            "{}: {} above the table ceiling {}",
            pollutant.symbol(),
            amount,
            last.amount_hi
        );
        if let Some(fallback) = scale.over_range_fallback {
            if let Some(row) = matching_row(amount, fallback) {
                return interpolate(amount, row);
            }
            if let Some(top) = fallback.last() {
                if amount > top.amount_hi {
                    return extrapolate(amount, top);
                }
            }
        }
        return extrapolate(amount, last);
    }

    match matching_row(amount, rows) {
        Some(row) => interpolate(amount, row),
        None => {
            log_warn!("{}: no row holds {}", pollutant.symbol(), amount);
            INDEX_UNAVAILABLE
        }
    }
}

/// First row whose interval holds the amount, ceiled to row precision.
fn matching_row(amount: f64, rows: &[Breakpoint]) -> Option<&Breakpoint> {
    rows.iter().find(|row| {
        let precision = decimal::decimal_places(row.amount_lo)
            .max(decimal::decimal_places(row.amount_hi));
        let snapped = decimal::ceil_to(amount, precision);
        snapped >= row.amount_lo && snapped <= row.amount_hi
    })
}

/// Linear blend of the raw amount onto the row's index interval.
///
/// Multiplies before dividing: `rise × offset` is an exact decimal for
/// every published table, so an amount on a row bound reproduces the
/// bound's index without residue.
fn interpolate(amount: f64, row: &Breakpoint) -> f64 {
    let rise = decimal::sub(row.index_hi, row.index_lo);
    let run = decimal::sub(row.amount_hi, row.amount_lo);
    let offset = decimal::sub(amount, row.amount_lo);
    match decimal::div(decimal::mul(rise, offset), run) {
        Ok(scaled) => decimal::add(scaled, row.index_lo),
        Err(_) => row.index_lo,
    }
}

/// Score above the top row's ceiling.
///
/// The row's blend keeps running with the offset still anchored at
/// `amount_lo`, but the base moves to `index_hi`.
fn extrapolate(amount: f64, top: &Breakpoint) -> f64 {
    let rise = decimal::sub(top.index_hi, top.index_lo);
    let run = decimal::sub(top.amount_hi, top.amount_lo);
    let offset = decimal::sub(amount, top.amount_lo);
    match decimal::div(decimal::mul(rise, offset), run) {
        Ok(scaled) => decimal::add(scaled, top.index_hi),
        Err(_) => top.index_hi,
    }
}

/// Category band holding an index value, or `-1` when none does.
///
/// The index is ceiled to each band's precision before the comparison,
/// mirroring the row search: `50.2` under a gapped integer banding
/// (`[0, 50]`, `[51, 100]`) belongs to the second band, and float noise
/// within tolerance of a bound snaps back onto it. An unbounded top band
/// accepts everything above its floor.
pub fn category_for(index: f64, bands: &[CategoryBand]) -> i8 {
    if !index.is_finite() || index < 0.0 {
        return -1;
    }
    for band in bands {
        let precision = decimal::decimal_places(band.index_lo)
            .max(decimal::decimal_places(band.index_hi));
        let snapped = decimal::ceil_to(index, precision);
        if snapped >= band.index_lo && (band.index_hi.is_infinite() || snapped <= band.index_hi) {
            return band.category;
        }
    }
    -1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::ConcentrationUnit;

    static ROWS: [Breakpoint; 2] = [
        Breakpoint::new(10.0, 20.0, 0.0, 50.0),
        Breakpoint::new(20.0, 40.0, 50.0, 100.0),
    ];
    static FALLBACK: [Breakpoint; 1] = [Breakpoint::new(40.0, 80.0, 100.0, 200.0)];

    fn scale(fallback: Option<&'static [Breakpoint]>) -> PollutantScale {
        PollutantScale {
            target_unit: ConcentrationUnit::MicrogramsPerCubicMeter,
            stp: None,
            breakpoints: &ROWS,
            over_range_fallback: fallback,
        }
    }

    #[test]
    fn interpolates_inside_a_row() {
        let sub = pollutant_to_index(Pollutant::Pm25, 15.0, &scale(None));
        assert_eq!(sub.index, 25.0);
        assert_eq!(sub.pollutant, Pollutant::Pm25);
    }

    #[test]
    fn interpolation_is_decimal_exact() {
        static TENTHS: [Breakpoint; 1] = [Breakpoint::new(0.0, 0.3, 0.0, 3.0)];
        let scale = PollutantScale {
            target_unit: ConcentrationUnit::PartsPerMillion,
            stp: None,
            breakpoints: &TENTHS,
            over_range_fallback: None,
        };
        // 3 × 0.1 / 0.3 in binary floats is 1.0000000000000002
        let sub = pollutant_to_index(Pollutant::Co, 0.1, &scale);
        assert_eq!(sub.index, 1.0);
    }

    #[test]
    fn shared_boundary_scores_on_the_lower_row() {
        let sub = pollutant_to_index(Pollutant::Pm25, 20.0, &scale(None));
        assert_eq!(sub.index, 50.0);
    }

    #[test]
    fn below_floor_clamps_to_floor_index() {
        let sub = pollutant_to_index(Pollutant::Pm25, 5.0, &scale(None));
        assert_eq!(sub.index, 0.0);
    }

    #[test]
    fn unscorable_amounts_are_unavailable() {
        assert_eq!(
            pollutant_to_index(Pollutant::Pm25, f64::NAN, &scale(None)).index,
            INDEX_UNAVAILABLE
        );
        assert_eq!(
            pollutant_to_index(Pollutant::Pm25, -4.0, &scale(None)).index,
            INDEX_UNAVAILABLE
        );
    }

    #[test]
    fn over_range_rebases_on_the_top_index() {
        // Offset 24 from the row floor at slope 2.5, on base 100
        let sub = pollutant_to_index(Pollutant::Pm25, 44.0, &scale(None));
        assert_eq!(sub.index, 160.0);
    }

    #[test]
    fn over_range_prefers_the_fallback_table() {
        let sub = pollutant_to_index(Pollutant::Pm25, 60.0, &scale(Some(&FALLBACK)));
        assert_eq!(sub.index, 150.0);
    }

    #[test]
    fn beyond_the_fallback_ceiling_rebases_on_its_top_row() {
        // Offset 44 from the fallback floor at slope 2.5, on base 200
        let sub = pollutant_to_index(Pollutant::Pm25, 84.0, &scale(Some(&FALLBACK)));
        assert_eq!(sub.index, 310.0);
    }

    #[test]
    fn category_matching_uses_band_precision() {
        static BANDS: [CategoryBand; 2] = [
            CategoryBand::new(1, 0.0, 50.0, "good"),
            CategoryBand::new(2, 51.0, f64::INFINITY, "bad"),
        ];
        assert_eq!(category_for(50.0, &BANDS), 1);
        assert_eq!(category_for(50.2, &BANDS), 2);
        assert_eq!(category_for(500.0, &BANDS), 2);
        assert_eq!(category_for(INDEX_UNAVAILABLE, &BANDS), -1);
        assert_eq!(category_for(f64::NAN, &BANDS), -1);
    }

    #[test]
    fn empty_band_list_is_uncategorized() {
        assert_eq!(category_for(10.0, &[]), -1);
    }
}
