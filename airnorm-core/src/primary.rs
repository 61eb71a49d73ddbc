//! Primary Pollutant Selection
//!
//! The composite index under every supported standard is the worst
//! sub-index, and the pollutant responsible is the primary pollutant.
//! "Worst" is ordered by category first and index second, the way the
//! standards themselves rank severity; with one band list per standard
//! the two orderings agree, but category-first keeps the selection
//! stable if a banding ever maps overlapping index ranges.
//!
//! Unavailable sub-indices never participate: a payload with one broken
//! pollutant still produces a composite from the rest. Exact ties keep
//! the earliest sub-index, so selection is deterministic in payload
//! order.

use crate::index::{category_for, SubIndex, INDEX_UNAVAILABLE};
use crate::reading::Pollutant;
use crate::standards::CategoryBand;

/// Outcome of scanning the sub-indices for the worst entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Pollutant responsible for the composite, when one was scorable
    pub pollutant: Option<Pollutant>,
    /// Worst sub-index, or [`INDEX_UNAVAILABLE`]
    pub index: f64,
    /// Category of the worst sub-index, or `-1`
    pub category: i8,
}

impl Selection {
    /// Selection when nothing was scorable.
    pub const fn unavailable() -> Self {
        Self {
            pollutant: None,
            index: INDEX_UNAVAILABLE,
            category: -1,
        }
    }
}

/// Pick the worst scorable sub-index under the given banding.
pub fn select_primary(sub_indices: &[SubIndex], bands: &[CategoryBand]) -> Selection {
    let mut best = Selection::unavailable();
    for sub in sub_indices {
        if !sub.index.is_finite() || sub.index < 0.0 {
            continue;
        }
        let category = category_for(sub.index, bands);
        if category < 0 {
            continue;
        }
        // Strict comparison: ties keep the earliest sub-index
        let worse = category > best.category
            || (category == best.category && sub.index > best.index);
        if worse {
            best = Selection {
                pollutant: Some(sub.pollutant),
                index: sub.index,
                category,
            };
        }
    }

    if best.pollutant.is_some() {
        let peers = sub_indices
            .iter()
            .filter(|sub| sub.index.is_finite() && category_for(sub.index, bands) == best.category)
            .count();
        if peers > 1 {
            log_debug!("{} pollutants share the worst category", peers);
        }
    }
    best
}
