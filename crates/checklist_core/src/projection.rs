//! Derived read-only projections over effective items.
//!
//! # Responsibility
//! - Compute per-section counts and global progress from reconciled state.
//!
//! # Invariants
//! - Projections are recomputed on demand and never stored.
//! - Soft-deleted items contribute to no count.

use crate::model::catalog::{Catalog, Section};
use crate::reconcile::effective_items;
use crate::store::state::ChecklistState;

/// Checked/total counts for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCounts {
    pub checked: usize,
    pub total: usize,
}

/// Global progress over all sections' effective items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
    /// `round(checked / total * 100)`, `0` when `total == 0`.
    pub percent: u8,
}

pub fn section_counts(section: &Section, state: &ChecklistState) -> SectionCounts {
    let items = effective_items(section, state);
    let checked = items
        .iter()
        .filter(|item| state.is_checked(&item.id))
        .count();
    SectionCounts {
        checked,
        total: items.len(),
    }
}

pub fn global_progress(catalog: &Catalog, state: &ChecklistState) -> Progress {
    let mut checked = 0;
    let mut total = 0;
    for section in catalog.sections() {
        let counts = section_counts(section, state);
        checked += counts.checked;
        total += counts.total;
    }

    let percent = if total == 0 {
        0
    } else {
        ((checked as f64 / total as f64) * 100.0).round() as u8
    };

    Progress {
        checked,
        total,
        percent,
    }
}
