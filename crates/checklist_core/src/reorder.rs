//! Drag-and-drop reordering as an explicit finite-state interaction.
//!
//! # Responsibility
//! - Track one drag interaction (idle -> dragging -> hovering) decoupled
//!   from any widget toolkit's event model.
//! - Compute the committed permutation exactly once per drop.
//!
//! # Invariants
//! - Drag is confined to the origin section; cross-section hover and drop
//!   are no-ops.
//! - A commit yields at most one new order, for a single `set_order` call.

use crate::model::item::{ItemId, SectionId};

/// Where the dragged item lands relative to the hovered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

/// Current phase of a drag interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item_id: ItemId,
        section_id: SectionId,
    },
    Hovering {
        item_id: ItemId,
        section_id: SectionId,
        target_id: ItemId,
        position: DropPosition,
    },
}

/// One drag interaction, driven by discrete pointer events.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Starts dragging an item. Any interaction in flight is discarded.
    pub fn begin(&mut self, item_id: &str, section_id: &str) {
        self.state = DragState::Dragging {
            item_id: item_id.to_string(),
            section_id: section_id.to_string(),
        };
    }

    /// Records a hover over a potential drop target.
    ///
    /// Returns `false` without changing state when nothing is being dragged
    /// or the target lives in a different section.
    pub fn hover(&mut self, target_id: &str, target_section: &str, position: DropPosition) -> bool {
        let (item_id, section_id) = match &self.state {
            DragState::Idle => return false,
            DragState::Dragging {
                item_id,
                section_id,
            }
            | DragState::Hovering {
                item_id,
                section_id,
                ..
            } => (item_id.clone(), section_id.clone()),
        };
        if section_id != target_section {
            return false;
        }

        self.state = DragState::Hovering {
            item_id,
            section_id,
            target_id: target_id.to_string(),
            position,
        };
        true
    }

    /// Leaves the current hover target but keeps dragging.
    pub fn leave(&mut self) {
        if let DragState::Hovering {
            item_id,
            section_id,
            ..
        } = &self.state
        {
            self.state = DragState::Dragging {
                item_id: item_id.clone(),
                section_id: section_id.clone(),
            };
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Commits the drop against the given current order.
    ///
    /// Returns the section id and new permutation when the drop is valid;
    /// `None` when the session is not hovering, the drop lands on the
    /// dragged item itself, or either id is missing from the order. The
    /// session returns to idle either way.
    pub fn commit(&mut self, current_order: &[ItemId]) -> Option<(SectionId, Vec<ItemId>)> {
        let state = std::mem::take(&mut self.state);
        let DragState::Hovering {
            item_id,
            section_id,
            target_id,
            position,
        } = state
        else {
            return None;
        };

        let next = reordered(current_order, &item_id, &target_id, position)?;
        Some((section_id, next))
    }
}

/// Computes the permutation for moving `dragged_id` before/after
/// `target_id`. `None` when either id is absent or they are the same item.
pub fn reordered(
    order: &[ItemId],
    dragged_id: &str,
    target_id: &str,
    position: DropPosition,
) -> Option<Vec<ItemId>> {
    if dragged_id == target_id {
        return None;
    }
    let from = order.iter().position(|id| id == dragged_id)?;
    order.iter().position(|id| id == target_id)?;

    let mut next = order.to_vec();
    let moved = next.remove(from);
    let target_index = next.iter().position(|id| id == target_id)?;
    let insert_at = match position {
        DropPosition::Before => target_index,
        DropPosition::After => target_index + 1,
    };
    next.insert(insert_at, moved);
    Some(next)
}
