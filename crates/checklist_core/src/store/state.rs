//! Checklist mutation-store state and its atomic operations.
//!
//! # Responsibility
//! - Own the five persisted maps: check state, section meta, custom items,
//!   item overrides and per-section order.
//! - Expose the tolerant mutation operations the presentation layer calls.
//!
//! # Invariants
//! - Removing a custom item also removes its check entry and order entry.
//! - Soft-deleting a catalog item removes its order entry but leaves the
//!   check entry and any other override fields untouched.
//! - Unknown ids are silent no-ops on remove paths and tolerated upserts on
//!   write paths, so imports from other catalog versions keep working.

use crate::model::item::{CustomItem, ItemId, ItemOverride, ItemPatch, SectionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-section display metadata. Absent means expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMeta {
    #[serde(default)]
    pub collapsed: bool,
}

/// The serialized/persisted unit: every user mutation layered on the catalog.
///
/// A single explicitly-owned value; callers thread `&ChecklistState` (or
/// `&mut`) through reconciler and projection calls instead of relying on
/// ambient globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistState {
    pub(crate) checks: BTreeMap<ItemId, bool>,
    pub(crate) sections: BTreeMap<SectionId, SectionMeta>,
    pub(crate) custom_items: BTreeMap<SectionId, Vec<CustomItem>>,
    pub(crate) item_meta: BTreeMap<ItemId, ItemOverride>,
    pub(crate) order: BTreeMap<SectionId, Vec<ItemId>>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the check mark for an item; absent means unchecked.
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checks.get(item_id).copied().unwrap_or(false)
    }

    pub fn is_collapsed(&self, section_id: &str) -> bool {
        self.sections
            .get(section_id)
            .map(|meta| meta.collapsed)
            .unwrap_or(false)
    }

    pub fn custom_items_for(&self, section_id: &str) -> &[CustomItem] {
        self.custom_items
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn override_for(&self, item_id: &str) -> Option<&ItemOverride> {
        self.item_meta.get(item_id)
    }

    /// Persisted order sequence for a section; may be stale until the
    /// reconciler heals it.
    pub fn order_for(&self, section_id: &str) -> &[ItemId] {
        self.order
            .get(section_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sets or clears a check mark. The id need not exist in any catalog;
    /// tolerance keeps forward/backward compatible imports working.
    pub fn set_checked(&mut self, item_id: &str, checked: bool) {
        self.checks.insert(item_id.to_string(), checked);
    }

    pub fn set_section_collapsed(&mut self, section_id: &str, collapsed: bool) {
        self.sections
            .entry(section_id.to_string())
            .or_default()
            .collapsed = collapsed;
    }

    /// Adds a custom item and appends it to the section order.
    ///
    /// Returns `None` without mutating anything when `text` is blank after
    /// trimming.
    pub fn add_custom_item(
        &mut self,
        section_id: &str,
        text: &str,
        hint: &str,
    ) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let item = CustomItem::new(section_id, text, hint.trim());
        let id = item.id.clone();
        self.custom_items
            .entry(section_id.to_string())
            .or_default()
            .push(item);
        self.order
            .entry(section_id.to_string())
            .or_default()
            .push(id.clone());
        Some(id)
    }

    /// Hard-deletes a custom item: removes the record, its check entry and
    /// its order entry. Returns `false` (no-op) when the id is not found.
    pub fn remove_custom_item(&mut self, section_id: &str, item_id: &str) -> bool {
        let Some(items) = self.custom_items.get_mut(section_id) else {
            return false;
        };
        let Some(index) = items.iter().position(|item| item.id == item_id) else {
            return false;
        };

        items.remove(index);
        self.checks.remove(item_id);
        if let Some(order) = self.order.get_mut(section_id) {
            order.retain(|id| id != item_id);
        }
        true
    }

    /// Soft-deletes a catalog item: sets the override tombstone and removes
    /// the order entry. The check entry and other override fields survive so
    /// the item could be un-deleted by future logic.
    pub fn soft_delete_catalog_item(&mut self, section_id: &str, item_id: &str) {
        self.item_meta
            .entry(item_id.to_string())
            .or_default()
            .deleted = true;
        if let Some(order) = self.order.get_mut(section_id) {
            order.retain(|id| id != item_id);
        }
    }

    /// Upserts override text/hint for any item (catalog or custom); never
    /// touches the `deleted` flag.
    ///
    /// Returns `false` (no-op) when the patch carries nothing, or when its
    /// text is present but blank after trimming.
    pub fn edit_item(&mut self, item_id: &str, patch: &ItemPatch) -> bool {
        if patch.text.is_none() && patch.hint.is_none() {
            return false;
        }
        if let Some(text) = &patch.text {
            if text.trim().is_empty() {
                return false;
            }
        }

        let meta = self.item_meta.entry(item_id.to_string()).or_default();
        if let Some(text) = &patch.text {
            meta.text = Some(text.trim().to_string());
        }
        if let Some(hint) = &patch.hint {
            meta.hint = Some(hint.trim().to_string());
        }
        true
    }

    /// Replaces a section's persisted order wholesale. The reconciler heals
    /// any sequence that is not a valid permutation on next read.
    pub fn set_order(&mut self, section_id: &str, ids: Vec<ItemId>) {
        self.order.insert(section_id.to_string(), ids);
    }

    /// Removes every check entry while keeping structure, custom items and
    /// overrides.
    pub fn clear_all_checks(&mut self) {
        self.checks.clear();
    }
}
