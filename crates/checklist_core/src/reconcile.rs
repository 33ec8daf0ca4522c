//! Reconciler: effective items and order healing.
//!
//! # Responsibility
//! - Combine catalog and mutation store into the override-applied,
//!   non-deleted effective item list per section.
//! - Heal drift between the persisted order and the current effective id
//!   set (stale ids dropped, new ids appended in base order).
//!
//! # Invariants
//! - `reconcile_order` is idempotent: a second call with no intervening
//!   mutation changes nothing and reports no write-back.
//! - New catalog items with no order entry append at the section end in
//!   catalog order, never mid-sequence.

use crate::model::catalog::{CatalogItem, Section};
use crate::model::item::{CustomItem, EffectiveItem, ItemId, ItemOrigin};
use crate::store::state::ChecklistState;
use std::collections::HashMap;

/// Computes the effective item list for a section in base order: catalog
/// items first, then custom items in creation order, with overrides applied
/// and soft-deleted items dropped.
pub fn effective_items(section: &Section, state: &ChecklistState) -> Vec<EffectiveItem> {
    let mut items = Vec::with_capacity(
        section.items.len() + state.custom_items_for(&section.id).len(),
    );
    for item in &section.items {
        if let Some(resolved) = resolve_catalog_item(item, state) {
            items.push(resolved);
        }
    }
    for item in state.custom_items_for(&section.id) {
        if let Some(resolved) = resolve_custom_item(item, state) {
            items.push(resolved);
        }
    }
    items
}

/// Heals the persisted order for a section against its current effective
/// id set: the valid prefix of the stored order survives, missing ids are
/// appended in base order.
///
/// Returns `true` when the stored order changed, so the caller knows a
/// persist is due; an unchanged order is not written back.
pub fn reconcile_order(section: &Section, state: &mut ChecklistState) -> bool {
    let ids: Vec<ItemId> = effective_items(section, state)
        .into_iter()
        .map(|item| item.id)
        .collect();

    let persisted = state.order_for(&section.id);
    let mut next: Vec<ItemId> = persisted
        .iter()
        .filter(|id| ids.contains(id))
        .cloned()
        .collect();
    for id in &ids {
        if !next.contains(id) {
            next.push(id.clone());
        }
    }

    if next != persisted {
        state.set_order(&section.id, next);
        true
    } else {
        false
    }
}

/// Heals the order, then returns the effective items in persisted order.
///
/// Post-heal the mapping should be exact; defensively, order ids with no
/// matching item are dropped and unordered items are appended in base order
/// (covers additions within the same dispatch tick).
pub fn ordered_effective_items(
    section: &Section,
    state: &mut ChecklistState,
) -> Vec<EffectiveItem> {
    reconcile_order(section, state);

    let items = effective_items(section, state);
    let index: HashMap<&str, usize> = items
        .iter()
        .enumerate()
        .map(|(position, item)| (item.id.as_str(), position))
        .collect();

    let mut taken = vec![false; items.len()];
    let mut placement = Vec::with_capacity(items.len());
    for id in state.order_for(&section.id) {
        if let Some(&position) = index.get(id.as_str()) {
            if !taken[position] {
                taken[position] = true;
                placement.push(position);
            }
        }
    }
    for (position, placed) in taken.iter().enumerate() {
        if !placed {
            placement.push(position);
        }
    }

    let mut slots: Vec<Option<EffectiveItem>> = items.into_iter().map(Some).collect();
    placement
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect()
}

fn resolve_catalog_item(item: &CatalogItem, state: &ChecklistState) -> Option<EffectiveItem> {
    let meta = state.override_for(&item.id);
    if meta.is_some_and(|meta| meta.deleted) {
        return None;
    }

    let text = meta
        .and_then(|meta| meta.text.clone())
        .unwrap_or_else(|| item.text.clone());
    let hint = match meta.and_then(|meta| meta.hint.as_deref()) {
        Some(hint) => normalize_hint(hint),
        None => item.hint.clone(),
    };

    Some(EffectiveItem {
        id: item.id.clone(),
        text,
        hint,
        origin: ItemOrigin::Catalog,
    })
}

fn resolve_custom_item(item: &CustomItem, state: &ChecklistState) -> Option<EffectiveItem> {
    let meta = state.override_for(&item.id);
    if meta.is_some_and(|meta| meta.deleted) {
        return None;
    }

    let text = meta
        .and_then(|meta| meta.text.clone())
        .unwrap_or_else(|| item.text.clone());
    let hint = match meta.and_then(|meta| meta.hint.as_deref()) {
        Some(hint) => normalize_hint(hint),
        None => normalize_hint(&item.hint),
    };

    Some(EffectiveItem {
        id: item.id.clone(),
        text,
        hint,
        origin: ItemOrigin::Custom,
    })
}

// An empty hint means "no hint" on both the custom-item and override paths.
fn normalize_hint(hint: &str) -> Option<String> {
    if hint.is_empty() {
        None
    } else {
        Some(hint.to_string())
    }
}
