//! Checklist use-case service.
//!
//! # Responsibility
//! - Expose every mutation-store operation plus reconciled reads to the
//!   presentation layer through one handle.
//! - Persist after each mutation (the caller batches nothing) and surface
//!   the "state changed" and short-lived status-message signals via
//!   [`Outcome`].
//!
//! # Invariants
//! - Read operations never persist, except the self-healing write-back of
//!   a drifted order array.
//! - Import parses fully before merging; a parse failure leaves the store
//!   untouched.

use crate::model::catalog::Catalog;
use crate::model::item::{EffectiveItem, ItemId, ItemPatch};
use crate::projection::{self, Progress, SectionCounts};
use crate::reconcile::{effective_items, reconcile_order};
use crate::reorder::{DragSession, DragState};
use crate::search::filter::{filter_catalog, FilterQuery, SectionMatches};
use crate::storage::{SnapshotStorage, StorageError};
use crate::store::snapshot::{self, SnapshotError};
use crate::store::state::ChecklistState;
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::SystemTime;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level failure surfaced to the presentation layer.
#[derive(Debug)]
pub enum ServiceError {
    /// Malformed import content; existing state is untouched.
    Snapshot(SnapshotError),
    /// Persist failure from the storage backend.
    Storage(StorageError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Snapshot(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<SnapshotError> for ServiceError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Short-lived status message for the presentation layer. Transient; when
/// several fire in quick succession the last one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    Saved,
    Imported,
    ItemAdded,
    ItemRemoved,
    ItemUpdated,
}

impl Toast {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Saved => "Saved",
            Self::Imported => "Imported",
            Self::ItemAdded => "Item added",
            Self::ItemRemoved => "Item removed",
            Self::ItemUpdated => "Item updated",
        }
    }
}

/// Result envelope of a mutating operation: whether a re-render is due,
/// which status message to flash, and the id of a freshly added item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub toast: Option<Toast>,
    /// Set only by [`ChecklistService::add_custom_item`].
    pub new_item_id: Option<ItemId>,
}

impl Outcome {
    fn noop() -> Self {
        Self {
            changed: false,
            toast: None,
            new_item_id: None,
        }
    }

    fn changed(toast: Toast) -> Self {
        Self {
            changed: true,
            toast: Some(toast),
            new_item_id: None,
        }
    }

    fn added(id: ItemId) -> Self {
        Self {
            changed: true,
            toast: Some(Toast::ItemAdded),
            new_item_id: Some(id),
        }
    }
}

/// Facade over catalog + mutation store + snapshot storage.
pub struct ChecklistService<S: SnapshotStorage> {
    catalog: Catalog,
    state: ChecklistState,
    storage: S,
}

impl<S: SnapshotStorage> ChecklistService<S> {
    /// Creates a service over the built-in catalog, loading whatever state
    /// the storage backend holds.
    pub fn new(storage: S) -> Self {
        Self::with_catalog(Catalog::builtin().clone(), storage)
    }

    pub fn with_catalog(catalog: Catalog, storage: S) -> Self {
        let state = storage.load();
        Self {
            catalog,
            state,
            storage,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn last_saved(&self) -> Option<SystemTime> {
        self.storage.last_saved()
    }

    pub fn set_checked(&mut self, item_id: &str, checked: bool) -> ServiceResult<Outcome> {
        self.state.set_checked(item_id, checked);
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    pub fn set_section_collapsed(
        &mut self,
        section_id: &str,
        collapsed: bool,
    ) -> ServiceResult<Outcome> {
        self.state.set_section_collapsed(section_id, collapsed);
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Adds a custom item; blank text is a silent no-op.
    pub fn add_custom_item(
        &mut self,
        section_id: &str,
        text: &str,
        hint: &str,
    ) -> ServiceResult<Outcome> {
        match self.state.add_custom_item(section_id, text, hint) {
            Some(id) => {
                info!("event=item_added status=ok section={section_id} item={id}");
                self.persist_state()?;
                Ok(Outcome::added(id))
            }
            None => Ok(Outcome::noop()),
        }
    }

    /// Hard-deletes a custom item; unknown ids are a silent no-op.
    pub fn remove_custom_item(
        &mut self,
        section_id: &str,
        item_id: &str,
    ) -> ServiceResult<Outcome> {
        if !self.state.remove_custom_item(section_id, item_id) {
            return Ok(Outcome::noop());
        }
        info!("event=item_removed status=ok section={section_id} item={item_id}");
        self.persist_state()?;
        Ok(Outcome::changed(Toast::ItemRemoved))
    }

    /// Soft-deletes a catalog item (tombstone override).
    pub fn soft_delete_catalog_item(
        &mut self,
        section_id: &str,
        item_id: &str,
    ) -> ServiceResult<Outcome> {
        self.state.soft_delete_catalog_item(section_id, item_id);
        info!("event=item_soft_deleted status=ok section={section_id} item={item_id}");
        self.persist_state()?;
        Ok(Outcome::changed(Toast::ItemRemoved))
    }

    /// Edits any item's text/hint through the shared override path; a
    /// blank-text patch is a silent no-op.
    pub fn edit_item(&mut self, item_id: &str, patch: &ItemPatch) -> ServiceResult<Outcome> {
        if !self.state.edit_item(item_id, patch) {
            return Ok(Outcome::noop());
        }
        self.persist_state()?;
        Ok(Outcome::changed(Toast::ItemUpdated))
    }

    /// Replaces a section's order wholesale. The reconciler heals invalid
    /// sequences on next read.
    pub fn set_order(&mut self, section_id: &str, ids: Vec<ItemId>) -> ServiceResult<Outcome> {
        self.state.set_order(section_id, ids);
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Checks or unchecks every effective item of one section.
    pub fn check_section(&mut self, section_id: &str, checked: bool) -> ServiceResult<Outcome> {
        let Some(section) = self.catalog.section(section_id) else {
            return Ok(Outcome::noop());
        };
        let ids: Vec<ItemId> = effective_items(section, &self.state)
            .into_iter()
            .map(|item| item.id)
            .collect();
        for id in &ids {
            self.state.set_checked(id, checked);
        }
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Checks or unchecks every effective item in every section.
    pub fn set_all_checked(&mut self, checked: bool) -> ServiceResult<Outcome> {
        let ids: Vec<ItemId> = self
            .catalog
            .sections()
            .iter()
            .flat_map(|section| effective_items(section, &self.state))
            .map(|item| item.id)
            .collect();
        for id in &ids {
            self.state.set_checked(id, checked);
        }
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Removes all check entries, keeping custom items and overrides.
    pub fn clear_all_checks(&mut self) -> ServiceResult<Outcome> {
        self.state.clear_all_checks();
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Collapses or expands every catalog section.
    pub fn set_all_collapsed(&mut self, collapsed: bool) -> ServiceResult<Outcome> {
        let section_ids: Vec<String> = self
            .catalog
            .sections()
            .iter()
            .map(|section| section.id.clone())
            .collect();
        for section_id in &section_ids {
            self.state.set_section_collapsed(section_id, collapsed);
        }
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Saved))
    }

    /// Returns a section's effective items in display order, healing and
    /// persisting the order array when it drifted.
    pub fn ordered_effective_items(
        &mut self,
        section_id: &str,
    ) -> ServiceResult<Vec<EffectiveItem>> {
        let Some(section) = self.catalog.section(section_id) else {
            return Ok(Vec::new());
        };
        let healed = reconcile_order(section, &mut self.state);
        let items = crate::reconcile::ordered_effective_items(section, &mut self.state);
        if healed {
            self.persist_state()?;
        }
        Ok(items)
    }

    pub fn section_counts(&self, section_id: &str) -> Option<SectionCounts> {
        self.catalog
            .section(section_id)
            .map(|section| projection::section_counts(section, &self.state))
    }

    pub fn global_progress(&self) -> Progress {
        projection::global_progress(&self.catalog, &self.state)
    }

    /// Filters ordered effective items by free text; matching collapsed
    /// sections are expanded but nothing is persisted (the next mutation
    /// saves the expansion, as the original behavior did).
    pub fn filter(&mut self, query: &FilterQuery) -> Vec<SectionMatches> {
        filter_catalog(&self.catalog, &mut self.state, query)
    }

    /// Commits a drag session's drop as exactly one order replacement.
    pub fn commit_drag(&mut self, session: &mut DragSession) -> ServiceResult<Outcome> {
        let section_id = match session.state() {
            DragState::Hovering { section_id, .. } => section_id.clone(),
            _ => {
                session.cancel();
                return Ok(Outcome::noop());
            }
        };

        // Heal first so the permutation is computed over the effective set.
        if let Some(section) = self.catalog.section(&section_id) {
            reconcile_order(section, &mut self.state);
        }
        let current = self.state.order_for(&section_id).to_vec();
        match session.commit(&current) {
            Some((section_id, next)) => {
                self.state.set_order(&section_id, next);
                self.persist_state()?;
                Ok(Outcome::changed(Toast::Saved))
            }
            None => Ok(Outcome::noop()),
        }
    }

    /// Produces the full serializable snapshot.
    pub fn export_snapshot(&self) -> Value {
        snapshot::export_value(&self.state)
    }

    /// Pretty-printed snapshot, suitable as a downloadable artifact.
    pub fn export_snapshot_pretty(&self) -> String {
        snapshot::export_pretty(&self.state)
    }

    /// Shallow-merges an exported snapshot into the store.
    ///
    /// # Errors
    /// - [`ServiceError::Snapshot`] on malformed content, with no partial
    ///   merge.
    pub fn import_snapshot(&mut self, raw: &str) -> ServiceResult<Outcome> {
        snapshot::import_into(&mut self.state, raw)?;
        info!("event=snapshot_imported status=ok");
        self.persist_state()?;
        Ok(Outcome::changed(Toast::Imported))
    }

    /// Serializes the whole store to durable storage and records the save
    /// time.
    pub fn persist(&mut self) -> ServiceResult<Outcome> {
        self.persist_state()?;
        Ok(Outcome {
            changed: false,
            toast: Some(Toast::Saved),
            new_item_id: None,
        })
    }

    fn persist_state(&mut self) -> ServiceResult<()> {
        self.storage.persist(&self.state).map_err(|err| {
            warn!("event=snapshot_saved status=error error={err}");
            ServiceError::Storage(err)
        })
    }
}
