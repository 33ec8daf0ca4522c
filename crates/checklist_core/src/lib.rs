//! Core domain logic for the PR review checklist.
//!
//! Merges the immutable built-in catalog with the persisted user-mutation
//! overlay (checks, custom items, overrides, soft deletes, ordering) into a
//! deterministic effective view, and keeps the persisted order arrays
//! self-healing across renders, imports and edits.

pub mod logging;
pub mod model;
pub mod projection;
pub mod reconcile;
pub mod reorder;
pub mod search;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{Catalog, CatalogItem, Section, STORAGE_KEY};
pub use model::item::{
    CustomItem, EffectiveItem, ItemId, ItemOrigin, ItemOverride, ItemPatch, SectionId,
};
pub use projection::{global_progress, section_counts, Progress, SectionCounts};
pub use reconcile::{effective_items, ordered_effective_items, reconcile_order};
pub use reorder::{reordered, DragSession, DragState, DropPosition};
pub use search::filter::{filter_catalog, FilterQuery, SectionMatches};
pub use service::checklist::{ChecklistService, Outcome, ServiceError, ServiceResult, Toast};
pub use storage::{
    FileSnapshotStorage, MemorySnapshotStorage, SnapshotStorage, StorageError, StorageResult,
};
pub use store::snapshot::{SnapshotError, SnapshotPatch, SnapshotResult};
pub use store::state::{ChecklistState, SectionMeta};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
