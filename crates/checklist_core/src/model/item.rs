//! Custom items, overrides and the effective-item projection.
//!
//! # Responsibility
//! - Define the user-created item record and its wire shape.
//! - Define the per-item override patch layered over catalog and custom
//!   items alike.
//! - Define the resolved `EffectiveItem` view produced by reconciliation.
//!
//! # Invariants
//! - Generated custom ids are unique within the process lifetime without
//!   coordination (owning section + epoch millis + random suffix).
//! - `ItemOverride::deleted` is the only soft-delete source of truth.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable item identifier shared by catalog and custom items.
pub type ItemId = String;

/// Stable section identifier.
pub type SectionId = String;

const ID_SUFFIX_CHARS: usize = 5;

/// A user-created item, owned by exactly one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomItem {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub hint: String,
    /// Wire tag distinguishing user-created items in the shared id namespace.
    #[serde(default = "custom_tag")]
    pub custom: bool,
}

fn custom_tag() -> bool {
    true
}

impl CustomItem {
    /// Creates a custom item with a freshly generated id.
    pub fn new(section_id: &str, text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id: generate_item_id(section_id),
            text: text.into(),
            hint: hint.into(),
            custom: true,
        }
    }
}

/// Generates a custom-item id: `<sectionId>-c-<epochMillis>-<suffix>`.
///
/// The random suffix comes from a v4 UUID, so two adds within the same
/// millisecond still get distinct ids.
pub fn generate_item_id(section_id: &str) -> ItemId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    let random = Uuid::new_v4().simple().to_string();
    let suffix: String = random.chars().take(ID_SUFFIX_CHARS).collect();
    format!("{section_id}-c-{millis}-{suffix}")
}

/// Persisted per-item patch: text/hint replacement and soft-delete flag.
///
/// Applies uniformly to catalog and custom items; custom-item edits are
/// routed through the same override path instead of mutating the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Soft-delete tombstone. Only meaningful for catalog items; custom
    /// items are hard-deleted instead.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Edit request for [`ItemOverride`] upserts. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub text: Option<String>,
    pub hint: Option<String>,
}

impl ItemPatch {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            hint: None,
        }
    }

    pub fn text_and_hint(text: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            hint: Some(hint.into()),
        }
    }
}

/// Which side of the catalog/custom split an effective item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOrigin {
    Catalog,
    Custom,
}

/// An item after override application and deletion filtering; what the
/// user actually sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveItem {
    pub id: ItemId,
    pub text: String,
    pub hint: Option<String>,
    pub origin: ItemOrigin,
}

impl EffectiveItem {
    /// Custom items support hard delete; catalog items only soft delete.
    pub fn is_custom(&self) -> bool {
        self.origin == ItemOrigin::Custom
    }
}
