//! Snapshot wire codec and import merge.
//!
//! # Responsibility
//! - Encode [`ChecklistState`] to the flat snapshot shape: check ids and
//!   section ids share the top-level namespace with the three reserved
//!   containers `customItems`, `itemMeta` and `order`.
//! - Decode externally supplied snapshots into a fully-parsed patch before
//!   any state is touched.
//!
//! # Invariants
//! - `import_into(state, export_string(state))` round-trips to an
//!   equivalent store.
//! - A parse failure never leaves a partial merge behind.
//! - Import is a shallow merge: per-id overwrite for checks and section
//!   meta (they are individual top-level fields on the wire), wholesale
//!   replacement for the reserved containers.

use crate::model::item::{CustomItem, ItemId, ItemOverride, SectionId};
use crate::store::state::{ChecklistState, SectionMeta};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOM_ITEMS_KEY: &str = "customItems";
const ITEM_META_KEY: &str = "itemMeta";
const ORDER_KEY: &str = "order";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Error for malformed snapshot content.
#[derive(Debug)]
pub enum SnapshotError {
    Parse { message: String },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "invalid snapshot: {message}"),
        }
    }
}

impl Error for SnapshotError {}

fn parse_error(message: impl Into<String>) -> SnapshotError {
    SnapshotError::Parse {
        message: message.into(),
    }
}

/// Fully-parsed top-level fields of an incoming snapshot.
///
/// Check and section entries merge per id; a reserved container present in
/// the patch replaces the stored one wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotPatch {
    pub checks: BTreeMap<ItemId, bool>,
    pub sections: BTreeMap<SectionId, SectionMeta>,
    pub custom_items: Option<BTreeMap<SectionId, Vec<CustomItem>>>,
    pub item_meta: Option<BTreeMap<ItemId, ItemOverride>>,
    pub order: Option<BTreeMap<SectionId, Vec<ItemId>>>,
}

/// Serializes the full store to the flat snapshot shape, losslessly.
pub fn export_value(state: &ChecklistState) -> Value {
    let mut root = Map::new();
    for (id, checked) in &state.checks {
        root.insert(id.clone(), Value::Bool(*checked));
    }
    for (section_id, meta) in &state.sections {
        let mut entry = Map::new();
        entry.insert("collapsed".to_string(), Value::Bool(meta.collapsed));
        root.insert(section_id.clone(), Value::Object(entry));
    }

    let mut custom_items = Map::new();
    for (section_id, items) in &state.custom_items {
        let list = items.iter().map(custom_item_value).collect();
        custom_items.insert(section_id.clone(), Value::Array(list));
    }
    root.insert(CUSTOM_ITEMS_KEY.to_string(), Value::Object(custom_items));

    let mut item_meta = Map::new();
    for (item_id, meta) in &state.item_meta {
        item_meta.insert(item_id.clone(), override_value(meta));
    }
    root.insert(ITEM_META_KEY.to_string(), Value::Object(item_meta));

    let mut order = Map::new();
    for (section_id, ids) in &state.order {
        let list = ids.iter().map(|id| Value::String(id.clone())).collect();
        order.insert(section_id.clone(), Value::Array(list));
    }
    root.insert(ORDER_KEY.to_string(), Value::Object(order));

    Value::Object(root)
}

/// Compact snapshot encoding used for durable persistence.
pub fn export_string(state: &ChecklistState) -> String {
    export_value(state).to_string()
}

/// Pretty snapshot encoding used for the downloadable export artifact.
pub fn export_pretty(state: &ChecklistState) -> String {
    let value = export_value(state);
    // Pretty-printing a Value built from string keys cannot fail.
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn custom_item_value(item: &CustomItem) -> Value {
    let mut entry = Map::new();
    entry.insert("id".to_string(), Value::String(item.id.clone()));
    entry.insert("text".to_string(), Value::String(item.text.clone()));
    entry.insert("hint".to_string(), Value::String(item.hint.clone()));
    entry.insert("custom".to_string(), Value::Bool(true));
    Value::Object(entry)
}

fn override_value(meta: &ItemOverride) -> Value {
    let mut entry = Map::new();
    if let Some(text) = &meta.text {
        entry.insert("text".to_string(), Value::String(text.clone()));
    }
    if let Some(hint) = &meta.hint {
        entry.insert("hint".to_string(), Value::String(hint.clone()));
    }
    if meta.deleted {
        entry.insert("deleted".to_string(), Value::Bool(true));
    }
    Value::Object(entry)
}

/// Parses raw snapshot text into a patch without touching any state.
///
/// # Errors
/// - Invalid JSON, a non-object root, or a malformed reserved container.
///   Unknown top-level value shapes are tolerated and ignored.
pub fn parse_snapshot(raw: &str) -> SnapshotResult<SnapshotPatch> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| parse_error(format!("not valid JSON: {err}")))?;
    patch_from_value(value)
}

fn patch_from_value(value: Value) -> SnapshotResult<SnapshotPatch> {
    let Value::Object(root) = value else {
        return Err(parse_error("snapshot root must be a JSON object"));
    };

    let mut patch = SnapshotPatch::default();
    for (key, entry) in root {
        match key.as_str() {
            CUSTOM_ITEMS_KEY => patch.custom_items = Some(decode(CUSTOM_ITEMS_KEY, entry)?),
            ITEM_META_KEY => patch.item_meta = Some(decode(ITEM_META_KEY, entry)?),
            ORDER_KEY => patch.order = Some(decode(ORDER_KEY, entry)?),
            _ => match entry {
                Value::Bool(checked) => {
                    patch.checks.insert(key, checked);
                }
                Value::Object(_) => {
                    let meta: SectionMeta = decode(&key, entry)?;
                    patch.sections.insert(key, meta);
                }
                // Anything else is foreign data from another tool version.
                _ => {}
            },
        }
    }

    Ok(patch)
}

fn decode<T: DeserializeOwned>(field: &str, value: Value) -> SnapshotResult<T> {
    serde_json::from_value(value)
        .map_err(|err| parse_error(format!("malformed `{field}` entry: {err}")))
}

/// Shallow-merges a parsed patch into the store.
///
/// The custom-items container is guaranteed to exist afterwards (the typed
/// map is always present, matching the normalization the original storage
/// shape needed).
pub fn apply_patch(state: &mut ChecklistState, patch: SnapshotPatch) {
    state.checks.extend(patch.checks);
    state.sections.extend(patch.sections);
    if let Some(custom_items) = patch.custom_items {
        state.custom_items = custom_items;
    }
    if let Some(item_meta) = patch.item_meta {
        state.item_meta = item_meta;
    }
    if let Some(order) = patch.order {
        state.order = order;
    }
}

/// Parses and merges in one step; on error the existing state is untouched.
pub fn import_into(state: &mut ChecklistState, raw: &str) -> SnapshotResult<()> {
    let patch = parse_snapshot(raw)?;
    apply_patch(state, patch);
    Ok(())
}

/// Builds a fresh store from raw snapshot text.
pub fn state_from_str(raw: &str) -> SnapshotResult<ChecklistState> {
    let mut state = ChecklistState::new();
    import_into(&mut state, raw)?;
    Ok(state)
}
