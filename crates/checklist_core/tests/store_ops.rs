use checklist_core::{
    ordered_effective_items, Catalog, ChecklistState, ItemOrigin, ItemPatch,
};

fn sec1(catalog: &Catalog) -> &checklist_core::Section {
    catalog.section("sec1").expect("builtin sec1")
}

#[test]
fn add_custom_item_appends_and_returns_scoped_id() {
    let catalog = Catalog::builtin();
    let mut state = ChecklistState::new();

    let id = state
        .add_custom_item("sec1", "Check logs", "tail -f")
        .expect("non-blank text should add");
    assert!(id.starts_with("sec1-c-"), "unexpected id {id}");

    let customs = state.custom_items_for("sec1");
    assert_eq!(customs.len(), 1);
    assert_eq!(customs[0].text, "Check logs");
    assert_eq!(customs[0].hint, "tail -f");
    assert!(customs[0].custom);

    // Appended to both the custom sequence and the section order.
    assert_eq!(state.order_for("sec1").last(), Some(&id));

    let items = ordered_effective_items(sec1(catalog), &mut state);
    let last = items.last().expect("section is not empty");
    assert_eq!(last.id, id);
    assert_eq!(last.origin, ItemOrigin::Custom);
    assert_eq!(last.hint.as_deref(), Some("tail -f"));
}

#[test]
fn add_custom_item_rejects_blank_text() {
    let mut state = ChecklistState::new();
    assert_eq!(state.add_custom_item("sec1", "   ", "hint"), None);
    assert!(state.custom_items_for("sec1").is_empty());
    assert!(state.order_for("sec1").is_empty());
}

#[test]
fn remove_custom_item_cleans_check_and_order_entries() {
    let mut state = ChecklistState::new();
    let id = state.add_custom_item("sec1", "Temporary", "").unwrap();
    state.set_checked(&id, true);

    assert!(state.remove_custom_item("sec1", &id));
    assert!(state.custom_items_for("sec1").is_empty());
    assert!(!state.order_for("sec1").contains(&id));
    assert!(!state.is_checked(&id));
}

#[test]
fn remove_unknown_custom_item_is_a_noop() {
    let mut state = ChecklistState::new();
    assert!(!state.remove_custom_item("sec1", "sec1-c-123-abcde"));
    assert!(!state.remove_custom_item("nosuch", "sec1-c-123-abcde"));
}

#[test]
fn soft_delete_hides_item_but_keeps_check_entry() {
    let catalog = Catalog::builtin();
    let mut state = ChecklistState::new();
    state.set_checked("1a", true);

    state.soft_delete_catalog_item("sec1", "1a");

    let items = ordered_effective_items(sec1(catalog), &mut state);
    assert!(items.iter().all(|item| item.id != "1a"));
    assert!(!state.order_for("sec1").iter().any(|id| id == "1a"));

    // Check history survives the tombstone.
    assert!(state.is_checked("1a"));
    assert!(state.override_for("1a").map(|m| m.deleted).unwrap_or(false));
}

#[test]
fn edit_item_routes_custom_edits_through_the_override() {
    let catalog = Catalog::builtin();
    let mut state = ChecklistState::new();
    let id = state.add_custom_item("sec1", "Original", "old hint").unwrap();

    assert!(state.edit_item(&id, &ItemPatch::text_and_hint("Rewritten", "new hint")));

    // The custom record itself is untouched; the override carries the edit.
    assert_eq!(state.custom_items_for("sec1")[0].text, "Original");

    let items = ordered_effective_items(sec1(catalog), &mut state);
    let edited = items.iter().find(|item| item.id == id).unwrap();
    assert_eq!(edited.text, "Rewritten");
    assert_eq!(edited.hint.as_deref(), Some("new hint"));
}

#[test]
fn edit_item_applies_to_catalog_items() {
    let catalog = Catalog::builtin();
    let mut state = ChecklistState::new();

    assert!(state.edit_item("1b", &ItemPatch::text("Deleted dead code everywhere")));

    let items = ordered_effective_items(sec1(catalog), &mut state);
    let edited = items.iter().find(|item| item.id == "1b").unwrap();
    assert_eq!(edited.text, "Deleted dead code everywhere");
    // Hint falls through to the catalog default.
    assert!(edited.hint.is_some());
}

#[test]
fn edit_item_with_blank_text_is_a_noop() {
    let mut state = ChecklistState::new();
    assert!(!state.edit_item("1a", &ItemPatch::text("   ")));
    assert!(state.override_for("1a").is_none());

    // An empty patch is equally a no-op.
    assert!(!state.edit_item("1a", &ItemPatch::default()));
}

#[test]
fn edit_item_never_touches_the_deleted_flag() {
    let mut state = ChecklistState::new();
    state.soft_delete_catalog_item("sec1", "1a");
    assert!(state.edit_item("1a", &ItemPatch::text("still edited")));
    assert!(state.override_for("1a").unwrap().deleted);
}

#[test]
fn set_checked_tolerates_unknown_ids() {
    let mut state = ChecklistState::new();
    state.set_checked("ghost-item", true);
    assert!(state.is_checked("ghost-item"));
    state.set_checked("ghost-item", false);
    assert!(!state.is_checked("ghost-item"));
}

#[test]
fn collapse_defaults_to_expanded() {
    let mut state = ChecklistState::new();
    assert!(!state.is_collapsed("sec1"));
    state.set_section_collapsed("sec1", true);
    assert!(state.is_collapsed("sec1"));
    state.set_section_collapsed("sec1", false);
    assert!(!state.is_collapsed("sec1"));
}
