use checklist_core::{
    ChecklistService, FileSnapshotStorage, FilterQuery, ItemPatch, MemorySnapshotStorage,
    ServiceError, Toast,
};

fn memory_service() -> ChecklistService<MemorySnapshotStorage> {
    ChecklistService::new(MemorySnapshotStorage::new())
}

#[test]
fn add_custom_item_flows_through_counts_and_order() {
    let mut service = memory_service();

    let outcome = service.add_custom_item("sec1", "Check logs", "tail -f").unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.toast, Some(Toast::ItemAdded));
    let id = outcome.new_item_id.expect("added item id");
    assert!(id.starts_with("sec1-c-"));

    let items = service.ordered_effective_items("sec1").unwrap();
    assert_eq!(items.last().unwrap().id, id);

    let counts = service.section_counts("sec1").unwrap();
    assert_eq!((counts.checked, counts.total), (0, 6));
}

#[test]
fn blank_add_is_a_silent_noop() {
    let mut service = memory_service();
    let outcome = service.add_custom_item("sec1", "  ", "hint").unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.toast, None);
    assert_eq!(outcome.new_item_id, None);
}

#[test]
fn toasts_match_their_operations() {
    let mut service = memory_service();

    assert_eq!(
        service.set_checked("1a", true).unwrap().toast,
        Some(Toast::Saved)
    );
    assert_eq!(
        service
            .edit_item("1a", &ItemPatch::text("Edited"))
            .unwrap()
            .toast,
        Some(Toast::ItemUpdated)
    );
    assert_eq!(
        service
            .soft_delete_catalog_item("sec1", "1a")
            .unwrap()
            .toast,
        Some(Toast::ItemRemoved)
    );
    assert_eq!(Toast::ItemAdded.message(), "Item added");
}

#[test]
fn import_surfaces_parse_error_and_keeps_state() {
    let mut service = memory_service();
    service.set_checked("1a", true).unwrap();
    let before = service.export_snapshot();

    let err = service.import_snapshot("{ broken").unwrap_err();
    assert!(matches!(err, ServiceError::Snapshot(_)));
    assert_eq!(service.export_snapshot(), before);
}

#[test]
fn export_import_round_trips_between_services() {
    let mut source = memory_service();
    source.set_checked("1a", true).unwrap();
    source.set_section_collapsed("sec2", true).unwrap();
    source.add_custom_item("sec3", "Extra check", "why not").unwrap();
    let exported = source.export_snapshot_pretty();

    let mut target = memory_service();
    let outcome = target.import_snapshot(&exported).unwrap();
    assert!(outcome.changed);
    assert_eq!(outcome.toast, Some(Toast::Imported));
    assert_eq!(target.export_snapshot(), source.export_snapshot());
}

#[test]
fn persist_records_the_save_time() {
    let mut service = memory_service();
    assert!(service.last_saved().is_none());

    let outcome = service.persist().unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.toast, Some(Toast::Saved));
    assert!(service.last_saved().is_some());
}

#[test]
fn check_section_and_bulk_checks() {
    let mut service = memory_service();

    service.check_section("sec2", true).unwrap();
    let counts = service.section_counts("sec2").unwrap();
    assert_eq!((counts.checked, counts.total), (4, 4));

    service.check_section("sec2", false).unwrap();
    assert_eq!(service.section_counts("sec2").unwrap().checked, 0);

    service.set_all_checked(true).unwrap();
    let progress = service.global_progress();
    assert_eq!(progress.checked, progress.total);
    assert_eq!(progress.percent, 100);

    service.clear_all_checks().unwrap();
    assert_eq!(service.global_progress().checked, 0);
}

#[test]
fn check_section_on_unknown_section_is_a_noop() {
    let mut service = memory_service();
    let outcome = service.check_section("sec99", true).unwrap();
    assert!(!outcome.changed);
}

#[test]
fn collapse_all_and_expand_all() {
    let mut service = memory_service();

    service.set_all_collapsed(true).unwrap();
    assert!(service.state().is_collapsed("sec1"));
    assert!(service.state().is_collapsed("sec10"));

    service.set_all_collapsed(false).unwrap();
    assert!(!service.state().is_collapsed("sec1"));
}

#[test]
fn filter_reveals_matches_without_persisting_other_state() {
    let mut service = memory_service();
    service.set_section_collapsed("sec9", true).unwrap();

    let results = service.filter(&FilterQuery::new("secrets"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].section_id, "sec9");
    assert!(!service.state().is_collapsed("sec9"));
}

#[test]
fn state_survives_a_file_storage_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut first = ChecklistService::new(FileSnapshotStorage::new(&path));
    first.set_checked("1a", true).unwrap();
    let added = first
        .add_custom_item("sec1", "Survives restart", "")
        .unwrap()
        .new_item_id
        .unwrap();

    let mut second = ChecklistService::new(FileSnapshotStorage::new(&path));
    assert!(second.state().is_checked("1a"));
    let items = second.ordered_effective_items("sec1").unwrap();
    assert_eq!(items.last().unwrap().id, added);
}
