use checklist_core::{
    ChecklistService, DragSession, DragState, DropPosition, MemorySnapshotStorage,
};

#[test]
fn session_walks_idle_dragging_hovering() {
    let mut session = DragSession::new();
    assert_eq!(*session.state(), DragState::Idle);

    session.begin("1c", "sec1");
    assert!(matches!(session.state(), DragState::Dragging { item_id, .. } if item_id == "1c"));

    assert!(session.hover("1a", "sec1", DropPosition::Before));
    assert!(matches!(
        session.state(),
        DragState::Hovering { target_id, position: DropPosition::Before, .. } if target_id == "1a"
    ));

    session.leave();
    assert!(matches!(session.state(), DragState::Dragging { .. }));

    session.cancel();
    assert_eq!(*session.state(), DragState::Idle);
}

#[test]
fn cross_section_hover_is_rejected() {
    let mut session = DragSession::new();
    session.begin("1a", "sec1");

    assert!(!session.hover("2a", "sec2", DropPosition::Before));
    assert!(matches!(session.state(), DragState::Dragging { .. }));
}

#[test]
fn hover_without_drag_is_rejected() {
    let mut session = DragSession::new();
    assert!(!session.hover("1a", "sec1", DropPosition::After));
    assert_eq!(*session.state(), DragState::Idle);
}

#[test]
fn commit_moves_the_dragged_item_once() {
    let mut service = ChecklistService::new(MemorySnapshotStorage::new());

    let before: Vec<String> = service
        .ordered_effective_items("sec1")
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(before, ["1a", "1b", "1c", "1d", "1e"]);

    let mut session = DragSession::new();
    session.begin("1e", "sec1");
    session.hover("1a", "sec1", DropPosition::Before);

    let outcome = service.commit_drag(&mut session).unwrap();
    assert!(outcome.changed);
    assert_eq!(*session.state(), DragState::Idle);

    let after: Vec<String> = service
        .ordered_effective_items("sec1")
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(after, ["1e", "1a", "1b", "1c", "1d"]);
}

#[test]
fn commit_after_target_position() {
    let mut service = ChecklistService::new(MemorySnapshotStorage::new());

    let mut session = DragSession::new();
    session.begin("1a", "sec1");
    session.hover("1c", "sec1", DropPosition::After);
    service.commit_drag(&mut session).unwrap();

    let after: Vec<String> = service
        .ordered_effective_items("sec1")
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(after, ["1b", "1c", "1a", "1d", "1e"]);
}

#[test]
fn commit_without_hover_is_a_noop() {
    let mut service = ChecklistService::new(MemorySnapshotStorage::new());

    let mut session = DragSession::new();
    session.begin("1a", "sec1");

    let outcome = service.commit_drag(&mut session).unwrap();
    assert!(!outcome.changed);
    assert_eq!(*session.state(), DragState::Idle);
}

#[test]
fn drop_on_unknown_target_is_a_noop() {
    let mut service = ChecklistService::new(MemorySnapshotStorage::new());

    let mut session = DragSession::new();
    session.begin("1a", "sec1");
    session.hover("stale-id", "sec1", DropPosition::Before);

    let outcome = service.commit_drag(&mut session).unwrap();
    assert!(!outcome.changed);

    let order: Vec<String> = service
        .ordered_effective_items("sec1")
        .unwrap()
        .into_iter()
        .map(|item| item.id)
        .collect();
    assert_eq!(order, ["1a", "1b", "1c", "1d", "1e"]);
}
