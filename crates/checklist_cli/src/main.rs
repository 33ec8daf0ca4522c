//! CLI probe for the checklist core.
//!
//! # Responsibility
//! - Load a snapshot file (default `<storage key>.json`) and print the
//!   per-section counters and global progress.
//! - Keep output deterministic for quick local sanity checks.

use checklist_core::{ChecklistService, FileSnapshotStorage, STORAGE_KEY};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{STORAGE_KEY}.json"));

    let service = ChecklistService::new(FileSnapshotStorage::new(&path));

    println!("checklist_core version={}", checklist_core::core_version());
    println!("snapshot={path}");

    for section in service.catalog().sections() {
        if let Some(counts) = service.section_counts(&section.id) {
            println!("{:>6}  {}/{}  {}", section.id, counts.checked, counts.total, section.title);
        }
    }

    let progress = service.global_progress();
    println!(
        "total {}/{} ({}%)",
        progress.checked, progress.total, progress.percent
    );
}
