//! Domain model for the checklist core.
//!
//! # Responsibility
//! - Define the immutable catalog shipped with the tool.
//! - Define user-created items, per-item overrides and the resolved
//!   effective-item projection.
//!
//! # Invariants
//! - Catalog content never changes during a run.
//! - Every item is identified by a stable string id shared across the
//!   catalog and custom namespaces.

pub mod catalog;
pub mod item;
