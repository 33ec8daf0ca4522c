//! Free-text filtering over effective items.
//!
//! # Responsibility
//! - Expose the search-box query API used to narrow the visible checklist.
//!
//! # Invariants
//! - Filtering never changes checks, custom items, overrides or ordering;
//!   its only store effect is expanding sections that contain a match.

pub mod filter;
