//! Mutation store: the persisted, mutable overlay on top of the catalog.
//!
//! # Responsibility
//! - Hold all user-originated state (checks, collapse flags, custom items,
//!   overrides, ordering) behind atomic operations.
//! - Encode/decode the state to the flat snapshot wire shape used for
//!   persistence, export and import.
//!
//! # Invariants
//! - Every operation leaves the data-model invariants intact: no orphaned
//!   check/order entries after a custom hard delete, soft deletes keep the
//!   check entry and override around.
//! - Import parses fully before merging; malformed content never leaves a
//!   partial merge behind.

pub mod snapshot;
pub mod state;
