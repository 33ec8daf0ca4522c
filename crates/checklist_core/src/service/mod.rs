//! Use-case facade for presentation layers.
//!
//! # Responsibility
//! - Bundle catalog, mutation store and storage behind the call surface a
//!   presentation layer needs.
//! - Persist after every mutating operation and report the re-render /
//!   status-message signals as return values.

pub mod checklist;
