//! Domain model for relationship tracking.
//!
//! # Responsibility
//! - Define the canonical `Contact` record and its category/birthday metadata.
//! - Enforce the contact invariants used by store load/save filtering.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - A valid contact has a non-empty name and at least one interaction.

pub mod contact;
