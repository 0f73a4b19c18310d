//! Contact persistence layer.
//!
//! # Responsibility
//! - Own the in-memory contact collection and its single-file JSON document.
//! - Recover from legacy-schema and corrupt persisted data without failing.
//!
//! # Invariants
//! - Exactly one store instance owns the document per process; callers issue
//!   mutations serially on one logical thread.
//! - Every mutation persists the whole collection before notifying observers.
//! - Load never returns an error to the caller; all failure paths resolve to
//!   a usable (possibly empty) collection.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_store;
pub mod schema;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the contact document.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
