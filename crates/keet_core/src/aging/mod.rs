//! Warmth/aging domain logic.
//!
//! # Responsibility
//! - Map elapsed days since last contact to display attributes (color
//!   bucket, saturation, overlay, frost, text contrast, relative label).
//! - Compute birthday reminder labels at day granularity.
//! - Provide the warmth filter buckets used by the list UI.
//!
//! # Invariants
//! - Everything in this module is a pure function of its inputs. No clocks
//!   are read here; callers pass "now" explicitly.
//! - Bucket tables partition the whole day axis. Negative day counts (future
//!   timestamps) land in the lowest bucket by construction.

pub mod birthday;
pub mod classifier;
pub mod filter;
