//! Core domain logic for Keet, a personal relationship tracker.
//! This crate is the single source of truth for warmth/aging rules and
//! contact persistence; view layers stay purely presentational.

pub mod aging;
pub mod logging;
pub mod model;
pub mod store;

pub use aging::birthday::{birthday_label, days_until_birthday};
pub use aging::classifier::{
    cool_overlay_strength, days_between, days_since_last_contact, frost_intensity,
    relative_time_label, saturation_multiplier, text_contrast, warmth_color, TextContrast,
    WarmthColor,
};
pub use aging::filter::ContactFilter;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactCategory, ContactId, ContactValidationError};
pub use store::contact_store::{ContactStore, LoadOutcome, StoreEvent, SubscriberId};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
