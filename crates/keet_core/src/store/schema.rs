//! Persisted document schemas and forward migration.
//!
//! # Responsibility
//! - Describe the legacy record layout still found on existing installs.
//! - Migrate legacy records into the current `Contact` shape.
//!
//! # Invariants
//! - The current schema is the serde shape of `Contact` itself; this module
//!   only carries what the current model no longer expresses.
//! - Migration defaults `category` to `Friends` and leaves `birthday` unset.

use crate::model::contact::{image_data_base64, Contact, ContactCategory, ContactId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Contact record as written before categories and birthdays existed.
///
/// Same field layout as the current schema minus `category`/`birthdayDate`;
/// the absence of `category` is what makes a legacy document fail the
/// current-schema parse and take the migration path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContact {
    pub id: ContactId,
    pub name: String,
    #[serde(default, with = "image_data_base64")]
    pub image_data: Option<Vec<u8>>,
    pub interactions: Vec<DateTime<Utc>>,
}

impl LegacyContact {
    /// Lifts a legacy record into the current schema.
    pub fn migrate(self) -> Contact {
        Contact::with_id(
            self.id,
            self.name,
            self.image_data,
            self.interactions,
            ContactCategory::Friends,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::LegacyContact;
    use crate::model::contact::ContactCategory;

    #[test]
    fn legacy_record_migrates_to_friends_without_birthday() {
        let json = r#"{
            "id": "7f2c1a52-9a3f-4a47-93a3-2f2f4a8b1c11",
            "name": "June",
            "interactions": ["2026-08-01T10:00:00Z"]
        }"#;

        let legacy: LegacyContact = serde_json::from_str(json).unwrap();
        let contact = legacy.migrate();
        assert_eq!(contact.category, ContactCategory::Friends);
        assert!(contact.birthday.is_none());
        assert_eq!(contact.interactions.len(), 1);
    }
}
