//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by store and classifier.
//! - Provide lifecycle helpers for recording interactions.
//!
//! # Invariants
//! - `id` is stable and never reused for another contact.
//! - `interactions` is append-only in normal operation; insertion order is
//!   chronological order by convention. "Last contacted" means the
//!   last-inserted entry, not the maximum timestamp.
//! - Persisted contacts must pass `validate()`; violating records are
//!   filtered out on load rather than surfaced as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every contact.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = Uuid;

/// Relationship grouping for a contact.
///
/// Wire values are capitalized (`"Family"`, `"Friends"`) to stay compatible
/// with the persisted document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContactCategory {
    Family,
    #[default]
    Friends,
}

impl Display for ContactCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Family => write!(f, "Family"),
            Self::Friends => write!(f, "Friends"),
        }
    }
}

/// Validation failure for a contact record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `name` is empty or whitespace-only.
    EmptyName,
    /// `interactions` holds no entries.
    NoInteractions,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name must not be empty"),
            Self::NoInteractions => write!(f, "contact must have at least one interaction"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical contact record.
///
/// The serde shape of this struct *is* the current persisted schema: an
/// ordered JSON array of these records. Field names are camelCase and the
/// avatar bytes round-trip through base64, matching the original document
/// format written by earlier app versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable global ID, assigned at creation, never reused.
    pub id: ContactId,
    /// Display name. Must be non-empty for the record to be valid.
    pub name: String,
    /// Optional avatar photo bytes. Decoding failures are a display concern;
    /// the model carries the bytes opaquely.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "image_data_base64"
    )]
    pub image_data: Option<Vec<u8>>,
    /// All recorded interaction timestamps, in insertion order.
    pub interactions: Vec<DateTime<Utc>>,
    /// Relationship grouping. Records migrated from the legacy schema
    /// default to `Friends`.
    pub category: ContactCategory,
    /// Optional birthday. Only the month/day components are meaningful; the
    /// year is carried through serialization but ignored by reminder logic.
    #[serde(
        default,
        rename = "birthdayDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<DateTime<Utc>>,
}

impl Contact {
    /// Creates a new contact with a generated ID and one seed interaction.
    pub fn new(
        name: impl Into<String>,
        image_data: Option<Vec<u8>>,
        last_contacted: DateTime<Utc>,
        category: ContactCategory,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, image_data, vec![last_contacted], category)
    }

    /// Creates a contact with a caller-provided stable ID and interaction
    /// history. Used by load/migration paths where identity already exists.
    pub fn with_id(
        id: ContactId,
        name: impl Into<String>,
        image_data: Option<Vec<u8>>,
        interactions: Vec<DateTime<Utc>>,
        category: ContactCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_data,
            interactions,
            category,
            birthday: None,
        }
    }

    /// Most recent interaction: the last-inserted entry.
    ///
    /// Manual date edits can insert out-of-order timestamps, so this is not
    /// necessarily the maximum value in the list.
    pub fn last_contacted(&self) -> Option<DateTime<Utc>> {
        self.interactions.last().copied()
    }

    /// Appends a new interaction timestamp.
    pub fn record_interaction(&mut self, at: DateTime<Utc>) {
        self.interactions.push(at);
    }

    /// Checks the persistence invariants for this record.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if self.interactions.is_empty() {
            return Err(ContactValidationError::NoInteractions);
        }
        Ok(())
    }

    /// Returns whether this record satisfies the persistence invariants.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Serde adapter persisting `Option<Vec<u8>>` as a base64 string.
///
/// The document format stores avatar bytes the way the original mobile app
/// serialized binary data: standard-alphabet base64 with padding.
pub(crate) mod image_data_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        match encoded {
            Some(text) => STANDARD
                .decode(text.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, ContactCategory, ContactValidationError};
    use chrono::Utc;

    #[test]
    fn new_contact_seeds_exactly_one_interaction() {
        let now = Utc::now();
        let contact = Contact::new("June", None, now, ContactCategory::Family);
        assert_eq!(contact.interactions, vec![now]);
        assert_eq!(contact.last_contacted(), Some(now));
    }

    #[test]
    fn last_contacted_is_last_inserted_not_maximum() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::days(10);
        let mut contact = Contact::new("June", None, now, ContactCategory::Friends);
        contact.record_interaction(earlier);
        assert_eq!(contact.last_contacted(), Some(earlier));
    }

    #[test]
    fn validate_rejects_blank_name_and_empty_history() {
        let mut contact = Contact::new("  ", None, Utc::now(), ContactCategory::Friends);
        assert_eq!(contact.validate(), Err(ContactValidationError::EmptyName));

        contact.name = "June".to_string();
        contact.interactions.clear();
        assert_eq!(
            contact.validate(),
            Err(ContactValidationError::NoInteractions)
        );
    }

    #[test]
    fn serde_shape_uses_camel_case_wire_names() {
        let mut contact = Contact::new("June", Some(vec![1, 2, 3]), Utc::now(), ContactCategory::Family);
        contact.birthday = Some(Utc::now());

        let json = serde_json::to_value(&contact).expect("contact should serialize");
        let object = json.as_object().expect("contact serializes as object");
        assert!(object.contains_key("imageData"));
        assert!(object.contains_key("birthdayDate"));
        assert_eq!(object["category"], "Family");
        assert!(object["imageData"].is_string());

        let back: Contact = serde_json::from_value(json).expect("contact should deserialize");
        assert_eq!(back, contact);
    }
}
