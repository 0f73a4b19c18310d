//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose store operations and per-contact warmth attributes to Dart.
//! - Keep error semantics simple for UI integration: envelopes, not throws.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each call opens the store from the configured document path, mutates,
//!   and lets the store persist before returning; calls are issued serially
//!   from the UI thread, so per-call open stays consistent.

use chrono::{DateTime, Utc};
use keet_core::{
    birthday_label, cool_overlay_strength, days_since_last_contact, frost_intensity,
    init_logging as init_logging_inner, relative_time_label, saturation_multiplier, text_contrast,
    warmth_color, Contact, ContactCategory, ContactId, ContactStore, TextContrast,
};
use std::path::PathBuf;
use std::sync::OnceLock;

static DATA_FILE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    keet_core::core_version().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration attempts
///   return an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the contact document path for this process.
///
/// # FFI contract
/// - Must be called before any store operation.
/// - Idempotent for the same path; a different path returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_data_file(path: String) -> String {
    let requested = PathBuf::from(path);
    let active = DATA_FILE_PATH.get_or_init(|| requested.clone());
    if *active != requested {
        return format!(
            "data file already configured at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        );
    }
    String::new()
}

/// Display-ready snapshot of one contact card.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactCardSnapshot {
    /// Stable contact ID in string form.
    pub contact_id: String,
    pub name: String,
    /// `Family` or `Friends`.
    pub category: String,
    /// Avatar bytes, if any; decoding failures degrade to a placeholder on
    /// the Dart side.
    pub image_data: Option<Vec<u8>>,
    /// Days since the most recent interaction.
    pub days_since_contact: i64,
    /// e.g. "today", "a week ago".
    pub relative_time: String,
    /// Kebab-case color bucket name, e.g. "recent-warm".
    pub warmth_color: String,
    pub saturation: f64,
    pub cool_overlay: f64,
    pub frost: f64,
    /// Whether card text renders inverted (light-on-warm).
    pub inverted_text: bool,
    /// Birthday chip label when a birthday is at most a week out.
    pub birthday_chip: Option<String>,
}

/// Response envelope for the contact list snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactListResponse {
    pub items: Vec<ContactCardSnapshot>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional affected contact ID.
    pub contact_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, contact_id: String) -> Self {
        Self {
            ok: true,
            contact_id: Some(contact_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

/// Lists all contacts with their aging attributes resolved at call time.
///
/// # FFI contract
/// - Sync call; reads the document from disk.
/// - Returns an empty list with a message when no data file is configured.
#[flutter_rust_bridge::frb(sync)]
pub fn list_contacts() -> ContactListResponse {
    let Some(path) = DATA_FILE_PATH.get() else {
        return ContactListResponse {
            items: Vec::new(),
            message: "data file not configured".to_string(),
        };
    };

    let store = ContactStore::open(path.clone());
    let now = Utc::now();
    let today = now.date_naive();
    let items = store
        .contacts()
        .iter()
        .map(|contact| snapshot(contact, now, today))
        .collect::<Vec<_>>();
    let message = format!("{} contact(s)", items.len());
    ContactListResponse { items, message }
}

/// Adds a contact seeded with one interaction.
///
/// # FFI contract
/// - `category` accepts `Family`/`Friends` (case-insensitive).
/// - `last_contacted_epoch_ms` defaults to now when absent.
#[flutter_rust_bridge::frb(sync)]
pub fn add_contact(
    name: String,
    image_data: Option<Vec<u8>>,
    category: String,
    last_contacted_epoch_ms: Option<i64>,
    birthday_epoch_ms: Option<i64>,
) -> ContactActionResponse {
    if name.trim().is_empty() {
        return ContactActionResponse::failure("contact name must not be empty");
    }
    let category = match parse_category(&category) {
        Ok(category) => category,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let last_contacted = match optional_timestamp(last_contacted_epoch_ms) {
        Ok(value) => value.unwrap_or_else(Utc::now),
        Err(message) => return ContactActionResponse::failure(message),
    };
    let birthday = match optional_timestamp(birthday_epoch_ms) {
        Ok(value) => value,
        Err(message) => return ContactActionResponse::failure(message),
    };

    with_store(|store| {
        let mut contact = Contact::new(name, image_data, last_contacted, category);
        contact.birthday = birthday;
        let id = contact.id.to_string();
        store.add(contact);
        ContactActionResponse::success("contact added", id)
    })
}

/// Records an interaction at the current instant.
#[flutter_rust_bridge::frb(sync)]
pub fn record_contacted_now(contact_id: String) -> ContactActionResponse {
    mutate_by_id(contact_id, "interaction recorded", |store, id| {
        store.record_interaction_now(id)
    })
}

/// Records an interaction dated yesterday.
#[flutter_rust_bridge::frb(sync)]
pub fn record_contacted_yesterday(contact_id: String) -> ContactActionResponse {
    mutate_by_id(contact_id, "interaction recorded", |store, id| {
        store.record_interaction_yesterday(id)
    })
}

/// Records an interaction at an explicit date (date-picker flow).
#[flutter_rust_bridge::frb(sync)]
pub fn set_interaction_date(contact_id: String, epoch_ms: i64) -> ContactActionResponse {
    let date = match timestamp(epoch_ms) {
        Ok(date) => date,
        Err(message) => return ContactActionResponse::failure(message),
    };
    mutate_by_id(contact_id, "interaction recorded", move |store, id| {
        store.set_interaction_date(id, date)
    })
}

/// Replaces a contact's mutable fields (edit form).
///
/// Corrects the most recent interaction instead of appending a new one.
#[flutter_rust_bridge::frb(sync)]
pub fn update_contact(
    contact_id: String,
    name: String,
    image_data: Option<Vec<u8>>,
    last_contacted_epoch_ms: i64,
    category: String,
    birthday_epoch_ms: Option<i64>,
) -> ContactActionResponse {
    if name.trim().is_empty() {
        return ContactActionResponse::failure("contact name must not be empty");
    }
    let category = match parse_category(&category) {
        Ok(category) => category,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let last_contacted = match timestamp(last_contacted_epoch_ms) {
        Ok(value) => value,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let birthday = match optional_timestamp(birthday_epoch_ms) {
        Ok(value) => value,
        Err(message) => return ContactActionResponse::failure(message),
    };

    mutate_by_id(contact_id, "contact updated", move |store, id| {
        store.update(id, name, image_data, last_contacted, category, birthday)
    })
}

/// Deletes a contact.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_contact(contact_id: String) -> ContactActionResponse {
    mutate_by_id(contact_id, "contact deleted", |store, id| store.delete(id))
}

fn snapshot(contact: &Contact, now: DateTime<Utc>, today: chrono::NaiveDate) -> ContactCardSnapshot {
    let days = days_since_last_contact(contact, now);
    ContactCardSnapshot {
        contact_id: contact.id.to_string(),
        name: contact.name.clone(),
        category: contact.category.to_string(),
        image_data: contact.image_data.clone(),
        days_since_contact: days,
        relative_time: relative_time_label(days),
        warmth_color: warmth_color(days).label().to_string(),
        saturation: saturation_multiplier(days),
        cool_overlay: cool_overlay_strength(days),
        frost: frost_intensity(days),
        inverted_text: text_contrast(days) == TextContrast::Inverted,
        birthday_chip: contact
            .birthday
            .and_then(|birthday| birthday_label(birthday, today)),
    }
}

fn with_store(
    operation: impl FnOnce(&mut ContactStore) -> ContactActionResponse,
) -> ContactActionResponse {
    let Some(path) = DATA_FILE_PATH.get() else {
        return ContactActionResponse::failure("data file not configured");
    };
    let mut store = ContactStore::open(path.clone());
    operation(&mut store)
}

fn mutate_by_id(
    contact_id: String,
    success_message: &'static str,
    operation: impl FnOnce(&mut ContactStore, ContactId),
) -> ContactActionResponse {
    let id = match contact_id.parse::<ContactId>() {
        Ok(id) => id,
        Err(_) => {
            return ContactActionResponse::failure(format!("invalid contact id `{contact_id}`"))
        }
    };

    with_store(|store| {
        if store.get(id).is_none() {
            return ContactActionResponse::failure(format!("contact not found: {id}"));
        }
        operation(store, id);
        ContactActionResponse::success(success_message, id.to_string())
    })
}

fn parse_category(value: &str) -> Result<ContactCategory, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "family" => Ok(ContactCategory::Family),
        "friends" | "" => Ok(ContactCategory::Friends),
        other => Err(format!(
            "unsupported category `{other}`; expected Family|Friends"
        )),
    }
}

fn timestamp(epoch_ms: i64) -> Result<DateTime<Utc>, String> {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| format!("timestamp out of range: {epoch_ms}"))
}

fn optional_timestamp(epoch_ms: Option<i64>) -> Result<Option<DateTime<Utc>>, String> {
    epoch_ms.map(timestamp).transpose()
}
