//! Contact store: CRUD plus durable single-file persistence.
//!
//! # Responsibility
//! - Own the ordered contact collection for the process lifetime.
//! - Persist the whole collection to one JSON document on every mutation.
//! - Load, migrate, or recover the document exactly once at construction.
//!
//! # Invariants
//! - `open` performs the full load synchronously; a constructed store is
//!   always ready for CRUD (no intermediate loading state is observable).
//! - Write failures are logged and never surfaced: in-memory state stays the
//!   source of truth for the session and the next successful save reconciles.
//! - Unknown-id mutations are silent no-ops.

use crate::model::contact::{Contact, ContactCategory, ContactId};
use crate::store::schema::LegacyContact;
use crate::store::StoreResult;
use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Handle returned by `subscribe`, used to remove the observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Mutation notification delivered to store observers.
///
/// Consumers that need to react to store changes subscribe explicitly; the
/// store makes no assumption about any rendering framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(ContactId),
    InteractionRecorded(ContactId),
    Updated(ContactId),
    Deleted(ContactId),
}

/// How the initial load reached a usable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No document existed; started empty.
    Fresh,
    /// Current-schema parse succeeded.
    Direct,
    /// Legacy-schema parse succeeded; document re-persisted in new schema.
    Migrated,
    /// Document was unreadable; bytes backed up and collection reset.
    Recovered,
}

impl LoadOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Direct => "direct",
            Self::Migrated => "migrated",
            Self::Recovered => "recovered",
        }
    }
}

type Observer = Box<dyn Fn(&StoreEvent)>;

/// Single-file JSON contact store.
///
/// One instance per process owns the document; callers issue operations
/// serially from one logical thread (the UI event loop).
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    load_outcome: LoadOutcome,
    observers: Vec<(u64, Observer)>,
    next_subscriber: u64,
}

impl ContactStore {
    /// Opens the store, loading the document at `path` synchronously.
    ///
    /// Never fails: an absent file starts empty, a legacy-schema file is
    /// migrated (and immediately re-persisted), and corrupt bytes are backed
    /// up to a sibling `.backup` file before starting empty. Entries with an
    /// empty name or empty interaction list are dropped on every path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let started_at = Instant::now();
        let (mut contacts, outcome) = load_document(&path);

        let before = contacts.len();
        contacts.retain(Contact::is_valid);
        let dropped = before - contacts.len();
        if dropped > 0 {
            warn!(
                "event=store_load module=store status=ok detail=invalid_entries_dropped count={dropped}"
            );
        }

        let store = Self {
            path,
            contacts,
            load_outcome: outcome,
            observers: Vec::new(),
            next_subscriber: 0,
        };

        if outcome == LoadOutcome::Migrated {
            // Re-persist straight away so a raw read of the file already
            // shows the new schema.
            store.persist("store_migrate");
        }

        info!(
            "event=store_load module=store status=ok outcome={} count={} duration_ms={}",
            outcome.as_str(),
            store.contacts.len(),
            started_at.elapsed().as_millis()
        );
        store
    }

    /// Ordered view of the collection for the view layer.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Looks up one contact by ID.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    /// How the initial load reached the ready state.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Registers an observer invoked after every mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&StoreEvent) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        SubscriberId(id)
    }

    /// Removes a previously registered observer. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(key, _)| *key != id.0);
        self.observers.len() != before
    }

    /// Appends a new contact and persists.
    pub fn add(&mut self, contact: Contact) {
        let id = contact.id;
        self.contacts.push(contact);
        self.persist("store_add");
        self.notify(&StoreEvent::Added(id));
    }

    /// Records an interaction at the current instant.
    pub fn record_interaction_now(&mut self, id: ContactId) {
        self.append_interaction(id, Utc::now());
    }

    /// Records an interaction dated one calendar day back.
    pub fn record_interaction_yesterday(&mut self, id: ContactId) {
        self.append_interaction(id, Utc::now() - Duration::days(1));
    }

    /// Records an interaction at an explicit date (date-picker flow).
    ///
    /// Appends `date` as a new entry even when it is older than existing
    /// ones; insertion order remains the "last contacted" order.
    pub fn set_interaction_date(&mut self, id: ContactId, date: DateTime<Utc>) {
        self.append_interaction(id, date);
    }

    /// Replaces the mutable fields of a contact (edit form).
    ///
    /// The most recent interaction is corrected in place rather than
    /// appended: the last entry is overwritten with `last_contacted`, or
    /// seeded as the sole entry if the list was somehow empty.
    pub fn update(
        &mut self,
        id: ContactId,
        name: impl Into<String>,
        image_data: Option<Vec<u8>>,
        last_contacted: DateTime<Utc>,
        category: ContactCategory,
        birthday: Option<DateTime<Utc>>,
    ) {
        let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            debug!("event=store_update module=store status=noop reason=not_found id={id}");
            return;
        };

        contact.name = name.into();
        contact.image_data = image_data;
        contact.category = category;
        contact.birthday = birthday;
        match contact.interactions.last_mut() {
            Some(last) => *last = last_contacted,
            None => contact.interactions.push(last_contacted),
        }

        self.persist("store_update");
        self.notify(&StoreEvent::Updated(id));
    }

    /// Removes a contact and persists. Silent no-op for unknown ids.
    pub fn delete(&mut self, id: ContactId) {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        if self.contacts.len() == before {
            debug!("event=store_delete module=store status=noop reason=not_found id={id}");
            return;
        }
        self.persist("store_delete");
        self.notify(&StoreEvent::Deleted(id));
    }

    /// Serializes the collection and writes the document atomically.
    ///
    /// Entries violating the contact invariants are filtered out of the
    /// written snapshot. The write goes through a temp file in the same
    /// directory followed by a rename, so the document is never left half
    /// written.
    pub fn save(&self) -> StoreResult<()> {
        let snapshot: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|contact| contact.is_valid())
            .collect();
        let json = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = temp_sibling(&self.path);
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn append_interaction(&mut self, id: ContactId, at: DateTime<Utc>) {
        let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) else {
            debug!("event=store_interaction module=store status=noop reason=not_found id={id}");
            return;
        };
        contact.record_interaction(at);
        self.persist("store_interaction");
        self.notify(&StoreEvent::InteractionRecorded(id));
    }

    /// Best-effort persistence used by mutation paths.
    ///
    /// A failed write is logged, not returned: the in-memory collection
    /// remains authoritative for the session and the next successful save
    /// reconciles the file.
    fn persist(&self, event: &str) {
        if let Err(err) = self.save() {
            error!(
                "event={event} module=store status=error error_code=save_failed path={} error={err}",
                self.path.display()
            );
        }
    }

    fn notify(&self, event: &StoreEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }
}

/// Reads and parses the document, resolving every failure to a usable state.
fn load_document(path: &Path) -> (Vec<Contact>, LoadOutcome) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (Vec::new(), LoadOutcome::Fresh);
        }
        Err(err) => {
            // Unreadable without bytes to back up; start empty.
            error!(
                "event=store_load module=store status=error error_code=read_failed path={} error={err}",
                path.display()
            );
            return (Vec::new(), LoadOutcome::Recovered);
        }
    };

    match serde_json::from_slice::<Vec<Contact>>(&bytes) {
        Ok(contacts) => return (contacts, LoadOutcome::Direct),
        Err(err) => {
            debug!("event=store_load module=store status=retry detail=current_schema_failed error={err}");
        }
    }

    match serde_json::from_slice::<Vec<LegacyContact>>(&bytes) {
        Ok(legacy) => {
            let contacts: Vec<Contact> = legacy.into_iter().map(LegacyContact::migrate).collect();
            info!(
                "event=store_migrate module=store status=ok count={} from_schema=legacy",
                contacts.len()
            );
            (contacts, LoadOutcome::Migrated)
        }
        Err(err) => {
            warn!(
                "event=store_load module=store status=error error_code=corrupt_document path={} error={err}",
                path.display()
            );
            backup_and_remove(path);
            (Vec::new(), LoadOutcome::Recovered)
        }
    }
}

/// Copies corrupt bytes to `<name>.backup.<ext>` and removes the original.
fn backup_and_remove(path: &Path) {
    let backup = backup_sibling(path);
    if let Err(err) = std::fs::copy(path, &backup) {
        error!(
            "event=store_backup module=store status=error error_code=backup_failed path={} error={err}",
            backup.display()
        );
        return;
    }
    if let Err(err) = std::fs::remove_file(path) {
        error!(
            "event=store_backup module=store status=error error_code=remove_failed path={} error={err}",
            path.display()
        );
        return;
    }
    info!(
        "event=store_backup module=store status=ok backup_path={}",
        backup.display()
    );
}

/// `contacts.json` -> `contacts.backup.json`; extensionless names get a
/// plain `.backup` suffix.
fn backup_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{stem}.backup.{}", ext.to_string_lossy()),
        None => format!("{stem}.backup"),
    };
    path.with_file_name(name)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "contacts.json".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
