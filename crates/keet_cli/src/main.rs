//! CLI probe entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `keet_core` linkage.
//! - Print a warmth summary of a contact document for quick local checks.

use chrono::Utc;
use keet_core::{days_since_last_contact, relative_time_label, warmth_color, ContactStore};

fn main() {
    println!("keet_core version={}", keet_core::core_version());

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: keet_cli <contacts.json> to list contact warmth");
        return;
    };

    let store = ContactStore::open(path);
    let now = Utc::now();
    println!(
        "loaded {} contact(s), outcome={:?}",
        store.contacts().len(),
        store.load_outcome()
    );
    for contact in store.contacts() {
        let days = days_since_last_contact(contact, now);
        println!(
            "{}  [{}]  last contacted {} ({})",
            contact.name,
            contact.category,
            relative_time_label(days),
            warmth_color(days)
        );
    }
}
