//! Warmth filter buckets for the contact list.
//!
//! # Responsibility
//! - Group contacts into coarse warmth tiers for filter chips.
//!
//! # Invariants
//! - Thresholds here are intentionally independent from the classifier's
//!   color buckets; the two tables describe different UI concerns and are
//!   kept separate on purpose.

use crate::aging::classifier::days_since_last_contact;
use crate::model::contact::Contact;
use chrono::{DateTime, Utc};

/// Filter chip selection over contact warmth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFilter {
    /// Everyone.
    #[default]
    All,
    /// Contacted within the last week.
    Hot,
    /// 8-21 days since contact.
    Warm,
    /// 22-45 days since contact.
    Cooling,
    /// More than 45 days since contact.
    NeedsLove,
}

impl ContactFilter {
    /// Display title for the filter chip.
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::Cooling => "Cooling",
            Self::NeedsLove => "Needs Love",
        }
    }

    /// Whether `contact` belongs to this warmth tier at time `now`.
    pub fn matches(self, contact: &Contact, now: DateTime<Utc>) -> bool {
        let days = days_since_last_contact(contact, now);
        match self {
            Self::All => true,
            Self::Hot => days <= 7,
            Self::Warm => days > 7 && days <= 21,
            Self::Cooling => days > 21 && days <= 45,
            Self::NeedsLove => days > 45,
        }
    }

    /// Number of contacts in this tier, for chip badges.
    pub fn count(self, contacts: &[Contact], now: DateTime<Utc>) -> usize {
        contacts
            .iter()
            .filter(|contact| self.matches(contact, now))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::ContactFilter;
    use crate::model::contact::{Contact, ContactCategory};
    use chrono::{Duration, Utc};

    fn contact_aged(days: i64) -> Contact {
        let now = Utc::now();
        Contact::new("June", None, now - Duration::days(days), ContactCategory::Friends)
    }

    #[test]
    fn tiers_partition_the_day_axis() {
        let now = Utc::now();
        for days in 0..120 {
            let contact = contact_aged(days);
            let matching = [
                ContactFilter::Hot,
                ContactFilter::Warm,
                ContactFilter::Cooling,
                ContactFilter::NeedsLove,
            ]
            .into_iter()
            .filter(|filter| filter.matches(&contact, now))
            .count();
            assert_eq!(matching, 1, "day {days} should match exactly one tier");
            assert!(ContactFilter::All.matches(&contact, now));
        }
    }

    #[test]
    fn counts_follow_matches() {
        let now = Utc::now();
        let contacts = vec![contact_aged(0), contact_aged(10), contact_aged(30), contact_aged(90)];
        assert_eq!(ContactFilter::All.count(&contacts, now), 4);
        assert_eq!(ContactFilter::Hot.count(&contacts, now), 1);
        assert_eq!(ContactFilter::Warm.count(&contacts, now), 1);
        assert_eq!(ContactFilter::Cooling.count(&contacts, now), 1);
        assert_eq!(ContactFilter::NeedsLove.count(&contacts, now), 1);
    }
}
