//! Aging classifier.
//!
//! # Responsibility
//! - Derive visual/textual warmth attributes from days since last contact.
//!
//! # Invariants
//! - Pure functions, deterministic given `(last_contacted, now)`.
//! - Each attribute table partitions `(-inf, +inf)` on the day axis; there is
//!   no out-of-range input and no error path.

use crate::model::contact::Contact;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// Discrete color bucket for a contact card, warm to faded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmthColor {
    /// 0-1 days: vibrant warm red-orange.
    RecentWarm,
    /// 2-3 days: warm terracotta.
    RecentVibrant,
    /// 4-7 days: cooling terracotta.
    FadingWarm,
    /// 8-14 days: warm beige, less saturated.
    FadingNeutral,
    /// 15-30 days: cool blue-gray.
    OldCool,
    /// 31+ days: very desaturated gray.
    OldFaded,
}

impl WarmthColor {
    /// Stable kebab-case name for theming lookups.
    pub fn label(self) -> &'static str {
        match self {
            Self::RecentWarm => "recent-warm",
            Self::RecentVibrant => "recent-vibrant",
            Self::FadingWarm => "fading-warm",
            Self::FadingNeutral => "fading-neutral",
            Self::OldCool => "old-cool",
            Self::OldFaded => "old-faded",
        }
    }
}

impl Display for WarmthColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text color treatment against the aged card background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContrast {
    /// Platform default text color, used once the card has cooled (>14 days).
    Default,
    /// Inverted (light-on-warm) text for still-warm cards.
    Inverted,
}

/// Floor of calendar days between two instants.
///
/// Works on calendar dates, not 24-hour spans: 23:59 to 00:01 the next day
/// counts as one day. A `last` in the future yields a negative count, which
/// every bucket table resolves to its lowest bucket.
pub fn days_between(last: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - last.date_naive()).num_days()
}

/// Days since a contact's most recent (last-inserted) interaction.
///
/// A contact with an empty interaction list reads as contacted "now"; such
/// records are filtered out of the store, but the classifier stays total.
pub fn days_since_last_contact(contact: &Contact, now: DateTime<Utc>) -> i64 {
    match contact.last_contacted() {
        Some(last) => days_between(last, now),
        None => 0,
    }
}

/// Color bucket for the card background.
pub fn warmth_color(days: i64) -> WarmthColor {
    match days {
        ..=1 => WarmthColor::RecentWarm,
        2..=3 => WarmthColor::RecentVibrant,
        4..=7 => WarmthColor::FadingWarm,
        8..=14 => WarmthColor::FadingNeutral,
        15..=30 => WarmthColor::OldCool,
        _ => WarmthColor::OldFaded,
    }
}

/// Saturation multiplier, 1.1 (fresh, slightly boosted) down to 0.30.
pub fn saturation_multiplier(days: i64) -> f64 {
    match days {
        ..=1 => 1.1,
        2..=3 => 0.95,
        4..=7 => 0.90,
        8..=14 => 0.80,
        15..=30 => 0.70,
        31..=60 => 0.50,
        _ => 0.30,
    }
}

/// Strength of the cool-tone overlay washed over the card, 0.0 to 0.70.
pub fn cool_overlay_strength(days: i64) -> f64 {
    match days {
        ..=1 => 0.0,
        2..=3 => 0.1,
        4..=7 => 0.2,
        8..=14 => 0.3,
        15..=30 => 0.4,
        31..=60 => 0.55,
        _ => 0.70,
    }
}

/// Frost border intensity. Zero until a contact has gone cold (15+ days).
pub fn frost_intensity(days: i64) -> f64 {
    match days {
        ..=14 => 0.0,
        15..=21 => 0.3,
        22..=30 => 0.5,
        31..=45 => 0.7,
        _ => 1.0,
    }
}

/// Text color treatment for the aged card.
pub fn text_contrast(days: i64) -> TextContrast {
    if days > 14 {
        TextContrast::Default
    } else {
        TextContrast::Inverted
    }
}

/// Human-readable contextual time, e.g. "today", "3 days ago", "a month ago".
pub fn relative_time_label(days: i64) -> String {
    match days {
        ..=0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7 => "a week ago".to_string(),
        8..=13 => "more than a week ago".to_string(),
        14..=17 => "2 weeks ago".to_string(),
        18..=27 => "almost a month ago".to_string(),
        28..=35 => "a month ago".to_string(),
        36..=60 => "over a month ago".to_string(),
        61..=90 => "2 months ago".to_string(),
        _ => "more than 2 months ago".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn days_between_uses_calendar_dates_not_durations() {
        let last = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 0, 1, 0).unwrap();
        assert_eq!(days_between(last, now), 1);
    }

    #[test]
    fn future_timestamp_lands_in_lowest_bucket() {
        assert_eq!(warmth_color(-3), WarmthColor::RecentWarm);
        assert_eq!(saturation_multiplier(-3), 1.1);
        assert_eq!(cool_overlay_strength(-3), 0.0);
        assert_eq!(frost_intensity(-3), 0.0);
        assert_eq!(relative_time_label(-3), "today");
    }

    #[test]
    fn color_bucket_boundaries() {
        assert_eq!(warmth_color(0), WarmthColor::RecentWarm);
        assert_eq!(warmth_color(1), WarmthColor::RecentWarm);
        assert_eq!(warmth_color(2), WarmthColor::RecentVibrant);
        assert_eq!(warmth_color(4), WarmthColor::FadingWarm);
        assert_eq!(warmth_color(7), WarmthColor::FadingWarm);
        assert_eq!(warmth_color(8), WarmthColor::FadingNeutral);
        assert_eq!(warmth_color(14), WarmthColor::FadingNeutral);
        assert_eq!(warmth_color(15), WarmthColor::OldCool);
        assert_eq!(warmth_color(30), WarmthColor::OldCool);
        assert_eq!(warmth_color(31), WarmthColor::OldFaded);
        assert_eq!(warmth_color(365), WarmthColor::OldFaded);
    }

    #[test]
    fn text_contrast_flips_after_two_weeks() {
        assert_eq!(text_contrast(14), TextContrast::Inverted);
        assert_eq!(text_contrast(15), TextContrast::Default);
    }
}
