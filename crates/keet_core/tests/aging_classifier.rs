use keet_core::{
    cool_overlay_strength, frost_intensity, relative_time_label, saturation_multiplier,
    text_contrast, warmth_color, TextContrast, WarmthColor,
};

const COLOR_ORDER: [WarmthColor; 6] = [
    WarmthColor::RecentWarm,
    WarmthColor::RecentVibrant,
    WarmthColor::FadingWarm,
    WarmthColor::FadingNeutral,
    WarmthColor::OldCool,
    WarmthColor::OldFaded,
];

const LABELS: [&str; 11] = [
    "today",
    "yesterday",
    "2 days ago",
    "3 days ago",
    "4 days ago",
    "5 days ago",
    "6 days ago",
    "a week ago",
    "more than a week ago",
    "2 weeks ago",
    "almost a month ago",
];

#[test]
fn color_buckets_cover_every_day_and_never_warm_back_up() {
    let mut previous_index = 0;
    for days in 0..=400 {
        let color = warmth_color(days);
        let index = COLOR_ORDER
            .iter()
            .position(|candidate| *candidate == color)
            .expect("every day count maps to a known bucket");
        assert!(
            index >= previous_index,
            "day {days} moved from bucket {previous_index} back to {index}"
        );
        previous_index = index;
    }
    assert_eq!(previous_index, COLOR_ORDER.len() - 1);
}

#[test]
fn relative_labels_cover_every_day_without_gaps() {
    for days in 0..=400 {
        let label = relative_time_label(days);
        assert!(!label.is_empty(), "day {days} produced an empty label");
    }
    // The near-term labels are exact and distinct per day window.
    for (days, expected) in LABELS.iter().enumerate().take(9) {
        assert_eq!(relative_time_label(days as i64), *expected);
    }
}

#[test]
fn label_boundaries_match_bucket_table() {
    assert_eq!(relative_time_label(13), "more than a week ago");
    assert_eq!(relative_time_label(14), "2 weeks ago");
    assert_eq!(relative_time_label(17), "2 weeks ago");
    assert_eq!(relative_time_label(18), "almost a month ago");
    assert_eq!(relative_time_label(28), "a month ago");
    assert_eq!(relative_time_label(35), "a month ago");
    assert_eq!(relative_time_label(36), "over a month ago");
    assert_eq!(relative_time_label(61), "2 months ago");
    assert_eq!(relative_time_label(90), "2 months ago");
    assert_eq!(relative_time_label(91), "more than 2 months ago");
}

#[test]
fn saturation_and_overlay_decay_monotonically() {
    let mut previous_saturation = f64::INFINITY;
    let mut previous_overlay = f64::NEG_INFINITY;
    let mut previous_frost = f64::NEG_INFINITY;
    for days in 0..=400 {
        let saturation = saturation_multiplier(days);
        let overlay = cool_overlay_strength(days);
        let frost = frost_intensity(days);
        assert!(saturation <= previous_saturation);
        assert!(overlay >= previous_overlay);
        assert!(frost >= previous_frost);
        previous_saturation = saturation;
        previous_overlay = overlay;
        previous_frost = frost;
    }
    assert_eq!(previous_saturation, 0.30);
    assert_eq!(previous_overlay, 0.70);
    assert_eq!(previous_frost, 1.0);
}

// Contact last interacted 8 days ago: every attribute at once.
#[test]
fn eight_days_since_contact_scenario() {
    assert_eq!(relative_time_label(8), "more than a week ago");
    assert_eq!(saturation_multiplier(8), 0.80);
    assert_eq!(cool_overlay_strength(8), 0.3);
    assert_eq!(frost_intensity(8), 0.0);
    assert_eq!(text_contrast(8), TextContrast::Inverted);
    assert_eq!(warmth_color(8), WarmthColor::FadingNeutral);

    // One week further out the text flips to the platform default.
    assert_eq!(text_contrast(15), TextContrast::Default);
}

#[test]
fn frost_only_appears_once_cold() {
    assert_eq!(frost_intensity(14), 0.0);
    assert_eq!(frost_intensity(15), 0.3);
    assert_eq!(frost_intensity(21), 0.3);
    assert_eq!(frost_intensity(22), 0.5);
    assert_eq!(frost_intensity(30), 0.5);
    assert_eq!(frost_intensity(31), 0.7);
    assert_eq!(frost_intensity(45), 0.7);
    assert_eq!(frost_intensity(46), 1.0);
}
