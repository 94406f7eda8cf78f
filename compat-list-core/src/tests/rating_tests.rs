use super::*;

#[test]
fn known_codes_map_to_expected_bands() {
    let cases = [
        (0, Category::Perfect, "Perfect"),
        (1, Category::Perfect, "Great"),
        (2, Category::Playable, "Good"),
        (3, Category::Playable, "OK"),
        (4, Category::Unplayable, "Poor"),
        (5, Category::Unplayable, "Bad"),
        (99, Category::Untested, "Untested"),
    ];
    for (code, category, label) in cases {
        let c = classify(code);
        assert_eq!(c.category, category, "code {code}");
        assert_eq!(c.label(), label, "code {code}");
    }
}

#[test]
fn out_of_range_codes_are_unknown_and_untested() {
    for code in [-1, 6, 42, 98, 100, i64::MIN, i64::MAX] {
        let c = classify(code);
        assert_eq!(c.rating, Rating::Unknown, "code {code}");
        assert_eq!(c.category, Category::Untested, "code {code}");
    }
}

#[test]
fn classification_is_deterministic() {
    for code in -10..=110 {
        assert_eq!(classify(code), classify(code));
    }
}

#[test]
fn every_category_is_reachable() {
    for &category in Category::all() {
        assert!(
            Rating::all().iter().any(|r| r.category() == category),
            "no rating maps to {:?}",
            category,
        );
    }
}

#[test]
fn rating_codes_round_trip() {
    for &rating in Rating::all() {
        if let Some(code) = rating.code() {
            assert_eq!(Rating::from_code(code), rating);
        }
    }
    assert_eq!(Rating::Unknown.code(), None);
}

#[test]
fn badge_text_includes_code() {
    assert_eq!(classify(1).badge_text(), "Great (1)");
    assert_eq!(classify(99).badge_text(), "Untested (99)");
    assert_eq!(classify(7).badge_text(), "Unknown (7)");
}
