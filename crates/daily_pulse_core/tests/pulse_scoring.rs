//! Property-based tests for the scorer and the insight decision table.

use daily_pulse_core::{classify, insight, score, select_insight, InsightCategory, Pulse};
use proptest::prelude::*;

prop_compose! {
    fn rating()(value in 0i64..=10) -> i64 {
        value
    }
}

proptest! {
    #[test]
    fn score_is_non_decreasing_in_energy(e in 0i64..10, f in rating(), s in rating()) {
        prop_assert!(score(e, f, s) <= score(e + 1, f, s));
    }

    #[test]
    fn score_is_non_decreasing_in_focus(e in rating(), f in 0i64..10, s in rating()) {
        prop_assert!(score(e, f, s) <= score(e, f + 1, s));
    }

    #[test]
    fn score_is_non_increasing_in_stress(e in rating(), f in rating(), s in 0i64..10) {
        prop_assert!(score(e, f, s) >= score(e, f, s + 1));
    }

    #[test]
    fn score_is_pure(e in rating(), f in rating(), s in rating()) {
        prop_assert_eq!(score(e, f, s), score(e, f, s));
        prop_assert_eq!(insight(e, f, s), insight(e, f, s));
    }

    #[test]
    fn score_stays_on_the_ten_point_scale(e in any::<i64>(), f in any::<i64>(), s in any::<i64>()) {
        let value = score(e, f, s).value();
        prop_assert!((0.0..=10.0).contains(&value));
    }

    #[test]
    fn out_of_range_ratings_classify_like_their_clamped_values(
        e in -50i64..60,
        f in -50i64..60,
        s in -50i64..60,
    ) {
        let clamped = Pulse::new(e.clamp(0, 10), f.clamp(0, 10), s.clamp(0, 10));
        prop_assert_eq!(classify(&Pulse::new(e, f, s)), classify(&clamped));
    }
}

#[test]
fn canonical_score_example() {
    assert_eq!(score(9, 9, 1).value(), 9.0);
    assert_eq!(score(9, 9, 1).badge(), 90);
}

#[test]
fn insight_is_total_over_the_rating_cube() {
    for energy in 0..=10 {
        for focus in 0..=10 {
            for stress in 0..=10 {
                let selected = select_insight(&Pulse::new(energy, focus, stress));
                assert!(!selected.message.is_empty());
                assert!(InsightCategory::ALL.contains(&selected.category));
                assert_eq!(selected.message, selected.category.message());
            }
        }
    }
}

#[test]
fn low_score_with_high_stress_selects_overwhelmed_leaf() {
    let selected = select_insight(&Pulse::new(2, 2, 9));
    assert_eq!(selected.category, InsightCategory::LowOverwhelmed);
    assert_eq!(selected.score.to_string(), "1.7");
    assert_eq!(insight(2, 2, 9), InsightCategory::LowOverwhelmed.message());
}

#[test]
fn messages_are_distinct_per_leaf() {
    let mut messages = InsightCategory::ALL
        .iter()
        .map(|category| category.message())
        .collect::<Vec<_>>();
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), InsightCategory::ALL.len());
}
