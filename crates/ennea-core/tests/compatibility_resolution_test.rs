//! End-to-end properties of compatibility resolution.

use ennea_core::types::{CompatibilityBand, TypeNumber};
use ennea_core::{catalog, describe_compatibility, resolve_compatibility};

#[test]
fn resolution_is_symmetric_for_all_pairs() {
    for a in TypeNumber::all() {
        for b in TypeNumber::all() {
            let forward = resolve_compatibility(a, b);
            let backward = resolve_compatibility(b, a);
            assert_eq!(
                forward.overall_score, backward.overall_score,
                "score asymmetry for {}-{}",
                a, b
            );
            assert_eq!(
                forward.strengths, backward.strengths,
                "narrative asymmetry for {}-{}",
                a, b
            );
        }
    }
}

#[test]
fn scores_stay_in_bounds_for_all_pairs() {
    for a in TypeNumber::all() {
        for b in TypeNumber::all() {
            let score = resolve_compatibility(a, b).overall_score;
            assert!(
                (1..=10).contains(&score),
                "score {} out of bounds for {}-{}",
                score,
                a,
                b
            );
        }
    }
}

#[test]
fn curated_record_returned_verbatim() {
    // {1,7} is catalogued with score 8; the curated record must come back
    // exactly, prose included, in both orderings.
    let curated = catalog()
        .curated_compatibility(TypeNumber::One, TypeNumber::Seven)
        .expect("{1,7} is curated")
        .clone();
    assert_eq!(curated.overall_score, 8);
    assert!(!curated.strengths.is_empty());

    let resolved = resolve_compatibility(TypeNumber::One, TypeNumber::Seven);
    assert_eq!(resolved, curated);

    let reversed = resolve_compatibility(TypeNumber::Seven, TypeNumber::One);
    assert_eq!(reversed, curated);
}

#[test]
fn uncatalogued_relation_free_pair_scores_baseline() {
    // {2,5}: no curated record, different centers, no growth or stress
    // arrow in either direction, not adjacent. Baseline 5, no adjustments.
    assert!(catalog()
        .curated_compatibility(TypeNumber::Two, TypeNumber::Five)
        .is_none());
    let record = resolve_compatibility(TypeNumber::Two, TypeNumber::Five);
    assert_eq!(record.overall_score, 5);
    assert!(record.strengths.is_empty());
    assert!(record.challenges.is_empty());
    assert!(record.growth_opportunities.is_empty());
    assert!(record.communication_tips.is_empty());
}

#[test]
fn heuristic_pair_with_both_arrows_scores_seven() {
    // {3,6} is deliberately uncatalogued: integration 3→6 plus
    // disintegration 6→3 stack to 5 + 1.5 + 0.5 = 7.
    assert!(catalog()
        .curated_compatibility(TypeNumber::Three, TypeNumber::Six)
        .is_none());
    let record = resolve_compatibility(TypeNumber::Three, TypeNumber::Six);
    assert_eq!(record.overall_score, 7);
}

#[test]
fn describe_matches_band_labels_everywhere() {
    for score in 1..=10u8 {
        assert_eq!(
            describe_compatibility(score),
            CompatibilityBand::from_score(score).label()
        );
    }
}

#[test]
fn same_type_pairs_resolve() {
    for t in TypeNumber::all() {
        let record = resolve_compatibility(t, t);
        assert!((1..=10).contains(&record.overall_score));
    }
}
