//! Archetype and story lookup: symmetric, curated-only, no fallback.

use ennea_core::types::TypeNumber;
use ennea_core::{resolve_archetype, resolve_story};

#[test]
fn archetype_lookup_is_order_independent() {
    for a in TypeNumber::all() {
        for b in TypeNumber::all() {
            let forward = resolve_archetype(a, b);
            let backward = resolve_archetype(b, a);
            assert_eq!(forward, backward, "archetype asymmetry for {}-{}", a, b);
        }
    }
}

#[test]
fn story_lookup_is_order_independent() {
    for a in TypeNumber::all() {
        for b in TypeNumber::all() {
            assert_eq!(
                resolve_story(a, b),
                resolve_story(b, a),
                "story asymmetry for {}-{}",
                a,
                b
            );
        }
    }
}

#[test]
fn curated_archetype_is_found() {
    let archetype = resolve_archetype(TypeNumber::Seven, TypeNumber::One)
        .expect("{1,7} archetype is curated");
    assert_eq!(archetype.name, "Structure and Spark");
}

#[test]
fn uncatalogued_pair_has_no_archetype_or_story() {
    // {2,5} carries no curated narrative; absence, not an error.
    assert!(resolve_archetype(TypeNumber::Two, TypeNumber::Five).is_none());
    assert!(resolve_story(TypeNumber::Two, TypeNumber::Five).is_none());
}

#[test]
fn stories_are_a_subset_of_interesting_pairs() {
    let mut found = 0;
    for a in TypeNumber::all() {
        for b in TypeNumber::all() {
            if a <= b && resolve_story(a, b).is_some() {
                found += 1;
            }
        }
    }
    assert!(found >= 5, "expected at least five curated stories, found {}", found);
}
