//! Subtype comparison behavior, on the built-in catalog and on sparse
//! fixtures.

use ennea_core::types::{InstinctType, TypeNumber};
use ennea_core::{catalog, compare_subtypes};
use ennea_test_utils::{empty_catalog, sparse_catalog};

use ennea_core::types::InstinctType::{SelfPreservation as Sp, Sexual as Sx, Social as So};

#[test]
fn builtin_comparison_has_all_pieces() {
    let comparison = compare_subtypes(TypeNumber::Four, Sx, TypeNumber::Five, Sp);
    let style1 = comparison.style1.expect("4 sx style is curated");
    let style2 = comparison.style2.expect("5 sp style is curated");
    let pairing = comparison.pairing.expect("sp/sx pairing is curated");
    let insights = comparison.combined_insights.expect("both styles present");

    assert_eq!(style1.type_number, TypeNumber::Four);
    assert_eq!(style2.type_number, TypeNumber::Five);
    assert_eq!(
        insights.potential_friction.len(),
        style1.blind_spots.len() + style2.blind_spots.len(),
        "friction is the plain concatenation of both blind-spot lists"
    );
    assert_eq!(insights.complementary_gifts.from_first, style1.gives_in_relationship);
    assert_eq!(insights.complementary_gifts.from_second, style2.gives_in_relationship);
    // Unordered pairing: the same record comes back for either instinct order.
    let reversed = compare_subtypes(TypeNumber::Five, Sp, TypeNumber::Four, Sx);
    assert_eq!(reversed.pairing.expect("same pairing"), pairing);
}

#[test]
fn identical_subtypes_share_every_need() {
    // Comparing a subtype with itself: every need trivially first-word
    // matches itself, so shared_needs is the full needs list.
    let comparison = compare_subtypes(TypeNumber::One, Sp, TypeNumber::One, Sp);
    let style = comparison.style1.expect("1 sp style is curated");
    let insights = comparison.combined_insights.expect("both styles present");
    assert_eq!(insights.shared_needs, style.needs_in_relationship);
}

#[test]
fn missing_style_suppresses_insights_only() {
    let catalog = sparse_catalog();
    // (One, sp) is the only style in the fixture; (One, so) is absent.
    let comparison = catalog.compare_subtypes(TypeNumber::One, Sp, TypeNumber::One, So);

    assert!(comparison.style1.is_some());
    assert!(comparison.style2.is_none());
    assert!(comparison.pairing.is_some(), "pairing still returned");
    assert!(comparison.combined_insights.is_none());
}

#[test]
fn same_key_comparison_with_missing_style_yields_no_insights() {
    let catalog = sparse_catalog();
    // (Two, sp) is not in the fixture at all.
    let comparison = catalog.compare_subtypes(TypeNumber::Two, Sp, TypeNumber::Two, Sp);

    assert!(comparison.style1.is_none());
    assert!(comparison.style2.is_none());
    assert!(comparison.pairing.is_some(), "sp/sp pairing is curated in the fixture");
    assert!(comparison.combined_insights.is_none());
}

#[test]
fn empty_catalog_returns_structure_not_errors() {
    let catalog = empty_catalog();
    let comparison = catalog.compare_subtypes(TypeNumber::Nine, Sx, TypeNumber::Three, So);
    assert!(comparison.style1.is_none());
    assert!(comparison.style2.is_none());
    assert!(comparison.pairing.is_none());
    assert!(comparison.combined_insights.is_none());
}

#[test]
fn builtin_covers_all_27_styles() {
    for t in TypeNumber::all() {
        for i in InstinctType::all() {
            assert!(
                catalog().subtype_style(t, i).is_some(),
                "missing style for type {} {}",
                t,
                i
            );
        }
    }
}

#[test]
fn builtin_covers_all_pairings_including_same_instinct() {
    for a in InstinctType::all() {
        for b in InstinctType::all() {
            let comparison = compare_subtypes(TypeNumber::One, a, TypeNumber::One, b);
            assert!(comparison.pairing.is_some(), "pairing {{{}, {}}}", a, b);
        }
    }
}
