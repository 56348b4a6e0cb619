//! Catalog fixtures with controlled sparseness.

use ennea_core::types::{
    InstinctPairingDynamic, InstinctType, PairingCompatibility, TypeNumber, TypeSubtypeStyle,
};
use ennea_core::{Catalog, CatalogData};

/// A valid style record for any (type, instinct) combination.
///
/// Needs/gives/blind-spot lists are non-empty and deterministic so tests
/// can assert on exact merge behavior.
pub fn sample_style(type_number: TypeNumber, instinct: InstinctType) -> TypeSubtypeStyle {
    let tag = format!("type {} {}", type_number, instinct.code());
    TypeSubtypeStyle {
        type_number,
        instinct,
        relationship_style: format!("Fixture style for {}", tag),
        needs_in_relationship: vec![
            format!("Consistency from a partner of {}", tag),
            "Being understood without long explanations".to_string(),
        ],
        gives_in_relationship: vec![
            format!("Steadiness typical of {}", tag),
            "Loyalty through difficulty".to_string(),
        ],
        blind_spots: vec![format!("Overreliance on the habits of {}", tag)],
        ideal_partner_qualities: vec!["Patience".to_string()],
    }
}

/// A valid pairing dynamic for any unordered instinct pair.
pub fn sample_pairing(instinct1: InstinctType, instinct2: InstinctType) -> InstinctPairingDynamic {
    InstinctPairingDynamic {
        instinct1,
        instinct2,
        compatibility: PairingCompatibility::Medium,
        description: format!("Fixture pairing {{{}, {}}}", instinct1, instinct2),
        strengths: vec!["Complementary coverage".to_string()],
        challenges: vec!["Different default priorities".to_string()],
        tips: vec!["Name the difference out loud".to_string()],
    }
}

/// A catalog with no curated data at all.
///
/// Every lookup misses; compatibility resolution is pure heuristic.
pub fn empty_catalog() -> Catalog {
    Catalog::from_data(CatalogData::default()).expect("empty catalog data is valid")
}

/// A deliberately sparse catalog.
///
/// Contains exactly one subtype style - (One, sp) - and all six instinct
/// pairings. Every other style is missing, so any comparison involving a
/// second distinct subtype finds `style2` (or `style1`) absent.
pub fn sparse_catalog() -> Catalog {
    let mut instinct_pairings = Vec::new();
    let all = InstinctType::all();
    for (i, &a) in all.iter().enumerate() {
        for &b in &all[i..] {
            instinct_pairings.push(sample_pairing(a, b));
        }
    }

    let data = CatalogData {
        subtype_styles: vec![sample_style(TypeNumber::One, InstinctType::SelfPreservation)],
        instinct_pairings,
        ..Default::default()
    };
    Catalog::from_data(data).expect("sparse catalog data is valid")
}
