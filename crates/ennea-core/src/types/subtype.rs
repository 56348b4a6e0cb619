//! Subtype behavioral profiles and instinct pairing dynamics.

use serde::{Deserialize, Serialize};

use crate::types::{InstinctType, TypeNumber};

/// Behavioral profile for one (type, instinct) combination.
///
/// One record per combination is expected (27 in the built-in catalog) but
/// not structurally enforced; lookups return `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSubtypeStyle {
    pub type_number: TypeNumber,
    pub instinct: InstinctType,

    /// One-paragraph sketch of how this subtype shows up in relationship.
    pub relationship_style: String,

    pub needs_in_relationship: Vec<String>,
    pub gives_in_relationship: Vec<String>,
    pub blind_spots: Vec<String>,
    pub ideal_partner_qualities: Vec<String>,
}

/// Coarse compatibility rating for an instinct pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingCompatibility {
    High,
    Medium,
    Low,
}

impl PairingCompatibility {
    /// Returns a human-readable description of this rating.
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "Naturally aligned priorities with little translation needed",
            Self::Medium => "Workable with awareness of each other's different priorities",
            Self::Low => "Priorities pull in different directions and need deliberate bridging",
        }
    }
}

/// Pairing dynamic for an unordered pair of instincts.
///
/// Same-instinct pairs are valid and represent two people sharing a
/// dominant instinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstinctPairingDynamic {
    pub instinct1: InstinctType,
    pub instinct2: InstinctType,

    pub compatibility: PairingCompatibility,
    pub description: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub tips: Vec<String>,
}

/// The `gives_in_relationship` lists of both styles, paired by source.
///
/// Carried verbatim, with no filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplementaryGifts {
    pub from_first: Vec<String>,
    pub from_second: Vec<String>,
}

/// Merged insights computed when both subtype styles are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedInsights {
    /// Needs from the first style that loosely overlap a need of the second.
    ///
    /// Best-effort signal from a first-word text heuristic, not a semantic
    /// match.
    pub shared_needs: Vec<String>,

    pub complementary_gifts: ComplementaryGifts,

    /// Both styles' blind spots concatenated, not deduplicated.
    pub potential_friction: Vec<String>,
}

/// Result of comparing two (type, instinct) subtypes.
///
/// Absence is represented structurally: any piece the catalog is missing is
/// `None`, and `combined_insights` requires both styles to be present. No
/// input combination raises an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtypeComparison {
    pub style1: Option<TypeSubtypeStyle>,
    pub style2: Option<TypeSubtypeStyle>,
    pub pairing: Option<InstinctPairingDynamic>,
    pub combined_insights: Option<CombinedInsights>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_compatibility_serde_lowercase() {
        let json = serde_json::to_string(&PairingCompatibility::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_pairing_descriptions_distinct() {
        let ratings = [
            PairingCompatibility::High,
            PairingCompatibility::Medium,
            PairingCompatibility::Low,
        ];
        let descriptions: std::collections::HashSet<_> =
            ratings.iter().map(|r| r.description()).collect();
        assert_eq!(descriptions.len(), ratings.len());
    }

    #[test]
    fn test_comparison_serde_roundtrip_with_absent_pieces() {
        let comparison = SubtypeComparison {
            style1: None,
            style2: None,
            pairing: None,
            combined_insights: None,
        };
        let json = serde_json::to_string(&comparison).unwrap();
        let parsed: SubtypeComparison = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, comparison);
    }
}
