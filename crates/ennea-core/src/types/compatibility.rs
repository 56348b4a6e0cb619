//! Compatibility records and the qualitative score bands.

use serde::{Deserialize, Serialize};

use crate::types::TypeNumber;

/// Compatibility data for an unordered pair of types.
///
/// Curated records carry narrative prose; heuristic results carry only the
/// score, with every narrative list empty. Same-type pairs are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRecord {
    pub type1: TypeNumber,
    pub type2: TypeNumber,

    /// Overall score in the closed range [1, 10].
    pub overall_score: u8,

    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub growth_opportunities: Vec<String>,
    #[serde(default)]
    pub communication_tips: Vec<String>,
}

impl CompatibilityRecord {
    /// Creates a score-only record for a heuristically resolved pair.
    ///
    /// Narrative fields are empty - only curated records carry prose.
    pub fn heuristic(type1: TypeNumber, type2: TypeNumber, overall_score: u8) -> Self {
        Self {
            type1,
            type2,
            overall_score,
            strengths: Vec::new(),
            challenges: Vec::new(),
            growth_opportunities: Vec::new(),
            communication_tips: Vec::new(),
        }
    }

    /// Returns true when the record carries curated narrative prose.
    pub fn is_curated(&self) -> bool {
        !self.strengths.is_empty()
            || !self.challenges.is_empty()
            || !self.growth_opportunities.is_empty()
            || !self.communication_tips.is_empty()
    }
}

/// Qualitative band for an overall compatibility score.
///
/// A pure step function over the score: ≥8 excellent, ≥6 good, ≥4 moderate,
/// everything below marks significant differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityBand {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl CompatibilityBand {
    /// Maps a score to its band.
    pub fn from_score(score: u8) -> CompatibilityBand {
        match score {
            s if s >= 8 => Self::Excellent,
            s if s >= 6 => Self::Good,
            s if s >= 4 => Self::Moderate,
            _ => Self::Challenging,
        }
    }

    /// Returns the fixed label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Challenging => "significant differences",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(CompatibilityBand::from_score(10), CompatibilityBand::Excellent);
        assert_eq!(CompatibilityBand::from_score(8), CompatibilityBand::Excellent);
        assert_eq!(CompatibilityBand::from_score(7), CompatibilityBand::Good);
        assert_eq!(CompatibilityBand::from_score(6), CompatibilityBand::Good);
        assert_eq!(CompatibilityBand::from_score(5), CompatibilityBand::Moderate);
        assert_eq!(CompatibilityBand::from_score(4), CompatibilityBand::Moderate);
        assert_eq!(CompatibilityBand::from_score(3), CompatibilityBand::Challenging);
        assert_eq!(CompatibilityBand::from_score(1), CompatibilityBand::Challenging);
    }

    #[test]
    fn test_heuristic_record_has_no_prose() {
        let record = CompatibilityRecord::heuristic(TypeNumber::Two, TypeNumber::Five, 5);
        assert!(!record.is_curated());
        assert!(record.strengths.is_empty());
        assert!(record.communication_tips.is_empty());
    }

    #[test]
    fn test_labels_are_distinct() {
        let bands = [
            CompatibilityBand::Excellent,
            CompatibilityBand::Good,
            CompatibilityBand::Moderate,
            CompatibilityBand::Challenging,
        ];
        let labels: std::collections::HashSet<_> = bands.iter().map(|b| b.label()).collect();
        assert_eq!(labels.len(), bands.len());
    }

    #[test]
    fn test_record_serde_defaults_missing_lists() {
        let json = r#"{"type1": 1, "type2": 7, "overall_score": 8}"#;
        let record: CompatibilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.overall_score, 8);
        assert!(record.strengths.is_empty());
    }
}
