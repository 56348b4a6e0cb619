//! Subtype-to-subtype comparison.
//!
//! Combines a per-(type, instinct) behavioral profile with the
//! per-(instinct, instinct) pairing dynamic. Absence of either piece is
//! structural, never an error: whatever the catalog has is returned.

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::types::{
    CombinedInsights, ComplementaryGifts, InstinctType, SubtypeComparison, TypeNumber,
    TypeSubtypeStyle,
};

/// First-word overlap between two phrases, case-insensitive.
///
/// True when either phrase's first word is a substring of the other's.
/// A deliberately loose, best-effort proxy for "these phrases point at the
/// same thing": it over-matches phrases sharing a generic opener (both
/// "being heard" and "being left alone" lead with "being") and
/// under-matches synonyms phrased differently. Not a semantic match, and
/// tests must not treat it as one.
pub(crate) fn first_word_overlap(a: &str, b: &str) -> bool {
    let first = |s: &str| {
        s.split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    };
    let (fa, fb) = (first(a), first(b));
    if fa.is_empty() || fb.is_empty() {
        return false;
    }
    fa.contains(&fb) || fb.contains(&fa)
}

/// Needs from the first style that loosely overlap some need of the second.
fn shared_needs(style1: &TypeSubtypeStyle, style2: &TypeSubtypeStyle) -> Vec<String> {
    style1
        .needs_in_relationship
        .iter()
        .filter(|need| {
            style2
                .needs_in_relationship
                .iter()
                .any(|other| first_word_overlap(need, other))
        })
        .cloned()
        .collect()
}

fn combined_insights(style1: &TypeSubtypeStyle, style2: &TypeSubtypeStyle) -> CombinedInsights {
    let mut potential_friction =
        Vec::with_capacity(style1.blind_spots.len() + style2.blind_spots.len());
    potential_friction.extend(style1.blind_spots.iter().cloned());
    potential_friction.extend(style2.blind_spots.iter().cloned());

    CombinedInsights {
        shared_needs: shared_needs(style1, style2),
        complementary_gifts: ComplementaryGifts {
            from_first: style1.gives_in_relationship.clone(),
            from_second: style2.gives_in_relationship.clone(),
        },
        potential_friction,
    }
}

impl Catalog {
    /// Compares two (type, instinct) subtypes.
    ///
    /// Looks up both behavioral profiles and the unordered instinct pairing;
    /// merged insights are computed only when both profiles are present.
    /// Every input combination succeeds - missing catalog pieces surface as
    /// `None` fields on the result.
    pub fn compare_subtypes(
        &self,
        type1: TypeNumber,
        instinct1: InstinctType,
        type2: TypeNumber,
        instinct2: InstinctType,
    ) -> SubtypeComparison {
        let style1 = self.subtype_style(type1, instinct1).cloned();
        let style2 = self.subtype_style(type2, instinct2).cloned();
        let pairing = self.instinct_pairing(instinct1, instinct2).cloned();

        let combined_insights = match (&style1, &style2) {
            (Some(s1), Some(s2)) => {
                trace!(%type1, %instinct1, %type2, %instinct2, "combining subtype insights");
                Some(combined_insights(s1, s2))
            }
            _ => {
                debug!(
                    %type1, %instinct1, %type2, %instinct2,
                    style1_found = style1.is_some(),
                    style2_found = style2.is_some(),
                    "subtype style missing, skipping combined insights"
                );
                None
            }
        };

        SubtypeComparison {
            style1,
            style2,
            pairing,
            combined_insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_identical_first_words() {
        assert!(first_word_overlap("Respect for solitude", "respect earned daily"));
    }

    #[test]
    fn test_overlap_is_substring_based() {
        // "trust" is a substring of "trustworthy": the heuristic accepts it.
        assert!(first_word_overlap("trust given freely", "trustworthy company"));
    }

    #[test]
    fn test_overlap_over_matches_generic_openers() {
        // Known over-match: unrelated needs sharing the opener "being".
        assert!(first_word_overlap("being heard", "being left alone"));
    }

    #[test]
    fn test_overlap_under_matches_synonyms() {
        // Known under-match: synonymous needs phrased differently.
        assert!(!first_word_overlap("honesty above all", "truthfulness above all"));
    }

    #[test]
    fn test_overlap_case_insensitive() {
        assert!(first_word_overlap("Warmth and humor", "warmth on tap"));
    }

    #[test]
    fn test_overlap_empty_never_matches() {
        assert!(!first_word_overlap("", "anything"));
        assert!(!first_word_overlap("anything", ""));
        assert!(!first_word_overlap("", ""));
    }
}
