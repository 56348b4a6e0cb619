//! Compatibility resolution.
//!
//! Curated records always win; every other pair gets a heuristic score
//! built from the fixed wheel relations:
//!
//! ```text
//! score = 5.0                      (baseline)
//!       + 0.5  if same center
//!       + 1.5  if an integration arrow connects the pair (either direction)
//!       + 0.5  if a disintegration arrow connects the pair (either direction)
//!       + 0.5  if adjacent on the wheel
//! ```
//!
//! The result is clamped to [1, 10] and rounded half-up. Each adjustment
//! applies at most once; the integration and disintegration bonuses stack
//! when the two arrows run oppositely between the same pair.

use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::types::{CompatibilityBand, CompatibilityRecord, TypeNumber};

/// Starting score before any adjustment.
const BASELINE_SCORE: f32 = 5.0;
/// Understanding bonus for two types in the same center (fires for `a == b` too).
const SAME_CENTER_BONUS: f32 = 0.5;
/// Bonus for a growth arrow between the pair, direction-insensitive.
const INTEGRATION_BONUS: f32 = 1.5;
/// Bonus for a stress arrow between the pair, direction-insensitive.
const DISINTEGRATION_BONUS: f32 = 0.5;
/// Bonus for wheel neighbours, {1,9} wrap included.
const ADJACENCY_BONUS: f32 = 0.5;

/// Computes the heuristic score for an uncatalogued pair.
pub(crate) fn heuristic_score(a: TypeNumber, b: TypeNumber) -> u8 {
    let mut score = BASELINE_SCORE;

    if a.center() == b.center() {
        score += SAME_CENTER_BONUS;
    }
    if a.integration() == b || b.integration() == a {
        score += INTEGRATION_BONUS;
    }
    if a.disintegration() == b || b.disintegration() == a {
        score += DISINTEGRATION_BONUS;
    }
    if a.is_adjacent_to(b) {
        score += ADJACENCY_BONUS;
    }

    trace!(%a, %b, score, "heuristic compatibility score");
    score.clamp(1.0, 10.0).round() as u8
}

impl Catalog {
    /// Resolves compatibility for any pair of types.
    ///
    /// Total: a curated record (looked up order-independently) is returned
    /// verbatim when one exists; otherwise a heuristic score-only record is
    /// computed. Never fails and never returns absence.
    pub fn resolve_compatibility(&self, a: TypeNumber, b: TypeNumber) -> CompatibilityRecord {
        if let Some(record) = self.curated_compatibility(a, b) {
            trace!(%a, %b, "curated compatibility record");
            return record.clone();
        }
        debug!(%a, %b, "no curated record, using heuristic");
        CompatibilityRecord::heuristic(a, b, heuristic_score(a, b))
    }
}

/// Maps an overall score to its fixed qualitative label.
///
/// A pure step function: ≥8 "excellent", ≥6 "good", ≥4 "moderate", else
/// "significant differences".
pub fn describe_compatibility(score: u8) -> &'static str {
    CompatibilityBand::from_score(score).label()
}
