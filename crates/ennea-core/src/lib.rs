//! Compatibility & relationship-dynamics resolution engine.
//!
//! Everything here is a pure, synchronous function over immutable curated
//! tables: given one or two type identifiers (and optionally instinct
//! variants or tritype codes), the engine produces a symmetric compatibility
//! score, a qualitative label, narrative archetypes, and combined
//! behavioral insights.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`TypeNumber`, `Center`, `InstinctStack`, `TritypeCode`, etc.)
//! - The curated [`Catalog`] with its explicit load lifecycle
//! - Resolvers as catalog methods, plus top-level convenience functions over
//!   the built-in catalog
//! - Error types and result aliases
//! - Configuration structures
//!
//! Curated data always wins over the heuristic; absence of curated data is
//! signalled with `Option`, never an error.
//!
//! # Example
//!
//! ```
//! use ennea_core::types::TypeNumber;
//!
//! let record = ennea_core::resolve_compatibility(TypeNumber::One, TypeNumber::Seven);
//! assert_eq!(record.overall_score, 8);
//! assert_eq!(ennea_core::describe_compatibility(record.overall_score), "excellent");
//! ```

pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod subtype;
pub mod types;

// Re-exports for convenience
pub use catalog::{catalog, Catalog, CatalogData, SymmetricTable};
pub use compatibility::describe_compatibility;
pub use config::Config;
pub use error::{CoreError, CoreResult};

use types::{
    CompatibilityRecord, InstinctStack, InstinctType, RelationshipArchetype, RelationshipStory,
    SubtypeComparison, TritypeCode, TypeNumber,
};

/// Resolves compatibility for any pair of types against the built-in
/// catalog. Total; see [`Catalog::resolve_compatibility`].
pub fn resolve_compatibility(a: TypeNumber, b: TypeNumber) -> CompatibilityRecord {
    catalog().resolve_compatibility(a, b)
}

/// Narrative archetype for the pair, if catalogued.
pub fn resolve_archetype(a: TypeNumber, b: TypeNumber) -> Option<&'static RelationshipArchetype> {
    catalog().resolve_archetype(a, b)
}

/// Long-form story for the pair, if catalogued.
pub fn resolve_story(a: TypeNumber, b: TypeNumber) -> Option<&'static RelationshipStory> {
    catalog().resolve_story(a, b)
}

/// Compares two (type, instinct) subtypes against the built-in catalog.
pub fn compare_subtypes(
    type1: TypeNumber,
    instinct1: InstinctType,
    type2: TypeNumber,
    instinct2: InstinctType,
) -> SubtypeComparison {
    catalog().compare_subtypes(type1, instinct1, type2, instinct2)
}

/// Composes a tritype code from one type per center.
///
/// Fails with [`CoreError::InvalidTritypeComposition`] on a
/// center-membership violation.
pub fn compose_tritype(
    head: TypeNumber,
    heart: TypeNumber,
    gut: TypeNumber,
) -> CoreResult<TritypeCode> {
    TritypeCode::compose(head, heart, gut)
}

/// Returns the (head, heart, gut) triple of a code. Infallible; no center
/// re-check is performed.
pub fn decompose_tritype(code: &TritypeCode) -> (TypeNumber, TypeNumber, TypeNumber) {
    code.decompose()
}

/// Parses `"dominant/secondary"` stack notation.
///
/// Fails with [`CoreError::MalformedInstinctStack`] unless the string is
/// exactly two distinct known codes.
pub fn parse_instinct_stack(s: &str) -> CoreResult<InstinctStack> {
    s.parse()
}

/// The instinct a stack leaves out. Total.
pub fn blind_spot_instinct(stack: &InstinctStack) -> InstinctType {
    stack.blind_spot()
}
