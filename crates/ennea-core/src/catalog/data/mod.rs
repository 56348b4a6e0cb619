//! Built-in curated reference data.
//!
//! These tables are the hand-authored content the resolvers consult. They
//! are assembled into a [`CatalogData`](crate::catalog::CatalogData)
//! document once at startup; the engine never mutates them.

mod archetypes;
mod compatibility;
mod instinct_pairings;
mod stacks;
mod stories;
mod subtype_styles;
mod tritypes;

use crate::catalog::CatalogData;

/// Assembles the complete built-in catalog document.
pub(crate) fn builtin() -> CatalogData {
    CatalogData {
        compatibility: compatibility::records(),
        archetypes: archetypes::records(),
        stories: stories::records(),
        subtype_styles: subtype_styles::records(),
        instinct_pairings: instinct_pairings::records(),
        tritypes: tritypes::records(),
        stack_descriptions: stacks::records(),
    }
}

/// Owned string list from literals; keeps the data tables readable.
pub(crate) fn svec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
