//! Narrative archetypes and long-form stories for curated type pairs.
//!
//! Both are hand-authored for specific pairs only; an uncatalogued pair has
//! no fallback and resolves to nothing.

use serde::{Deserialize, Serialize};

use crate::types::TypeNumber;

/// A named narrative descriptor for an unordered type pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipArchetype {
    pub type1: TypeNumber,
    pub type2: TypeNumber,

    /// Short archetype name, e.g. "The Visionaries".
    pub name: String,

    /// One-line essence of the pairing.
    pub essence: String,

    /// How the two types move together day to day.
    pub dynamic: String,
}

/// Long-form narrative for an unordered type pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipStory {
    pub type1: TypeNumber,
    pub type2: TypeNumber,

    pub title: String,
    pub narrative: String,
    pub resolution: String,
}
