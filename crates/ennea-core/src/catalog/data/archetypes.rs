//! Curated relationship archetypes.
//!
//! Hand-authored for specific pairs only; an uncatalogued pair has no
//! archetype and resolves to nothing.

use crate::types::{RelationshipArchetype, TypeNumber};

fn record(
    type1: TypeNumber,
    type2: TypeNumber,
    name: &str,
    essence: &str,
    dynamic: &str,
) -> RelationshipArchetype {
    RelationshipArchetype {
        type1,
        type2,
        name: name.to_string(),
        essence: essence.to_string(),
        dynamic: dynamic.to_string(),
    }
}

pub(crate) fn records() -> Vec<RelationshipArchetype> {
    use crate::types::TypeNumber::*;

    vec![
        record(
            One,
            Seven,
            "Structure and Spark",
            "Discipline falls in love with delight.",
            "One builds the frame, Seven fills it with color; each quietly envies and needs what the other leads with.",
        ),
        record(
            Two,
            Eight,
            "The Guardian Bond",
            "Tenderness armored, strength softened.",
            "Eight shields, Two nourishes; behind closed doors the roles swap more often than either admits.",
        ),
        record(
            Four,
            Five,
            "Depth and Insight",
            "Feeling meets understanding at the bottom of the well.",
            "Four brings the weather, Five brings the map; together they go where small talk cannot.",
        ),
        record(
            Nine,
            Nine,
            "Still Waters",
            "Two calm surfaces over deep, unspoken currents.",
            "Harmony comes free; the work is saying the true thing before the current carries it away.",
        ),
        record(
            Two,
            Three,
            "The Radiant Team",
            "Warmth and shine, pointed at the same room.",
            "Two reads hearts, Three reads rooms; their challenge is turning toward each other when no one is watching.",
        ),
        record(
            Six,
            Nine,
            "The Steady Harbor",
            "Vigilance finally finds a place to rest.",
            "Nine's calm answers Six's questions before they are asked; Six's loyalty makes Nine's presence feel chosen.",
        ),
        record(
            Four,
            Eight,
            "The Tempest Pair",
            "Two intensities, one weather system.",
            "Neither flinches at the other's storms; the art is making the thunder creative instead of mutual.",
        ),
        record(
            Three,
            Seven,
            "The Momentum Pair",
            "Velocity squared.",
            "Goals become adventures and adventures become goals; stillness is the one frontier they must cross together.",
        ),
        record(
            Five,
            Nine,
            "The Quiet Companions",
            "Space as a shared language.",
            "Each grants the other room without being asked; the bond grows in parallel until one remembers to reach across.",
        ),
        record(
            Seven,
            Nine,
            "Joy and Peace",
            "Lightness that asks nothing heavy of anyone.",
            "Seven sets the itinerary, Nine sets the mood; depth arrives only when they stop outrunning it together.",
        ),
    ]
}
