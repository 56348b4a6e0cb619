//! Archetypal tritype catalogue.
//!
//! Codes are head/heart/gut digit order. Only archetypal examples are
//! catalogued, not all 27 combinations.

use crate::types::{Tritype, TritypeCode, TypeNumber};

fn record(head: TypeNumber, heart: TypeNumber, gut: TypeNumber, name: &str, description: &str) -> Tritype {
    // Built-in codes are center-correct by construction.
    let code = TritypeCode::compose(head, heart, gut).expect("curated tritype code is center-valid");
    Tritype {
        code,
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub(crate) fn records() -> Vec<Tritype> {
    use crate::types::TypeNumber::*;

    vec![
        record(
            Five, Two, Nine,
            "The Gentle Scholar",
            "Observant, kind, and unhurried; understands deeply and offers that understanding quietly, preferring insight shared at low volume.",
        ),
        record(
            Five, Three, Eight,
            "The Solution Master",
            "Pragmatic, efficient, and direct; sees the fix, sells the fix, ships the fix, and has little patience for hand-wringing.",
        ),
        record(
            Five, Four, One,
            "The Philosopher",
            "Contemplative, principled, and original; lives by an inner aesthetic of truth and holds the world to it gently but firmly.",
        ),
        record(
            Six, Two, Nine,
            "The Good Neighbor",
            "Loyal, warm, and steady; the person who checks on everyone, keeps the group stitched together, and never wants the credit.",
        ),
        record(
            Six, Three, One,
            "The Taskmaster",
            "Dutiful, organized, and exacting; turns anxiety into checklists and checklists into institutions.",
        ),
        record(
            Six, Three, Eight,
            "The Justice Fighter",
            "Protective, outspoken, and tireless; scans for what could go wrong and confronts whoever is making it go wrong.",
        ),
        record(
            Seven, Two, Nine,
            "The Free Spirit",
            "Buoyant, affectionate, and easygoing; keeps every door open and every room warmer for having passed through it.",
        ),
        record(
            Seven, Three, One,
            "The Catalyst",
            "Visionary, polished, and improving; spots the possibility, rallies the room, and leaves a plan behind.",
        ),
        record(
            Seven, Four, Eight,
            "The Maverick",
            "Intense, creative, and unbossable; chases original experience at full speed and defends its right to exist.",
        ),
    ]
}
