//! Curated prose for the six dominance stacks.
//!
//! Keys are order-sensitive: "sp/so" and "so/sp" carry different prose.

use crate::types::{InstinctType, StackDescription};

fn record(
    dominant: InstinctType,
    secondary: InstinctType,
    description: &str,
) -> StackDescription {
    StackDescription {
        dominant,
        secondary,
        description: description.to_string(),
    }
}

pub(crate) fn records() -> Vec<StackDescription> {
    use crate::types::InstinctType::{SelfPreservation as Sp, Sexual as Sx, Social as So};

    vec![
        record(
            Sp,
            So,
            "Security first, belonging second: builds a stable base and then opens it to a chosen circle. Practical and loyal, but one-to-one intensity is the road not taken.",
        ),
        record(
            So,
            Sp,
            "Belonging first, security second: finds safety through position in the group and keeps the practical foundations quietly tended. Intimacy's full voltage stays at arm's length.",
        ),
        record(
            Sp,
            Sx,
            "Security first, intensity second: a private world of deep comfort shared with one person at a time. The wider community rarely gets an invitation.",
        ),
        record(
            Sx,
            Sp,
            "Intensity first, security second: pursues the charged bond and then builds a nest around it. The group and its causes remain background noise.",
        ),
        record(
            So,
            Sx,
            "Belonging first, intensity second: moves through communities making charged individual connections along the way. Material groundedness is the neglected instrument.",
        ),
        record(
            Sx,
            So,
            "Intensity first, belonging second: leads with magnetism and folds the beloved into a vivid social world. Practical self-care runs on fumes.",
        ),
    ]
}
