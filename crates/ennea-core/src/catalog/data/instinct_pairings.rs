//! Pairing dynamics for every unordered pair of instincts.
//!
//! All six unordered pairs are curated, same-instinct pairs included.

use super::svec;
use crate::types::{InstinctPairingDynamic, InstinctType, PairingCompatibility};

fn record(
    instinct1: InstinctType,
    instinct2: InstinctType,
    compatibility: PairingCompatibility,
    description: &str,
    strengths: &[&str],
    challenges: &[&str],
    tips: &[&str],
) -> InstinctPairingDynamic {
    InstinctPairingDynamic {
        instinct1,
        instinct2,
        compatibility,
        description: description.to_string(),
        strengths: svec(strengths),
        challenges: svec(challenges),
        tips: svec(tips),
    }
}

pub(crate) fn records() -> Vec<InstinctPairingDynamic> {
    use crate::types::InstinctType::{SelfPreservation as Sp, Sexual as Sx, Social as So};
    use crate::types::PairingCompatibility::{High, Low, Medium};

    vec![
        record(
            Sp,
            Sp,
            High,
            "Two self-preservation dominants build a fortress of shared routines, resources, and physical comfort; home is the relationship.",
            &[
                "Instinctive agreement on money, food, rest, and security",
                "A calm, well-tended domestic life",
            ],
            &[
                "The shared blind spot doubles: intensity and community both atrophy",
                "Cozy can calcify into closed",
            ],
            &[
                "Book the dinner party and the adventure before you feel ready for either",
            ],
        ),
        record(
            So,
            So,
            High,
            "Two social dominants share a wide world of people, causes, and belonging; the relationship breathes through its community.",
            &[
                "Effortless coordination of friendships, family, and shared purpose",
                "Each understands the other's need to be woven into something larger",
            ],
            &[
                "The couple itself can become the least attended room in the house",
                "Status currents in the group can run between the partners",
            ],
            &[
                "Protect time where the audience is zero and the agenda is each other",
            ],
        ),
        record(
            Sx,
            Sx,
            High,
            "Two sexual dominants meet at full voltage; the bond runs on intensity, chemistry, and undivided attention.",
            &[
                "Depth and magnetism most pairs only visit",
                "Neither is frightened by the other's appetite for closeness",
            ],
            &[
                "The flame consumes the practical: bills, rest, and friends go untended",
                "When intensity dips, both may read it as the end",
            ],
            &[
                "Let the fire have a hearth: tend logistics and outside ties on purpose",
            ],
        ),
        record(
            Sp,
            So,
            Medium,
            "One partner tends the hearth while the other tends the network; together they cover ground neither sees alone.",
            &[
                "Complementary coverage of home and world",
                "Each widens the other's definition of safety",
            ],
            &[
                "Arguments over how many people belong in the living room",
                "Sp reads So's socializing as scatter; So reads Sp's nesting as hiding",
            ],
            &[
                "Alternate hosting and hibernating, and call both of them love",
            ],
        ),
        record(
            Sp,
            Sx,
            Low,
            "The steadiest instinct pairs with the stormiest; groundedness and intensity must negotiate their very different speeds.",
            &[
                "Sp gives the bond a floor; Sx gives it weather",
                "Each holds exactly what the other's blind spot is missing",
            ],
            &[
                "Sx experiences Sp's moderation as withholding",
                "Sp experiences Sx's urgency as destabilizing",
            ],
            &[
                "Trade explicitly: scheduled intensity, honored recovery",
            ],
        ),
        record(
            So,
            Sx,
            Medium,
            "Breadth meets depth: one instinct reaches toward the many, the other toward the one, and the bond lives in the tension.",
            &[
                "A life that is both wide and deep when the balance holds",
                "So brings perspective to Sx's tunnel; Sx brings focus to So's sprawl",
            ],
            &[
                "Jealousy around attention given to the group versus the partner",
                "Sx can feel chosen last; So can feel engulfed",
            ],
            &[
                "Ring-fence one-to-one time before filling the social calendar",
            ],
        ),
    ]
}
