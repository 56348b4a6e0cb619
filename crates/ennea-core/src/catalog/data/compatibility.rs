//! Curated compatibility records.
//!
//! Only these pairs are hand-scored; every other pair falls back to the
//! heuristic. Curated data always wins over the heuristic.

use super::svec;
use crate::types::{CompatibilityRecord, TypeNumber};

fn record(
    type1: TypeNumber,
    type2: TypeNumber,
    overall_score: u8,
    strengths: &[&str],
    challenges: &[&str],
    growth_opportunities: &[&str],
    communication_tips: &[&str],
) -> CompatibilityRecord {
    CompatibilityRecord {
        type1,
        type2,
        overall_score,
        strengths: svec(strengths),
        challenges: svec(challenges),
        growth_opportunities: svec(growth_opportunities),
        communication_tips: svec(communication_tips),
    }
}

pub(crate) fn records() -> Vec<CompatibilityRecord> {
    use crate::types::TypeNumber::*;

    vec![
        record(
            One,
            Seven,
            8,
            &[
                "Seven's spontaneity loosens One's self-discipline into genuine play",
                "One gives Seven's scattered enthusiasm a container that actually holds",
                "Both share an underlying idealism about how good life could be",
            ],
            &[
                "One can hear Seven's reframing as evasion of responsibility",
                "Seven can experience One's standards as a ceiling on joy",
                "Disputes over commitments versus keeping options open",
            ],
            &[
                "One learns that pleasure is not the enemy of integrity",
                "Seven learns that follow-through deepens rather than traps",
            ],
            &[
                "Name resentments early instead of letting One's criticism simmer",
                "Agree on a few non-negotiable commitments and keep the rest light",
            ],
        ),
        record(
            Two,
            Eight,
            9,
            &[
                "Eight's directness cuts through Two's indirect bids for appreciation",
                "Two softens Eight's armor without asking Eight to be smaller",
                "Fierce mutual loyalty once trust is established",
            ],
            &[
                "Control struggles when Two's helping reads as steering",
                "Eight's bluntness can wound Two's sensitivity to rejection",
            ],
            &[
                "Two practices asking directly for what they need",
                "Eight practices letting tenderness show without losing strength",
            ],
            &[
                "Keep conflicts short and explicit; neither does well with simmering",
                "Acknowledge care out loud — both give more than they admit needing",
            ],
        ),
        record(
            Four,
            Five,
            8,
            &[
                "Shared comfort with depth, intensity, and the unconventional",
                "Five's steadiness holds Four's emotional weather without judgment",
                "Four draws Five out of pure analysis into felt experience",
            ],
            &[
                "Four's need for emotional engagement meets Five's need for withdrawal",
                "Both can retreat into inner worlds and let the connection starve",
            ],
            &[
                "Four learns to let space be a form of intimacy",
                "Five learns to share findings before they feel finished",
            ],
            &[
                "Schedule connection rather than waiting for simultaneous readiness",
                "Treat withdrawal as a need, not a verdict on the relationship",
            ],
        ),
        record(
            One,
            One,
            6,
            &[
                "Deep mutual respect for integrity and effort",
                "A shared vocabulary of standards — little needs explaining",
            ],
            &[
                "Two inner critics can merge into one relentless external one",
                "Competing convictions about the single right way",
            ],
            &[
                "Practicing being wrong together, out loud, on purpose",
            ],
            &[
                "Trade the word 'should' for 'prefer' in household disputes",
            ],
        ),
        record(
            Nine,
            Nine,
            7,
            &[
                "Effortless peace and low-friction daily rhythm",
                "Neither partner crowds the other's inner life",
            ],
            &[
                "Conflict avoidance squared — problems compound quietly",
                "Both can lose themselves in the merged comfort of the pair",
            ],
            &[
                "Learning that rupture, named early, is cheaper than drift",
            ],
            &[
                "Set a recurring time to surface the unsaid; neither will volunteer it",
            ],
        ),
        record(
            Two,
            Three,
            7,
            &[
                "A warm, socially fluent pair that reads rooms together",
                "Two keeps Three connected to people, not just goals",
            ],
            &[
                "Both curate an image and can lose track of what is real between them",
                "Two's unspoken ledger of giving meets Three's busy agenda",
            ],
            &[
                "Trading performance for presence in private",
            ],
            &[
                "Ask 'how are you, actually?' and wait for the second answer",
            ],
        ),
        record(
            Six,
            Nine,
            8,
            &[
                "Nine's calm is a standing answer to Six's scanning for threat",
                "Six's loyalty gives Nine a safety that invites showing up",
            ],
            &[
                "Six's worst-casing can read as pressure to an overwhelmed Nine",
                "Nine's vagueness can feed Six's doubt",
            ],
            &[
                "Six learns to borrow Nine's trust in how things unfold",
                "Nine learns that taking a position is a gift to Six",
            ],
            &[
                "Make reassurance explicit and concrete, not assumed",
            ],
        ),
        record(
            Four,
            Eight,
            8,
            &[
                "Neither is frightened by the other's intensity",
                "Eight's protection gives Four room to be fully expressive",
                "Four gives Eight permission for the vulnerability Eight hides",
            ],
            &[
                "Storms when Eight's bluntness collides with Four's sensitivity",
                "Both escalate; neither naturally de-escalates",
            ],
            &[
                "Channeling the shared intensity into creation instead of combat",
            ],
            &[
                "Agree on a pause signal both will honor mid-conflict",
            ],
        ),
        record(
            Three,
            Seven,
            7,
            &[
                "High-energy momentum — plans become trips, trips become stories",
                "Mutual optimism and social ease",
            ],
            &[
                "Two forward gears and no reverse: feelings get outrun",
                "Competing for the spotlight",
            ],
            &[
                "Letting the relationship itself be the achievement",
            ],
            &[
                "Build in slow evenings with nothing to optimize or escape",
            ],
        ),
        record(
            Five,
            Nine,
            7,
            &[
                "Both value calm, autonomy, and an unhurried pace",
                "Low-demand companionship that neither finds draining",
            ],
            &[
                "Mutual withdrawal can become a quiet parallel life",
                "Neither initiates hard conversations",
            ],
            &[
                "Practicing small, regular disclosures before they feel urgent",
            ],
            &[
                "Put words to appreciation; silence reads differently to each",
            ],
        ),
        record(
            One,
            Two,
            7,
            &[
                "A service-minded pair that improves whatever it touches",
                "Two warms One's formality; One steadies Two's tides",
            ],
            &[
                "One's criticism lands hard on Two's need to be appreciated",
                "Two's helping can read to One as interference with the right way",
            ],
            &[
                "Separating worth from usefulness, for both",
            ],
            &[
                "Thank before correcting; the order matters",
            ],
        ),
        record(
            Seven,
            Nine,
            8,
            &[
                "Easy, affectionate flow — Seven animates, Nine harmonizes",
                "Shared dislike of heaviness keeps the tone light",
            ],
            &[
                "Pain gets reframed (Seven) or diffused (Nine) instead of met",
                "Nine can disappear inside Seven's itinerary",
            ],
            &[
                "Staying with discomfort long enough for it to finish its sentence",
            ],
            &[
                "Check that Nine's yes is a yes, not a merger",
            ],
        ),
    ]
}
