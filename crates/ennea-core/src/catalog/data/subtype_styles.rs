//! Behavioral profiles for all 27 (type, instinct) combinations.

use super::svec;
use crate::types::{InstinctType, TypeNumber, TypeSubtypeStyle};

fn style(
    type_number: TypeNumber,
    instinct: InstinctType,
    relationship_style: &str,
    needs: &[&str],
    gives: &[&str],
    blind_spots: &[&str],
    ideal: &[&str],
) -> TypeSubtypeStyle {
    TypeSubtypeStyle {
        type_number,
        instinct,
        relationship_style: relationship_style.to_string(),
        needs_in_relationship: svec(needs),
        gives_in_relationship: svec(gives),
        blind_spots: svec(blind_spots),
        ideal_partner_qualities: svec(ideal),
    }
}

pub(crate) fn records() -> Vec<TypeSubtypeStyle> {
    use crate::types::InstinctType::{SelfPreservation as Sp, Sexual as Sx, Social as So};
    use crate::types::TypeNumber::*;

    vec![
        // ---- Type One ----
        style(
            One, Sp,
            "Shows love by keeping the shared world in working order; worry about security comes out as perfectionism about the household.",
            &["Appreciation for unglamorous maintenance work", "Shared standards for daily life", "Reassurance that rest is permitted"],
            &["Reliability in every practical matter", "A partner who follows through", "Order that makes life feel safe"],
            &["Fretting reads as criticism of the partner's ease", "Cannot relax until everything is done, and it never is"],
            &["Warmth that softens self-judgment", "Someone who makes imperfection feel survivable"],
        ),
        style(
            One, So,
            "Brings conviction to the couple's place in the world; the relationship should stand for something done right.",
            &["A partner who shares core principles", "Respect in front of others", "Engagement with causes that matter"],
            &["Integrity the partner can lean on", "Advocacy for the relationship in public", "A moral compass that does not wobble"],
            &["Rightness can matter more than closeness", "The lecture arrives before the listening"],
            &["Principled but playful company", "Someone who argues fair and lets go"],
        ),
        style(
            One, Sx,
            "Reforming zeal turns toward the beloved; intensity shows up as the drive to perfect the bond itself.",
            &["Depth of commitment matched in kind", "Permission to voice dissatisfaction safely", "Passion that coexists with principle"],
            &["Fierce devotion and loyalty", "Honest mirrors, lovingly held", "Continuous investment in the us"],
            &["Improvement pressure lands on the partner", "Jealousy dressed up as standards"],
            &["Security in the face of critique", "Intensity without chaos"],
        ),

        // ---- Type Two ----
        style(
            Two, Sp,
            "Cares through tangible tending: meals, comfort, remembered preferences; being needed at home is being loved.",
            &["Being cared for without having to ask", "Gratitude for the invisible labor", "A cozy shared nest"],
            &["Attentive nurture of body and home", "Warmth that makes a house a refuge", "Memory for every small preference"],
            &["Gives to exhaustion and bills it later as hurt", "Own needs surface only as resentment"],
            &["Someone who notices and reciprocates", "A partner who insists on caring back"],
        ),
        style(
            Two, So,
            "Loves by weaving the partner into a rich web of friends and family; generosity is public and organizational.",
            &["Recognition as the relationship's heart", "A partner proud to be claimed", "Shared social life"],
            &["Connection to community", "Social grace that opens doors", "Celebrations no one else would plan"],
            &["Popularity becomes a proxy for being loved", "The couple's privacy gets donated to the group"],
            &["Appreciation expressed in front of others", "Someone who guards couple time"],
        ),
        style(
            Two, Sx,
            "Pours everything into the one person; seduction of the beloved's attention is the native language of care.",
            &["Being the most important person, unambiguously", "Intense one-to-one attention", "Desire expressed openly"],
            &["Total emotional availability", "Devotion that makes the partner feel chosen", "Affection without rationing"],
            &["Possessiveness wears a generous mask", "Boundaries of the partner read as rejection"],
            &["Steadiness that never makes love a contest", "Clear, frequent declarations"],
        ),

        // ---- Type Three ----
        style(
            Three, Sp,
            "Builds material proof of being a worthy partner: the house, the savings, the plan; providing is the love language.",
            &["Respect for hard work", "A partner who shares ambitions for stability", "Space to decompress from performing"],
            &["Security built by relentless effort", "Competence in every practical crisis", "A future that keeps arriving on schedule"],
            &["Work absorbs the hours love needed", "Being cared for feels like failing"],
            &["Someone who values presence over productivity", "Warmth that survives an empty trophy shelf"],
        ),
        style(
            Three, So,
            "Curates an admirable couple; charm and achievement are offered to the partner as shared social capital.",
            &["A partner who shines and lets shine", "Pride expressed publicly", "A team identity worth admiring"],
            &["Status and polish the pair can spend", "Motivation that lifts the partner's goals", "Flawless public partnership"],
            &["The image of the couple replaces the couple", "Vulnerability feels off-brand"],
            &["Love that lands when the performance stops", "Someone unimpressed in the best way"],
        ),
        style(
            Three, Sx,
            "Becomes the ideal partner for this specific person; attractiveness and attunement are achievements aimed at one heart.",
            &["Being desired, visibly and often", "A partner worth winning", "Feedback that the effort lands"],
            &["Magnetic, tailored attention", "The feeling of being with the best", "Support that makes the partner magnetic too"],
            &["Shape-shifts to match desire and loses the original shape", "Rejection triggers reinvention instead of reflection"],
            &["Affection for the person under the polish", "Consistency that outlasts the chase"],
        ),

        // ---- Type Four ----
        style(
            Four, Sp,
            "Suffers beautifully in silence; endurance and sensory depth replace dramatic expression, and love is a carefully tended private world.",
            &["Patience with long interior weather", "Comfort offered without being summoned", "Beauty in the shared environment"],
            &["Quiet, durable emotional depth", "A home with soul", "Loyalty through dark seasons"],
            &["Stoicism hides the need until it bursts", "Deprivation becomes an identity"],
            &["Gentle persistence past the first no", "Someone who notices the unspoken"],
        ),
        style(
            Four, So,
            "Feels the distance between self and every group, including the couple; longs to be recognized as singular and truly seen.",
            &["Being understood as unlike anyone else", "A partner who defends their difference", "Emotional honesty about shame"],
            &["Authenticity that deepens every exchange", "Empathy for the partner's hidden griefs", "An eye for meaning others miss"],
            &["Comparison poisons contentment", "Belonging is refused before it can be denied"],
            &["Steady inclusion without smothering", "Someone who celebrates the strangeness"],
        ),
        style(
            Four, Sx,
            "Loves at full saturation; longing, rivalry, and passion braid together, and mild affection feels like an insult.",
            &["Intensity that matches their own", "Engagement with conflict, not flight from it", "Proof of being irreplaceable"],
            &["Passion without a dimmer switch", "Courage for the deepest conversations", "Aliveness that banishes the mundane"],
            &["Provokes storms to feel the connection", "Envy of the partner's other loves"],
            &["A spine that does not flinch", "Tenderness after the thunder"],
        ),

        // ---- Type Five ----
        style(
            Five, Sp,
            "Guards time, energy, and space as survival resources; intimacy grows slowly inside well-marked boundaries.",
            &["Unambiguous respect for solitude", "Low-demand companionship", "Predictable shared routines"],
            &["Calm that never crowds", "Self-sufficiency that asks little", "Depth once the walls agree to open"],
            &["Withholding reads as indifference", "The castle gets comfortable without visitors"],
            &["Patience measured in seasons", "Someone whose presence costs nothing"],
        ),
        style(
            Five, So,
            "Connects through shared ideas and chosen intellectual tribes; the partner is first among trusted interlocutors.",
            &["Conversation that goes somewhere", "Respect for expertise", "A social life of substance over noise"],
            &["A mind fully shared", "Loyalty to the inner circle", "Knowledge placed at the couple's service"],
            &["Feelings get translated into positions", "Belonging stays conceptual"],
            &["Warmth that survives debate", "Someone who asks about the heart behind the theory"],
        ),
        style(
            Five, Sx,
            "Keeps one secret chamber open for one person; confidence shared in the dark is the ultimate intimacy.",
            &["A single trusted confidant bond", "Privacy about what is shared", "Intensity on their own timetable"],
            &["Radical candor reserved for one", "A vivid inner world, finally unlocked", "Unwavering focus on the beloved"],
            &["All-or-nothing intimacy with no middle gear", "The chamber closes at the first betrayal, forever"],
            &["Discretion that honors the trust", "Someone worth the only key"],
        ),

        // ---- Type Six ----
        style(
            Six, Sp,
            "Builds safety through warmth and alliance; feeds the people it trusts and keeps the pantry, literal and emotional, stocked.",
            &["Dependability proven over time", "Reassurance during doubt spirals", "A partner who keeps promises small and large"],
            &["Steadfast, practical devotion", "Preparedness for every contingency", "A warm hearth defended well"],
            &["Worry leaks onto the partner as hovering", "Testing loyalty instead of trusting it"],
            &["Consistency without drama", "Someone whose word holds"],
        ),
        style(
            Six, So,
            "Finds courage in shared codes and communities; duty to the relationship is duty to something larger than either partner.",
            &["Clear commitments and known rules", "A partner who honors obligations", "Community the couple can trust"],
            &["Responsibility shouldered without complaint", "Loyalty to the group that holds the couple", "Order that calms the unknown"],
            &["The rulebook replaces the gut", "Authority is obeyed or fought, never ignored"],
            &["Warm irreverence that loosens the rules", "Someone brave on their behalf"],
        ),
        style(
            Six, Sx,
            "Answers fear by becoming formidable; intensity and contrarian courage protect a heart that doubts it can be protected.",
            &["A partner who is not intimidated", "Strength that can be leaned on", "Honesty even when it costs"],
            &["Fierce protection of the bond", "Courage summoned exactly when needed", "Passion with a bodyguard's vigilance"],
            &["Charges at doubts instead of naming them", "Mistakes strength for safety"],
            &["Calm that disarms the alarm", "Someone who stays through the testing"],
        ),

        // ---- Type Seven ----
        style(
            Seven, Sp,
            "Assembles a merry inner circle and a life of comfortable plenty; keeps options and cupboards equally well stocked.",
            &["A partner in good living", "Freedom from scarcity and gloom", "Co-conspirators for the next plan"],
            &["Abundance made contagious", "Practical cleverness that lands on its feet", "A household that celebrates"],
            &["Discomfort is catered away, not faced", "Commitment feels like a closing door"],
            &["Groundedness that is not grim", "Someone who makes staying feel like an adventure"],
        ),
        style(
            Seven, So,
            "Spends its enthusiasm on the group's dreams; idealism and sacrifice hide under the brightness.",
            &["Shared vision of a better world", "A partner who joins the mission", "Acceptance of their many commitments"],
            &["Generous energy for shared causes", "Optimism that recruits", "A network of delighted friends"],
            &["Spread so wide the partner gets the leftovers", "Own pain is postponed for the cause"],
            &["Someone who calls them home", "Depth that rewards slowing down"],
        ),
        style(
            Seven, Sx,
            "Falls for possibility embodied in a person; sees the partner's highest timeline and charges toward it.",
            &["Fascination that keeps renewing", "A co-dreamer with courage", "Novelty inside the known"],
            &["Idealizing attention that electrifies", "Adventures no one else would dare", "Faith in the partner's becoming"],
            &["The real person competes with the imagined one", "Boredom is treated as an emergency"],
            &["Substance that keeps surprising", "Someone real enough to outshine the dream"],
        ),

        // ---- Type Eight ----
        style(
            Eight, Sp,
            "Provides, period; territory, resources, and the people inside the walls are non-negotiable responsibilities.",
            &["Respect for their authority at home", "Directness without manipulation", "A partner who can hold their own"],
            &["Material protection without being asked", "Decisive action in any crisis", "A wall between the family and the world"],
            &["Control of resources becomes control of people", "Tenderness is rationed like a strategic asset"],
            &["Strength that doesn't need to win", "Someone unafraid and unimpressed"],
        ),
        style(
            Eight, So,
            "Leads the tribe and carries its weak; power is justified by protection, and the partner co-governs.",
            &["Loyalty to the shared banner", "A partner who backs them in public", "Truth told to their face"],
            &["Protection extended to everyone the partner loves", "Leadership that others rally to", "Justice enforced personally"],
            &["The cause can eclipse the marriage", "Softness is shown to the group, not the partner"],
            &["Courage to contradict them privately", "Warmth that melts the general"],
        ),
        style(
            Eight, Sx,
            "Possesses and surrenders with equal totality; intensity is the proof of life and the partner is claimed, fully.",
            &["All of the partner, held nothing back", "Passion that meets their voltage", "Surrender matched by surrender"],
            &["Ferocious, undivided devotion", "Energy that makes the world vivid", "Protection with no fine print"],
            &["Claiming tips into owning", "Vulnerability arrives only as intensity"],
            &["An equal who cannot be swallowed", "Tenderness received without flinching"],
        ),

        // ---- Type Nine ----
        style(
            Nine, Sp,
            "Merges with the comfortable rhythms of shared life; presence is steady, appetite for conflict is zero.",
            &["Peaceful routines left unrattled", "Gentle invitations rather than demands", "Comfort enjoyed together"],
            &["Unflappable, soothing company", "Acceptance of the partner as-is", "A home without landmines"],
            &["Napping through problems that needed waking", "Preferences dissolve into the partner's"],
            &["Patience that still asks questions", "Someone who draws out their wants"],
        ),
        style(
            Nine, So,
            "Blends into the group's hum and keeps every relationship friction-free; belongs everywhere by insisting on nothing.",
            &["Inclusion without pressure to perform", "A partner who notices their quiet work", "Harmony in the wider circle"],
            &["Mediation that keeps the peace for everyone", "Easy warmth with all factions", "Support with no strings visible"],
            &["Own agenda is the one never on the table", "Activity substitutes for presence"],
            &["Curiosity about their real opinion", "Someone who makes space and holds it open"],
        ),
        style(
            Nine, Sx,
            "Merges with the beloved and lives through the union; the boundary between us is lovingly misplaced.",
            &["Union that feels complete", "A partner gentle with their tenderness", "Closeness without conquest"],
            &["Total accompaniment in the partner's world", "Sweetness without an angle", "Peace that deepens intimacy"],
            &["Self dissolves into the beloved's outline", "Anger goes underground and stays there"],
            &["Encouragement to exist separately", "Someone who loves the self they forgot"],
        ),
    ]
}
