//! Curated long-form relationship stories.

use crate::types::{RelationshipStory, TypeNumber};

fn record(
    type1: TypeNumber,
    type2: TypeNumber,
    title: &str,
    narrative: &str,
    resolution: &str,
) -> RelationshipStory {
    RelationshipStory {
        type1,
        type2,
        title: title.to_string(),
        narrative: narrative.to_string(),
        resolution: resolution.to_string(),
    }
}

pub(crate) fn records() -> Vec<RelationshipStory> {
    use crate::types::TypeNumber::*;

    vec![
        record(
            One,
            Seven,
            "The Itinerary and the Detour",
            "They planned the trip together, which is to say One planned it and Seven agreed to everything while privately collecting detours. On day three the argument finally arrived: wasted hours against wasted wonder, the schedule against the sea cave that wasn't on it. Each said the word 'irresponsible' and meant entirely different things.",
            "They kept the schedule and the sea cave. One learned that the best hours of the trip were the unplanned ones; Seven learned that the trip only happened because someone booked the ferries. They still argue about it, fondly, which is how they tell the story of becoming a team.",
        ),
        record(
            Two,
            Eight,
            "The Armor and the Open Hand",
            "Two kept giving and Eight kept testing, pushing to find the angle, because in Eight's experience unguarded kindness always had one. The harder Eight pushed, the more Two gave, until the night Two finally said, exhausted, 'I don't want anything from you except you.' The silence afterward was the sound of armor deciding.",
            "Trust, once given, was total. Eight became the fiercest protector Two had ever had, and Two became the one place Eight never had to be strong. The testing never fully stopped; it just became a game both were in on.",
        ),
        record(
            Four,
            Five,
            "Two Rooms, One Door",
            "They fell in love through conversation, the kind that goes past midnight and past the edges of what either had said aloud before. Then daily life arrived: Four knocking on the door of Five's study with a feeling that couldn't wait, Five rationing contact like oxygen on a long climb. Four called it coldness; Five called it survival.",
            "The compromise was a door left ajar: set hours that belonged to the two of them, defended as fiercely as Five's solitude and honored as faithfully as Four's tides. Scarcity, it turned out, had been the enemy of neither depth nor love — only of timing.",
        ),
        record(
            Six,
            Nine,
            "The Sentry and the Meadow",
            "Six arrived with questions: what if the lease falls through, what if the job changes, what if this calm is the quiet before something. Nine answered none of them and somehow answered all of them, steady as ground. But steadiness unexamined became drift, and one spring Six realized they had not made a real decision together in a year.",
            "They learned to trade gifts deliberately: Nine would name a preference, out loud, once a day; Six would let one worry go unspoken, once a day. The harbor stayed calm, but now there were two hands on the tiller.",
        ),
        record(
            Three,
            Seven,
            "The Highlight Reel",
            "Everyone wanted to be them. The calendar was full, the photos were excellent, the stories at parties were better. It took a canceled flight and a dead phone for them to spend four unscheduled hours with nothing to do but talk, and in that terminal they met for what felt like the first time.",
            "They kept the speed but scheduled the stillness, one evening a week with nothing to achieve and nowhere to be. The highlight reel continued; it just stopped being the whole film.",
        ),
    ]
}
