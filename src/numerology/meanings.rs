//! Interpretation texts for reduced numbers.

use serde::Serialize;

/// Texts for one number, one per calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub life: &'static str,
    pub destiny: &'static str,
    pub personality: &'static str,
}

/// Number used when a reduced value has no entry of its own.
pub const FALLBACK_NUMBER: u32 = 9;

static MEANINGS: [(u32, NumberMeaning); 11] = [
    (1, NumberMeaning {
        life: "Leader and pioneer. You were born to lead others, create the new and stand on your own.",
        destiny: "Your destiny is to set change in motion and grow in willpower and self-confidence.",
        personality: "You come across as a strong, independent and charismatic person.",
    }),
    (2, NumberMeaning {
        life: "Peacemaker and diplomat. Your path is to build harmony, cooperate and help others.",
        destiny: "Your calling is to be a mediator and to develop intuition and sensitivity.",
        personality: "Others see you as perceptive, attentive and friendly.",
    }),
    (3, NumberMeaning {
        life: "Creator and communicator. You are made for self-expression, creativity and inspiring others.",
        destiny: "Your mission is to bring joy, develop your talents and share optimism.",
        personality: "You come across as bright, artistic and sociable.",
    }),
    (4, NumberMeaning {
        life: "Builder and organizer. Your path is to create stability, order and solid foundations.",
        destiny: "Your calling is to be practical and hardworking and to build material security.",
        personality: "People see you as reliable, responsible and determined.",
    }),
    (5, NumberMeaning {
        life: "Seeker of adventure and freedom. You were born for change, travel and new experiences.",
        destiny: "Your destiny is to explore the world, stay flexible and adapt to change.",
        personality: "You come across as dynamic, freedom-loving and curious.",
    }),
    (6, NumberMeaning {
        life: "Healer and nurturer. Your path is to care for others and create comfort and harmony.",
        destiny: "Your mission is to take responsibility for those close to you and to serve and help people.",
        personality: "Others see you as caring, loving and responsible.",
    }),
    (7, NumberMeaning {
        life: "Seeker of truth and sage. You are made for spiritual growth, analysis and uncovering mysteries.",
        destiny: "Your calling is to develop intellect and intuition and to look for deeper meaning.",
        personality: "You come across as wise, mysterious and thoughtful.",
    }),
    (8, NumberMeaning {
        life: "Magnate and manager. Your path is to reach material success and influence.",
        destiny: "Your destiny is to manage resources and to be ambitious and influential.",
        personality: "People see you as a strong, successful and authoritative leader.",
    }),
    (9, NumberMeaning {
        life: "Humanitarian and teacher. You were born to serve humanity and bring light into the world.",
        destiny: "Your mission is to be generous, help others and bring cycles to completion.",
        personality: "You come across as wise, compassionate and idealistic.",
    }),
    (11, NumberMeaning {
        life: "Spiritual teacher and inspirer. You are a conduit for higher ideas and light.",
        destiny: "Your calling is to inspire others and develop intuition and spirituality.",
        personality: "Others see you as a charismatic visionary and mystic.",
    }),
    (22, NumberMeaning {
        life: "Master builder. You are able to turn great dreams into reality.",
        destiny: "Your destiny is to create large-scale projects and change the world for the better.",
        personality: "You come across as a powerful creator with enormous potential.",
    }),
];

/// Numbers with their own entry, in table order.
pub fn known_numbers() -> impl Iterator<Item = u32> {
    MEANINGS.iter().map(|(n, _)| *n)
}

/// Does `n` have its own entry?
#[must_use]
pub fn has_meaning(n: u32) -> bool {
    MEANINGS.iter().any(|(k, _)| *k == n)
}

/// Entry for `n`, or the entry for 9 when `n` has none.
#[must_use]
pub fn lookup_meaning(n: u32) -> &'static NumberMeaning {
    find(n).unwrap_or_else(fallback)
}

fn find(n: u32) -> Option<&'static NumberMeaning> {
    MEANINGS.iter().find(|(k, _)| *k == n).map(|(_, m)| m)
}

fn fallback() -> &'static NumberMeaning {
    tracing::debug!(number = FALLBACK_NUMBER, "using fallback meaning");
    find(FALLBACK_NUMBER).expect("fallback number missing from meaning table")
}
