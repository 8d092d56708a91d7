//! Major life event detection and contradiction damping.
//!
//! Event trigger phrases carry large fixed weights (±3/±4) into a mood
//! base value that is kept apart from ordinary lexicon averaging, so a
//! single "passed away" outweighs a handful of mildly positive words.
//!
//! Contradiction detection is a fixed list of regular expressions
//! recognizing explicit downplaying ("but ... didn't feel bad"). It is a
//! heuristic over literal patterns, not negation-scope resolution; the
//! pattern list below is the whole contract.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::lexicon::Lexicon;

/// Factor applied to a negative mood base when a contradiction pattern
/// matches (magnitude reduced by 60%).
pub const CONTRADICTION_DAMPING: f64 = 0.4;

/// High-weight life event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Loss,
    Breakup,
    JobLoss,
    Crisis,
    Achievement,
    Milestone,
}

impl EventCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Loss => "loss",
            EventCategory::Breakup => "breakup",
            EventCategory::JobLoss => "job_loss",
            EventCategory::Crisis => "crisis",
            EventCategory::Achievement => "achievement",
            EventCategory::Milestone => "milestone",
        }
    }
}

/// Trigger phrases and fixed mood weight for one event category.
#[derive(Debug, Clone, Copy)]
pub struct EventRule {
    pub category: EventCategory,
    pub weight: f64,
    pub triggers: &'static [&'static str],
}

pub(super) const EVENT_RULES: &[EventRule] = &[
    EventRule {
        category: EventCategory::Loss,
        weight: -4.0,
        triggers: &[
            "passed away",
            // Bare "died" would also match inside "studied"
            "my dog died",
            "my cat died",
            "my mother died",
            "my father died",
            "death in the family",
            "funeral",
            "lost my dog",
            "lost my cat",
            "lost my pet",
            "lost my mom",
            "lost my dad",
            "lost my mother",
            "lost my father",
            "lost my friend",
            "grieving",
            "in mourning",
        ],
    },
    EventRule {
        category: EventCategory::Breakup,
        weight: -3.0,
        triggers: &[
            "broke up",
            "breakup",
            "break up with",
            "got divorced",
            "filed for divorce",
            "dumped me",
            "ended our relationship",
        ],
    },
    EventRule {
        category: EventCategory::JobLoss,
        weight: -3.0,
        triggers: &[
            "got fired",
            "was fired",
            "laid off",
            "lost my job",
            "made redundant",
            "let go from",
        ],
    },
    EventRule {
        category: EventCategory::Crisis,
        weight: -4.0,
        triggers: &[
            "car accident",
            "in an accident",
            "emergency room",
            "heart attack",
            "diagnosed with",
            "robbed",
            "burgled",
            "evicted",
            "went bankrupt",
        ],
    },
    EventRule {
        category: EventCategory::Achievement,
        weight: 3.0,
        triggers: &[
            "got promoted",
            "got the job",
            "landed the job",
            "passed my exam",
            "passed the exam",
            "graduated",
            "got accepted",
            "won the",
        ],
    },
    EventRule {
        category: EventCategory::Milestone,
        weight: 4.0,
        triggers: &[
            "got engaged",
            "got married",
            "had a baby",
            "gave birth",
            "we're expecting",
            "bought a house",
        ],
    },
];

lazy_static! {
    /// The fixed contradiction shapes. Matching is over the lowercased
    /// whole text, bounded to one sentence by the `[^.!?]*` gap.
    static ref CONTRADICTION_PATTERNS: Vec<Regex> = [
        r"but\b[^.!?]*\b(?:didn't|did not|don't|do not)\s+feel\s+(?:bad|sad|terrible|awful|anything)",
        r"but\b[^.!?]*\b(?:i'm|i am|it's|it is|i was)\s+(?:ok|okay|fine|alright|good)",
        r"but\b[^.!?]*\b(?:not|no longer)\s+(?:sad|upset|bothered|worried)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("contradiction pattern is valid"))
    .collect();
}

/// Scan the lowered text for event triggers and sum their weights.
///
/// Every matching category contributes once; a text with both a loss and
/// a breakup stacks to −7 before damping and clamping.
pub fn mood_base(lexicon: &Lexicon, lowered: &str) -> f64 {
    let mut base = 0.0;
    for rule in lexicon.events() {
        if rule.triggers.iter().any(|trigger| lowered.contains(trigger)) {
            debug!(
                category = rule.category.as_str(),
                weight = rule.weight,
                "life event detected"
            );
            base += rule.weight;
        }
    }
    base
}

/// True when any fixed contradiction pattern matches.
pub fn has_contradiction(lowered: &str) -> bool {
    CONTRADICTION_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(lowered))
}

/// Apply contradiction damping to a negative event base.
///
/// Positive bases are left untouched; the author downplaying a good event
/// is not a pattern the tables recognize.
pub fn damped_mood_base(lexicon: &Lexicon, lowered: &str) -> f64 {
    let base = mood_base(lexicon, lowered);
    if base < 0.0 && has_contradiction(lowered) {
        debug!(base, "contradiction detected, damping mood base");
        base * CONTRADICTION_DAMPING
    } else {
        base
    }
}
