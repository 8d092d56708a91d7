//! Static sentiment tables: word lexicon, phrase rules, negations, intensifiers.
//!
//! All tables are immutable data built once at startup and shared by
//! reference. A word may carry scores under several dimensions at once
//! (e.g. "tired" counts against both energy and sleep); that double
//! counting is intentional.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::events::EventRule;
use super::events::EVENT_RULES;

/// One scored axis of a journal entry's emotional/life state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Mood,
    Social,
    Work,
    Energy,
    Health,
    Sleep,
    Stress,
}

impl Dimension {
    pub const COUNT: usize = 7;

    pub const ALL: [Dimension; Dimension::COUNT] = [
        Dimension::Mood,
        Dimension::Social,
        Dimension::Work,
        Dimension::Energy,
        Dimension::Health,
        Dimension::Sleep,
        Dimension::Stress,
    ];

    /// Stable position of this dimension in score arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Mood => "mood",
            Dimension::Social => "social",
            Dimension::Work => "work",
            Dimension::Energy => "energy",
            Dimension::Health => "health",
            Dimension::Sleep => "sleep",
            Dimension::Stress => "stress",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment bucket a word belongs to under a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SentimentTier {
    VeryPositive,
    Positive,
    Negative,
    VeryNegative,
}

impl SentimentTier {
    /// Fixed integer score of the tier.
    pub fn score(self) -> i8 {
        match self {
            SentimentTier::VeryPositive => 2,
            SentimentTier::Positive => 1,
            SentimentTier::Negative => -1,
            SentimentTier::VeryNegative => -2,
        }
    }
}

/// A fixed multi-word phrase with its own per-dimension score deltas.
///
/// Phrases are matched by substring containment over the lowercased whole
/// text, independent of token boundaries. Every matching phrase applies;
/// there is no first-match-wins dispatch.
#[derive(Debug, Clone, Copy)]
pub struct PhraseRule {
    pub phrase: &'static str,
    pub deltas: &'static [(Dimension, i8)],
}

// ============================================
// Word lexicon
// ============================================

const MOOD_VERY_POSITIVE: &[&str] = &[
    "amazing",
    "excellent",
    "fantastic",
    "wonderful",
    "incredible",
    "ecstatic",
    "thrilled",
    "overjoyed",
    "delighted",
    "euphoric",
    "blessed",
    "grateful",
    "phenomenal",
    "spectacular",
    "magnificent",
    "awesome",
    "brilliant",
    "fabulous",
    "marvelous",
    "superb",
    "extraordinary",
    "outstanding",
    "exceptional",
    "glorious",
    "elated",
    "jubilant",
    "exhilarated",
    "radiant",
    "blissful",
    "joyful",
    "uplifted",
    "triumphant",
];

const MOOD_POSITIVE: &[&str] = &[
    "good",
    "great",
    "nice",
    "happy",
    "fine",
    "okay",
    "pleasant",
    "cheerful",
    "content",
    "satisfied",
    "glad",
    "better",
    "improved",
    "decent",
    "alright",
    "enjoyable",
    "positive",
    "upbeat",
    "optimistic",
    "hopeful",
    "confident",
    "peaceful",
    "comfortable",
    "pleased",
    "thankful",
    "appreciate",
    "love",
    "like",
    "enjoy",
    "fun",
    "exciting",
    "interesting",
];

const MOOD_NEGATIVE: &[&str] = &[
    "bad",
    "sad",
    "unhappy",
    "disappointed",
    "upset",
    "down",
    "frustrated",
    "annoyed",
    "worried",
    "anxious",
    "nervous",
    "stressed",
    "difficult",
    "rough",
    "tough",
    "hard",
    "poor",
    "uncomfortable",
    "uneasy",
    "concerned",
    "troubled",
    "bothered",
    "irritated",
    "agitated",
    "restless",
    "tense",
    "overwhelmed",
    "discouraged",
    "unmotivated",
    "bored",
    "dull",
    "mediocre",
    "dissatisfied",
];

const MOOD_VERY_NEGATIVE: &[&str] = &[
    "terrible",
    "awful",
    "horrible",
    "miserable",
    "depressed",
    "devastating",
    "devastated",
    "hopeless",
    "worst",
    "dreadful",
    "unbearable",
    "crushing",
    "heartbroken",
    "agonizing",
    "furious",
    "enraged",
    "despair",
    "desperate",
    "traumatic",
    "nightmare",
    "catastrophic",
    "disastrous",
    "tragic",
    "anguish",
    "tormented",
    "suffering",
    "pain",
    "agony",
    "grief",
];

const SOCIAL_VERY_POSITIVE: &[&str] = &[
    "friendship",
    "bonding",
    "celebration",
    "party",
    "gathering",
    "reunion",
    "connected",
    "supported",
    "welcomed",
    "included",
    "appreciated",
    "cherished",
    "adored",
    "embraced",
    "united",
    "community",
    "belonging",
    "accepted",
    "celebrate",
    "celebrating",
    "socialize",
    "socializing",
    "hangout",
    "wedding",
    "engagement",
    "birthday",
];

const SOCIAL_POSITIVE: &[&str] = &[
    "friends",
    "friend",
    "met",
    "meeting",
    "talked",
    "chat",
    "coffee",
    "lunch",
    "dinner",
    "social",
    "people",
    "colleague",
    "colleagues",
    "team",
    "family",
    "conversation",
    "laughed",
    "partner",
    "spouse",
    "boyfriend",
    "girlfriend",
    "date",
    "dating",
    "roommate",
    "neighbor",
    "visit",
    "visited",
    "company",
    "group",
    "club",
    "event",
    "outing",
    "together",
];

const SOCIAL_NEGATIVE: &[&str] = &[
    "alone",
    "lonely",
    "isolated",
    "argument",
    "disagreement",
    "tension",
    "awkward",
    "distant",
    "fight",
    "fighting",
    "conflict",
    "misunderstanding",
    "separated",
    "divorce",
    "breakup",
    "broke",
    "drama",
    "gossip",
    "rumor",
    "backstab",
    "fake",
    "superficial",
];

const SOCIAL_VERY_NEGATIVE: &[&str] = &[
    "abandoned",
    "rejected",
    "excluded",
    "betrayed",
    "bullied",
    "hostile",
    "toxic",
    "hated",
    "ignored",
    "ostracized",
    "abuse",
    "abused",
    "harassed",
    "harassment",
    "threatened",
    "attacked",
    "assaulted",
    "violence",
    "hatred",
    "enemy",
    "shunned",
    "despised",
    "alienated",
];

const WORK_VERY_POSITIVE: &[&str] = &[
    "accomplished",
    "achievement",
    "success",
    "successful",
    "breakthrough",
    "promotion",
    "promoted",
    "praised",
    "recognized",
    "award",
    "productive",
    "efficient",
    "completed",
    "triumph",
    "victory",
    "won",
    "winning",
    "exceeded",
    "excelled",
    "mastered",
    "innovated",
    "launched",
    "bonus",
    "raise",
    "hired",
];

const WORK_POSITIVE: &[&str] = &[
    "finished",
    "progress",
    "working",
    "work",
    "task",
    "project",
    "presentation",
    "job",
    "office",
    "business",
    "professional",
    "organized",
    "focused",
    "career",
    "client",
    "customer",
    "boss",
    "manager",
    "employee",
    "assignment",
    "deliver",
    "delivered",
    "done",
    "started",
];

const WORK_NEGATIVE: &[&str] = &[
    "deadline",
    "pressure",
    "behind",
    "challenging",
    "problem",
    "issue",
    "struggle",
    "struggling",
    "overtime",
    "busy",
    "hectic",
    "confused",
    "unclear",
    "mistake",
    "error",
    "delay",
    "delayed",
    "setback",
    "rejection",
    "criticism",
    "criticized",
    "complaint",
    "late",
    "rushed",
    "unprepared",
];

const WORK_VERY_NEGATIVE: &[&str] = &[
    "overwhelming",
    "burnout",
    "failed",
    "failure",
    "disaster",
    "impossible",
    "crisis",
    "chaos",
    "fired",
    "quit",
    "quitting",
    "layoff",
    "unemployed",
    "jobless",
    "bankruptcy",
    "lawsuit",
    "sued",
    "catastrophe",
    "collapse",
    "ruined",
    "destroyed",
];

const ENERGY_VERY_POSITIVE: &[&str] = &[
    "energized",
    "energetic",
    "refreshed",
    "revitalized",
    "pumped",
    "motivated",
    "charged",
    "invigorated",
    "strong",
    "powerful",
    "vibrant",
    "lively",
    "dynamic",
    "enthusiastic",
    "excited",
    "rejuvenated",
    "restored",
    "renewed",
    "workout",
    "exercise",
    "exercised",
    "gym",
];

const ENERGY_POSITIVE: &[&str] = &[
    "awake",
    "alert",
    "active",
    "rested",
    "ready",
    "fresh",
    "sharp",
    "fit",
    "well",
    "stable",
    "balanced",
    "walk",
    "walked",
    "stretch",
    "stretched",
];

const ENERGY_NEGATIVE: &[&str] = &[
    "tired",
    "sleepy",
    "drained",
    "sluggish",
    "weary",
    "worn",
    "fatigued",
    "lazy",
    "slow",
    "weak",
    "lethargic",
    "drowsy",
    "groggy",
    "listless",
    "apathetic",
    "sick",
    "nap",
];

const ENERGY_VERY_NEGATIVE: &[&str] = &[
    "exhausted",
    "depleted",
    "collapsed",
    "lifeless",
    "empty",
    "zombie",
    "bedridden",
];

const HEALTH_VERY_POSITIVE: &[&str] = &[
    "thriving",
    "recovered",
    "cured",
    "healed",
    "flourishing",
];

const HEALTH_POSITIVE: &[&str] = &[
    "healthy",
    "fit",
    "well",
    "recovering",
    "nourished",
    "hydrated",
    "exercise",
    "exercised",
];

const HEALTH_NEGATIVE: &[&str] = &[
    "sick",
    "ill",
    "unwell",
    "headache",
    "ache",
    "sore",
    "hurt",
    "nausea",
    "nauseous",
    "dizzy",
    "cough",
    "cold",
    "flu",
    "fever",
    "injured",
    "cramp",
    "allergies",
    "pain",
];

const HEALTH_VERY_NEGATIVE: &[&str] = &[
    "hospitalized",
    "surgery",
    "emergency",
    "chronic",
    "migraine",
    "pneumonia",
    "bedridden",
    "collapsed",
];

const SLEEP_VERY_POSITIVE: &[&str] = &["refreshed", "rejuvenated", "restful"];

const SLEEP_POSITIVE: &[&str] = &[
    "slept",
    "rested",
    "napped",
    "dozed",
    "dreamt",
    "dreamed",
];

const SLEEP_NEGATIVE: &[&str] = &[
    "tired",
    "sleepy",
    "drowsy",
    "groggy",
    "restless",
    "tossing",
];

const SLEEP_VERY_NEGATIVE: &[&str] = &[
    "insomnia",
    "sleepless",
    "exhausted",
    "nightmares",
];

const STRESS_VERY_POSITIVE: &[&str] = &["serene", "tranquil", "carefree", "zen"];

const STRESS_POSITIVE: &[&str] = &[
    "calm",
    "relaxed",
    "peaceful",
    "unwind",
    "unwound",
    "meditated",
    "meditation",
    "chill",
    "chilled",
];

const STRESS_NEGATIVE: &[&str] = &[
    "stressed",
    "stress",
    "pressure",
    "tense",
    "anxious",
    "worried",
    "nervous",
    "overloaded",
    "frazzled",
    "deadline",
];

const STRESS_VERY_NEGATIVE: &[&str] = &[
    "panic",
    "panicked",
    "panicking",
    "breakdown",
    "overwhelmed",
    "unbearable",
];

/// Flat (dimension, tier, words) view used to build the word map.
const WORD_TIERS: &[(Dimension, SentimentTier, &[&str])] = &[
    (Dimension::Mood, SentimentTier::VeryPositive, MOOD_VERY_POSITIVE),
    (Dimension::Mood, SentimentTier::Positive, MOOD_POSITIVE),
    (Dimension::Mood, SentimentTier::Negative, MOOD_NEGATIVE),
    (Dimension::Mood, SentimentTier::VeryNegative, MOOD_VERY_NEGATIVE),
    (Dimension::Social, SentimentTier::VeryPositive, SOCIAL_VERY_POSITIVE),
    (Dimension::Social, SentimentTier::Positive, SOCIAL_POSITIVE),
    (Dimension::Social, SentimentTier::Negative, SOCIAL_NEGATIVE),
    (Dimension::Social, SentimentTier::VeryNegative, SOCIAL_VERY_NEGATIVE),
    (Dimension::Work, SentimentTier::VeryPositive, WORK_VERY_POSITIVE),
    (Dimension::Work, SentimentTier::Positive, WORK_POSITIVE),
    (Dimension::Work, SentimentTier::Negative, WORK_NEGATIVE),
    (Dimension::Work, SentimentTier::VeryNegative, WORK_VERY_NEGATIVE),
    (Dimension::Energy, SentimentTier::VeryPositive, ENERGY_VERY_POSITIVE),
    (Dimension::Energy, SentimentTier::Positive, ENERGY_POSITIVE),
    (Dimension::Energy, SentimentTier::Negative, ENERGY_NEGATIVE),
    (Dimension::Energy, SentimentTier::VeryNegative, ENERGY_VERY_NEGATIVE),
    (Dimension::Health, SentimentTier::VeryPositive, HEALTH_VERY_POSITIVE),
    (Dimension::Health, SentimentTier::Positive, HEALTH_POSITIVE),
    (Dimension::Health, SentimentTier::Negative, HEALTH_NEGATIVE),
    (Dimension::Health, SentimentTier::VeryNegative, HEALTH_VERY_NEGATIVE),
    (Dimension::Sleep, SentimentTier::VeryPositive, SLEEP_VERY_POSITIVE),
    (Dimension::Sleep, SentimentTier::Positive, SLEEP_POSITIVE),
    (Dimension::Sleep, SentimentTier::Negative, SLEEP_NEGATIVE),
    (Dimension::Sleep, SentimentTier::VeryNegative, SLEEP_VERY_NEGATIVE),
    (Dimension::Stress, SentimentTier::VeryPositive, STRESS_VERY_POSITIVE),
    (Dimension::Stress, SentimentTier::Positive, STRESS_POSITIVE),
    (Dimension::Stress, SentimentTier::Negative, STRESS_NEGATIVE),
    (Dimension::Stress, SentimentTier::VeryNegative, STRESS_VERY_NEGATIVE),
];

// ============================================
// Multi-word phrases
// ============================================

const PHRASE_RULES: &[PhraseRule] = &[
    // Mood phrases
    PhraseRule { phrase: "feeling great", deltas: &[(Dimension::Mood, 2)] },
    PhraseRule { phrase: "feeling good", deltas: &[(Dimension::Mood, 1)] },
    PhraseRule { phrase: "feeling bad", deltas: &[(Dimension::Mood, -1)] },
    PhraseRule { phrase: "feeling terrible", deltas: &[(Dimension::Mood, -2)] },
    PhraseRule { phrase: "feeling awful", deltas: &[(Dimension::Mood, -2)] },
    PhraseRule { phrase: "feeling amazing", deltas: &[(Dimension::Mood, 2)] },
    PhraseRule {
        phrase: "on top of the world",
        deltas: &[(Dimension::Mood, 2), (Dimension::Energy, 2)],
    },
    PhraseRule { phrase: "down in the dumps", deltas: &[(Dimension::Mood, -2)] },
    PhraseRule { phrase: "over the moon", deltas: &[(Dimension::Mood, 2)] },
    PhraseRule { phrase: "on cloud nine", deltas: &[(Dimension::Mood, 2)] },
    // Work phrases
    PhraseRule {
        phrase: "burnt out",
        deltas: &[(Dimension::Work, -2), (Dimension::Energy, -2), (Dimension::Stress, -2)],
    },
    PhraseRule {
        phrase: "burned out",
        deltas: &[(Dimension::Work, -2), (Dimension::Energy, -2), (Dimension::Stress, -2)],
    },
    PhraseRule { phrase: "worked out", deltas: &[(Dimension::Energy, 1)] },
    PhraseRule { phrase: "crushing it", deltas: &[(Dimension::Work, 2)] },
    PhraseRule { phrase: "nailed it", deltas: &[(Dimension::Work, 2)] },
    PhraseRule { phrase: "killed it", deltas: &[(Dimension::Work, 2)] },
    PhraseRule {
        phrase: "knocked out",
        deltas: &[(Dimension::Work, 1), (Dimension::Energy, -1)],
    },
    // Social phrases
    PhraseRule { phrase: "hanging out", deltas: &[(Dimension::Social, 1)] },
    PhraseRule { phrase: "hung out", deltas: &[(Dimension::Social, 1)] },
    PhraseRule { phrase: "went out", deltas: &[(Dimension::Social, 1)] },
    PhraseRule {
        phrase: "had fun",
        deltas: &[(Dimension::Mood, 1), (Dimension::Social, 1)],
    },
    PhraseRule {
        phrase: "good time",
        deltas: &[(Dimension::Mood, 1), (Dimension::Social, 1)],
    },
    PhraseRule {
        phrase: "great time",
        deltas: &[(Dimension::Mood, 2), (Dimension::Social, 1)],
    },
    PhraseRule { phrase: "quality time", deltas: &[(Dimension::Social, 2)] },
    // Neutral: still counts as a social mention, pulling the average toward 0
    PhraseRule { phrase: "alone time", deltas: &[(Dimension::Social, 0)] },
    PhraseRule { phrase: "me time", deltas: &[(Dimension::Social, 0)] },
    PhraseRule { phrase: "home alone", deltas: &[(Dimension::Social, -1)] },
    PhraseRule { phrase: "by myself", deltas: &[(Dimension::Social, -1)] },
    // Generic polarity phrases
    PhraseRule { phrase: "went well", deltas: &[(Dimension::Mood, 1)] },
    PhraseRule { phrase: "going well", deltas: &[(Dimension::Mood, 1)] },
    PhraseRule { phrase: "not good", deltas: &[(Dimension::Mood, -1)] },
    PhraseRule { phrase: "not bad", deltas: &[(Dimension::Mood, 1)] },
    PhraseRule { phrase: "pretty good", deltas: &[(Dimension::Mood, 1)] },
    PhraseRule { phrase: "really good", deltas: &[(Dimension::Mood, 2)] },
    PhraseRule { phrase: "very good", deltas: &[(Dimension::Mood, 2)] },
    // Energy phrases
    PhraseRule { phrase: "super tired", deltas: &[(Dimension::Energy, -2)] },
    PhraseRule { phrase: "extremely tired", deltas: &[(Dimension::Energy, -2)] },
    PhraseRule { phrase: "dead tired", deltas: &[(Dimension::Energy, -2)] },
    PhraseRule { phrase: "wide awake", deltas: &[(Dimension::Energy, 2)] },
    PhraseRule { phrase: "full of energy", deltas: &[(Dimension::Energy, 2)] },
    PhraseRule { phrase: "no energy", deltas: &[(Dimension::Energy, -2)] },
    // Sleep phrases
    PhraseRule { phrase: "slept well", deltas: &[(Dimension::Sleep, 2)] },
    PhraseRule { phrase: "slept badly", deltas: &[(Dimension::Sleep, -2)] },
    PhraseRule {
        phrase: "can't sleep",
        deltas: &[(Dimension::Sleep, -2)],
    },
    PhraseRule {
        phrase: "couldn't sleep",
        deltas: &[(Dimension::Sleep, -2)],
    },
    PhraseRule {
        phrase: "all-nighter",
        deltas: &[(Dimension::Sleep, -2), (Dimension::Energy, -1)],
    },
    // Health phrases
    PhraseRule { phrase: "feeling sick", deltas: &[(Dimension::Health, -1)] },
    PhraseRule { phrase: "under the weather", deltas: &[(Dimension::Health, -1)] },
    // Stress phrases
    PhraseRule {
        phrase: "stressed out",
        deltas: &[(Dimension::Stress, -2), (Dimension::Mood, -1)],
    },
    PhraseRule { phrase: "freaking out", deltas: &[(Dimension::Stress, -2)] },
];

// ============================================
// Negations & intensifiers
// ============================================

const NEGATIONS: &[&str] = &[
    "not",
    "no",
    "never",
    "neither",
    "nobody",
    "nothing",
    "nowhere",
    "don't",
    "doesn't",
    "didn't",
    "won't",
    "wouldn't",
    "can't",
    "couldn't",
    "isn't",
    "aren't",
    "wasn't",
    "weren't",
    "hasn't",
    "haven't",
    "hadn't",
    "without",
    "lack",
    "lacking",
    "barely",
    "hardly",
    "scarcely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    // Strong intensifiers
    ("very", 1.5),
    ("really", 1.5),
    ("extremely", 1.8),
    ("super", 1.6),
    ("incredibly", 1.7),
    ("absolutely", 1.6),
    ("totally", 1.5),
    ("completely", 1.6),
    ("utterly", 1.7),
    ("truly", 1.5),
    ("so", 1.6),
    ("such", 1.5),
    ("highly", 1.5),
    ("deeply", 1.6),
    ("profoundly", 1.7),
    ("ridiculously", 1.8),
    ("insanely", 1.8),
    // Moderate intensifiers
    ("quite", 1.2),
    ("pretty", 1.2),
    ("rather", 1.2),
    ("fairly", 1.2),
    ("reasonably", 1.2),
    ("considerably", 1.3),
    ("significantly", 1.3),
    ("notably", 1.3),
    // Weakeners
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("little", 0.7),
    ("bit", 0.7),
    ("kinda", 0.8),
    ("mildly", 0.8),
];

/// The complete immutable table set driving one analyzer.
///
/// Built once (see [`Lexicon::builtin`]) and shared by reference across
/// concurrent calls; nothing here is ever mutated after construction.
#[derive(Debug)]
pub struct Lexicon {
    words: HashMap<&'static str, Vec<(Dimension, i8)>>,
    phrases: &'static [PhraseRule],
    events: &'static [EventRule],
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Lexicon {
    /// Build the built-in table set.
    pub fn builtin() -> Self {
        let mut words: HashMap<&'static str, Vec<(Dimension, i8)>> = HashMap::new();
        for &(dimension, tier, list) in WORD_TIERS {
            for &word in list {
                let entries = words.entry(word).or_default();
                // At most one tier per (word, dimension); first listing wins
                if !entries.iter().any(|(d, _)| *d == dimension) {
                    entries.push((dimension, tier.score()));
                }
            }
        }

        Self {
            words,
            phrases: PHRASE_RULES,
            events: EVENT_RULES,
            negations: NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Per-dimension scores of a single token; empty for unknown words.
    pub fn word_scores(&self, word: &str) -> &[(Dimension, i8)] {
        self.words.get(word).map_or(&[], Vec::as_slice)
    }

    pub fn phrases(&self) -> &[PhraseRule] {
        self.phrases
    }

    pub fn events(&self) -> &[EventRule] {
        self.events
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_scores_are_fixed() {
        assert_eq!(SentimentTier::VeryPositive.score(), 2);
        assert_eq!(SentimentTier::Positive.score(), 1);
        assert_eq!(SentimentTier::Negative.score(), -1);
        assert_eq!(SentimentTier::VeryNegative.score(), -2);
    }

    #[test]
    fn word_may_span_dimensions() {
        let lexicon = Lexicon::builtin();
        let scores = lexicon.word_scores("tired");
        assert!(scores.contains(&(Dimension::Energy, -1)));
        assert!(scores.contains(&(Dimension::Sleep, -1)));
    }

    #[test]
    fn word_has_one_tier_per_dimension() {
        let lexicon = Lexicon::builtin();
        for (word, entries) in &lexicon.words {
            let mut seen = Vec::new();
            for (dimension, _) in entries {
                assert!(
                    !seen.contains(&dimension),
                    "{word} listed twice under {dimension}"
                );
                seen.push(dimension);
            }
        }
    }

    #[test]
    fn unknown_word_scores_nothing() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.word_scores("zyzzyva").is_empty());
    }

    #[test]
    fn phrase_table_is_lowercase() {
        let lexicon = Lexicon::builtin();
        for rule in lexicon.phrases() {
            assert_eq!(rule.phrase, rule.phrase.to_lowercase());
        }
    }

    #[test]
    fn intensifier_multipliers_are_bounded() {
        let lexicon = Lexicon::builtin();
        for &(word, _) in INTENSIFIERS {
            let multiplier = lexicon.intensifier(word).unwrap();
            assert!((0.7..=1.8).contains(&multiplier), "{word}: {multiplier}");
        }
    }

    #[test]
    fn negations_include_contractions() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("didn't"));
        assert!(!lexicon.is_negation("did"));
    }
}
