//! Rule-based multi-dimensional sentiment scoring.
//!
//! The engine turns one free-text journal entry into a small integer
//! score per life dimension (mood, social, work, energy, health, sleep,
//! stress), each in [-2, 2], plus an informational time context.
//!
//! Pipeline: phrase scan → token scan (negation flip, intensifier
//! scaling) → per-dimension averaging and clamping → life-event mood
//! base with contradiction damping → cross-dimension inference for
//! unmentioned dimensions → time extraction.
//!
//! The whole engine is a pure synchronous function over immutable
//! tables; calls share no mutable state and are safe to run from any
//! number of tasks at once.

pub mod events;
pub mod inference;
pub mod lexicon;
pub mod time_context;
pub mod tokens;

use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

pub use events::EventCategory;
pub use events::CONTRADICTION_DAMPING;
pub use lexicon::Dimension;
pub use lexicon::Lexicon;
pub use lexicon::SentimentTier;
pub use time_context::DayRef;
pub use time_context::DurationHint;
pub use time_context::TimeContext;
pub use time_context::TimeOfDay;

/// Entries shorter than this (after trimming) skip analysis entirely and
/// come back as an all-zero score set with no time context. This is a
/// documented contract of the engine, not an error path.
pub const MIN_ANALYZABLE_CHARS: usize = 5;

lazy_static! {
    static ref BUILTIN_LEXICON: Arc<Lexicon> = Arc::new(Lexicon::builtin());
}

/// Final integer scores for one journal entry.
///
/// This is the only structure handed to the storage/API layer. Every
/// dimension is an integer in [-2, 2]; 0 means neutral, unmentioned, or
/// balanced. `time` is `None` only for the short-text short circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreSet {
    pub mood: i8,
    pub social: i8,
    pub work: i8,
    pub energy: i8,
    pub health: i8,
    pub sleep: i8,
    pub stress: i8,
    pub time: Option<TimeContext>,
}

impl ScoreSet {
    pub fn get(&self, dimension: Dimension) -> i8 {
        match dimension {
            Dimension::Mood => self.mood,
            Dimension::Social => self.social,
            Dimension::Work => self.work,
            Dimension::Energy => self.energy,
            Dimension::Health => self.health,
            Dimension::Sleep => self.sleep,
            Dimension::Stress => self.stress,
        }
    }

    fn from_parts(finals: [i8; Dimension::COUNT], time: TimeContext) -> Self {
        Self {
            mood: finals[Dimension::Mood.index()],
            social: finals[Dimension::Social.index()],
            work: finals[Dimension::Work.index()],
            energy: finals[Dimension::Energy.index()],
            health: finals[Dimension::Health.index()],
            sleep: finals[Dimension::Sleep.index()],
            stress: finals[Dimension::Stress.index()],
            time: Some(time),
        }
    }
}

/// Where a mention came from, for debug traces.
#[derive(Debug, Clone, Copy)]
enum MentionSource {
    Phrase,
    Word,
}

/// One scored hit against a dimension.
#[derive(Debug)]
struct Mention {
    term: String,
    score: f64,
    source: MentionSource,
}

/// Per-dimension running sum for a single call.
#[derive(Debug, Default)]
struct Accumulator {
    total: f64,
    count: u32,
    mentions: Vec<Mention>,
}

impl Accumulator {
    fn record(&mut self, score: f64, term: &str, source: MentionSource) {
        self.total += score;
        self.count += 1;
        self.mentions.push(Mention {
            term: term.to_string(),
            score,
            source,
        });
    }

    fn average(&self) -> f64 {
        self.total / f64::from(self.count)
    }
}

/// Round to the nearest integer and clamp into the score range.
fn clamp_score(value: f64) -> i8 {
    value.round().clamp(-2.0, 2.0) as i8
}

/// The scoring engine. Cheap to clone; all table data is shared.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    /// Analyzer over the built-in table set.
    pub fn new() -> Self {
        Self {
            lexicon: Arc::clone(&BUILTIN_LEXICON),
        }
    }

    /// Analyzer over an injected table set.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score one journal entry. Never fails; any string is valid input.
    pub fn analyze(&self, text: &str) -> ScoreSet {
        let trimmed = text.trim();
        if trimmed.chars().count() < MIN_ANALYZABLE_CHARS {
            return ScoreSet::default();
        }

        let lowered = trimmed.to_lowercase();
        let token_list = tokens::tokenize(&lowered);

        let mut accumulators: [Accumulator; Dimension::COUNT] = Default::default();

        // Step 1: multi-word phrases, matched over the whole text. Every
        // phrase in the table that occurs applies; matches stack.
        for rule in self.lexicon.phrases() {
            if lowered.contains(rule.phrase) {
                for &(dimension, delta) in rule.deltas {
                    accumulators[dimension.index()].record(
                        f64::from(delta),
                        rule.phrase,
                        MentionSource::Phrase,
                    );
                }
            }
        }

        // Step 2: token scan with single-token lookbehind for negation
        // and intensifiers. One token may score several dimensions.
        for (index, &token) in token_list.iter().enumerate() {
            let prev = tokens::previous(&token_list, index);
            let negated = prev.is_some_and(|word| self.lexicon.is_negation(word));
            let intensity = prev
                .and_then(|word| self.lexicon.intensifier(word))
                .unwrap_or(1.0);

            for &(dimension, base) in self.lexicon.word_scores(token) {
                let mut score = f64::from(base);
                if negated {
                    score = -score;
                }
                score *= intensity;
                let score = score.round().clamp(-2.0, 2.0);
                accumulators[dimension.index()].record(score, token, MentionSource::Word);
            }
        }

        // Step 3: average and clamp the directly mentioned dimensions.
        let mut finals = [0i8; Dimension::COUNT];
        let mut mentioned = [false; Dimension::COUNT];
        for dimension in Dimension::ALL {
            let accumulator = &accumulators[dimension.index()];
            if accumulator.count > 0 {
                finals[dimension.index()] = clamp_score(accumulator.average());
                mentioned[dimension.index()] = true;
            }
        }

        // Step 4: life events. The (possibly contradiction-damped) event
        // base joins the mood average as one additional strong mention,
        // so it is never drowned out by ordinary words.
        let mood_base = events::damped_mood_base(&self.lexicon, &lowered);
        if mood_base != 0.0 {
            let mood_acc = &accumulators[Dimension::Mood.index()];
            let combined =
                (mood_acc.total + mood_base) / (f64::from(mood_acc.count) + 1.0);
            finals[Dimension::Mood.index()] = clamp_score(combined);
            mentioned[Dimension::Mood.index()] = true;
        }

        // Step 5: derive unmentioned dimensions from mentioned ones.
        inference::apply(&mut finals, &mentioned);

        // Step 6: side metadata, never part of the scores.
        let time = time_context::extract(&lowered, &token_list);

        for dimension in Dimension::ALL {
            let accumulator = &accumulators[dimension.index()];
            for mention in &accumulator.mentions {
                debug!(
                    dimension = dimension.as_str(),
                    term = %mention.term,
                    score = mention.score,
                    source = ?mention.source,
                    "mention"
                );
            }
        }
        debug!(?finals, ?time, mood_base, "analysis complete");

        ScoreSet::from_parts(finals, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new()
    }

    fn assert_clamped(scores: &ScoreSet) {
        for dimension in Dimension::ALL {
            let value = scores.get(dimension);
            assert!((-2..=2).contains(&value), "{dimension} out of range: {value}");
        }
    }

    #[test]
    fn short_text_short_circuits() {
        let scores = analyzer().analyze("ok!!");
        assert_eq!(scores, ScoreSet::default());
        assert_eq!(scores.time, None);
    }

    #[test]
    fn whitespace_padding_does_not_defeat_the_short_circuit() {
        let scores = analyzer().analyze("   ok!    ");
        assert_eq!(scores, ScoreSet::default());
    }

    #[test]
    fn analysis_is_idempotent() {
        let text = "had a great time with friends but i am so tired now";
        let first = analyzer().analyze(text);
        let second = analyzer().analyze(text);
        assert_eq!(first, second);
    }

    #[test]
    fn happy_today() {
        let scores = analyzer().analyze("I am happy today");
        assert!(scores.mood > 0);
        let time = scores.time.unwrap();
        assert_eq!(time.day, Some(DayRef::Today));
        assert_clamped(&scores);
    }

    #[test]
    fn intensifier_deepens_the_score() {
        let plain = analyzer().analyze("I feel tired");
        let boosted = analyzer().analyze("I feel very tired");
        assert!(plain.energy < 0);
        assert!(boosted.energy < plain.energy);
    }

    #[test]
    fn negation_flips_the_sign() {
        let positive = analyzer().analyze("today was happy happy happy");
        let negated = analyzer().analyze("today was not happy");
        assert!(positive.mood > 0);
        assert!(negated.mood < 0);
    }

    #[test]
    fn phrase_alone_scores_its_dimensions() {
        // "nailed it" has no standalone lexicon words
        let scores = analyzer().analyze("totally nailed it");
        assert_eq!(scores.work, 2);
    }

    #[test]
    fn not_good_phrase_pins_mood() {
        let scores = analyzer().analyze("today not good");
        assert_eq!(scores.mood, -1);
    }

    #[test]
    fn loss_event_with_contradiction_is_damped() {
        let damped = analyzer().analyze("I lost my dog but I did not feel bad");
        let undamped = analyzer().analyze("I lost my dog and I feel bad");
        assert!(damped.mood < 0);
        assert!(damped.mood > undamped.mood);
        assert_eq!(damped.mood, -1);
        assert_eq!(undamped.mood, -2);
    }

    #[test]
    fn event_survives_positive_lexicon_noise() {
        // A loss must dominate a politely positive sentence
        let scores = analyzer().analyze("my grandmother passed away, dinner was nice though");
        assert!(scores.mood < 0);
    }

    #[test]
    fn direct_mentions_beat_inference() {
        // Work is awful but energy is explicitly fine
        let scores = analyzer().analyze("work was a disaster but i feel energized");
        assert!(scores.work < 0);
        assert!(scores.energy > 0);
    }

    #[test]
    fn unmentioned_energy_inherits_bad_work() {
        let scores = analyzer().analyze("work was a complete disaster and a failure");
        assert!(scores.work <= -1);
        assert_eq!(scores.energy, scores.work.max(-2));
    }

    #[test]
    fn no_hits_yield_all_zero() {
        let scores = analyzer().analyze("the quadratic formula has two roots");
        for dimension in Dimension::ALL {
            assert_eq!(scores.get(dimension), 0);
        }
        assert!(scores.time.is_some());
    }

    #[test]
    fn every_dimension_stays_in_range() {
        let texts = [
            "amazing wonderful fantastic incredible ecstatic thrilled",
            "terrible awful horrible miserable depressed devastated",
            "extremely exhausted and ridiculously drained, burnt out",
            "got married, got promoted, had a baby, won the lottery",
            "lost my dog, got fired, broke up, car accident",
        ];
        for text in texts {
            assert_clamped(&analyzer().analyze(text));
        }
    }

    #[test]
    fn seven_dimension_entry_scores_everywhere() {
        let scores = analyzer().analyze("I'm sick, can't sleep, feeling stressed and exhausted");
        assert!(scores.health < 0);
        assert!(scores.sleep < 0);
        assert!(scores.stress < 0);
        assert!(scores.energy < 0);
        assert!(scores.mood < 0);
        // Social is inferred from low mood
        assert_eq!(scores.social, -1);
    }

    #[test]
    fn injected_tables_behave_like_the_builtin_set() {
        let injected = SentimentAnalyzer::with_lexicon(Arc::new(Lexicon::builtin()));
        let text = "had a great time with friends today";
        assert_eq!(injected.analyze(text), analyzer().analyze(text));
    }

    #[test]
    fn score_set_serializes_flat() {
        let scores = analyzer().analyze("I am happy today");
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["mood"], 1);
        assert_eq!(json["time"]["day"], "today");
    }
}
