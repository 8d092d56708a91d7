//! Cross-dimension inference for dimensions without direct mentions.
//!
//! A dimension the text never touched can still be derived from a related
//! dimension's final score: a brutal work day usually drags energy down
//! with it. Rules read only final, already-clamped values of directly
//! mentioned source dimensions, each target is written at most once, and
//! an inferred value never feeds another rule — so there is no cascade.

use tracing::debug;

use super::lexicon::Dimension;

/// Half of `value`, rounded down (−1 → −1, −2 → −1, 1 → 0, 2 → 1).
fn half_floor(value: i8) -> i8 {
    (f64::from(value) / 2.0).floor() as i8
}

/// Half of `value`, rounded up (−1 → 0, −2 → −1, 1 → 1, 2 → 1).
fn half_ceil(value: i8) -> i8 {
    (f64::from(value) / 2.0).ceil() as i8
}

/// One directional inference rule: `derive` maps the source's final score
/// to the target's inferred score; 0 means "nothing to infer".
struct InferenceRule {
    source: Dimension,
    target: Dimension,
    derive: fn(i8) -> i8,
}

/// Rule table, in evaluation order. Earlier rules win a contested target.
const RULES: &[InferenceRule] = &[
    // A bad work day drains energy one-for-one
    InferenceRule {
        source: Dimension::Work,
        target: Dimension::Energy,
        derive: |work| if work <= -1 { work.max(-2) } else { 0 },
    },
    // Social life moves mood, more strongly upward than downward
    InferenceRule {
        source: Dimension::Social,
        target: Dimension::Mood,
        derive: |social| {
            if social >= 1 {
                (half_floor(social) + 1).min(2)
            } else if social <= -1 {
                half_ceil(social).max(-1)
            } else {
                0
            }
        },
    },
    // Low mood makes company less likely, at half strength
    InferenceRule {
        source: Dimension::Mood,
        target: Dimension::Social,
        derive: |mood| if mood <= -1 { half_floor(mood).max(-1) } else { 0 },
    },
    // Running on empty shows in mood
    InferenceRule {
        source: Dimension::Energy,
        target: Dimension::Mood,
        derive: |energy| {
            if energy <= -1 {
                half_floor(energy).max(-1)
            } else {
                0
            }
        },
    },
    // A bad night costs energy and mood a fraction of its score
    InferenceRule {
        source: Dimension::Sleep,
        target: Dimension::Energy,
        derive: |sleep| if sleep <= -1 { half_ceil(sleep).max(-2) } else { 0 },
    },
    InferenceRule {
        source: Dimension::Sleep,
        target: Dimension::Mood,
        derive: |sleep| if sleep <= -1 { half_ceil(sleep).max(-1) } else { 0 },
    },
    InferenceRule {
        source: Dimension::Stress,
        target: Dimension::Mood,
        derive: |stress| if stress <= -1 { half_ceil(stress).max(-1) } else { 0 },
    },
    InferenceRule {
        source: Dimension::Health,
        target: Dimension::Energy,
        derive: |health| if health <= -1 { half_ceil(health).max(-2) } else { 0 },
    },
];

/// Fill unmentioned dimensions in `finals` from mentioned ones.
///
/// `mentioned[i]` is true when dimension `i` had at least one direct
/// mention (lexicon word, phrase, or event); those values are never
/// overwritten here.
pub fn apply(finals: &mut [i8; Dimension::COUNT], mentioned: &[bool; Dimension::COUNT]) {
    let mut inferred = [false; Dimension::COUNT];

    for rule in RULES {
        let source_index = rule.source.index();
        let target_index = rule.target.index();

        // Sources must be directly mentioned; inferred values never chain
        if !mentioned[source_index] {
            continue;
        }
        if mentioned[target_index] || inferred[target_index] {
            continue;
        }

        let value = (rule.derive)(finals[source_index]);
        if value != 0 {
            debug!(
                source = rule.source.as_str(),
                target = rule.target.as_str(),
                value,
                "inferred dimension score"
            );
            finals[target_index] = value;
            inferred[target_index] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOOD: usize = 0;
    const SOCIAL: usize = 1;
    const WORK: usize = 2;
    const ENERGY: usize = 3;
    const SLEEP: usize = 5;
    const STRESS: usize = 6;

    fn run(finals: [i8; 7], mentioned: [bool; 7]) -> [i8; 7] {
        let mut scores = finals;
        apply(&mut scores, &mentioned);
        scores
    }

    #[test]
    fn bad_work_day_drains_energy() {
        let mut mentioned = [false; 7];
        mentioned[WORK] = true;
        let mut finals = [0; 7];
        finals[WORK] = -2;

        let result = run(finals, mentioned);
        assert_eq!(result[ENERGY], -2);
        // Energy was inferred, so it must not chain into mood
        assert_eq!(result[MOOD], 0);
    }

    #[test]
    fn positive_social_lifts_mood_more_than_negative_drops_it() {
        let mut mentioned = [false; 7];
        mentioned[SOCIAL] = true;

        let mut finals = [0; 7];
        finals[SOCIAL] = 2;
        assert_eq!(run(finals, mentioned)[MOOD], 2);

        finals[SOCIAL] = 1;
        assert_eq!(run(finals, mentioned)[MOOD], 1);

        finals[SOCIAL] = -1;
        // half_ceil(-1) is 0: too weak a signal to write
        assert_eq!(run(finals, mentioned)[MOOD], 0);

        finals[SOCIAL] = -2;
        assert_eq!(run(finals, mentioned)[MOOD], -1);
    }

    #[test]
    fn low_mood_infers_negative_social_at_half_strength() {
        let mut mentioned = [false; 7];
        mentioned[MOOD] = true;
        let mut finals = [0; 7];
        finals[MOOD] = -1;

        assert_eq!(run(finals, mentioned)[SOCIAL], -1);
    }

    #[test]
    fn mentioned_dimensions_are_never_overwritten() {
        let mut mentioned = [false; 7];
        mentioned[WORK] = true;
        mentioned[ENERGY] = true;
        let mut finals = [0; 7];
        finals[WORK] = -2;
        finals[ENERGY] = 2;

        assert_eq!(run(finals, mentioned)[ENERGY], 2);
    }

    #[test]
    fn each_target_is_set_at_most_once() {
        // Both social and stress would write mood; social is evaluated
        // first and wins
        let mut mentioned = [false; 7];
        mentioned[SOCIAL] = true;
        mentioned[STRESS] = true;
        let mut finals = [0; 7];
        finals[SOCIAL] = 2;
        finals[STRESS] = -2;

        assert_eq!(run(finals, mentioned)[MOOD], 2);
    }

    #[test]
    fn terrible_sleep_costs_energy_and_mood() {
        let mut mentioned = [false; 7];
        mentioned[SLEEP] = true;
        let mut finals = [0; 7];
        finals[SLEEP] = -2;

        let result = run(finals, mentioned);
        assert_eq!(result[ENERGY], -1);
        assert_eq!(result[MOOD], -1);
    }

    #[test]
    fn positive_sources_without_rules_change_nothing() {
        let mut mentioned = [false; 7];
        mentioned[WORK] = true;
        let mut finals = [0; 7];
        finals[WORK] = 2;

        assert_eq!(run(finals, mentioned), finals);
    }
}
