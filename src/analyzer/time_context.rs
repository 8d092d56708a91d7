//! Time context extraction, independent of sentiment.
//!
//! Scans for fixed keyword sets covering time of day, day reference and
//! duration. The first matching category wins per field, in the priority
//! order the tables are listed; fields with no match stay `None`. The
//! result is informational only and never feeds back into scores.

use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRef {
    Today,
    Yesterday,
    Tomorrow,
    Weekend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationHint {
    AllDay,
    Brief,
    Extended,
}

impl TimeOfDay {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl DayRef {
    pub fn as_str(self) -> &'static str {
        match self {
            DayRef::Today => "today",
            DayRef::Yesterday => "yesterday",
            DayRef::Tomorrow => "tomorrow",
            DayRef::Weekend => "weekend",
        }
    }
}

impl DurationHint {
    pub fn as_str(self) -> &'static str {
        match self {
            DurationHint::AllDay => "all_day",
            DurationHint::Brief => "brief",
            DurationHint::Extended => "extended",
        }
    }
}

/// Side metadata attached to a score set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    pub time_of_day: Option<TimeOfDay>,
    pub day: Option<DayRef>,
    pub duration: Option<DurationHint>,
}

const TIME_OF_DAY_SETS: &[(TimeOfDay, &[&str])] = &[
    (
        TimeOfDay::Morning,
        &["morning", "breakfast", "woke", "wake", "dawn", "sunrise", "early"],
    ),
    (TimeOfDay::Afternoon, &["afternoon", "lunch", "noon", "midday"]),
    (TimeOfDay::Evening, &["evening", "dinner", "night", "sunset", "dusk"]),
    (
        TimeOfDay::Night,
        &["night", "midnight", "late", "sleep", "bed", "bedtime"],
    ),
];

const DAY_SETS: &[(DayRef, &[&str])] = &[
    (
        DayRef::Today,
        &["today", "currently", "now", "right now", "at the moment"],
    ),
    (DayRef::Yesterday, &["yesterday", "last night", "earlier"]),
    (DayRef::Tomorrow, &["tomorrow", "later", "soon", "upcoming"]),
    (DayRef::Weekend, &["weekend", "saturday", "sunday"]),
];

const DURATION_SETS: &[(DurationHint, &[&str])] = &[
    (
        DurationHint::AllDay,
        &["all day", "whole day", "entire day", "day long"],
    ),
    (DurationHint::Brief, &["quick", "brief", "short", "moment"]),
    (DurationHint::Extended, &["long", "hours", "forever", "endless"]),
];

/// Keyword presence test: single words must match a whole token,
/// multi-word keywords match by substring.
fn any_keyword_present(keywords: &[&str], lowered: &str, tokens: &HashSet<&str>) -> bool {
    keywords.iter().any(|keyword| {
        if keyword.contains(' ') {
            lowered.contains(keyword)
        } else {
            tokens.contains(keyword)
        }
    })
}

/// Extract the time context from lowered text and its tokens.
pub fn extract(lowered: &str, tokens: &[&str]) -> TimeContext {
    let token_set: HashSet<&str> = tokens.iter().copied().collect();

    let time_of_day = TIME_OF_DAY_SETS
        .iter()
        .find(|(_, keywords)| any_keyword_present(keywords, lowered, &token_set))
        .map(|(value, _)| *value);

    let day = DAY_SETS
        .iter()
        .find(|(_, keywords)| any_keyword_present(keywords, lowered, &token_set))
        .map(|(value, _)| *value);

    let duration = DURATION_SETS
        .iter()
        .find(|(_, keywords)| any_keyword_present(keywords, lowered, &token_set))
        .map(|(value, _)| *value);

    TimeContext {
        time_of_day,
        day,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::tokens::tokenize;

    fn extract_from(text: &str) -> TimeContext {
        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);
        extract(&lowered, &tokens)
    }

    #[test]
    fn detects_day_reference() {
        let context = extract_from("i am happy today");
        assert_eq!(context.day, Some(DayRef::Today));
        assert_eq!(context.duration, None);
    }

    #[test]
    fn priority_order_wins_within_a_field() {
        // "night" appears in both the evening and night sets; evening is
        // listed first and wins
        let context = extract_from("a long night at the office");
        assert_eq!(context.time_of_day, Some(TimeOfDay::Evening));
        assert_eq!(context.duration, Some(DurationHint::Extended));
    }

    #[test]
    fn multi_word_keywords_match_by_substring() {
        let context = extract_from("stayed in all day yesterday");
        assert_eq!(context.duration, Some(DurationHint::AllDay));
        assert_eq!(context.day, Some(DayRef::Yesterday));
    }

    #[test]
    fn single_word_keywords_need_a_whole_token() {
        // "know" contains "now" but is not a day reference
        let context = extract_from("i know the drill");
        assert_eq!(context.day, None);
    }

    #[test]
    fn unmatched_fields_stay_none() {
        let context = extract_from("pasta for the win");
        assert_eq!(context.time_of_day, None);
        assert_eq!(context.day, None);
        assert_eq!(context.duration, None);
    }

    #[test]
    fn serializes_snake_case_labels() {
        let context = extract_from("quick breakfast today");
        let json = serde_json::to_value(context).unwrap();
        assert_eq!(json["time_of_day"], "morning");
        assert_eq!(json["day"], "today");
        assert_eq!(json["duration"], "brief");
    }
}
