use moodmesh::analyzer::DayRef;
use moodmesh::analyzer::Dimension;
use moodmesh::analyzer::DurationHint;
use moodmesh::analyzer::ScoreSet;
use moodmesh::analyzer::SentimentAnalyzer;
use moodmesh::analyzer::TimeOfDay;

fn analyze(text: &str) -> ScoreSet {
    SentimentAnalyzer::new().analyze(text)
}

fn assert_in_range(scores: &ScoreSet) {
    for dimension in Dimension::ALL {
        let value = scores.get(dimension);
        assert!(
            (-2..=2).contains(&value),
            "{dimension} out of range: {value}"
        );
    }
}

#[test]
fn test_good_day_journal_entry() {
    let scores = analyze(
        "Went to the gym this morning, then had coffee with friends. Feeling great today!",
    );

    assert_eq!(scores.mood, 2);
    assert_eq!(scores.social, 1);
    assert_eq!(scores.energy, 2);

    let time = scores.time.unwrap();
    assert_eq!(time.time_of_day, Some(TimeOfDay::Morning));
    assert_eq!(time.day, Some(DayRef::Today));
    assert_in_range(&scores);
}

#[test]
fn test_bad_work_day_pulls_energy_down() {
    let scores = analyze("Work was a disaster, missed the deadline and got criticized.");

    assert_eq!(scores.work, -1);
    assert_eq!(scores.stress, -1);
    // Energy was never mentioned; it inherits the bad work day
    assert_eq!(scores.energy, -1);
    // Mild stress is too weak a signal to move mood
    assert_eq!(scores.mood, 0);
}

#[test]
fn test_milestone_event_dominates() {
    let scores =
        analyze("We got engaged last night! Absolutely thrilled and celebrating with family.");

    assert_eq!(scores.mood, 2);
    assert_eq!(scores.social, 2);

    let time = scores.time.unwrap();
    assert_eq!(time.time_of_day, Some(TimeOfDay::Evening));
    assert_eq!(time.day, Some(DayRef::Yesterday));
}

#[test]
fn test_contradicted_loss_is_damped_but_still_negative() {
    let damped = analyze("I lost my dog but I did not feel bad");
    let plain = analyze("I lost my dog and I feel bad");

    assert_eq!(damped.mood, -1);
    assert_eq!(plain.mood, -2);
    assert!(damped.mood > plain.mood);
    // Low mood still casts a shadow on the unmentioned social dimension
    assert_eq!(damped.social, -1);
}

#[test]
fn test_sleepless_night_journal_entry() {
    let scores = analyze("Couldn't sleep at all, maybe two hours. Exhausted and groggy all day.");

    assert_eq!(scores.sleep, -2);
    assert_eq!(scores.energy, -2);
    // Mood is inferred from drained energy, at half strength
    assert_eq!(scores.mood, -1);
    // Inferred mood must not cascade into social
    assert_eq!(scores.social, 0);

    let time = scores.time.unwrap();
    assert_eq!(time.time_of_day, Some(TimeOfDay::Night));
    assert_eq!(time.duration, Some(DurationHint::AllDay));
}

#[test]
fn test_short_inputs_never_score() {
    for text in ["", " ", "ok", "ok!!", "    hm   "] {
        let scores = analyze(text);
        assert_eq!(scores, ScoreSet::default(), "{text:?} should not score");
        assert!(scores.time.is_none());
    }
}

#[test]
fn test_engine_is_deterministic_across_instances() {
    let text = "Busy week, burnt out, but hanging out with friends helped a little.";
    let first = SentimentAnalyzer::new().analyze(text);
    let second = SentimentAnalyzer::new().analyze(text);
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_analysis_shares_tables_safely() {
    let analyzer = SentimentAnalyzer::new();
    let text = "Feeling great today, full of energy after the gym.";
    let expected = analyzer.analyze(text);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let analyzer = analyzer.clone();
            std::thread::spawn(move || analyzer.analyze(text))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_extreme_texts_stay_clamped() {
    let texts = [
        "amazing amazing amazing wonderful fantastic incredible glorious",
        "terrible horrible miserable depressed hopeless devastated awful",
        "extremely exhausted, ridiculously drained, completely burnt out",
        "got married and got promoted and won the championship, feeling amazing",
        "lost my dog, got fired, broke up, and my car accident made it worse",
    ];
    for text in texts {
        assert_in_range(&analyze(text));
    }
}

#[test]
fn test_score_set_json_shape() {
    let scores = analyze("Quick lunch with colleagues today, work going well.");
    let json = serde_json::to_value(scores).unwrap();

    for key in ["mood", "social", "work", "energy", "health", "sleep", "stress"] {
        assert!(json.get(key).is_some(), "missing {key}");
        assert!(json[key].is_i64(), "{key} should be an integer");
    }
    assert_eq!(json["time"]["time_of_day"], "afternoon");
    assert_eq!(json["time"]["day"], "today");
    assert_eq!(json["time"]["duration"], "brief");
}

#[test]
fn test_unknown_vocabulary_is_neutral() {
    let scores = analyze("The compiler emitted seventeen diagnostics about lifetimes.");
    for dimension in Dimension::ALL {
        assert_eq!(scores.get(dimension), 0);
    }
}
