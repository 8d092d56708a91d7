//! Per-country statistics over stored entries.
//!
//! Plain arithmetic over already-scored entries: sums, means, and
//! five-bucket histograms per dimension. Aggregation happens app-side
//! over the fetched rows; an empty entry set yields zeroed stats rather
//! than an error.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::analyzer::Dimension;
use crate::models::JournalEntry;

/// One value per dimension, in a fixed named shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerDimension<T> {
    pub mood: T,
    pub social: T,
    pub work: T,
    pub energy: T,
    pub health: T,
    pub sleep: T,
    pub stress: T,
}

impl<T> PerDimension<T> {
    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::Mood => &self.mood,
            Dimension::Social => &self.social,
            Dimension::Work => &self.work,
            Dimension::Energy => &self.energy,
            Dimension::Health => &self.health,
            Dimension::Sleep => &self.sleep,
            Dimension::Stress => &self.stress,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::Mood => &mut self.mood,
            Dimension::Social => &mut self.social,
            Dimension::Work => &mut self.work,
            Dimension::Energy => &mut self.energy,
            Dimension::Health => &mut self.health,
            Dimension::Sleep => &mut self.sleep,
            Dimension::Stress => &mut self.stress,
        }
    }
}

/// Entry counts per score bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub very_negative: u32,
    pub negative: u32,
    pub neutral: u32,
    pub positive: u32,
    pub very_positive: u32,
}

impl ScoreDistribution {
    fn record(&mut self, score: i8) {
        match score {
            i8::MIN..=-2 => self.very_negative += 1,
            -1 => self.negative += 1,
            0 => self.neutral += 1,
            1 => self.positive += 1,
            _ => self.very_positive += 1,
        }
    }
}

/// One country-day of aggregated scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub country: String,
    pub date: NaiveDate,
    pub total_entries: usize,
    pub averages: PerDimension<f64>,
    pub distribution: PerDimension<ScoreDistribution>,
}

/// One country-month of aggregated scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStats {
    pub country: String,
    pub month: String,
    pub total_entries: usize,
    pub averages: PerDimension<f64>,
}

/// Mean of one dimension across entries, rounded to two decimals.
fn dimension_mean(entries: &[JournalEntry], dimension: Dimension) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let total: i64 = entries
        .iter()
        .map(|entry| i64::from(entry.score(dimension)))
        .sum();
    let mean = total as f64 / entries.len() as f64;
    (mean * 100.0).round() / 100.0
}

fn averages(entries: &[JournalEntry]) -> PerDimension<f64> {
    let mut result = PerDimension::default();
    for dimension in Dimension::ALL {
        *result.get_mut(dimension) = dimension_mean(entries, dimension);
    }
    result
}

/// Aggregate one country-day of entries.
pub fn daily_stats(country: &str, date: NaiveDate, entries: &[JournalEntry]) -> DailyStats {
    let mut distribution: PerDimension<ScoreDistribution> = PerDimension::default();
    for entry in entries {
        for dimension in Dimension::ALL {
            distribution.get_mut(dimension).record(entry.score(dimension));
        }
    }

    DailyStats {
        country: country.to_string(),
        date,
        total_entries: entries.len(),
        averages: averages(entries),
        distribution,
    }
}

/// Aggregate one country-month of entries.
pub fn monthly_stats(country: &str, month: &str, entries: &[JournalEntry]) -> MonthlyStats {
    MonthlyStats {
        country: country.to_string(),
        month: month.to_string(),
        total_entries: entries.len(),
        averages: averages(entries),
    }
}
