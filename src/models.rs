use chrono::DateTime;
use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;

use crate::analyzer::Dimension;
use crate::analyzer::ScoreSet;

/// A stored journal entry with its derived scores.
///
/// Scores are kept as SMALLINT columns so per-dimension SQL aggregates
/// stay possible later; in memory they are the same [-2, 2] integers the
/// engine produced. The time-context labels are stored as plain text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: i64,
    pub user_id: String,
    pub user_name: String,
    pub country: String,
    pub entry_text: String,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub mood: i16,
    pub social: i16,
    pub work: i16,
    pub energy: i16,
    pub health: i16,
    pub sleep: i16,
    pub stress: i16,
    pub time_of_day: Option<String>,
    pub day_ref: Option<String>,
    pub duration_hint: Option<String>,
}

impl JournalEntry {
    /// Score of one dimension, back in engine range.
    pub fn score(&self, dimension: Dimension) -> i8 {
        let value = match dimension {
            Dimension::Mood => self.mood,
            Dimension::Social => self.social,
            Dimension::Work => self.work,
            Dimension::Energy => self.energy,
            Dimension::Health => self.health,
            Dimension::Sleep => self.sleep,
            Dimension::Stress => self.stress,
        };
        value as i8
    }
}

/// Everything needed to insert one entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub user_id: String,
    pub user_name: String,
    pub country: String,
    pub entry_text: String,
    pub entry_date: NaiveDate,
    pub scores: ScoreSet,
}

/// Parse `YYYY-MM` into the first day of that month and the first day of
/// the following month (an exclusive upper bound for range queries).
pub fn month_bounds(year_month: &str) -> crate::Result<(NaiveDate, NaiveDate)> {
    let invalid = || crate::MoodMeshError::InvalidMonth(year_month.to_string());

    let (year_str, month_str) = year_month.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year_str.parse().map_err(|_| invalid())?;
    let month: u32 = month_str.parse().map_err(|_| invalid())?;

    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(invalid)?;

    Ok((start, end))
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(date: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| crate::MoodMeshError::InvalidDate(date.to_string()))
}

/// The `YYYY-MM` label of a date.
pub fn month_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_the_month() {
        let (start, end) = month_bounds("2024-03").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let (start, end) = month_bounds("2024-12").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn malformed_months_are_rejected() {
        assert!(month_bounds("2024").is_err());
        assert!(month_bounds("2024-13").is_err());
        assert!(month_bounds("march").is_err());
    }

    #[test]
    fn dates_parse_strictly() {
        assert!(parse_date("2024-03-05").is_ok());
        assert!(parse_date("03/05/2024").is_err());
    }

    #[test]
    fn month_label_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(month_label(date), "2024-03");
    }
}
