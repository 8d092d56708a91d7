use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodMeshError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("User {user_id} already posted on {date}")]
    AlreadyPostedToday { user_id: String, date: String },

    #[error("Entry text too short: {got} characters (minimum {minimum})")]
    EntryTooShort { got: usize, minimum: usize },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MoodMeshError>;
