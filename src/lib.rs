pub mod analyzer;
pub mod api;
pub mod config;
pub mod database;
pub mod errors;
pub mod logging;
pub mod models;
pub mod stats;

pub use analyzer::ScoreSet;
pub use analyzer::SentimentAnalyzer;
pub use config::AppConfig;
pub use errors::*;
