use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use clap::Subcommand;
use moodmesh::analyzer::SentimentAnalyzer;
use moodmesh::config::AppConfig;
use moodmesh::database::Database;
use moodmesh::models;
use moodmesh::stats;
use moodmesh::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "moodmesh")]
#[command(about = "MoodMesh CLI for journal scoring, statistics and the API server")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Disable CORS regardless of config
        #[arg(long)]
        no_cors: bool,
    },
    /// Score ad-hoc text without touching the database
    Analyze {
        /// The journal text to score
        text: String,
    },
    /// Show statistics for a country
    Stats {
        /// Country to aggregate
        country: String,
        /// Specific date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Aggregate a whole month instead (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// List countries with entries
    Countries,
    /// Create the database schema
    InitDb,
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is only required by commands that reach the database or
    // server; `analyze` stays usable without one.
    let config = AppConfig::load();

    if cli.verbose {
        moodmesh::logging::init_logging_with_level("debug")?;
    } else {
        moodmesh::logging::init_logging_with_config(config.as_ref().ok())?;
    }

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            let config = config?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let enable_cors = config.server.enable_cors && !no_cors;
            moodmesh::api::serve_api(&config, host, port, enable_cors).await?;
        }
        Commands::Analyze { text } => {
            let analyzer = SentimentAnalyzer::new();
            let scores = analyzer.analyze(&text);
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
        Commands::Stats {
            country,
            date,
            month,
        } => {
            let database = Arc::new(Database::from_config(&config?).await?);

            if let Some(month) = month {
                let (start, end) = models::month_bounds(&month)?;
                let entries = database
                    .list_entries_by_country_date_range(&country, start, end)
                    .await?;
                let stats = stats::monthly_stats(&country, &month, &entries);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let date = match date {
                    Some(date) => models::parse_date(&date)?,
                    None => Utc::now().date_naive(),
                };
                let entries = database
                    .list_entries_by_country_date(&country, date)
                    .await?;
                let stats = stats::daily_stats(&country, date, &entries);
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
        Commands::Countries => {
            let database = Database::from_config(&config?).await?;
            let countries = database.list_countries().await?;
            if countries.is_empty() {
                println!("No entries yet");
            } else {
                for country in &countries {
                    println!("{country}");
                }
                let total = database.count_entries().await?;
                println!();
                println!("{total} entries across {} countries", countries.len());
            }
        }
        Commands::InitDb => {
            let database = Database::from_config(&config?).await?;
            database.init_schema().await?;
            info!("✅ Database schema initialized");
        }
        Commands::Config => {
            let config = config?;
            println!(
                "{}",
                toml::to_string_pretty(&config).unwrap_or_else(|_| format!("{config:#?}"))
            );
        }
    }

    Ok(())
}
