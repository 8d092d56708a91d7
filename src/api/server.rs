//! HTTP server implementation

use std::sync::Arc;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analyzer::SentimentAnalyzer;
use crate::api::handlers::AppState;
use crate::api::routes;
use crate::config::AppConfig;
use crate::database::Database;
use crate::Result;

/// Start the API server
pub async fn serve_api(
    config: &AppConfig,
    host: String,
    port: u16,
    enable_cors: bool,
) -> Result<()> {
    info!("🚀 Starting MoodMesh API server...");

    // Initialize services
    let database = Arc::new(Database::from_config(config).await?);
    database.init_schema().await?;

    let state = AppState {
        database,
        analyzer: SentimentAnalyzer::new(),
        min_entry_chars: config.min_entry_chars(),
    };

    // Build API routes
    let api_router = routes::api_routes(state);

    let mut app = Router::new().nest("/api", api_router);

    // Add middleware layers
    app = app
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    // Add CORS if enabled
    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Start server
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("");
    info!("Available endpoints:");
    info!("  GET  /api/health                           - Health check");
    info!("  POST /api/submit                           - Submit a journal entry");
    info!("  GET  /api/stats/:country/:date             - Daily statistics");
    info!("  GET  /api/stats/:country/month/:year_month - Monthly statistics");
    info!("  GET  /api/countries                        - List countries");

    axum::serve(listener, app).await?;

    Ok(())
}
