use fsnd_http::config::ServerConfig;
use fsnd_http::server::serve;
use fsnd_http::telemetry::init_tracing;
use fsnd_trivia::router::build_app_router;
use fsnd_trivia::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("fsnd_trivia=debug,fsnd_db=debug,tower_http=debug");

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = fsnd_db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    fsnd_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    fsnd_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- Router ---
    let app = build_app_router(AppState { pool }, &config);

    serve(app, &config).await?;
    Ok(())
}
