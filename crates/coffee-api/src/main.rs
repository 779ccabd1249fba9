use std::sync::Arc;

use fsnd_coffee::auth::jwt::TokenVerifier;
use fsnd_coffee::config::CoffeeConfig;
use fsnd_coffee::router::build_app_router;
use fsnd_coffee::state::AppState;
use fsnd_db::repositories::DrinkRepo;
use fsnd_http::server::serve;
use fsnd_http::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing("fsnd_coffee=debug,fsnd_db=debug,tower_http=debug");

    // --- Configuration ---
    let config = CoffeeConfig::from_env()?;
    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        audience = ?config.auth.audience,
        "Loaded server configuration",
    );

    // --- Token verification ---
    let verifier = TokenVerifier::from_config(&config.auth).await?;
    tracing::info!("Token verifier ready");

    // --- Database ---
    let pool = fsnd_db::create_pool(&config.server.database_url).await?;
    tracing::info!("Database connection pool created");

    fsnd_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    fsnd_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    if config.reset_drinks_on_start {
        DrinkRepo::reset(&pool).await?;
    }

    // --- Router ---
    let state = AppState {
        pool,
        verifier: Arc::new(verifier),
    };
    let app = build_app_router(state, &config.server);

    serve(app, &config.server).await?;
    Ok(())
}
