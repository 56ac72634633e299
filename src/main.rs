use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use clinic_core::{
    ClinicServices, ClinicStore, CoreConfig, max_items_per_page_from_env_value,
    seed_file_from_env_value,
};

/// Main entry point for the clinic administration server
///
/// Resolves configuration once, optionally preloads the store from a YAML seed file, then
/// serves the REST API (with OpenAPI/Swagger UI) until the process is stopped.
///
/// # Environment Variables
/// - `CLINIC_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CLINIC_SEED_FILE`: optional YAML seed file loaded at startup
/// - `CLINIC_MAX_ITEMS_PER_PAGE`: page-size cap for list endpoints (default: 100)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration or seed file is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CLINIC_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let max_items_per_page =
        max_items_per_page_from_env_value(std::env::var("CLINIC_MAX_ITEMS_PER_PAGE").ok())?;
    let seed_file = seed_file_from_env_value(std::env::var("CLINIC_SEED_FILE").ok());
    let cfg = CoreConfig::new(max_items_per_page, seed_file)?;

    let store = ClinicStore::from_config(&cfg)?;
    let services = ClinicServices::new(Arc::new(cfg), Arc::new(store));
    let app = api_rest::router(AppState::new(services));

    tracing::info!("++ Starting clinic REST API on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
