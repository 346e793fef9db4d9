use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod config;
mod error;
mod models;
mod routes;

use config::Config;
use error::StartupError;

/// Runs `load_dotenv` before the log filter reads `RUST_LOG`, so a level set
/// in `.env` takes effect.
fn prepare_environment<F>(load_dotenv: F) -> (EnvFilter, Result<(), dotenvy::Error>)
where
    F: FnOnce() -> Result<(), dotenvy::Error>,
{
    let loaded = load_dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    (filter, loaded)
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let (filter, dotenv_result) = prepare_environment(|| dotenvy::dotenv().map(|_| ()));

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting fantasy draft api server...");

    if let Err(err) = dotenv_result {
        tracing::debug!("No .env file loaded: {}", err);
    }

    let config = Config::from_env()
        .inspect_err(|e| tracing::error!("Invalid configuration: {}", e))?;
    let addr = config.addr();

    let app = app::build_router(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_dotenv_file_is_used() {
        let path = std::env::temp_dir().join(format!(
            "fantasy_draft_api_{}.env",
            std::process::id()
        ));
        std::fs::write(&path, "RUST_LOG=fantasy_draft_api=trace\n").unwrap();

        let (filter, loaded) = prepare_environment(|| dotenvy::from_path_override(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(loaded.is_ok());
        assert_eq!(filter.to_string(), "fantasy_draft_api=trace");
    }

    #[test]
    fn missing_dotenv_is_reported_not_fatal() {
        let missing = std::env::temp_dir().join("fantasy_draft_api_missing/.env");

        let (_filter, loaded) = prepare_environment(|| dotenvy::from_path(&missing));

        assert!(loaded.is_err());
    }
}
