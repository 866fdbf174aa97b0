mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = match state::AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "http client init failed");
            std::process::exit(1);
        }
    };

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, api = %config.api_base_url, "thesurvey listening");
    axum::serve(listener, app).await.expect("server failed");
}
