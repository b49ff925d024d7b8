#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_url, "proxying /api to backend");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("leptos configuration missing");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "marketplace admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
