mod error;
mod guard;
mod routes;
mod session;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = gateway::GatewayConfig::from_env();
    tracing::info!(backend = %config.base_url, "commerce backend configured");

    let api = gateway::MedusaGateway::new(&config).expect("http client init failed");
    let state = state::AppState::new(Arc::new(api), session::SessionStore::new());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storeboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
