mod domain;
mod services;
mod state;
mod store;
mod web;

use crate::services::rating::RatingService;
use crate::state::{AppState, SharedState};
use rand::RngCore;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = Arc::new(store::seed::build()?);
    tracing::info!(
        "Seeded {} users, {} agents, {} tickets",
        store.user_count().await,
        store.agents().len(),
        store.tickets().len()
    );

    let session_key = match std::env::var("SESSION_KEY") {
        Ok(key) => key.into_bytes(),
        Err(_) => {
            // All state is process-lifetime, so an ephemeral key only
            // invalidates tokens across restarts.
            tracing::warn!("SESSION_KEY not set, using an ephemeral key");
            let mut key = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut key);
            key
        }
    };

    let shared: SharedState = Arc::new(AppState {
        ratings: RatingService::new(store.clone()),
        store,
        session_key,
    });

    let app = web::routes(shared)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        format!("0.0.0.0:{}", port)
    });
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
