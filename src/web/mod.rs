pub mod auth;
pub mod dashboard;
pub mod error;
pub mod rating;
pub mod session;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth::router(state.clone()))
        .nest("/api/dashboard", dashboard::router(state.clone()))
        .nest("/api/ratings", rating::router(state))
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::domain::models::UserRole;
    use crate::services::rating::RatingService;
    use crate::state::{AppState, SharedState};
    use crate::store;
    use crate::web::session::{SessionClaims, UserSession};
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    pub(crate) fn state() -> SharedState {
        let store = Arc::new(store::seed::build().expect("seed data builds"));
        Arc::new(AppState {
            ratings: RatingService::new(store.clone()),
            store,
            session_key: b"test-session-key-32-bytes-long!!".to_vec(),
        })
    }

    /// A pre-verified session, for invoking handlers directly.
    pub(crate) fn session() -> UserSession {
        UserSession(SessionClaims {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
            exp: (Utc::now() + chrono::Duration::hours(1)).timestamp(),
        })
    }
}
