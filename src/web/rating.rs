use crate::domain::models::{Rating, SatisfactionMetrics};
use crate::state::SharedState;
use crate::store::NewRating;
use crate::web::error::ApiError;
use crate::web::session::UserSession;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    #[serde(default)]
    pub ticket_id: Option<String>,
    pub customer_id: String,
    pub rating: u8,
    #[serde(default)]
    pub feedback: Option<String>,
    pub agent_id: String,
    pub agent_name: String,
}

#[derive(Serialize, Debug)]
pub struct SubmitRatingResponse {
    pub success: bool,
    pub rating: Rating,
}

#[derive(Serialize)]
pub struct RatingListResponse {
    pub success: bool,
    pub ratings: Vec<Rating>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRatingsResponse {
    pub success: bool,
    pub agent_id: String,
    pub average: f64,
    pub ratings: Vec<Rating>,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub success: bool,
    pub metrics: SatisfactionMetrics,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", post(submit_rating))
        .route("/", get(list_ratings))
        .route("/agent/:id", get(agent_ratings))
        .route("/metrics", get(satisfaction_metrics))
        .with_state(state)
}

async fn submit_rating(
    UserSession(_claims): UserSession,
    State(state): State<SharedState>,
    Json(payload): Json<SubmitRatingRequest>,
) -> Result<(StatusCode, Json<SubmitRatingResponse>), ApiError> {
    let rating = state
        .ratings
        .submit(NewRating {
            ticket_id: payload.ticket_id,
            customer_id: payload.customer_id,
            rating: payload.rating,
            feedback: payload.feedback,
            agent_id: payload.agent_id,
            agent_name: payload.agent_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitRatingResponse {
            success: true,
            rating,
        }),
    ))
}

async fn list_ratings(
    UserSession(_claims): UserSession,
    State(state): State<SharedState>,
) -> Json<RatingListResponse> {
    Json(RatingListResponse {
        success: true,
        ratings: state.ratings.all().await,
    })
}

async fn agent_ratings(
    UserSession(_claims): UserSession,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<AgentRatingsResponse> {
    let average = state.ratings.average_for_agent(&id).await;
    let ratings = state.ratings.for_agent(&id).await;
    Json(AgentRatingsResponse {
        success: true,
        agent_id: id,
        average,
        ratings,
    })
}

async fn satisfaction_metrics(
    UserSession(_claims): UserSession,
    State(state): State<SharedState>,
) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        success: true,
        metrics: state.ratings.satisfaction_metrics().await,
    })
}
