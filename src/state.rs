use crate::services::rating::RatingService;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub ratings: RatingService,
    pub session_key: Vec<u8>,
}

pub type SharedState = Arc<AppState>;
