//! Rating aggregation over the in-memory store: one write path and four
//! read paths. Aggregates are computed on demand from the full set.

use crate::domain::models::{Rating, SatisfactionMetrics, ScoreDistribution};
use crate::store::{NewRating, Store, StoreError};
use std::sync::Arc;

#[derive(Clone)]
pub struct RatingService {
    store: Arc<Store>,
}

impl RatingService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Record a rating for a ticket. At most one rating per ticket; the
    /// store enforces this atomically.
    pub async fn submit(&self, new: NewRating) -> Result<Rating, StoreError> {
        let rating = self.store.insert_rating(new).await?;
        tracing::info!(
            "Rating recorded: id={}, ticket={}, agent={}, score={}",
            rating.id,
            rating.ticket_id,
            rating.agent_id,
            rating.rating
        );
        Ok(rating)
    }

    /// All ratings, newest first.
    pub async fn all(&self) -> Vec<Rating> {
        self.store.ratings().await
    }

    pub async fn for_agent(&self, agent_id: &str) -> Vec<Rating> {
        self.store.ratings_for_agent(agent_id).await
    }

    /// Mean score for an agent, rounded to one decimal. 0.0 when the
    /// agent has no ratings.
    pub async fn average_for_agent(&self, agent_id: &str) -> f64 {
        let ratings = self.store.ratings_for_agent(agent_id).await;
        mean_rounded(&ratings)
    }

    /// Score bucket counts and overall mean across the full rating set.
    pub async fn satisfaction_metrics(&self) -> SatisfactionMetrics {
        let ratings = self.store.ratings().await;
        let mut distribution = ScoreDistribution::default();
        for rating in &ratings {
            match rating.rating {
                1 => distribution.one += 1,
                2 => distribution.two += 1,
                3 => distribution.three += 1,
                4 => distribution.four += 1,
                5 => distribution.five += 1,
                // insert_rating rejects anything else
                _ => {}
            }
        }
        SatisfactionMetrics {
            average: mean_rounded(&ratings),
            total_responses: ratings.len() as u64,
            distribution,
        }
    }
}

fn mean_rounded(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(r.rating)).sum();
    let mean = sum as f64 / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}
