//! In-memory store. All mutable state for the process lives here; nothing
//! survives a restart. Uniqueness checks (user email, one rating per
//! ticket) run under the same write guard as the insert, so two racing
//! writers cannot both pass the duplicate scan.

pub mod seed;

use crate::domain::models::{Agent, Rating, Ticket, User};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("This ticket has already been rated")]
    DuplicateTicket,
    #[error("Rating must be between 1 and 5")]
    ScoreOutOfRange,
    #[error("Ticket id is required")]
    MissingTicket,
}

/// Input for a rating insert. The identifier and timestamp are assigned
/// by the store.
#[derive(Clone, Debug)]
pub struct NewRating {
    pub ticket_id: Option<String>,
    pub customer_id: String,
    pub rating: u8,
    pub feedback: Option<String>,
    pub agent_id: String,
    pub agent_name: String,
}

struct RatingTable {
    rows: Vec<Rating>,
    next_id: u64,
}

pub struct Store {
    users: RwLock<Vec<User>>,
    ratings: RwLock<RatingTable>,
    agents: Vec<Agent>,
    tickets: Vec<Ticket>,
}

impl Store {
    pub fn new(users: Vec<User>, agents: Vec<Agent>, tickets: Vec<Ticket>) -> Self {
        Self {
            users: RwLock::new(users),
            ratings: RwLock::new(RatingTable {
                rows: Vec::new(),
                next_id: 1,
            }),
            agents,
            tickets,
        }
    }

    /// Append a user, failing if the email is already taken. The scan and
    /// the push happen under one write guard.
    pub async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.push(user);
        Ok(())
    }

    pub async fn find_user_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.email == email).cloned()
    }

    pub async fn find_user_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Validate and append a rating. Fails when the ticket id is absent,
    /// the score is outside 1..=5, or the ticket was already rated.
    pub async fn insert_rating(&self, new: NewRating) -> Result<Rating, StoreError> {
        let ticket_id = match new.ticket_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => return Err(StoreError::MissingTicket),
        };
        if !(1..=5).contains(&new.rating) {
            return Err(StoreError::ScoreOutOfRange);
        }

        let mut table = self.ratings.write().await;
        if table.rows.iter().any(|r| r.ticket_id == ticket_id) {
            return Err(StoreError::DuplicateTicket);
        }

        let rating = Rating {
            id: table.next_id,
            ticket_id,
            customer_id: new.customer_id,
            rating: new.rating,
            feedback: new.feedback,
            agent_id: new.agent_id,
            agent_name: new.agent_name,
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.rows.push(rating.clone());
        Ok(rating)
    }

    /// All ratings, newest first.
    pub async fn ratings(&self) -> Vec<Rating> {
        let table = self.ratings.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    pub async fn ratings_for_agent(&self, agent_id: &str) -> Vec<Rating> {
        let table = self.ratings.read().await;
        table
            .rows
            .iter()
            .filter(|r| r.agent_id == agent_id)
            .cloned()
            .collect()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::UserRole;

    fn bare_store() -> Store {
        Store::new(Vec::new(), Vec::new(), Vec::new())
    }

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: "0712345678".to_string(),
            hash: "not-a-real-hash".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }

    fn rating_for(ticket: &str, score: u8) -> NewRating {
        NewRating {
            ticket_id: Some(ticket.to_string()),
            customer_id: "c-1".to_string(),
            rating: score,
            feedback: None,
            agent_id: "a-1".to_string(),
            agent_name: "Maya Chen".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = bare_store();
        store.insert_user(user("dup@jellycat.com")).await.unwrap();
        let err = store.insert_user(user("dup@jellycat.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn one_rating_per_ticket() {
        let store = bare_store();
        assert!(store.insert_rating(rating_for("t-9", 4)).await.is_ok());
        let err = store.insert_rating(rating_for("t-9", 5)).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateTicket));
    }

    #[tokio::test]
    async fn every_valid_score_is_accepted_once() {
        let store = bare_store();
        for score in 1..=5u8 {
            let ticket = format!("t-{score}");
            let new = rating_for(&ticket, score);
            store.insert_rating(new.clone()).await.unwrap();
            assert!(matches!(
                store.insert_rating(new).await,
                Err(StoreError::DuplicateTicket)
            ));
        }
    }

    #[tokio::test]
    async fn score_out_of_range_is_rejected() {
        let store = bare_store();
        for score in [0u8, 6, 200] {
            let err = store.insert_rating(rating_for("t-1", score)).await.unwrap_err();
            assert!(matches!(err, StoreError::ScoreOutOfRange));
        }
    }

    #[tokio::test]
    async fn missing_ticket_id_is_rejected() {
        let store = bare_store();
        let mut new = rating_for("", 3);
        assert!(matches!(
            store.insert_rating(new.clone()).await,
            Err(StoreError::MissingTicket)
        ));
        new.ticket_id = None;
        assert!(matches!(
            store.insert_rating(new).await,
            Err(StoreError::MissingTicket)
        ));
    }

    #[tokio::test]
    async fn rating_ids_are_sequential() {
        let store = bare_store();
        let first = store.insert_rating(rating_for("t-1", 5)).await.unwrap();
        let second = store.insert_rating(rating_for("t-2", 3)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn concurrent_ratings_for_same_ticket_land_once() {
        let store = std::sync::Arc::new(bare_store());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert_rating(rating_for("t-race", 5)).await.is_ok()
            }));
        }
        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.ratings().await.len(), 1);
    }
}
