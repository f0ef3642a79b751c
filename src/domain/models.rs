use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Full user record as held by the store. Never serialized directly;
/// API responses go through [`PublicUser`].
#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// User shape returned by login/signup: credential material stripped.
#[derive(Clone, Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
        }
    }
}

/// A customer's evaluation of a single ticket's handling, scored 1-5.
/// At most one rating exists per ticket.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: u64,
    pub ticket_id: String,
    pub customer_id: String,
    pub rating: u8,
    pub feedback: Option<String>,
    pub agent_id: String,
    pub agent_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Available,
    Busy,
    Offline,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub active_tickets: u32,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub requester: String,
    pub priority: TicketPriority,
    pub wait_minutes: u32,
    pub status: TicketStatus,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_tickets: u32,
    pub open_tickets: u32,
    pub resolved_tickets: u32,
    pub avg_wait_minutes: u32,
}

/// Ticket counts bucketed by status.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TicketDistribution {
    pub open: u32,
    pub pending: u32,
    pub resolved: u32,
}

/// The aggregate dashboard payload. Built from seed data only, so it is
/// identical on every request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub agents: Vec<Agent>,
    pub summary: SummaryMetrics,
    pub distribution: TicketDistribution,
}

/// Count of ratings per score bucket.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ScoreDistribution {
    #[serde(rename = "1")]
    pub one: u64,
    #[serde(rename = "2")]
    pub two: u64,
    #[serde(rename = "3")]
    pub three: u64,
    #[serde(rename = "4")]
    pub four: u64,
    #[serde(rename = "5")]
    pub five: u64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionMetrics {
    pub average: f64,
    pub total_responses: u64,
    pub distribution: ScoreDistribution,
}
