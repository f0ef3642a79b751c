use crate::domain::models::{
    DashboardSnapshot, SummaryMetrics, TicketDistribution, TicketStatus,
};
use crate::state::SharedState;
use crate::store::Store;
use crate::web::session::UserSession;
use axum::{extract::State, routing::get, Json, Router};

pub fn router(state: SharedState) -> Router {
    Router::new().route("/", get(get_snapshot)).with_state(state)
}

async fn get_snapshot(
    UserSession(_claims): UserSession,
    State(state): State<SharedState>,
) -> Json<DashboardSnapshot> {
    Json(snapshot(&state.store))
}

/// Build the aggregate payload from seed data. The inputs never change
/// after boot, so every request sees the same snapshot.
pub fn snapshot(store: &Store) -> DashboardSnapshot {
    let tickets = store.tickets();

    let mut distribution = TicketDistribution {
        open: 0,
        pending: 0,
        resolved: 0,
    };
    let mut total_wait: u32 = 0;
    for ticket in tickets {
        total_wait += ticket.wait_minutes;
        match ticket.status {
            TicketStatus::Open => distribution.open += 1,
            TicketStatus::Pending => distribution.pending += 1,
            TicketStatus::Resolved => distribution.resolved += 1,
        }
    }

    let total = tickets.len() as u32;
    let summary = SummaryMetrics {
        total_tickets: total,
        open_tickets: distribution.open,
        resolved_tickets: distribution.resolved,
        avg_wait_minutes: if total == 0 { 0 } else { total_wait / total },
    };

    DashboardSnapshot {
        agents: store.agents().to_vec(),
        summary,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::testutil;

    #[tokio::test]
    async fn snapshot_is_identical_on_every_request() {
        let state = testutil::state();
        let first = snapshot(&state.store);
        let second = snapshot(&state.store);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.agents.len(), second.agents.len());
    }

    #[tokio::test]
    async fn distribution_adds_up_to_total() {
        let state = testutil::state();
        let snap = snapshot(&state.store);
        let bucket_sum =
            snap.distribution.open + snap.distribution.pending + snap.distribution.resolved;
        assert_eq!(bucket_sum, snap.summary.total_tickets);
        assert!(snap.summary.total_tickets > 0);
        assert!(!snap.agents.is_empty());
    }
}
