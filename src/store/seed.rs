//! Hardcoded sample data. The store starts from this on every boot;
//! nothing is persisted between runs.

use crate::domain::models::{
    Agent, AgentStatus, Ticket, TicketPriority, TicketStatus, User, UserRole,
};
use crate::store::Store;
use anyhow::Result;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

struct SeedUser<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    password: &'a str,
    role: UserRole,
}

pub fn build() -> Result<Store> {
    Ok(Store::new(seed_users()?, seed_agents(), seed_tickets()))
}

fn seed_users() -> Result<Vec<User>> {
    let seeds = vec![
        SeedUser {
            name: "Admin",
            email: "admin@jellycat.com",
            phone: "0700000000",
            password: "admin123",
            role: UserRole::Admin,
        },
        SeedUser {
            name: "Priya Raman",
            email: "priya.raman@gmail.com",
            phone: "0734567890",
            password: "Priya123!",
            role: UserRole::User,
        },
        SeedUser {
            name: "Daniel Okoye",
            email: "daniel.okoye@outlook.com",
            phone: "0745678901",
            password: "Daniel99$",
            role: UserRole::User,
        },
    ];

    let argon = Argon2::default();
    let mut users = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let salt = SaltString::generate(rand_core::OsRng);
        let hash = argon
            .hash_password(seed.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash seed password: {}", e))?
            .to_string();
        users.push(User {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            email: seed.email.to_string(),
            phone: seed.phone.to_string(),
            hash,
            role: seed.role,
            created_at: Utc::now(),
        });
    }
    Ok(users)
}

fn seed_agents() -> Vec<Agent> {
    let agents = [
        ("a-1", "Maya Chen", AgentStatus::Available, 2),
        ("a-2", "Liam Patel", AgentStatus::Busy, 4),
        ("a-3", "Grace Kim", AgentStatus::Available, 1),
        ("a-4", "Tom Novak", AgentStatus::Offline, 0),
    ];
    agents
        .into_iter()
        .map(|(id, name, status, active_tickets)| Agent {
            id: id.to_string(),
            name: name.to_string(),
            status,
            active_tickets,
        })
        .collect()
}

fn seed_tickets() -> Vec<Ticket> {
    let tickets = [
        (
            "t-101",
            "Order arrived damaged",
            "Sofia Marques",
            TicketPriority::High,
            12,
            TicketStatus::Open,
        ),
        (
            "t-102",
            "Refund not received",
            "James Whitfield",
            TicketPriority::Urgent,
            45,
            TicketStatus::Open,
        ),
        (
            "t-103",
            "Cannot reset password",
            "Anita Joshi",
            TicketPriority::Medium,
            8,
            TicketStatus::Pending,
        ),
        (
            "t-104",
            "Wrong item shipped",
            "Marcus Bell",
            TicketPriority::Medium,
            30,
            TicketStatus::Pending,
        ),
        (
            "t-105",
            "Question about loyalty points",
            "Elena Petrova",
            TicketPriority::Low,
            5,
            TicketStatus::Resolved,
        ),
        (
            "t-106",
            "Duplicate charge on card",
            "Noah Fischer",
            TicketPriority::High,
            22,
            TicketStatus::Resolved,
        ),
    ];
    tickets
        .into_iter()
        .map(
            |(id, subject, requester, priority, wait_minutes, status)| Ticket {
                id: id.to_string(),
                subject: subject.to_string(),
                requester: requester.to_string(),
                priority,
                wait_minutes,
                status,
            },
        )
        .collect()
}
