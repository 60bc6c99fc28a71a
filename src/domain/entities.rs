//! Domain records held by the console store.
//!
//! These are the enriched shapes the UI renders, not the raw wire
//! payloads; see `plancia-api-types` for those.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::types::{EntryStatus, UserRole, UserStatus};

/// Denormalized author block attached to an entry. A snapshot, not a live
/// reference: editing the user later does not rewrite existing entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub status: EntryStatus,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub author: AuthorSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub join_date: OffsetDateTime,
    pub last_login: OffsetDateTime,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub social: SocialLinks,
}

/// Confirmation returned by the client-simulated delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    pub id: u64,
    pub deleted: bool,
}
