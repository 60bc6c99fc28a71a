//! Raw wire types for the public mock REST API.
//!
//! These are the payloads exactly as the upstream service emits them,
//! before the console core enriches them with display fields. Field names
//! follow the upstream camelCase convention via serde renames.

use serde::{Deserialize, Serialize};

/// A post as served by `GET /posts` and `GET /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPost {
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// A user as served by `GET /users` and `GET /users/{id}`.
///
/// Upstream carries more fields (address, phone, company); only the ones
/// the console consumes are mapped, the rest are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// A comment as served by `GET /posts/{id}/comments`. Never enriched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiComment {
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
