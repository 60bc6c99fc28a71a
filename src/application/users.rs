//! User resource client.
//!
//! Read-only: the original console never mutated users upstream, so this
//! service only lists and fetches, with the same cache-then-enrich flow as
//! entries.

use std::sync::Arc;

use plancia_api_types::ApiUser;
use time::OffsetDateTime;
use tracing::debug;

use crate::application::enrich::Enricher;
use crate::application::error::AppError;
use crate::cache::{CachedPayload, ResponseCache, cache_key};
use crate::domain::entities::UserRecord;
use crate::infra::error::TransportError;
use crate::infra::http::Transport;

const LIST_PATH: &str = "/users";

pub struct UserService {
    transport: Arc<Transport>,
    cache: Arc<ResponseCache>,
    enricher: Arc<Enricher>,
}

impl UserService {
    pub fn new(
        transport: Arc<Transport>,
        cache: Arc<ResponseCache>,
        enricher: Arc<Enricher>,
    ) -> Self {
        Self {
            transport,
            cache,
            enricher,
        }
    }

    /// Full user collection, served from cache while fresh.
    pub async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        let key = cache_key(LIST_PATH, &[]);
        if let Some(CachedPayload::Users(cached)) = self.cache.get(&key) {
            debug!(count = cached.len(), "user list served from cache");
            return Ok(cached);
        }

        let raw: Vec<ApiUser> = self.transport.get_json(LIST_PATH, &[]).await?;
        let now = OffsetDateTime::now_utc();
        let users: Vec<UserRecord> = raw
            .into_iter()
            .map(|user| self.enricher.enrich_user(user, now))
            .collect();
        self.cache.set(key, CachedPayload::Users(users.clone()));
        Ok(users)
    }

    /// Direct fetch, never cached. An unknown id surfaces as `NotFound`.
    pub async fn get(&self, id: u64) -> Result<UserRecord, AppError> {
        let raw: ApiUser = self
            .transport
            .get_json(&format!("{LIST_PATH}/{id}"), &[])
            .await
            .map_err(|err| match err {
                TransportError::Status { status: 404, .. } => AppError::not_found("user"),
                other => AppError::from(other),
            })?;
        Ok(self.enricher.enrich_user(raw, OffsetDateTime::now_utc()))
    }
}
