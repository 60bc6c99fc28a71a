//! Entry (post) resource client.
//!
//! Composes the transport, the response cache, and the enricher. Reads go
//! upstream; mutations are client-simulated — they exist only in store
//! memory, so their job here is shaping the record and dropping the stale
//! list cache.

use std::sync::Arc;

use plancia_api_types::{ApiComment, ApiPost};
use time::OffsetDateTime;
use tracing::debug;

use crate::application::enrich::Enricher;
use crate::application::error::AppError;
use crate::cache::{CachedPayload, ResponseCache, cache_key};
use crate::domain::entities::{AuthorSnapshot, DeleteReceipt, EntryRecord};
use crate::domain::types::EntryStatus;
use crate::domain::validate;
use crate::infra::error::TransportError;
use crate::infra::http::Transport;
use crate::util::text;

const LIST_PATH: &str = "/posts";

/// Fields accepted when creating an entry.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Partial update; `None` leaves the existing field untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub status: Option<EntryStatus>,
    pub tags: Option<Vec<String>>,
}

pub struct EntryService {
    transport: Arc<Transport>,
    cache: Arc<ResponseCache>,
    enricher: Arc<Enricher>,
}

impl EntryService {
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

    /// Full entry collection, served from cache while fresh. A cached
    /// collection is already enriched and returned unchanged.
    pub async fn list(&self) -> Result<Vec<EntryRecord>, AppError> {
        let key = cache_key(LIST_PATH, &[]);
        if let Some(CachedPayload::Entries(cached)) = self.cache.get(&key) {
            debug!(count = cached.len(), "entry list served from cache");
            return Ok(cached);
        }

        let raw: Vec<ApiPost> = self.transport.get_json(LIST_PATH, &[]).await?;
        let now = OffsetDateTime::now_utc();
        let entries: Vec<EntryRecord> = raw
            .into_iter()
            .map(|post| self.enricher.enrich_post(post, now))
            .collect();
        self.cache.set(key, CachedPayload::Entries(entries.clone()));
        Ok(entries)
    }

    /// Direct fetch, never cached. An unknown id surfaces as `NotFound`.
    pub async fn get(&self, id: u64) -> Result<EntryRecord, AppError> {
        let raw: ApiPost = self
            .transport
            .get_json(&format!("{LIST_PATH}/{id}"), &[])
            .await
            .map_err(|err| match err {
                TransportError::Status { status: 404, .. } => AppError::not_found("entry"),
                other => AppError::from(other),
            })?;
        Ok(self.enricher.enrich_post(raw, OffsetDateTime::now_utc()))
    }

    /// Entries authored by one upstream user, uncached.
    pub async fn by_user(&self, user_id: u64) -> Result<Vec<EntryRecord>, AppError> {
        let raw: Vec<ApiPost> = self
            .transport
            .get_json(LIST_PATH, &[("userId", user_id.to_string())])
            .await?;
        let now = OffsetDateTime::now_utc();
        Ok(raw
            .into_iter()
            .map(|post| self.enricher.enrich_post(post, now))
            .collect())
    }

    /// Comments for one entry, raw wire shape, uncached.
    pub async fn comments(&self, post_id: u64) -> Result<Vec<ApiComment>, AppError> {
        Ok(self
            .transport
            .get_json(&format!("{LIST_PATH}/{post_id}/comments"), &[])
            .await?)
    }

    /// Client-simulated create. The id is minted from the current unix
    /// milliseconds; counters start at zero and the status is published.
    /// Invalidates the list cache so the next `list()` refetches.
    pub fn create(&self, draft: EntryDraft) -> Result<EntryRecord, AppError> {
        validate::required(&draft.title, "Title")?;
        validate::required(&draft.body, "Body")?;

        let now = OffsetDateTime::now_utc();
        let record = EntryRecord {
            id: unix_millis_id(now),
            excerpt: text::excerpt(&draft.body),
            title: draft.title,
            body: draft.body,
            user_id: current_user_snapshot().id,
            created_at: now,
            updated_at: now,
            status: EntryStatus::Published,
            views: 0,
            likes: 0,
            tags: draft.tags,
            author: current_user_snapshot(),
        };

        self.cache.invalidate(Some(LIST_PATH));
        Ok(record)
    }

    /// Merge `patch` over `existing`, refresh the update stamp, drop the
    /// stale list cache.
    pub fn update(&self, existing: &EntryRecord, patch: EntryPatch) -> EntryRecord {
        let mut updated = existing.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(body) = patch.body {
            updated.excerpt = text::excerpt(&body);
            updated.body = body;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(tags) = patch.tags {
            updated.tags = tags;
        }
        updated.updated_at = OffsetDateTime::now_utc();

        self.cache.invalidate(Some(LIST_PATH));
        updated
    }

    /// Client-simulated delete: drops the list cache and confirms.
    pub fn delete(&self, id: u64) -> DeleteReceipt {
        self.cache.invalidate(Some(LIST_PATH));
        DeleteReceipt { id, deleted: true }
    }
}

/// Author block attached to client-created entries.
fn current_user_snapshot() -> AuthorSnapshot {
    AuthorSnapshot {
        id: 1,
        name: "Current User".to_string(),
        email: "user@example.com".to_string(),
        avatar: "https://i.pravatar.cc/150?img=1".to_string(),
    }
}

fn unix_millis_id(now: OffsetDateTime) -> u64 {
    (now.unix_timestamp_nanos() / 1_000_000) as u64
}
