//! TTL response cache storage.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use lru::LruCache;
use metrics::counter;

use crate::domain::entities::{EntryRecord, UserRecord};

use super::config::CacheTuning;
use super::lock::rw_write;

/// Payload stored for a cached list response. Collections go in already
/// enriched, so a hit is returned to the store unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    Entries(Vec<EntryRecord>),
    Users(Vec<UserRecord>),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    payload: CachedPayload,
    stored_at: Instant,
}

/// String-keyed response cache with TTL expiry and fragment invalidation.
///
/// Single-writer access pattern (one store action completes before the
/// next begins), so a plain `RwLock` suffices; no async locking.
pub struct ResponseCache {
    entries: RwLock<LruCache<String, CacheEntry>>,
    ttl: Duration,
    enabled: bool,
}

impl ResponseCache {
    pub fn new(tuning: &CacheTuning) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(tuning.capacity_non_zero())),
            ttl: tuning.ttl,
            enabled: tuning.enabled,
        }
    }

    /// Fresh payload for `key`, or `None`. An entry past its TTL is
    /// evicted on lookup and reported as a miss.
    pub fn get(&self, key: &str) -> Option<CachedPayload> {
        if !self.enabled {
            return None;
        }
        let mut entries = rw_write(&self.entries, "cache.get");
        let lookup = entries.get(key).map(|entry| {
            if entry.stored_at.elapsed() < self.ttl {
                Some(entry.payload.clone())
            } else {
                None
            }
        });
        match lookup {
            Some(Some(payload)) => {
                counter!("plancia_cache_hit_total").increment(1);
                Some(payload)
            }
            Some(None) => {
                entries.pop(key);
                counter!("plancia_cache_expired_total").increment(1);
                counter!("plancia_cache_miss_total").increment(1);
                None
            }
            None => {
                counter!("plancia_cache_miss_total").increment(1);
                None
            }
        }
    }

    /// Store `payload` under `key` with the current timestamp, replacing
    /// any prior entry.
    pub fn set(&self, key: impl Into<String>, payload: CachedPayload) {
        if !self.enabled {
            return;
        }
        rw_write(&self.entries, "cache.set").put(
            key.into(),
            CacheEntry {
                payload,
                stored_at: Instant::now(),
            },
        );
    }

    /// Remove every entry whose key contains `fragment`; with `None`,
    /// clear everything.
    pub fn invalidate(&self, fragment: Option<&str>) {
        let mut entries = rw_write(&self.entries, "cache.invalidate");
        match fragment {
            Some(fragment) => {
                let doomed: Vec<String> = entries
                    .iter()
                    .filter(|(key, _)| key.contains(fragment))
                    .map(|(key, _)| key.clone())
                    .collect();
                counter!("plancia_cache_invalidated_total").increment(doomed.len() as u64);
                for key in doomed {
                    entries.pop(&key);
                }
            }
            None => {
                counter!("plancia_cache_invalidated_total").increment(entries.len() as u64);
                entries.clear();
            }
        }
    }

    pub fn len(&self) -> usize {
        rw_write(&self.entries, "cache.len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
