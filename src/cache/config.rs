//! Cache tuning.

use std::num::NonZeroUsize;
use std::time::Duration;

const DEFAULT_TTL_SECS: u64 = 5 * 60;
const DEFAULT_CAPACITY: usize = 64;

/// Runtime knobs for the response cache.
#[derive(Debug, Clone)]
pub struct CacheTuning {
    /// When false, every lookup misses and writes are dropped.
    pub enabled: bool,
    /// Validity window for a stored payload.
    pub ttl: Duration,
    /// Maximum cached responses before LRU eviction.
    pub capacity: usize,
}

impl Default for CacheTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl From<&crate::config::CacheSettings> for CacheTuning {
    fn from(settings: &crate::config::CacheSettings) -> Self {
        Self {
            enabled: settings.enabled,
            ttl: Duration::from_secs(settings.ttl_secs),
            capacity: settings.capacity,
        }
    }
}

impl CacheTuning {
    /// Capacity as NonZeroUsize, clamping to 1 if zero.
    pub fn capacity_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_five_minutes() {
        let tuning = CacheTuning::default();
        assert!(tuning.enabled);
        assert_eq!(tuning.ttl, Duration::from_secs(300));
        assert_eq!(tuning.capacity, 64);
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let tuning = CacheTuning {
            capacity: 0,
            ..Default::default()
        };
        assert_eq!(tuning.capacity_non_zero().get(), 1);
    }
}
