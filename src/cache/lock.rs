use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

// Locks guard plain state with no cross-lock ordering, so a panic that
// poisoned one leaves the data usable; recover and log instead of
// propagating the poison.

pub(crate) fn rw_read<'a, T>(lock: &'a RwLock<T>, what: &'static str) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned| {
        warn!(what, "recovered poisoned read lock; state may be stale");
        poisoned.into_inner()
    })
}

pub(crate) fn rw_write<'a, T>(lock: &'a RwLock<T>, what: &'static str) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poisoned| {
        warn!(what, "recovered poisoned write lock; state may be stale");
        poisoned.into_inner()
    })
}

pub(crate) fn mutex_lock<'a, T>(lock: &'a Mutex<T>, what: &'static str) -> MutexGuard<'a, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        warn!(what, "recovered poisoned mutex; state may be stale");
        poisoned.into_inner()
    })
}
