// --- File: crates/linebook_booking/src/store.rs ---
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::models::BookingDraft;

/// In-memory pending drafts, at most one per sender.
///
/// Reads and writes are individually atomic. Read-modify-write sequences
/// (parse then set, get then dispatch then clear) must hold the guard
/// returned by [`PendingBookings::lock_sender`] for that sender.
#[derive(Debug, Default)]
pub struct PendingBookings {
    drafts: Mutex<HashMap<String, BookingDraft>>,
    sender_locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl PendingBookings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `draft` for `sender_id`, returning the draft it replaced.
    pub fn set(&self, sender_id: &str, draft: BookingDraft) -> Option<BookingDraft> {
        lock(&self.drafts).insert(sender_id.to_string(), draft)
    }

    pub fn get(&self, sender_id: &str) -> Option<BookingDraft> {
        lock(&self.drafts).get(sender_id).cloned()
    }

    /// Removes the draft for `sender_id`. No-op when there is none.
    pub fn clear(&self, sender_id: &str) -> Option<BookingDraft> {
        lock(&self.drafts).remove(sender_id)
    }

    pub fn len(&self) -> usize {
        lock(&self.drafts).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Waits for exclusive access to `sender_id`. Other senders are not blocked.
    pub async fn lock_sender(&self, sender_id: &str) -> SenderGuard<'_> {
        let sender_lock = lock(&self.sender_locks)
            .entry(sender_id.to_string())
            .or_default()
            .clone();
        let guard = sender_lock.lock_owned().await;
        SenderGuard {
            store: self,
            sender_id: sender_id.to_string(),
            guard: Some(guard),
        }
    }

    /// Senders that currently hold or wait for their lock.
    pub fn active_senders(&self) -> usize {
        lock(&self.sender_locks).len()
    }
}

/// Exclusive access to one sender, released on drop.
///
/// The sender's lock entry is removed once nobody else holds or awaits it.
pub struct SenderGuard<'a> {
    store: &'a PendingBookings,
    sender_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SenderGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        let mut locks = lock(&self.store.sender_locks);
        if locks
            .get(&self.sender_id)
            .is_some_and(|sender_lock| Arc::strong_count(sender_lock) == 1)
        {
            locks.remove(&self.sender_id);
        }
    }
}

// A panic while holding the map cannot leave a half-written entry behind.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
