//! # Vote Ledger Cache
//!
//! Per-post cache of the remote vote ledger, keyed by post id. The cache
//! exclusively owns each in-memory sequence; readers get clone snapshots.
//! It is local and eventually stale — staleness is resolved only by an
//! explicit refetch after a successful mutation.

use dashmap::DashMap;
use lb_core::models::Vote;
use uuid::Uuid;

#[derive(Default)]
pub struct VoteLedgerCache {
    ledgers: DashMap<Uuid, Vec<Vote>>,
}

impl VoteLedgerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly fetched ledger (most recent entry first).
    pub fn replace(&self, post_id: Uuid, votes: Vec<Vote>) {
        tracing::debug!(%post_id, entries = votes.len(), "ledger cache replace");
        self.ledgers.insert(post_id, votes);
    }

    /// Clone snapshot of the cached ledger; empty if never fetched.
    pub fn snapshot(&self, post_id: Uuid) -> Vec<Vote> {
        self.ledgers
            .get(&post_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Drops the cached ledger so the next read starts from nothing.
    pub fn invalidate(&self, post_id: Uuid) {
        self.ledgers.remove(&post_id);
    }
}
