//! # Vote Service
//!
//! Ties the ledger cache and the reconciliation engine to the data-service
//! port. Discipline: optimistic write, then refetch to resynchronize truth.

use std::sync::Arc;

use lb_core::error::{AppError, Result};
use lb_core::models::Vote;
use lb_core::traits::{DataService, IdentityProvider};
use uuid::Uuid;

use crate::ledger::VoteLedgerCache;
use crate::reconcile::{reconcile, VoteView};

pub struct VoteService {
    data: Arc<dyn DataService>,
    identity: Arc<dyn IdentityProvider>,
    ledger: VoteLedgerCache,
}

impl VoteService {
    pub fn new(data: Arc<dyn DataService>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            data,
            identity,
            ledger: VoteLedgerCache::new(),
        }
    }

    /// Fetches a post's ledger into the cache. Call once when the post
    /// comes into view and again after every successful mutation.
    pub async fn load_ledger(&self, post_id: Uuid) -> Result<()> {
        let votes = self
            .data
            .get_votes_by_post_id(post_id)
            .await
            .map_err(AppError::Transport)?;
        self.ledger.replace(post_id, votes);
        Ok(())
    }

    /// Derives the displayed vote state from the cached ledger. A post
    /// whose ledger was never loaded reads as unvoted with tally 0.
    pub fn view(&self, post_id: Uuid) -> VoteView {
        let session = self.identity.current_user();
        let snapshot = self.ledger.snapshot(post_id);
        reconcile(&snapshot, session.as_ref().map(|user| user.name.as_str()))
    }

    /// Casts a vote. Guards run in order, each short-circuiting before any
    /// network call:
    ///
    /// 1. no session -> `Unauthenticated`;
    /// 2. same direction as the user's current vote -> `AlreadyVoted`
    ///    (keeps the append-only ledger idempotent per direction);
    /// 3. otherwise write the vote, then refetch the ledger.
    pub async fn cast_vote(&self, post_id: Uuid, upvote: bool) -> Result<Vote> {
        let session = self.identity.current_user().ok_or(AppError::Unauthenticated)?;

        let snapshot = self.ledger.snapshot(post_id);
        let view = reconcile(&snapshot, Some(session.name.as_str()));
        if view.current_user_vote == Some(upvote) {
            tracing::debug!(%post_id, upvote, "redundant vote short-circuited");
            return Err(AppError::AlreadyVoted);
        }

        let vote = self
            .data
            .add_vote(post_id, &session.name, upvote)
            .await
            .map_err(AppError::Transport)?;
        tracing::info!(%post_id, username = %session.name, upvote, "vote recorded");

        // The write appended to the shared ledger; resynchronize our copy.
        self.load_ledger(post_id).await?;
        Ok(vote)
    }
}
