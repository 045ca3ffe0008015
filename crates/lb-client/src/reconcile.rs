//! # Vote Reconciliation Engine
//!
//! Pure derivation of (my current vote, displayed tally) from one post's
//! ledger snapshot. The ledger arrives most-recent-first and is never
//! mutated here.

use lb_core::models::Vote;

/// What the UI shows for one post's vote column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteView {
    /// The authoritative direction for the current user: the most recent
    /// ledger entry they wrote. `None` when they never voted or nobody is
    /// signed in.
    pub current_user_vote: Option<bool>,
    pub tally: i64,
}

/// Derives the vote view from a most-recent-first ledger snapshot.
///
/// The tally folds the whole ledger (+1 per upvote, -1 per downvote), with
/// one twist: a non-empty ledger never displays 0. When the fold lands on
/// exactly 0, the tally takes the direction of the most recent entry
/// (+1 or -1) instead. An empty ledger is the only way to see 0.
pub fn reconcile(ledger: &[Vote], current_user: Option<&str>) -> VoteView {
    let current_user_vote = current_user.and_then(|name| {
        ledger
            .iter()
            .find(|vote| vote.username == name)
            .map(|vote| vote.upvote)
    });

    let net: i64 = ledger
        .iter()
        .map(|vote| if vote.upvote { 1 } else { -1 })
        .sum();

    let tally = match (net, ledger.first()) {
        (_, None) => 0,
        // Balanced ledger: side with the most recent entry, never show 0
        (0, Some(latest)) => {
            if latest.upvote {
                1
            } else {
                -1
            }
        }
        (net, _) => net,
    };

    VoteView {
        current_user_vote,
        tally,
    }
}
