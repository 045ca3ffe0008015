//! # Core Traits (Ports)
//!
//! Any data-service or identity plugin must implement these traits to be
//! used by the client. Each `DataService` method is one independent network
//! round trip that may fail; there is no transaction spanning two calls.

use async_trait::async_trait;
use crate::models::{Community, Post, UserSession, Vote};
use uuid::Uuid;

/// Remote data-service contract, transport-agnostic.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DataService: Send + Sync {
    // Vote operations
    /// Returns the full ledger for a post, most recent entry first.
    async fn get_votes_by_post_id(&self, post_id: Uuid) -> anyhow::Result<Vec<Vote>>;
    /// Appends a vote entry; prior entries for the same user are kept.
    async fn add_vote(&self, post_id: Uuid, username: &str, upvote: bool) -> anyhow::Result<Vote>;

    // Community operations
    /// Exact-match lookup; zero or more rows (duplicates are possible).
    async fn get_community_by_topic(&self, topic: &str) -> anyhow::Result<Vec<Community>>;
    async fn insert_community(&self, topic: &str) -> anyhow::Result<Community>;

    // Post operations
    /// Id, timestamp and comment count are generated server-side.
    async fn insert_post<'a>(
        &self,
        title: &str,
        body: Option<&'a str>,
        image: Option<&'a str>,
        community_id: Uuid,
        username: &str,
    ) -> anyhow::Result<Post>;
    async fn get_post_list(&self) -> anyhow::Result<Vec<Post>>;
}

/// Identity contract. Session management is external; the core only asks
/// who, if anyone, is signed in right now.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserSession>;
}
