//! # lb-data-memory
//!
//! In-memory implementation of `DataService`, modelling the shared remote
//! tables: a per-post vote ledger kept most-recent-first, a community table
//! that happily stores duplicate topics (the remote service enforces no
//! uniqueness), and a post table. Ids are generated v7, timestamps are
//! "server side" (taken at insert).
//!
//! Used by the demo binary and the integration tests; each method is one
//! lock-in, lock-out operation with no await while holding the lock, so a
//! test can interleave calls from several tasks to reproduce the
//! find-or-create race.

use async_trait::async_trait;
use chrono::Utc;
use lb_core::models::{Community, Post, Vote};
use lb_core::traits::DataService;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    /// post_id -> ledger, most recent entry first
    votes: HashMap<Uuid, Vec<Vote>>,
    communities: Vec<Community>,
    posts: Vec<Post>,
}

#[derive(Default)]
pub struct MemoryDataService {
    tables: Mutex<Tables>,
}

impl MemoryDataService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataService for MemoryDataService {
    async fn get_votes_by_post_id(&self, post_id: Uuid) -> anyhow::Result<Vec<Vote>> {
        let tables = self.tables.lock().expect("tables lock poisoned");
        Ok(tables.votes.get(&post_id).cloned().unwrap_or_default())
    }

    async fn add_vote(&self, post_id: Uuid, username: &str, upvote: bool) -> anyhow::Result<Vote> {
        let vote = Vote {
            post_id,
            username: username.to_string(),
            upvote,
            created_at: Utc::now(),
        };
        let mut tables = self.tables.lock().expect("tables lock poisoned");
        // Append-only: newest first, prior entries for the user are kept
        tables
            .votes
            .entry(post_id)
            .or_default()
            .insert(0, vote.clone());
        Ok(vote)
    }

    async fn get_community_by_topic(&self, topic: &str) -> anyhow::Result<Vec<Community>> {
        let tables = self.tables.lock().expect("tables lock poisoned");
        Ok(tables
            .communities
            .iter()
            .filter(|community| community.topic == topic)
            .cloned()
            .collect())
    }

    async fn insert_community(&self, topic: &str) -> anyhow::Result<Community> {
        let community = Community {
            id: Uuid::now_v7(),
            topic: topic.to_string(),
            created_at: Utc::now(),
        };
        let mut tables = self.tables.lock().expect("tables lock poisoned");
        // No uniqueness check: duplicate topics are representable, exactly
        // like the remote service this stands in for
        tables.communities.push(community.clone());
        Ok(community)
    }

    async fn insert_post<'a>(
        &self,
        title: &str,
        body: Option<&'a str>,
        image: Option<&'a str>,
        community_id: Uuid,
        username: &str,
    ) -> anyhow::Result<Post> {
        let post = Post {
            id: Uuid::now_v7(),
            title: title.to_string(),
            body: body.map(str::to_string),
            image: image.map(str::to_string),
            username: username.to_string(),
            created_at: Utc::now(),
            community_id,
            comment_count: 0,
        };
        let mut tables = self.tables.lock().expect("tables lock poisoned");
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn get_post_list(&self) -> anyhow::Result<Vec<Post>> {
        let tables = self.tables.lock().expect("tables lock poisoned");
        Ok(tables.posts.clone())
    }
}
