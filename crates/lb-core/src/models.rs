//! # Domain Models
//!
//! These structs represent the core entities of Linkboard.
//! We use UUID v7 for time-ordered, globally unique identification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// One entry in a post's append-only vote ledger.
///
/// Several entries may exist for the same (post, user) pair; only the most
/// recent one is authoritative for that user. Entries are never deleted or
/// amended — there is no retraction operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub post_id: Uuid,
    pub username: String,
    /// true = upvote, false = downvote
    pub upvote: bool,
    pub created_at: DateTime<Utc>,
}

/// A submitted link post. Created exactly once; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: Option<String>,
    /// URL of an attached image, if any (hosting is external)
    pub image: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    /// The community this post was attached to
    pub community_id: Uuid,
    pub comment_count: i64,
}

/// A topic community grouping posts.
///
/// Topic uniqueness (case-sensitive) is a target invariant the remote
/// service does not enforce — see the find-or-create race notes in
/// `lb-client::submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    pub id: Uuid,
    pub topic: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user as exposed by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
}
