//! # Post Feed
//!
//! Cached copy of the remote post list. Refreshed explicitly — on startup
//! and after a successful submission — never implicitly.

use std::sync::{Arc, RwLock};

use lb_core::error::{AppError, Result};
use lb_core::models::Post;
use lb_core::traits::DataService;

pub struct PostFeed {
    data: Arc<dyn DataService>,
    posts: RwLock<Vec<Post>>,
}

impl PostFeed {
    pub fn new(data: Arc<dyn DataService>) -> Self {
        Self {
            data,
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn refresh(&self) -> Result<()> {
        let posts = self
            .data
            .get_post_list()
            .await
            .map_err(AppError::Transport)?;
        tracing::debug!(posts = posts.len(), "post feed refreshed");
        *self.posts.write().expect("feed lock poisoned") = posts;
        Ok(())
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.read().expect("feed lock poisoned").clone()
    }
}
