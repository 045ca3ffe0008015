//! # Notices
//!
//! Presentation mapping kept out of the core operations: services return
//! typed results, the UI layer turns them into user-visible notices here.

use lb_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    VoteRecorded,
    PostCreated,
    SignInRequired,
    AlreadyVoted,
    TitleRequired,
    TopicRequired,
    RequestFailed,
}

impl Notice {
    pub fn for_error(error: &AppError) -> Self {
        match error {
            AppError::Unauthenticated => Notice::SignInRequired,
            AppError::AlreadyVoted => Notice::AlreadyVoted,
            AppError::MissingTitle => Notice::TitleRequired,
            AppError::MissingTopic => Notice::TopicRequired,
            AppError::Transport(_) => Notice::RequestFailed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::VoteRecorded => "Successfully voted!",
            Notice::PostCreated => "New post created!",
            Notice::SignInRequired => "You need to sign in first!",
            Notice::AlreadyVoted => "You already voted!",
            Notice::TitleRequired => "A post title is required",
            Notice::TopicRequired => "A community topic is required",
            Notice::RequestFailed => "Whoops! Something went wrong!",
        }
    }
}
