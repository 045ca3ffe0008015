//! # Linkboard Demo Binary
//!
//! Wires the client core to the in-memory data service and an env-backed
//! identity, then runs a short scripted session: submit a post, vote on
//! it, trip the already-voted guard, and print the resulting feed.
//! Results map to notices here — the core never prints anything itself.

mod config;

use std::sync::Arc;

use lb_auth_static::StaticIdentityProvider;
use lb_client::{Notice, SubmissionService, VoteService};
use lb_data_memory::MemoryDataService;

use config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    tracing::info!(?settings, "linkboard demo starting");

    // 1. Data service and identity
    let data = Arc::new(MemoryDataService::new());
    let identity: Arc<StaticIdentityProvider> = Arc::new(match settings.username.as_deref() {
        Some(name) => StaticIdentityProvider::signed_in(name),
        None => StaticIdentityProvider::signed_out(),
    });

    // 2. Client services
    let votes = VoteService::new(data.clone(), identity.clone());
    let mut submissions = SubmissionService::new(
        data.clone(),
        identity.clone(),
        settings.home_topic.clone(),
    );
    submissions.form().subscribe(|state| {
        tracing::debug!(?state, "form transition");
    });

    // 3. Draft and submit a post
    submissions.form().set_title("The recency tie-break, explained");
    submissions
        .form()
        .set_body("Why a balanced ledger never shows zero.");
    if settings.home_topic.is_none() {
        submissions.form().set_topic("rust");
    }

    let post = match submissions.submit().await {
        Ok(post) => {
            println!("{}", Notice::PostCreated.message());
            post
        }
        Err(err) => {
            println!("{}", Notice::for_error(&err).message());
            return Ok(());
        }
    };

    // 4. Vote on it, then trip the idempotence guard
    votes.load_ledger(post.id).await?;
    match votes.cast_vote(post.id, true).await {
        Ok(_) => println!("{}", Notice::VoteRecorded.message()),
        Err(err) => println!("{}", Notice::for_error(&err).message()),
    }
    match votes.cast_vote(post.id, true).await {
        Ok(_) => println!("{}", Notice::VoteRecorded.message()),
        Err(err) => println!("{}", Notice::for_error(&err).message()),
    }

    // 5. Show the feed as the client sees it
    for post in submissions.feed().snapshot() {
        let view = votes.view(post.id);
        println!(
            "[{:>3}] {} (by {}, {} comments)",
            view.tally, post.title, post.username, post.comment_count
        );
    }

    Ok(())
}
