//! # Post Submission Coordinator
//!
//! Runs the two-step find-or-create-community-then-create-post protocol.
//! The two steps are independent network round trips with no server-side
//! transaction or mutual exclusion around them:
//!
//! * two concurrent submissions naming the same new topic can both observe
//!   "no match" and both create a community, duplicating the topic;
//! * a community created in step two persists even when the post insert
//!   then fails (no compensating delete).
//!
//! Both gaps are intentional, documented behavior, pinned by integration
//! tests so an accidental silent fix is caught.

use std::sync::Arc;

use lb_core::error::{AppError, Result};
use lb_core::models::Post;
use lb_core::traits::{DataService, IdentityProvider};
use uuid::Uuid;

use crate::feed::PostFeed;
use crate::form::{Draft, FormState, FormStore};

pub struct SubmissionService {
    data: Arc<dyn DataService>,
    identity: Arc<dyn IdentityProvider>,
    /// Set when posting from inside a community page; the draft's topic
    /// field is ignored in that mode.
    fixed_topic: Option<String>,
    form: FormStore,
    feed: PostFeed,
}

impl SubmissionService {
    pub fn new(
        data: Arc<dyn DataService>,
        identity: Arc<dyn IdentityProvider>,
        fixed_topic: Option<String>,
    ) -> Self {
        let feed = PostFeed::new(data.clone());
        Self {
            data,
            identity,
            fixed_topic,
            form: FormStore::new(),
            feed,
        }
    }

    pub fn form(&mut self) -> &mut FormStore {
        &mut self.form
    }

    pub fn form_state(&self) -> FormState {
        self.form.snapshot()
    }

    pub fn feed(&self) -> &PostFeed {
        &self.feed
    }

    /// Submits the current draft. Local guards, in order, each before any
    /// network call: a draft with a non-empty title must exist, a user must
    /// be signed in, and a target topic must resolve. Then:
    ///
    /// 1. exact-match existence check for the topic;
    /// 2. reuse the first match, or create the community when none;
    /// 3. create the post against the resolved community id.
    ///
    /// Success clears the form and refreshes the feed; any transport
    /// failure collapses into one generic outcome and hands the draft back.
    pub async fn submit(&mut self) -> Result<Post> {
        let draft = match self.form.snapshot() {
            FormState::Drafting(draft) if !draft.title.is_empty() => draft,
            _ => return Err(AppError::MissingTitle),
        };
        let session = self.identity.current_user().ok_or(AppError::Unauthenticated)?;
        let topic = self
            .fixed_topic
            .clone()
            .or_else(|| draft.topic.clone())
            .ok_or(AppError::MissingTopic)?;

        self.form.begin_submit();
        let outcome = self.create_post(&draft, &topic, &session.name).await;
        self.form.resolve_submit(outcome.is_ok());

        let post = outcome?;
        // The post exists server-side at this point; a failed feed refresh
        // only leaves the local list stale.
        if let Err(err) = self.feed.refresh().await {
            tracing::warn!(error = %err, "feed refresh failed after submission");
        }
        Ok(post)
    }

    async fn create_post(&self, draft: &Draft, topic: &str, username: &str) -> Result<Post> {
        let community_id = self.resolve_community(topic).await?;

        let post = self
            .data
            .insert_post(
                &draft.title,
                draft.body.as_deref(),
                draft.image.as_deref(),
                community_id,
                username,
            )
            .await
            .map_err(|err| {
                // The community from step two may now be an orphan; no
                // compensating delete is attempted.
                tracing::warn!(topic, error = %err, "post creation failed");
                AppError::Transport(err)
            })?;

        tracing::info!(post_id = %post.id, topic, "post created");
        Ok(post)
    }

    /// Step one and two of the protocol: existence check, then branch.
    /// Not atomic — see the module docs for the duplicate-topic race.
    async fn resolve_community(&self, topic: &str) -> Result<Uuid> {
        let matches = self
            .data
            .get_community_by_topic(topic)
            .await
            .map_err(|err| {
                tracing::warn!(topic, error = %err, "community lookup failed");
                AppError::Transport(err)
            })?;

        if let Some(existing) = matches.first() {
            tracing::debug!(topic, community_id = %existing.id, "reusing community");
            return Ok(existing.id);
        }

        let community = self.data.insert_community(topic).await.map_err(|err| {
            tracing::warn!(topic, error = %err, "community creation failed");
            AppError::Transport(err)
        })?;
        tracing::info!(topic, community_id = %community.id, "community created");
        Ok(community.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lb_core::models::{Community, UserSession};
    use lb_core::traits::{MockDataService, MockIdentityProvider};
    use mockall::predicate::eq;

    fn signed_in(name: &'static str) -> MockIdentityProvider {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().returning(move || {
            Some(UserSession {
                name: name.to_string(),
            })
        });
        identity
    }

    fn community(topic: &str) -> Community {
        Community {
            id: Uuid::now_v7(),
            topic: topic.to_string(),
            created_at: Utc::now(),
        }
    }

    fn post(title: &str, community_id: Uuid, username: &str) -> Post {
        Post {
            id: Uuid::now_v7(),
            title: title.to_string(),
            body: None,
            image: None,
            username: username.to_string(),
            created_at: Utc::now(),
            community_id,
            comment_count: 0,
        }
    }

    fn drafted(service: &mut SubmissionService, title: &str, topic: Option<&str>) {
        service.form().set_title(title);
        if let Some(topic) = topic {
            service.form().set_topic(topic);
        }
    }

    #[tokio::test]
    async fn fresh_topic_creates_community_then_post() {
        let fresh = community("NextJS");
        let community_id = fresh.id;

        let mut data = MockDataService::new();
        data.expect_get_community_by_topic()
            .with(eq("NextJS"))
            .times(1)
            .returning(|_| Ok(vec![]));
        data.expect_insert_community()
            .with(eq("NextJS"))
            .times(1)
            .returning(move |_| Ok(fresh.clone()));
        data.expect_insert_post()
            .withf(move |title, _, _, id, username| {
                title == "hello" && *id == community_id && username == "alice"
            })
            .times(1)
            .returning(|title, _, _, community_id, username| {
                Ok(post(title, community_id, username))
            });
        data.expect_get_post_list().returning(|| Ok(vec![]));

        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", Some("NextJS"));

        let created = service.submit().await.unwrap();
        assert_eq!(created.community_id, community_id);
        assert_eq!(service.form_state(), FormState::Idle);
    }

    #[tokio::test]
    async fn existing_topic_reuses_the_first_match() {
        let existing = community("rust");
        let community_id = existing.id;

        let mut data = MockDataService::new();
        data.expect_get_community_by_topic()
            .with(eq("rust"))
            .times(1)
            .returning(move |_| Ok(vec![existing.clone()]));
        data.expect_insert_community().times(0);
        data.expect_insert_post()
            .withf(move |_, _, _, id, _| *id == community_id)
            .times(1)
            .returning(|title, _, _, community_id, username| {
                Ok(post(title, community_id, username))
            });
        data.expect_get_post_list().returning(|| Ok(vec![]));

        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", Some("rust"));

        service.submit().await.unwrap();
    }

    #[tokio::test]
    async fn fixed_topic_overrides_the_draft() {
        let home = community("home");
        let home_id = home.id;

        let mut data = MockDataService::new();
        data.expect_get_community_by_topic()
            .with(eq("home"))
            .times(1)
            .returning(move |_| Ok(vec![home.clone()]));
        data.expect_insert_post()
            .withf(move |_, _, _, id, _| *id == home_id)
            .times(1)
            .returning(|title, _, _, community_id, username| {
                Ok(post(title, community_id, username))
            });
        data.expect_get_post_list().returning(|| Ok(vec![]));

        let mut service = SubmissionService::new(
            Arc::new(data),
            Arc::new(signed_in("alice")),
            Some("home".to_string()),
        );
        drafted(&mut service, "hello", Some("ignored"));

        service.submit().await.unwrap();
    }

    #[tokio::test]
    async fn any_step_failure_collapses_and_keeps_the_draft() {
        let mut data = MockDataService::new();
        data.expect_get_community_by_topic()
            .returning(|_| Err(anyhow::anyhow!("503")));

        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", Some("rust"));

        let err = service.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
        // Failure -> Drafting, draft retained for another try
        match service.form_state() {
            FormState::Drafting(draft) => assert_eq!(draft.title, "hello"),
            state => panic!("expected Drafting, got {state:?}"),
        }
    }

    #[tokio::test]
    async fn post_failure_leaves_the_created_community_behind() {
        let fresh = community("rust");

        let mut data = MockDataService::new();
        data.expect_get_community_by_topic().returning(|_| Ok(vec![]));
        data.expect_insert_community()
            .times(1)
            .returning(move |_| Ok(fresh.clone()));
        data.expect_insert_post()
            .times(1)
            .returning(|_, _, _, _, _| Err(anyhow::anyhow!("timeout")));

        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", Some("rust"));

        // One generic failure; the community write is not rolled back
        // (insert_community's times(1) above is the orphan evidence).
        let err = service.submit().await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }

    #[tokio::test]
    async fn local_guards_short_circuit_before_any_network_call() {
        // Missing title: Idle form
        let data = MockDataService::new();
        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        assert!(matches!(
            service.submit().await.unwrap_err(),
            AppError::MissingTitle
        ));

        // No session
        let data = MockDataService::new();
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().returning(|| None);
        let mut service = SubmissionService::new(Arc::new(data), Arc::new(identity), None);
        drafted(&mut service, "hello", Some("rust"));
        assert!(matches!(
            service.submit().await.unwrap_err(),
            AppError::Unauthenticated
        ));

        // No topic anywhere
        let data = MockDataService::new();
        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", None);
        assert!(matches!(
            service.submit().await.unwrap_err(),
            AppError::MissingTopic
        ));
    }

    #[tokio::test]
    async fn feed_refresh_failure_does_not_fail_the_submission() {
        let existing = community("rust");

        let mut data = MockDataService::new();
        data.expect_get_community_by_topic()
            .returning(move |_| Ok(vec![existing.clone()]));
        data.expect_insert_post()
            .returning(|title, _, _, community_id, username| {
                Ok(post(title, community_id, username))
            });
        data.expect_get_post_list()
            .returning(|| Err(anyhow::anyhow!("flaky")));

        let mut service =
            SubmissionService::new(Arc::new(data), Arc::new(signed_in("alice")), None);
        drafted(&mut service, "hello", Some("rust"));

        service.submit().await.unwrap();
        assert_eq!(service.form_state(), FormState::Idle);
        assert!(service.feed().snapshot().is_empty());
    }
}
