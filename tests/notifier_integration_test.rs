//! Integration tests for the chat notifier against a mock webhook.
//!
//! Covers the posted payload shape and the logged-not-retried handling
//! of non-success webhook responses.

use std::sync::Arc;

use async_trait::async_trait;
use mockito::{Matcher, Server};

use conveyor::adapters::chat::ChatNotifier;
use conveyor::domain::errors::DomainResult;
use conveyor::domain::models::{BuildDetails, BuildOutcome, NotifierConfig};
use conveyor::domain::ports::{BuildNotifier, BuildSource};

/// Build source stub returning a fixed build and blame list.
struct StubBuilds {
    outcome: BuildOutcome,
    responsible: Vec<String>,
}

#[async_trait]
impl BuildSource for StubBuilds {
    async fn details(&self, build_id: u64) -> DomainResult<BuildDetails> {
        Ok(BuildDetails {
            build_id,
            number: 101,
            url: "https://ci.example.com/#/builders/3/builds/101".to_string(),
            builder_name: Some("linux-x86_64".to_string()),
            variant_name: Some("release".to_string()),
            worker: Some("worker-02".to_string()),
            outcome: self.outcome,
            branch: Some("main".to_string()),
            revision: Some("0123456789abcdef".to_string()),
            got_revision: Some("0123456789abcdef".to_string()),
            repository: Some("git@example.com:acme/platform.git".to_string()),
            repository_url: None,
            project: Some("platform".to_string()),
        })
    }

    async fn responsible_users(&self, _build_id: u64) -> DomainResult<Vec<String>> {
        Ok(self.responsible.clone())
    }
}

fn notifier_for(webhook_url: String, outcome: BuildOutcome, responsible: Vec<String>) -> ChatNotifier {
    let config = NotifierConfig {
        webhook_url,
        username: Some("ci-bot".to_string()),
        icon: Some(":robot_face:".to_string()),
        ..Default::default()
    };
    ChatNotifier::new(config, Arc::new(StubBuilds { outcome, responsible }))
}

#[tokio::test]
async fn test_build_finished_posts_summary_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "mrkdwn": true,
                "username": "ci-bot",
                "icon_emoji": ":robot_face:",
            })),
            Matcher::PartialJson(serde_json::json!({
                "attachments": [{
                    "color": "good",
                    "text": "Build <https://ci.example.com/#/builders/3/builds/101|#101 linux-x86_64 release on worker-02> finished",
                }]
            })),
        ]))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let notifier = notifier_for(
        format!("{}/hook", server.url()),
        BuildOutcome::Success,
        vec!["alice".to_string(), "bob".to_string()],
    );

    notifier.build_finished(7).await.expect("notify should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_build_finished_failure_color() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/hook")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "attachments": [{ "color": "#EE3435" }]
        })))
        .with_status(200)
        .create_async()
        .await;

    let notifier = notifier_for(
        format!("{}/hook", server.url()),
        BuildOutcome::Failure,
        vec![],
    );

    notifier.build_finished(8).await.expect("notify should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_response_is_logged_not_retried() {
    let mut server = Server::new_async().await;
    // Exactly one request: a rejected upload must not be retried.
    let mock = server
        .mock("POST", "/hook")
        .with_status(500)
        .with_body("channel_not_found")
        .expect(1)
        .create_async()
        .await;

    let notifier = notifier_for(
        format!("{}/hook", server.url()),
        BuildOutcome::Success,
        vec![],
    );

    // The call still succeeds; the rejection is only logged.
    notifier.build_finished(9).await.expect("rejection is not an error");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_build_lookup_failure_propagates() {
    struct MissingBuilds;

    #[async_trait]
    impl BuildSource for MissingBuilds {
        async fn details(&self, build_id: u64) -> DomainResult<BuildDetails> {
            Err(conveyor::domain::errors::DomainError::BuildNotFound(build_id))
        }

        async fn responsible_users(&self, _build_id: u64) -> DomainResult<Vec<String>> {
            Ok(vec![])
        }
    }

    let config = NotifierConfig {
        webhook_url: "https://hooks.example.com/unused".to_string(),
        ..Default::default()
    };
    let notifier = ChatNotifier::new(config, Arc::new(MissingBuilds));

    let err = notifier.build_finished(404).await.unwrap_err();
    assert!(matches!(
        err,
        conveyor::domain::errors::DomainError::BuildNotFound(404)
    ));
}
