//! Chat notifier.
//!
//! Posts a build-completion summary to the configured webhook whenever
//! a build finishes. Extended build details and the responsible-user
//! list come from the host through the [`BuildSource`] port.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BuildDetails, BuildOutcome, NotifierConfig};
use crate::domain::ports::{BuildNotifier, BuildSource};

use super::models::{Attachment, AttachmentField, WebhookPayload};

/// Characters of a revision shown in the short form.
const SHORT_REVISION_LEN: usize = 8;

/// Adapter that posts build summaries to a chat webhook.
pub struct ChatNotifier {
    /// Notifier configuration.
    config: NotifierConfig,
    /// Host build lookups.
    builds: Arc<dyn BuildSource>,
    /// The underlying HTTP client.
    http: Client,
}

impl ChatNotifier {
    /// Create a new notifier from its configuration and a build source.
    pub fn new(config: NotifierConfig, builds: Arc<dyn BuildSource>) -> Self {
        Self {
            config,
            builds,
            http: Client::new(),
        }
    }

    /// Sidebar color for a build outcome.
    pub fn color_for(outcome: BuildOutcome) -> &'static str {
        match outcome {
            BuildOutcome::Success => "good",
            BuildOutcome::Failure => "#EE3435",
            _ => "#AB12EF",
        }
    }

    /// Substitute `{placeholder}` variables in a message template.
    fn render(template: &str, vars: &[(&str, &str)]) -> String {
        let mut out = template.to_string();
        for (key, value) in vars {
            out = out.replace(&format!("{{{key}}}"), value);
        }
        out
    }

    /// Headline for the attachment, linking to the build results page.
    fn headline(details: &BuildDetails) -> String {
        format!(
            "Build <{url}|#{number} {builder} {variant} on {worker}> finished",
            url = details.url,
            number = details.number,
            builder = details.builder_name.as_deref().unwrap_or_default(),
            variant = details.variant_name.as_deref().unwrap_or_default(),
            worker = details.worker.as_deref().unwrap_or_default(),
        )
    }

    /// Assemble the webhook payload for a finished build.
    pub fn build_payload(&self, details: &BuildDetails, responsible: &[String]) -> WebhookPayload {
        let repository = details.repository.as_deref().unwrap_or_default();
        let templates = &self.config.templates;

        let mut fields = vec![
            AttachmentField::new("Status", details.outcome.as_str(), true),
            AttachmentField::new(
                "Repository",
                Self::render(&templates.repository, &[("repository", repository)]),
                false,
            ),
            AttachmentField::new(
                "Project",
                details.project.as_deref().unwrap_or_default(),
                true,
            ),
        ];

        if !responsible.is_empty() {
            fields.push(AttachmentField::new(
                "Responsible users",
                responsible.join("\n"),
                false,
            ));
        }

        if let Some(ref branch) = details.branch {
            fields.push(AttachmentField::new(
                "Branch",
                Self::render(
                    &templates.branch,
                    &[("repository", repository), ("branch", branch)],
                ),
                true,
            ));
        }

        if let Some(ref revision) = details.revision {
            fields.push(AttachmentField::new(
                "Revision",
                Self::render(
                    &templates.revision,
                    &[
                        ("repository", repository),
                        ("revision", revision),
                        ("revision_short", short_revision(revision)),
                    ],
                ),
                true,
            ));
        }

        if let Some(ref got) = details.got_revision {
            if details.revision.as_deref() != Some(got.as_str()) {
                fields.push(AttachmentField::new(
                    "Got Revision",
                    Self::render(
                        &templates.revision,
                        &[
                            ("repository", repository),
                            ("revision", got),
                            ("revision_short", short_revision(got)),
                        ],
                    ),
                    true,
                ));
            }
        }

        let attachment = Attachment {
            text: Self::headline(details),
            color: Self::color_for(details.outcome).to_string(),
            mrkdwn_in: ["text", "title", "fallback", "fields"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            fields,
        };

        let (icon_emoji, icon_url) = match self.config.icon.as_deref() {
            Some(icon) if icon.starts_with(':') => (Some(icon.to_string()), None),
            Some(icon) => (None, Some(icon.to_string())),
            None => (None, None),
        };

        WebhookPayload {
            attachments: vec![attachment],
            mrkdwn: true,
            username: self.config.username.clone(),
            icon_emoji,
            icon_url,
        }
    }
}

/// First [`SHORT_REVISION_LEN`] characters of a revision.
fn short_revision(revision: &str) -> &str {
    let end = revision
        .char_indices()
        .nth(SHORT_REVISION_LEN)
        .map_or(revision.len(), |(i, _)| i);
    &revision[..end]
}

#[async_trait]
impl BuildNotifier for ChatNotifier {
    fn name(&self) -> &str {
        "chat-notifier"
    }

    async fn build_finished(&self, build_id: u64) -> DomainResult<()> {
        let details = self.builds.details(build_id).await?;
        let responsible = self.builds.responsible_users(build_id).await?;

        let payload = self.build_payload(&details, &responsible);

        tracing::info!(
            build_id,
            outcome = %details.outcome,
            "posting build summary to webhook"
        );

        let resp = self
            .http
            .post(&self.config.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::ExecutionFailed(format!("webhook post failed: {e}")))?;

        // Non-success responses are logged, not retried.
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(
                build_id,
                status = %status,
                body = %body,
                "unable to upload build status"
            );
        }

        Ok(())
    }
}
