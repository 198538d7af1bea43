//! Chat webhook payload models.
//!
//! These structs serialize to the JSON body the webhook expects:
//! a list of attachments with colored field tables, plus optional
//! posting identity (`username`, `icon_emoji` / `icon_url`).

use serde::{Deserialize, Serialize};

/// Top-level webhook payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Message attachments; the build summary is a single attachment.
    pub attachments: Vec<Attachment>,
    /// Enable markdown rendering in the message body.
    pub mrkdwn: bool,
    /// Display name for the posting user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Emoji icon, e.g. `:robot_face:`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Icon image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// One message attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Headline text above the field table.
    pub text: String,
    /// Sidebar color: a named color or `#RRGGBB`.
    pub color: String,
    /// Which parts of the attachment render markdown.
    pub mrkdwn_in: Vec<String>,
    /// Field table rows.
    pub fields: Vec<AttachmentField>,
}

/// One row in an attachment's field table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Field title.
    pub title: String,
    /// Field value.
    pub value: String,
    /// Whether the field is narrow enough to share a line.
    pub short: bool,
}

impl AttachmentField {
    /// Create a field row.
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short,
        }
    }
}
