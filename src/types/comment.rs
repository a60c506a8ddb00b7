//! Comments and reactions.
//!
//! Comments form an unbounded discussion tree: each comment carries its own
//! ordered replies. Attachments and reactions hang off individual comments.

use super::attachment::Attachment;
use super::ids::{CommentId, ReactionId};
use serde::{Deserialize, Serialize};

/// A comment on a card or a reply to another comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// UTC ISO-8601 datetime of when the comment was first created
    pub created_at: String,
    /// UTC ISO-8601 datetime of when the comment was last updated
    pub updated_at: String,
    /// Free text, conventionally `Firstname Lastname <email@example.com>`
    pub author: String,
    pub properties: CommentProperties,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Replies, in display order
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

impl Comment {
    /// Create a new comment with the given markdown content.
    pub fn new(
        now: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = now.into();
        Self {
            id: CommentId::new(),
            created_at: now.clone(),
            updated_at: now,
            author: author.into(),
            properties: CommentProperties {
                content: content.into(),
            },
            attachments: Vec::new(),
            comments: Vec::new(),
            reactions: Vec::new(),
        }
    }
}

/// Properties of a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentProperties {
    /// User-defined content, rendered as markdown
    pub content: String,
}

/// A single-emoji reaction to a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: ReactionId,
    /// UTC ISO-8601 datetime of when the reaction was first created
    pub created_at: String,
    /// Free text, conventionally `Firstname Lastname <email@example.com>`
    pub author: String,
    pub properties: ReactionProperties,
}

impl Reaction {
    /// Create a new reaction.
    pub fn new(
        now: impl Into<String>,
        author: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: ReactionId::new(),
            created_at: now.into(),
            author: author.into(),
            properties: ReactionProperties {
                emoji: emoji.into(),
            },
        }
    }
}

/// Properties of a reaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionProperties {
    /// Single emoji representing the reaction
    pub emoji: String,
}
