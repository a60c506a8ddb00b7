//! Attachments: content either embedded as base64 or stored as a file on
//! disk next to the board.

use super::ids::AttachmentId;
use serde::{Deserialize, Serialize};

/// An attachment on a card or a comment.
///
/// The `format` field on the wire selects the variant, so an attachment can
/// never carry both inline content and a disk path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format")]
pub enum Attachment {
    /// Content embedded in the document as base64.
    #[serde(rename = "base64")]
    Embedded {
        id: AttachmentId,
        /// Mime type of the content, e.g. `image/png`
        #[serde(rename = "type")]
        mime_type: String,
        properties: EmbeddedProperties,
    },
    /// Content stored as a file inside the board's attachments folder.
    #[serde(rename = "file")]
    File {
        id: AttachmentId,
        /// Mime type of the content, e.g. `image/png`
        #[serde(rename = "type")]
        mime_type: String,
        properties: FileProperties,
    },
}

impl Attachment {
    /// Create an embedded attachment from base64 content.
    pub fn embedded(
        mime_type: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::Embedded {
            id: AttachmentId::new(),
            mime_type: mime_type.into(),
            properties: EmbeddedProperties {
                name: name.into(),
                content: content.into(),
            },
        }
    }

    /// Create a disk attachment referencing a path relative to the board's
    /// attachments folder.
    pub fn file(
        mime_type: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::File {
            id: AttachmentId::new(),
            mime_type: mime_type.into(),
            properties: FileProperties {
                name: name.into(),
                path: path.into(),
            },
        }
    }

    /// The attachment's id, whichever the variant.
    pub fn id(&self) -> &AttachmentId {
        match self {
            Self::Embedded { id, .. } => id,
            Self::File { id, .. } => id,
        }
    }

    /// The attachment's mime type, whichever the variant.
    pub fn mime_type(&self) -> &str {
        match self {
            Self::Embedded { mime_type, .. } => mime_type,
            Self::File { mime_type, .. } => mime_type,
        }
    }

    /// The original uploaded file name, whichever the variant.
    pub fn name(&self) -> &str {
        match self {
            Self::Embedded { properties, .. } => &properties.name,
            Self::File { properties, .. } => &properties.name,
        }
    }
}

/// Properties of an embedded attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedProperties {
    /// Original uploaded file name with extension
    pub name: String,
    /// Base64 encoded content
    pub content: String,
}

/// Properties of a disk attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileProperties {
    /// Original uploaded file name with extension
    pub name: String,
    /// Relative path inside the board's attachments folder; ends with the
    /// attachment id followed by the original extension
    pub path: String,
}
