//! Board metadata: display name, safe name, timestamps, author, remote.

use crate::safe_name::generate_safe_name;
use serde::{Deserialize, Serialize};

/// Metadata block of a board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// User-defined name of the board
    pub name: String,
    /// Filesystem-safe name, derived from `name` once at creation and used
    /// as the on-disk directory and file stem. Never recomputed afterwards:
    /// renaming the board must not move its files.
    #[serde(rename = "safeName")]
    pub safe_name: String,
    /// UTC ISO-8601 datetime of when the board was first created
    pub created_at: String,
    /// UTC ISO-8601 datetime of when the board was last updated
    pub updated_at: String,
    /// Free text, conventionally `Firstname Lastname <email@example.com>`
    pub author: String,
    /// Remote origin the board is synced with, or null
    pub remote: Option<Remote>,
}

impl Meta {
    /// Metadata for a freshly created board.
    pub fn new(now: impl Into<String>, name: impl Into<String>, author: impl Into<String>) -> Self {
        let name = name.into();
        let now = now.into();
        Self {
            safe_name: generate_safe_name(&name),
            name,
            created_at: now.clone(),
            updated_at: now,
            author: author.into(),
            remote: None,
        }
    }
}

/// Remote origin a board is synced with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// Full URL of the remote origin
    pub url: String,
}
