//! The board document root aggregate.

use crate::types::{BoardData, Meta};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Version stamped into every document this build writes. Documents are
/// accepted when their own version is semver less-than-or-equal to this.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback author used when a document supplies none.
pub const DEFAULT_AUTHOR: &str = "unknown";

/// The root record representing one board and all its nested content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Literal discriminator; always true for a board document
    #[serde(rename = "isBoardDocument")]
    pub is_board_document: bool,
    /// Semver version of the software that last wrote the file
    pub version: String,
    pub meta: Meta,
    pub data: BoardData,
}

impl BoardDocument {
    /// Create a fresh empty board document: current version, derived safe
    /// name, no lists, the six default labels.
    pub fn empty(now: DateTime<Utc>, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            is_board_document: true,
            version: CURRENT_VERSION.to_string(),
            meta: Meta::new(to_iso_string(now), name, author),
            data: BoardData::empty(),
        }
    }

    /// Convenience constructor using the wall clock.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self::empty(Utc::now(), name, author)
    }
}

/// Render a timestamp the way documents store them: UTC ISO-8601 with
/// millisecond precision.
pub(crate) fn to_iso_string(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
