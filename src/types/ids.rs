//! Prefixed id newtypes for board entities.
//!
//! Every entity id in a board document is a string carrying a type tag
//! prefix (`koan-lst-`, `koan-crd-`, ...). The prefixes are part of the
//! on-disk format: future migrations may key on id shape, so ids read from
//! disk are preserved verbatim, whatever their suffix looks like. Freshly
//! generated ids use a ULID suffix.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! prefixed_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The type-tag prefix for freshly generated ids of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new id with a ULID suffix.
            pub fn new() -> Self {
                Self(format!("{}{}", $prefix, Ulid::new()))
            }

            /// Wrap an existing id string verbatim (e.g. read from disk).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id carries the expected type-tag prefix.
            pub fn has_expected_prefix(&self) -> bool {
                self.0.starts_with($prefix)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

prefixed_id!(
    /// Identifier of a list.
    ListId, "koan-lst-");
prefixed_id!(
    /// Identifier of a card.
    CardId, "koan-crd-");
prefixed_id!(
    /// Identifier of a checklist.
    ChecklistId, "koan-chk-");
prefixed_id!(
    /// Identifier of an attachment.
    AttachmentId, "koan-att-");
prefixed_id!(
    /// Identifier of a comment.
    CommentId, "koan-cmt-");
prefixed_id!(
    /// Identifier of a reaction.
    ReactionId, "koan-rea-");
prefixed_id!(
    /// Identifier of a label.
    LabelId, "koan-lbl-");
