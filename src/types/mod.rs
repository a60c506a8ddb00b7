//! Schema types for board documents.
//!
//! These mirror the on-disk JSON format exactly; all structural tolerance
//! (missing collections, absent optionals) is expressed through serde
//! defaults so the validator can repair per element.

mod attachment;
mod board;
mod card;
mod comment;
mod ids;
mod label;
mod meta;

pub use attachment::{Attachment, EmbeddedProperties, FileProperties};
pub use board::{BoardContent, BoardData, List, ListProperties, Lists};
pub use card::{
    Card, CardProperties, Checklist, ChecklistItem, ChecklistItemProperties, ChecklistProperties,
};
pub use comment::{Comment, CommentProperties, Reaction, ReactionProperties};
pub use ids::{AttachmentId, CardId, ChecklistId, CommentId, LabelId, ListId, ReactionId};
pub use label::{Label, LabelProperties};
pub use meta::{Meta, Remote};
