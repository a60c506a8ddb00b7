//! Cards and their checklists.

use super::attachment::Attachment;
use super::comment::Comment;
use super::ids::{CardId, ChecklistId, LabelId};
use serde::{Deserialize, Serialize};

/// A card on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// UTC ISO-8601 datetime of when the card was first created
    pub created_at: String,
    pub properties: CardProperties,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Card {
    /// Create a new card with the given name.
    pub fn new(now: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            created_at: now.into(),
            properties: CardProperties {
                name: name.into(),
                ..CardProperties::default()
            },
            checklists: Vec::new(),
            attachments: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Properties of a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProperties {
    /// User-defined name of the card
    pub name: String,
    /// User-defined description, rendered as markdown
    #[serde(default)]
    pub description: Option<String>,
    /// UTC ISO-8601 datetime of when the card starts, if any
    #[serde(default)]
    pub start_date: Option<String>,
    /// UTC ISO-8601 datetime of when the card is due, if any
    #[serde(default)]
    pub due_date: Option<String>,
    /// UTC ISO-8601 datetime of when the card was marked completed;
    /// null while the card is open
    #[serde(default)]
    pub completed: Option<String>,
    /// Ids of the labels attached to this card, referencing the document's
    /// label table
    #[serde(default)]
    pub labels: Vec<LabelId>,
    /// When true and the card has image attachments, the first one is used
    /// as cover image
    #[serde(default)]
    pub use_first_image_as_cover: bool,
}

/// A checklist on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub properties: ChecklistProperties,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// Create a new empty checklist.
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: ChecklistId::new(),
            properties: ChecklistProperties { name },
            items: Vec::new(),
        }
    }
}

/// Properties of a checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistProperties {
    /// User-defined name of the checklist, if any
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry in a checklist. Items carry no id of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub properties: ChecklistItemProperties,
}

/// Properties of a checklist item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItemProperties {
    /// User-defined description of the item
    pub description: String,
    /// UTC ISO-8601 datetime of when the item is due, if any
    #[serde(default)]
    pub due_date: Option<String>,
    /// UTC ISO-8601 datetime of when the item was checked off;
    /// null while the item is open
    #[serde(default)]
    pub completed: Option<String>,
}
