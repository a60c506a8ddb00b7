//! Board data: the two ordered list containers and the label table.

use super::card::Card;
use super::ids::{LabelId, ListId};
use super::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The `data` block of a board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    pub board: BoardContent,
    /// All labels of the document, indexed by their id
    #[serde(default)]
    pub labels: BTreeMap<LabelId, Label>,
}

impl BoardData {
    /// Empty board data seeded with the default label palette.
    pub fn empty() -> Self {
        Self {
            board: BoardContent {
                lists: Lists::default(),
            },
            labels: Label::default_labels(),
        }
    }
}

/// The board itself: its lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardContent {
    pub lists: Lists,
}

/// The two ordered list containers of a board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lists {
    /// Lists shown on the board, in display order
    #[serde(default)]
    pub active: Vec<List>,
    /// Lists archived away from the board, in archive order
    #[serde(default)]
    pub archived: Vec<List>,
}

/// A list of cards on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    /// UTC ISO-8601 datetime of when the list was first created
    pub created_at: String,
    pub properties: ListProperties,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create a new empty list with the given name.
    pub fn new(now: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            created_at: now.into(),
            properties: ListProperties {
                name: name.into(),
                ..ListProperties::default()
            },
            cards: Vec::new(),
        }
    }
}

/// Properties of a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProperties {
    /// User-defined name of the list
    pub name: String,
    /// UTC ISO-8601 datetime of when the list starts, if any
    #[serde(default)]
    pub start_date: Option<String>,
    /// UTC ISO-8601 datetime of when the list is due, if any
    #[serde(default)]
    pub due_date: Option<String>,
    /// UTC ISO-8601 datetime of when the list was marked completed;
    /// null while the list is open
    #[serde(default)]
    pub completed: Option<String>,
}
