//! End-to-end test for board storage: create on disk, scan back, validate.

use koan_core::types::{Attachment, Card, Checklist, ChecklistItem, ChecklistItemProperties, Comment, List, Reaction};
use koan_core::{
    create_board, ensure_root, list_boards, validate, BoardDocument, KoanError, CURRENT_VERSION,
};
use std::fs;
use tempfile::TempDir;

const NOW: &str = "2024-05-01T12:00:00.000Z";

/// Build a board with one of everything nested inside.
fn populated_board() -> BoardDocument {
    let mut doc = BoardDocument::new("Release 1.0", "Ada <ada@example.com>");

    let mut list = List::new(NOW, "Doing");
    let mut card = Card::new(NOW, "Ship the installer");
    card.properties.description = Some("Sign and notarize".into());
    card.properties.due_date = Some(NOW.into());

    let mut checklist = Checklist::new(Some("Pre-flight".into()));
    checklist.items.push(ChecklistItem {
        properties: ChecklistItemProperties {
            description: "Smoke test".into(),
            due_date: None,
            completed: Some(NOW.into()),
        },
    });
    card.checklists.push(checklist);

    card.attachments
        .push(Attachment::file("application/zip", "build.zip", "koan-att-1.zip"));

    let mut comment = Comment::new(NOW, "Grace", "Blocked on certs");
    comment.reactions.push(Reaction::new(NOW, "Ada", "😬"));
    comment
        .comments
        .push(Comment::new(NOW, "Ada", "Certs arrived"));
    comment
        .attachments
        .push(Attachment::embedded("image/png", "screenshot.png", "aGVsbG8="));
    card.comments.push(comment);

    list.cards.push(card);
    doc.data.board.lists.active.push(list);
    doc
}

#[test]
fn test_create_then_list_round_trips_a_full_board() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("Boards");
    ensure_root(&root).unwrap();

    let doc = populated_board();
    create_board(&doc, &root).unwrap();

    let boards = list_boards(&root).unwrap();
    assert_eq!(boards.len(), 1);
    // the scan routes through the full validator; a well-formed document
    // must survive it byte-for-byte
    assert_eq!(boards[0], doc);

    let card = &boards[0].data.board.lists.active[0].cards[0];
    assert_eq!(card.properties.name, "Ship the installer");
    assert_eq!(card.comments[0].reactions[0].properties.emoji, "😬");
    assert_eq!(card.comments[0].comments[0].author, "Ada");
}

#[test]
fn test_on_disk_file_is_pretty_printed_and_stamped() {
    let temp = TempDir::new().unwrap();
    create_board(&populated_board(), temp.path()).unwrap();

    let content =
        fs::read_to_string(temp.path().join("release-1-0").join("release-1-0.json")).unwrap();
    assert!(content.contains("\n  \"isBoardDocument\": true"));
    assert!(content.contains(&format!("\"version\": \"{CURRENT_VERSION}\"")));
}

#[test]
fn test_validating_a_hand_damaged_file_repairs_it() {
    let temp = TempDir::new().unwrap();
    create_board(&populated_board(), temp.path()).unwrap();

    let path = temp.path().join("release-1-0").join("release-1-0.json");
    let mut raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    // simulate a user hand-editing the file badly
    raw["meta"]["updated_at"] = "last tuesday".into();
    raw["meta"]["author"] = 42.into();
    raw["data"]["board"]["lists"]["archived"] = "oops".into();

    let doc = validate(&raw).unwrap();
    assert_eq!(doc.meta.name, "Release 1.0");
    assert!(chrono::DateTime::parse_from_rfc3339(&doc.meta.updated_at).is_ok());
    assert!(doc.data.board.lists.archived.is_empty());
    // the intact list came through untouched
    assert_eq!(doc.data.board.lists.active.len(), 1);
}

#[test]
fn test_shell_flow_surfaces_upgrade_prompt() {
    // the shell reads a single board file directly and validates it; a
    // future-version document must produce the upgrade message
    let temp = TempDir::new().unwrap();
    let mut raw = serde_json::to_value(populated_board()).unwrap();
    raw["version"] = "999.0.0".into();

    let path = temp.path().join("board.json");
    fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let reread: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let err = validate(&reread).unwrap_err();
    assert!(matches!(err, KoanError::UnsupportedVersion { .. }));
    assert!(err.to_string().contains("999.0.0"));
}
