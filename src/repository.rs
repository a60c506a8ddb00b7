//! Disk repository for boards.
//!
//! One directory per board under a caller-supplied root, holding a single
//! pretty-printed JSON file named after the board's safe name:
//!
//! ```text
//! <root>/
//! ├── roadmap/
//! │   └── roadmap.json
//! └── sprint-plan/
//!     └── sprint-plan.json
//! ```
//!
//! All state lives on the filesystem; every call re-reads or re-writes disk
//! fresh. `list_boards` takes no lock and tolerates concurrent writers: a
//! file caught mid-write fails to parse and is skipped, never crashes the
//! scan.

use crate::document::BoardDocument;
use crate::error::{KoanError, Result};
use crate::validate::validate;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Create the boards root directory if it does not exist yet.
///
/// The hosting shell calls this once on first run. Idempotent.
pub fn ensure_root(root: &Path) -> Result<()> {
    fs::create_dir_all(root).map_err(|e| KoanError::storage(root, e))
}

/// Initialize a board on disk by creating its directory and main JSON file.
///
/// The target directory is `<root>/<safeName>`. Creation is a single
/// `create_dir` call, so two racing callers cannot both succeed: the loser
/// gets [`KoanError::AlreadyExists`]. Returns a human-readable success
/// message containing the board's display name.
pub fn create_board(doc: &BoardDocument, root: &Path) -> Result<String> {
    if doc.meta.safe_name.is_empty() {
        return Err(KoanError::invalid_document("board has an empty safe name"));
    }

    let board_root = root.join(&doc.meta.safe_name);

    fs::create_dir(&board_root).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => KoanError::AlreadyExists {
            path: board_root.clone(),
        },
        _ => KoanError::storage(&board_root, e),
    })?;

    let board_file = board_root.join(format!("{}.json", doc.meta.safe_name));
    let content = serde_json::to_string_pretty(doc)?;
    fs::write(&board_file, content).map_err(|e| KoanError::storage(&board_file, e))?;

    debug!(path = %board_file.display(), "board initialized");
    Ok(format!("Board \"{}\" initialized!", doc.meta.name))
}

/// List all existing and compatible boards under the root.
///
/// Scans the immediate subdirectories for `<subdir>/<subdir>.json` and runs
/// every candidate through the full validator, so callers always receive
/// fully populated current-version documents. Anything that fails along the
/// way — a subdirectory with no JSON file, an unparsable file, a document
/// that is not a board or is from a newer software version — is skipped,
/// never an error. Results come back in directory-enumeration order;
/// callers must not rely on it.
pub fn list_boards(root: &Path) -> Result<Vec<BoardDocument>> {
    let mut boards = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(boards),
        Err(e) => return Err(e.into()),
    };

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let board_file = path.join(format!("{dir_name}.json"));

        if !board_file.is_file() {
            debug!(dir = %path.display(), "no board file, skipping");
            continue;
        }

        let content = match fs::read_to_string(&board_file) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %board_file.display(), error = %e, "unreadable board file, skipping");
                continue;
            }
        };

        let raw: Value = match serde_json::from_str(&content) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %board_file.display(), error = %e, "not a JSON file, skipping");
                continue;
            }
        };

        match validate(&raw) {
            Ok(doc) => boards.push(doc),
            Err(e) => {
                warn!(path = %board_file.display(), error = %e, "rejected during scan, skipping");
                continue;
            }
        }
    }

    Ok(boards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CURRENT_VERSION;
    use tempfile::TempDir;

    fn doc(name: &str) -> BoardDocument {
        BoardDocument::new(name, "Ada <ada@example.com>")
    }

    #[test]
    fn test_create_board_layout_and_round_trip() {
        let temp = TempDir::new().unwrap();
        let board = doc("My Roadmap");

        let message = create_board(&board, temp.path()).unwrap();
        assert!(message.contains("My Roadmap"));

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let file = temp.path().join("my-roadmap").join("my-roadmap.json");
        assert!(file.is_file());

        let parsed: BoardDocument =
            serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_create_board_twice_reports_already_exists() {
        let temp = TempDir::new().unwrap();
        let board = doc("Twice");

        create_board(&board, temp.path()).unwrap();
        let before = fs::read_to_string(temp.path().join("twice/twice.json")).unwrap();

        let err = create_board(&board, temp.path()).unwrap_err();
        assert!(matches!(err, KoanError::AlreadyExists { .. }));

        // second attempt left the first board untouched
        let after = fs::read_to_string(temp.path().join("twice/twice.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_create_board_rejects_empty_safe_name() {
        let temp = TempDir::new().unwrap();
        let board = doc("!!!");
        assert!(matches!(
            create_board(&board, temp.path()).unwrap_err(),
            KoanError::InvalidDocument { .. }
        ));
    }

    #[test]
    fn test_list_boards_skips_everything_but_valid_boards() {
        let temp = TempDir::new().unwrap();

        // one valid board
        create_board(&doc("Valid Board"), temp.path()).unwrap();

        // a directory with no JSON file
        fs::create_dir(temp.path().join("empty-dir")).unwrap();

        // a directory whose JSON is not a board
        fs::create_dir(temp.path().join("not-a-board")).unwrap();
        fs::write(
            temp.path().join("not-a-board/not-a-board.json"),
            r#"{"not": "a board"}"#,
        )
        .unwrap();

        // a directory whose file is not JSON at all
        fs::create_dir(temp.path().join("garbage")).unwrap();
        fs::write(temp.path().join("garbage/garbage.json"), "{{{{").unwrap();

        // a stray top-level file, not a directory
        fs::write(temp.path().join("stray.json"), "{}").unwrap();

        let boards = list_boards(temp.path()).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].meta.name, "Valid Board");
    }

    #[test]
    fn test_list_boards_excludes_future_versions() {
        let temp = TempDir::new().unwrap();
        create_board(&doc("Current"), temp.path()).unwrap();

        let mut future = serde_json::to_value(doc("From The Future")).unwrap();
        future["version"] = "999.0.0".into();
        fs::create_dir(temp.path().join("from-the-future")).unwrap();
        fs::write(
            temp.path().join("from-the-future/from-the-future.json"),
            serde_json::to_string_pretty(&future).unwrap(),
        )
        .unwrap();

        let boards = list_boards(temp.path()).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].meta.name, "Current");
    }

    #[test]
    fn test_list_boards_repairs_sparse_documents() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sparse")).unwrap();
        fs::write(
            temp.path().join("sparse/sparse.json"),
            format!(
                r#"{{"isBoardDocument": true, "version": "{CURRENT_VERSION}",
                     "meta": {{"name": "Sparse", "safeName": "sparse"}}}}"#
            ),
        )
        .unwrap();

        let boards = list_boards(temp.path()).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].meta.name, "Sparse");
        assert_eq!(boards[0].data.labels.len(), 6);
        assert!(chrono::DateTime::parse_from_rfc3339(&boards[0].meta.created_at).is_ok());
    }

    #[test]
    fn test_list_boards_on_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("never-created");
        assert!(list_boards(&missing).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_root_idempotent() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("boards");
        ensure_root(&root).unwrap();
        ensure_root(&root).unwrap();
        assert!(root.is_dir());
    }
}
