//! Versioned board document model with file-backed storage
//!
//! This crate is the core of the Koan kanban app: the schema of a board
//! document, the validation/migration engine that turns arbitrary JSON read
//! from disk into a trustworthy current-version document, and the disk
//! repository that creates and enumerates boards. The desktop shell, its
//! windows, menus and rendering are external collaborators that call in
//! through a handful of plain functions.
//!
//! ## Overview
//!
//! - **One directory = one board** - each board lives in its own
//!   subdirectory of a caller-supplied boards root
//! - **One JSON file per board** - UTF-8, pretty-printed, named after the
//!   board's filesystem-safe name
//! - **Repair over rejection** - documents from accepted versions are
//!   defaulted field by field instead of failing to load; only a missing
//!   discriminator or a version from the future is a hard rejection
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use koan_core::{create_board, list_boards, BoardDocument};
//! use std::path::Path;
//!
//! # fn example() -> koan_core::Result<()> {
//! let root = Path::new("/path/to/Boards");
//! koan_core::ensure_root(root)?;
//!
//! let doc = BoardDocument::new("My Project", "Ada <ada@example.com>");
//! let message = create_board(&doc, root)?;
//! println!("{message}");
//!
//! for board in list_boards(root)? {
//!     println!("{} ({})", board.meta.name, board.meta.safe_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! Boards/
//! ├── my-project/
//! │   └── my-project.json    # the whole board document
//! └── cafe-deja-vu/
//!     └── cafe-deja-vu.json
//! ```
//!
//! The document is serialized directly with no envelope or checksum. Its
//! `version` field records which software version last wrote it; reading a
//! file from a newer version fails with
//! [`KoanError::UnsupportedVersion`](crate::KoanError::UnsupportedVersion)
//! so the caller can prompt for an upgrade.

mod document;
mod error;
mod repository;
pub mod safe_name;
pub mod types;
mod validate;

pub use document::{BoardDocument, CURRENT_VERSION, DEFAULT_AUTHOR};
pub use error::{KoanError, Result};
pub use repository::{create_board, ensure_root, list_boards};
pub use safe_name::generate_safe_name;
pub use validate::{validate, validate_at};
