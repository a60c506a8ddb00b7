//! Document acceptance: gatekeeping, migration, field-level repair.
//!
//! `validate` is the single entry point the rest of the crate (and the
//! hosting shell) trusts: whatever JSON comes off disk, the output is
//! either a hard rejection or a fully populated current-version document.
//! There is no partial-success mode.

mod migrate;
mod repair;

use crate::document::{BoardDocument, CURRENT_VERSION, DEFAULT_AUTHOR};
use crate::error::{KoanError, Result};
use chrono::{DateTime, Utc};
use semver::Version;
use serde_json::Value;

/// Validate a parsed JSON value of any supported version into a current
/// board document.
///
/// Fails with [`KoanError::InvalidDocument`] when the input is not an
/// object, lacks the `isBoardDocument` discriminator, or has no readable
/// semver `version`. Fails with [`KoanError::UnsupportedVersion`] when the
/// document comes from a newer version of the software; best-effort parsing
/// of future formats is never attempted. Every other defect is repaired.
pub fn validate(raw: &Value) -> Result<BoardDocument> {
    validate_at(raw, Utc::now(), DEFAULT_AUTHOR)
}

/// [`validate`] with an injected clock and author fallback.
pub fn validate_at(raw: &Value, now: DateTime<Utc>, fallback_author: &str) -> Result<BoardDocument> {
    let doc_version = accept(raw)?;
    let current = current_version();

    if doc_version < current {
        // older format: bridge it up through the migration chain first
        let upgraded = migrate::run(raw.clone(), &doc_version, &current);
        Ok(repair::repair(&upgraded, now, fallback_author))
    } else {
        Ok(repair::repair(raw, now, fallback_author))
    }
}

/// Gatekeeping: confirm the discriminator and reject versions from the
/// future. Returns the document's declared version on acceptance.
fn accept(raw: &Value) -> Result<Version> {
    if !raw.is_object() {
        return Err(KoanError::invalid_document("not a JSON object"));
    }

    if raw.get("isBoardDocument").and_then(Value::as_bool) != Some(true) {
        return Err(KoanError::invalid_document(
            "missing isBoardDocument discriminator",
        ));
    }

    let version_str = raw
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| KoanError::invalid_document("missing version string"))?;

    let doc_version = parse_version(version_str)
        .ok_or_else(|| KoanError::invalid_document(format!("unreadable version {version_str:?}")))?;

    if doc_version > current_version() {
        return Err(KoanError::UnsupportedVersion {
            version: version_str.to_string(),
        });
    }

    Ok(doc_version)
}

/// Parse a document version string, tolerating a leading `v`.
fn parse_version(s: &str) -> Option<Version> {
    Version::parse(s.strip_prefix('v').unwrap_or(s)).ok()
}

fn current_version() -> Version {
    Version::parse(CURRENT_VERSION).expect("crate version is valid semver")
}
