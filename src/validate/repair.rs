//! Field-level repair: whitelist copy onto a fresh default document.
//!
//! Repair never merges. It builds a fresh empty document and walks an
//! ordered table of field rules; each rule resolves one JSON pointer in the
//! raw input and, when the value there passes its shape check, copies it
//! into the fresh document. Anything absent, malformed, or simply not in
//! the table stays at (or falls back to) the fresh-document default, and
//! unrecognized extra fields are dropped. Adding a field to the format
//! means adding a rule here, not a new code path.

use crate::document::BoardDocument;
use crate::safe_name::generate_safe_name;
use crate::types::{Label, LabelId, List, Remote};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// One repair rule: a JSON pointer into the raw input plus a guarded copy.
///
/// `apply` receives the value the pointer resolved to; it type-checks and
/// copies, or leaves the default untouched. Rules never fail.
struct FieldRule {
    pointer: &'static str,
    apply: fn(&Value, &mut BoardDocument),
}

/// The ordered whitelist of fields repair carries over.
const RULES: &[FieldRule] = &[
    FieldRule {
        pointer: "/meta/name",
        apply: copy_name,
    },
    FieldRule {
        pointer: "/meta/safeName",
        apply: copy_safe_name,
    },
    FieldRule {
        pointer: "/meta/created_at",
        apply: copy_created_at,
    },
    FieldRule {
        pointer: "/meta/updated_at",
        apply: copy_updated_at,
    },
    FieldRule {
        pointer: "/meta/author",
        apply: copy_author,
    },
    FieldRule {
        pointer: "/meta/remote",
        apply: copy_remote,
    },
    FieldRule {
        pointer: "/data/board/lists/active",
        apply: copy_active_lists,
    },
    FieldRule {
        pointer: "/data/board/lists/archived",
        apply: copy_archived_lists,
    },
    FieldRule {
        pointer: "/data/labels",
        apply: copy_labels,
    },
];

/// Repair a current-version raw document into a fully populated one.
///
/// Always succeeds: the output is a structurally valid document whatever
/// the input looked like, stamped with the current version.
pub fn repair(raw: &Value, now: DateTime<Utc>, fallback_author: &str) -> BoardDocument {
    let mut doc = BoardDocument::empty(now, "", fallback_author);

    for rule in RULES {
        if let Some(value) = raw.pointer(rule.pointer) {
            (rule.apply)(value, &mut doc);
        }
    }

    // safeName is derived exactly once; if the input never carried one,
    // derive it from whatever name survived the copy
    if doc.meta.safe_name.is_empty() && !doc.meta.name.is_empty() {
        doc.meta.safe_name = generate_safe_name(&doc.meta.name);
    }

    doc
}

/// True when the value is a non-empty string parseable as ISO-8601.
fn is_valid_iso_string(value: &Value) -> bool {
    match value.as_str() {
        Some(s) if !s.is_empty() => DateTime::parse_from_rfc3339(s).is_ok(),
        _ => false,
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn copy_name(value: &Value, doc: &mut BoardDocument) {
    if let Some(s) = non_empty_str(value) {
        doc.meta.name = s.to_string();
    }
}

fn copy_safe_name(value: &Value, doc: &mut BoardDocument) {
    if let Some(s) = non_empty_str(value) {
        doc.meta.safe_name = s.to_string();
    }
}

fn copy_created_at(value: &Value, doc: &mut BoardDocument) {
    if is_valid_iso_string(value) {
        doc.meta.created_at = value.as_str().unwrap_or_default().to_string();
    }
}

fn copy_updated_at(value: &Value, doc: &mut BoardDocument) {
    if is_valid_iso_string(value) {
        doc.meta.updated_at = value.as_str().unwrap_or_default().to_string();
    }
}

fn copy_author(value: &Value, doc: &mut BoardDocument) {
    if let Some(s) = non_empty_str(value) {
        doc.meta.author = s.to_string();
    }
}

fn copy_remote(value: &Value, doc: &mut BoardDocument) {
    if let Some(url) = value.get("url").and_then(Value::as_str) {
        doc.meta.remote = Some(Remote {
            url: url.to_string(),
        });
    }
}

fn copy_active_lists(value: &Value, doc: &mut BoardDocument) {
    if let Some(lists) = lists_from(value) {
        doc.data.board.lists.active = lists;
    }
}

fn copy_archived_lists(value: &Value, doc: &mut BoardDocument) {
    if let Some(lists) = lists_from(value) {
        doc.data.board.lists.archived = lists;
    }
}

/// Accept an array of lists, keeping each element that matches the list
/// shape and dropping the rest. A non-array leaves the default.
fn lists_from(value: &Value) -> Option<Vec<List>> {
    let array = value.as_array()?;
    Some(
        array
            .iter()
            .filter_map(|element| serde_json::from_value(element.clone()).ok())
            .collect(),
    )
}

/// Accept a label table: an object whose well-shaped entries replace the
/// default palette. If no entry survives, the defaults stay.
fn copy_labels(value: &Value, doc: &mut BoardDocument) {
    let Some(object) = value.as_object() else {
        return;
    };

    let mut labels = BTreeMap::new();
    for (key, entry) in object {
        if let Ok(label) = serde_json::from_value::<Label>(entry.clone()) {
            labels.insert(LabelId::from_string(key), label);
        }
    }

    if !labels.is_empty() {
        doc.data.labels = labels;
    }
}
