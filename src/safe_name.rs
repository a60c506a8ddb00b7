//! Filesystem-safe board names.
//!
//! A board's display name is user-defined and can contain anything; its
//! `safeName` is derived from it exactly once, at creation time, and becomes
//! the directory and file stem on disk. Renaming a board later must not move
//! its files, so the safe name is never recomputed after creation.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derive a name that is safe to use as a file name from a user-defined
/// board name.
///
/// Steps, in order:
/// 1. NFD-decompose and drop combining marks (strips diacritics)
/// 2. replace every character outside `[A-Za-z0-9_]` with `-`
/// 3. collapse runs of consecutive `-` into one
/// 4. trim leading and trailing `-`
/// 5. lowercase
///
/// Empty input yields empty output; rejecting empty names before persisting
/// is the caller's job.
pub fn generate_safe_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    let decomposed = name.nfd().filter(|c| !is_combining_mark(*c));
    for c in decomposed {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
        // a '-' following another '-' is dropped, which collapses runs
    }

    // collapsing happened inline; only the ends still need trimming
    if out.starts_with('-') {
        out.remove(0);
    }
    if out.ends_with('-') {
        out.pop();
    }

    out
}
