//! Version migration chain.
//!
//! Each step is a pure transform from one known prior format version to the
//! next. Upgrading a document is a fold over the steps whose `from` version
//! lies in `[document version, current version)`, applied in order, before
//! field-level repair runs on the result. The chain is empty today; the
//! fold structure stays so a future format bump is an additive entry here,
//! not a new code path.

use semver::Version;
use serde_json::Value;

/// One entry in the migration chain: the format version the step upgrades
/// away from, and the pure transform producing the next version's shape.
type Migration = (Version, fn(Value) -> Value);

/// The ordered migration chain. No format bump has shipped yet; the first
/// one adds an entry here and nothing else.
fn chain() -> Vec<Migration> {
    Vec::new()
}

/// Upgrade a raw document from its declared version up to `current`.
///
/// Steps outside `[doc_version, current)` are skipped, so replaying the
/// chain on an already-current document is the identity.
pub fn run(raw: Value, doc_version: &Version, current: &Version) -> Value {
    apply(chain(), raw, doc_version, current)
}

fn apply(steps: Vec<Migration>, raw: Value, doc_version: &Version, current: &Version) -> Value {
    steps
        .into_iter()
        .filter(|(from, _)| from >= doc_version && from < current)
        .fold(raw, |doc, (_, step)| step(doc))
}
