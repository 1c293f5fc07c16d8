//! Collision resolution for default re-exports.
//!
//! An index can have only one `default` binding. When more than one sibling
//! module has a default export, every default re-export is rewritten to
//! `export { default as <name> } from './<name>';`. The decision is made over
//! the whole batch, never per file.

use barrel_core::ReExportStatement;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Rewrites default re-exports into aliased ones when more than one exists.
///
/// With zero or one `Default` statement the input is returned unchanged.
/// `Namespace` statements are never touched and order is preserved.
///
/// Aliases are the target base names, which are assumed unique within a
/// directory. Two modules sharing a base name (`card.ts` and `card.jsx`)
/// still collide; that case is logged, not repaired.
///
/// # Examples
///
/// ```
/// use barrel_core::ReExportStatement;
/// use barrel_gen::resolve;
///
/// let resolved = resolve(vec![
///     ReExportStatement::default_export("a"),
///     ReExportStatement::namespace("a"),
///     ReExportStatement::default_export("b"),
/// ]);
///
/// let lines: Vec<_> = resolved.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, [
///     "export { default as a } from './a';",
///     "export * from './a';",
///     "export { default as b } from './b';",
/// ]);
/// ```
#[must_use]
pub fn resolve(statements: Vec<ReExportStatement>) -> Vec<ReExportStatement> {
    let default_count = count_defaults(&statements);
    if default_count <= 1 {
        return statements;
    }

    debug!(count = default_count, "Aliasing default re-exports");

    let resolved: Vec<ReExportStatement> = statements
        .into_iter()
        .map(ReExportStatement::into_aliased)
        .collect();

    for alias in duplicate_aliases(&resolved) {
        warn!(alias, "Multiple modules share a base name; aliased defaults collide");
    }

    resolved
}

/// Counts unaliased default re-exports.
#[must_use]
pub fn count_defaults(statements: &[ReExportStatement]) -> usize {
    statements.iter().filter(|s| s.is_default()).count()
}

/// Returns aliases that appear more than once, in first-repeat order.
#[must_use]
pub fn duplicate_aliases(statements: &[ReExportStatement]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut duplicates = Vec::new();

    for alias in statements.iter().filter_map(|s| s.alias.as_deref()) {
        if !seen.insert(alias) && reported.insert(alias) {
            duplicates.push(alias);
        }
    }

    duplicates
}
