//! Summary of a planned or completed index.
//!
//! [`GenerationSummary`] is the point-in-time view returned with a successful
//! run and printed by the CLI, either as text or as JSON.

use barrel_core::{IndexExtension, ReExportKind, ReExportStatement};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// What a generation run produced.
///
/// # Examples
///
/// ```
/// use barrel_core::{IndexExtension, ReExportStatement};
/// use barrel_gen::GenerationSummary;
///
/// let summary = GenerationSummary::new(
///     "src/ui/index.ts".into(),
///     "ui".to_owned(),
///     IndexExtension::Ts,
///     3,
///     false,
///     vec![
///         ReExportStatement::default_export("a").into_aliased(),
///         ReExportStatement::default_export("b").into_aliased(),
///         ReExportStatement::namespace("b"),
///     ],
/// );
///
/// assert_eq!(summary.aliased_defaults, 2);
/// assert_eq!(summary.namespace_exports, 1);
/// assert_eq!(summary.statement_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Path of the index file.
    pub index_path: Utf8PathBuf,

    /// Name of the directory holding the index.
    pub dir_name: String,

    /// Extension chosen for the index.
    pub extension: IndexExtension,

    /// Supported source files found by the scan (index files included).
    pub files_scanned: usize,

    /// Whether an existing export-only index was regenerated.
    pub replaced_existing: bool,

    /// `export { default } from ...` statements.
    pub default_exports: usize,

    /// `export { default as ... } from ...` statements.
    pub aliased_defaults: usize,

    /// `export * from ...` statements.
    pub namespace_exports: usize,

    /// Statements in emission order.
    pub statements: Vec<ReExportStatement>,
}

impl GenerationSummary {
    /// Builds a summary, counting statements by kind.
    #[must_use]
    pub fn new(
        index_path: Utf8PathBuf,
        dir_name: String,
        extension: IndexExtension,
        files_scanned: usize,
        replaced_existing: bool,
        statements: Vec<ReExportStatement>,
    ) -> Self {
        let count = |kind: ReExportKind| statements.iter().filter(|s| s.kind == kind).count();

        Self {
            default_exports: count(ReExportKind::Default),
            aliased_defaults: count(ReExportKind::AliasedDefault),
            namespace_exports: count(ReExportKind::Namespace),
            index_path,
            dir_name,
            extension,
            files_scanned,
            replaced_existing,
            statements,
        }
    }

    /// Total number of statements written.
    #[inline]
    #[must_use]
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_kind() {
        let summary = GenerationSummary::new(
            Utf8PathBuf::from("lib/index.js"),
            "lib".to_owned(),
            IndexExtension::Js,
            2,
            true,
            vec![
                ReExportStatement::default_export("a"),
                ReExportStatement::namespace("a"),
                ReExportStatement::namespace("b"),
            ],
        );

        assert_eq!(summary.default_exports, 1);
        assert_eq!(summary.aliased_defaults, 0);
        assert_eq!(summary.namespace_exports, 2);
        assert!(summary.replaced_existing);
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = GenerationSummary::new(
            Utf8PathBuf::from("lib/index.ts"),
            "lib".to_owned(),
            IndexExtension::Ts,
            1,
            false,
            vec![ReExportStatement::namespace("a")],
        );

        insta::assert_json_snapshot!(summary, @r#"
        {
          "index_path": "lib/index.ts",
          "dir_name": "lib",
          "extension": "ts",
          "files_scanned": 1,
          "replaced_existing": false,
          "default_exports": 0,
          "aliased_defaults": 0,
          "namespace_exports": 1,
          "statements": [
            {
              "kind": "namespace",
              "target_module": "a"
            }
          ]
        }
        "#);
    }
}
