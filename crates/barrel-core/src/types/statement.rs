//! Re-export statements emitted into a generated index.
//!
//! Only three statement forms are ever produced:
//!
//! | Kind | Rendered |
//! |------|----------|
//! | `Default` | `export { default } from './name';` |
//! | `AliasedDefault` | `export { default as name } from './name';` |
//! | `Namespace` | `export * from './name';` |

use std::fmt;

use serde::{Deserialize, Serialize};

/// The form of a re-export statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReExportKind {
    /// Re-export the module's default binding as the index's default.
    Default,

    /// Re-export every named binding of the module.
    Namespace,

    /// Re-export the module's default binding under an explicit name.
    AliasedDefault,
}

/// A single re-export line targeting a sibling module.
///
/// # Examples
///
/// ```
/// use barrel_core::ReExportStatement;
///
/// let stmt = ReExportStatement::default_export("button");
/// assert_eq!(stmt.to_string(), "export { default } from './button';");
///
/// let aliased = stmt.into_aliased();
/// assert_eq!(aliased.to_string(), "export { default as button } from './button';");
///
/// let ns = ReExportStatement::namespace("hooks");
/// assert_eq!(ns.to_string(), "export * from './hooks';");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReExportStatement {
    /// The statement form.
    pub kind: ReExportKind,

    /// Base name of the module being re-exported.
    pub target_module: String,

    /// The exported name, set only for [`ReExportKind::AliasedDefault`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ReExportStatement {
    /// Creates a [`ReExportKind::Default`] statement.
    #[must_use]
    pub fn default_export(target_module: impl Into<String>) -> Self {
        Self {
            kind: ReExportKind::Default,
            target_module: target_module.into(),
            alias: None,
        }
    }

    /// Creates a [`ReExportKind::Namespace`] statement.
    #[must_use]
    pub fn namespace(target_module: impl Into<String>) -> Self {
        Self {
            kind: ReExportKind::Namespace,
            target_module: target_module.into(),
            alias: None,
        }
    }

    /// Rewrites a default re-export into an aliased one named after its target.
    ///
    /// Statements of any other kind are returned unchanged.
    #[must_use]
    pub fn into_aliased(mut self) -> Self {
        if self.is_default() {
            self.kind = ReExportKind::AliasedDefault;
            self.alias = Some(self.target_module.clone());
        }
        self
    }

    /// Returns `true` for an unaliased default re-export.
    #[inline]
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.kind, ReExportKind::Default)
    }

    /// Returns `true` for an `export *` re-export.
    #[inline]
    #[must_use]
    pub const fn is_namespace(&self) -> bool {
        matches!(self.kind, ReExportKind::Namespace)
    }

    /// Returns `true` for an aliased default re-export.
    #[inline]
    #[must_use]
    pub const fn is_aliased(&self) -> bool {
        matches!(self.kind, ReExportKind::AliasedDefault)
    }
}

impl fmt::Display for ReExportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = &self.target_module;
        match self.kind {
            ReExportKind::Default => write!(f, "export {{ default }} from './{target}';"),
            ReExportKind::Namespace => write!(f, "export * from './{target}';"),
            ReExportKind::AliasedDefault => {
                let alias = self.alias.as_deref().unwrap_or(target);
                write!(f, "export {{ default as {alias} }} from './{target}';")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_forms() {
        assert_eq!(
            ReExportStatement::default_export("a").to_string(),
            "export { default } from './a';"
        );
        assert_eq!(
            ReExportStatement::namespace("b").to_string(),
            "export * from './b';"
        );
        assert_eq!(
            ReExportStatement::default_export("c").into_aliased().to_string(),
            "export { default as c } from './c';"
        );
    }

    #[test]
    fn test_into_aliased_sets_alias_to_target() {
        let stmt = ReExportStatement::default_export("card").into_aliased();
        assert!(stmt.is_aliased());
        assert_eq!(stmt.alias.as_deref(), Some("card"));
    }

    #[test]
    fn test_into_aliased_leaves_namespace_alone() {
        let stmt = ReExportStatement::namespace("utils");
        assert_eq!(stmt.clone().into_aliased(), stmt);
    }

    #[test]
    fn test_statement_serialization_skips_empty_alias() {
        let json = serde_json::to_string(&ReExportStatement::namespace("a")).unwrap();
        assert_eq!(json, r#"{"kind":"namespace","target_module":"a"}"#);
    }
}
