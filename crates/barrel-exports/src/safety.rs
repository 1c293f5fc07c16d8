//! Safety check for regenerating an existing index file.
//!
//! An index is safe to regenerate only when it looks like a pure barrel: no
//! imports, no declarations, no arrow functions. Anything else is treated as
//! hand-authored and must be left alone.

use serde::{Deserialize, Serialize};

use crate::patterns::{ExportMatcher, ARROW};

/// Outcome of inspecting an existing index file.
///
/// # Examples
///
/// ```
/// use barrel_exports::{ExportMatcher, IndexVerdict};
///
/// let matcher = ExportMatcher::get()?;
/// assert_eq!(matcher.inspect_index("export * from './a';"), IndexVerdict::ExportOnly);
/// assert_eq!(
///     matcher.inspect_index("import { a } from './a';\nexport { a };"),
///     IndexVerdict::HasImports
/// );
/// assert_eq!(
///     matcher.inspect_index("const x = 1;\nexport { x };"),
///     IndexVerdict::HasLogic
/// );
/// # Ok::<(), barrel_exports::PatternError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexVerdict {
    /// Only export and re-export statements were found.
    ExportOnly,

    /// The file imports other modules.
    HasImports,

    /// The file declares functions, variables or arrow functions.
    HasLogic,
}

impl IndexVerdict {
    /// Returns `true` if the index may be regenerated.
    #[inline]
    #[must_use]
    pub const fn is_export_only(self) -> bool {
        matches!(self, Self::ExportOnly)
    }

    /// Short human-readable reason, suitable for a conflict report.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::ExportOnly => "contains only exports",
            Self::HasImports => "contains import statements",
            Self::HasLogic => "contains custom logic",
        }
    }
}

impl ExportMatcher {
    /// Inspects an existing index file's text.
    ///
    /// Imports are checked before declarations, so a file with both reports
    /// [`IndexVerdict::HasImports`].
    #[must_use]
    pub fn inspect_index(&self, text: &str) -> IndexVerdict {
        if self.import_statement.is_match(text) || self.dynamic_import.is_match(text) {
            IndexVerdict::HasImports
        } else if self.declaration.is_match(text) || text.contains(ARROW) {
            IndexVerdict::HasLogic
        } else {
            IndexVerdict::ExportOnly
        }
    }

    /// Returns `true` if the text plausibly holds only export statements.
    ///
    /// # Examples
    ///
    /// ```
    /// use barrel_exports::ExportMatcher;
    ///
    /// let matcher = ExportMatcher::get()?;
    /// assert!(matcher.is_export_only("export * from './a';"));
    /// assert!(!matcher.is_export_only("import {a} from './a'; export * from './a';"));
    /// assert!(!matcher.is_export_only("const x = 1; export {x};"));
    /// # Ok::<(), barrel_exports::PatternError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn is_export_only(&self, text: &str) -> bool {
        self.inspect_index(text).is_export_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect_index(text: &str) -> IndexVerdict {
        ExportMatcher::get().unwrap().inspect_index(text)
    }

    fn is_export_only(text: &str) -> bool {
        ExportMatcher::get().unwrap().is_export_only(text)
    }

    #[test]
    fn test_generated_index_is_export_only() {
        let text = "export { default as a } from './a';\nexport * from './b';";
        assert!(is_export_only(text));
    }

    #[test]
    fn test_empty_index_is_export_only() {
        assert!(is_export_only(""));
    }

    #[test]
    fn test_imports_are_unsafe() {
        assert_eq!(
            inspect_index("import {a} from './a'; export * from './a';"),
            IndexVerdict::HasImports
        );
        assert_eq!(inspect_index("import './styles.css';"), IndexVerdict::HasImports);
    }

    #[test]
    fn test_declarations_are_unsafe() {
        assert_eq!(inspect_index("const x = 1; export {x};"), IndexVerdict::HasLogic);
        assert_eq!(inspect_index("let y;\nexport { y };"), IndexVerdict::HasLogic);
        assert_eq!(inspect_index("var z = 0;"), IndexVerdict::HasLogic);
        assert_eq!(
            inspect_index("function setup() {}\nexport * from './a';"),
            IndexVerdict::HasLogic
        );
    }

    #[test]
    fn test_arrow_is_unsafe() {
        assert_eq!(
            inspect_index("export default () => null;"),
            IndexVerdict::HasLogic
        );
        assert!(!is_export_only("const helper = () => {}; export * from './a';"));
    }

    #[test]
    fn test_imports_take_precedence() {
        assert_eq!(
            inspect_index("import a from './a';\nconst b = a;"),
            IndexVerdict::HasImports
        );
    }

    #[test]
    fn test_module_names_do_not_trip_keywords() {
        assert!(is_export_only(
            "export * from './constants';\nexport * from './important';\nexport * from './variables';"
        ));
    }

    #[test]
    fn test_index_reexporting_an_import_module() {
        let generated = "export * from './import';\nexport * from './util';";
        assert!(is_export_only("export * from './import';"));
        assert_eq!(inspect_index(generated), IndexVerdict::ExportOnly);
        assert_eq!(
            inspect_index("export { default as import_map } from './import_map';"),
            IndexVerdict::ExportOnly
        );
    }

    #[test]
    fn test_dynamic_import_is_unsafe() {
        assert_eq!(
            inspect_index("export const load = () => import('./heavy');"),
            IndexVerdict::HasImports
        );
    }

    #[test]
    fn test_keyword_module_names() {
        assert!(is_export_only("export * from './let';\nexport * from './var';"));
        // Known limitation: an aliased default named after a keyword reads as a declaration.
        assert_eq!(
            inspect_index("export { default as let } from './let';"),
            IndexVerdict::HasLogic
        );
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(IndexVerdict::HasImports.reason(), "contains import statements");
        assert_eq!(IndexVerdict::HasLogic.reason(), "contains custom logic");
    }
}
