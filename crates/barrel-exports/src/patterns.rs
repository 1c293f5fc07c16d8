//! Regular expressions for export and index inspection.
//!
//! The pattern sources are public so they can be reviewed and reused. The
//! compiled set lives in [`ExportMatcher`], built once per process and shared
//! across threads.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::PatternError;

/// `export default` followed by a function or class declaration, or by any
/// expression running up to a statement boundary (`;` or end of line).
pub const DEFAULT_EXPORT: &str =
    r"(?m)\bexport\s+default\s+(?:(?:async\s+)?function\b|class\b|[^;\s][^;]*?(?:;|$))";

/// `export const`, `export function`, `export class`, `export {` or `export *`.
pub const NAMED_EXPORT: &str = r"\bexport\s+(?:(?:const|function|class)\b|\{|\*)";

/// A static import statement in statement position: `import x from`,
/// `import {`, `import *` or `import './x'`.
///
/// The keyword must start a line or follow `;`, `{` or `}`, so a module path
/// such as `'./import'` never matches.
pub const IMPORT_STATEMENT: &str = r#"(?m)(?:^|[;{}])\s*import(?:\s+|\s*[{*'"])"#;

/// A dynamic `import(...)` call.
pub const DYNAMIC_IMPORT: &str = r"\bimport\s*\(";

/// A function or variable declaration keyword.
pub const DECLARATION: &str = r"\b(?:function|const|let|var)\s+";

/// Arrow-function marker.
pub const ARROW: &str = "=>";

static COMPILED: OnceLock<ExportMatcher> = OnceLock::new();

/// The compiled pattern set.
///
/// Classification lives in [`classify`](Self::classify) and the index safety
/// check in [`inspect_index`](Self::inspect_index).
///
/// # Examples
///
/// ```
/// use barrel_exports::ExportMatcher;
///
/// let matcher = ExportMatcher::get()?;
/// assert!(matcher.classify("export const a = 1;").has_named);
/// assert!(matcher.is_export_only("export * from './a';"));
/// # Ok::<(), barrel_exports::PatternError>(())
/// ```
#[derive(Debug)]
pub struct ExportMatcher {
    pub(crate) default_export: Regex,
    pub(crate) named_export: Regex,
    pub(crate) import_statement: Regex,
    pub(crate) dynamic_import: Regex,
    pub(crate) declaration: Regex,
}

impl ExportMatcher {
    /// Returns the shared matcher, compiling it on first use.
    ///
    /// This function is thread-safe.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Compile`] if a pattern fails to compile.
    pub fn get() -> Result<&'static Self, PatternError> {
        if let Some(matcher) = COMPILED.get() {
            return Ok(matcher);
        }

        let matcher = Self::compile()?;

        Ok(COMPILED.get_or_init(|| matcher))
    }

    fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            default_export: compile(DEFAULT_EXPORT)?,
            named_export: compile(NAMED_EXPORT)?,
            import_statement: compile(IMPORT_STATEMENT)?,
            dynamic_import: compile(DYNAMIC_IMPORT)?,
            declaration: compile(DECLARATION)?,
        })
    }
}

/// Compiles a single pattern.
fn compile(pattern: &'static str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Compile { pattern, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> &'static ExportMatcher {
        ExportMatcher::get().unwrap()
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            DEFAULT_EXPORT,
            NAMED_EXPORT,
            IMPORT_STATEMENT,
            DYNAMIC_IMPORT,
            DECLARATION,
            ARROW,
        ] {
            assert!(compile(pattern).is_ok(), "pattern should compile: {pattern}");
        }
    }

    #[test]
    fn test_get_returns_shared_instance() {
        assert!(std::ptr::eq(matcher(), matcher()));
    }

    #[test]
    fn test_compile_error_names_pattern() {
        let err = compile("(unclosed").unwrap_err();
        assert!(matches!(err, PatternError::Compile { pattern: "(unclosed", .. }));
    }

    #[test]
    fn test_import_pattern_ignores_identifiers() {
        let import = &matcher().import_statement;
        assert!(import.is_match("import React from 'react';"));
        assert!(import.is_match("import{a}from'./a'"));
        assert!(import.is_match("import './polyfill';"));
        assert!(import.is_match("  import * as ns from './ns';"));
        assert!(import.is_match("export * from './a'; import b from './b';"));
        assert!(!import.is_match("export * from './important';"));
        assert!(!import.is_match("export * from './import-map';"));
    }

    #[test]
    fn test_import_pattern_ignores_module_paths() {
        let m = matcher();
        for line in [
            "export * from './import';",
            "export { default } from './import';",
            "export { default as import_ } from \"./import\";",
        ] {
            assert!(!m.import_statement.is_match(line), "{line}");
            assert!(!m.dynamic_import.is_match(line), "{line}");
        }
    }

    #[test]
    fn test_dynamic_import() {
        assert!(matcher().dynamic_import.is_match("const m = await import('./m');"));
        assert!(matcher().dynamic_import.is_match("import ('./m')"));
    }

    #[test]
    fn test_declaration_pattern_requires_keyword() {
        let declaration = &matcher().declaration;
        assert!(declaration.is_match("let x = 1;"));
        assert!(declaration.is_match("function helper() {}"));
        assert!(!declaration.is_match("export * from './constants';"));
        assert!(!declaration.is_match("export * from './functions';"));
    }
}
