//! Directory scanning for candidate source files.
//!
//! This module provides [`SourceScanner`], which lists one directory (no
//! recursion) through a [`Workspace`] and keeps the files whose extension is in
//! the configured set.
//!
//! # Examples
//!
//! ```
//! use barrel_core::SourceExtension;
//! use barrel_gen::{MemoryWorkspace, SourceScanner};
//! use camino::Utf8Path;
//!
//! let workspace = MemoryWorkspace::new()
//!     .with_file("src/button.tsx", "")
//!     .with_file("src/button.css", "");
//!
//! let scanner = SourceScanner::new(&SourceExtension::ALL);
//! let files = scanner.scan(&workspace, Utf8Path::new("src")).unwrap();
//! assert_eq!(files.len(), 1);
//! assert_eq!(files[0].base_name, "button");
//! ```

use barrel_core::{SourceExtension, SourceFile};
use camino::Utf8Path;

use crate::error::GenerateError;
use crate::workspace::Workspace;

/// Lists a directory and filters it down to supported source files.
#[derive(Debug, Clone, Copy)]
pub struct SourceScanner<'a> {
    /// Extensions accepted as sources.
    extensions: &'a [SourceExtension],
}

impl<'a> SourceScanner<'a> {
    /// Creates a scanner accepting the given extensions.
    #[must_use]
    pub const fn new(extensions: &'a [SourceExtension]) -> Self {
        Self { extensions }
    }

    /// Collects the supported source files directly inside `dir`.
    ///
    /// The returned order is the workspace's listing order; it is not
    /// re-sorted. Index files are included so the caller can infer the
    /// output extension from the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::List`] if the directory cannot be listed.
    pub fn scan<W: Workspace + ?Sized>(
        &self,
        workspace: &W,
        dir: &Utf8Path,
    ) -> Result<Vec<SourceFile>, GenerateError> {
        let names = workspace
            .list_dir(dir)
            .map_err(|source| GenerateError::list(dir, source))?;

        Ok(names
            .iter()
            .filter_map(|name| SourceFile::from_file_name(name, self.extensions))
            .collect())
    }

    /// Returns the extensions this scanner accepts.
    #[inline]
    #[must_use]
    pub const fn extensions(&self) -> &[SourceExtension] {
        self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::MemoryWorkspace;

    fn workspace() -> MemoryWorkspace {
        MemoryWorkspace::new()
            .with_file("app/zeta.ts", "")
            .with_file("app/styles.css", "")
            .with_file("app/alpha.jsx", "")
            .with_file("app/data.json", "")
            .with_file("app/index.ts", "")
            .with_file("app/README", "")
    }

    #[test]
    fn test_scan_filters_and_keeps_order() {
        let scanner = SourceScanner::new(&SourceExtension::ALL);
        let files = scanner.scan(&workspace(), Utf8Path::new("app")).unwrap();

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta.ts", "alpha.jsx", "index.ts"]);
    }

    #[test]
    fn test_scan_respects_configured_extensions() {
        let only_jsx = [SourceExtension::Jsx];
        let scanner = SourceScanner::new(&only_jsx);
        let files = scanner.scan(&workspace(), Utf8Path::new("app")).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "alpha.jsx");
        assert_eq!(scanner.extensions(), &only_jsx);
    }

    #[test]
    fn test_scan_no_supported_files() {
        let workspace = MemoryWorkspace::new()
            .with_file("assets/logo.svg", "")
            .with_file("assets/theme.css", "");
        let scanner = SourceScanner::new(&SourceExtension::ALL);

        assert!(scanner.scan(&workspace, Utf8Path::new("assets")).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let scanner = SourceScanner::new(&SourceExtension::ALL);
        let err = scanner
            .scan(&MemoryWorkspace::new(), Utf8Path::new("missing"))
            .unwrap_err();

        assert!(matches!(err, GenerateError::List { .. }));
        assert_eq!(err.path().map(Utf8Path::as_str), Some("missing"));
    }
}
