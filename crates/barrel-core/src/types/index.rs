//! The generated index file.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use super::source::{SourceExtension, INDEX_BASE_NAME};
use super::statement::ReExportStatement;
use crate::config::Separator;

/// Extension of the generated index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexExtension {
    /// `index.ts`
    Ts,
    /// `index.js`
    Js,
}

impl IndexExtension {
    /// Picks the index extension from the first scanned source file.
    ///
    /// `ts` when that file's extension contains a `t`, `js` otherwise. Only the
    /// first file is consulted; a folder of mostly `.js` files whose first entry
    /// is `.tsx` still gets `index.ts`.
    ///
    /// # Examples
    ///
    /// ```
    /// use barrel_core::{IndexExtension, SourceExtension};
    ///
    /// assert_eq!(IndexExtension::infer(SourceExtension::Tsx), IndexExtension::Ts);
    /// assert_eq!(IndexExtension::infer(SourceExtension::Jsx), IndexExtension::Js);
    /// ```
    #[must_use]
    pub fn infer(first: SourceExtension) -> Self {
        if first.is_typescript() { Self::Ts } else { Self::Js }
    }

    /// Returns the extension without its leading dot.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
        }
    }

    /// Returns the index file name (`index.ts` or `index.js`).
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{INDEX_BASE_NAME}.{}", self.as_str())
    }

    /// Returns the index path inside `dir`.
    #[must_use]
    pub fn path_in(self, dir: &Utf8Path) -> Utf8PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for IndexExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully planned index file: where it goes and what it re-exports.
///
/// Content is rendered in one piece by [`IndexFile::render`] so the write that
/// follows is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    /// Destination path (`<dir>/index.<ext>`).
    pub path: Utf8PathBuf,

    /// Extension of the destination.
    pub extension: IndexExtension,

    /// Statements in emission order.
    pub statements: Vec<ReExportStatement>,
}

impl IndexFile {
    /// Creates an index file targeting `dir`.
    #[must_use]
    pub fn new(dir: &Utf8Path, extension: IndexExtension, statements: Vec<ReExportStatement>) -> Self {
        Self {
            path: extension.path_in(dir),
            extension,
            statements,
        }
    }

    /// Renders the statements, one per line, joined by `separator`.
    ///
    /// No trailing newline is appended, so rendering an unchanged folder twice
    /// produces byte-identical content.
    #[must_use]
    pub fn render(&self, separator: Separator) -> String {
        self.statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}
