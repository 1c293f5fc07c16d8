//! Read-only inspection of a directory.
//!
//! [`Inspection`] reports what the generator sees without planning or writing
//! anything: the shape of every supported file and the verdict on any
//! existing index.

use barrel_core::{ExportShape, IndexExtension, SourceFile};
use barrel_exports::IndexVerdict;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// A scanned file with its inferred export shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileShape {
    /// The scanned file.
    pub file: SourceFile,

    /// Its inferred shape.
    pub shape: ExportShape,
}

/// An existing index file and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingIndex {
    /// Path of the index.
    pub path: Utf8PathBuf,

    /// Result of the safety check.
    pub verdict: IndexVerdict,
}

/// Everything the generator would base its decisions on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    /// The inspected directory.
    pub dir: Utf8PathBuf,

    /// Supported files in scan order.
    pub files: Vec<FileShape>,

    /// Extension the index would get; `None` when no file is supported.
    pub extension: Option<IndexExtension>,

    /// The existing index at the target path, if any.
    pub existing_index: Option<ExistingIndex>,
}

impl Inspection {
    /// Number of files that would contribute at least one statement.
    #[must_use]
    pub fn exporting_files(&self) -> usize {
        self.files
            .iter()
            .filter(|f| !f.file.is_index() && !f.shape.is_empty())
            .count()
    }
}
