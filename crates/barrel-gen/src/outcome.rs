//! Informational results of a generation run.

use barrel_core::SourceExtension;
use barrel_exports::IndexVerdict;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::summary::GenerationSummary;

/// Why an existing index blocked the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "verdict", rename_all = "snake_case")]
pub enum ConflictReason {
    /// The index exists and the policy never overwrites.
    Exists,

    /// The index holds more than exports.
    Unsafe(IndexVerdict),

    /// The index appeared between the existence check and the write.
    AppearedDuringRun,
}

impl ConflictReason {
    /// Short human-readable explanation.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Exists => "overwriting is disabled",
            Self::Unsafe(verdict) => verdict.reason(),
            Self::AppearedDuringRun => "created while generating",
        }
    }
}

/// How a run ended, when it did not fail with an I/O error.
///
/// Every variant maps to one human-readable message via
/// [`message`](Self::message).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The index was written.
    Created(GenerationSummary),

    /// The host could not determine a target directory.
    NoTargetContext,

    /// The directory has no file with a supported extension.
    NoSupportedFiles {
        /// The scanned directory.
        dir: Utf8PathBuf,
        /// Extensions that were looked for.
        extensions: Vec<SourceExtension>,
    },

    /// An index already exists and was left untouched.
    IndexConflict {
        /// Path of the existing index.
        path: Utf8PathBuf,
        /// Name of the directory holding it.
        dir_name: String,
        /// Why it was not overwritten.
        reason: ConflictReason,
    },
}

impl Outcome {
    /// Returns `true` if an index file was written.
    #[inline]
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Returns the summary of a successful run.
    #[must_use]
    pub const fn summary(&self) -> Option<&GenerationSummary> {
        match self {
            Self::Created(summary) => Some(summary),
            _ => None,
        }
    }

    /// Returns the message delivered to the report sink.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Created(summary) => format!("index file created in /{}", summary.dir_name),
            Self::NoTargetContext => {
                "Run command in a file that is inside the same folder you want to create index file"
                    .to_owned()
            }
            Self::NoSupportedFiles { extensions, .. } => {
                let list = extensions
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join("|");
                format!("No files with {list} extensions found in current folder.")
            }
            Self::IndexConflict {
                dir_name, reason, ..
            } => format!(
                "Index file already exists at /{dir_name} ({})",
                reason.describe()
            ),
        }
    }
}
