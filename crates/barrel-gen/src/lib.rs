//! Barrel index generation for a directory of JavaScript/TypeScript modules.
//!
//! This crate drives one generation run: it lists a directory, classifies each
//! supported module with `barrel-exports`, synthesizes re-export statements,
//! resolves default-export collisions, and writes `index.ts` or `index.js`.
//!
//! # Overview
//!
//! The main entry point is [`IndexGenerator`], which combines:
//!
//! - [`SourceScanner`]: directory listing filtered to supported extensions
//! - [`synthesize`]: per-file re-export statements
//! - [`resolve`]: whole-batch default-export collision resolution
//! - [`Workspace`]: the filesystem port ([`OsWorkspace`], [`MemoryWorkspace`])
//! - [`Reporter`]: the message sink for the run's outcome
//!
//! # Example
//!
//! ```
//! use barrel_core::GenerateConfig;
//! use barrel_gen::{CollectingReporter, IndexGenerator, MemoryWorkspace};
//! use camino::Utf8Path;
//!
//! let workspace = MemoryWorkspace::new()
//!     .with_file("src/a.ts", "export default function a(){}")
//!     .with_file("src/b.ts", "export const b = 1;");
//!
//! let generator = IndexGenerator::new(&workspace, GenerateConfig::default());
//! let mut reporter = CollectingReporter::default();
//! let outcome = generator.run(Some(Utf8Path::new("src")), &mut reporter)?;
//!
//! assert!(outcome.is_created());
//! assert_eq!(reporter.last(), Some("index file created in /src"));
//! assert_eq!(
//!     workspace.file("src/index.ts").as_deref(),
//!     Some("export { default } from './a';\nexport * from './b';")
//! );
//! # Ok::<(), barrel_gen::GenerateError>(())
//! ```
//!
//! # Run Lifecycle
//!
//! ```text
//! Idle ─► Scanning ─► Deciding ─► Synthesizing ─► Writing ─► Done
//!            │            │                          │
//!            └────────────┴──────────────────────────┴──► Reported
//! ```
//!
//! `Reported` covers the informational stops: no target directory, no
//! supported files, and an index conflict (including one detected by the
//! re-check just before writing). I/O and pattern failures are returned as
//! [`GenerateError`] and leave the directory untouched.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod inspect;
mod outcome;
mod report;
mod resolve;
mod scan;
mod summary;
mod synth;
mod workspace;

pub use error::GenerateError;
pub use inspect::{ExistingIndex, FileShape, Inspection};
pub use outcome::{ConflictReason, Outcome};
pub use report::{CollectingReporter, Reporter, TracingReporter};
pub use resolve::{count_defaults, duplicate_aliases, resolve};
pub use scan::SourceScanner;
pub use summary::GenerationSummary;
pub use synth::{synthesize, FileStatements};
pub use workspace::{MemoryWorkspace, OsWorkspace, Workspace};

use barrel_core::{ExportShape, GenerateConfig, IndexExtension, IndexFile, OverwritePolicy, SourceFile};
use barrel_exports::{ExportMatcher, IndexVerdict};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::{debug, info, warn};

/// An index that is ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedIndex {
    /// Destination and statements.
    pub index: IndexFile,

    /// Rendered file content.
    pub content: String,

    /// Name of the target directory.
    pub dir_name: String,

    /// Supported source files found by the scan.
    pub files_scanned: usize,

    /// Whether an export-only index already exists at the destination.
    pub replaces_existing: bool,
}

impl PlannedIndex {
    /// Summarizes the plan.
    #[must_use]
    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary::new(
            self.index.path.clone(),
            self.dir_name.clone(),
            self.index.extension,
            self.files_scanned,
            self.replaces_existing,
            self.index.statements.clone(),
        )
    }
}

/// Result of planning: either an index to write or an informational stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plan", rename_all = "snake_case")]
pub enum Plan {
    /// Scanning and synthesis succeeded.
    Ready(PlannedIndex),

    /// The run stopped before synthesis.
    Stopped(Outcome),
}

/// What the deciding step concluded about the destination.
enum Decision {
    Fresh,
    Replace,
    Conflict(ConflictReason),
}

/// Generates barrel index files.
///
/// Each call is an independent, synchronous run; the generator keeps no
/// state between runs beyond its configuration.
///
/// # Examples
///
/// ```no_run
/// use barrel_core::GenerateConfig;
/// use barrel_gen::{IndexGenerator, OsWorkspace, TracingReporter};
/// use camino::Utf8Path;
///
/// let generator = IndexGenerator::new(OsWorkspace, GenerateConfig::default());
/// let outcome = generator.run(Some(Utf8Path::new("src/components")), &mut TracingReporter)?;
/// println!("{}", outcome.message());
/// # Ok::<(), barrel_gen::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexGenerator<W> {
    /// Filesystem port.
    workspace: W,
    /// Generation settings.
    config: GenerateConfig,
}

impl<W: Workspace> IndexGenerator<W> {
    /// Creates a generator over the given workspace.
    #[must_use]
    pub const fn new(workspace: W, config: GenerateConfig) -> Self {
        Self { workspace, config }
    }

    /// Runs one full invocation and reports the outcome.
    ///
    /// `target` is the directory resolved by the host; `None` stops with
    /// [`Outcome::NoTargetContext`]. The outcome's message is delivered to
    /// `reporter` before returning. I/O errors are returned without a report;
    /// the caller surfaces them.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if listing, reading or writing fails, or if
    /// the export patterns cannot be compiled.
    pub fn run(
        &self,
        target: Option<&Utf8Path>,
        reporter: &mut dyn Reporter,
    ) -> Result<Outcome, GenerateError> {
        let outcome = match target {
            Some(dir) => self.generate(dir)?,
            None => Outcome::NoTargetContext,
        };

        reporter.report(&outcome.message());
        Ok(outcome)
    }

    /// Plans and writes the index for `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if listing, reading or writing fails, or if
    /// the export patterns cannot be compiled.
    pub fn generate(&self, dir: &Utf8Path) -> Result<Outcome, GenerateError> {
        let planned = match self.plan(dir)? {
            Plan::Ready(planned) => planned,
            Plan::Stopped(outcome) => return Ok(outcome),
        };

        let path = &planned.index.path;

        if let Some(reason) = self.recheck(&planned)? {
            warn!(path = %path, reason = reason.describe(), "Index changed before write");
            return Ok(Outcome::IndexConflict {
                path: path.clone(),
                dir_name: planned.dir_name,
                reason,
            });
        }

        self.workspace
            .write(path, &planned.content)
            .map_err(|source| GenerateError::write(path, source))?;

        let summary = planned.summary();
        info!(
            path = %summary.index_path,
            statements = summary.statement_count(),
            replaced = summary.replaced_existing,
            "Index written"
        );

        Ok(Outcome::Created(summary))
    }

    /// Runs every step except the write.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if listing or reading fails, or if the export
    /// patterns cannot be compiled.
    pub fn plan(&self, dir: &Utf8Path) -> Result<Plan, GenerateError> {
        info!(dir = %dir, "Starting index generation");

        let files = SourceScanner::new(&self.config.extensions).scan(&self.workspace, dir)?;

        let Some(first) = files.first() else {
            info!(dir = %dir, "No supported files");
            return Ok(Plan::Stopped(Outcome::NoSupportedFiles {
                dir: dir.to_owned(),
                extensions: self.config.extensions.clone(),
            }));
        };

        let extension = IndexExtension::infer(first.extension);
        let index_path = extension.path_in(dir);
        let dir_name = dir_name(dir);

        let replaces_existing = match self.decide(&index_path)? {
            Decision::Fresh => false,
            Decision::Replace => true,
            Decision::Conflict(reason) => {
                warn!(path = %index_path, reason = reason.describe(), "Leaving existing index untouched");
                return Ok(Plan::Stopped(Outcome::IndexConflict {
                    path: index_path,
                    dir_name,
                    reason,
                }));
            }
        };

        let mut statements = Vec::with_capacity(files.len());
        for file in &files {
            if file.is_index() {
                continue;
            }
            let shape = self.classify_file(dir, file)?;
            statements.extend(synthesize(file, shape));
        }

        let index = IndexFile::new(dir, extension, resolve(statements));
        let content = index.render(self.config.separator);

        Ok(Plan::Ready(PlannedIndex {
            index,
            content,
            dir_name,
            files_scanned: files.len(),
            replaces_existing,
        }))
    }

    /// Reports file shapes and the existing index verdict without planning.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if listing or reading fails, or if the export
    /// patterns cannot be compiled.
    pub fn inspect(&self, dir: &Utf8Path) -> Result<Inspection, GenerateError> {
        let scanned = SourceScanner::new(&self.config.extensions).scan(&self.workspace, dir)?;
        let extension = scanned.first().map(|f| IndexExtension::infer(f.extension));

        let existing_index = match extension {
            Some(ext) => {
                let path = ext.path_in(dir);
                self.existing_verdict(&path)?
                    .map(|verdict| ExistingIndex { path, verdict })
            }
            None => None,
        };

        let mut files = Vec::with_capacity(scanned.len());
        for file in scanned {
            let shape = self.classify_file(dir, &file)?;
            files.push(FileShape { file, shape });
        }

        Ok(Inspection {
            dir: dir.to_owned(),
            files,
            extension,
            existing_index,
        })
    }

    /// Returns the generator's configuration.
    #[inline]
    pub const fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Returns the workspace the generator reads and writes.
    #[inline]
    pub const fn workspace(&self) -> &W {
        &self.workspace
    }

    /// Applies the overwrite policy to the destination.
    fn decide(&self, index_path: &Utf8Path) -> Result<Decision, GenerateError> {
        let Some(verdict) = self.existing_verdict(index_path)? else {
            return Ok(Decision::Fresh);
        };

        let decision = match self.config.overwrite_policy {
            OverwritePolicy::NeverOverwrite => Decision::Conflict(ConflictReason::Exists),
            OverwritePolicy::OverwriteIfExportOnly if verdict.is_export_only() => Decision::Replace,
            OverwritePolicy::OverwriteIfExportOnly => {
                Decision::Conflict(ConflictReason::Unsafe(verdict))
            }
        };
        Ok(decision)
    }

    /// Re-checks the destination immediately before writing.
    ///
    /// An index that appeared since planning, or an existing one that no
    /// longer holds only exports, blocks the write.
    fn recheck(&self, planned: &PlannedIndex) -> Result<Option<ConflictReason>, GenerateError> {
        let reason = match self.existing_verdict(&planned.index.path)? {
            None => None,
            Some(_) if !planned.replaces_existing => Some(ConflictReason::AppearedDuringRun),
            Some(verdict) if !verdict.is_export_only() => Some(ConflictReason::Unsafe(verdict)),
            Some(_) => None,
        };
        Ok(reason)
    }

    /// Reads and inspects an index file, if one exists.
    fn existing_verdict(&self, path: &Utf8Path) -> Result<Option<IndexVerdict>, GenerateError> {
        if !self.workspace.exists(path) {
            return Ok(None);
        }
        let text = self.read(path)?;
        let verdict = ExportMatcher::get()?.inspect_index(&text);
        debug!(path = %path, verdict = ?verdict, "Inspected existing index");
        Ok(Some(verdict))
    }

    fn classify_file(&self, dir: &Utf8Path, file: &SourceFile) -> Result<ExportShape, GenerateError> {
        let text = self.read(&dir.join(&file.name))?;
        let shape = ExportMatcher::get()?.classify(&text);
        debug!(
            file = %file.name,
            has_default = shape.has_default,
            has_named = shape.has_named,
            "Classified file"
        );
        Ok(shape)
    }

    fn read(&self, path: &Utf8Path) -> Result<String, GenerateError> {
        self.workspace
            .read_to_string(path)
            .map_err(|source| GenerateError::read(path, source))
    }
}

/// Name shown in reports after a leading `/`: the directory's last component,
/// or the path itself without leading slashes when it has none. The root
/// directory yields an empty name, so its report reads `/`.
fn dir_name(dir: &Utf8Path) -> String {
    dir.file_name().map_or_else(
        || dir.as_str().trim_start_matches('/').to_owned(),
        str::to_owned,
    )
}

/// Resolves the target directory from a host's "active file".
///
/// Returns the file's parent directory, or `None` when the file has no parent
/// component (in which case the host has no usable context).
///
/// # Examples
///
/// ```
/// use barrel_gen::target_from_active_file;
/// use camino::Utf8Path;
///
/// assert_eq!(
///     target_from_active_file(Utf8Path::new("src/ui/button.tsx")).map(|p| p.to_string()),
///     Some("src/ui".to_owned())
/// );
/// assert_eq!(target_from_active_file(Utf8Path::new("button.tsx")), None);
/// ```
#[must_use]
pub fn target_from_active_file(active_file: &Utf8Path) -> Option<Utf8PathBuf> {
    active_file
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .map(Utf8Path::to_owned)
}
