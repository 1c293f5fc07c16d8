//! CLI entry point for the barrel index generator.
//!
//! Generates an `index.ts` / `index.js` barrel file that re-exports every
//! sibling JavaScript/TypeScript module in a directory.
//!
//! # Usage
//!
//! ```bash
//! barrel [OPTIONS] <COMMAND>
//!
//! # Generate src/components/index.ts
//! barrel generate src/components
//!
//! # Use the folder of the file being edited
//! barrel generate --file src/components/button.tsx
//!
//! # Preview without writing
//! barrel generate src/components --dry-run
//!
//! # Show what the generator sees
//! barrel inspect src/components --format json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use barrel_core::{
    Config, ConfigError, ExportShape, OverwritePolicy, Separator, SourceExtension,
};
use barrel_gen::{
    target_from_active_file, IndexGenerator, Inspection, OsWorkspace, Outcome, Plan, Reporter,
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Generates barrel index files for JavaScript/TypeScript folders.
///
/// Every sibling module is re-exported from `index.ts` (or `index.js`); an
/// existing index is only replaced when it contains nothing but exports.
#[derive(Parser)]
#[command(name = "barrel", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file.
    #[arg(short, long, global = true, env = "BARREL_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate the index file for a folder.
    Generate {
        /// Folder to generate the index in.
        dir: Option<Utf8PathBuf>,

        /// A file inside the target folder (the editor's active file).
        #[arg(short, long, conflicts_with = "dir")]
        file: Option<Utf8PathBuf>,

        /// Policy for an existing index file.
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Separator between statements.
        #[arg(long, value_enum)]
        separator: Option<SeparatorArg>,

        /// Source extension to include (repeatable).
        #[arg(short, long = "ext", value_enum)]
        ext: Vec<ExtArg>,

        /// Print the index instead of writing it.
        #[arg(long)]
        dry_run: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show export shapes and the existing index verdict without writing.
    Inspect {
        /// Folder to inspect.
        #[arg(default_value = ".")]
        dir: Utf8PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON.
    Json,
}

/// Overwrite policy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Never touch an existing index.
    Never,
    /// Regenerate an existing index that holds only exports.
    ExportOnly,
}

impl From<PolicyArg> for OverwritePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Never => Self::NeverOverwrite,
            PolicyArg::ExportOnly => Self::OverwriteIfExportOnly,
        }
    }
}

/// Statement separator flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeparatorArg {
    /// One statement per line.
    Newline,
    /// A blank line between statements.
    Blank,
}

impl From<SeparatorArg> for Separator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Newline => Self::Newline,
            SeparatorArg::Blank => Self::BlankLine,
        }
    }
}

/// Source extension flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExtArg {
    Js,
    Ts,
    Jsx,
    Tsx,
}

impl From<ExtArg> for SourceExtension {
    fn from(arg: ExtArg) -> Self {
        match arg {
            ExtArg::Js => Self::Js,
            ExtArg::Ts => Self::Ts,
            ExtArg::Jsx => Self::Jsx,
            ExtArg::Tsx => Self::Tsx,
        }
    }
}

/// Flags that override the configuration file.
#[derive(Debug, Default)]
struct Overrides {
    policy: Option<PolicyArg>,
    separator: Option<SeparatorArg>,
    extensions: Vec<ExtArg>,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
/// Logs go to stderr so stdout stays parseable.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Loads the configuration file (if any) and applies flag overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the result is invalid.
fn build_config(path: Option<&Utf8Path>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(policy) = overrides.policy {
        config.generate.overwrite_policy = policy.into();
    }
    if let Some(separator) = overrides.separator {
        config.generate.separator = separator.into();
    }
    if !overrides.extensions.is_empty() {
        let mut extensions: Vec<SourceExtension> = Vec::with_capacity(overrides.extensions.len());
        for ext in overrides.extensions.iter().copied().map(SourceExtension::from) {
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        config.generate.extensions = extensions;
    }

    config.generate.validate()?;
    Ok(config)
}

/// Checks that `path` is an existing directory and returns it canonicalized.
fn validate_dir(path: &Utf8Path) -> Result<Utf8PathBuf, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingDirectory(path.to_owned()));
    }
    if !path.is_dir() {
        return Err(ConfigError::InvalidPath {
            path: path.to_owned(),
            reason: "not a directory".to_owned(),
        });
    }
    path.canonicalize_utf8().map_err(|e| ConfigError::InvalidPath {
        path: path.to_owned(),
        reason: e.to_string(),
    })
}

/// Resolves the target folder from `DIR` or `--file`.
///
/// Returns `None` when neither is given.
fn resolve_target(
    dir: Option<&Utf8Path>,
    file: Option<&Utf8Path>,
) -> Result<Option<Utf8PathBuf>, ConfigError> {
    if let Some(dir) = dir {
        return validate_dir(dir).map(Some);
    }

    let Some(file) = file else {
        return Ok(None);
    };

    let file = file.canonicalize_utf8().map_err(|e| ConfigError::InvalidPath {
        path: file.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(target_from_active_file(&file))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Prints each report message on its own stdout line.
struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, message: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{message}");
    }
}

/// Generates (or previews) the index for the resolved target.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
fn run_generate(
    config: Config,
    target: Option<&Utf8Path>,
    dry_run: bool,
    format: OutputFormat,
) -> color_eyre::Result<()> {
    let generator = IndexGenerator::new(OsWorkspace, config.generate);

    if dry_run {
        let plan = match target {
            Some(dir) => generator.plan(dir)?,
            None => Plan::Stopped(Outcome::NoTargetContext),
        };
        return print_plan(&plan, format);
    }

    match format {
        OutputFormat::Text => {
            generator.run(target, &mut StdoutReporter)?;
        }
        OutputFormat::Json => {
            let outcome = match target {
                Some(dir) => generator.generate(dir)?,
                None => Outcome::NoTargetContext,
            };
            print_json(&outcome)?;
        }
    }

    Ok(())
}

/// Prints the inspection of `dir`.
///
/// # Errors
///
/// Returns an error if listing or reading fails.
fn run_inspect(config: Config, dir: &Utf8Path, format: OutputFormat) -> color_eyre::Result<()> {
    info!(dir = %dir, "Inspecting folder");

    let generator = IndexGenerator::new(OsWorkspace, config.generate);
    let inspection = generator.inspect(dir)?;

    match format {
        OutputFormat::Text => print_inspection(&inspection),
        OutputFormat::Json => print_json(&inspection)?,
    }

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> color_eyre::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{json}")?;
    Ok(())
}

/// Prints a dry-run plan.
fn print_plan(plan: &Plan, format: OutputFormat) -> color_eyre::Result<()> {
    if format == OutputFormat::Json {
        return print_json(plan);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match plan {
        Plan::Ready(planned) => {
            let action = if planned.replaces_existing {
                "would replace"
            } else {
                "would create"
            };
            writeln!(handle, "// {} {}", action, planned.index.path)?;
            writeln!(handle, "{}", planned.content)?;
        }
        Plan::Stopped(outcome) => writeln!(handle, "{}", outcome.message())?,
    }
    Ok(())
}

/// Prints an inspection as text.
fn print_inspection(inspection: &Inspection) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let _ = writeln!(handle, "Folder: {}", inspection.dir);

    match (&inspection.existing_index, inspection.extension) {
        (Some(existing), _) => {
            let _ = writeln!(
                handle,
                "Index:  {} ({})",
                existing.path,
                existing.verdict.reason()
            );
        }
        (None, Some(ext)) => {
            let _ = writeln!(handle, "Index:  {} (not present)", ext.file_name());
        }
        (None, None) => {
            let _ = writeln!(handle, "Index:  (no supported files)");
        }
    }

    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "Files ({}, {} exporting):",
        inspection.files.len(),
        inspection.exporting_files()
    );
    for entry in &inspection.files {
        let label = if entry.file.is_index() {
            "index"
        } else {
            shape_label(entry.shape)
        };
        let _ = writeln!(handle, "  {:<32} {}", entry.file.name, label);
    }
}

/// Short label for an export shape.
fn shape_label(shape: ExportShape) -> &'static str {
    match (shape.has_default, shape.has_named) {
        (true, true) => "default + named",
        (true, false) => "default",
        (false, true) => "named",
        (false, false) => "no exports",
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    match cli.command {
        Commands::Generate {
            dir,
            file,
            policy,
            separator,
            ext,
            dry_run,
            format,
        } => {
            let overrides = Overrides {
                policy,
                separator,
                extensions: ext,
            };
            let config = build_config(cli.config.as_deref(), &overrides)?;
            let target = resolve_target(dir.as_deref(), file.as_deref())?;
            run_generate(config, target.as_deref(), dry_run, format)
        }
        Commands::Inspect { dir, format } => {
            let config = build_config(cli.config.as_deref(), &Overrides::default())?;
            let dir = validate_dir(&dir)?;
            run_inspect(config, &dir, format)
        }
    }
}
