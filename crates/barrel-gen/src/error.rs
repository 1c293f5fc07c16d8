//! Error types for the barrel-gen crate.
//!
//! I/O failures and an unusable pattern set are errors. Informational stops
//! (no target, no supported files, index conflict) are reported through
//! [`Outcome`](crate::Outcome).

use std::io;

use camino::{Utf8Path, Utf8PathBuf};

/// Errors that abort a generation run.
///
/// None of these are retried. When one is returned nothing has been written:
/// the index content is built in memory before the single write.
///
/// # Examples
///
/// ```
/// use barrel_gen::GenerateError;
/// use std::io;
///
/// fn handle_error(err: GenerateError) {
///     match err {
///         GenerateError::List { path, .. } => eprintln!("Cannot list {path}"),
///         GenerateError::Read { path, .. } => eprintln!("Cannot read {path}"),
///         GenerateError::Write { path, .. } => eprintln!("Cannot write {path}"),
///         GenerateError::Pattern(err) => eprintln!("Cannot match exports: {err}"),
///     }
/// }
///
/// handle_error(GenerateError::read("src/a.ts", io::Error::from(io::ErrorKind::NotFound)));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Failed to list the target directory.
    #[error("failed to list directory {path}: {source}")]
    List {
        /// The directory that couldn't be listed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to read a source file or the existing index.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the index file.
    #[error("failed to write index {path}: {source}")]
    Write {
        /// The index path that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The export patterns failed to compile.
    #[error("failed to prepare export matchers: {0}")]
    Pattern(#[from] barrel_exports::PatternError),
}

impl GenerateError {
    /// Creates a new [`GenerateError::List`] error.
    #[inline]
    pub fn list(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::List {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`GenerateError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`GenerateError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns the path the failing operation targeted, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::List { path, .. } | Self::Read { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::Pattern(_) => None,
        }
    }

    /// Returns the kind of the underlying I/O error, if this is an I/O failure.
    #[must_use]
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::List { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                Some(source.kind())
            }
            Self::Pattern(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_error_read() {
        let err = GenerateError::read(
            "src/a.ts",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.path().map(Utf8Path::as_str), Some("src/a.ts"));
        assert_eq!(err.kind(), Some(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("src/a.ts"));
    }

    #[test]
    fn test_generate_error_write() {
        let err = GenerateError::write(
            "src/index.ts",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(
            err.to_string(),
            "failed to write index src/index.ts: denied"
        );
    }

    #[test]
    fn test_generate_error_list() {
        let err = GenerateError::list("missing", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.path().map(Utf8Path::as_str), Some("missing"));
        assert!(err.to_string().starts_with("failed to list directory missing"));
    }

    #[test]
    fn test_generate_error_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = GenerateError::from(barrel_exports::PatternError::Compile {
            pattern: "(",
            source,
        });
        assert!(err.path().is_none());
        assert!(err.kind().is_none());
        assert!(err.to_string().starts_with("failed to prepare export matchers"));
    }
}
