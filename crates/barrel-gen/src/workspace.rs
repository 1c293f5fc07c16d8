//! Filesystem access for the generator.
//!
//! The generator never touches the filesystem directly. Every listing, read,
//! existence check and write goes through a [`Workspace`], so hosts can supply
//! their own storage and tests can run against [`MemoryWorkspace`].
//!
//! # Examples
//!
//! ```
//! use barrel_gen::{MemoryWorkspace, Workspace};
//! use camino::Utf8Path;
//!
//! let workspace = MemoryWorkspace::new()
//!     .with_file("src/a.ts", "export const a = 1;")
//!     .with_file("src/b.ts", "export default 2;");
//!
//! let names = workspace.list_dir(Utf8Path::new("src")).unwrap();
//! assert_eq!(names, vec!["a.ts", "b.ts"]);
//! ```

use std::cell::RefCell;
use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Storage primitives the generator depends on.
///
/// Implementations report failures as [`io::Error`]; the generator wraps them
/// with the offending path.
pub trait Workspace {
    /// Returns the names of the files directly inside `dir`.
    ///
    /// The order returned is the scan order used for the whole run.
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<String>>;

    /// Reads a file's full text.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String>;

    /// Returns `true` if a file exists at `path`.
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Writes `contents` to `path`, replacing any previous file.
    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()>;
}

impl<W: Workspace + ?Sized> Workspace for &W {
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<String>> {
        (**self).list_dir(dir)
    }

    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        (**self).exists(path)
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}

/// A [`Workspace`] backed by the local filesystem.
///
/// Directory listings contain regular files only (symlinks are followed) and
/// are sorted by name so repeated runs see the same scan order. Entries whose
/// names are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsWorkspace;

impl Workspace for OsWorkspace {
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !fs::metadata(&path).is_ok_and(|meta| meta.is_file()) {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "Skipping non-UTF-8 file name"),
            }
        }

        names.sort_unstable();
        Ok(names)
    }

    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        fs::read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        path.is_file()
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// An in-memory [`Workspace`].
///
/// Files are kept in insertion order, which becomes the scan order. A
/// directory exists when it holds a file or was added with
/// [`with_dir`](Self::with_dir).
#[derive(Debug, Default)]
pub struct MemoryWorkspace {
    files: RefCell<Vec<(Utf8PathBuf, String)>>,
    dirs: Vec<Utf8PathBuf>,
    read_only: bool,
}

impl MemoryWorkspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path.into(), contents.into());
        self
    }

    /// Adds an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.dirs.push(path.into());
        self
    }

    /// Makes every write fail with [`io::ErrorKind::PermissionDenied`].
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Returns a copy of a file's contents.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Utf8Path>) -> Option<String> {
        let path = path.as_ref();
        self.files
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, contents)| contents.clone())
    }

    /// Returns the number of files held.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    /// Inserts or replaces a file, keeping the original position on replace.
    pub fn insert(&self, path: Utf8PathBuf, contents: String) {
        let mut files = self.files.borrow_mut();
        if let Some(slot) = files.iter_mut().find(|(p, _)| *p == path) {
            slot.1 = contents;
        } else {
            files.push((path, contents));
        }
    }
}

impl Workspace for MemoryWorkspace {
    fn list_dir(&self, dir: &Utf8Path) -> io::Result<Vec<String>> {
        let names: Vec<String> = self
            .files
            .borrow()
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter_map(|(path, _)| path.file_name().map(str::to_owned))
            .collect();

        if names.is_empty() && !self.dirs.iter().any(|d| d == dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {dir}"),
            ));
        }

        Ok(names)
    }

    fn read_to_string(&self, path: &Utf8Path) -> io::Result<String> {
        self.file(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }

    fn exists(&self, path: &Utf8Path) -> bool {
        self.files.borrow().iter().any(|(p, _)| p == path)
    }

    fn write(&self, path: &Utf8Path, contents: &str) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("read-only workspace: {path}"),
            ));
        }
        self.insert(path.to_owned(), contents.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(dir.path()).expect("temp dir should be UTF-8")
    }

    #[test]
    fn test_memory_list_dir_keeps_insertion_order() {
        let workspace = MemoryWorkspace::new()
            .with_file("src/zeta.ts", "")
            .with_file("src/alpha.ts", "")
            .with_file("src/nested/beta.ts", "")
            .with_file("other/gamma.ts", "");

        let names = workspace.list_dir(Utf8Path::new("src")).unwrap();
        assert_eq!(names, vec!["zeta.ts", "alpha.ts"]);
    }

    #[test]
    fn test_memory_missing_dir() {
        let workspace = MemoryWorkspace::new().with_dir("empty");
        assert!(workspace.list_dir(Utf8Path::new("empty")).unwrap().is_empty());

        let err = workspace.list_dir(Utf8Path::new("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_write_replaces_in_place() {
        let workspace = MemoryWorkspace::new()
            .with_file("src/index.ts", "old")
            .with_file("src/a.ts", "");

        workspace.write(Utf8Path::new("src/index.ts"), "new").unwrap();

        assert_eq!(workspace.file("src/index.ts").as_deref(), Some("new"));
        assert_eq!(workspace.file_count(), 2);
        let names = workspace.list_dir(Utf8Path::new("src")).unwrap();
        assert_eq!(names, vec!["index.ts", "a.ts"]);
    }

    #[test]
    fn test_memory_read_only() {
        let workspace = MemoryWorkspace::new().with_dir("src").read_only();
        let err = workspace.write(Utf8Path::new("src/index.ts"), "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(!workspace.exists(Utf8Path::new("src/index.ts")));
    }

    #[test]
    fn test_os_list_dir_sorted_files_only() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let root = utf8(&dir);
        fs::write(root.join("b.ts"), "").unwrap();
        fs::write(root.join("a.js"), "").unwrap();
        fs::create_dir(root.join("nested.ts")).unwrap();

        let names = OsWorkspace.list_dir(root).unwrap();
        assert_eq!(names, vec!["a.js", "b.ts"]);
    }

    #[test]
    fn test_os_read_write_exists() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = utf8(&dir).join("index.ts");

        assert!(!OsWorkspace.exists(&path));
        OsWorkspace.write(&path, "export * from './a';").unwrap();
        assert!(OsWorkspace.exists(&path));
        assert_eq!(
            OsWorkspace.read_to_string(&path).unwrap(),
            "export * from './a';"
        );
    }

    #[test]
    fn test_os_read_non_utf8_is_lossy() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = utf8(&dir).join("legacy.ts");
        fs::write(&path, b"// caf\xe9\nexport const a = 1;").unwrap();

        let text = OsWorkspace.read_to_string(&path).unwrap();
        assert!(text.starts_with("// caf\u{FFFD}"));
        assert!(text.contains("export const a = 1;"));
    }

    #[test]
    fn test_os_list_missing_dir() {
        let err = OsWorkspace
            .list_dir(Utf8Path::new("/nonexistent/path/that/does/not/exist"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
