//! Source file identity and the supported extension set.
//!
//! A [`SourceFile`] is one sibling module discovered in the target directory.
//! Only files whose extension belongs to [`SourceExtension`] are candidates for
//! re-export.

use std::fmt;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Base name of the generated barrel file. Files with this base name are never
/// re-exported from the index.
pub const INDEX_BASE_NAME: &str = "index";

/// A source extension recognized by the generator.
///
/// The set is closed: `js`, `ts`, `jsx` and `tsx`. Configuration may narrow it
/// but never extend it.
///
/// # Examples
///
/// ```
/// use barrel_core::SourceExtension;
///
/// assert_eq!(SourceExtension::from_extension("tsx"), Some(SourceExtension::Tsx));
/// assert_eq!(SourceExtension::from_extension("css"), None);
/// assert!(SourceExtension::Tsx.is_typescript());
/// assert!(!SourceExtension::Jsx.is_typescript());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceExtension {
    /// `.js`
    Js,
    /// `.ts`
    Ts,
    /// `.jsx`
    Jsx,
    /// `.tsx`
    Tsx,
}

impl SourceExtension {
    /// Every recognized extension, in the order they are documented.
    pub const ALL: [Self; 4] = [Self::Js, Self::Ts, Self::Jsx, Self::Tsx];

    /// Parses an extension without its leading dot.
    ///
    /// Matching is case-sensitive, like the module resolution it mirrors.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" => Some(Self::Js),
            "ts" => Some(Self::Ts),
            "jsx" => Some(Self::Jsx),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Returns the extension without its leading dot.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Ts => "ts",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
        }
    }

    /// Returns `true` if the extension contains a `t` (`ts`, `tsx`).
    ///
    /// This is the whole TypeScript test used when picking the index
    /// extension.
    #[inline]
    #[must_use]
    pub fn is_typescript(self) -> bool {
        self.as_str().contains('t')
    }
}

impl fmt::Display for SourceExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate module in the scanned directory.
///
/// Identity is the file name. The text is not stored here; the generator
/// reads it on demand through its workspace port.
///
/// # Examples
///
/// ```
/// use barrel_core::{SourceExtension, SourceFile};
///
/// let file = SourceFile::from_file_name("button.tsx", &SourceExtension::ALL).unwrap();
/// assert_eq!(file.base_name, "button");
/// assert_eq!(file.extension, SourceExtension::Tsx);
///
/// assert!(SourceFile::from_file_name("styles.css", &SourceExtension::ALL).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceFile {
    /// The file name, including extension (e.g. `button.tsx`).
    pub name: String,

    /// The file name without its final extension (e.g. `button`).
    pub base_name: String,

    /// The recognized extension.
    pub extension: SourceExtension,
}

impl SourceFile {
    /// Builds a source file from a directory entry name.
    ///
    /// Returns `None` when the name has no extension, when the extension is
    /// not in `supported`, or when nothing precedes the extension (dotfiles
    /// such as `.ts` have no extension at all).
    #[must_use]
    pub fn from_file_name(name: &str, supported: &[SourceExtension]) -> Option<Self> {
        let path = Utf8Path::new(name);
        let extension = SourceExtension::from_extension(path.extension()?)?;
        if !supported.contains(&extension) {
            return None;
        }
        let base_name = path.file_stem()?;

        Some(Self {
            name: name.to_owned(),
            base_name: base_name.to_owned(),
            extension,
        })
    }

    /// Returns `true` if this file is itself an index module.
    #[inline]
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.base_name == INDEX_BASE_NAME
    }
}
