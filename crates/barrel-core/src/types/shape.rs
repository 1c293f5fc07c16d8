//! Export shape inferred from a file's text.

use serde::{Deserialize, Serialize};

/// Which kinds of exports a source file appears to have.
///
/// Both flags are independent: a file may have neither, either, or both.
///
/// # Examples
///
/// ```
/// use barrel_core::ExportShape;
///
/// let shape = ExportShape::new(true, false);
/// assert!(shape.has_default);
/// assert_eq!(shape.statement_count(), 1);
/// assert!(ExportShape::default().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportShape {
    /// The file has an `export default ...` declaration.
    pub has_default: bool,

    /// The file has named exports (`export const`, `export {`, `export *`, ...).
    pub has_named: bool,
}

impl ExportShape {
    /// Creates a new export shape.
    #[inline]
    #[must_use]
    pub const fn new(has_default: bool, has_named: bool) -> Self {
        Self {
            has_default,
            has_named,
        }
    }

    /// Returns `true` if the file exports nothing the generator can re-export.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.has_default && !self.has_named
    }

    /// Number of re-export statements this shape contributes (0, 1 or 2).
    #[inline]
    #[must_use]
    pub fn statement_count(self) -> usize {
        usize::from(self.has_default) + usize::from(self.has_named)
    }
}
