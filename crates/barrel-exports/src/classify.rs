//! Export-shape classification from raw module text.

use barrel_core::ExportShape;

use crate::patterns::ExportMatcher;

impl ExportMatcher {
    /// Classifies a module's exports from its text.
    ///
    /// The two flags are matched independently; see the crate docs for the
    /// recognized forms and the limits of the heuristic.
    ///
    /// # Examples
    ///
    /// ```
    /// use barrel_exports::ExportMatcher;
    ///
    /// let shape = ExportMatcher::get()?.classify("export const answer = 42;");
    /// assert!(!shape.has_default);
    /// assert!(shape.has_named);
    /// # Ok::<(), barrel_exports::PatternError>(())
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> ExportShape {
        ExportShape::new(self.has_default_export(text), self.has_named_exports(text))
    }

    /// Returns `true` if the text contains an `export default` declaration.
    #[inline]
    #[must_use]
    pub fn has_default_export(&self, text: &str) -> bool {
        self.default_export.is_match(text)
    }

    /// Returns `true` if the text contains a named export or a star re-export.
    #[inline]
    #[must_use]
    pub fn has_named_exports(&self, text: &str) -> bool {
        self.named_export.is_match(text)
    }
}
