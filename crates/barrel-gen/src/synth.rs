//! Re-export statement synthesis for a single source file.

use barrel_core::{ExportShape, ReExportStatement, SourceFile};
use smallvec::SmallVec;

/// Statements contributed by one file. Never more than two.
pub type FileStatements = SmallVec<[ReExportStatement; 2]>;

/// Produces the re-export statements for one classified file.
///
/// Index files contribute nothing. Otherwise a default export yields a
/// `Default` statement and named exports yield a `Namespace` statement, in
/// that order.
///
/// # Examples
///
/// ```
/// use barrel_core::{ExportShape, SourceExtension, SourceFile};
/// use barrel_gen::synthesize;
///
/// let file = SourceFile::from_file_name("card.tsx", &SourceExtension::ALL).unwrap();
/// let statements = synthesize(&file, ExportShape::new(true, true));
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[0].to_string(), "export { default } from './card';");
/// assert_eq!(statements[1].to_string(), "export * from './card';");
/// ```
#[must_use]
pub fn synthesize(file: &SourceFile, shape: ExportShape) -> FileStatements {
    let mut statements = FileStatements::new();

    if file.is_index() {
        return statements;
    }

    if shape.has_default {
        statements.push(ReExportStatement::default_export(&file.base_name));
    }
    if shape.has_named {
        statements.push(ReExportStatement::namespace(&file.base_name));
    }

    statements
}
