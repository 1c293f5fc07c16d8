//! Domain types for barrel index generation.
//!
//! # Module Organization
//!
//! - [`source`] - Source files and the supported extension set
//! - [`shape`] - Inferred export shape of a single file
//! - [`statement`] - Re-export statements emitted into the index
//! - [`index`] - The generated index file and its extension
//!
//! All public types are re-exported at this module level and at the crate root:
//!
//! ```
//! use barrel_core::{ExportShape, ReExportStatement, SourceFile};
//! ```

mod index;
mod shape;
mod source;
mod statement;

pub use index::{IndexExtension, IndexFile};
pub use shape::ExportShape;
pub use source::{SourceExtension, SourceFile, INDEX_BASE_NAME};
pub use statement::{ReExportKind, ReExportStatement};
