//! Heuristic export-shape classification for JavaScript and TypeScript modules.
//!
//! This crate answers two questions about raw module text without parsing it:
//!
//! - Does a module have a default export and/or named exports?
//!   ([`ExportMatcher::classify`])
//! - Is an existing index file nothing but re-exports?
//!   ([`ExportMatcher::is_export_only`])
//!
//! # Overview
//!
//! ```
//! use barrel_exports::ExportMatcher;
//!
//! let matcher = ExportMatcher::get()?;
//!
//! let shape = matcher.classify("export default function Button() {}\nexport const SIZE = 4;");
//! assert!(shape.has_default);
//! assert!(shape.has_named);
//!
//! assert!(matcher.is_export_only("export * from './button';"));
//! assert!(!matcher.is_export_only("import React from 'react';"));
//! # Ok::<(), barrel_exports::PatternError>(())
//! ```
//!
//! # Recognized Forms
//!
//! | Pattern | Example | Counts as |
//! |---------|---------|-----------|
//! | Default declaration | `export default function Foo() {}` | default |
//! | Default class | `export default class Foo {}` | default |
//! | Default expression | `export default Foo;` | default |
//! | Constant | `export const foo = 1;` | named |
//! | Function | `export function foo() {}` | named |
//! | Class | `export class Foo {}` | named |
//! | Export list | `export { a, b }` / `export { a } from './a'` | named |
//! | Star re-export | `export * from './a'` | named |
//!
//! # Known Limitations
//!
//! Matching is lexical:
//!
//! - Exports inside comments or string literals are counted.
//! - Forms outside the table (`export let`, `export type`,
//!   `export async function`, `export { x as default }`) are not.
//! - A module whose base name is a declaration keyword (`let.ts`, `var.ts`)
//!   yields `export { default as let } from './let';` when aliased. The
//!   declaration check matches that line, so the generated index is judged
//!   to contain custom logic and is not regenerated on the next run.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod classify;
mod error;
pub mod patterns;
mod safety;

pub use error::PatternError;
pub use patterns::ExportMatcher;
pub use safety::IndexVerdict;
