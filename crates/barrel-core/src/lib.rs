//! Core types, errors, and configuration for the barrel index generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types ([`SourceFile`], [`ExportShape`], [`ReExportStatement`], [`IndexFile`])
//! - Configuration structures ([`Config`], [`GenerateConfig`], [`OverwritePolicy`])
//! - Error types for configuration loading ([`ConfigError`])

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, GenerateConfig, OverwritePolicy, Separator};
pub use error::ConfigError;
pub use types::{
    ExportShape, IndexExtension, IndexFile, ReExportKind, ReExportStatement, SourceExtension,
    SourceFile, INDEX_BASE_NAME,
};
