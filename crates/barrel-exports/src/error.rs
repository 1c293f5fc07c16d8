//! Error types for the barrel-exports crate.

/// Errors that can occur while preparing the export matchers.
///
/// # Examples
///
/// ```
/// use barrel_exports::PatternError;
///
/// fn handle_error(err: PatternError) {
///     match err {
///         PatternError::Compile { pattern, .. } => {
///             eprintln!("Pattern failed to compile: {pattern}");
///         }
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A regular expression failed to compile.
    #[error("failed to compile pattern {pattern}: {source}")]
    Compile {
        /// The pattern source.
        pattern: &'static str,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = PatternError::Compile {
            pattern: "(",
            source,
        };
        assert!(err.to_string().starts_with("failed to compile pattern ("));
    }
}
