//! Custom error types for the diffsnoop scanner.
//!
//! Splits failures into the two families the scanner distinguishes:
//! configuration errors raised while compiling a rule set, and input
//! parse errors raised mid-scan.

use std::num::ParseIntError;

/// The main error type for diffsnoop operations.
#[derive(Debug, thiserror::Error)]
pub enum SnoopError {
    /// A rule pattern failed to compile. Fatal at `RuleSet` construction;
    /// a scanner is never built on a partially compiled rule set.
    #[error("Invalid rule pattern '{pattern}': {source}")]
    Rule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule definition document could not be deserialized.
    #[error("Malformed rule definitions: {0}")]
    RuleFormat(#[from] serde_json::Error),

    /// A hunk header carried a new-file offset that is not a usable
    /// integer. Aborts the scan with no partial result.
    #[error("Unparsable hunk offset in '{header}': {source}")]
    HunkOffset {
        header: String,
        #[source]
        source: ParseIntError,
    },

    /// The underlying reader failed while the patch was being consumed.
    #[error("I/O error reading patch: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SnoopError
pub type SnoopResult<T> = Result<T, SnoopError>;

impl SnoopError {
    /// Create a rule compilation error with pattern context
    pub fn rule(source: regex::Error, pattern: impl Into<String>) -> Self {
        Self::Rule {
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a hunk offset error with the offending header text
    pub fn hunk_offset(source: ParseIntError, header: impl Into<String>) -> Self {
        Self::HunkOffset {
            header: header.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = SnoopError::rule(source, "(unclosed");
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_hunk_offset_error_display() {
        let source = "99999999999999999999".parse::<i64>().unwrap_err();
        let err = SnoopError::hunk_offset(source, "@@ -1 +99999999999999999999 @@");
        assert!(err.to_string().contains("hunk offset"));
        assert!(err.to_string().contains("99999999999999999999"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: SnoopError = io_err.into();
        assert!(matches!(err, SnoopError::Io(_)));
    }
}
