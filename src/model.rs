//! Result data model: warnings, per-file reports, and the scan outcome.
//!
//! These are plain value types created per scan invocation and handed to
//! the caller; all of them serialize to a JSON-friendly tree for
//! downstream tooling.

use serde::Serialize;

/// Line number carried by every file-scope warning.
pub const FILE_SCOPE_LINE: i64 = -1;

/// Which ruleset facet triggered a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningScope {
    /// Triggered by the filename/path heuristics
    File,
    /// Triggered by line content or entropy
    Line,
}

/// A specific warning about a file in the diff. One or more are compiled
/// into a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// The ruleset scope that triggered the warning
    pub scope: WarningScope,
    /// Human compatible warning description
    pub description: String,
    /// New-file line number where the warning was triggered, or
    /// [`FILE_SCOPE_LINE`] for file-scope warnings
    pub line: i64,
}

impl Warning {
    /// Warning pinned to a file rather than a line
    pub fn file(description: impl Into<String>) -> Self {
        Self {
            scope: WarningScope::File,
            description: description.into(),
            line: FILE_SCOPE_LINE,
        }
    }

    /// Warning pinned to a new-file line position
    pub fn line(description: impl Into<String>, line: i64) -> Self {
        Self {
            scope: WarningScope::Line,
            description: description.into(),
            line,
        }
    }
}

/// A collection of warnings for a particular file discovered in a patch.
///
/// `old_path` is identical to `path` unless the file was moved or renamed
/// as part of the changeset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Current relative path of the file to which the report pertains
    pub path: String,
    /// Previous relative path of the file
    pub old_path: String,
    /// Set of warnings pertaining to this report
    pub warnings: Vec<Warning>,
}

/// The complete result of snooping one patch: the ordered, non-empty
/// reports. The overall verdict is derived from emptiness alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    /// One report per file section that produced at least one warning
    pub reports: Vec<Report>,
}

impl ScanOutcome {
    /// True iff no report survived the scan, i.e. the diff looks clean.
    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_constructors() {
        let w = Warning::file("suspicious filename");
        assert_eq!(w.scope, WarningScope::File);
        assert_eq!(w.line, FILE_SCOPE_LINE);

        let w = Warning::line("suspicious content", 42);
        assert_eq!(w.scope, WarningScope::Line);
        assert_eq!(w.line, 42);
    }

    #[test]
    fn test_outcome_verdict_is_emptiness() {
        let mut outcome = ScanOutcome::default();
        assert!(outcome.is_clean());

        outcome.reports.push(Report {
            path: "a.txt".into(),
            old_path: "a.txt".into(),
            warnings: vec![Warning::file("bad")],
        });
        assert!(!outcome.is_clean());
    }

    #[test]
    fn test_serialized_shape() {
        let outcome = ScanOutcome {
            reports: vec![Report {
                path: "secret/key.pem".into(),
                old_path: "secret/key.pem".into(),
                warnings: vec![Warning::file("Potential cryptographic private key")],
            }],
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["reports"][0]["path"], "secret/key.pem");
        assert_eq!(json["reports"][0]["warnings"][0]["scope"], "file");
        assert_eq!(json["reports"][0]["warnings"][0]["line"], -1);
    }
}
