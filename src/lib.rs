//! Pre-commit diff scanner.
//!
//! Inspects a textual unified diff (as produced by `git diff -U0
//! --staged`) and flags lines or files that plausibly contain leaked
//! secrets: private keys, cloud credentials, tokens, and high entropy
//! blobs no pattern anticipated. The scan is a pure function from patch
//! bytes to a warning report; no network or storage access happens
//! here.
//!
//! ```
//! use diffsnoop::PatchScanner;
//!
//! let patch = b"diff --git a/secret/key.pem b/secret/key.pem\nnew file mode 100644\n";
//! let scanner = PatchScanner::with_default_rules()?;
//! let outcome = scanner.scan(patch)?;
//!
//! assert!(!outcome.is_clean());
//! assert_eq!(outcome.reports[0].path, "secret/key.pem");
//! # Ok::<(), diffsnoop::SnoopError>(())
//! ```

pub mod entropy;
pub mod errors;
pub mod model;
pub mod rules;
pub mod scanner;
pub mod whitelist;

pub use errors::{SnoopError, SnoopResult};
pub use model::{Report, ScanOutcome, Warning, WarningScope, FILE_SCOPE_LINE};
pub use rules::RuleSet;
pub use scanner::PatchScanner;
pub use whitelist::{Signature, SuppressionList};
