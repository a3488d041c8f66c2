//! Error types for rule validation and file rewriting

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while compiling rule sets or rewriting files
///
/// Configuration errors (`InvalidPattern`, `NoRules`, `NoDirectories`)
/// are raised by `RuleSetSpec::compile`, before any file is touched.
/// I/O errors abort the run and name the rule set and offending file.
#[derive(Error, Debug)]
pub enum RecastError {
    #[error("rule set '{rule_set}': invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        rule_set: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule set '{rule_set}' defines no rules")]
    NoRules { rule_set: String },

    #[error("rule set '{rule_set}' defines no directories")]
    NoDirectories { rule_set: String },

    #[error("rule set '{rule_set}': failed to read {}: {source}", path.display())]
    Read {
        rule_set: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rule set '{rule_set}': failed to write {}: {source}", path.display())]
    Write {
        rule_set: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
