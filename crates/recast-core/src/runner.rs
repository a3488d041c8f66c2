//! Drives a rule set over its directory scope

use std::path::PathBuf;

use crate::engine;
use crate::error::RecastError;
use crate::ruleset::{is_excluded, RuleSet};
use crate::scanner;

/// Per-rule-set outcome: how many files were touched and how many rule
/// applications happened across them
#[derive(Debug, Clone)]
pub struct RuleSetSummary {
    pub name: String,
    /// Files where at least one rule matched
    pub files_touched: usize,
    /// Total rule applications, counted once per (rule, file)
    pub replacements: usize,
    /// The touched files, in processing order
    pub touched: Vec<PathBuf>,
}

impl RuleSetSummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files_touched: 0,
            replacements: 0,
            touched: Vec::new(),
        }
    }
}

/// Run one rule set: scan its directories, skip stopword-excluded
/// files, rewrite the rest, and aggregate counts
///
/// Files are processed to completion one at a time, in scan order.
/// The first I/O failure aborts the run; the rewrite already performed
/// on earlier files stays on disk (rules are not assumed safe to
/// reapply, so recovery is rerun-from-clean-source, not retry).
pub fn run_rule_set(rule_set: &RuleSet, dry_run: bool) -> Result<RuleSetSummary, RecastError> {
    let mut summary = RuleSetSummary::new(&rule_set.name);

    for directory in &rule_set.directories {
        for file in scanner::scan(directory, &rule_set.extensions) {
            if is_excluded(&file, &rule_set.stopwords) {
                continue;
            }
            let applied = engine::rewrite_file(&file, rule_set, dry_run)?;
            if applied > 0 {
                summary.files_touched += 1;
                summary.replacements += applied;
                summary.touched.push(file);
            }
        }
    }

    Ok(summary)
}
