//! Output formatting for recast
//!
//! Supports text (colored terminal) and JSON output formats.

use colored::*;
use serde::Serialize;

use recast_core::{RuleSet, RuleSetSummary};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-rule-set entry in the JSON report
#[derive(Debug, Serialize)]
struct RuleSetReport {
    name: String,
    files_touched: usize,
    replacements: usize,
    touched: Vec<String>,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
struct JsonOutput {
    version: String,
    dry_run: bool,
    rule_sets: Vec<RuleSetReport>,
    files_touched: usize,
    replacements: usize,
}

/// Reporter for accumulating and emitting run results
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    dry_run: bool,
    reports: Vec<RuleSetReport>,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool, dry_run: bool) -> Self {
        Self {
            format,
            verbose,
            dry_run,
            reports: Vec::new(),
        }
    }

    /// Announce a rule set before its files are processed
    pub fn announce(&self, rule_set: &RuleSet) {
        if self.format != OutputFormat::Text {
            return;
        }
        println!(
            "{} {}",
            "Replacing".bold(),
            rule_set.name.green()
        );
        if self.verbose {
            for directory in &rule_set.directories {
                println!("  scanning {}", directory.display());
            }
        }
    }

    /// Report a completed rule set
    pub fn report(&mut self, summary: RuleSetSummary) {
        if self.format == OutputFormat::Text {
            if self.verbose {
                for path in &summary.touched {
                    println!("  {} {}", "rewrote".cyan(), path.display());
                }
            }
            println!(
                "Replaced in {} files, for a total of {} replacements",
                summary.files_touched.to_string().bold(),
                summary.replacements.to_string().bold()
            );
        }

        self.reports.push(RuleSetReport {
            name: summary.name,
            files_touched: summary.files_touched,
            replacements: summary.replacements,
            touched: summary
                .touched
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        });
    }

    /// Emit the final output and totals
    pub fn finish(self) {
        let files_touched: usize = self.reports.iter().map(|r| r.files_touched).sum();
        let replacements: usize = self.reports.iter().map(|r| r.replacements).sum();

        match self.format {
            OutputFormat::Text => {
                println!();
                let label = if self.dry_run {
                    "Would replace (dry run)".yellow()
                } else {
                    "Done".green()
                };
                println!(
                    "{}: {} files touched, {} replacements across {} rule sets",
                    label,
                    files_touched,
                    replacements,
                    self.reports.len()
                );
            }
            OutputFormat::Json => {
                let output = JsonOutput {
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    dry_run: self.dry_run,
                    rule_sets: self.reports,
                    files_touched,
                    replacements,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
    }
}
