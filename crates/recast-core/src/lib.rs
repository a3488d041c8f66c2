//! recast-core: Ordered regex rewrite engine for bulk source migrations
//!
//! This crate provides:
//! - `RuleSpec` / `RuleSetSpec`: declarative rule tables as authored
//! - `Rule` / `RuleSet`: the validated, compiled forms
//! - `apply_rules()`: fold a rule list over a file's text
//! - `rewrite_file()`: read, rewrite in memory, write back atomically
//! - `run_rule_set()`: drive a rule set over its directory scope
//!
//! A rule set names an ordered list of (pattern, replacement) pairs
//! scoped to directories and file extensions, with optional stopwords
//! that exclude files by path substring. Rules are applied
//! sequentially per file; later rules see the output of earlier ones.

pub mod engine;
pub mod error;
pub mod ruleset;
pub mod runner;
pub mod scanner;
pub mod template;

pub use engine::{apply_rules, rewrite_file, write_atomic};
pub use error::RecastError;
pub use ruleset::{is_excluded, Rule, RuleSet, RuleSetSpec, RuleSpec};
pub use runner::{run_rule_set, RuleSetSummary};
pub use scanner::scan;
pub use template::{classname, expand, CLASSNAME_TOKEN};
