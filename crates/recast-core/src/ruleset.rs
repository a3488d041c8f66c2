//! Rule and rule set definitions
//!
//! Rule tables are authored as `RuleSetSpec` values: plain strings,
//! cheap to build and to deserialize. `RuleSetSpec::compile` validates
//! the table and produces a `RuleSet` with compiled regexes; it is the
//! only way to obtain one, so a rule set that reaches the runner has
//! already passed validation.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::RecastError;

/// A single (pattern, replacement template) pair, as authored
///
/// The replacement may reference capture groups as `$1`/`${1}` and may
/// contain the `{CLASSNAME}` token, expanded per file before the
/// substitution runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
}

impl RuleSpec {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// A named, uncompiled rule set: directory scope, extension filter,
/// stopwords and an ordered rule table
#[derive(Debug, Clone)]
pub struct RuleSetSpec {
    pub name: String,
    pub directories: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub stopwords: Vec<String>,
    pub rules: Vec<RuleSpec>,
}

impl RuleSetSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directories: Vec::new(),
            extensions: Vec::new(),
            stopwords: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    pub fn directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Add a file extension, given without the leading dot
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// Add a stopword: any file whose path contains it is skipped
    pub fn stopword(mut self, word: impl Into<String>) -> Self {
        self.stopwords.push(word.into());
        self
    }

    /// Append a rule; rules run in the order they were added
    pub fn rule(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.rules.push(RuleSpec::new(pattern, replacement));
        self
    }

    /// Validate the spec and compile its patterns
    ///
    /// Fails on an empty rule table, an empty directory list, or a
    /// malformed pattern; the error names the rule set and, for
    /// pattern errors, the offending pattern.
    pub fn compile(&self) -> Result<RuleSet, RecastError> {
        if self.rules.is_empty() {
            return Err(RecastError::NoRules {
                rule_set: self.name.clone(),
            });
        }
        if self.directories.is_empty() {
            return Err(RecastError::NoDirectories {
                rule_set: self.name.clone(),
            });
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for spec in &self.rules {
            let pattern = Regex::new(&spec.pattern).map_err(|source| {
                RecastError::InvalidPattern {
                    rule_set: self.name.clone(),
                    pattern: spec.pattern.clone(),
                    source,
                }
            })?;
            rules.push(Rule {
                pattern,
                replacement: spec.replacement.clone(),
            });
        }

        Ok(RuleSet {
            name: self.name.clone(),
            directories: self.directories.clone(),
            extensions: self.extensions.clone(),
            stopwords: self.stopwords.clone(),
            rules,
        })
    }
}

/// A compiled rule: regex pattern plus replacement template
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Regex,
    pub replacement: String,
}

/// A validated rule set ready to run
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: String,
    pub directories: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub stopwords: Vec<String>,
    pub rules: Vec<Rule>,
}

/// True if the path contains any stopword as a literal substring
///
/// An empty stopword list excludes nothing. Checked before any rule
/// runs, so an excluded file is never partially rewritten.
pub fn is_excluded(path: &Path, stopwords: &[String]) -> bool {
    let path = path.to_string_lossy();
    stopwords.iter().any(|word| path.contains(word.as_str()))
}
