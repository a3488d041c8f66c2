//! External rule set files
//!
//! Rule sets can be loaded from a TOML file instead of the built-in
//! tables, which keeps one-off migrations out of the source tree:
//!
//! ```toml
//! [[ruleset]]
//! name = "types"
//! directories = ["src/server"]
//! extensions = ["java"]
//! stopwords = []
//!
//! [[ruleset.rules]]
//! pattern = 'import org.opends.server.types.(DN|RDN);'
//! replacement = 'import org.forgerock.opendj.ldap.${1};'
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use recast_core::RuleSetSpec;

#[derive(Debug, Deserialize)]
pub struct RuleSetFile {
    #[serde(rename = "ruleset", default)]
    pub rule_sets: Vec<RuleSetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RuleSetEntry {
    pub name: String,
    pub directories: Vec<PathBuf>,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RuleEntry {
    pub pattern: String,
    pub replacement: String,
}

/// Load rule set specs from a TOML file
///
/// The file must define at least one rule set; per-set validation
/// (non-empty rules, well-formed patterns) happens at compile time,
/// before any file is rewritten.
pub fn load(path: &Path) -> Result<Vec<RuleSetSpec>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: RuleSetFile = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if file.rule_sets.is_empty() {
        bail!("{} defines no rule sets", path.display());
    }

    Ok(file
        .rule_sets
        .into_iter()
        .map(|entry| {
            let mut spec = RuleSetSpec::new(entry.name).directories(entry.directories);
            for ext in entry.extensions {
                spec = spec.extension(ext);
            }
            for word in entry.stopwords {
                spec = spec.stopword(word);
            }
            for rule in entry.rules {
                spec = spec.rule(rule.pattern, rule.replacement);
            }
            spec
        })
        .collect())
}
