//! Registry of built-in rule sets in their fixed run order

use recast_core::RuleSetSpec;

/// All built-in rule sets, in the order a full run applies them
///
/// The order matters: later rule sets may reprocess files an earlier
/// one already touched, and their patterns are written against the
/// earlier sets' output.
pub struct Registry {
    specs: Vec<RuleSetSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            specs: vec![
                crate::messages::rule_set(),
                crate::types::rule_set(),
                crate::dn_type::rule_set(),
                crate::exceptions::rule_set(),
                crate::loggers::rule_set(),
                crate::i18n_loggers::rule_set(),
            ],
        }
    }

    /// Rule set names in run order
    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&RuleSetSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn all(&self) -> &[RuleSetSpec] {
        &self.specs
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
