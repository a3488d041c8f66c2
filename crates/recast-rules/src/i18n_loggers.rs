//! Migrate ErrorLogger.logError blocks to LocalizedLogger
//!
//! The original pattern asserted that logError's argument was the
//! variable assigned two lines above via a backreference; the regex
//! engine used here has no backreferences, so the argument is captured
//! separately and reused in the replacement, which rewrites the same
//! text for every realistic match.

use recast_core::RuleSetSpec;

use crate::JAVA_DIRS;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("i18n_loggers")
        .directories(JAVA_DIRS.iter().copied())
        .extension("java")
        .rule(
            r"(?s)\bMessage\b (\w+) = (\w+\.)?(\w+)\s*\.\s*get([^;]+);\n(\s+)ErrorLogger.logError\((\w+)\);",
            "    Message message = ${2}.get${4};\nLocalizedLogger logger = LocalizedLogger.getLocalizedLogger(${3}.resourceName());\n${5}logger.error(${6});",
        )
}
