//! recast-rules: Built-in migration rule tables
//!
//! Rule sets for migrating an OpenDJ 2.x Java codebase to the
//! OpenDJ 3 / ForgeRock APIs, in their fixed run order:
//! - messages: org.opends.messages.* to forgerock i18n Localizable types
//! - types: core LDAP types to org.forgerock.opendj.ldap
//! - dn_type: DN imports and DN.NULL_DN call sites
//! - exceptions: admin client exceptions to ErrorResultException
//! - loggers: DebugTracer / java.util.logging to slf4j
//! - i18n_loggers: ErrorLogger.logError blocks to LocalizedLogger
//!
//! Each module is configuration data, not engineering: a single
//! `rule_set()` function returning the table as a `RuleSetSpec`.

pub mod dn_type;
pub mod exceptions;
pub mod i18n_loggers;
pub mod loggers;
pub mod messages;
pub mod registry;
pub mod types;

pub use registry::Registry;

/// Directories containing hand-written java code, relative to the
/// project root the tool is invoked from
pub(crate) const JAVA_DIRS: &[&str] = &[
    "src/server",
    "src/quicksetup",
    "src/ads",
    "src/guitools",
    "tests/unit-tests-testng/src",
];

pub(crate) const DSML_DIR: &[&str] = &["src/dsml/org"];
