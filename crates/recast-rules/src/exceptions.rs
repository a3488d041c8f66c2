//! Migrate admin client exceptions to ErrorResultException
//!
//! CommunicationException disappears entirely, so its import and its
//! position in throws clauses are removed before the blanket rename.

use recast_core::RuleSetSpec;

use crate::JAVA_DIRS;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("exceptions")
        .directories(JAVA_DIRS.iter().copied())
        .extension("java")
        .rule(
            r"import org.opends.server.admin.client.AuthorizationException;",
            "import org.forgerock.opendj.ldap.ErrorResultException;",
        )
        .rule(r"\bAuthorizationException\b", "ErrorResultException")
        .rule(
            r"import org.opends.server.admin.client.CommunicationException;\n",
            "",
        )
        .rule(r"throws CommunicationException\b, ", "throws ")
        .rule(r", CommunicationException\b(, )?", "${1}")
        .rule(r"\bCommunicationException\b", "ErrorResultException")
}
