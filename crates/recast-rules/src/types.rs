//! Migrate core LDAP type imports to org.forgerock.opendj.ldap

use recast_core::RuleSetSpec;

use crate::JAVA_DIRS;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("types")
        .directories(JAVA_DIRS.iter().copied())
        .extension("java")
        .rule(
            r"import org.opends.server.types.(DN|RDN|Attribute|Entry|ResultCode);",
            "import org.forgerock.opendj.ldap.${1};",
        )
        .rule(
            r"import org.opends.server.(types|api).(AttributeType|MatchingRule);",
            "import org.forgerock.opendj.ldap.schema.${2};",
        )
}
