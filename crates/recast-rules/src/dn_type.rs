//! Migrate DN imports and DN.NULL_DN call sites, including generated code

use recast_core::RuleSetSpec;

use crate::JAVA_DIRS;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("dn_type")
        .directories(JAVA_DIRS.iter().copied())
        .directory("src/admin/generated")
        .extension("java")
        .rule(
            r"package org.opends.server.types.(\b\w\b);",
            "package org.opends.server.types.${1};\n\nimport org.forgerock.opendj.ldap.DN;",
        )
        .rule(
            r"import org.opends.server.types.DN;",
            "import org.forgerock.opendj.ldap.DN;",
        )
        .rule(
            r"import org.opends.server.types.\*;",
            "import org.opends.server.types.*;\nimport org.forgerock.opendj.ldap.DN;",
        )
        .rule(r"DN.NULL_DN", "DN.rootDN()")
}
