//! Migrate org.opends.messages types to the forgerock i18n Localizable types

use recast_core::RuleSetSpec;

use crate::DSML_DIR;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("messages")
        .directories(DSML_DIR.iter().copied())
        .extension("java")
        // The generated message classes themselves must keep their names.
        .stopword("org/opends/messages")
        .rule(
            r"import org.opends.messages.(\bMessage(Builder)?(Descriptor)?\b|\*)(\.Arg..?)?;",
            "import org.forgerock.i18n.Localizable${1}${4};",
        )
        .rule(r"\bMessage\b", "LocalizableMessage")
        .rule(r"\bMessageBuilder\b", "LocalizableMessageBuilder")
        .rule(r"\bMessageDescriptor\b", "LocalizableMessageDescriptor")
        // Category/Severity arguments were dropped from raw().
        .rule(
            r"LocalizableMessage.raw\((\n\s+)?Category.\w+,\s+(\n\s+)?Severity.\w+,\s?",
            "LocalizableMessage.raw(",
        )
        .rule(
            r"msg.getDescriptor\(\).equals\((\w+)\)",
            "msg.resourceName().equals(${1}.resourceName())\n      && msg.ordinal().equals(${1}.ordinal())",
        )
}
