//! Migrate DebugTracer and java.util.logging call sites to slf4j

use recast_core::RuleSetSpec;

use crate::JAVA_DIRS;

pub fn rule_set() -> RuleSetSpec {
    RuleSetSpec::new("loggers")
        .directories(JAVA_DIRS.iter().copied())
        .extension("java")
        // The logging framework itself stays on the old API.
        .stopword("src/server/org/opends/server/loggers")
        .stopword("DebugLogPublisher")
        .rule(
            r"import org.opends.server.loggers.debug.DebugTracer;",
            "import org.slf4j.Logger;\nimport org.slf4j.LoggerFactory;",
        )
        .rule(
            r"import java.util.logging.Logger;",
            "import org.slf4j.Logger;\nimport org.slf4j.LoggerFactory;",
        )
        .rule(r"import java.util.logging.Level;\n", "")
        .rule(r"import org.opends.server.types.DebugLogLevel;\n", "")
        .rule(
            r"DebugTracer TRACER = (DebugLogger.)?getTracer\(\)",
            "Logger debugLogger = LoggerFactory.getLogger({CLASSNAME}.class)",
        )
        .rule(
            r"(?m)^\s*/\*\*\n.*The tracer object for the debug logger.\n\s*\*/$\n",
            "",
        )
        .rule(r"(?m)^\s*//\s*The tracer object for the debug logger.$\n", "")
        .rule(
            r"(?m)if \(debugEnabled\(\)\)\s*\{\s* TRACER.debugCaught\(DebugLogLevel.ERROR, (\b.*\b)\);\s*\n\s*\}$",
            "debugLogger.trace(\"Error\", ${1});",
        )
        .rule(
            r"TRACER\.debugCaught\(DebugLogLevel.ERROR, (\b.*\b)\);",
            "debugLogger.trace(\"Error\", ${1});",
        )
        .rule(r"TRACER.debug[^(]+\(", "debugLogger.trace(")
        .rule(r"debugLogger.trace\(DebugLogLevel.\b\w+\b, ?", "debugLogger.trace(")
        .rule(r"debugLogger.trace\(e\)", "debugLogger.trace(\"Error\", e)")
        .rule(
            r"(DebugLogger\.|\b)debugEnabled\(\)",
            "debugLogger.isTraceEnabled()",
        )
        .rule(r"(LOG|logger).log\((Level.)?WARNING, ?", "${1}.warn(")
        .rule(r"(LOG|logger).log\((Level.)?CONFIG, ?", "${1}.info(")
        .rule(r"(LOG|logger).log\((Level.)?INFO, ?", "${1}.debug(")
        .rule(r"(LOG|logger).log\((Level.)?SEVERE, ?", "${1}.error(")
        .rule(r"(LOG|logger).log\((Level.)?FINE, ?", "${1}.trace(")
        .rule(
            r"Logger.getLogger\((\n\s+)?(\b\w+\b).class.getName\(\)\);",
            "LoggerFactory.getLogger(${2}.class);",
        )
}
