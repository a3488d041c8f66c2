//! The rewrite engine: ordered rule application and atomic write-back

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::RecastError;
use crate::ruleset::{Rule, RuleSet};
use crate::template;

/// Apply every rule, in order, to the given text
///
/// A fold with a (text, count) accumulator: each rule's replacement
/// template is expanded with the file's classname, then a global
/// substitution runs over the output of the preceding rules. A rule
/// that matches anywhere counts exactly once, regardless of how many
/// occurrences it replaced: counts are per file, never per match site.
/// A rule matching zero times leaves the text unchanged and does not
/// short-circuit later rules.
///
/// Capture groups are available to the template as `$1`/`${1}`;
/// unmatched optional groups expand to empty.
pub fn apply_rules(contents: &str, rules: &[Rule], classname: &str) -> (String, usize) {
    rules
        .iter()
        .fold((contents.to_string(), 0), |(text, count), rule| {
            let replacement = template::expand(&rule.replacement, classname);
            if rule.pattern.is_match(&text) {
                let rewritten = rule
                    .pattern
                    .replace_all(&text, replacement.as_str())
                    .into_owned();
                (rewritten, count + 1)
            } else {
                (text, count)
            }
        })
}

/// Read a file, apply the rule set's rules in memory, and write the
/// result back atomically
///
/// Returns the number of rules that applied. A file no rule matched is
/// left untouched on disk (not even re-stamped); in dry-run mode
/// nothing is ever written.
pub fn rewrite_file(path: &Path, rule_set: &RuleSet, dry_run: bool) -> Result<usize, RecastError> {
    let contents = fs::read_to_string(path).map_err(|source| RecastError::Read {
        rule_set: rule_set.name.clone(),
        path: path.to_path_buf(),
        source,
    })?;

    let classname = template::classname(path, &rule_set.extensions);
    let (rewritten, applied) = apply_rules(&contents, &rule_set.rules, &classname);

    if applied > 0 && !dry_run {
        write_atomic(path, &rewritten).map_err(|source| RecastError::Write {
            rule_set: rule_set.name.clone(),
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(applied)
}

/// Write contents to a sibling temporary file, then rename it over the
/// original
///
/// The original is only replaced once the new content is completely
/// written, so an interruption mid-write never leaves the file
/// truncated.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(contents.as_bytes())?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSetSpec;
    use tempfile::TempDir;

    fn compile(spec: RuleSetSpec) -> RuleSet {
        spec.compile().unwrap()
    }

    #[test]
    fn test_rule_counts_once_per_file() {
        let rule_set = compile(
            RuleSetSpec::new("t")
                .directory(".")
                .rule(r"\bMessage\b", "LocalizableMessage"),
        );
        let source = "Message a;\nMessage b;\nMessage c;\n";

        let (rewritten, applied) = apply_rules(source, &rule_set.rules, "");

        assert_eq!(applied, 1);
        assert_eq!(
            rewritten,
            "LocalizableMessage a;\nLocalizableMessage b;\nLocalizableMessage c;\n"
        );
    }

    #[test]
    fn test_no_match_counts_zero() {
        let rule_set = compile(RuleSetSpec::new("t").directory(".").rule("absent", "x"));
        let (rewritten, applied) = apply_rules("nothing here", &rule_set.rules, "");

        assert_eq!(applied, 0);
        assert_eq!(rewritten, "nothing here");
    }

    #[test]
    fn test_later_rules_see_earlier_output() {
        let rule_set = compile(
            RuleSetSpec::new("t")
                .directory(".")
                .rule("alpha", "beta")
                .rule("beta", "gamma"),
        );
        let (rewritten, applied) = apply_rules("alpha", &rule_set.rules, "");

        // The second rule matches the first rule's output.
        assert_eq!(rewritten, "gamma");
        assert_eq!(applied, 2);
    }

    #[test]
    fn test_non_matching_rule_does_not_short_circuit() {
        let rule_set = compile(
            RuleSetSpec::new("t")
                .directory(".")
                .rule("absent", "x")
                .rule("present", "replaced"),
        );
        let (rewritten, applied) = apply_rules("present", &rule_set.rules, "");

        assert_eq!(rewritten, "replaced");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_capture_groups_in_replacement() {
        let rule_set = compile(RuleSetSpec::new("t").directory(".").rule(
            r"import org.opends.server.types.(DN|RDN|Attribute|Entry|ResultCode);",
            "import org.forgerock.opendj.ldap.${1};",
        ));
        let (rewritten, applied) =
            apply_rules("import org.opends.server.types.DN;", &rule_set.rules, "");

        assert_eq!(rewritten, "import org.forgerock.opendj.ldap.DN;");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_unmatched_optional_group_expands_empty() {
        let rule_set = compile(
            RuleSetSpec::new("t")
                .directory(".")
                .rule(r", CommunicationException\b(, )?", "${1}"),
        );
        let (rewritten, _) = apply_rules(
            "throws IOException, CommunicationException {",
            &rule_set.rules,
            "",
        );

        assert_eq!(rewritten, "throws IOException {");
    }

    #[test]
    fn test_multiline_pattern_and_replacement() {
        let rule_set = compile(
            RuleSetSpec::new("t")
                .directory(".")
                .rule(r"(?m)^import java.util.logging.Level;\n", ""),
        );
        let source = "import java.util.logging.Level;\nimport java.util.List;\n";
        let (rewritten, applied) = apply_rules(source, &rule_set.rules, "");

        assert_eq!(rewritten, "import java.util.List;\n");
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_classname_token_expanded_per_file() {
        let rule_set = compile(RuleSetSpec::new("t").directory(".").extension("java").rule(
            r"DebugTracer TRACER = getTracer\(\)",
            "Logger debugLogger = LoggerFactory.getLogger({CLASSNAME}.class)",
        ));
        let classname = crate::template::classname(
            Path::new("src/server/Backend.java"),
            &rule_set.extensions,
        );
        let (rewritten, _) = apply_rules(
            "DebugTracer TRACER = getTracer();",
            &rule_set.rules,
            &classname,
        );

        assert_eq!(
            rewritten,
            "Logger debugLogger = LoggerFactory.getLogger(Backend.class);"
        );
    }

    #[test]
    fn test_rewrite_file_writes_result() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo.java");
        fs::write(&file, "import org.opends.server.types.DN;\n").unwrap();

        let rule_set = compile(
            RuleSetSpec::new("types")
                .directory(temp.path())
                .extension("java")
                .rule(
                    r"import org.opends.server.types.(DN|RDN);",
                    "import org.forgerock.opendj.ldap.${1};",
                ),
        );

        let applied = rewrite_file(&file, &rule_set, false).unwrap();
        assert_eq!(applied, 1);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "import org.forgerock.opendj.ldap.DN;\n"
        );
    }

    #[test]
    fn test_rewrite_file_dry_run_leaves_file_alone() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo.java");
        fs::write(&file, "import org.opends.server.types.DN;\n").unwrap();

        let rule_set = compile(
            RuleSetSpec::new("types")
                .directory(temp.path())
                .extension("java")
                .rule(r"import org.opends.server.types.DN;", "replaced"),
        );

        let applied = rewrite_file(&file, &rule_set, true).unwrap();
        assert_eq!(applied, 1);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "import org.opends.server.types.DN;\n"
        );
    }

    #[test]
    fn test_rewrite_file_no_match_never_writes() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo.java");
        fs::write(&file, "untouched contents\n").unwrap();
        let modified_before = fs::metadata(&file).unwrap().modified().unwrap();

        let rule_set = compile(
            RuleSetSpec::new("types")
                .directory(temp.path())
                .extension("java")
                .rule("absent pattern", "x"),
        );

        let applied = rewrite_file(&file, &rule_set, false).unwrap();
        assert_eq!(applied, 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "untouched contents\n");

        // The file was never rewritten, so not even its timestamp moved.
        let modified_after = fs::metadata(&file).unwrap().modified().unwrap();
        assert_eq!(modified_before, modified_after);
    }

    #[test]
    fn test_rewrite_file_unreadable_is_an_error() {
        let temp = TempDir::new().unwrap();
        let rule_set = compile(
            RuleSetSpec::new("types")
                .directory(temp.path())
                .extension("java")
                .rule("a", "b"),
        );

        let err = rewrite_file(&temp.path().join("Missing.java"), &rule_set, false).unwrap_err();
        assert!(matches!(err, RecastError::Read { .. }));
        let message = err.to_string();
        assert!(message.contains("types"));
        assert!(message.contains("Missing.java"));
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("out.txt");
        fs::write(&file, "old").unwrap();

        write_atomic(&file, "new").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "new");

        // No stray temp file left behind.
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_abort_before_rename_leaves_original_intact() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo.java");
        fs::write(&file, "original contents\n").unwrap();

        // Replay the write-back's two phases by hand, aborting between
        // them: the fully written temp file is discarded, never
        // renamed, so the original survives untouched.
        let mut staged = tempfile::NamedTempFile::new_in(temp.path()).unwrap();
        staged.write_all(b"rewritten contents\n").unwrap();
        drop(staged);

        assert_eq!(fs::read_to_string(&file).unwrap(), "original contents\n");
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
