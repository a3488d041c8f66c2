//! Per-file classname derivation and replacement template expansion

use std::path::Path;

/// Placeholder token replaced by the current file's classname
pub const CLASSNAME_TOKEN: &str = "{CLASSNAME}";

/// Derive a classname from a file path: the final path segment with
/// one of the rule set's extensions stripped
///
/// A filename that ends with none of the extensions yields the empty
/// string rather than an error, so templates using `{CLASSNAME}`
/// degrade quietly on files of an unexpected shape.
pub fn classname(path: &Path, extensions: &[String]) -> String {
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return String::new();
    };

    for ext in extensions {
        if let Some(stem) = file_name.strip_suffix(&format!(".{ext}")) {
            if !stem.is_empty() {
                return stem.to_string();
            }
        }
    }

    String::new()
}

/// Replace every `{CLASSNAME}` token in the template
///
/// Runs once per rule application, immediately before the rule's
/// substitution, since the derived name is file-specific.
pub fn expand(template: &str, classname: &str) -> String {
    template.replace(CLASSNAME_TOKEN, classname)
}
