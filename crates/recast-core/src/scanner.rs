//! Recursive file enumeration with extension filtering

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Enumerate every regular file under `directory` whose filename ends
/// in one of `extensions` (given without the leading dot, matched
/// case-sensitively)
///
/// The walk is sorted by file name at each level, so the returned
/// order is stable across runs on an unchanged tree. Entries that
/// cannot be read are skipped.
pub fn scan(directory: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let suffixes: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();

    WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix)))
        })
        .map(|entry| entry.into_path())
        .collect()
}
