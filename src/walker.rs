use crate::filter;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directories that are pruned before descent. Pruning here keeps the walk
/// from ever entering large dependency trees, while the skip filter catches
/// individual files discovered elsewhere.
pub const PRUNE_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", "venv"];

/// Walks the tree under `root`, yielding `(absolute, relative)` path pairs
/// for every file that survives pruning and the skip filter.
///
/// The walk is sequential and sorted by file name at each level, so the
/// order of yielded files (and therefore the output document) is stable
/// across runs and platforms. All gitignore and hidden-file handling of the
/// underlying walker is disabled; the skip filter is the only file-level
/// exclusion rule.
pub fn walk(root: &Path) -> impl Iterator<Item = (PathBuf, PathBuf)> + '_ {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    // Prune dependency directories before descending into them.
    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if is_dir
            && let Some(name) = entry.file_name().to_str()
            && PRUNE_DIRS.contains(&name)
        {
            log::debug!("pruning {name} directory at {}", entry.path().display());
            return false;
        }
        true
    });

    builder.build().filter_map(move |result| {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable entries are reported and skipped.
                eprintln!("Failed to walk entry: {e}");
                return None;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            return None;
        }

        let path = entry.into_path();
        let relative = path.strip_prefix(root).ok()?.to_path_buf();

        if filter::should_skip(&relative) {
            return None;
        }

        Some((path, relative))
    })
}
