use std::path::{Component, Path};

/// The name of the output file. It is excluded from consolidation so that a
/// second run does not fold the previous run's output into itself.
pub const OUTPUT_FILE_NAME: &str = "prompt.txt";

/// Package manifests that add bulk without adding context.
const SKIP_FILE_NAMES: &[&str] = &["package.json", "package-lock.json"];

/// Dependency and cache directories. Files under any of these are skipped
/// even if the directory somehow escaped pruning during the walk.
const SKIP_DIR_COMPONENTS: &[&str] = &["node_modules", "__pycache__", "venv"];

/// Decides whether a discovered file must be excluded from consolidation.
///
/// Expects a path relative to the consolidation root. Skips hidden files,
/// the output file itself, package manifests, and anything inside a
/// dependency directory.
pub fn should_skip(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return true,
    };

    if name.starts_with('.') {
        log::debug!("skipping hidden file: {}", path.display());
        return true;
    }

    // The walker only hands us files, but stay defensive.
    if path.is_dir() {
        log::debug!("skipping directory: {}", path.display());
        return true;
    }

    if name == OUTPUT_FILE_NAME {
        log::debug!("skipping output file: {}", path.display());
        return true;
    }

    if SKIP_FILE_NAMES.contains(&name) {
        log::debug!("skipping package file: {}", path.display());
        return true;
    }

    for component in path.components() {
        if let Component::Normal(part) = component
            && let Some(part) = part.to_str()
            && SKIP_DIR_COMPONENTS.contains(&part)
        {
            log::debug!("skipping file in {part} directory: {}", path.display());
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_files_are_skipped() {
        assert!(should_skip(Path::new(".gitignore")));
        assert!(should_skip(Path::new(".DS_Store")));
        assert!(should_skip(Path::new("src/.env")));
    }

    #[test]
    fn test_output_and_package_files_are_skipped() {
        assert!(should_skip(Path::new("prompt.txt")));
        assert!(should_skip(Path::new("package.json")));
        assert!(should_skip(Path::new("package-lock.json")));
    }

    #[test]
    fn test_dependency_directories_are_skipped() {
        assert!(should_skip(Path::new("node_modules/package.json")));
        assert!(should_skip(Path::new("node_modules/left-pad/index.js")));
        assert!(should_skip(Path::new("src/__pycache__/module.pyc")));
        assert!(should_skip(Path::new("venv/bin/python")));
    }

    #[test]
    fn test_ordinary_files_are_kept() {
        assert!(!should_skip(Path::new("normal.py")));
        assert!(!should_skip(Path::new("src/components/App.jsx")));
        assert!(!should_skip(Path::new("docs/prompt-notes.txt")));
        // Skip rules match whole names, not substrings.
        assert!(!should_skip(Path::new("my_node_modules_backup/file.js")));
    }
}
