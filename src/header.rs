use std::path::Path;

/// Returns the comment-styled header line for a file, chosen by extension.
///
/// Python files get `#`, JavaScript/TypeScript files get `//`, and HTML/CSS
/// files get `<!-- -->`. Everything else (including files without an
/// extension) falls back to `#`, which doubles as a safe default for
/// Markdown, TOML, shell scripts and the like.
pub fn comment_header(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("js" | "jsx" | "ts" | "tsx") => format!("// {}\n", path.display()),
        Some("html" | "css") => format!("<!-- {} -->\n", path.display()),
        _ => format!("# {}\n", path.display()),
    }
}
