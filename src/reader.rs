use content_inspector::{ContentType, inspect};
use std::fs;
use std::path::Path;

/// Reads a file's content as UTF-8 text, substituting a placeholder on
/// failure so a single unreadable file never aborts the run.
///
/// Binary content yields `[BINARY FILE - <path>]`, and any other I/O error
/// yields `[ERROR READING FILE - <path>: <error>]`.
pub fn read_content(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => {
            if inspect(&bytes) == ContentType::BINARY {
                log::debug!("binary content detected in {}", path.display());
                return format!("[BINARY FILE - {}]\n", path.display());
            }
            match String::from_utf8(bytes) {
                Ok(text) => {
                    log::debug!("read {} characters from {}", text.len(), path.display());
                    text
                }
                Err(_) => {
                    log::debug!("non-UTF-8 content in {}", path.display());
                    format!("[BINARY FILE - {}]\n", path.display())
                }
            }
        }
        Err(e) => {
            log::debug!("failed to read {}: {e}", path.display());
            format!("[ERROR READING FILE - {}: {e}]\n", path.display())
        }
    }
}
