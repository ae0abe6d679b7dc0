use crate::{filter, header, reader, walker};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Consolidates every non-skipped file under `root` into `<root>/prompt.txt`.
///
/// Files are visited in walk order; each contributes a comment header, its
/// content (or a placeholder), and a blank-line separator. The whole
/// document is assembled in memory and written in one operation, so the only
/// failure mode is the final write. Returns the output path on success.
pub fn consolidate(root: &Path) -> anyhow::Result<PathBuf> {
    let output_path = root.join(filter::OUTPUT_FILE_NAME);
    let mut segments: Vec<String> = Vec::new();
    let mut file_count = 0usize;

    println!("Scanning directory structure under {}", root.display());

    for (path, relative) in walker::walk(root) {
        log::debug!("processing file: {}", relative.display());

        segments.push(header::comment_header(&relative));
        segments.push(reader::read_content(&path));
        segments.push("\n\n".to_string());
        file_count += 1;
    }

    fs::write(&output_path, segments.concat())
        .with_context(|| format!("failed to write output file {}", output_path.display()))?;

    println!(
        "Successfully created {} with {file_count} files consolidated",
        output_path.display()
    );

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    #[test]
    fn test_blocks_are_header_content_separator() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("test.py").write_str("print(\"Hello World\")")?;

        let output = consolidate(dir.path())?;
        let result = fs::read_to_string(output)?;

        assert_eq!(result, "# test.py\nprint(\"Hello World\")\n\n");

        Ok(())
    }

    #[test]
    fn test_output_file_is_overwritten() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("app.js").write_str("let x = 1;")?;
        dir.child("prompt.txt").write_str("previous run's output")?;

        let output = consolidate(dir.path())?;
        let result = fs::read_to_string(output)?;

        assert_eq!(result, "// app.js\nlet x = 1;\n\n");

        Ok(())
    }

    #[test]
    fn test_consolidation_is_idempotent() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("a.py").write_str("a = 1")?;
        dir.child("b.css").write_str("body {}")?;
        dir.child("nested/c.ts").write_str("const c = 3;")?;

        let first = fs::read_to_string(consolidate(dir.path())?)?;
        let second = fs::read_to_string(consolidate(dir.path())?)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn test_write_failure_surfaces_as_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        dir.child("kept.py").write_str("x = 1")?;
        // A directory at the output path makes the final write fail.
        dir.child("prompt.txt").create_dir_all()?;

        let result = consolidate(dir.path());
        assert!(result.is_err());

        Ok(())
    }
}
