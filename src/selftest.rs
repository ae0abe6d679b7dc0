//! In-process self-checks behind the `--test` flag.
//!
//! These mirror the unit and end-to-end tests but run from the installed
//! binary, inside a temporary directory, so a user can verify the tool
//! without a build environment and without touching their working
//! directory's prompt.txt.

use crate::{consolidator, filter, header};
use anyhow::bail;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Runs all self-checks, narrating each result. Fails if any check fails.
pub fn run() -> anyhow::Result<()> {
    println!("=== Running self-checks ===");

    let mut failures = 0usize;

    println!("\nComment header generation:");
    failures += check_comment_headers();

    println!("\nFile skip rules:");
    failures += check_skip_rules();

    println!("\nEnd-to-end consolidation:");
    failures += check_consolidation()?;

    println!();
    if failures > 0 {
        bail!("{failures} self-check(s) failed");
    }
    println!("All self-checks passed.");
    Ok(())
}

fn report(name: &str, pass: bool) -> usize {
    if pass {
        println!("  ok   {name}");
        0
    } else {
        println!("  FAIL {name}");
        1
    }
}

fn check_comment_headers() -> usize {
    let cases = [
        ("test.py", "# test.py\n"),
        ("script.js", "// script.js\n"),
        ("component.tsx", "// component.tsx\n"),
        ("style.css", "<!-- style.css -->\n"),
        ("index.html", "<!-- index.html -->\n"),
        ("README.md", "# README.md\n"),
    ];

    let mut failures = 0;
    for (path, expected) in cases {
        let got = header::comment_header(Path::new(path));
        failures += report(path, got == expected);
    }
    failures
}

fn check_skip_rules() -> usize {
    let cases = [
        (".gitignore", true),
        (".DS_Store", true),
        ("normal.py", false),
        ("prompt.txt", true),
        ("package.json", true),
        ("package-lock.json", true),
        ("node_modules/package.json", true),
        ("src/__pycache__/module.pyc", true),
        ("venv/bin/python", true),
        ("src/components/App.jsx", false),
    ];

    let mut failures = 0;
    for (path, expected) in cases {
        let got = filter::should_skip(Path::new(path));
        failures += report(path, got == expected);
    }
    failures
}

/// Builds a representative tree in a temp dir, consolidates it, and checks
/// that exactly the ordinary files made it into the output.
fn check_consolidation() -> anyhow::Result<usize> {
    let dir = TempDir::new()?;
    let root = dir.path();

    let files = [
        ("test.py", "print(\"Hello World\")"),
        ("script.js", "console.log(\"Hello World\")"),
        ("style.css", "body { color: red; }"),
        ("index.html", "<html><body>Hello</body></html>"),
        (".gitignore", "*.pyc"),
        ("package.json", "{\"name\": \"test\"}"),
        ("package-lock.json", "{\"lockfileVersion\": 1}"),
    ];
    for (name, content) in files {
        fs::write(root.join(name), content)?;
    }
    for skip_dir in ["node_modules", "__pycache__", "venv"] {
        let path = root.join(skip_dir);
        fs::create_dir_all(&path)?;
        fs::write(
            path.join(format!("inside_{skip_dir}.txt")),
            "must not appear",
        )?;
    }

    let output = consolidator::consolidate(root)?;
    let result = fs::read_to_string(output)?;

    let mut failures = 0;
    for included in ["test.py", "script.js", "style.css", "index.html"] {
        failures += report(included, result.contains(included));
    }
    for excluded in [
        ".gitignore",
        "package.json",
        "package-lock.json",
        "inside_node_modules",
        "inside___pycache__",
        "inside_venv",
    ] {
        failures += report(excluded, !result.contains(excluded));
    }

    Ok(failures)
}
