use anyhow::Context;

pub mod cli;
pub mod consolidator;
pub mod filter;
pub mod header;
pub mod reader;
pub mod selftest;
pub mod walker;

use cli::Cli;

/// The core logic of the application.
pub fn run(args: Cli) -> anyhow::Result<()> {
    if args.test {
        return selftest::run();
    }

    println!("=== Prompt File Organizer ===");
    println!("Consolidating the current directory into prompt.txt.\n");

    let current_dir = std::env::current_dir().context("failed to resolve current directory")?;
    println!("Current working directory: {}", current_dir.display());

    consolidator::consolidate(&current_dir)?;

    println!("\nYou can now use prompt.txt to provide your codebase as context.");
    Ok(())
}
