use clap::{ColorChoice, Parser};

/// A CLI application that consolidates every file under the current
/// directory into a single `prompt.txt`, suitable as large-context input
/// for AI models.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, color = ColorChoice::Always)]
pub struct Cli {
    /// Run the built-in self-check suite in a temporary directory instead
    /// of consolidating. The working directory's prompt.txt is not touched.
    #[arg(long)]
    pub test: bool,
}
