use clap::Parser;
use promptcat::{cli::Cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();
    run(args)
}
