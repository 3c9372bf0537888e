use clap::Parser;
use memetts_cli::commands::Commands;

/// Play meme clips for known phrases and speak everything else
#[derive(Debug, Parser)]
#[command(name = "memetts", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
