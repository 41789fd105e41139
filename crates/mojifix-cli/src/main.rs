// crates/mojifix-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod run;

#[derive(Parser)]
#[command(name = "mojifix")]
#[command(about = "Normalize mojibake / stray characters in manifest-listed HTML files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean every listed file, rewriting the ones that change
    Clean(cmd::clean::CleanArgs),

    /// Report what clean would do without writing anything
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Clean(args) => cmd::clean::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
