// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Port for the generator page
    #[arg(long, short, env = "PASSGEN_PORT")]
    pub port: Option<u16>,

    /// Command to execute; with none, the web page is served
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
