// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and report its strength
    Generate {
        /// Password length (4-64)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave punctuation out of the alphabet
        #[arg(long)]
        no_symbols: bool,

        /// Generate from this alphabet instead of the built-in one
        #[arg(long)]
        alphabet: Option<String>,
    },

    /// Score an existing password
    Assess {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}
