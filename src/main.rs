use std::path::Path;

use clap::Parser;

use passgen::cli::{handlers, Args, CliCommand};
use passgen::core::config::Config;
use passgen::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_symbols,
            alphabet,
        }) => handlers::handle_generate(&config, length, no_symbols, alphabet, args.json),
        Some(CliCommand::Assess { password }) => handlers::handle_assess(&password, args.json),
        None => {
            let port = args.port.unwrap_or(config.web_port);
            println!("Visit http://localhost:{} for the password generator", port);
            web::start_server(&config.web_address, port)
                .await
                .map_err(anyhow::Error::from)
        }
    }
}
