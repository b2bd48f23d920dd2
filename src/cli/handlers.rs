// src/cli/handlers.rs
use anyhow::Result;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{GenerationReport, GenerationRequest};

// Handlers for CLI commands

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    no_symbols: bool,
    alphabet: Option<String>,
    json: bool,
) -> Result<()> {
    let include_symbols = !no_symbols && config.default_include_symbols;
    let request = GenerationRequest::new(
        length.unwrap_or(config.default_length),
        include_symbols,
        alphabet,
    );

    let generator = PasswordGenerator::new();
    let password = generator.generate(&request);
    let strength = generator.assess(&password);

    if json {
        let report = GenerationReport { password, strength };
        println!("{}", serde_json::to_string(&report)?);
    } else if password.is_empty() {
        println!("(empty alphabet, nothing to generate)");
    } else {
        println!("{}", password);
        println!("strength: {} (score {})", strength.label, strength.score);
    }

    Ok(())
}

pub fn handle_assess(password: &str, json: bool) -> Result<()> {
    let generator = PasswordGenerator::new();
    let strength = generator.assess(password);

    if json {
        println!("{}", serde_json::to_string(&strength)?);
    } else {
        println!("strength: {} (score {})", strength.label, strength.score);
    }

    Ok(())
}
