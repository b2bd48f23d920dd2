// src/core/config.rs
use std::env;

use log::LevelFilter;

use crate::models::{MAX_LENGTH, MIN_LENGTH};

// Configuration for the generator page and CLI defaults
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_length: usize,
    pub default_include_symbols: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 6000,

            // Password Generation
            default_length: 12,
            default_include_symbols: true,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables. Unparseable values log a
    // warning and keep the default; loading never fails.
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(addr) = env::var("PASSGEN_ADDRESS") {
            config.web_address = addr;
        }

        if let Ok(val) = env::var("PASSGEN_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid PASSGEN_PORT '{}', using {}", val, config.web_port),
            }
        }

        if let Ok(val) = env::var("PASSGEN_DEFAULT_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_length = length.clamp(MIN_LENGTH, MAX_LENGTH),
                Err(_) => log::warn!(
                    "Invalid PASSGEN_DEFAULT_LENGTH '{}', using {}",
                    val,
                    config.default_length
                ),
            }
        }

        if let Ok(val) = env::var("PASSGEN_SYMBOLS") {
            match val.parse() {
                Ok(include) => config.default_include_symbols = include,
                Err(_) => log::warn!("Invalid PASSGEN_SYMBOLS '{}', expected true/false", val),
            }
        }

        if let Ok(val) = env::var("PASSGEN_LOG_LEVEL") {
            match val.to_lowercase().as_str() {
                "trace" => config.log_level = LevelFilter::Trace,
                "debug" => config.log_level = LevelFilter::Debug,
                "info" => config.log_level = LevelFilter::Info,
                "warn" => config.log_level = LevelFilter::Warn,
                "error" => config.log_level = LevelFilter::Error,
                _ => log::warn!("Unknown log level '{}', using Info", val),
            }
        }

        config
    }
}
