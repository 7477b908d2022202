use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a demo-friendly default, so a bare `cargo run` works.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the static fixture documents are read from.
    pub fixtures_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Simulated resume-parse latency applied by the upload handler.
    pub upload_delay_ms: u64,
    /// Simulated assistant-reply latency applied by the chat handler.
    pub reply_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            fixtures_dir: PathBuf::from(env_or("FIXTURES_DIR", "fixtures")),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upload_delay_ms: env_or("UPLOAD_DELAY_MS", "1500")
                .parse::<u64>()
                .context("UPLOAD_DELAY_MS must be a number of milliseconds")?,
            reply_delay_ms: env_or("REPLY_DELAY_MS", "1500")
                .parse::<u64>()
                .context("REPLY_DELAY_MS must be a number of milliseconds")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
