//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{countdown::CountdownTarget, error::CountdownError};

/// Start of the opening ceremony, host-local time
pub const DEFAULT_TARGET: &str = "2025-05-15T09:00:00";

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "technovation")]
#[command(about = "Countdown and registration service for the Technovation'25 site")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "TECHNOVATION_PORT", default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "TECHNOVATION_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Countdown target, RFC 3339 or a local YYYY-MM-DDTHH:MM[:SS]
    #[arg(short, long, env = "TECHNOVATION_TARGET", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Countdown tick period in milliseconds
    #[arg(
        long,
        env = "TECHNOVATION_TICK_MS",
        default_value = "1000",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Simulated registration latency in milliseconds
    #[arg(long, env = "TECHNOVATION_SUBMIT_DELAY_MS", default_value = "1000")]
    pub submit_delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn countdown_target(&self) -> Result<CountdownTarget, CountdownError> {
        CountdownTarget::parse(&self.target)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
