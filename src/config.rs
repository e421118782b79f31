//! Application configuration parsed from command-line flags.
//!
//! Configuration is parsed once at startup, validated before the server
//! starts, and shared read-only behind an `Arc` for the life of the process.
//!
//! ```bash
//! bioaff-api \
//!     --port 4000 \
//!     --env production \
//!     --limiter-rps 2 \
//!     --limiter-burst 4 \
//!     --limiter-enabled true \
//!     --cors-trusted-origin "https://bioaff.example.com https://staging.bioaff.example.com"
//! ```

use anyhow::Result;
use clap::Parser;

/// Service configuration.
///
/// Never mutated after startup; the middleware chain reads it concurrently
/// without locking.
#[derive(Debug, Clone, Parser)]
#[command(name = "bioaff-api", version, about = "BioAff affidavit-form API server")]
pub struct Config {
    /// API server port.
    #[arg(long, default_value_t = 4000)]
    pub port: u16,

    /// Environment (development | staging | production).
    #[arg(long, default_value = "development")]
    pub env: String,

    /// Rate limiter maximum sustained requests per second, per client IP.
    #[arg(long = "limiter-rps", default_value_t = 2.0)]
    pub limiter_rps: f64,

    /// Rate limiter burst: requests a fresh client may issue instantly.
    #[arg(long = "limiter-burst", default_value_t = 4)]
    pub limiter_burst: u32,

    /// Rate limiting toggle.
    #[arg(long = "limiter-enabled", default_value_t = true, action = clap::ArgAction::Set)]
    pub limiter_enabled: bool,

    /// Trusted CORS origins (space separated, matched exactly).
    #[arg(long = "cors-trusted-origin", value_delimiter = ' ')]
    pub cors_trusted_origins: Vec<String>,
}

impl Config {
    /// Validates the parsed configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `limiter_rps` is not a positive finite number
    /// - `limiter_burst` is zero
    /// - `env` is not a known environment name
    pub fn validate(&self) -> Result<()> {
        if !self.limiter_rps.is_finite() || self.limiter_rps <= 0.0 {
            anyhow::bail!(
                "--limiter-rps must be a positive number, got {}",
                self.limiter_rps
            );
        }

        if self.limiter_burst == 0 {
            anyhow::bail!("--limiter-burst must be at least 1");
        }

        if !matches!(self.env.as_str(), "development" | "staging" | "production") {
            anyhow::bail!(
                "--env must be development, staging or production, got '{}'",
                self.env
            );
        }

        Ok(())
    }

    /// Logs a configuration summary at startup.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Port: {}", self.port);
        tracing::info!("  Environment: {}", self.env);

        if self.limiter_enabled {
            tracing::info!(
                "  Rate limiter: {} rps, burst {}",
                self.limiter_rps,
                self.limiter_burst
            );
        } else {
            tracing::info!("  Rate limiter: disabled");
        }

        tracing::info!("  Trusted origins: {:?}", self.cors_trusted_origins);
    }
}
