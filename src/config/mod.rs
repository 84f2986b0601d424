use crate::utils::error::{AlertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::env;
use std::time::Duration;

pub const TOKEN_ENV: &str = "LINE_OA_TOKEN";
pub const WATCHLIST_ENV: &str = "WATCHLIST";

const DEFAULT_QUOTE_ENDPOINT: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
const DEFAULT_BROADCAST_ENDPOINT: &str = "https://api.line.me/v2/bot/message/broadcast";

#[derive(Debug, Clone, Parser)]
#[command(name = "stock-alert")]
#[command(about = "Polls stock quotes and broadcasts a LINE alert when a target price is hit")]
pub struct CliConfig {
    /// Watchlist of CODE:TARGET pairs, e.g. "2330:650,2603:180". Falls back to
    /// the WATCHLIST environment variable when omitted.
    #[arg(long)]
    pub watchlist: Option<String>,

    #[arg(long, default_value = DEFAULT_QUOTE_ENDPOINT)]
    pub quote_endpoint: String,

    #[arg(long, default_value = DEFAULT_BROADCAST_ENDPOINT)]
    pub broadcast_endpoint: String,

    /// Venue suffix appended to every stock code to form the quote symbol.
    #[arg(long, default_value = "TW")]
    pub market_suffix: String,

    /// Seconds to wait after each quote fetch, to stay under the rate limit.
    #[arg(long, default_value = "1")]
    pub pacing_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved run configuration. Built once at startup and passed into the
/// runner; there is no ambient global state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub watchlist: String,
    pub channel_token: String,
    pub quote_endpoint: String,
    pub broadcast_endpoint: String,
    pub market_suffix: String,
    pub pacing: Duration,
}

impl AppConfig {
    /// Merges CLI flags with the environment. A missing channel token is a
    /// fatal ConfigError, raised here before any network client exists. A
    /// missing watchlist is not an error (the run becomes a no-op).
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let channel_token = env::var(TOKEN_ENV).map_err(|_| AlertError::ConfigError {
            message: format!("missing {} environment variable", TOKEN_ENV),
        })?;

        let watchlist = cli
            .watchlist
            .or_else(|| env::var(WATCHLIST_ENV).ok())
            .unwrap_or_default();

        Ok(Self {
            watchlist,
            channel_token,
            quote_endpoint: cli.quote_endpoint,
            broadcast_endpoint: cli.broadcast_endpoint,
            market_suffix: cli.market_suffix,
            pacing: Duration::from_secs(cli.pacing_secs),
        })
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("quote_endpoint", &self.quote_endpoint)?;
        validate_url("broadcast_endpoint", &self.broadcast_endpoint)?;
        validate_non_empty_string("channel_token", &self.channel_token)?;
        validate_non_empty_string("market_suffix", &self.market_suffix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            watchlist: "2330:650".to_string(),
            channel_token: "token".to_string(),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            broadcast_endpoint: DEFAULT_BROADCAST_ENDPOINT.to_string(),
            market_suffix: "TW".to_string(),
            pacing: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_validate_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = base_config();
        config.quote_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_suffix() {
        let mut config = base_config();
        config.market_suffix = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
