use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid watchlist entry '{segment}': {reason}")]
    InvalidEntry { segment: String, reason: String },

    #[error("Quote fetch failed for {symbol}: {reason}")]
    FetchError { symbol: String, reason: String },

    #[error("Broadcast failed: {reason}")]
    NotifyError { reason: String },
}

pub type Result<T> = std::result::Result<T, AlertError>;
