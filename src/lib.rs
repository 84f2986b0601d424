pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{AppConfig, CliConfig};
pub use core::{notify::LineNotifier, quote::YahooQuoteClient, runner::Runner};
pub use domain::ports::TokioPacer;
pub use utils::error::{AlertError, Result};
