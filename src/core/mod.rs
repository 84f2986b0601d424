pub mod notify;
pub mod quote;
pub mod runner;
pub mod watchlist;

pub use crate::domain::model::{Quote, WatchlistEntry};
pub use crate::domain::ports::{Notifier, Pacer, QuoteSource};
pub use crate::utils::error::Result;
