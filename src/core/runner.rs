use crate::core::watchlist;
use crate::domain::ports::{Notifier, Pacer, QuoteSource};
use crate::utils::error::Result;
use chrono::Local;
use std::time::Duration;

/// Drives one evaluation pass over the watchlist: fetch each quote in input
/// order, pace between requests, and broadcast an alert for every entry whose
/// current price is at or above its target.
pub struct Runner<Q: QuoteSource, N: Notifier, P: Pacer> {
    quotes: Q,
    notifier: N,
    pacer: P,
    market_suffix: String,
    pacing: Duration,
}

impl<Q: QuoteSource, N: Notifier, P: Pacer> Runner<Q, N, P> {
    pub fn new(quotes: Q, notifier: N, pacer: P, market_suffix: String, pacing: Duration) -> Self {
        Self {
            quotes,
            notifier,
            pacer,
            market_suffix,
            pacing,
        }
    }

    /// Evaluates the raw watchlist string. An empty watchlist is a successful
    /// no-op. The first fetch or broadcast failure aborts the remaining
    /// entries; the job is re-run on the next schedule tick, so there is no
    /// per-entry recovery.
    pub async fn run(&self, watchlist_raw: &str) -> Result<()> {
        let entries = watchlist::parse(watchlist_raw)?;

        if entries.is_empty() {
            tracing::info!("Watchlist is empty. Example: 2330:650,2603:180,0050:160");
            return Ok(());
        }

        // One timestamp for the whole run; every alert reports the same time.
        let started_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        tracing::info!("Evaluating {} watchlist entries", entries.len());

        for entry in &entries {
            let symbol = entry.symbol(&self.market_suffix);
            let quote = self.quotes.fetch(&symbol).await?;

            // Unconditional pause after every fetch, the last one included,
            // to stay under the quote provider's rate limit.
            self.pacer.pause(self.pacing).await;

            if quote.price >= entry.target {
                let message = alert_message(&entry.code, quote.price, entry.target, &started_at);
                self.notifier.broadcast(&message).await?;
                tracing::info!(
                    "Alert sent: {} price={} target>={}",
                    entry.code,
                    quote.price,
                    entry.target
                );
            } else {
                tracing::info!(
                    "No trigger: {} price={} target>={}",
                    entry.code,
                    quote.price,
                    entry.target
                );
            }
        }

        Ok(())
    }
}

fn alert_message(code: &str, price: f64, target: f64, timestamp: &str) -> String {
    format!("📈 股價到價提醒\n{code}\n現價：{price}\n目標：>= {target}\n時間：{timestamp}")
}
