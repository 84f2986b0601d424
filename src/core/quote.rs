use crate::domain::model::Quote;
use crate::domain::ports::{Pacer, QuoteSource};
use crate::utils::error::{AlertError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Total attempts per symbol, counting the first request.
const MAX_ATTEMPTS: u32 = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
// Yahoo rejects requests with a default/empty user agent.
const USER_AGENT: &str = concat!("stock-alert/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<QuoteResult>,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

/// Quote source backed by the Yahoo Finance v7 quote endpoint.
///
/// Rate-limit (429) responses are retried with exponential backoff plus
/// jitter through the injected [`Pacer`]; every other failure surfaces
/// immediately.
pub struct YahooQuoteClient<P: Pacer> {
    endpoint: String,
    client: Client,
    pacer: P,
}

impl<P: Pacer> YahooQuoteClient<P> {
    pub fn new(endpoint: String, pacer: P) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint,
            client,
            pacer,
        })
    }
}

fn fetch_error(symbol: &str, reason: impl Into<String>) -> AlertError {
    AlertError::FetchError {
        symbol: symbol.to_string(),
        reason: reason.into(),
    }
}

#[async_trait]
impl<P: Pacer> QuoteSource for YahooQuoteClient<P> {
    async fn fetch(&self, symbol: &str) -> Result<Quote> {
        for attempt in 0..MAX_ATTEMPTS {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[("symbols", symbol)])
                .send()
                .await?;

            let status = response.status();
            tracing::debug!("Quote response for {}: {}", symbol, status);

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt + 1 == MAX_ATTEMPTS {
                    break;
                }
                // Wait 2^attempt seconds plus up to one second of jitter.
                let wait = 2f64.powi(attempt as i32) + self.pacer.jitter();
                tracing::warn!(
                    "Rate-limited fetching {}, retrying in {:.2}s (attempt {}/{})",
                    symbol,
                    wait,
                    attempt + 1,
                    MAX_ATTEMPTS
                );
                self.pacer.pause(Duration::from_secs_f64(wait)).await;
                continue;
            }

            if !status.is_success() {
                return Err(fetch_error(symbol, format!("unexpected status {}", status)));
            }

            let body: QuoteEnvelope = response.json().await?;
            let first = body
                .quote_response
                .result
                .into_iter()
                .next()
                .ok_or_else(|| fetch_error(symbol, "no quote"))?;
            let price = first
                .regular_market_price
                .ok_or_else(|| fetch_error(symbol, "missing price"))?;

            return Ok(Quote {
                symbol: symbol.to_string(),
                price,
            });
        }

        Err(fetch_error(symbol, "rate-limited, exhausted retries"))
    }
}
