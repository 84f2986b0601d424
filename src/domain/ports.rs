use crate::domain::model::Quote;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<Quote>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn broadcast(&self, text: &str) -> Result<()>;
}

/// Sleep and jitter source. Injected into the fetcher and the runner so tests
/// can record waits instead of actually sleeping.
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
    /// Uniform random value in [0, 1) seconds, added to each backoff wait.
    fn jitter(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn jitter(&self) -> f64 {
        rand::random::<f64>()
    }
}
