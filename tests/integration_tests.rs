use httpmock::prelude::*;
use stock_alert::domain::ports::Pacer;
use stock_alert::{AlertError, LineNotifier, Runner, YahooQuoteClient};
use std::time::Duration;

/// Skips all waits so the tests run without real delays.
#[derive(Clone, Copy, Default)]
struct NoopPacer;

impl Pacer for NoopPacer {
    async fn pause(&self, _duration: Duration) {}

    fn jitter(&self) -> f64 {
        0.0
    }
}

fn quote_body(price: f64) -> serde_json::Value {
    serde_json::json!({
        "quoteResponse": {
            "result": [
                { "symbol": "2330.TW", "regularMarketPrice": price }
            ],
            "error": null
        }
    })
}

fn build_runner(
    quote_server: &MockServer,
    notify_server: &MockServer,
) -> Runner<YahooQuoteClient<NoopPacer>, LineNotifier, NoopPacer> {
    let quotes =
        YahooQuoteClient::new(quote_server.url("/v7/finance/quote"), NoopPacer).unwrap();
    let notifier = LineNotifier::new(
        notify_server.url("/v2/bot/message/broadcast"),
        "test-token".to_string(),
    )
    .unwrap();

    Runner::new(quotes, notifier, NoopPacer, "TW".to_string(), Duration::from_secs(1))
}

#[tokio::test]
async fn test_end_to_end_price_at_target_broadcasts_once() {
    let quote_server = MockServer::start();
    let notify_server = MockServer::start();

    let quote_mock = quote_server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "2330.TW");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(quote_body(651.0));
    });

    let notify_mock = notify_server.mock(|when, then| {
        when.method(POST)
            .path("/v2/bot/message/broadcast")
            .header("authorization", "Bearer test-token")
            .body_contains("2330")
            .body_contains("651")
            .body_contains("650");
        then.status(200).json_body(serde_json::json!({}));
    });

    build_runner(&quote_server, &notify_server)
        .run("2330:650")
        .await
        .unwrap();

    quote_mock.assert();
    notify_mock.assert_hits(1);
}

#[tokio::test]
async fn test_end_to_end_price_below_target_sends_nothing() {
    let quote_server = MockServer::start();
    let notify_server = MockServer::start();

    let quote_mock = quote_server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "2330.TW");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(quote_body(649.9));
    });

    let notify_mock = notify_server.mock(|when, then| {
        when.method(POST).path("/v2/bot/message/broadcast");
        then.status(200).json_body(serde_json::json!({}));
    });

    build_runner(&quote_server, &notify_server)
        .run("2330:650")
        .await
        .unwrap();

    quote_mock.assert();
    notify_mock.assert_hits(0);
}

#[tokio::test]
async fn test_end_to_end_empty_watchlist_makes_no_requests() {
    let quote_server = MockServer::start();
    let notify_server = MockServer::start();

    let quote_mock = quote_server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(quote_body(100.0));
    });

    build_runner(&quote_server, &notify_server)
        .run("")
        .await
        .unwrap();

    quote_mock.assert_hits(0);
}

#[tokio::test]
async fn test_end_to_end_fetch_failure_stops_the_run() {
    let quote_server = MockServer::start();
    let notify_server = MockServer::start();

    // First symbol has no quote data; the second entry must never be fetched.
    let empty_mock = quote_server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "9999.TW");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "quoteResponse": { "result": [], "error": null }
            }));
    });
    let other_mock = quote_server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "2330.TW");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(quote_body(999.0));
    });

    let err = build_runner(&quote_server, &notify_server)
        .run("9999:10,2330:650")
        .await
        .unwrap_err();

    assert!(matches!(err, AlertError::FetchError { .. }));
    empty_mock.assert_hits(1);
    other_mock.assert_hits(0);
}
