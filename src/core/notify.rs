use crate::domain::ports::Notifier;
use crate::utils::error::{AlertError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Pushes a text message to every subscriber of a LINE Official Account via
/// the Messaging API broadcast endpoint.
pub struct LineNotifier {
    endpoint: String,
    channel_token: String,
    client: Client,
}

impl LineNotifier {
    pub fn new(endpoint: String, channel_token: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            endpoint,
            channel_token,
            client,
        })
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    async fn broadcast(&self, text: &str) -> Result<()> {
        let payload = serde_json::json!({
            "messages": [ { "type": "text", "text": text } ]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.channel_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Broadcast response: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::NotifyError {
                reason: format!("broadcast endpoint returned {}: {}", status, body),
            });
        }

        Ok(())
    }
}
