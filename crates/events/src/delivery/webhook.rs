//! Chat webhook delivery with exponential-backoff retry.
//!
//! [`WebhookDelivery`] posts a Discord-compatible `{"content": ...}` JSON body
//! to a fixed webhook URL. Failed attempts are retried up to three times with
//! exponential backoff (1 s, 2 s, 4 s).

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use super::Notifier;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// Longest message body a Discord webhook accepts, in characters.
pub const MAX_CONTENT_CHARS: usize = 2000;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),

    /// The message exceeds what the webhook will accept.
    #[error("Message is {0} characters, limit is {MAX_CONTENT_CHARS}")]
    PayloadTooLarge(usize),
}

// ---------------------------------------------------------------------------
// WebhookDelivery
// ---------------------------------------------------------------------------

/// Delivers rendered summaries to one chat webhook.
pub struct WebhookDelivery {
    client: reqwest::Client,
    url: String,
}

impl WebhookDelivery {
    /// Create a delivery service for `url` with a per-request timeout.
    pub fn new(url: String, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Deliver `content` with retry.
    ///
    /// Oversized messages are rejected without contacting the server.
    /// Returns `Ok(())` on the first successful attempt.
    pub async fn deliver(&self, content: &str) -> Result<(), WebhookError> {
        let payload = build_payload(content)?;
        let delays = RETRY_DELAYS_SECS.map(Duration::from_secs);
        with_retries(&delays, || self.try_send(&payload)).await
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, payload: &serde_json::Value) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookDelivery {
    async fn notify(&self, content: &str) -> Result<(), WebhookError> {
        self.deliver(content).await
    }
}

/// Run `attempt` once, then once more after each delay until it succeeds.
///
/// On exhaustion the error from the final attempt is returned.
async fn with_retries<F, Fut>(delays: &[Duration], mut attempt: F) -> Result<(), WebhookError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), WebhookError>>,
{
    for (n, delay) in delays.iter().enumerate() {
        match attempt().await {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::warn!(
                    attempt = n + 1,
                    error = %e,
                    "Webhook delivery attempt failed, retrying"
                );
                tokio::time::sleep(*delay).await;
            }
        }
    }

    // Final attempt after the last backoff.
    attempt().await.inspect_err(|e| {
        tracing::error!(error = %e, "Webhook delivery failed after all retries");
    })
}

/// JSON body for a webhook message, or an error if it is too long.
pub fn build_payload(content: &str) -> Result<serde_json::Value, WebhookError> {
    let chars = content.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(WebhookError::PayloadTooLarge(chars));
    }
    Ok(serde_json::json!({ "content": content }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicU16, Ordering};

    #[test]
    fn new_does_not_fail_for_plain_url() {
        let delivery = WebhookDelivery::new(
            "https://discord.com/api/webhooks/1/abc".into(),
            Duration::from_secs(10),
        );
        assert!(delivery.is_ok());
    }

    #[test]
    fn payload_wraps_content() {
        let payload = build_payload("Challenger >= 700 LP").unwrap();
        assert_eq!(payload, serde_json::json!({ "content": "Challenger >= 700 LP" }));
    }

    #[test]
    fn payload_limit_counts_characters_not_bytes() {
        // Arrows are three bytes each in UTF-8.
        let content = "↗".repeat(MAX_CONTENT_CHARS);
        assert!(build_payload(&content).is_ok());

        let content = "x".repeat(MAX_CONTENT_CHARS + 1);
        assert_matches!(build_payload(&content), Err(WebhookError::PayloadTooLarge(2001)));
    }

    #[test]
    fn webhook_error_display_http_status() {
        let err = WebhookError::HttpStatus(502);
        assert_eq!(err.to_string(), "Webhook returned HTTP 502");
    }

    #[test]
    fn webhook_error_display_request() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = WebhookError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }

    #[tokio::test]
    async fn retries_report_the_final_attempt_error() {
        let calls = AtomicU16::new(0);
        let result = with_retries(&[Duration::ZERO; 3], || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(WebhookError::HttpStatus(500 + n)) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_matches!(result, Err(WebhookError::HttpStatus(503)));
    }

    #[tokio::test]
    async fn retries_stop_at_first_success() {
        let calls = AtomicU16::new(0);
        let result = with_retries(&[Duration::ZERO; 3], || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 1 {
                    Err(WebhookError::HttpStatus(429))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn oversized_message_is_rejected_before_sending() {
        // Unroutable URL: reaching the network would fail with Request, not
        // PayloadTooLarge.
        let delivery = WebhookDelivery::new("http://0.0.0.0:9/".into(), Duration::from_secs(1)).unwrap();
        let content = "x".repeat(MAX_CONTENT_CHARS + 5);
        assert_matches!(
            delivery.deliver(&content).await,
            Err(WebhookError::PayloadTooLarge(2005))
        );
    }
}
