use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Telegram Bot API client.
/// Posts the vacancy digest to a single fixed group chat.
pub(crate) struct TelegramNotifier {
    client: Client,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramNotifier {
    pub(crate) fn new(token: String, chat_id: String) -> Self {
        Self {
            client: Client::new(),
            token,
            chat_id,
        }
    }

    /// Deliver one message to the configured chat.
    ///
    /// A bad credential, an unreachable chat and a message over the Bot API
    /// length limit all fail the call; nothing is caught or retried here.
    pub(crate) async fn send(&self, text: &str) -> Result<()> {
        let message = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);

        info!(chat_id = %self.chat_id, chars = text.len(), "Posting digest to Telegram");

        let response = self.client.post(&url).json(&message).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            error!("Telegram send failed {}: {}", status, body);
            anyhow::bail!("Telegram API error {}: {}", status, body);
        }

        let api_response: ApiResponse = response.json().await?;
        if !api_response.ok {
            let reason = api_response
                .description
                .unwrap_or_else(|| "unknown error".to_string());
            error!("Telegram rejected the message: {}", reason);
            anyhow::bail!("Telegram rejected the message: {}", reason);
        }

        info!("Digest posted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_keeps_its_destination() {
        let notifier = TelegramNotifier::new("123:abc".to_string(), "-100200300".to_string());
        assert_eq!(notifier.chat_id, "-100200300");
        assert_eq!(notifier.token, "123:abc");
    }

    #[test]
    fn message_payload_uses_markdown_parse_mode() {
        let message = SendMessage {
            chat_id: "-100200300",
            text: "*Title:* A",
            parse_mode: "Markdown",
        };

        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(body["chat_id"], "-100200300");
        assert_eq!(body["text"], "*Title:* A");
        assert_eq!(body["parse_mode"], "Markdown");
    }
}
