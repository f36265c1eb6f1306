use teloxide::prelude::*;
use teloxide::{ApiError, RequestError};
use tracing::{error, info, warn};

/// Sends the notification to a Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: i64) -> Self {
        Self {
            bot: Bot::new(bot_token),
            chat_id: ChatId(chat_id),
        }
    }

    /// Deliver one message. Failures are logged with a category hint
    /// but never propagated; there is no retry, the run simply ends.
    pub async fn send(&self, text: &str) {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => info!(chat_id = self.chat_id.0, "notification delivered"),
            Err(err) => {
                error!(error = %err, "failed to send Telegram message");
                if let Some(hint) = delivery_hint(&err) {
                    warn!("{hint}");
                }
            }
        }
    }
}

/// Map the common delivery failures to an actionable hint.
fn delivery_hint(err: &RequestError) -> Option<&'static str> {
    match err {
        RequestError::Api(ApiError::ChatNotFound) => {
            Some("check that CHAT_ID is correct and the chat has started the bot")
        }
        RequestError::Api(ApiError::InvalidToken) => Some("check that BOT_TOKEN is correct"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_hints() {
        let hint = delivery_hint(&RequestError::Api(ApiError::ChatNotFound)).unwrap();
        assert!(hint.contains("CHAT_ID"));

        let hint = delivery_hint(&RequestError::Api(ApiError::InvalidToken)).unwrap();
        assert!(hint.contains("BOT_TOKEN"));

        assert!(delivery_hint(&RequestError::Api(ApiError::BotBlocked)).is_none());
    }
}
