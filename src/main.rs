use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use baidu_express_rs::{AppConfig, ExpressClient, TelegramNotifier, build_notification};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baidu_express_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing configuration is the one fatal error; everything after this
    // degrades to a fallback notification instead of aborting.
    let config = AppConfig::from_env()?;
    let client = ExpressClient::new()?;

    let text = build_notification(&client, &config.query).await;

    let notifier = TelegramNotifier::new(&config.bot_token, config.chat_id);
    notifier.send(&text).await;

    Ok(())
}
