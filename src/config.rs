use std::env;

use anyhow::{Context, Result, bail};

use crate::client::TrackingQuery;

/// Carrier display name used when neither the environment nor the
/// provider supplies one.
const DEFAULT_CARRIER_NAME: &str = "中通快递";

/// Runtime configuration, read once at startup.
///
/// Missing or invalid required variables are fatal before any network
/// call is made. Nothing here is ever hardcoded into the binary; the
/// query URL carries the provider tokens and tracking number.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub chat_id: i64,
    pub query: TrackingQuery,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build from a variable lookup. Split out from [`from_env`] so tests
    /// do not have to mutate the process environment.
    ///
    /// [`from_env`]: Self::from_env
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = require(&lookup, "BOT_TOKEN")?;
        let chat_id = require(&lookup, "CHAT_ID")?
            .parse()
            .context("CHAT_ID must be a numeric Telegram chat id")?;
        let url = require(&lookup, "EXPRESS_QUERY_URL")?;
        let tracking_number = require(&lookup, "TRACKING_NUMBER")?;
        let carrier = lookup("CARRIER_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CARRIER_NAME.to_string());

        Ok(Self {
            bot_token,
            chat_id,
            query: TrackingQuery {
                url,
                tracking_number,
                carrier,
            },
        })
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{name} environment variable is not set"),
    }
}
