pub mod client;
pub mod config;
pub mod jsonp;
pub mod message;
pub mod notify;
pub mod pipeline;
pub mod types;

pub use client::{ExpressClient, FetchError, TrackingQuery};
pub use config::AppConfig;
pub use notify::TelegramNotifier;
pub use pipeline::build_notification;
pub use types::{TrackingEvent, TrackingResponse};
