use chrono::{Local, LocalResult, TimeZone};
use tracing::warn;

use crate::client::{FetchError, TrackingQuery};
use crate::jsonp;
use crate::types::{EventTime, TrackingResponse};

const PARSE_FAILURE: &str = "❌ 查询失败: 无法解析服务器响应 (JSONP/JSON Error).";

/// Turn a raw response body into the notification text.
///
/// An undecodable body degrades to the generic parse-failure message;
/// this never errors.
pub fn compose_report(body: &str, query: &TrackingQuery) -> String {
    let Some(value) = jsonp::parse_jsonp(body) else {
        let snippet: String = body.chars().take(200).collect();
        warn!(snippet = %snippet, "failed to decode JSONP/JSON response");
        return PARSE_FAILURE.to_string();
    };

    match serde_json::from_value::<TrackingResponse>(value) {
        Ok(resp) => describe_response(&resp, query),
        Err(err) => {
            warn!(error = %err, "tracking payload has an unexpected shape");
            PARSE_FAILURE.to_string()
        }
    }
}

/// Render the latest event, or surface the API's failure fields.
pub fn describe_response(resp: &TrackingResponse, query: &TrackingQuery) -> String {
    if let Some(latest) = resp.latest_event() {
        let time_str = format_event_time(latest.time.as_ref());
        let desc = latest
            .desc
            .as_deref()
            .unwrap_or("No description available.");
        let carrier = resp.carrier_name().unwrap_or(&query.carrier);
        format!(
            "✅ 快递更新 ({carrier} - {number}):\n⏰ 时间: {time_str}\n📄 状态: {desc}",
            number = query.tracking_number
        )
    } else {
        let status = resp
            .status
            .map_or_else(|| "N/A".to_string(), |s| s.to_string());
        let error_code = resp
            .error_code
            .as_ref()
            .map_or_else(|| "N/A".to_string(), display_code);
        let msg = resp.msg.as_deref().unwrap_or("No error message from API.");
        format!("⚠️ 查询失败 (API Response):\n状态码: {status}\n错误码: {error_code}\n消息: {msg}")
    }
}

/// Fallback message for a failed fetch.
pub fn describe_fetch_error(err: &FetchError) -> String {
    match err {
        FetchError::Timeout => "❌ 查询失败: 请求快递 API 超时.".to_string(),
        FetchError::Status { status, snippet } => {
            format!("❌ 查询失败: HTTP Error {status}.\nResponse: {snippet}...")
        }
        FetchError::Network(e) => format!("❌ 查询失败: 网络请求错误: {e}"),
    }
}

fn format_event_time(time: Option<&EventTime>) -> String {
    let secs = match time {
        Some(EventTime::Seconds(s)) => *s,
        Some(EventTime::SecondsFloat(f)) => *f as i64,
        Some(EventTime::Text(s)) => return s.clone(),
        None => return "Timestamp N/A".to_string(),
    };
    match Local.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => format!("Raw timestamp: {secs}"),
    }
}

/// Provider error codes arrive as numbers or strings; render either bare.
fn display_code(code: &serde_json::Value) -> String {
    match code {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
