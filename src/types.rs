use serde::Deserialize;

/// API status code for a successful query.
pub const STATUS_OK: i32 = 0;

/// Decoded payload from the express query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingResponse {
    /// API-level status code, 0 on success.
    #[serde(default)]
    pub status: Option<i32>,
    /// Error message accompanying a non-zero status.
    #[serde(default)]
    pub msg: Option<String>,
    /// Provider error code, sent as either a number or a string.
    #[serde(default)]
    pub error_code: Option<serde_json::Value>,
    #[serde(default)]
    pub data: Option<TrackingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackingData {
    /// Logistics events, newest first per the provider's contract.
    #[serde(default)]
    pub context: Vec<TrackingEvent>,
    /// Carrier metadata. The field name misspelling is the provider's.
    #[serde(rename = "officalService", default)]
    pub offical_service: Option<OfficalService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficalService {
    #[serde(rename = "comName", default)]
    pub com_name: Option<String>,
}

/// One logistics status update.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackingEvent {
    #[serde(default)]
    pub time: Option<EventTime>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Event time is usually epoch seconds, but some carriers relay a float
/// or a preformatted string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Seconds(i64),
    SecondsFloat(f64),
    Text(String),
}

impl TrackingResponse {
    /// The newest event, present only when the query succeeded and the
    /// provider returned a non-empty event list.
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        if self.status != Some(STATUS_OK) {
            return None;
        }
        self.data.as_ref()?.context.first()
    }

    /// Carrier display name from the provider's metadata, if any.
    pub fn carrier_name(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .offical_service
            .as_ref()?
            .com_name
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "status": 0,
        "data": {
            "context": [
                {"time": 1700000000, "desc": "Delivered"},
                {"time": 1699990000, "desc": "Out for delivery"}
            ],
            "officalService": {"comName": "中通快递"}
        }
    }"#;

    #[test]
    fn test_deserialize_success_payload() {
        let resp: TrackingResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.status, Some(0));
        assert_eq!(resp.carrier_name(), Some("中通快递"));

        let latest = resp.latest_event().unwrap();
        assert_eq!(latest.desc.as_deref(), Some("Delivered"));
        assert!(matches!(latest.time, Some(EventTime::Seconds(1700000000))));
    }

    #[test]
    fn test_deserialize_failure_payload() {
        let resp: TrackingResponse = serde_json::from_str(
            r#"{"status": 1, "msg": "not found", "error_code": 20001}"#,
        )
        .unwrap();
        assert_eq!(resp.status, Some(1));
        assert_eq!(resp.msg.as_deref(), Some("not found"));
        assert!(resp.latest_event().is_none());
    }

    #[test]
    fn test_nonzero_status_hides_events() {
        let resp: TrackingResponse = serde_json::from_str(
            r#"{"status": 2, "data": {"context": [{"time": 1, "desc": "x"}]}}"#,
        )
        .unwrap();
        assert!(resp.latest_event().is_none());
    }

    #[test]
    fn test_event_time_variants() {
        let event: TrackingEvent =
            serde_json::from_str(r#"{"time": 1700000000.5, "desc": "a"}"#).unwrap();
        assert!(matches!(event.time, Some(EventTime::SecondsFloat(_))));

        let event: TrackingEvent =
            serde_json::from_str(r#"{"time": "2023-11-14 22:13", "desc": "b"}"#).unwrap();
        assert!(matches!(event.time, Some(EventTime::Text(_))));

        let event: TrackingEvent = serde_json::from_str(r#"{"desc": "c"}"#).unwrap();
        assert!(event.time.is_none());
    }
}
