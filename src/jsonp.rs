use regex::Regex;
use serde_json::Value;

/// Strip a JSONP wrapper like `callbackName( ... );`, returning the inner
/// JSON text. Callback names may be dotted (`jQuery.cb`), the trailing
/// semicolon is optional.
fn strip_wrapper(body: &str) -> Option<&str> {
    let re = Regex::new(r"(?s)^\s*[\w.]+\s*\((.*)\)\s*;?\s*$").ok()?;
    re.captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Decode a JSONP-wrapped (or plain) JSON body.
///
/// Falls back to parsing the whole body as JSON when no wrapper matches,
/// and returns `None` on anything malformed rather than failing the run.
pub fn parse_jsonp(body: &str) -> Option<Value> {
    let inner = strip_wrapper(body).unwrap_or(body);
    serde_json::from_str(inner).ok()
}
