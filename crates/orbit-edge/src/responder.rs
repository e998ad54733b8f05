use crate::config::EdgeConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

pub const MESSAGE_PATH: &str = "/api/worker/message";
pub const ECHO_PATH: &str = "/api/worker/echo";

pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// CORS headers attached to every response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cors {
    pub allow_origin: String,
}

impl Cors {
    /// Reflect the caller's origin, or allow any.
    pub fn for_origin(origin: Option<&str>) -> Self {
        Self {
            allow_origin: origin.unwrap_or("*").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeResponse {
    pub status: u16,
    pub cors: Cors,
    /// `None` for preflight responses, which carry headers only.
    pub body: Option<Value>,
}

/// Answer one request. `now` stamps the greeting.
pub fn respond(
    method: &str,
    path: &str,
    origin: Option<&str>,
    body: &[u8],
    config: &EdgeConfig,
    now: DateTime<Utc>,
) -> EdgeResponse {
    let cors = Cors::for_origin(origin);
    let (status, body) = match (method, path) {
        ("OPTIONS", _) => (200, None),
        ("GET", MESSAGE_PATH) => (
            200,
            Some(json!({
                "ok": true,
                "message": config.message(),
                "timestamp": now.to_rfc3339_opts(SecondsFormat::Millis, true),
            })),
        ),
        ("POST", ECHO_PATH) => {
            let echo = serde_json::from_slice::<Value>(body).unwrap_or_else(|e| {
                log::debug!("[edge] echo body is not JSON ({e}); echoing {{}}");
                json!({})
            });
            (200, Some(json!({ "ok": true, "echo": echo })))
        }
        _ => (404, Some(json!({ "ok": false, "error": "Not found" }))),
    };
    EdgeResponse { status, cors, body }
}
