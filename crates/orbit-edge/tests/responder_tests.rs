use chrono::{TimeZone, Utc};
use orbit_edge::{respond, EdgeConfig, EdgeError, DEFAULT_ADDR};
use serde_json::json;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

#[test]
fn message_uses_default_greeting() {
    let out = respond("GET", "/api/worker/message", None, b"", &EdgeConfig::default(), now());
    assert_eq!(out.status, 200);
    assert_eq!(out.cors.allow_origin, "*");
    assert_eq!(
        out.body,
        Some(json!({
            "ok": true,
            "message": "Hello from Cloudflare Worker",
            "timestamp": "2024-05-01T12:30:00.000Z",
        }))
    );
}

#[test]
fn message_override_and_origin_reflection() {
    let config = EdgeConfig {
        message: Some("hi from the edge".into()),
        ..EdgeConfig::default()
    };
    let out = respond(
        "GET",
        "/api/worker/message",
        Some("http://localhost:5173"),
        b"",
        &config,
        now(),
    );
    assert_eq!(out.cors.allow_origin, "http://localhost:5173");
    assert_eq!(out.body.unwrap()["message"], "hi from the edge");
}

#[test]
fn echo_returns_body_or_empty_object() {
    let config = EdgeConfig::default();
    let ok = respond("POST", "/api/worker/echo", None, br#"{"a":1}"#, &config, now());
    assert_eq!(ok.status, 200);
    assert_eq!(ok.body, Some(json!({ "ok": true, "echo": { "a": 1 } })));

    let bad = respond("POST", "/api/worker/echo", None, b"{nope", &config, now());
    assert_eq!(bad.body, Some(json!({ "ok": true, "echo": {} })));

    let empty = respond("POST", "/api/worker/echo", None, b"", &config, now());
    assert_eq!(empty.body, Some(json!({ "ok": true, "echo": {} })));
}

#[test]
fn preflight_has_no_body() {
    let out = respond("OPTIONS", "/anything/at/all", Some("https://x.dev"), b"", &EdgeConfig::default(), now());
    assert_eq!(out.status, 200);
    assert_eq!(out.body, None);
    assert_eq!(out.cors.allow_origin, "https://x.dev");
}

#[test]
fn wrong_method_or_path_is_not_found() {
    let config = EdgeConfig::default();
    for (method, path) in [
        ("GET", "/api/worker/echo"),
        ("POST", "/api/worker/message"),
        ("GET", "/"),
        ("DELETE", "/api/worker/message"),
    ] {
        let out = respond(method, path, None, b"", &config, now());
        assert_eq!(out.status, 404, "{method} {path}");
        assert_eq!(out.body, Some(json!({ "ok": false, "error": "Not found" })));
    }
}

#[test]
fn config_from_lookup() {
    let config = EdgeConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config.addr.to_string(), DEFAULT_ADDR);
    assert_eq!(config.message(), "Hello from Cloudflare Worker");

    let config = EdgeConfig::from_lookup(|k| match k {
        "EDGE_ADDR" => Some("0.0.0.0:9000".into()),
        "VALUE_FROM_CLOUDFLARE" => Some("custom".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.addr.port(), 9000);
    assert_eq!(config.message(), "custom");

    let err = EdgeConfig::from_lookup(|k| (k == "EDGE_ADDR").then(|| "nowhere".to_string()));
    assert!(matches!(err, Err(EdgeError::InvalidAddr { .. })));
}
