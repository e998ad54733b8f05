//! Client-side state for the edge worker greeting.
//!
//! The transport lives in the web crate; this module owns the status machine
//! so stale or aborted responses can be discarded without touching the DOM.

use serde::{Deserialize, Serialize};

pub const MESSAGE_PATH: &str = "/api/worker/message";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerMessage {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Worker responded with {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("invalid payload: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct WorkerState {
    pub status: FetchStatus,
    pub data: Option<WorkerMessage>,
    pub error: Option<String>,
    generation: u64,
}

impl Default for WorkerState {
    fn default() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
            generation: 0,
        }
    }
}

impl WorkerState {
    /// Start a request. Previous data stays visible while loading. The
    /// returned ticket must be handed back to `finish`.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        self.generation
    }

    #[inline]
    pub fn current_ticket(&self) -> u64 {
        self.generation
    }

    /// Apply a result. Results for superseded tickets and aborts are ignored.
    /// Returns whether the state changed.
    pub fn finish(&mut self, ticket: u64, result: Result<WorkerMessage, FetchError>) -> bool {
        if ticket != self.generation {
            log::debug!("[worker] dropping stale response #{ticket}");
            return false;
        }
        match result {
            Ok(msg) => {
                self.status = FetchStatus::Success;
                self.data = Some(msg);
                self.error = None;
            }
            Err(FetchError::Aborted) => return false,
            Err(e) => {
                self.status = FetchStatus::Error;
                self.data = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn status_text(&self) -> String {
        match self.status {
            FetchStatus::Idle => "Worker: idle".to_string(),
            FetchStatus::Loading => "Worker: connecting...".to_string(),
            FetchStatus::Success => match &self.data {
                Some(d) => format!("Worker: {}", d.message),
                None => "Worker: connected".to_string(),
            },
            FetchStatus::Error => format!(
                "Worker error: {}",
                self.error.as_deref().unwrap_or("Unknown error")
            ),
        }
    }

    #[inline]
    pub fn can_retry(&self) -> bool {
        self.status == FetchStatus::Error
    }
}

/// Join an optional base URL with an API path. A missing or empty base means
/// same-origin relative requests.
pub fn endpoint(base: Option<&str>, path: &str) -> String {
    match base.map(|b| b.trim_end_matches('/')) {
        Some(b) if !b.is_empty() => format!("{b}{path}"),
        _ => path.to_string(),
    }
}

pub fn decode_message(body: &str) -> Result<WorkerMessage, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}
