//! Fetch of the edge worker greeting, cancellable via AbortController.

use crate::app::App;
use orbit_core::worker::{decode_message, endpoint, MESSAGE_PATH};
use orbit_core::{FetchError, WorkerMessage};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Build-time base URL of the edge worker; unset means same origin.
const WORKER_BASE_URL: Option<&str> = option_env!("WORKER_BASE_URL");

/// Start a fresh request, aborting any in-flight one.
pub fn request(app: &App) {
    cancel(app);
    let controller = match web::AbortController::new() {
        Ok(c) => c,
        Err(e) => {
            log::error!("[worker] AbortController unavailable: {:?}", e);
            return;
        }
    };
    let signal = controller.signal();
    *app.fetch.borrow_mut() = Some(controller);
    let ticket = app.worker.borrow_mut().begin();
    let url = endpoint(WORKER_BASE_URL, MESSAGE_PATH);
    log::info!("[worker] GET {url} (#{ticket})");

    let app = app.clone();
    spawn_local(async move {
        let result = match fetch_message(&url, &signal).await {
            Err(_) if signal.aborted() => Err(FetchError::Aborted),
            other => other,
        };
        match &result {
            Ok(msg) => log::info!("[worker] {}", msg.message),
            Err(FetchError::Aborted) => log::debug!("[worker] request #{ticket} aborted"),
            Err(e) => log::warn!("[worker] {e}"),
        }
        app.worker.borrow_mut().finish(ticket, result);
        let mut fetch = app.fetch.borrow_mut();
        if fetch.as_ref().is_some_and(|c| c.signal() == signal) {
            fetch.take();
        }
    });
}

pub fn cancel(app: &App) {
    if let Some(controller) = app.fetch.borrow_mut().take() {
        controller.abort();
    }
}

async fn fetch_message(url: &str, signal: &web::AbortSignal) -> Result<WorkerMessage, FetchError> {
    let window = web::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let init = web::RequestInit::new();
    init.set_method("GET");
    init.set_signal(Some(signal));
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    decode_message(&text.as_string().unwrap_or_default())
}

fn js_error(e: JsValue) -> FetchError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    FetchError::Network(message)
}
