use crate::app::App;
use orbit_core::Route;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Route for the address bar, replacing unmatched paths with `/start`.
pub fn current_route() -> Route {
    let path = web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let (route, redirect) = Route::resolve(&path);
    if redirect {
        log::info!("[route] {path:?} -> {}", route.path());
        replace(&route);
    }
    route
}

fn history() -> Option<web::History> {
    web::window().and_then(|w| w.history().ok())
}

pub fn push(route: &Route) {
    if let Some(h) = history() {
        if let Err(e) = h.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            log::warn!("[route] pushState failed: {:?}", e);
        }
    }
}

pub fn replace(route: &Route) {
    if let Some(h) = history() {
        if let Err(e) = h.replace_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            log::warn!("[route] replaceState failed: {:?}", e);
        }
    }
}

/// Back/forward buttons re-render from the address bar.
pub fn wire_popstate(app: &App) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PopStateEvent| {
        app.show(current_route());
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}
