use crate::app::App;
use crate::dom::closest_attr;
use crate::pages::{ACTION_DISENGAGE, ACTION_RETRY_WORKER, ACTION_TOGGLE_THEME};
use crate::worker;
use orbit_core::{Route, SceneEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn dispatch_action(app: &App, action: &str) {
    match action {
        ACTION_DISENGAGE => {
            app.scene.borrow_mut().handle(SceneEvent::Disengage);
        }
        ACTION_TOGGLE_THEME => {
            app.scene.borrow_mut().handle(SceneEvent::ToggleTheme);
        }
        ACTION_RETRY_WORKER => worker::request(app),
        other => log::warn!("[click] unknown action {other:?}"),
    }
}

/// One document-level listener serves every `data-route` / `data-action`
/// element the page templates emit.
pub fn wire_delegated_clicks(app: &App) {
    let app_c = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(path) = closest_attr(ev.target(), "data-route") {
            ev.prevent_default();
            match Route::parse(&path) {
                Some(route) => app_c.navigate(route),
                None => log::warn!("[click] bad route {path:?}"),
            }
            return;
        }
        if let Some(action) = closest_attr(ev.target(), "data-action") {
            dispatch_action(&app_c, &action);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = app
        .document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
