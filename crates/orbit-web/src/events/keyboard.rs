use crate::app::App;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &App) {
    if !app.route.borrow().is_main() {
        return;
    }
    let engaged = app.scene.borrow().active_category.is_some();
    if let Some(event) = input::key_event(&ev.key(), engaged) {
        app.scene.borrow_mut().handle(event);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(app: &App) {
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
