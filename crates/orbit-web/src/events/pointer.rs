use crate::app::App;
use crate::camera::screen_to_world_ray;
use crate::input;
use orbit_core::{BodyId, SceneEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Body under the pointer, if any.
fn pick_at(app: &App, ev: &web::PointerEvent) -> Option<BodyId> {
    let pos = input::pointer_canvas_px(ev, &app.canvas);
    let w = app.canvas.width() as f32;
    let h = app.canvas.height().max(1) as f32;
    let scene = app.scene.borrow();
    let camera = scene.camera.camera(w / h);
    let (ro, rd) = screen_to_world_ray(&camera, pos.x, pos.y, w, h);
    input::pick_nearest(&scene.pick_targets(), ro, rd)
}

#[inline]
fn on_main(app: &App) -> bool {
    app.route.borrow().is_main()
}

pub fn wire_input_handlers(app: &App) {
    // pointermove: orbit drag, otherwise hover picking
    {
        let app_m = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !on_main(&app_m) {
                return;
            }
            let css = input::pointer_css_px(&ev, &app_m.canvas);
            let delta = app_m.pointer.borrow_mut().drag_delta(css);
            if let Some(d) = delta {
                app_m.scene.borrow_mut().camera.drag(d.x, d.y);
                return;
            }
            let hit = pick_at(&app_m, &ev);
            app_m.scene.borrow_mut().set_hovered(hit);
        }) as Box<dyn FnMut(_)>);
        let _ = app
            .canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown
    {
        let app_d = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !on_main(&app_d) {
                return;
            }
            let css = input::pointer_css_px(&ev, &app_d.canvas);
            app_d.pointer.borrow_mut().press(css);
            let _ = app_d.canvas.set_pointer_capture(ev.pointer_id());
        }) as Box<dyn FnMut(_)>);
        let _ = app
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup: a press that never became a drag is a click on the body under it
    {
        let app_u = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let was_click = app_u.pointer.borrow_mut().release();
            let _ = app_u.canvas.release_pointer_capture(ev.pointer_id());
            if !was_click || !on_main(&app_u) {
                return;
            }
            let Some(id) = pick_at(&app_u, &ev) else {
                return;
            };
            log::info!("[pointer] click {:?}", id);
            let next = app_u.scene.borrow_mut().handle(SceneEvent::Click(id));
            if let Some(route) = next {
                app_u.navigate(route);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = app
            .canvas
            .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerleave
    {
        let app_l = app.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            if app_l.pointer.borrow().dragging {
                return;
            }
            app_l.scene.borrow_mut().set_hovered(None);
        }) as Box<dyn FnMut(_)>);
        let _ = app
            .canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // wheel zoom; non-passive so the page does not scroll
    {
        let app_w = app.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            if !on_main(&app_w) {
                return;
            }
            ev.prevent_default();
            app_w
                .scene
                .borrow_mut()
                .camera
                .wheel(input::wheel_steps(ev.delta_y()));
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        let _ = app.canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
