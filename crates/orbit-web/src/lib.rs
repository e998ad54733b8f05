#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod pages;
mod render;
mod router;
mod shaders;
mod worker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = app::App::new(document)?;

    dom::wire_canvas_resize(&app.canvas);
    events::wire_input_handlers(&app);
    events::wire_global_keydown(&app);
    events::wire_delegated_clicks(&app);
    router::wire_popstate(&app);

    // Pages work without WebGPU; only the canvas stays blank.
    app.show(router::current_route());

    let gpu = frame::init_gpu(&app.canvas).await;
    if gpu.is_none() {
        log::warn!("[render] continuing without WebGPU");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
