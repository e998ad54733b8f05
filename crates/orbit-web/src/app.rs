//! Shared handles for the page: the current route, the orbit scene, the
//! worker status and the bits of DOM every callback needs.

use crate::constants::{CANVAS_ID, PAGE_ID};
use crate::input::PointerState;
use crate::overlay::OverlayCache;
use crate::{dom, pages, router, worker};
use orbit_core::{Route, SceneEvent, SceneState, WorkerState, LAUNCH_DELAY_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct App {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub route: Rc<RefCell<Route>>,
    pub scene: Rc<RefCell<SceneState>>,
    pub worker: Rc<RefCell<WorkerState>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub fetch: Rc<RefCell<Option<web::AbortController>>>,
    pub overlay: Rc<RefCell<OverlayCache>>,
    launch_timer: Rc<RefCell<Option<i32>>>,
    main_mounted: Rc<Cell<bool>>,
}

impl App {
    pub fn new(document: web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if document.get_element_by_id(PAGE_ID).is_none() {
            anyhow::bail!("missing #{PAGE_ID}");
        }
        Ok(Self {
            document,
            canvas,
            route: Rc::new(RefCell::new(Route::Start)),
            scene: Rc::new(RefCell::new(SceneState::new())),
            worker: Rc::new(RefCell::new(WorkerState::default())),
            pointer: Rc::new(RefCell::new(PointerState::default())),
            fetch: Rc::new(RefCell::new(None)),
            overlay: Rc::new(RefCell::new(OverlayCache::default())),
            launch_timer: Rc::new(RefCell::new(None)),
            main_mounted: Rc::new(Cell::new(false)),
        })
    }

    /// Push `route` onto the history stack and show it.
    pub fn navigate(&self, route: Route) {
        if *self.route.borrow() == route {
            return;
        }
        router::push(&route);
        self.show(route);
    }

    /// Render the page for `route`, mounting or unmounting the orbit scene
    /// when crossing the main page boundary.
    pub fn show(&self, route: Route) {
        self.route.replace(route.clone());
        if self.main_mounted.get() && !route.is_main() {
            self.unmount_main();
        }

        let html = match &route {
            Route::Start => pages::start_page(),
            Route::Main => pages::main_page(self.scene.borrow().theme),
            Route::About => pages::about_page(),
            Route::Project(slug) => pages::project_page(slug),
        };
        dom::set_html(&self.document, PAGE_ID, &html);

        let canvas_visible = matches!(route, Route::Start | Route::Main);
        let _ = self
            .canvas
            .class_list()
            .toggle_with_force("hidden", !canvas_visible);
        if canvas_visible {
            dom::sync_canvas_backing_size(&self.canvas);
        }
        if !route.is_main() {
            if let Some(body) = self.document.body() {
                let _ = body.remove_attribute("style");
            }
        }
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }

        if route.is_main() && !self.main_mounted.get() {
            self.mount_main();
        }
        self.overlay.borrow_mut().reset();
        log::info!("[route] {}", route.path());
    }

    fn mount_main(&self) {
        self.main_mounted.set(true);
        {
            let mut scene = self.scene.borrow_mut();
            let theme = scene.theme;
            *scene = SceneState::new();
            scene.theme = theme;
        }
        *self.pointer.borrow_mut() = PointerState::default();

        let app = self.clone();
        let handle = dom::set_timeout(LAUNCH_DELAY_MS, move || {
            app.launch_timer.borrow_mut().take();
            app.scene.borrow_mut().handle(SceneEvent::Launch);
        });
        if let Some(old) = self.launch_timer.replace(handle) {
            dom::clear_timeout(old);
        }
        worker::request(self);
    }

    fn unmount_main(&self) {
        self.main_mounted.set(false);
        if let Some(handle) = self.launch_timer.borrow_mut().take() {
            dom::clear_timeout(handle);
        }
        worker::cancel(self);
        self.scene.borrow_mut().set_hovered(None);
    }
}
