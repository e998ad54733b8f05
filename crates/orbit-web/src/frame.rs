use crate::app::App;
use crate::constants::*;
use crate::overlay::{self, Viewport};
use crate::render::{self, FrameData};
use glam::{Vec3, Vec4};
use instant::Instant;
use orbit_core::backdrop::{star_vertices, starfield, wave_vertices, Star};
use orbit_core::color::hex_or_white;
use orbit_core::geometry::{BodyInstance, LineVertex};
use orbit_core::{Camera, Route, FOG_FAR, FOG_NEAR, STAR_COUNT, STAR_DEPTH, STAR_RADIUS, STAR_SEED};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: App,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,

    orbit_stars: Vec<Star>,
    start_stars: Vec<Star>,
    start_time: f32,
    start_star_rotation: f32,

    points: Vec<LineVertex>,
    lines: Vec<LineVertex>,
}

impl<'a> FrameContext<'a> {
    pub fn new(app: App, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            app,
            gpu,
            last_instant: Instant::now(),
            orbit_stars: starfield(STAR_SEED, STAR_COUNT, STAR_RADIUS, STAR_DEPTH, 0.5),
            start_stars: starfield(
                STAR_SEED + 1,
                START_STAR_COUNT,
                START_STAR_RADIUS,
                START_STAR_DEPTH,
                0.0,
            ),
            start_time: 0.0,
            start_star_rotation: 0.0,
            points: Vec::with_capacity(STAR_COUNT),
            lines: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let w = self.app.canvas.width().max(1);
        let h = self.app.canvas.height().max(1);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
        }
        let aspect = w as f32 / h as f32;

        let route = self.app.route.borrow().clone();
        match route {
            Route::Main => self.frame_main(dt_sec, aspect),
            Route::Start => self.frame_start(dt_sec, aspect),
            Route::About | Route::Project(_) => {}
        }
    }

    fn frame_main(&mut self, dt_sec: f32, aspect: f32) {
        self.points.clear();
        self.lines.clear();
        let (camera, background, mut bodies) = {
            let mut scene = self.app.scene.borrow_mut();
            scene.tick(dt_sec);
            let camera = scene.camera.camera(aspect);

            let rect = self.app.canvas.get_bounding_client_rect();
            overlay::sync(
                &self.app.document,
                &self.app.canvas,
                &mut self.app.overlay.borrow_mut(),
                &scene,
                &self.app.worker.borrow(),
                Viewport {
                    view_proj: camera.view_proj(),
                    width: rect.width() as f32,
                    height: rect.height() as f32,
                },
            );

            if scene.theme.shows_stars() {
                star_vertices(&self.orbit_stars, scene.star_rotation, &mut self.points);
            }
            scene.line_vertices(&mut self.lines);
            (
                camera,
                hex_or_white(scene.theme.background_hex()),
                scene.body_instances(),
            )
        };
        sort_back_to_front(&mut bodies, camera.eye);
        draw(
            &mut self.gpu,
            &FrameData {
                camera: &camera,
                background,
                fog: Some((FOG_NEAR, FOG_FAR)),
                points: &self.points,
                lines: &self.lines,
                bodies: &bodies,
            },
        );
    }

    fn frame_start(&mut self, dt_sec: f32, aspect: f32) {
        self.start_time += dt_sec;
        self.start_star_rotation += START_STAR_SPIN_PER_SEC * dt_sec;
        self.points.clear();
        self.lines.clear();
        star_vertices(&self.start_stars, self.start_star_rotation, &mut self.points);
        wave_vertices(self.start_time, Vec4::new(1.0, 1.0, 1.0, 0.6), &mut self.lines);
        let camera = Camera {
            eye: Vec3::from_array(START_CAMERA_POSITION),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: START_CAMERA_FOVY_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 400.0,
        };
        draw(
            &mut self.gpu,
            &FrameData {
                camera: &camera,
                background: hex_or_white(START_BACKGROUND_HEX),
                fog: None,
                points: &self.points,
                lines: &self.lines,
                bodies: &[],
            },
        );
    }
}

fn draw(gpu: &mut Option<render::GpuState<'_>>, data: &FrameData) {
    let Some(g) = gpu else {
        return;
    };
    match g.render(data) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
        Err(e) => log::error!("render error: {:?}", e),
    }
}

/// Bodies are alpha blended without depth; draw far ones first.
fn sort_back_to_front(bodies: &mut [BodyInstance], eye: Vec3) {
    bodies.sort_by(|a, b| {
        let da = Vec3::from_array(a.position).distance_squared(eye);
        let db = Vec3::from_array(b.position).distance_squared(eye);
        db.total_cmp(&da)
    });
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
