use crate::constants::{DRAG_THRESHOLD_PX, WHEEL_PX_PER_STEP};
use glam::{Vec2, Vec3};
use orbit_core::{BodyId, SceneEvent};
use web_sys as web;

/// Press/drag bookkeeping in CSS pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub down: bool,
    pub dragging: bool,
    press: Vec2,
    last: Vec2,
}

impl PointerState {
    pub fn press(&mut self, css: Vec2) {
        self.down = true;
        self.dragging = false;
        self.press = css;
        self.last = css;
    }

    /// Movement since the previous call once the press has travelled past
    /// the drag threshold; `None` while it still counts as a click.
    pub fn drag_delta(&mut self, css: Vec2) -> Option<Vec2> {
        if !self.down {
            return None;
        }
        if !self.dragging && css.distance(self.press) < DRAG_THRESHOLD_PX {
            return None;
        }
        self.dragging = true;
        let delta = css - self.last;
        self.last = css;
        Some(delta)
    }

    /// End the press. Returns true when it was a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let click = self.down && !self.dragging;
        self.down = false;
        self.dragging = false;
        click
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Closest body whose pick sphere the ray hits.
pub fn pick_nearest(targets: &[(BodyId, Vec3, f32)], ro: Vec3, rd: Vec3) -> Option<BodyId> {
    let mut best = None::<(BodyId, f32)>;
    for &(id, center, radius) in targets {
        if let Some(t) = ray_sphere(ro, rd, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
    }
    best.map(|(id, _)| id)
}

/// Zoom steps for a wheel delta; scrolling up (negative delta) zooms in.
#[inline]
pub fn wheel_steps(delta_y: f64) -> f32 {
    (-delta_y as f32 / WHEEL_PX_PER_STEP).clamp(-5.0, 5.0)
}

#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let css = pointer_css_px(ev, canvas);
    let sx = (css.x / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (css.y / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Scene event bound to a key on the main page, if any.
pub fn key_event(key: &str, engaged: bool) -> Option<SceneEvent> {
    match key {
        "Escape" if engaged => Some(SceneEvent::Disengage),
        _ => None,
    }
}
