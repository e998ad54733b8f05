//! DOM overlay on top of the orbit canvas: HUD, detail panel, floating
//! labels, worker status, theme and cursor. Each piece is only rewritten when
//! its rendered form changes.

use crate::camera::world_to_screen;
use crate::constants::{HUD_ID, LABELS_ID, MAIN_ROOT_ID, PANEL_ID, THEME_TOGGLE_ID, WORKER_STATUS_ID};
use crate::{dom, pages};
use glam::Mat4;
use orbit_core::{CategoryId, SceneState, Theme, UiHint, WorkerState};
use std::fmt::Write as _;
use web_sys as web;

#[derive(Default)]
pub struct OverlayCache {
    theme: Option<Theme>,
    hud: Option<String>,
    panel: Option<(Option<CategoryId>, Theme)>,
    labels: Option<String>,
    worker: Option<String>,
    hint: Option<UiHint>,
}

impl OverlayCache {
    /// Forget everything so the next sync rewrites every piece.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Viewport in CSS pixels used to place labels.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub view_proj: Mat4,
    pub width: f32,
    pub height: f32,
}

pub fn sync(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    cache: &mut OverlayCache,
    scene: &SceneState,
    worker: &WorkerState,
    viewport: Viewport,
) {
    let theme = scene.theme;
    if cache.theme != Some(theme) {
        let ui = theme.ui_hex();
        dom::set_style(document, MAIN_ROOT_ID, &format!("color:{ui}"));
        if let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) {
            toggle.set_text_content(Some(theme.toggle_icon()));
            let _ = toggle.set_attribute("style", &format!("color:{ui};border-color:{ui}"));
        }
        if let Some(body) = document.body() {
            let _ = body.set_attribute("style", &format!("background:{}", theme.background_hex()));
        }
        cache.theme = Some(theme);
    }

    let hud = pages::hud_html(scene.hud_badge(), scene.hud_text.as_deref());
    if cache.hud.as_deref() != Some(hud.as_str()) {
        dom::set_html(document, HUD_ID, &hud);
        cache.hud = Some(hud);
    }

    let panel_key = (scene.active_category, theme);
    if cache.panel != Some(panel_key) {
        match scene.active_category {
            Some(c) => {
                dom::set_html(document, PANEL_ID, &pages::detail_panel(c.category(), theme));
                dom::set_style(document, PANEL_ID, "");
            }
            None => {
                dom::set_html(document, PANEL_ID, "");
                dom::set_style(document, PANEL_ID, "display:none");
            }
        }
        cache.panel = Some(panel_key);
    }

    let labels = labels_html(scene, viewport);
    if cache.labels.as_deref() != Some(labels.as_str()) {
        dom::set_html(document, LABELS_ID, &labels);
        cache.labels = Some(labels);
    }

    let status = pages::worker_status_html(worker);
    if cache.worker.as_deref() != Some(status.as_str()) {
        dom::set_html(document, WORKER_STATUS_ID, &status);
        cache.worker = Some(status);
    }

    if cache.hint != Some(scene.hint) {
        let _ = canvas
            .class_list()
            .toggle_with_force("pointer", scene.hint == UiHint::Pointer);
        cache.hint = Some(scene.hint);
    }
}

fn labels_html(scene: &SceneState, viewport: Viewport) -> String {
    let mut html = String::new();
    for label in scene.labels() {
        if let Some(p) = world_to_screen(viewport.view_proj, label.anchor, viewport.width, viewport.height) {
            let _ = write!(html, "{}", pages::label_html(&label, p.x, p.y));
        }
    }
    html
}
