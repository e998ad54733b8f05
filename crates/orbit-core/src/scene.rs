//! The whole orbit page as one explicit state value.
//!
//! Input handlers translate DOM events into [`SceneEvent`]s, the frame driver
//! calls [`advance`] once per display refresh, and the renderer and overlay
//! read everything they draw from the resulting [`SceneState`].

use crate::camera::CameraRig;
use crate::catalog::{CategoryId, CATEGORIES};
use crate::color::hex_or_white;
use crate::constants::*;
use crate::geometry::{push_ring, BodyInstance, LineVertex};
use crate::orbit::{planet_layout, BodyId, OrbitingBody};
use crate::router::Route;
use crate::trail::Trail;
use glam::{Vec3, Vec4};
use smallvec::SmallVec;

pub const WELCOME_TEXT: &str = "System: Welcome, builder. Hover to reveal project intel.";
pub const RETURN_TEXT: &str = "System: Returning to main orbital view.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background_hex(self) -> &'static str {
        match self {
            Theme::Dark => "#080808",
            Theme::Light => "#f0f0f0",
        }
    }

    pub fn ui_hex(self) -> &'static str {
        match self {
            Theme::Dark => "#ffffff",
            Theme::Light => "#111111",
        }
    }

    pub fn panel_background(self) -> &'static str {
        match self {
            Theme::Dark => "rgba(10, 10, 10, 0.85)",
            Theme::Light => "rgba(240, 240, 240, 0.85)",
        }
    }

    pub fn ring_hex(self) -> &'static str {
        match self {
            Theme::Dark => "#444444",
            Theme::Light => "#dddddd",
        }
    }

    /// Icon shown on the theme toggle button.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }

    pub fn shows_stars(self) -> bool {
        self == Theme::Dark
    }
}

/// Cursor the page should show; applied by the DOM layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiHint {
    #[default]
    Default,
    Pointer,
}

impl UiHint {
    pub fn css_cursor(self) -> &'static str {
        match self {
            UiHint::Default => "default",
            UiHint::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    PointerOver(BodyId),
    PointerOut(BodyId),
    Click(BodyId),
    Disengage,
    ToggleTheme,
    Launch,
}

/// Floating text anchored to a body in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub body: BodyId,
    pub anchor: Vec3,
    pub text: String,
    /// CSS pixel offset below the projected anchor.
    pub offset_px: f32,
    /// `#rrggbb` glow colour, if any.
    pub glow: Option<&'static str>,
    pub card: bool,
}

#[derive(Clone, Debug)]
pub struct CoreBody {
    pub hovered: bool,
    pub rotation: Vec3,
    float_time: f32,
}

impl CoreBody {
    /// Slow bob of the floating core.
    pub fn offset(&self) -> Vec3 {
        Vec3::new(0.0, (self.float_time * 0.5).sin() * 0.15, 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Satellite {
    pub slug: &'static str,
    pub body: OrbitingBody,
    pub trail: Trail,
}

#[derive(Clone, Debug)]
pub struct Planet {
    pub category: CategoryId,
    pub body: OrbitingBody,
    pub satellites: SmallVec<[Satellite; 4]>,
    pub trail: Trail,
}

#[derive(Clone, Debug)]
pub struct SceneState {
    pub theme: Theme,
    pub active_category: Option<CategoryId>,
    pub hud_text: Option<String>,
    pub global_speed: f32,
    pub started: bool,
    pub hint: UiHint,
    pub camera: CameraRig,
    pub core: CoreBody,
    pub planets: Vec<Planet>,
    pub star_rotation: f32,
    hovered: Option<BodyId>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        let planets = CATEGORIES
            .iter()
            .map(|category| {
                let color = hex_or_white(category.color);
                let (radius, speed, delay) = planet_layout(category.id);
                let n = category.projects.len();
                Planet {
                    category: category.id,
                    body: OrbitingBody::planet(radius, speed, color, delay),
                    satellites: category
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, p)| Satellite {
                            slug: p.slug,
                            body: OrbitingBody::satellite(i, n, color),
                            trail: Trail::new(SATELLITE_TRAIL_LENGTH),
                        })
                        .collect(),
                    trail: Trail::new(PLANET_TRAIL_LENGTH),
                }
            })
            .collect();
        Self {
            theme: Theme::Dark,
            active_category: None,
            hud_text: Some(WELCOME_TEXT.to_string()),
            global_speed: OVERVIEW_SPEED,
            started: false,
            hint: UiHint::Default,
            camera: CameraRig::default(),
            core: CoreBody {
                hovered: false,
                rotation: Vec3::ZERO,
                float_time: 0.0,
            },
            planets,
            star_rotation: 0.0,
            hovered: None,
        }
    }

    #[inline]
    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn planet(&self, category: CategoryId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.category == category)
    }

    fn planet_mut(&mut self, category: CategoryId) -> Option<&mut Planet> {
        self.planets.iter_mut().find(|p| p.category == category)
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut OrbitingBody> {
        match id {
            BodyId::Core => None,
            BodyId::Planet(c) => self.planet_mut(c).map(|p| &mut p.body),
            BodyId::Satellite(c, i) => self
                .planet_mut(c)
                .and_then(|p| p.satellites.get_mut(i))
                .map(|s| &mut s.body),
        }
    }

    /// Live world-space position of a body.
    pub fn body_position(&self, id: BodyId) -> Option<Vec3> {
        match id {
            BodyId::Core => Some(self.core.offset()),
            BodyId::Planet(c) => self.planet(c).map(|p| p.body.position()),
            BodyId::Satellite(c, i) => {
                let planet = self.planet(c)?;
                let sat = planet.satellites.get(i)?;
                Some(planet.body.position() + sat.body.position())
            }
        }
    }

    /// Pick spheres for every body: (id, centre, radius).
    pub fn pick_targets(&self) -> Vec<(BodyId, Vec3, f32)> {
        let mut out = vec![(BodyId::Core, self.core.offset(), CORE_SCALE)];
        for planet in &self.planets {
            let centre = planet.body.position();
            out.push((BodyId::Planet(planet.category), centre, PLANET_PICK_RADIUS));
            for (i, sat) in planet.satellites.iter().enumerate() {
                out.push((
                    BodyId::Satellite(planet.category, i),
                    centre + sat.body.position(),
                    SATELLITE_PICK_RADIUS,
                ));
            }
        }
        out
    }

    /// `[FOCUS]` while a category is engaged, `[SYSTEM]` otherwise.
    pub fn hud_badge(&self) -> &'static str {
        if self.active_category.is_some() {
            "FOCUS"
        } else {
            "SYSTEM"
        }
    }

    /// Diff the hovered body and emit the matching pointer events.
    pub fn set_hovered(&mut self, next: Option<BodyId>) {
        if next == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            self.handle(SceneEvent::PointerOut(prev));
        }
        if let Some(id) = next {
            self.handle(SceneEvent::PointerOver(id));
        }
    }

    /// Apply one UI event. Returns a route when the event navigates away.
    pub fn handle(&mut self, event: SceneEvent) -> Option<Route> {
        match event {
            SceneEvent::PointerOver(id) => {
                self.hovered = Some(id);
                self.hint = UiHint::Pointer;
                match id {
                    BodyId::Core => self.core.hovered = true,
                    BodyId::Planet(c) => {
                        self.hud_text = Some(format!("Orbit: {} // Click to focus.", c.category().title));
                    }
                    BodyId::Satellite(c, i) => {
                        if let Some(p) = c.category().projects.get(i) {
                            self.hud_text = Some(format!("Project: {} // {}", p.name, p.summary));
                        }
                    }
                }
                if let Some(body) = self.body_mut(id) {
                    body.hovered = true;
                }
                None
            }
            SceneEvent::PointerOut(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
                self.hint = UiHint::Default;
                match id {
                    BodyId::Core => self.core.hovered = false,
                    BodyId::Planet(c) => {
                        if self.active_category != Some(c) {
                            self.hud_text = None;
                        }
                    }
                    BodyId::Satellite(..) => self.hud_text = None,
                }
                if let Some(body) = self.body_mut(id) {
                    body.hovered = false;
                }
                None
            }
            SceneEvent::Click(BodyId::Core) => Some(Route::About),
            SceneEvent::Click(BodyId::Satellite(c, i)) => c
                .category()
                .projects
                .get(i)
                .map(|p| Route::Project(p.slug.to_string())),
            SceneEvent::Click(BodyId::Planet(c)) => {
                self.select(c);
                None
            }
            SceneEvent::Disengage => {
                self.disengage();
                None
            }
            SceneEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                None
            }
            SceneEvent::Launch => {
                self.started = true;
                None
            }
        }
    }

    fn select(&mut self, category: CategoryId) {
        let pos = self
            .body_position(BodyId::Planet(category))
            .unwrap_or(Vec3::ZERO);
        let target = Vec3::new(pos.x * FOCUS_CAMERA_PULL, FOCUS_CAMERA_HEIGHT, pos.z * FOCUS_CAMERA_PULL);
        self.active_category = Some(category);
        self.camera.engage(BodyId::Planet(category), target);
        self.global_speed = FOCUS_SPEED;
        self.hud_text = Some(format!(
            "Connected: {} orbit. Exploring key projects...",
            category.category().title
        ));
        log::info!("[scene] focus {}", category.key());
    }

    fn disengage(&mut self) {
        self.active_category = None;
        self.camera.disengage();
        self.camera.force_reset();
        self.global_speed = OVERVIEW_SPEED;
        self.hud_text = Some(RETURN_TEXT.to_string());
        log::info!("[scene] disengage");
    }

    /// Advance every animated value by one frame of `dt_sec` seconds.
    pub fn tick(&mut self, dt_sec: f32) {
        let speed = self.global_speed;
        let launched = self.started;
        self.star_rotation += STAR_SPIN_PER_FRAME * speed;

        self.core.rotation.x += CORE_SPIN_PER_FRAME * speed;
        self.core.rotation.y += CORE_SPIN_PER_FRAME * speed;
        self.core.float_time += dt_sec.max(0.0) * 2.0;

        let active = self.active_category;
        for planet in &mut self.planets {
            planet.body.advance(dt_sec, speed, launched);
            let target_scale = if planet.body.hovered {
                PLANET_HOVER_SCALE
            } else if active == Some(planet.category) {
                PLANET_ACTIVE_SCALE
            } else {
                1.0
            };
            planet.body.approach_scale(target_scale, PLANET_SCALE_LERP);
            let centre = planet.body.position();
            planet.trail.push(centre);
            for sat in &mut planet.satellites {
                sat.body.advance(dt_sec, speed, launched);
                sat.trail.push(centre + sat.body.position());
            }
        }

        let tracked = self.camera.tracked().and_then(|id| self.body_position(id));
        self.camera.advance(tracked);
    }

    /// Glowing billboards for every body.
    pub fn body_instances(&self) -> Vec<BodyInstance> {
        let dark = self.theme == Theme::Dark;
        let mut out = Vec::with_capacity(1 + self.planets.len() * 3);

        let core_color = if dark { Vec4::ONE } else { hex_or_white("#222222") };
        out.push(BodyInstance {
            position: self.core.offset().to_array(),
            radius: CORE_SCALE,
            color: (core_color * Vec4::new(1.0, 1.0, 1.0, 0.8)).to_array(),
            params: [if self.core.hovered { 0.6 } else { 0.3 }, self.core.rotation.y, 20.0, 0.0],
        });

        for planet in &self.planets {
            let focused = planet.body.hovered || self.active_category == Some(planet.category);
            let centre = planet.body.position();
            let alpha = if focused { 1.0 } else { 0.7 };
            out.push(BodyInstance {
                position: centre.to_array(),
                radius: PLANET_BODY_RADIUS * planet.body.scale,
                color: (planet.body.color * Vec4::new(1.0, 1.0, 1.0, alpha)).to_array(),
                params: [if focused { 0.8 } else { 0.3 }, planet.body.rotation.y, 20.0, 0.0],
            });
            let base = if dark { Vec4::ONE } else { hex_or_white("#888888") };
            for sat in &planet.satellites {
                let hovered = sat.body.hovered;
                let color = if hovered { sat.body.color } else { base };
                out.push(BodyInstance {
                    position: (centre + sat.body.position()).to_array(),
                    radius: SATELLITE_BODY_RADIUS,
                    color: (color * Vec4::new(1.0, 1.0, 1.0, if hovered { 1.0 } else { 0.4 })).to_array(),
                    params: [if hovered { 1.5 } else { 0.1 }, sat.body.rotation.x, 8.0, 0.0],
                });
            }
        }
        out
    }

    /// Orbit rings and trails as line-list vertices.
    pub fn line_vertices(&self, out: &mut Vec<LineVertex>) {
        let ring = hex_or_white(self.theme.ring_hex()) * Vec4::new(1.0, 1.0, 1.0, 0.3);
        for planet in &self.planets {
            push_ring(out, planet.body.orbit_radius, 128, ring);
        }
        for planet in &self.planets {
            planet.trail.push_lines(out, planet.body.color);
            for sat in &planet.satellites {
                sat.trail.push_lines(out, sat.body.color);
            }
        }
    }

    /// Labels that are currently visible.
    pub fn labels(&self) -> Vec<Label> {
        let mut out = Vec::new();
        if self.core.hovered {
            out.push(Label {
                body: BodyId::Core,
                anchor: self.core.offset(),
                text: "ABOUT".to_string(),
                offset_px: 0.0,
                glow: Some(self.theme.ui_hex()),
                card: false,
            });
        }
        for planet in &self.planets {
            let category = planet.category.category();
            let centre = planet.body.position();
            if planet.body.hovered || self.active_category == Some(planet.category) {
                out.push(Label {
                    body: BodyId::Planet(planet.category),
                    anchor: centre,
                    text: category.title.to_string(),
                    offset_px: 60.0,
                    glow: Some(category.color),
                    card: false,
                });
            }
            for (i, sat) in planet.satellites.iter().enumerate() {
                if !sat.body.hovered {
                    continue;
                }
                let Some(project) = category.projects.get(i) else {
                    continue;
                };
                let anchor = centre + sat.body.position();
                let id = BodyId::Satellite(planet.category, i);
                out.push(Label {
                    body: id,
                    anchor,
                    text: project.name.to_string(),
                    offset_px: 20.0,
                    glow: None,
                    card: false,
                });
                out.push(Label {
                    body: id,
                    anchor,
                    text: project.summary.to_string(),
                    offset_px: 50.0,
                    glow: Some(category.color),
                    card: true,
                });
            }
        }
        out
    }

    /// Settle every launch ramp immediately (used when returning to a scene
    /// that was already launched).
    pub fn settle(&mut self) {
        self.started = true;
        for planet in &mut self.planets {
            planet.body.settle();
        }
    }
}

/// Pure frame step: consume a state, return the next one.
pub fn advance(mut state: SceneState, dt_sec: f32) -> SceneState {
    state.tick(dt_sec);
    state
}
