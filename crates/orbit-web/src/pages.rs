//! HTML for every page and for the orbit-page overlay pieces.
//!
//! Navigation is declarative: anything with `data-route` navigates there and
//! anything with `data-action` is dispatched by the delegated click handler.

use crate::constants::{HUD_ID, LABELS_ID, MAIN_ROOT_ID, PANEL_ID, THEME_TOGGLE_ID, WORKER_STATUS_ID};
use orbit_core::{get_project_by_slug, Category, FetchStatus, Label, Theme, WorkerState};
use std::fmt::Write as _;

pub const ACTION_DISENGAGE: &str = "disengage";
pub const ACTION_TOGGLE_THEME: &str = "toggle-theme";
pub const ACTION_RETRY_WORKER: &str = "retry-worker";

const ABOUT_BORDER: &str = "#7fa1ff";

const ABOUT_PARAGRAPHS: [&str; 5] = [
    "I'm a product strategist and creative technologist studying at USC's Iovine and Young Academy.",
    "I build at the intersection of AI, full-stack engineering, product design, and emerging experiences. That work ranges from AI disaster-response platforms, to interactive data tools, to collectible toy design, to STEM innovations impacting 1,000+ students.",
    "What drives me is simple: turning complex problems into intuitive, human-centered experiences, whether through research, prototyping, or building full production systems.",
    "I've pitched ideas to Honda, Google, and Meow Wolf, led cross-disciplinary teams, and contributed to hackathon award-winning projects.",
    "Outside of work, I enjoy video games, badminton, seal carving, and building experimental side projects.",
];

/// Minimal HTML text escaping for catalog and worker strings.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn route_button(route: &str, text: &str, class: &str) -> String {
    format!(r#"<button type="button" class="{class}" data-route="{route}">{}</button>"#, escape(text))
}

pub fn start_page() -> String {
    format!(
        concat!(
            r#"<section class="start-page">"#,
            r#"<p class="start-name">JULIE LUAN</p>"#,
            r#"<h1 class="start-title">MY UNIVERSE</h1>"#,
            "{}",
            "</section>"
        ),
        route_button("/main", "ENTER ORBIT", "launch-btn")
    )
}

/// Shell of the orbit page; the HUD, panel, labels and status are filled in
/// by the overlay every frame they change.
pub fn main_page(theme: Theme) -> String {
    format!(
        concat!(
            r#"<div id="{root}" class="main-page" style="color:{ui}">"#,
            r#"<header class="main-header">"#,
            r#"<div><p class="brand">JULIE LUAN</p><p class="tagline">THE MULTIVERSE BUILDER</p></div>"#,
            r#"<button type="button" id="{toggle}" class="theme-toggle" data-action="{toggle_action}" style="color:{ui};border-color:{ui}">{icon}</button>"#,
            "</header>",
            r#"<div id="{labels}" class="labels"></div>"#,
            r#"<div id="{hud}" class="hud"></div>"#,
            r#"<div id="{panel}" class="detail-panel" style="display:none"></div>"#,
            r#"<div id="{status}" class="worker-status"></div>"#,
            "</div>"
        ),
        root = MAIN_ROOT_ID,
        ui = theme.ui_hex(),
        toggle = THEME_TOGGLE_ID,
        toggle_action = ACTION_TOGGLE_THEME,
        icon = theme.toggle_icon(),
        labels = LABELS_ID,
        hud = HUD_ID,
        panel = PANEL_ID,
        status = WORKER_STATUS_ID,
    )
}

/// Bottom-left HUD: `[FOCUS]`/`[SYSTEM]` badge plus the current text.
pub fn hud_html(badge: &str, text: Option<&str>) -> String {
    match text {
        Some(t) => format!(
            r#"<span class="hud-badge">[{}]</span> <span class="hud-text">{}</span>"#,
            escape(badge),
            escape(t)
        ),
        None => String::new(),
    }
}

/// Right-hand panel describing the engaged category.
pub fn detail_panel(category: &Category, theme: Theme) -> String {
    let mut items = String::new();
    for p in category.projects {
        let _ = write!(
            items,
            r#"<li><strong>{}</strong><span>{}</span></li>"#,
            escape(p.name),
            escape(p.summary)
        );
    }
    format!(
        concat!(
            r#"<div class="panel-inner" style="background:{bg};border-color:{color};color:{ui}">"#,
            r#"<h2 style="color:{color}">{title} ORBIT</h2>"#,
            "<p>{desc}</p>",
            r#"<p class="panel-heading">PROJECT ORBITS:</p>"#,
            r#"<ul class="panel-list">{items}</ul>"#,
            r#"<button type="button" class="ghost-btn" data-action="{action}" style="color:{ui};border-color:{ui}">DISENGAGE</button>"#,
            "</div>"
        ),
        bg = theme.panel_background(),
        color = category.color,
        ui = theme.ui_hex(),
        title = escape(category.title),
        desc = escape(category.desc),
        items = items,
        action = ACTION_DISENGAGE,
    )
}

/// Connection-status line for the edge worker, with a retry action on error.
pub fn worker_status_html(worker: &WorkerState) -> String {
    let text = escape(&worker.status_text());
    let class = match worker.status {
        FetchStatus::Idle => "idle",
        FetchStatus::Loading => "loading",
        FetchStatus::Success => "ok",
        FetchStatus::Error => "error",
    };
    if worker.can_retry() {
        format!(
            r#"<span class="status-{class}">{text}</span> <button type="button" class="ghost-btn small" data-action="{ACTION_RETRY_WORKER}">Retry</button>"#
        )
    } else {
        format!(r#"<span class="status-{class}">{text}</span>"#)
    }
}

/// A label positioned at CSS pixel `(x, y)`, already offset below the anchor.
pub fn label_html(label: &Label, x: f32, y: f32) -> String {
    let glow = label
        .glow
        .map(|c| format!("text-shadow:0 0 10px {c};"))
        .unwrap_or_default();
    let border = match (label.card, label.glow) {
        (true, Some(c)) => format!("border-color:{c};"),
        _ => String::new(),
    };
    let class = if label.card { "orbit-label card" } else { "orbit-label" };
    format!(
        r#"<div class="{class}" style="left:{x:.1}px;top:{:.1}px;{glow}{border}">{}</div>"#,
        y + label.offset_px,
        escape(&label.text)
    )
}

pub fn about_page() -> String {
    let mut body = String::new();
    for p in ABOUT_PARAGRAPHS {
        let _ = write!(body, "<p>{}</p>", escape(p));
    }
    format!(
        concat!(
            r#"<section class="starry-page">"#,
            r#"<article class="glass-panel" style="border-color:{border}">"#,
            r#"<p class="eyebrow">ABOUT</p>"#,
            "<h1>Hi, I&#39;m Ruijia (Julie) Luan</h1>",
            "{body}",
            r#"<div class="page-actions">{back}{launch}</div>"#,
            "</article></section>"
        ),
        border = ABOUT_BORDER,
        body = body,
        back = route_button("/main", "Return to Orbit", "ghost-btn"),
        launch = route_button("/start", "Back to Launch", "ghost-btn"),
    )
}

pub fn not_found_page() -> String {
    format!(
        concat!(
            r#"<section class="starry-page">"#,
            r#"<article class="glass-panel">"#,
            "<h1>Signal Lost</h1>",
            "<p>The requested project orbit cannot be located.</p>",
            r#"<div class="page-actions">{}</div>"#,
            "</article></section>"
        ),
        route_button("/main", "Return to Orbit", "ghost-btn")
    )
}

/// Case-study page for `slug`, or the "Signal Lost" page if it is unknown.
pub fn project_page(slug: &str) -> String {
    let Some(found) = get_project_by_slug(slug) else {
        return not_found_page();
    };
    let project = found.project;
    let category = found.category;

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<section class="starry-page"><article class="glass-panel" style="border-color:{}">"#,
        category.color
    );
    let _ = write!(
        html,
        r#"<p class="eyebrow" style="color:{}">{}</p><h1>{}</h1>"#,
        category.color,
        escape(category.title),
        escape(project.name)
    );
    if let Some(sub) = project.subtitle {
        let _ = write!(html, r#"<p class="subtitle">{}</p>"#, escape(sub));
    }
    let _ = write!(html, "<p><strong>{}</strong></p>", escape(project.summary));
    for (heading, text) in [
        ("Problem", project.problem),
        ("Outcome", project.outcome),
        ("My Role", project.role),
    ] {
        let _ = write!(html, "<h2>{heading}</h2><p>{}</p>", escape(text));
    }
    html.push_str("<h2>Process</h2><ul>");
    for step in project.process {
        let _ = write!(html, "<li>{}</li>", escape(step));
    }
    html.push_str("</ul>");
    let _ = write!(html, "<h2>Impact</h2><p>{}</p>", escape(project.impact));
    html.push_str(r#"<div class="page-actions">"#);
    if let Some(link) = project.link {
        let _ = write!(
            html,
            r#"<a class="ghost-btn" href="{}" target="_blank" rel="noreferrer">Open Case Study</a>"#,
            escape(link)
        );
    }
    html.push_str(&route_button("/main", "Back to Orbit", "ghost-btn"));
    html.push_str("</div></article></section>");
    html
}
