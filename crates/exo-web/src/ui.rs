use crate::app::AppState;
use crate::constants::*;
use crate::dom::{set_html, set_text};
use exo_core::{GestureState, Section};
use std::fmt::Write;
use wasm_bindgen::JsCast;
use web_sys as web;

fn modules_html(app: &AppState) -> String {
    let conf = &app.configurator;
    let mut html = String::new();
    for section in Section::ALL {
        let class = if section == conf.active_section {
            "module active"
        } else {
            "module"
        };
        _ = write!(
            html,
            r#"<li class="{class}" data-section="{name}"><button data-action="select">{name}</button><span><button data-action="prev">&#9664;</button><span>{variant}</span><button data-action="next">&#9654;</button></span></li>"#,
            class = class,
            name = section.as_str(),
            variant = conf.selection.get(section),
        );
    }
    html
}

fn telemetry_html(app: &AppState) -> String {
    let stats = app.configurator.stats();
    let mut html = String::new();
    for (key, value) in stats.total.entries() {
        let pct = value.min(TELEMETRY_BAR_MAX) * 100 / TELEMETRY_BAR_MAX;
        _ = write!(
            html,
            r#"<div class="stat"><div class="stat-label"><span>{}</span><span>{}</span></div><div class="stat-track"><div class="stat-fill" style="width:{}%"></div></div></div>"#,
            key.as_str(),
            value,
            pct
        );
    }
    html
}

/// Refresh the build summary, module list and telemetry bars.
pub fn render_panels(document: &web::Document, app: &AppState) {
    let stats = app.configurator.stats();
    set_text(document, SUIT_NAME_ID, &app.suit_name);
    set_text(document, SUIT_TIER_ID, &format!("Tier {}", stats.tier));
    set_html(document, MODULES_ID, &modules_html(app));
    set_html(document, TELEMETRY_ID, &telemetry_html(app));
}

/// Move the cursor overlay and update the hand-count label.
pub fn render_gesture(document: &web::Document, g: &GestureState) {
    if let Some(el) = document
        .get_element_by_id(CURSOR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let scale = if g.pinch { CURSOR_PINCH_SCALE } else { 1.0 };
        let style = el.style();
        _ = style.set_property(
            "transform",
            &format!(
                "translate({:.2}vw, {:.2}vh) scale({})",
                g.cursor.x * 100.0,
                g.cursor.y * 100.0,
                scale
            ),
        );
        _ = el.class_list().toggle_with_force("pinching", g.pinch);
    }
    set_text(
        document,
        HAND_STATUS_ID,
        &format!("Hands detected: {}", g.hand_count),
    );
}

/// Scroll both side panels; positive `delta` scrolls toward the top.
pub fn scroll_panels(document: &web::Document, delta: i32) {
    for id in SCROLL_PANEL_IDS {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_scroll_top(el.scroll_top() - delta);
        }
    }
}
