use crate::app::AppState;
use crate::card;
use crate::constants::*;
use crate::dom::add_click_listener;
use crate::keys::{key_command, KeyCommand};
use crate::ui;
use exo_core::card::PowerCard;
use exo_core::{ArmorColor, CameraView, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &mut AppState) -> bool {
    let Some(cmd) = key_command(&ev.key()) else {
        return false;
    };
    match cmd {
        KeyCommand::Section(step) => {
            app.step_section(step);
        }
        KeyCommand::Variant(delta) => {
            let section = app.configurator.active_section;
            app.configurator.cycle_variant(section, delta);
        }
        KeyCommand::ResetCamera => app.reset_camera(),
        KeyCommand::View(view) => app.set_view(view),
    }
    ev.prevent_default();
    true
}

fn wire_keyboard(document: &web::Document, app: &Rc<RefCell<AppState>>) {
    let app = app.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let mut state = app.borrow_mut();
        if handle_global_keydown(&ev, &mut state) {
            ui::render_panels(&doc, &state);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Module rows are rebuilt on every refresh, so clicks are delegated to the list.
fn wire_module_list(document: &web::Document, app: &Rc<RefCell<AppState>>) {
    let Some(list) = document.get_element_by_id(MODULES_ID) else {
        log::warn!("[events] missing #{}; module clicks not wired", MODULES_ID);
        return;
    };
    let app = app.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("button[data-action]").ok().flatten())
        else {
            return;
        };
        let Some(section) = button
            .closest("[data-section]")
            .ok()
            .flatten()
            .and_then(|row| row.get_attribute("data-section"))
            .and_then(|name| Section::from_name(&name))
        else {
            return;
        };
        let mut state = app.borrow_mut();
        match button.get_attribute("data-action").as_deref() {
            Some("select") => state.configurator.select_section(section),
            Some("prev") => {
                state.configurator.cycle_variant(section, -1);
            }
            Some("next") => {
                state.configurator.cycle_variant(section, 1);
            }
            _ => return,
        }
        ui::render_panels(&doc, &state);
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_color_input(document: &web::Document, app: &Rc<RefCell<AppState>>) {
    let Some(input) = document
        .get_element_by_id(COLOR_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let app = app.clone();
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let value = source.value();
        match value.parse::<ArmorColor>() {
            Ok(color) => app.borrow_mut().configurator.set_armor_color(color),
            Err(e) => log::warn!("[events] {}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire(document: &web::Document, app: &Rc<RefCell<AppState>>, canvas: &web::HtmlCanvasElement) {
    wire_keyboard(document, app);
    wire_module_list(document, app);
    wire_color_input(document, app);

    for view in CameraView::ALL {
        let app = app.clone();
        let id = format!("{}{}", VIEW_BUTTON_PREFIX, view.as_str());
        add_click_listener(document, &id, move || app.borrow_mut().set_view(view));
    }

    let app = app.clone();
    let doc = document.clone();
    let live = canvas.clone();
    add_click_listener(document, EXPORT_BUTTON_ID, move || {
        let state = app.borrow();
        let conf = &state.configurator;
        let card = PowerCard::new(&state.suit_name, &state.version_id, &conf.stats());
        if let Err(e) = card::export(&doc, &card, &conf.selection, conf.armor_color, &live) {
            log::error!("[card] export failed: {:?}", e);
        }
    });
}
