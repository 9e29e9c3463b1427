#![cfg(target_arch = "wasm32")]
use exo_core::{DetectorConfig, HandFrame, UiAction};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod camera;
mod card;
mod constants;
mod dom;
mod events;
mod frame;
mod keys;
mod overlay;
mod render;
mod scroll;
mod ui;

use app::AppState;
use constants::HOLOGRAM_CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("exo-web starting");
    Ok(())
}

/// Handle owned by the host page. The page runs the hand-landmark detector
/// and forwards each result through `on_hand_results`.
#[wasm_bindgen]
pub struct ExoLab {
    app: Rc<RefCell<AppState>>,
    document: web::Document,
}

#[wasm_bindgen]
impl ExoLab {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ExoLab, JsValue> {
        init().map_err(|e| {
            log::error!("init error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// Options to pass unmodified to the detector's `setOptions`.
    pub fn detector_options(&self) -> Result<JsValue, JsValue> {
        let cfg = DetectorConfig::default();
        let obj = js_sys::Object::new();
        for (key, value) in [
            ("maxNumHands", cfg.max_num_hands as f64),
            ("modelComplexity", cfg.model_complexity as f64),
            ("minDetectionConfidence", cfg.min_detection_confidence as f64),
            ("minTrackingConfidence", cfg.min_tracking_confidence as f64),
        ] {
            js_sys::Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(value))?;
        }
        Ok(obj.into())
    }

    /// Feed one detector result: `21 * 3` floats (x, y, z) per hand, hands
    /// concatenated. An empty buffer means no hands were seen.
    pub fn on_hand_results(&self, flat: Vec<f32>) -> Result<(), JsValue> {
        let frame = HandFrame::from_flat(&flat).map_err(|e| {
            log::warn!("[hands] rejected frame: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        let mut app = self.app.borrow_mut();
        let actions = app.handle_frame(&frame, Instant::now());

        let mut panels_dirty = false;
        for action in &actions {
            match *action {
                UiAction::Scroll(delta) => {
                    let pixels = app.scroll.take(delta);
                    if pixels != 0 {
                        ui::scroll_panels(&self.document, pixels);
                    }
                }
                UiAction::VariantChanged { .. } | UiAction::SectionChanged(_) => {
                    panels_dirty = true
                }
                UiAction::ResetCamera => {}
            }
        }
        if panels_dirty {
            ui::render_panels(&self.document, &app);
        }
        ui::render_gesture(&self.document, &app.gesture);
        Ok(())
    }
}

fn init() -> anyhow::Result<ExoLab> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(HOLOGRAM_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HOLOGRAM_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let app = Rc::new(RefCell::new(AppState::new()));
    ui::render_panels(&document, &app.borrow());
    ui::render_gesture(&document, &app.borrow().gesture);
    events::wire(&document, &app, &canvas);
    overlay::schedule_hide(&document);

    frame::start_loop(frame::FrameContext {
        app: app.clone(),
        canvas,
        ctx,
    });
    log::info!("exo-web ready");
    Ok(ExoLab { app, document })
}
