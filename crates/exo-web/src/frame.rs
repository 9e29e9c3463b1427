use crate::app::AppState;
use crate::render::{self, HologramFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub app: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut app = self.app.borrow_mut();
        let g = app.gesture;
        app.rig.step(g.rotation_delta, g.zoom_delta);

        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        let camera = app.rig.camera(aspect);
        let conf = &app.configurator;
        render::draw_hologram(
            &self.ctx,
            &self.canvas,
            &HologramFrame {
                camera: &camera,
                selection: &conf.selection,
                active: Some(conf.active_section),
                tint: conf.armor_color,
                yaw: app.rig.armor_yaw,
            },
        );
    }
}

fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame until the page unloads.
pub fn start_loop(mut ctx: FrameContext) {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
