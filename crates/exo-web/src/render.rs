use crate::camera::world_to_screen;
use crate::constants::*;
use exo_core::armor::{build_armor, Finish, Segment};
use exo_core::{ArmorColor, Camera, Section, SuitSelection};
use glam::{Mat4, Vec3};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Everything the hologram pass needs for one frame.
pub struct HologramFrame<'a> {
    pub camera: &'a Camera,
    pub selection: &'a SuitSelection,
    /// Highlighted section; `None` draws every piece at full strength.
    pub active: Option<Section>,
    pub tint: ArmorColor,
    pub yaw: f32,
}

fn rgba(rgb: [f32; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.2})",
        (rgb[0] * 255.0) as u8,
        (rgb[1] * 255.0) as u8,
        (rgb[2] * 255.0) as u8,
        alpha
    )
}

fn stroke_segments(
    ctx: &web::CanvasRenderingContext2d,
    view_proj: &Mat4,
    segments: &[Segment],
    width: f32,
    height: f32,
) {
    ctx.begin_path();
    for [a, b] in segments {
        let (Some(pa), Some(pb)) = (
            world_to_screen(view_proj, *a, width, height),
            world_to_screen(view_proj, *b, width, height),
        ) else {
            continue;
        };
        ctx.move_to(pa.0, pa.1);
        ctx.line_to(pb.0, pb.1);
    }
    ctx.stroke();
}

fn ground_ring() -> Vec<Segment> {
    let center = Vec3::new(0.0, GROUND_Y, 0.0);
    (0..GROUND_STEPS)
        .map(|i| {
            let a0 = std::f32::consts::TAU * i as f32 / GROUND_STEPS as f32;
            let a1 = std::f32::consts::TAU * (i + 1) as f32 / GROUND_STEPS as f32;
            [
                center + Vec3::new(a0.cos(), 0.0, a0.sin()) * GROUND_RADIUS,
                center + Vec3::new(a1.cos(), 0.0, a1.sin()) * GROUND_RADIUS,
            ]
        })
        .collect()
}

/// Clear the canvas and stroke the armor wireframe.
pub fn draw_hologram(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, f: &HologramFrame) {
    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    let view_proj = f.camera.view_projection();

    ctx.set_fill_style(&JsValue::from_str(BACKGROUND));
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_line_width(1.0);
    ctx.set_stroke_style(&JsValue::from_str(GROUND_COLOR));
    stroke_segments(ctx, &view_proj, &ground_ring(), width, height);

    let tint = f.tint.to_rgb_f32();
    for piece in build_armor(f.selection) {
        let active = f.active.map_or(true, |s| s == piece.section);
        let alpha = if active { 1.0 } else { IDLE_ALPHA };
        let color = match piece.finish {
            Finish::Plate => rgba(tint, alpha),
            Finish::Visor => VISOR_COLOR.to_string(),
            Finish::Core => CORE_COLOR.to_string(),
        };
        ctx.set_stroke_style(&JsValue::from_str(&color));
        ctx.set_line_width(if active { ACTIVE_LINE_WIDTH } else { IDLE_LINE_WIDTH });
        stroke_segments(ctx, &view_proj, &piece.segments(f.yaw), width, height);
    }
}
