use crate::constants::*;
use crate::render::{self, HologramFrame};
use exo_core::card::{PowerCard, FOOTER_POS, FOOTER_TEXT, IMAGE_FRAME, TIER_POS, TITLE_POS, VALUE_X, VERSION_POS};
use exo_core::constants::PREVIEW_SIZE;
use exo_core::{ArmorColor, Camera, SuitSelection};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn create_canvas(document: &web::Document, width: u32, height: u32) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// Render the armor alone from the fixed preview camera, unspun.
fn render_preview(
    document: &web::Document,
    selection: &SuitSelection,
    tint: ArmorColor,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = create_canvas(document, PREVIEW_SIZE, PREVIEW_SIZE)?;
    let ctx = crate::dom::context_2d(&canvas)?;
    render::draw_hologram(
        &ctx,
        &canvas,
        &HologramFrame {
            camera: &Camera::preview(),
            selection,
            active: None,
            tint,
            yaw: 0.0,
        },
    );
    Ok(canvas)
}

fn paint(ctx: &web::CanvasRenderingContext2d, card: &PowerCard, preview: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let (w, h) = (card.width as f64, card.height as f64);

    let bg = ctx.create_linear_gradient(0.0, 0.0, w, h);
    bg.add_color_stop(0.0, CARD_BG_FROM).map_err(js_err)?;
    bg.add_color_stop(1.0, CARD_BG_TO).map_err(js_err)?;
    ctx.set_fill_style(&bg);
    ctx.fill_rect(0.0, 0.0, w, h);

    for i in 0..CARD_BORDER_RINGS {
        let i = i as f64;
        let alpha = 0.04 + i * 0.005;
        ctx.set_stroke_style(&JsValue::from_str(&format!("rgba(68,246,255,{:.3})", alpha)));
        ctx.stroke_rect(40.0 + i * 3.0, 40.0 + i * 3.0, w - 80.0 - i * 6.0, h - 80.0 - i * 6.0);
    }

    ctx.set_font(CARD_TITLE_FONT);
    ctx.set_fill_style(&JsValue::from_str("#5ff9ff"));
    ctx.fill_text(&card.title, TITLE_POS.0, TITLE_POS.1).map_err(js_err)?;
    ctx.set_font(CARD_BODY_FONT);
    ctx.set_fill_style(&JsValue::from_str("#a4f8ff"));
    ctx.fill_text(&card.version_line, VERSION_POS.0, VERSION_POS.1)
        .map_err(js_err)?;

    let frame = IMAGE_FRAME;
    ctx.set_fill_style(&JsValue::from_str("rgba(14, 49, 78, 0.5)"));
    ctx.fill_rect(frame.x, frame.y, frame.w, frame.h);
    let img = card.image_rect();
    ctx.draw_image_with_html_canvas_element_and_dw_and_dh(preview, img.x, img.y, img.w, img.h)
        .map_err(js_err)?;
    ctx.set_stroke_style(&JsValue::from_str("rgba(95, 249, 255, 0.85)"));
    ctx.set_line_width(3.0);
    ctx.stroke_rect(frame.x, frame.y, frame.w, frame.h);

    ctx.set_font(CARD_ROW_FONT);
    for row in &card.rows {
        ctx.set_fill_style(&JsValue::from_str("#d5fdff"));
        ctx.fill_text(row.label, TITLE_POS.0, row.y).map_err(js_err)?;

        let t = row.track;
        ctx.set_fill_style(&JsValue::from_str("rgba(60, 136, 168, 0.4)"));
        ctx.fill_rect(t.x, t.y, t.w, t.h);
        let bar = ctx.create_linear_gradient(t.x, t.y, t.x + t.w, t.y);
        bar.add_color_stop(0.0, CARD_BAR_FROM).map_err(js_err)?;
        bar.add_color_stop(1.0, CARD_BAR_TO).map_err(js_err)?;
        ctx.set_fill_style(&bar);
        ctx.fill_rect(row.fill.x, row.fill.y, row.fill.w, row.fill.h);

        ctx.set_fill_style(&JsValue::from_str("#aefbff"));
        ctx.fill_text(&row.value.to_string(), VALUE_X, row.y)
            .map_err(js_err)?;
    }

    ctx.set_font(CARD_TIER_FONT);
    ctx.set_fill_style(&JsValue::from_str("#68fbff"));
    ctx.fill_text(&card.tier_line, TIER_POS.0, TIER_POS.1).map_err(js_err)?;
    ctx.set_font(CARD_FOOTER_FONT);
    ctx.set_fill_style(&JsValue::from_str("#8be8ff"));
    ctx.fill_text(FOOTER_TEXT, FOOTER_POS.0, FOOTER_POS.1).map_err(js_err)?;

    // Diagonal sheen
    ctx.set_fill_style(&JsValue::from_str("rgba(255,255,255,0.09)"));
    ctx.save();
    ctx.translate(-320.0, 0.0).map_err(js_err)?;
    ctx.rotate(-0.4).map_err(js_err)?;
    ctx.fill_rect(0.0, 380.0, 420.0, 1380.0);
    ctx.restore();
    Ok(())
}

/// Paint the card offscreen and download it. The armor image comes from a
/// dedicated preview render; `live` is used only if that render fails.
pub fn export(
    document: &web::Document,
    card: &PowerCard,
    selection: &SuitSelection,
    tint: ArmorColor,
    live: &web::HtmlCanvasElement,
) -> anyhow::Result<()> {
    let preview = render_preview(document, selection, tint).unwrap_or_else(|e| {
        log::warn!("[card] preview render failed, using live view: {:?}", e);
        live.clone()
    });
    let canvas = create_canvas(document, card.width, card.height)?;
    let ctx = crate::dom::context_2d(&canvas)?;
    paint(&ctx, card, &preview)?;

    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not an anchor"))?;
    link.set_href(&canvas.to_data_url_with_type("image/png").map_err(js_err)?);
    link.set_download(&card.file_name);
    link.click();
    log::info!("[card] exported {}", card.file_name);
    Ok(())
}
