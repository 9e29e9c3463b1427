use crate::constants::{INTRO_MS, INTRO_OVERLAY_ID};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INTRO_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Hide the intro overlay once the boot animation has played.
pub fn schedule_hide(document: &web::Document) {
    let Some(window) = web::window() else {
        hide(document);
        return;
    };
    let doc = document.clone();
    let callback = Closure::once_into_js(move || hide(&doc));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            INTRO_MS,
        )
        .is_err()
    {
        log::warn!("[overlay] timer unavailable; hiding intro now");
        hide(document);
    }
}
