// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_sane() {
    assert!(INTRO_MS > 0);
    assert!(ACTIVE_LINE_WIDTH > IDLE_LINE_WIDTH);
    assert!((0.0..=1.0).contains(&IDLE_ALPHA));
    assert!(GROUND_RADIUS > 0.0);
    assert!(GROUND_STEPS >= 8);
    assert!(TELEMETRY_BAR_MAX > 0);
    assert!(CURSOR_PINCH_SCALE > 1.0);
}

#[test]
fn dom_ids_are_distinct() {
    let mut ids = vec![
        HOLOGRAM_CANVAS_ID,
        CURSOR_ID,
        HAND_STATUS_ID,
        SUIT_NAME_ID,
        SUIT_TIER_ID,
        MODULES_ID,
        TELEMETRY_ID,
        EXPORT_BUTTON_ID,
        INTRO_OVERLAY_ID,
        COLOR_INPUT_ID,
    ];
    ids.extend(SCROLL_PANEL_IDS);
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert!(ids.iter().all(|id| !id.is_empty() && !id.contains(' ')));
}

#[test]
fn card_palette_is_hex() {
    for c in [CARD_BG_FROM, CARD_BG_TO, CARD_BAR_FROM, CARD_BAR_TO, BACKGROUND] {
        assert!(c.starts_with('#') && c.len() == 7, "{c}");
    }
}
