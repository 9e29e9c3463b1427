// Host-side tests for sub-pixel scroll accumulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/scroll.rs");
}

use exo_core::constants::THUMB_TIP;
use exo_core::*;
use glam::Vec3;
use instant::Instant;
use scroll::ScrollCarry;
use std::time::Duration;

fn open_hand(x: f32, y: f32) -> Hand {
    Hand::uniform(Vec3::new(x, y, 0.0))
        .with_landmark(THUMB_TIP, Vec3::new(x, y + 0.2, 0.0))
        .unwrap()
}

#[test]
fn small_deltas_accumulate_into_pixels() {
    let mut carry = ScrollCarry::default();
    let applied: Vec<i32> = (0..10).map(|_| carry.take(0.3)).collect();
    assert_eq!(applied.iter().sum::<i32>(), 3);
    assert_eq!(applied[..3], [0, 0, 0]);
    assert_eq!(applied[3], 1);
    assert!(carry.remainder().abs() < 1.0);
}

#[test]
fn sign_follows_delta() {
    let mut carry = ScrollCarry::default();
    assert_eq!(carry.take(-2.5), -2);
    assert_eq!(carry.take(-0.6), -1);
    assert!((carry.remainder() + 0.1).abs() < 1e-5);

    // Reversing direction eats the carried remainder first.
    assert_eq!(carry.take(0.5), 0);
    assert!((carry.remainder() - 0.4).abs() < 1e-5);
}

#[test]
fn non_finite_deltas_are_dropped() {
    let mut carry = ScrollCarry::default();
    carry.take(0.5);
    assert_eq!(carry.take(f32::NAN), 0);
    assert_eq!(carry.take(f32::INFINITY), 0);
    assert_eq!(carry.remainder(), 0.5);
}

#[test]
fn slow_two_hand_scroll_moves_panels() {
    let t0 = Instant::now();
    let mut gi = GestureInterpreter::default();
    let mut conf = Configurator::new();
    let mut carry = ScrollCarry::default();

    let (mut raw, mut applied) = (0.0f32, 0i32);
    for i in 0..=15 {
        let y = 0.4 + 0.02 * i as f32;
        let frame = HandFrame::from_hands([open_hand(0.3, y), open_hand(0.7, y)]).unwrap();
        let g = gi.process_frame(&frame, t0 + Duration::from_millis(33 * i as u64));
        for action in conf.apply_gesture(&g) {
            if let UiAction::Scroll(d) = action {
                raw += d;
                applied += carry.take(d);
            }
        }
    }
    assert!((raw + 4.2).abs() < 1e-3, "raw scroll {raw}");
    assert_eq!(applied, -4);
}
