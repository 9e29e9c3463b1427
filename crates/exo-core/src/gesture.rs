//! Gesture interpretation from per-frame hand landmarks.
//!
//! [`GestureInterpreter`] turns each [`HandFrame`] into a [`GestureState`]
//! snapshot: a smoothed cursor, pinch and double-pinch edges, horizontal
//! swipes, and continuous rotation/zoom/scroll velocities. All temporal state
//! lives on the instance; independent interpreters never share anything.

use crate::config::GestureConfig;
use crate::landmark::HandFrame;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Horizontal swipe edge for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    #[default]
    None,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }

    /// Step applied to an ordered list when navigating with this swipe.
    #[inline]
    pub fn step(&self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::None => 0,
        }
    }
}

/// Snapshot consumed by the rest of the application each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Smoothed index-fingertip position in normalized image space.
    pub cursor: Vec2,
    pub pinch: bool,
    pub double_pinch: bool,
    pub swipe: SwipeDirection,
    /// Camera rotation velocity contribution; hand moving up is positive.
    pub rotation_delta: f32,
    /// Zoom velocity; hands spreading apart is positive.
    pub zoom_delta: f32,
    /// Panel scroll amount; hands moving down is negative.
    pub scroll_delta: f32,
    pub hand_count: u8,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            cursor: Vec2::splat(0.5),
            pinch: false,
            double_pinch: false,
            swipe: SwipeDirection::None,
            rotation_delta: 0.0,
            zoom_delta: 0.0,
            scroll_delta: 0.0,
            hand_count: 0,
        }
    }
}

/// Two-hand reference values from the previous frame.
#[derive(Clone, Copy, Debug, Default)]
struct TwoHandBaseline {
    distance: Option<f32>,
    average_y: Option<f32>,
}

impl TwoHandBaseline {
    fn is_set(&self) -> bool {
        self.distance.is_some() || self.average_y.is_some()
    }
}

#[derive(Clone, Copy, Debug)]
struct SmoothingState {
    smoothed: Vec2,
    previous: Vec2,
    baseline: TwoHandBaseline,
    last_pinch: Option<Instant>,
    pinch_latched: bool,
}

impl Default for SmoothingState {
    fn default() -> Self {
        Self {
            smoothed: Vec2::splat(0.5),
            previous: Vec2::splat(0.5),
            baseline: TwoHandBaseline::default(),
            last_pinch: None,
            pinch_latched: false,
        }
    }
}

/// Stateful hand-frame to gesture converter. One instance per camera stream.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    pub config: GestureConfig,
    state: SmoothingState,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: SmoothingState::default(),
        }
    }

    /// Current smoothed cursor without processing a frame.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.state.smoothed
    }

    /// Forget all temporal state and recenter the cursor.
    pub fn reset(&mut self) {
        self.state = SmoothingState::default();
    }

    /// Process one detector frame taken at `now`.
    pub fn process_frame(&mut self, frame: &HandFrame, now: Instant) -> GestureState {
        let Some(primary) = frame.primary() else {
            return self.no_hands();
        };
        let cfg = &self.config;
        let mut next = self.state;
        let hand_count = frame.len();

        // Cursor: exponential smoothing toward the index fingertip.
        let alpha = cfg.alpha_for(hand_count);
        next.smoothed += (primary.index_tip() - next.smoothed) * alpha;

        let raw_delta = next.smoothed - self.state.previous;
        let delta = Vec2::new(
            dead_zone(raw_delta.x, cfg.dead_zone),
            dead_zone(raw_delta.y, cfg.dead_zone),
        );

        // Pinch, with optional release hysteresis. A release threshold
        // below the enter threshold would drop a held pinch every other frame.
        let pinch_distance = primary.pinch_distance();
        let release = if self.state.pinch_latched {
            cfg.pinch_release_threshold.max(cfg.pinch_threshold)
        } else {
            cfg.pinch_threshold
        };
        let pinch = pinch_distance < release || pinch_distance == 0.0;
        next.pinch_latched = pinch;

        let double_pinch = pinch
            && self
                .state
                .last_pinch
                .map(|t| elapsed_between(t, now) < cfg.double_pinch_window)
                .unwrap_or(false);
        if pinch {
            next.last_pinch = Some(now);
        }

        // Swipe: vertical motion raises the bar so diagonals don't register.
        let swipe_threshold = cfg.swipe_base_threshold + delta.y.abs().min(cfg.swipe_vertical_cap);
        let swipe = if delta.x > swipe_threshold {
            SwipeDirection::Right
        } else if delta.x < -swipe_threshold {
            SwipeDirection::Left
        } else {
            SwipeDirection::None
        };

        let rotation_delta = -delta.y * cfg.rotation_gain;

        let (zoom_delta, scroll_delta) = match frame.secondary() {
            Some(secondary) => {
                let a = primary.palm_center();
                let b = secondary.palm_center();
                let distance = a.distance(b);
                let average_y = (a.y + b.y) * 0.5;
                let zoom = nonzero_baseline(self.state.baseline.distance)
                    .map(|prev| (distance - prev) * cfg.zoom_gain)
                    .unwrap_or(0.0);
                let scroll = nonzero_baseline(self.state.baseline.average_y)
                    .map(|prev| (prev - average_y) * cfg.scroll_gain)
                    .unwrap_or(0.0);
                next.baseline = TwoHandBaseline {
                    distance: Some(distance),
                    average_y: Some(average_y),
                };
                (zoom, scroll)
            }
            None => {
                if self.state.baseline.is_set() {
                    log::debug!("[gesture] two-hand baseline cleared ({} hand)", hand_count);
                }
                next.baseline = TwoHandBaseline::default();
                (0.0, 0.0)
            }
        };

        next.previous = next.smoothed;

        if pinch && !self.state.pinch_latched {
            log::debug!("[gesture] pinch start d={:.4}", pinch_distance);
        }
        if double_pinch {
            log::debug!("[gesture] double pinch");
        }
        if swipe != SwipeDirection::None {
            log::debug!("[gesture] swipe {} dx={:.4}", swipe.as_str(), delta.x);
        }
        log::trace!(
            "[gesture] hands={} cursor=({:.3},{:.3}) rot={:.3} zoom={:.3} scroll={:.3}",
            hand_count,
            next.smoothed.x,
            next.smoothed.y,
            rotation_delta,
            zoom_delta,
            scroll_delta
        );

        self.state = next;

        GestureState {
            cursor: next.smoothed,
            pinch,
            double_pinch,
            swipe,
            rotation_delta,
            zoom_delta,
            scroll_delta,
            hand_count: hand_count as u8,
        }
    }

    fn no_hands(&mut self) -> GestureState {
        if self.state.baseline.is_set() {
            log::debug!("[gesture] hands lost; two-hand baseline cleared");
        }
        self.state.baseline = TwoHandBaseline::default();
        self.state.pinch_latched = false;
        GestureState {
            cursor: self.state.smoothed,
            ..GestureState::default()
        }
    }
}

#[inline]
fn dead_zone(v: f32, epsilon: f32) -> f32 {
    if v.abs() < epsilon {
        0.0
    } else {
        v
    }
}

#[inline]
fn elapsed_between(earlier: Instant, now: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

#[inline]
fn nonzero_baseline(v: Option<f32>) -> Option<f32> {
    v.filter(|x| *x != 0.0)
}
