//! Tuning structures for the gesture pipeline and the external hand detector.
//!
//! Defaults mirror the values in [`crate::constants`]. Tests override single
//! fields to probe exact boundaries.

use crate::constants::*;
use std::time::Duration;

/// Thresholds and gains used by [`crate::GestureInterpreter`].
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Exponential smoothing factor for the cursor with one hand visible.
    pub alpha_one_hand: f32,
    /// Smoothing factor with two hands visible (lower = smoother).
    pub alpha_two_hands: f32,
    /// Per-axis cursor delta below which motion is treated as jitter.
    pub dead_zone: f32,
    /// Thumb-to-index distance that starts a pinch.
    pub pinch_threshold: f32,
    /// Distance that ends a latched pinch. Equal to `pinch_threshold`
    /// disables hysteresis.
    pub pinch_release_threshold: f32,
    /// Maximum gap between two pinch frames for a double pinch.
    pub double_pinch_window: Duration,
    /// Minimum horizontal delta for a swipe before vertical compensation.
    pub swipe_base_threshold: f32,
    /// Cap on the vertical delta added to the swipe threshold.
    pub swipe_vertical_cap: f32,
    pub rotation_gain: f32,
    pub zoom_gain: f32,
    pub scroll_gain: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            alpha_one_hand: CURSOR_ALPHA_ONE_HAND,
            alpha_two_hands: CURSOR_ALPHA_TWO_HANDS,
            dead_zone: CURSOR_DEAD_ZONE,
            pinch_threshold: PINCH_THRESHOLD,
            pinch_release_threshold: PINCH_THRESHOLD,
            double_pinch_window: Duration::from_millis(DOUBLE_PINCH_WINDOW_MS),
            swipe_base_threshold: SWIPE_BASE_THRESHOLD,
            swipe_vertical_cap: SWIPE_VERTICAL_CAP,
            rotation_gain: ROTATION_GAIN,
            zoom_gain: ZOOM_GAIN,
            scroll_gain: SCROLL_GAIN,
        }
    }
}

impl GestureConfig {
    /// Enable pinch hysteresis: a pinch that has started stays active until
    /// the fingertips separate past `release`.
    pub fn with_pinch_hysteresis(mut self, release: f32) -> Self {
        self.pinch_release_threshold = release.max(self.pinch_threshold);
        self
    }

    #[inline]
    pub fn alpha_for(&self, hand_count: usize) -> f32 {
        if hand_count > 1 {
            self.alpha_two_hands
        } else {
            self.alpha_one_hand
        }
    }
}

/// Options handed unmodified to the external hand-landmark detector.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorConfig {
    pub max_num_hands: usize,
    pub model_complexity: u8,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_num_hands: MAX_HANDS,
            model_complexity: DETECTOR_MODEL_COMPLEXITY,
            min_detection_confidence: DETECTOR_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DETECTOR_MIN_TRACKING_CONFIDENCE,
        }
    }
}
