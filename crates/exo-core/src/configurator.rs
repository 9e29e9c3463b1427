//! Application state driven by gestures and explicit UI actions.
//!
//! The configurator is the single consumer of [`GestureState`]. It turns the
//! per-frame edge signals into discrete edits of the suit build.

use crate::camera::CameraView;
use crate::constants::DEFAULT_ARMOR_COLOR;
use crate::gesture::{GestureState, SwipeDirection};
use crate::suit::{compute_suit_stats, Section, SuitSelection, SuitStats, Variant};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must look like #rrggbb, got {0:?}")]
    Format(String),
}

/// Armor tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArmorColor(pub [u8; 3]);

impl Default for ArmorColor {
    fn default() -> Self {
        Self(DEFAULT_ARMOR_COLOR)
    }
}

impl ArmorColor {
    /// Channels scaled to `0.0..=1.0`.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        self.0.map(|c| c as f32 / 255.0)
    }
}

impl FromStr for ArmorColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorError::Format(s.to_string()))?;
        let mut out = [0u8; 3];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorError::Format(s.to_string()))?;
        }
        Ok(Self(out))
    }
}

impl fmt::Display for ArmorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Discrete change produced by applying a gesture frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiAction {
    VariantChanged { section: Section, variant: Variant },
    SectionChanged(Section),
    ResetCamera,
    /// Scroll side panels by this many pixels; positive scrolls content up.
    Scroll(f32),
}

pub type UiActions = SmallVec<[UiAction; 4]>;

#[derive(Clone, Debug)]
pub struct Configurator {
    pub selection: SuitSelection,
    pub active_section: Section,
    pub armor_color: ArmorColor,
    pub view: CameraView,
    /// Incremented on every camera reset request.
    pub camera_resets: u32,
    prev_pinch: bool,
    prev_double_pinch: bool,
    prev_swipe: SwipeDirection,
}

impl Default for Configurator {
    fn default() -> Self {
        Self {
            selection: SuitSelection::default(),
            active_section: Section::Helmet,
            armor_color: ArmorColor::default(),
            view: CameraView::Front,
            camera_resets: 0,
            prev_pinch: false,
            prev_double_pinch: false,
            prev_swipe: SwipeDirection::None,
        }
    }
}

impl Configurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one frame of gesture output.
    pub fn apply_gesture(&mut self, g: &GestureState) -> UiActions {
        let mut actions = UiActions::new();

        // Consecutive frames of the same swipe are one navigation step.
        if g.swipe != SwipeDirection::None && g.swipe != self.prev_swipe {
            let next = self.active_section.offset(g.swipe.step());
            self.active_section = next;
            log::info!("[config] swipe {} -> {}", g.swipe.as_str(), next);
            actions.push(UiAction::SectionChanged(next));
        }
        self.prev_swipe = g.swipe;

        // Only the rising edge cycles; holding a pinch is one selection.
        if g.pinch && !self.prev_pinch {
            let section = self.active_section;
            let variant = self.selection.cycle(section, 1);
            log::info!("[config] pinch cycles {} to {}", section, variant);
            actions.push(UiAction::VariantChanged { section, variant });
        }
        self.prev_pinch = g.pinch;

        if g.double_pinch && !self.prev_double_pinch {
            self.reset_camera();
            actions.push(UiAction::ResetCamera);
        }
        self.prev_double_pinch = g.double_pinch;

        if g.scroll_delta != 0.0 {
            actions.push(UiAction::Scroll(g.scroll_delta));
        }

        actions
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Step a section's variant by `delta` (may be negative), wrapping.
    pub fn cycle_variant(&mut self, section: Section, delta: i32) -> Variant {
        self.selection.cycle(section, delta)
    }

    pub fn set_view(&mut self, view: CameraView) {
        self.view = view;
    }

    pub fn set_armor_color(&mut self, color: ArmorColor) {
        self.armor_color = color;
    }

    pub fn reset_camera(&mut self) {
        self.camera_resets = self.camera_resets.wrapping_add(1);
        self.view = CameraView::Front;
        log::info!("[config] camera reset #{}", self.camera_resets);
    }

    pub fn stats(&self) -> SuitStats {
        compute_suit_stats(&self.selection)
    }
}
