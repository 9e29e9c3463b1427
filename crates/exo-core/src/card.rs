//! Layout for the shareable "power card" image.
//!
//! Everything here is plain geometry and text so it can be checked on the
//! host; the web frontend paints it onto a 2D canvas.

use crate::constants::{CARD_HEIGHT, CARD_STAT_FULL_SCALE, CARD_WIDTH};
use crate::suit::{StatKey, SuitStats, Tier};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: u32,
    /// Baseline for the label and value text.
    pub y: f64,
    pub track: Rect,
    /// Filled part of the track, `value / full_scale` of its width.
    pub fill: Rect,
}

pub const TITLE_POS: (f64, f64) = (80.0, 120.0);
pub const VERSION_POS: (f64, f64) = (80.0, 170.0);
pub const IMAGE_FRAME: Rect = Rect {
    x: 80.0,
    y: 220.0,
    w: 920.0,
    h: 700.0,
};
pub const IMAGE_INSET: f64 = 15.0;
pub const TIER_POS: (f64, f64) = (80.0, 1290.0);
pub const FOOTER_POS: (f64, f64) = (730.0, 1290.0);
pub const FOOTER_TEXT: &str = "ExoSuit Lab Collection";
pub const VALUE_X: f64 = 950.0;

const ROW_TOP: f64 = 980.0;
const ROW_STEP: f64 = 60.0;
const TRACK_X: f64 = 330.0;
const TRACK_W: f64 = 600.0;
const TRACK_H: f64 = 22.0;

fn stat_label(key: StatKey) -> &'static str {
    match key {
        StatKey::Power => "Power",
        StatKey::Speed => "Speed",
        StatKey::Defense => "Defense",
        StatKey::Intelligence => "Intelligence",
        StatKey::Energy => "Energy Output",
    }
}

/// Fraction of a stat bar to fill; saturates at 1.
#[inline]
pub fn bar_ratio(value: u32) -> f64 {
    (value as f64 / CARD_STAT_FULL_SCALE as f64).min(1.0)
}

/// Download name: whitespace runs become underscores.
pub fn file_name(suit_name: &str, version_id: &str) -> String {
    let joined = suit_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}_{}.png", joined, version_id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerCard {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub version_line: String,
    pub tier: Tier,
    pub tier_line: String,
    pub rows: Vec<StatRow>,
    pub file_name: String,
}

impl PowerCard {
    pub fn new(suit_name: &str, version_id: &str, stats: &SuitStats) -> Self {
        let rows = stats
            .total
            .entries()
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| {
                let y = ROW_TOP + i as f64 * ROW_STEP;
                let track = Rect {
                    x: TRACK_X,
                    y: y - 20.0,
                    w: TRACK_W,
                    h: TRACK_H,
                };
                StatRow {
                    label: stat_label(key),
                    value,
                    y,
                    track,
                    fill: Rect {
                        w: TRACK_W * bar_ratio(value),
                        ..track
                    },
                }
            })
            .collect();
        Self {
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            title: suit_name.to_string(),
            version_line: format!("Version {}", version_id),
            tier: stats.tier,
            tier_line: format!("{} Tier", stats.tier),
            rows,
            file_name: file_name(suit_name, version_id),
        }
    }

    /// Where the armor preview image is drawn inside the frame.
    pub fn image_rect(&self) -> Rect {
        Rect {
            x: IMAGE_FRAME.x + IMAGE_INSET,
            y: IMAGE_FRAME.y + IMAGE_INSET,
            w: IMAGE_FRAME.w - 2.0 * IMAGE_INSET,
            h: IMAGE_FRAME.h - 2.0 * IMAGE_INSET,
        }
    }
}
