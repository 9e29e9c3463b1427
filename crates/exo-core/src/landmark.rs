//! Validated detector output.
//!
//! The hand detector hands us loosely-typed arrays. Everything is checked
//! here once, so the interpreter only ever sees hands with exactly
//! [`LANDMARKS_PER_HAND`] finite points.

use crate::constants::{INDEX_TIP, LANDMARKS_PER_HAND, MAX_HANDS, PALM_CENTER, THUMB_TIP};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use thiserror::Error;

/// Normalized image-space point; `z` is depth relative to the wrist.
pub type Landmark = Vec3;

const FLOATS_PER_HAND: usize = LANDMARKS_PER_HAND * 3;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    #[error("detector reported {0} hands, at most 2 are supported")]
    TooManyHands(usize),
    #[error("hand {hand} has {found} landmarks, expected 21")]
    LandmarkCount { hand: usize, found: usize },
    #[error("hand {hand} landmark {index} is not a finite coordinate")]
    NonFinite { hand: usize, index: usize },
    #[error("landmark index {0} is out of range, a hand has 21")]
    IndexOutOfRange(usize),
    #[error("flat landmark buffer of {0} floats is not a whole number of hands")]
    FlatLength(usize),
}

/// One tracked hand: the full 21-point MediaPipe layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    points: [Landmark; LANDMARKS_PER_HAND],
}

impl Hand {
    pub fn new(points: [Landmark; LANDMARKS_PER_HAND]) -> Result<Self, FrameError> {
        Self::checked(points, 0)
    }

    /// Build from `[x, y, z]` triples as delivered by the detector.
    pub fn from_points(points: &[[f32; 3]]) -> Result<Self, FrameError> {
        Self::from_points_at(points, 0)
    }

    fn from_points_at(points: &[[f32; 3]], hand: usize) -> Result<Self, FrameError> {
        if points.len() != LANDMARKS_PER_HAND {
            return Err(FrameError::LandmarkCount {
                hand,
                found: points.len(),
            });
        }
        let mut out = [Vec3::ZERO; LANDMARKS_PER_HAND];
        for (slot, p) in out.iter_mut().zip(points) {
            *slot = Vec3::from_array(*p);
        }
        Self::checked(out, hand)
    }

    fn checked(points: [Landmark; LANDMARKS_PER_HAND], hand: usize) -> Result<Self, FrameError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(FrameError::NonFinite { hand, index });
        }
        Ok(Self { points })
    }

    /// Every landmark at the same position. Mostly useful for tests and demos.
    pub fn uniform(at: Landmark) -> Self {
        Self {
            points: [at; LANDMARKS_PER_HAND],
        }
    }

    /// Copy of this hand with one landmark moved.
    pub fn with_landmark(mut self, index: usize, at: Landmark) -> Result<Self, FrameError> {
        if index >= LANDMARKS_PER_HAND {
            return Err(FrameError::IndexOutOfRange(index));
        }
        if !at.is_finite() {
            return Err(FrameError::NonFinite { hand: 0, index });
        }
        self.points[index] = at;
        Ok(self)
    }

    #[inline]
    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn landmarks(&self) -> &[Landmark; LANDMARKS_PER_HAND] {
        &self.points
    }

    #[inline]
    pub fn thumb_tip(&self) -> Vec2 {
        self.points[THUMB_TIP].truncate()
    }

    #[inline]
    pub fn index_tip(&self) -> Vec2 {
        self.points[INDEX_TIP].truncate()
    }

    #[inline]
    pub fn palm_center(&self) -> Vec2 {
        self.points[PALM_CENTER].truncate()
    }

    /// Image-plane distance between thumb tip and index fingertip.
    #[inline]
    pub fn pinch_distance(&self) -> f32 {
        self.index_tip().distance(self.thumb_tip())
    }
}

/// Hands detected in a single camera frame, primary hand first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandFrame {
    hands: SmallVec<[Hand; MAX_HANDS]>,
}

impl HandFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_hands(hands: impl IntoIterator<Item = Hand>) -> Result<Self, FrameError> {
        let hands: SmallVec<[Hand; MAX_HANDS]> = hands.into_iter().collect();
        if hands.len() > MAX_HANDS {
            return Err(FrameError::TooManyHands(hands.len()));
        }
        Ok(Self { hands })
    }

    /// Build from per-hand point lists (`multiHandLandmarks` shape).
    pub fn from_nested<P: AsRef<[[f32; 3]]>>(hands: &[P]) -> Result<Self, FrameError> {
        if hands.len() > MAX_HANDS {
            return Err(FrameError::TooManyHands(hands.len()));
        }
        let hands = hands
            .iter()
            .enumerate()
            .map(|(i, points)| Hand::from_points_at(points.as_ref(), i))
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { hands })
    }

    /// Build from a packed `[x, y, z, x, y, z, ...]` buffer, 63 floats per hand.
    pub fn from_flat(flat: &[f32]) -> Result<Self, FrameError> {
        if flat.len() % FLOATS_PER_HAND != 0 {
            return Err(FrameError::FlatLength(flat.len()));
        }
        let count = flat.len() / FLOATS_PER_HAND;
        if count > MAX_HANDS {
            return Err(FrameError::TooManyHands(count));
        }
        let hands = flat
            .chunks_exact(FLOATS_PER_HAND)
            .enumerate()
            .map(|(hand, chunk)| {
                let mut points = [Vec3::ZERO; LANDMARKS_PER_HAND];
                for (slot, xyz) in points.iter_mut().zip(chunk.chunks_exact(3)) {
                    *slot = Vec3::new(xyz[0], xyz[1], xyz[2]);
                }
                Hand::checked(points, hand)
            })
            .collect::<Result<SmallVec<_>, _>>()?;
        Ok(Self { hands })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    #[inline]
    pub fn primary(&self) -> Option<&Hand> {
        self.hands.first()
    }

    #[inline]
    pub fn secondary(&self) -> Option<&Hand> {
        self.hands.get(1)
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
}
