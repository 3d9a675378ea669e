//! Data models for hand landmarks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Number of landmarks the hand detector reports per hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// One anatomical key-point of a hand
///
/// Coordinates follow the detector's convention: `x` and `y` are normalised
/// to the image size, `z` is depth relative to the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
    pub presence: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32, presence: f32) -> Self {
        Self {
            x,
            y,
            z,
            visibility,
            presence,
        }
    }
}

/// Ordered snapshot of every landmark of one hand
///
/// The landmark sequence is fixed at construction. Index order carries
/// anatomical meaning (0 is the wrist) and is kept as-is on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandFrame {
    landmarks: Arc<[Landmark]>,
}

impl HandFrame {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self {
            landmarks: landmarks.into(),
        }
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }
}

/// Which hand a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandLabel {
    Left,
    Right,
}

impl HandLabel {
    pub const ALL: [HandLabel; 2] = [HandLabel::Left, HandLabel::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
