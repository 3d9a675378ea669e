//! Generated hand motion, used when no detector is attached

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

use super::source::{DetectedHand, FrameSource};
use crate::error::Result;
use crate::hands::{HandFrame, HandLabel, Landmark};

const JITTER: f32 = 0.004;

/// Emits one frame per configured hand on every tick
///
/// Landmarks are laid out in a fan around a palm center that drifts slowly,
/// with small per-frame jitter. All coordinates stay in the normalised
/// `[0, 1]` image range.
pub struct SyntheticSource {
    hands: Vec<HandLabel>,
    landmark_count: usize,
    ticker: Interval,
    rng: StdRng,
    tick: u64,
}

impl SyntheticSource {
    pub fn new(hands: Vec<HandLabel>, landmark_count: usize, frame_interval: Duration) -> Self {
        Self::with_rng(hands, landmark_count, frame_interval, StdRng::from_entropy())
    }

    /// Deterministic source for tests
    pub fn seeded(
        hands: Vec<HandLabel>,
        landmark_count: usize,
        frame_interval: Duration,
        seed: u64,
    ) -> Self {
        Self::with_rng(hands, landmark_count, frame_interval, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        hands: Vec<HandLabel>,
        landmark_count: usize,
        frame_interval: Duration,
        rng: StdRng,
    ) -> Self {
        let mut ticker = interval(frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            hands,
            landmark_count,
            ticker,
            rng,
            tick: 0,
        }
    }

    fn frame_for(&mut self, label: HandLabel) -> HandFrame {
        let phase = self.tick as f32 * 0.02;
        let base_x = match label {
            HandLabel::Left => 0.3,
            HandLabel::Right => 0.7,
        };
        let center_x = base_x + 0.05 * phase.sin();
        let center_y = 0.55 + 0.05 * phase.cos();

        let landmarks = (0..self.landmark_count)
            .map(|i| {
                // Wrist at the center, the rest fanning outwards
                let (radius, angle) = if i == 0 {
                    (0.0, 0.0)
                } else {
                    let finger = (i - 1) / 4;
                    let joint = (i - 1) % 4 + 1;
                    (0.04 * joint as f32, TAU * (0.55 + 0.08 * finger as f32))
                };
                let x = center_x + radius * angle.cos() + self.rng.gen_range(-JITTER..JITTER);
                let y = center_y + radius * angle.sin() + self.rng.gen_range(-JITTER..JITTER);
                let z = -0.01 * radius * 10.0 + self.rng.gen_range(-JITTER..JITTER);

                Landmark::new(
                    x.clamp(0.0, 1.0),
                    y.clamp(0.0, 1.0),
                    z,
                    self.rng.gen_range(0.9..=1.0),
                    self.rng.gen_range(0.9..=1.0),
                )
            })
            .collect();

        HandFrame::new(landmarks)
    }
}

#[async_trait]
impl FrameSource for SyntheticSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<DetectedHand>>> {
        self.ticker.tick().await;
        self.tick += 1;

        let hands = self.hands.clone();
        let batch = hands
            .into_iter()
            .map(|label| DetectedHand::new(label, self.frame_for(label)))
            .collect();

        Ok(Some(batch))
    }
}
