//! Frame source abstraction

use async_trait::async_trait;

use crate::error::Result;
use crate::hands::{HandFrame, HandLabel};

/// One detected hand, ready to be published
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    pub label: HandLabel,
    pub frame: HandFrame,
}

impl DetectedHand {
    pub fn new(label: HandLabel, frame: HandFrame) -> Self {
        Self { label, frame }
    }
}

/// Upstream collaborator that turns imagery (or a recording) into hand frames
#[async_trait]
pub trait FrameSource: Send {
    /// Source name used in logs
    fn name(&self) -> &'static str;

    /// Hands detected in the next camera frame
    ///
    /// An empty batch means no hand was detected. `None` means the source is
    /// exhausted and will not produce anything more.
    async fn next_batch(&mut self) -> Result<Option<Vec<DetectedHand>>>;
}
