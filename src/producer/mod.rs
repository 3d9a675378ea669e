//! Producer side: sources of hand frames and the loop that publishes them
//!
//! The producer only talks to the store. It never calls into the HTTP layer.

pub mod replay;
pub mod runner;
pub mod source;
pub mod synthetic;

pub use replay::ReplaySource;
pub use runner::run_producer;
pub use source::{DetectedHand, FrameSource};
pub use synthetic::SyntheticSource;

use crate::config::{ProducerConfig, SourceKind};
use crate::error::{HandsError, Result};

/// Build the frame source selected by `config`
///
/// Returns `None` for [`SourceKind::None`], where frames are published by the
/// embedding program instead.
pub async fn build_source(config: &ProducerConfig) -> Result<Option<Box<dyn FrameSource>>> {
    config.validate()?;

    match config.source {
        SourceKind::Synthetic => Ok(Some(Box::new(SyntheticSource::new(
            config.hands.clone(),
            config.landmark_count,
            config.frame_interval(),
        )))),
        SourceKind::Replay => {
            let path = config.replay_path.as_ref().ok_or_else(|| {
                HandsError::InvalidConfig("producer.replay_path is not set".to_string())
            })?;
            let source =
                ReplaySource::open(path, config.frame_interval(), config.replay_loop).await?;
            Ok(Some(Box::new(source)))
        }
        SourceKind::None => Ok(None),
    }
}
