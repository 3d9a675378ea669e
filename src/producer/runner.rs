//! Producer loop publishing detected hands into the store

use std::sync::Arc;
use tracing::{debug, error, info};

use super::source::FrameSource;
use crate::error::Result;
use crate::hands::LandmarkStore;
use crate::metrics::METRICS;

/// Publish every hand `source` produces until it is exhausted
///
/// Returns the number of frames published. The store is the only thing the
/// producer shares with the query service.
pub async fn run_producer(
    mut source: Box<dyn FrameSource>,
    store: Arc<LandmarkStore>,
) -> Result<u64> {
    info!("Producer started: source={}", source.name());
    let mut published = 0u64;

    loop {
        let batch = match source.next_batch().await {
            Ok(Some(batch)) => batch,
            Ok(None) => break,
            Err(e) => {
                error!("Frame source {} failed: {}", source.name(), e);
                return Err(e);
            }
        };

        for hand in batch {
            debug!("Publishing {} frame with {} landmarks", hand.label, hand.frame.len());
            store.put(hand.label, hand.frame);
            METRICS.record_frame_published(hand.label);
            published += 1;
        }
    }

    info!(
        "Producer finished: source={}, frames_published={}",
        source.name(),
        published
    );
    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandsError;
    use crate::hands::{HandFrame, HandLabel, Landmark};
    use crate::producer::source::DetectedHand;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct ScriptedSource {
        batches: VecDeque<Result<Vec<DetectedHand>>>,
    }

    #[async_trait]
    impl FrameSource for ScriptedSource {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn next_batch(&mut self) -> Result<Option<Vec<DetectedHand>>> {
            self.batches.pop_front().transpose()
        }
    }

    fn hand(label: HandLabel, value: f32) -> DetectedHand {
        DetectedHand::new(
            label,
            HandFrame::new(vec![Landmark::new(value, value, 0.0, 1.0, 1.0); 21]),
        )
    }

    #[tokio::test]
    async fn test_publishes_every_hand() {
        let store = Arc::new(LandmarkStore::new());
        let source = ScriptedSource {
            batches: VecDeque::from(vec![
                Ok(vec![hand(HandLabel::Left, 0.1), hand(HandLabel::Right, 0.2)]),
                Ok(vec![]),
                Ok(vec![hand(HandLabel::Left, 0.3)]),
            ]),
        };

        let published = run_producer(Box::new(source), store.clone()).await.unwrap();

        assert_eq!(published, 3);
        assert_eq!(store.get(HandLabel::Left), Some(hand(HandLabel::Left, 0.3).frame));
        assert_eq!(store.get(HandLabel::Right), Some(hand(HandLabel::Right, 0.2).frame));
    }

    #[tokio::test]
    async fn test_source_failure_keeps_published_frames() {
        let store = Arc::new(LandmarkStore::new());
        let source = ScriptedSource {
            batches: VecDeque::from(vec![
                Ok(vec![hand(HandLabel::Right, 0.4)]),
                Err(HandsError::Source("camera disconnected".to_string())),
            ]),
        };

        let result = run_producer(Box::new(source), store.clone()).await;

        assert!(matches!(result, Err(HandsError::Source(_))));
        assert_eq!(store.get(HandLabel::Right), Some(hand(HandLabel::Right, 0.4).frame));
    }
}
