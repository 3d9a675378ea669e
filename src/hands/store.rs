//! Latest-frame-per-hand store shared by the producer and the query service

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::models::{HandFrame, HandLabel};

/// Concurrency-safe mapping from hand label to its most recent frame
///
/// One mutex guards the whole map. Writers swap in a new frame and readers
/// take a shared handle to the current one; both hold the lock only for a
/// map lookup, never while encoding or doing I/O. Entries are never removed,
/// so a hand that has left the camera view keeps its last known frame.
#[derive(Debug, Default)]
pub struct LandmarkStore {
    frames: Mutex<HashMap<HandLabel, HandFrame>>,
}

impl LandmarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `frame` as the current frame for `label`
    ///
    /// Replaces any previous frame wholesale. A concurrent `get` sees either
    /// the previous frame or this one, never a mix.
    pub fn put(&self, label: HandLabel, frame: HandFrame) {
        let previous = self.lock().insert(label, frame);
        // Dropped outside the critical section
        drop(previous);
    }

    /// Current frame for `label`, or `None` if nothing was ever published for it
    pub fn get(&self, label: HandLabel) -> Option<HandFrame> {
        self.lock().get(&label).cloned()
    }

    // Frames are replaced wholesale, so a panic while the lock was held
    // cannot leave a half-written entry behind.
    fn lock(&self) -> MutexGuard<'_, HashMap<HandLabel, HandFrame>> {
        self.frames.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::models::Landmark;
    use std::sync::Arc;
    use std::thread;

    fn uniform_frame(value: f32, count: usize) -> HandFrame {
        HandFrame::new(vec![Landmark::new(value, value, value, value, value); count])
    }

    #[test]
    fn test_get_on_empty_store() {
        let store = LandmarkStore::new();
        assert!(store.get(HandLabel::Left).is_none());
        assert!(store.get(HandLabel::Right).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let store = LandmarkStore::new();
        let frame = uniform_frame(0.5, 21);
        store.put(HandLabel::Left, frame.clone());

        assert_eq!(store.get(HandLabel::Left), Some(frame));
        assert!(store.get(HandLabel::Right).is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let store = LandmarkStore::new();
        store.put(HandLabel::Right, uniform_frame(0.1, 21));
        store.put(HandLabel::Right, uniform_frame(0.2, 21));
        store.put(HandLabel::Right, uniform_frame(0.3, 21));

        assert_eq!(store.get(HandLabel::Right), Some(uniform_frame(0.3, 21)));
    }

    #[test]
    fn test_labels_are_independent() {
        let store = LandmarkStore::new();
        store.put(HandLabel::Left, uniform_frame(0.25, 21));
        assert!(store.get(HandLabel::Right).is_none());

        store.put(HandLabel::Right, uniform_frame(0.75, 5));
        assert_eq!(store.get(HandLabel::Left), Some(uniform_frame(0.25, 21)));
        assert_eq!(store.get(HandLabel::Right).map(|f| f.len()), Some(5));
    }

    #[test]
    fn test_returned_frame_is_not_affected_by_later_puts() {
        let store = LandmarkStore::new();
        store.put(HandLabel::Left, uniform_frame(0.1, 21));
        let before = store.get(HandLabel::Left).unwrap();

        store.put(HandLabel::Left, uniform_frame(0.9, 21));

        assert!(before.landmarks().iter().all(|lm| lm.x == 0.1));
    }

    #[test]
    fn test_concurrent_readers_never_see_mixed_frames() {
        let store = Arc::new(LandmarkStore::new());
        let first = uniform_frame(0.1, 21);
        let second = uniform_frame(0.9, 21);
        store.put(HandLabel::Left, first.clone());

        let writer = {
            let store = store.clone();
            let (first, second) = (first.clone(), second.clone());
            thread::spawn(move || {
                for i in 0..2_000 {
                    let frame = if i % 2 == 0 { second.clone() } else { first.clone() };
                    store.put(HandLabel::Left, frame);
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                let (first, second) = (first.clone(), second.clone());
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        let seen = store.get(HandLabel::Left).unwrap();
                        assert!(seen == first || seen == second);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
