//! Hand landmark publication
//!
//! - Landmark, frame and label models
//! - The latest-frame-per-hand store
//! - JSON encoding of frames
//! - HTTP handlers answering per-hand queries

pub mod encoder;
pub mod handlers;
pub mod models;
pub mod store;

pub use encoder::encode_frame;
pub use handlers::{get_left_hand, get_right_hand, HandsState, NOT_FOUND_BODY};
pub use models::{HandFrame, HandLabel, Landmark, HAND_LANDMARK_COUNT};
pub use store::LandmarkStore;
