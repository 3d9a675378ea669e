//! Hand query API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

use super::encoder::{encode_frame, CONTENT_TYPE};
use super::models::HandLabel;
use super::store::LandmarkStore;
use crate::metrics::{QueryStatus, METRICS};

/// Body returned when no frame was ever published for the requested hand
pub const NOT_FOUND_BODY: &str = "Error: Could not find label";

/// Application state for hand handlers
#[derive(Clone)]
pub struct HandsState {
    pub store: Arc<LandmarkStore>,
}

impl HandsState {
    pub fn new(store: Arc<LandmarkStore>) -> Self {
        Self { store }
    }
}

/// Latest left hand landmarks
///
/// GET /hands/left
pub async fn get_left_hand(State(state): State<HandsState>) -> Response {
    hand_response(&state, HandLabel::Left)
}

/// Latest right hand landmarks
///
/// GET /hands/right
pub async fn get_right_hand(State(state): State<HandsState>) -> Response {
    hand_response(&state, HandLabel::Right)
}

/// Build the response for `label` from the store's current frame
///
/// The frame handle is taken under the store lock and encoded after the
/// lock is released.
fn hand_response(state: &HandsState, label: HandLabel) -> Response {
    let start = Instant::now();

    let (status, response) = match state.store.get(label) {
        None => {
            debug!("No frame published for {}", label);
            (
                QueryStatus::NotFound,
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
            )
        }
        Some(frame) => match encode_frame(&frame) {
            Ok(body) => {
                debug!("Serving {} frame with {} landmarks", label, frame.len());
                (
                    QueryStatus::Found,
                    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
                )
            }
            Err(e) => {
                error!("Failed to encode {} frame: {}", label, e);
                (
                    QueryStatus::Error,
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
                )
            }
        },
    };

    METRICS.record_hand_query(label, status, start.elapsed().as_secs_f64());
    response
}
