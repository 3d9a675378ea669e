//! Hand landmark server
//!
//! Keeps the most recent landmark frame for each hand and serves it over HTTP:
//!
//! - `GET /hands/left` and `GET /hands/right` return the latest frame as a JSON
//!   array of `{x, y, z, visibility, presence}` objects, or 404 with
//!   `Error: Could not find label` if that hand was never seen.
//! - A producer task feeds the shared [`hands::LandmarkStore`] from a
//!   [`producer::FrameSource`].

pub mod api;
pub mod config;
pub mod error;
pub mod hands;
pub mod metrics;
pub mod producer;
pub mod telemetry;

pub use config::Config;
pub use error::{HandsError, Result};
pub use hands::{HandFrame, HandLabel, Landmark, LandmarkStore};
