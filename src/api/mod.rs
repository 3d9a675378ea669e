//! HTTP surface of the hand landmark service

pub mod routes;

pub use routes::build_router;
