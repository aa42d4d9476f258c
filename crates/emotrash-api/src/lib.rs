//! Emotrash API - HTTP surface for the emotion record service
//!
//! Thin plumbing over the core validation/builder logic and the store
//! gateway: route definitions, request extraction, and mapping of the
//! error taxonomy onto status codes. All behavior of interest lives in
//! `emotrash-core` and `emotrash-store`.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
