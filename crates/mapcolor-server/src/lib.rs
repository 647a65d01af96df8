//! HTTP front end for the MapColor solver.
//!
//! Routes:
//! - `POST /solve/{algorithm}` runs one strategy and returns its trace
//! - `GET /health` liveness probe

pub mod api;

pub use api::{app, router, ApiError, AppState, SolveRequest};
