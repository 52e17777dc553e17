//! HTTP front door for the business tone converter.
//!
//! Routes `POST /api/convert` to a [`tone::ToneConverter`], answers
//! `GET /api/health`, and serves the static frontend for everything else.

pub mod config;
pub mod logging;
pub mod web;

pub use config::Config;
pub use logging::init_logging;
pub use web::{ApiError, AppState, SERVICE_NAME, app, convert, health};
