//! # API Route Modules
//!
//! - `analyze` — `POST /analyze`, scores a text disclosure.
//! - `health` — `GET /health`, liveness plus the loaded configuration.

pub mod analyze;
pub mod health;
