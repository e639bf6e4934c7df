//! Kubernetes demo application.
//!
//! A single-binary demo pairing a JSON HTTP API with an embedded single-page
//! frontend, built to illustrate container/orchestration concepts: liveness
//! and readiness probes, environment-derived service discovery metadata, and
//! environment-based configuration.
//!
//! # Endpoints
//!
//! ```text
//! GET /health          liveness probe
//! GET /ready           readiness probe
//! GET /api/status      service version + environment
//! GET /api/users       fixed demo user directory
//! GET /api/kubernetes  cluster metadata + feature list
//! GET /metrics         Prometheus exposition
//! GET /                embedded frontend
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes, handlers, and API error rendering
//! - [`users`]: The fixed user directory
//! - [`cluster`]: Environment-derived cluster metadata
//! - [`metrics`]: Prometheus request counters
//! - [`utils`]: Timestamps and shutdown signal

pub mod api;
pub mod cluster;
pub mod config;
pub mod error;
pub mod metrics;
pub mod users;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
