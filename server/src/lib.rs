//! HTTP service for the plain-text vote report.
//!
//! A single `GET /` route captures a ledger snapshot from the configured
//! collaborators, builds the report and renders it through a text template.
//!
//! ## Module overview
//!
//! - [`config`]: TOML configuration and its validation.
//! - [`handlers`]: Shared request state and the report route.
//! - [`render`]: Fixed-width text rendering.
//! - [`server`]: Router construction and server start/stop.
//! - [`service`]: Register/boot/dispose lifecycle.
//! - [`error`]: Error types and their HTTP status mapping.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod server;
pub mod service;

pub use config::ReportConfig;
pub use error::{ConfigError, ServerError};
pub use handlers::AppState;
pub use render::ReportRenderer;
pub use server::{app, router, ReportServer};
pub use service::{Collaborators, VoteReportService};
