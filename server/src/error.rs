//! Server and configuration errors, and their HTTP mapping.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use vote_report_engine::ReportError;
use vote_report_store::StoreError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config serialize error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum ServerError {
    /// The request itself is malformed. The message is returned verbatim.
    #[error("{0}")]
    BadData(String),

    /// A ledger collaborator could not answer.
    #[error("upstream unavailable: {0}")]
    Upstream(#[from] StoreError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("render error: {0}")]
    Render(#[from] tera::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadData(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Report(_)
            | Self::Render(_)
            | Self::Config(_)
            | Self::Bind { .. }
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadData(msg) => msg.clone(),
            Self::Upstream(e) => {
                warn!(error = %e, "vote report upstream unavailable");
                "ledger unavailable".to_string()
            }
            other => {
                error!(error = %other, "vote report failed");
                "internal server error".to_string()
            }
        };
        (status, body).into_response()
    }
}
