//! HTTP server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vote_report_utils::ShutdownController;

use crate::error::ServerError;
use crate::handlers::{self, AppState};

/// Routes of the report server. Unknown paths fall through to 404.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// [`router`] with trailing slashes stripped before routing.
pub fn app(state: Arc<AppState>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// A bound, running report server.
pub struct ReportServer {
    local_addr: SocketAddr,
    shutdown: ShutdownController,
    task: JoinHandle<std::io::Result<()>>,
}

impl ReportServer {
    /// Bind `host:port` and serve in the background.
    pub async fn start(host: &str, port: u16, state: Arc<AppState>) -> Result<Self, ServerError> {
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|source| ServerError::Bind {
                addr: format!("{host}:{port}"),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
            addr: format!("{host}:{port}"),
            source,
        })?;

        let shutdown = ShutdownController::new();
        let stopped = shutdown.wait();
        let service = axum::ServiceExt::<Request>::into_make_service(app(state));
        let task = tokio::spawn(async move {
            axum::serve(listener, service)
                .with_graceful_shutdown(stopped)
                .await
        });

        let server = Self {
            local_addr,
            shutdown,
            task,
        };
        info!("Vote Report Server started at {}", server.uri());
        Ok(server)
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn uri(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn stop(self) -> Result<(), ServerError> {
        let uri = self.uri();
        self.shutdown.shutdown();
        let result = match self.task.await {
            Ok(served) => served.map_err(|e| ServerError::Internal(format!("serve failed: {e}"))),
            Err(e) => Err(ServerError::Internal(format!("server task failed: {e}"))),
        };
        match &result {
            Ok(()) => info!("Vote Report Server stopped at {uri}"),
            Err(e) => error!(error = %e, "Failed to stop Vote Report Server!"),
        }
        result
    }
}
