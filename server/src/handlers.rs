//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use vote_report_engine::{build_report, LedgerSnapshot, Report, StandbyWindow};
use vote_report_store::{LedgerService, RoundCalculator, WalletRepository};
use vote_report_types::NetworkClient;

use crate::error::ServerError;
use crate::render::ReportRenderer;

/// Everything the report route reads from.
pub struct AppState {
    pub ledger: Arc<dyn LedgerService>,
    pub wallets: Arc<dyn WalletRepository>,
    pub rounds: Arc<dyn RoundCalculator>,
    pub window: StandbyWindow,
    pub client: NetworkClient,
    pub renderer: ReportRenderer,
}

impl AppState {
    /// Capture a snapshot and build the report from it.
    pub fn build(&self) -> Result<Report, ServerError> {
        let snapshot = LedgerSnapshot::capture(
            self.ledger.as_ref(),
            self.wallets.as_ref(),
            self.rounds.as_ref(),
            self.window,
        )?;
        Ok(build_report(&snapshot)?)
    }
}

/// The report route takes no parameters; any query string is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportQuery {}

/// `GET /`: the plain-text vote report.
pub async fn report(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
    query.map_err(|rejection| ServerError::BadData(rejection.body_text()))?;

    let builder = Arc::clone(&state);
    let report = tokio::task::spawn_blocking(move || builder.build())
        .await
        .map_err(|e| ServerError::Internal(format!("report task failed: {e}")))??;

    debug!(
        height = report.height,
        active = report.active_delegates.len(),
        standby = report.standby_delegates.len(),
        voters = report.voters,
        "built vote report"
    );

    let body = state.renderer.render(&report, &state.client)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}
