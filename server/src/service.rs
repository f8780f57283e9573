//! Service lifecycle: register, boot, dispose.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use vote_report_store::{LedgerService, RoundCalculator, WalletRepository};

use crate::config::ReportConfig;
use crate::error::ServerError;
use crate::handlers::AppState;
use crate::render::ReportRenderer;
use crate::server::ReportServer;

/// Ledger collaborators the service reads from.
#[derive(Clone)]
pub struct Collaborators {
    pub ledger: Arc<dyn LedgerService>,
    pub wallets: Arc<dyn WalletRepository>,
    pub rounds: Arc<dyn RoundCalculator>,
}

/// The vote report service as a unit the host process starts and stops.
///
/// A disabled service registers and boots as a no-op.
pub struct VoteReportService {
    config: ReportConfig,
    state: Option<Arc<AppState>>,
    server: Option<ReportServer>,
}

impl VoteReportService {
    /// Validate `config` and prepare the request state.
    pub fn register(config: ReportConfig, collaborators: Collaborators) -> Result<Self, ServerError> {
        config.validate()?;

        if !config.enabled {
            info!("Vote Report is disabled");
            return Ok(Self {
                config,
                state: None,
                server: None,
            });
        }

        info!("Loading Vote Report");
        let state = AppState {
            ledger: collaborators.ledger,
            wallets: collaborators.wallets,
            rounds: collaborators.rounds,
            window: config.standby_window(),
            client: config.network.client.clone(),
            renderer: ReportRenderer::new()?,
        };
        Ok(Self {
            config,
            state: Some(Arc::new(state)),
            server: None,
        })
    }

    /// Bind and start serving. Bind failures are fatal to the caller.
    pub async fn boot(&mut self) -> Result<(), ServerError> {
        let Some(state) = &self.state else {
            return Ok(());
        };
        if self.server.is_some() {
            return Ok(());
        }
        info!("Booting Vote Report");
        let server =
            ReportServer::start(&self.config.server.http.host, self.config.port()?, Arc::clone(state))
                .await?;
        self.server = Some(server);
        Ok(())
    }

    /// Stop the server if it is running.
    pub async fn dispose(&mut self) -> Result<(), ServerError> {
        match self.server.take() {
            Some(server) => {
                info!("Disposing Vote Report");
                server.stop().await
            }
            None => Ok(()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn state(&self) -> Option<Arc<AppState>> {
        self.state.clone()
    }

    /// Address the server is bound to, once booted.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.as_ref().map(ReportServer::local_addr)
    }
}
