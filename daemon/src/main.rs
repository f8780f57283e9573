//! Vote report daemon: entry point for serving the vote report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vote_report_server::{AppState, Collaborators, ReportConfig, ReportRenderer, VoteReportService};
use vote_report_store_json::JsonLedgerStore;
use vote_report_utils::{init_logging, LogFormat, ShutdownController};

#[derive(Parser, Debug)]
#[command(name = "vote-report-daemon", about = "Plain-text delegate vote report server")]
struct Cli {
    /// Disable the report server. Any non-empty value disables, even "0" or "false".
    #[arg(
        long,
        env = "CORE_VOTE_REPORT_DISABLED",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "ANY"
    )]
    disabled: Option<String>,

    /// Address the HTTP server binds to.
    #[arg(long, env = "CORE_VOTE_REPORT_HOST")]
    host: Option<String>,

    /// Port the HTTP server listens on.
    #[arg(long, env = "CORE_VOTE_REPORT_PORT")]
    port: Option<i64>,

    /// Standby rows listed after the active delegates.
    #[arg(long, env = "CORE_VOTE_REPORT_DELEGATE_ROWS")]
    delegate_rows: Option<u32>,

    /// JSON ledger dump to report on.
    #[arg(long, env = "CORE_VOTE_REPORT_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CORE_VOTE_REPORT_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CORE_VOTE_REPORT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Serve the report over HTTP until SIGINT/SIGTERM.
    Run,
    /// Render the report once to stdout.
    Render,
    /// Print the effective configuration as TOML.
    Config,
}

/// Merge defaults, the optional TOML file and CLI/env overrides, in that order.
fn load_config(cli: &Cli) -> anyhow::Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if cli.disabled.as_deref().is_some_and(|v| !v.is_empty()) {
        config.enabled = false;
    }
    if let Some(host) = &cli.host {
        config.server.http.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.http.port = port;
    }
    if let Some(rows) = cli.delegate_rows {
        config.delegate_rows = Some(rows);
    }
    if let Some(snapshot) = &cli.snapshot {
        config.snapshot_path = snapshot.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn collaborators(config: &ReportConfig) -> anyhow::Result<Collaborators> {
    let store = Arc::new(
        JsonLedgerStore::open(&config.snapshot_path)
            .with_context(|| format!("opening ledger dump {}", config.snapshot_path.display()))?,
    );
    tracing::info!("Reading ledger from {}", config.snapshot_path.display());
    Ok(Collaborators {
        ledger: store.clone(),
        wallets: store,
        rounds: Arc::new(config.round_calculator()),
    })
}

async fn run(config: ReportConfig) -> anyhow::Result<()> {
    if !config.enabled {
        tracing::info!("Vote Report is disabled, nothing to serve");
        return Ok(());
    }

    let collaborators = collaborators(&config)?;
    let mut service = VoteReportService::register(config, collaborators)?;
    service
        .boot()
        .await
        .context("Failed to start Vote Report Server!")?;

    ShutdownController::new().wait_for_signal().await;

    service
        .dispose()
        .await
        .context("Failed to stop Vote Report Server!")?;
    tracing::info!("Vote report daemon exited cleanly");
    Ok(())
}

fn render_once(config: &ReportConfig) -> anyhow::Result<String> {
    let collaborators = collaborators(config)?;
    let state = AppState {
        ledger: collaborators.ledger,
        wallets: collaborators.wallets,
        rounds: collaborators.rounds,
        window: config.standby_window(),
        client: config.network.client.clone(),
        renderer: ReportRenderer::new()?,
    };
    let report = state.build()?;
    Ok(state.renderer.render(&report, &state.client)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.command == Command::Config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let format: LogFormat = config.log_format.parse()?;
    init_logging(format, &config.log_level)?;

    match cli.command {
        Command::Run => {
            tracing::info!(
                "Starting vote report daemon (http://{}:{}, snapshot {})",
                config.server.http.host,
                config.server.http.port,
                config.snapshot_path.display()
            );
            run(config).await
        }
        Command::Render => {
            let text = tokio::task::spawn_blocking(move || render_once(&config)).await??;
            print!("{text}");
            Ok(())
        }
        Command::Config => Ok(()),
    }
}
