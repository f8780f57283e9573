//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vote_report_engine::StandbyWindow;
use vote_report_store::{Milestone, MilestoneRounds};
use vote_report_types::{NetworkClient, DEFAULT_ACTIVE_DELEGATES};

use crate::error::ConfigError;

/// Configuration for the vote report service.
///
/// Loaded from a TOML file via [`ReportConfig::from_toml_file`], overridden
/// by the daemon's CLI/environment layer, or built programmatically in tests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Whether the HTTP server is started at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Standby rows listed after the active seats. Unset means the standby
    /// list ends at rank index 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate_rows: Option<u32>,

    /// JSON ledger dump the report is read from.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter, e.g. "info" or "warn,vote_report_server=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub network: NetworkSection,

    #[serde(default)]
    pub rounds: RoundsSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    /// Signed and wide so out-of-range values reach [`ReportConfig::validate`]
    /// instead of failing as a type error.
    #[serde(default = "default_port")]
    pub port: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSection {
    #[serde(default)]
    pub client: NetworkClient,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundsSection {
    #[serde(default = "default_milestones")]
    pub milestones: Vec<Milestone>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> i64 {
    4006
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("./ledger.json")
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_milestones() -> Vec<Milestone> {
    vec![Milestone {
        height: 1,
        active_delegates: DEFAULT_ACTIVE_DELEGATES,
    }]
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RoundsSection {
    fn default() -> Self {
        Self {
            milestones: default_milestones(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            delegate_rows: None,
            snapshot_path: default_snapshot_path(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            server: ServerSection::default(),
            network: NetworkSection::default(),
            rounds: RoundsSection::default(),
        }
    }
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ReportConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check the values a running service depends on.
    ///
    /// Reports the first violation only.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let http = &self.server.http;
        if http.host.trim().is_empty() {
            return Err(invalid("\"server.http.host\" is required"));
        }
        if http.port < 1 {
            return Err(invalid(
                "\"server.http.port\" must be greater than or equal to 1",
            ));
        }
        if http.port > i64::from(u16::MAX) {
            return Err(invalid(
                "\"server.http.port\" must be less than or equal to 65535",
            ));
        }
        if self.rounds.milestones.is_empty() {
            return Err(invalid("\"rounds.milestones\" must contain at least 1 items"));
        }
        if let Some(i) = self
            .rounds
            .milestones
            .iter()
            .position(|m| m.active_delegates == 0)
        {
            return Err(invalid(format!(
                "\"rounds.milestones[{i}].active_delegates\" must be greater than or equal to 1"
            )));
        }
        Ok(())
    }

    /// Validated port. Only meaningful after [`validate`](Self::validate).
    pub fn port(&self) -> Result<u16, ConfigError> {
        u16::try_from(self.server.http.port).map_err(|_| {
            invalid("\"server.http.port\" must be less than or equal to 65535")
        })
    }

    /// Standby window derived from `delegate_rows`.
    pub fn standby_window(&self) -> StandbyWindow {
        StandbyWindow::from_rows(self.delegate_rows)
    }

    /// Round calculator built from the milestone table.
    pub fn round_calculator(&self) -> MilestoneRounds {
        MilestoneRounds::new(self.rounds.milestones.clone())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
