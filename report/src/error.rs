use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The snapshot is malformed; no report is produced.
    #[error("invalid snapshot: {0}")]
    Validation(String),

    /// A percentage of a zero supply was requested.
    #[error("zero supply")]
    ZeroSupply,
}
