use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonStoreError {
    #[error("I/O error reading ledger dump: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed ledger dump: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<JsonStoreError> for vote_report_store::StoreError {
    fn from(e: JsonStoreError) -> Self {
        match e {
            JsonStoreError::Io(_) => vote_report_store::StoreError::Unavailable(e.to_string()),
            JsonStoreError::Parse(_) => {
                vote_report_store::StoreError::Serialization(e.to_string())
            }
        }
    }
}
