use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgroError>;

/// Error type for the edges of the crate: loading data, validating campaigns,
/// resolving service lookups. Aggregators themselves never fail.
#[derive(Debug, Error)]
pub enum AgroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid range: `{desde}` is after `{hasta}`")]
    InvalidRange { desde: String, hasta: String },
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),
    #[error("Lote not found: {0}")]
    LoteNotFound(String),
    #[error("Campaign `{0}` already exists")]
    DuplicateCampaign(String),
    #[error("Validation failed: {0}")]
    Validation(String),
}
