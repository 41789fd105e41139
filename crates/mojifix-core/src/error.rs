use thiserror::Error;

pub type Result<T> = std::result::Result<T, MojifixError>;

#[derive(Debug, Error)]
pub enum MojifixError {
    #[error("manifest format error: {0}")]
    ManifestFormat(String),

    #[error("manifest parse error: {0}")]
    ManifestJson(#[from] serde_json::Error),
}
