use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("unknown canonical field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
