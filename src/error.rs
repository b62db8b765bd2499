use thiserror::Error;

pub type Result<T> = std::result::Result<T, RewardError>;

#[derive(Error, Debug)]
pub enum RewardError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Catalog error: {0}")]
    CatalogError(String),
    #[error("Strategy error: {0}")]
    StrategyError(String),
}
