use thiserror::Error;

pub type Result<T> = std::result::Result<T, LendingError>;

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Application {0} already exists")]
    DuplicateApplication(String),
    #[error("Application {0} not found")]
    NotFound(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Stored record is corrupt: {0}")]
    Deserialization(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
