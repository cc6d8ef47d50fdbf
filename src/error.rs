use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("identifier must be nine characters long")]
    InvalidLength,
    #[error("identifier must be eight digits followed by a letter")]
    InvalidFormat,
    #[error("identifier checksum letter does not match")]
    ChecksumMismatch,
    #[error("invalid loan input: {0}")]
    InvalidInput(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("client not found: {0}")]
    ClientNotFound(String),
    #[error("client already exists: {0}")]
    ClientAlreadyExists(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
