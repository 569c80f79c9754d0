use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
