use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("insufficient funds to withdraw")]
    InsufficientFunds,
    #[error("account pay in limit reached")]
    PayInLimitExceeded,
    #[error("no account with id {0}")]
    AccountNotFound(u32),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
