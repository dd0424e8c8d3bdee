use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
