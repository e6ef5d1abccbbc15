use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Invalid listen address: {0}")]
    InvalidAddr(#[from] std::net::AddrParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
