use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
