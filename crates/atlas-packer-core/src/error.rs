use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid atlas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
