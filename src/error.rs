use thiserror::Error;

pub type LegendResult<T> = Result<T, LegendError>;

#[derive(Debug, Error)]
pub enum LegendError {
    #[error("invalid region: width={width}, height={height}")]
    InvalidRegion { width: i32, height: i32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown line: {0}")]
    UnknownLine(String),
}
