use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart bounds: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid data source: {0}")]
    InvalidDataSource(String),

    #[error("invalid settings: {0}")]
    InvalidConfig(String),

    #[error("item index {index} is out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("chart has not been laid out; call `draw` first")]
    NotLaidOut,
}
