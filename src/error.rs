use thiserror::Error;

use crate::core::AxisOrientation;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{axis} axis requires at least one tick value")]
    EmptyDomain { axis: AxisOrientation },

    #[error("axes must be drawn before series can be added")]
    AxesNotDrawn,

    #[error("axes were already drawn for this chart")]
    AxesAlreadyDrawn,
}
