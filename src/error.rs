use thiserror::Error;

/// Errors raised when sizing the render surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("Surface side {side} exceeds the maximum of {max} pixels")]
    TooLarge { side: u32, max: u32 },
}
