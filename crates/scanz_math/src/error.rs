use thiserror::Error;

/// Degenerate geometry that would otherwise divide by zero.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("point lies on the camera plane (z = 0)")]
    ZeroDepth,

    #[error("triangle has zero area, no face normal")]
    Degenerate,

    #[error("plane is edge-on to the view axis (normal.z = 0)")]
    EdgeOn,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
