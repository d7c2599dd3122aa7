/// Convenience result type used across the engine.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant except [`CanvasError::Other`] describes a programmer error: the engine never
/// retries or recovers, it surfaces the failure to the caller immediately.
#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    /// A coordinate access fell outside `[0, width) x [0, height)`.
    #[error(
        "coordinates ({x}, {y}) are out of bounds for canvas size ({width}, {height})"
    )]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Width of the canvas that rejected the access.
        width: i32,
        /// Height of the canvas that rejected the access.
        height: i32,
    },

    /// Canvas geometry or backing buffer does not describe a valid view.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Invalid non-geometric parameter (kernel sigma, transform factors, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when deserializing configuration records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CanvasError {
    /// Build a [`CanvasError::OutOfBounds`] value.
    pub fn out_of_bounds(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a [`CanvasError::InvalidDimension`] value.
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    /// Build a [`CanvasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CanvasError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CanvasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
