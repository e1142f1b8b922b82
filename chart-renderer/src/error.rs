//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The chart has no series.
    #[error("Chart has no series: {0}")]
    Empty(String),

    /// Width or height leaves no room for the plot area.
    #[error("Invalid chart dimensions: {width}x{height}")]
    Dimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// The renderer produced markup that could not be finalized.
    #[error("Malformed markup: {0}")]
    Markup(String),
}
