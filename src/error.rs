//! 错误类型

use thiserror::Error;

/// FunGraphics 错误
#[derive(Error, Debug)]
pub enum GraphicsError {
    #[error("invalid surface dimensions {width}x{height}, both must be positive and fit in memory")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("window has been closed")]
    WindowClosed,

    #[error("point ({x}, {y}) is outside the content area")]
    OutsideContentArea { x: i32, y: i32 },

    #[error("blocking display call issued from the display thread")]
    Reentrant,

    #[error("invalid window configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl GraphicsError {
    pub fn display_unavailable(msg: impl Into<String>) -> Self {
        Self::DisplayUnavailable(msg.into())
    }

    pub fn window_creation(msg: impl Into<String>) -> Self {
        Self::WindowCreation(msg.into())
    }
}

/// Result type for FunGraphics operations
pub type Result<T> = std::result::Result<T, GraphicsError>;
