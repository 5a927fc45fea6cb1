//! Error types.

use thiserror::Error;

/// Failures reported by [`crate::display::PixelSurface`] and anything drawing into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height} (stride {stride})")]
    InvalidSize { width: u32, height: u32, stride: u32 },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("surface update already in progress")]
    AlreadyLocked,
}

/// Failures of the windowed demo shell.
#[derive(Debug, Error)]
pub enum DemoError {
    /// SDL2 reports its errors as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<String> for DemoError {
    fn from(message: String) -> Self {
        Self::Sdl(message)
    }
}
