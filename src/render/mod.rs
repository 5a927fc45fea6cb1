mod gray_ramp;
mod line;
mod mandelbrot;

pub use gray_ramp::GrayRamp;
pub use line::{rasterize, Line, LinePixels};
pub use mandelbrot::{escape, render, MandelbrotRenderer, Viewport, MAX_ITERATIONS};

use crate::display::{DirtyRect, PixelSurface};
use crate::error::SurfaceError;

/// Anything that writes into a [`PixelSurface`] as one scoped update
pub trait Draw {
    /// Draw, returning the dirty rect published on success.
    /// On error the update is still released with the completed writes published.
    fn draw(&self, surface: &mut PixelSurface) -> Result<DirtyRect, SurfaceError>;

    /// Name for logs
    fn name(&self) -> &str;
}
