//! Gray calibration square: intensity equals the x coordinate

use super::Draw;
use crate::display::{DirtyRect, PixelSurface};
use crate::error::SurfaceError;

const RAMP_SIZE: u32 = 256;

/// 256x256 horizontal ramp from black to white in the top-left corner
#[derive(Debug, Clone, Copy, Default)]
pub struct GrayRamp;

impl GrayRamp {
    pub fn new() -> Self {
        Self
    }
}

impl Draw for GrayRamp {
    fn draw(&self, surface: &mut PixelSurface) -> Result<DirtyRect, SurfaceError> {
        // Clipped to small surfaces
        let width = RAMP_SIZE.min(surface.width());
        let height = RAMP_SIZE.min(surface.height());

        let mut update = surface.begin_update()?;
        for y in 0..height {
            for x in 0..width {
                update.set_pixel(x as i32, y as i32, x as u8)?;
            }
        }
        let dirty = DirtyRect::full(width, height);
        update.end_update(dirty);
        Ok(dirty)
    }

    fn name(&self) -> &str {
        "gray ramp"
    }
}
