//! Escape-time Mandelbrot in 8-bit gray
//!
//! Each pixel maps to a point `c` of the complex plane through a [`Viewport`].
//! The orbit of `z := z² + c` starting at zero is tested before each update;
//! escaping at test `i` (1-based) gives intensity `i * 8`. Points still bounded
//! after the last test are inside the set and stay black.

use std::time::Instant;

use log::info;

use super::Draw;
use crate::display::{DirtyRect, PixelSurface};
use crate::error::SurfaceError;
use crate::math::Complex;

/// Bound on the escape test counter; tests run for `i` in `1..MAX_ITERATIONS`
pub const MAX_ITERATIONS: u32 = 32;

const INTENSITY_STEP: u32 = 8;
const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Center and zoom of the visible region of the complex plane
///
/// The surface height always spans `2 / zoom` world units, so one pixel is
/// `step = 2 / height / zoom`. World y grows upward, pixel y downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
}

impl Viewport {
    pub const fn new(center: Complex, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// World units per pixel
    #[inline]
    pub fn step(&self, height: u32) -> f64 {
        2.0 / height as f64 / self.zoom
    }

    /// World coordinate of pixel (0, 0)
    pub fn origin(&self, width: u32, height: u32) -> Complex {
        let step = self.step(height);
        Complex::new(
            self.center.re - step * width as f64 / 2.0,
            self.center.im + step * height as f64 / 2.0,
        )
    }

    /// World coordinate of pixel (x, y) on a `width` x `height` surface
    pub fn world_at(&self, x: u32, y: u32, width: u32, height: u32) -> Complex {
        let step = self.step(height);
        let origin = self.origin(width, height);
        Complex::new(origin.re + x as f64 * step, origin.im - y as f64 * step)
    }
}

/// Escape-time intensity of `c`: one of 0, 8, 16, ..., 248.
///
/// A NaN magnitude counts as escaped at the current test, so degenerate
/// viewports (zero or huge zoom) still produce valid intensities.
pub fn escape(c: Complex) -> u8 {
    let mut z = Complex::ZERO;
    for i in 1..MAX_ITERATIONS {
        let norm = z.norm_sqr();
        if norm > ESCAPE_RADIUS_SQR || norm.is_nan() {
            return (i * INTENSITY_STEP).min(255) as u8;
        }
        z = z * z + c;
    }
    0
}

/// Full-surface Mandelbrot render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotRenderer {
    viewport: Viewport,
}

impl MandelbrotRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Draw for MandelbrotRenderer {
    fn draw(&self, surface: &mut PixelSurface) -> Result<DirtyRect, SurfaceError> {
        let started = Instant::now();
        let width = surface.width();
        let height = surface.height();
        let step = self.viewport.step(height);
        let origin = self.viewport.origin(width, height);

        let mut update = surface.begin_update()?;
        for y in 0..height {
            let im = origin.im - y as f64 * step;
            for x in 0..width {
                let c = Complex::new(origin.re + x as f64 * step, im);
                update.set_pixel(x as i32, y as i32, escape(c))?;
            }
        }
        let dirty = DirtyRect::full(width, height);
        update.end_update(dirty);

        info!(
            "mandelbrot {}x{} center ({}, {}) zoom {} in {:.1?}",
            width,
            height,
            self.viewport.center.re,
            self.viewport.center.im,
            self.viewport.zoom,
            started.elapsed()
        );
        Ok(dirty)
    }

    fn name(&self) -> &str {
        "mandelbrot"
    }
}

/// Render the Mandelbrot set over the whole surface
pub fn render(
    surface: &mut PixelSurface,
    center: Complex,
    zoom: f64,
) -> Result<DirtyRect, SurfaceError> {
    MandelbrotRenderer::new(Viewport::new(center, zoom)).draw(surface)
}
