//! Grayscale raster demo core
//!
//! An 8-bit [`PixelSurface`](display::PixelSurface) written through scoped
//! updates, an escape-time Mandelbrot renderer, and a Bresenham line
//! rasterizer driven by a two-click gesture. The SDL2 window shell lives in
//! `display` behind the `window` feature.

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod math;
pub mod render;

pub use error::{DemoError, SurfaceError};
