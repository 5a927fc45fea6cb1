//! Demo settings
//!
//! There is no CLI, environment or file configuration; everything is fixed here.

use log::LevelFilter;

use crate::math::Complex;

pub const WINDOW_TITLE: &str = "graybrot";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_LEFT: i32 = 50;
pub const WINDOW_TOP: i32 = 50;

/// Initial fractal view: the whole set fits the window height at zoom 1
pub const INITIAL_CENTER: Complex = Complex::new(-0.5, 0.0);
pub const INITIAL_ZOOM: f64 = 1.0;

pub const LINE_INTENSITY: u8 = 255;

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    pub center: Complex,
    pub zoom: f64,
    pub line_intensity: u8,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            left: WINDOW_LEFT,
            top: WINDOW_TOP,
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
            line_intensity: LINE_INTENSITY,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    /// Install the `env_logger` backend at `log_level`
    pub fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .format_timestamp_millis()
            .init();
    }
}
