mod rect;
mod surface;
#[cfg(feature = "window")]
mod window;

pub use rect::DirtyRect;
pub use surface::{PixelSurface, SurfaceUpdate};
#[cfg(feature = "window")]
pub use window::{Display, InputEvent, MouseButtonKind, RenderTarget};
