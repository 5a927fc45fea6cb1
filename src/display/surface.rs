use log::{debug, trace};

use super::DirtyRect;
use crate::error::SurfaceError;
use crate::math::PixelPoint;

// ============================================================================
// PixelSurface
// ============================================================================

/// 8-bit grayscale pixel surface for software rendering
///
/// Row-major, `index = y * stride + x`. Pixels are only writable inside a
/// scoped update ([`PixelSurface::begin_update`]); every update publishes a
/// dirty rect when it ends, including when it ends early on an error.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: u32,
    locked: bool,
    dirty: Option<DirtyRect>,
}

impl PixelSurface {
    /// Create a zeroed surface with `stride == width`
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Self::with_stride(width, height, width)
    }

    /// Create a zeroed surface whose rows are `stride` bytes apart
    pub fn with_stride(width: u32, height: u32, stride: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 || stride < width {
            return Err(SurfaceError::InvalidSize {
                width,
                height,
                stride,
            });
        }
        Ok(Self {
            pixels: vec![0; stride as usize * height as usize],
            width,
            height,
            stride,
            locked: false,
            dirty: None,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of consecutive rows
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// True while a [`SurfaceUpdate`] holds the surface
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.stride as usize + x as usize)
        } else {
            None
        }
    }

    /// Read a pixel. Returns None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// The `width` visible pixels of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Raw backing buffer, `stride * height` bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Acquire exclusive write access for a batch of writes.
    ///
    /// Fails with [`SurfaceError::AlreadyLocked`] if a previous update was
    /// leaked without being released; nothing is written in that case.
    pub fn begin_update(&mut self) -> Result<SurfaceUpdate<'_>, SurfaceError> {
        if self.locked {
            return Err(SurfaceError::AlreadyLocked);
        }
        self.locked = true;
        trace!("surface locked");
        Ok(SurfaceUpdate {
            surface: self,
            written: None,
            declared: None,
        })
    }

    /// Region published by finished updates and not yet taken
    pub fn pending_dirty(&self) -> Option<DirtyRect> {
        self.dirty
    }

    /// Take the accumulated dirty region, leaving none pending
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    fn publish(&mut self, rect: DirtyRect) {
        debug!("dirty {:?}", rect);
        self.dirty = Some(match self.dirty {
            Some(pending) => pending.union(&rect),
            None => rect,
        });
    }
}

// ============================================================================
// Scoped update
// ============================================================================

/// Exclusive write access to a [`PixelSurface`]
///
/// Ending the update with [`SurfaceUpdate::end_update`] publishes the given
/// dirty rect. Dropping it without that (an early `?` return, a panic)
/// publishes the bounding box of the writes that did complete. The surface is
/// unlocked on both paths.
#[derive(Debug)]
pub struct SurfaceUpdate<'a> {
    surface: &'a mut PixelSurface,
    written: Option<(PixelPoint, PixelPoint)>,
    declared: Option<DirtyRect>,
}

impl SurfaceUpdate<'_> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Write one pixel. Out-of-bounds writes fail and leave the buffer untouched.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> Result<(), SurfaceError> {
        let idx = self
            .surface
            .index(x, y)
            .ok_or(SurfaceError::OutOfBounds {
                x,
                y,
                width: self.surface.width,
                height: self.surface.height,
            })?;
        self.surface.pixels[idx] = value;

        self.written = Some(match self.written {
            Some((min, max)) => (
                PixelPoint::new(min.x.min(x), min.y.min(y)),
                PixelPoint::new(max.x.max(x), max.y.max(y)),
            ),
            None => (PixelPoint::new(x, y), PixelPoint::new(x, y)),
        });
        Ok(())
    }

    /// Bounding box of the pixels written so far, one pixel per covered cell
    pub fn written(&self) -> Option<DirtyRect> {
        self.written.map(|(min, max)| {
            DirtyRect::new(
                min.x,
                min.y,
                max.x.abs_diff(min.x) + 1,
                max.y.abs_diff(min.y) + 1,
            )
        })
    }

    /// Release the surface and publish `dirty`
    pub fn end_update(mut self, dirty: DirtyRect) {
        self.declared = Some(dirty);
    }
}

impl Drop for SurfaceUpdate<'_> {
    fn drop(&mut self) {
        if let Some(rect) = self.declared.take().or_else(|| self.written()) {
            self.surface.publish(rect);
        }
        self.surface.locked = false;
        trace!("surface unlocked");
    }
}
