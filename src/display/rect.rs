use crate::math::PixelPoint;

/// Axis-aligned region of a surface that changed and must be re-presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole of a `width` x `height` surface
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// A single pixel
    pub const fn pixel(x: i32, y: i32) -> Self {
        Self::new(x, y, 1, 1)
    }

    /// Bounding box of two corner points: extents are `max - min`, so a
    /// horizontal segment has height 0.
    pub fn spanning(a: PixelPoint, b: PixelPoint) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(
            x,
            y,
            a.x.max(b.x).abs_diff(x),
            a.y.max(b.y).abs_diff(y),
        )
    }

    #[inline]
    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    #[inline]
    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Smallest rect containing both
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(
            x,
            y,
            (right - x as i64).min(u32::MAX as i64) as u32,
            (bottom - y as i64).min(u32::MAX as i64) as u32,
        )
    }

    /// Pixel region to re-present on a `width` x `height` surface.
    ///
    /// Grows the rect by one pixel on each axis so corner-spanning rects cover
    /// their last row and column, then clamps. Returns None when nothing is left.
    pub fn presentable(&self, width: u32, height: u32) -> Option<Self> {
        let x0 = (self.x as i64).clamp(0, width as i64);
        let y0 = (self.y as i64).clamp(0, height as i64);
        let x1 = (self.right() + 1).clamp(0, width as i64);
        let y1 = (self.bottom() + 1).clamp(0, height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Self::new(
            x0 as i32,
            y0 as i32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        ))
    }
}
