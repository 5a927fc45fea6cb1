//! Bresenham line rasterization

use super::Draw;
use crate::display::{DirtyRect, PixelSurface};
use crate::error::SurfaceError;
use crate::math::PixelPoint;

/// Pixels of the 8-connected line from `from` to `to`, both inclusive
///
/// Integer-only error accumulation; a 45° line has zero error and steps
/// diagonally every pixel. Degenerate lines yield a single pixel.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    error: i64,
    done: bool,
}

impl LinePixels {
    pub fn new(from: PixelPoint, to: PixelPoint) -> Self {
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = -(to.y as i64 - from.y as i64).abs();
        Self {
            x: from.x,
            y: from.y,
            x1: to.x,
            y1: to.y,
            dx,
            dy,
            sx: if from.x <= to.x { 1 } else { -1 },
            sy: if from.y <= to.y { 1 } else { -1 },
            error: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        if self.done {
            return None;
        }
        let current = PixelPoint::new(self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.error;
        if e2 >= self.dy {
            if self.x == self.x1 {
                self.done = true;
                return Some(current);
            }
            self.error += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            if self.y == self.y1 {
                self.done = true;
                return Some(current);
            }
            self.error += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// A straight line of one intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub from: PixelPoint,
    pub to: PixelPoint,
    pub intensity: u8,
}

impl Line {
    pub fn new(from: PixelPoint, to: PixelPoint, intensity: u8) -> Self {
        Self {
            from,
            to,
            intensity,
        }
    }

    pub fn pixels(&self) -> LinePixels {
        LinePixels::new(self.from, self.to)
    }
}

impl Draw for Line {
    /// Dirty rect is the endpoint bounding box, not the exact pixels.
    /// Stops at the first pixel outside the surface.
    fn draw(&self, surface: &mut PixelSurface) -> Result<DirtyRect, SurfaceError> {
        let mut update = surface.begin_update()?;
        for p in self.pixels() {
            update.set_pixel(p.x, p.y, self.intensity)?;
        }
        let dirty = DirtyRect::spanning(self.from, self.to);
        update.end_update(dirty);
        Ok(dirty)
    }

    fn name(&self) -> &str {
        "line"
    }
}

/// Draw the line `p0`..=`p1` at `intensity`
pub fn rasterize(
    surface: &mut PixelSurface,
    p0: PixelPoint,
    p1: PixelPoint,
    intensity: u8,
) -> Result<DirtyRect, SurfaceError> {
    Line::new(p0, p1, intensity).draw(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<PixelPoint> {
        coords.iter().copied().map(PixelPoint::from).collect()
    }

    fn lit(surface: &PixelSurface) -> Vec<PixelPoint> {
        let mut out = Vec::new();
        for y in 0..surface.height() as i32 {
            for x in 0..surface.width() as i32 {
                if surface.get_pixel(x, y) != Some(0) {
                    out.push(PixelPoint::new(x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        let dirty = rasterize(
            &mut surface,
            PixelPoint::new(0, 0),
            PixelPoint::new(5, 0),
            255,
        )
        .unwrap();

        assert_eq!(dirty, DirtyRect::new(0, 0, 5, 0));
        assert_eq!(
            lit(&surface),
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
        for x in 0..=5 {
            assert_eq!(surface.get_pixel(x, 0), Some(255));
        }
    }

    #[test]
    fn test_single_pixel_line() {
        let mut surface = PixelSurface::new(5, 5).unwrap();
        let p = PixelPoint::new(2, 2);
        let dirty = rasterize(&mut surface, p, p, 255).unwrap();

        assert_eq!(lit(&surface), vec![p]);
        assert_eq!(dirty, DirtyRect::new(2, 2, 0, 0));
    }

    #[test]
    fn test_diagonal_line() {
        let line = LinePixels::new(PixelPoint::new(0, 0), PixelPoint::new(3, 3));
        assert_eq!(
            line.collect::<Vec<_>>(),
            pts(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn test_steep_line_sequence() {
        let line = LinePixels::new(PixelPoint::new(0, 0), PixelPoint::new(1, 3));
        assert_eq!(
            line.collect::<Vec<_>>(),
            pts(&[(0, 0), (0, 1), (1, 2), (1, 3)])
        );
    }

    #[test]
    fn test_vertical_line_upward() {
        let line = LinePixels::new(PixelPoint::new(4, 3), PixelPoint::new(4, 0));
        assert_eq!(
            line.collect::<Vec<_>>(),
            pts(&[(4, 3), (4, 2), (4, 1), (4, 0)])
        );
    }

    #[test]
    fn test_lines_are_connected_and_hit_endpoints() {
        let cases = [
            ((0, 0), (7, 2)),
            ((7, 2), (0, 0)),
            ((3, 9), (5, 0)),
            ((9, 9), (0, 4)),
            ((0, 8), (8, 0)),
            ((-3, 2), (6, -4)),
        ];
        for (a, b) in cases {
            let (a, b) = (PixelPoint::from(a), PixelPoint::from(b));
            let pixels: Vec<_> = LinePixels::new(a, b).collect();

            assert_eq!(pixels.first(), Some(&a));
            assert_eq!(pixels.last(), Some(&b));
            let span = (b.x - a.x).abs().max((b.y - a.y).abs()) as usize;
            assert_eq!(pixels.len(), span + 1, "{:?} -> {:?}", a, b);
            for pair in pixels.windows(2) {
                assert!((pair[1].x - pair[0].x).abs() <= 1);
                assert!((pair[1].y - pair[0].y).abs() <= 1);
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_line_leaving_surface_fails_and_releases() {
        let mut surface = PixelSurface::new(5, 5).unwrap();
        let err = rasterize(
            &mut surface,
            PixelPoint::new(2, 2),
            PixelPoint::new(9, 2),
            200,
        )
        .unwrap_err();

        assert!(matches!(err, SurfaceError::OutOfBounds { x: 5, y: 2, .. }));
        assert!(!surface.is_locked());
        assert_eq!(lit(&surface), pts(&[(2, 2), (3, 2), (4, 2)]));
        assert_eq!(surface.take_dirty(), Some(DirtyRect::new(2, 2, 3, 1)));
    }

    #[test]
    fn test_line_starting_outside_writes_nothing() {
        let mut surface = PixelSurface::new(5, 5).unwrap();
        assert!(rasterize(
            &mut surface,
            PixelPoint::new(-1, 0),
            PixelPoint::new(3, 0),
            255
        )
        .is_err());
        assert!(lit(&surface).is_empty());
        assert_eq!(surface.pending_dirty(), None);
    }

    #[test]
    fn test_overwrites_fractal_pixels() {
        let mut surface = PixelSurface::new(20, 20).unwrap();
        crate::render::render(&mut surface, crate::math::Complex::ZERO, 1.0).unwrap();
        surface.take_dirty();

        let line = Line::new(PixelPoint::new(0, 10), PixelPoint::new(19, 10), 255);
        line.draw(&mut surface).unwrap();
        assert_eq!(surface.row(10), Some(&[255u8; 20][..]));
        assert_eq!(surface.take_dirty(), Some(DirtyRect::new(0, 10, 19, 0)));
    }
}
