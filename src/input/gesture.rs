use log::debug;

use crate::math::PixelPoint;

/// Two-click line gesture
///
/// Owned by whoever handles pointer input. Each primary-button press is fed to
/// [`ClickGesture::press`]; once two points are recorded, [`ClickGesture::take`]
/// hands them out and the gesture starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickGesture {
    /// No points recorded
    #[default]
    Empty,
    /// First endpoint recorded
    OnePoint(PixelPoint),
    /// Both endpoints recorded, waiting to be drawn
    Ready(PixelPoint, PixelPoint),
}

impl ClickGesture {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Record a press. Pressing while a pair is still waiting discards that
    /// pair and starts a new gesture at `point`.
    pub fn press(&mut self, point: PixelPoint) {
        *self = match *self {
            Self::Empty => Self::OnePoint(point),
            Self::OnePoint(first) => Self::Ready(first, point),
            Self::Ready(first, second) => {
                debug!("dropping undrawn gesture {:?} -> {:?}", first, second);
                Self::OnePoint(point)
            },
        };
        debug!("gesture {:?}", self);
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(..))
    }

    /// Take a completed pair, resetting to empty. None until two presses arrive.
    pub fn take(&mut self) -> Option<(PixelPoint, PixelPoint)> {
        match *self {
            Self::Ready(first, second) => {
                *self = Self::Empty;
                Some((first, second))
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_presses_make_a_pair() {
        let mut gesture = ClickGesture::new();
        gesture.press(PixelPoint::new(10, 20));
        assert_eq!(gesture, ClickGesture::OnePoint(PixelPoint::new(10, 20)));
        assert_eq!(gesture.take(), None);

        gesture.press(PixelPoint::new(30, 5));
        assert!(gesture.is_ready());
        assert_eq!(
            gesture.take(),
            Some((PixelPoint::new(10, 20), PixelPoint::new(30, 5)))
        );
        assert_eq!(gesture, ClickGesture::Empty);
        assert_eq!(gesture.take(), None);
    }

    #[test]
    fn test_next_gesture_starts_fresh() {
        let mut gesture = ClickGesture::new();
        for p in [(1, 1), (2, 2)] {
            gesture.press(p.into());
        }
        gesture.take();
        gesture.press(PixelPoint::new(3, 3));
        assert_eq!(gesture, ClickGesture::OnePoint(PixelPoint::new(3, 3)));
    }

    #[test]
    fn test_press_while_ready_restarts() {
        let mut gesture = ClickGesture::new();
        gesture.press(PixelPoint::new(1, 1));
        gesture.press(PixelPoint::new(2, 2));
        gesture.press(PixelPoint::new(7, 7));
        assert_eq!(gesture, ClickGesture::OnePoint(PixelPoint::new(7, 7)));
    }
}
