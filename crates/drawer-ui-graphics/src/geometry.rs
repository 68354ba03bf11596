//! Geometric primitives: Point, IntSize, IntRect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Measured size of a view in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };
}

/// Pixel-aligned rectangle expressed by its four edges.
///
/// `right` and `bottom` are exclusive, so a rect with `left == right` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn from_origin_size(left: i32, top: i32, size: IntSize) -> Self {
        Self {
            left,
            top,
            right: left + size.width,
            bottom: top + size.height,
        }
    }

    pub const EMPTY: IntRect = IntRect::new(0, 0, 0, 0);

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Hit test with inclusive leading edges and exclusive trailing edges,
    /// so two adjacent rects never both claim a point.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && x < self.right as f32
            && y >= self.top as f32
            && y < self.bottom as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let rect = IntRect::new(-100, 10, 150, 60);
        assert_eq!(rect.width(), 250);
        assert_eq!(rect.height(), 50);
        assert_eq!(rect.size(), IntSize::new(250, 50));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = IntRect::new(0, 0, 100, 100);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(99.9, 99.9));
        assert!(!rect.contains(100.0, 50.0));
        assert!(!rect.contains(50.0, 100.0));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = IntRect::from_origin_size(700, 0, IntSize::new(300, 600));
        let moved = rect.translate(-50, 0);
        assert_eq!(moved, IntRect::new(650, 0, 950, 600));
        assert_eq!(moved.size(), rect.size());
    }

    #[test]
    fn empty_rect() {
        assert!(IntRect::EMPTY.is_empty());
        assert!(IntRect::new(10, 0, 10, 50).is_empty());
        assert!(!IntRect::new(0, 0, 1, 1).is_empty());
    }
}
