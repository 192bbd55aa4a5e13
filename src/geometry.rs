//! Positions and rectangles on the character grid.
//!
//! Rectangles are half-open: `min` is inclusive, `max` is exclusive on both
//! axes. A rectangle with `dx() <= 0` or `dy() <= 0` is a valid empty region
//! and means "nothing to draw", never a malfunction.

/// A point on the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The grid origin (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);
}

/// A half-open rectangular region: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    /// The zero rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Pos::ORIGIN,
        max: Pos::ORIGIN,
    };

    /// Create a rectangle from two corner coordinates.
    ///
    /// Coordinates are canonicalized per axis (swapped when given in the
    /// wrong order), so the result always satisfies `max >= min`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self {
            min: Pos::new(x0, y0),
            max: Pos::new(x1, y1),
        }
    }

    /// Create a rectangle at the origin with the given extents.
    pub fn sized(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width of the rectangle.
    #[inline]
    pub const fn dx(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub const fn dy(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether a point lies inside the rectangle (half-open test).
    #[inline]
    pub const fn contains(&self, p: Pos) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// The largest rectangle contained in both `self` and `other`.
    ///
    /// Returns [`Rect::ZERO`] when the two do not overlap.
    pub fn intersect(&self, other: Rect) -> Rect {
        let min = Pos::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Pos::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        let r = Rect { min, max };
        if r.is_empty() { Rect::ZERO } else { r }
    }

    /// The same extents translated to the origin.
    ///
    /// Used to decouple wrapping/clipping arithmetic from the absolute
    /// placement of a screen's viewport.
    #[inline]
    pub const fn local(&self) -> Rect {
        Rect {
            min: Pos::ORIGIN,
            max: Pos::new(self.dx(), self.dy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_extents() {
        let r = Rect::new(2, 3, 10, 8);
        assert_eq!(r.dx(), 8);
        assert_eq!(r.dy(), 5);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_rect_canonicalizes() {
        let r = Rect::new(10, 8, 2, 3);
        assert_eq!(r, Rect::new(2, 3, 10, 8));
        assert!(r.dx() >= 0 && r.dy() >= 0);
    }

    #[test]
    fn test_rect_degenerate_is_empty() {
        assert!(Rect::new(5, 5, 5, 9).is_empty()); // zero width
        assert!(Rect::new(5, 5, 9, 5).is_empty()); // zero height
        assert!(Rect::ZERO.is_empty());
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0, 0, 3, 2);
        assert!(r.contains(Pos::new(0, 0)));
        assert!(r.contains(Pos::new(2, 1)));
        assert!(!r.contains(Pos::new(3, 0)));
        assert!(!r.contains(Pos::new(0, 2)));
        assert!(!r.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn test_intersect_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        assert_eq!(a.intersect(b), Rect::new(5, 5, 10, 10));
        assert_eq!(b.intersect(a), Rect::new(5, 5, 10, 10));
    }

    #[test]
    fn test_intersect_disjoint_is_zero() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 10, 20, 20);
        assert_eq!(a.intersect(b), Rect::ZERO);
    }

    #[test]
    fn test_intersect_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 20, 20);
        assert_eq!(outer.intersect(inner), inner);
    }

    #[test]
    fn test_local_drops_offset() {
        let r = Rect::new(7, 3, 17, 13);
        assert_eq!(r.local(), Rect::new(0, 0, 10, 10));
    }
}
