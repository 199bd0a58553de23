//! Integer pixel geometry.
//!
//! Every type here is a small `Copy` value. Transformations return new
//! values instead of mutating in place, so rectangles can be threaded through
//! the layout pipeline by plain parameter passing.

use glam::Vec2;
use std::ops::{Add, Sub};

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    /// A "don't care" bound for preferred-size queries.
    pub const UNBOUNDED: Self = Self::new(i32::MAX, i32::MAX);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Square size with equal sides.
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// True when both dimensions are zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Componentwise maximum.
    pub fn union(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Swap width and height when `flip` is set.
    pub fn flip_if(self, flip: bool) -> Size {
        if flip {
            Size::new(self.height, self.width)
        } else {
            self
        }
    }

    /// Round a fractional extent up to whole pixels.
    pub fn ceil(extent: Vec2) -> Size {
        let ceiled = extent.ceil();
        Size::new(ceiled.x as i32, ceiled.y as i32)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_add(rhs.width),
            self.height.saturating_add(rhs.height),
        )
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

/// Per-side spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    /// Create uniform padding.
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Build from left, top, right and bottom edges.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check whether `other` lies entirely within these bounds.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grow by `dx` on the left and right and `dy` on the top and bottom.
    /// Negative amounts shrink.
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x - dx,
            self.y - dy,
            self.width + 2 * dx,
            self.height + 2 * dy,
        )
    }

    /// Inset bounds by a uniform amount.
    pub fn inset(&self, amount: i32) -> Rect {
        self.inflate(-amount, -amount)
    }

    /// Grow each side by the matching padding value.
    pub fn inflate_by(&self, padding: Padding) -> Rect {
        Rect::new(
            self.x - padding.left,
            self.y - padding.top,
            self.width + padding.horizontal(),
            self.height + padding.vertical(),
        )
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    pub fn with_size(&self, size: Size) -> Rect {
        Rect::new(self.x, self.y, size.width, size.height)
    }

    /// Compute intersection with another rectangle.
    ///
    /// Rectangles that only share an edge intersect in a zero-area rectangle;
    /// `None` means they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 <= x2 && y1 <= y2 {
            Some(Rect::from_ltrb(x1, y1, x2, y2))
        } else {
            None
        }
    }

    /// Compute union (bounding box) with another rectangle.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::from_ltrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_and_inset() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.inflate(2, 3), Rect::new(8, 17, 104, 56));
        assert_eq!(r.inset(5), Rect::new(15, 25, 90, 40));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert_eq!(a.intersect(&b), Some(Rect::new(50, 50, 50, 50)));
    }

    #[test]
    fn test_touching_intersection_is_zero_area() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let touching = a.intersect(&b).unwrap();
        assert_eq!(touching, Rect::new(10, 0, 0, 10));
        assert!(touching.is_empty());
    }

    #[test]
    fn test_disjoint_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 5, 5);
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, -5, 20, 10);
        assert_eq!(a.union(&b), Rect::new(0, -5, 25, 15));
    }

    #[test]
    fn test_inflate_by_padding() {
        let r = Rect::new(10, 10, 20, 20);
        let padded = r.inflate_by(Padding { left: 1, top: 2, right: 3, bottom: 4 });
        assert_eq!(padded, Rect::new(9, 8, 24, 26));
    }

    #[test]
    fn test_size_arithmetic_saturates() {
        let unbounded = Size::UNBOUNDED + Size::new(4, 4);
        assert_eq!(unbounded, Size::UNBOUNDED);
        assert_eq!(Size::new(10, 8) - Size::new(3, 2), Size::new(7, 6));
    }

    #[test]
    fn test_size_ceil_and_flip() {
        assert_eq!(Size::ceil(Vec2::new(17.6, 19.2)), Size::new(18, 20));
        assert_eq!(Size::new(3, 7).flip_if(true), Size::new(7, 3));
        assert_eq!(Size::new(3, 7).flip_if(false), Size::new(3, 7));
    }
}
