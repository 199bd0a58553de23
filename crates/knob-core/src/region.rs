//! Splitting a rectangle into two adjacent regions and growing them back.

use crate::alignment::Edge;
use crate::geometry::{Rect, Size};

/// Reserve a strip against `edge` sized to `content`.
///
/// Returns `(reserved, remainder)`. Left/right splits use `content.width`,
/// top/bottom splits use `content.height`; the other dimension of both
/// regions matches `bounds`.
pub fn split(bounds: Rect, content: Size, edge: Edge) -> (Rect, Rect) {
    match edge {
        Edge::Left => (
            Rect::new(bounds.x, bounds.y, content.width, bounds.height),
            Rect::new(
                bounds.x + content.width,
                bounds.y,
                bounds.width - content.width,
                bounds.height,
            ),
        ),
        Edge::Right => (
            Rect::new(
                bounds.right() - content.width,
                bounds.y,
                content.width,
                bounds.height,
            ),
            Rect::new(bounds.x, bounds.y, bounds.width - content.width, bounds.height),
        ),
        Edge::Top => (
            Rect::new(bounds.x, bounds.y, bounds.width, content.height),
            Rect::new(
                bounds.x,
                bounds.y + content.height,
                bounds.width,
                bounds.height - content.height,
            ),
        ),
        Edge::Bottom => (
            Rect::new(
                bounds.x,
                bounds.bottom() - content.height,
                bounds.width,
                content.height,
            ),
            Rect::new(bounds.x, bounds.y, bounds.width, bounds.height - content.height),
        ),
    }
}

/// Stretch the two halves of a [`split`] outward until they fill `bounds`.
///
/// The reserved region was split off against `edge`; both regions keep the
/// line they share and take every other side from `bounds`.
pub fn expand_to_fill(bounds: Rect, edge: Edge, reserved: Rect, remainder: Rect) -> (Rect, Rect) {
    let inner = edge.opposite();
    (
        keep_side(bounds, reserved, inner),
        keep_side(bounds, remainder, edge),
    )
}

/// `outer` with the single side `side` taken from `source`.
fn keep_side(outer: Rect, source: Rect, side: Edge) -> Rect {
    let (mut left, mut top, mut right, mut bottom) =
        (outer.left(), outer.top(), outer.right(), outer.bottom());
    match side {
        Edge::Left => left = source.left(),
        Edge::Top => top = source.top(),
        Edge::Right => right = source.right(),
        Edge::Bottom => bottom = source.bottom(),
    }
    Rect::from_ltrb(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_left() {
        let (image, text) = split(Rect::new(2, 2, 196, 46), Size::new(16, 16), Edge::Left);
        assert_eq!(image, Rect::new(2, 2, 16, 46));
        assert_eq!(text, Rect::new(18, 2, 180, 46));
    }

    #[test]
    fn test_split_right() {
        let (image, text) = split(Rect::new(0, 0, 100, 20), Size::new(30, 5), Edge::Right);
        assert_eq!(image, Rect::new(70, 0, 30, 20));
        assert_eq!(text, Rect::new(0, 0, 70, 20));
    }

    #[test]
    fn test_split_top_and_bottom() {
        let bounds = Rect::new(0, 0, 40, 100);
        let (top, rest) = split(bounds, Size::new(5, 25), Edge::Top);
        assert_eq!(top, Rect::new(0, 0, 40, 25));
        assert_eq!(rest, Rect::new(0, 25, 40, 75));

        let (bottom, rest) = split(bounds, Size::new(5, 25), Edge::Bottom);
        assert_eq!(bottom, Rect::new(0, 75, 40, 25));
        assert_eq!(rest, Rect::new(0, 0, 40, 75));
    }

    #[test]
    fn test_expand_keeps_split_line() {
        let outer = Rect::new(0, 0, 200, 50);
        let combined = Rect::new(60, 15, 80, 20);
        let (image, text) = split(combined, Size::new(16, 16), Edge::Left);
        let (image, text) = expand_to_fill(outer, Edge::Left, image, text);
        assert_eq!(image, Rect::new(0, 0, 76, 50));
        assert_eq!(text, Rect::new(76, 0, 124, 50));
    }

    #[test]
    fn test_expand_vertical() {
        let outer = Rect::new(0, 0, 50, 200);
        let combined = Rect::new(10, 70, 30, 60);
        let (image, text) = split(combined, Size::new(16, 16), Edge::Bottom);
        assert_eq!(image, Rect::new(10, 114, 30, 16));
        let (image, text) = expand_to_fill(outer, Edge::Bottom, image, text);
        assert_eq!(image, Rect::new(0, 114, 50, 86));
        assert_eq!(text, Rect::new(0, 0, 50, 114));
    }
}
