//! Checkmark placement and the area it carves out of the field.

use knob_core::{Column, ContentAlignment, Edge, Rect, Row};

use crate::composition::check_reservation;

/// Vertical offset of a top-aligned check, keeping it level with the first
/// line of text.
const TOP_CHECK_OFFSET: i32 = 2;

/// Where the check went and what it left for image and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckPlacement {
    /// The visible check glyph.
    pub check_bounds: Rect,
    /// The full area reserved for the check.
    pub check_area: Rect,
    /// The field after the reservation has been removed.
    pub field: Rect,
}

/// Place a check of `check_size + padding` pixels inside `field`.
///
/// A non-positive extent means there is no check: both rectangles collapse
/// to an empty rectangle at the field origin and the field is untouched.
pub fn place_checkmark(
    field: Rect,
    check_size: i32,
    padding: i32,
    align: ContentAlignment,
) -> CheckPlacement {
    let extent = check_size + padding;
    if extent <= 0 {
        let empty = Rect::new(field.x, field.y, 0, 0);
        return CheckPlacement {
            check_bounds: empty,
            check_area: empty,
            field,
        };
    }

    let x = match align.column() {
        Column::Left => field.x,
        Column::Center => field.x + (field.width - extent) / 2,
        Column::Right => field.right() - extent,
    };
    let y = match align.row() {
        Row::Top => field.y + TOP_CHECK_OFFSET,
        Row::Middle => field.y + (field.height - extent) / 2,
        Row::Bottom => field.bottom() - extent,
    };
    let check_bounds = Rect::new(x, y, extent, extent);

    // Columns get one extra pixel of separation from the content. Neither
    // reservation may outgrow the field.
    let column = (extent + 1).min(field.width.max(0));
    let row = extent.min(field.height.max(0));
    let (check_area, remaining) = match check_reservation(align) {
        Some(Edge::Left) => (
            Rect::new(field.x, field.y, column, field.height),
            Rect::new(field.x + column, field.y, field.width - column, field.height),
        ),
        Some(Edge::Right) => (
            Rect::new(field.right() - column, field.y, column, field.height),
            Rect::new(field.x, field.y, field.width - column, field.height),
        ),
        Some(Edge::Top) => (
            Rect::new(field.x, field.y, field.width, row),
            Rect::new(field.x, field.y + row, field.width, field.height - row),
        ),
        Some(Edge::Bottom) => (
            Rect::new(field.x, field.bottom() - row, field.width, row),
            Rect::new(field.x, field.y, field.width, field.height - row),
        ),
        None => (
            check_bounds
                .intersect(&field)
                .unwrap_or(Rect::new(field.x, field.y, 0, 0)),
            field,
        ),
    };

    CheckPlacement {
        check_bounds: Rect::new(
            check_bounds.x,
            check_bounds.y,
            check_bounds.width - padding,
            check_bounds.height - padding,
        ),
        check_area,
        field: remaining,
    }
}


#[cfg(test)]
mod proptest_carve {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    proptest! {
        /// The reservation stays inside the given field and the shrunk
        /// field never has negative dimensions.
        #[test]
        fn carve_stays_within_field(
            align in select(ContentAlignment::ALL.to_vec()),
            check_size in 0i32..30,
            padding in 0i32..6,
            x in -20i32..20,
            y in -20i32..20,
            width in 0i32..200,
            height in 0i32..200,
        ) {
            let field = Rect::new(x, y, width, height);
            let placement = place_checkmark(field, check_size, padding, align);

            prop_assert!(field.contains_rect(&placement.check_area));
            prop_assert!(field.contains_rect(&placement.field));
            prop_assert!(placement.field.width >= 0);
            prop_assert!(placement.field.height >= 0);
            prop_assert!(placement.check_bounds.width >= 0);
        }
    }
}
