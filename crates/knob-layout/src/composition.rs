//! Composing check, image and text extents into one budget and back.
//!
//! Along each axis the three elements either sit side by side (their
//! extents add) or share the same span (the largest one wins). Which pairs
//! share a span depends on where the check reserves its area and whether the
//! text/image relation runs along that axis.

use knob_core::{Axis, ContentAlignment, Edge, Size, TextImageRelation};

/// How check, image and text extents combine along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composition {
    /// All three are laid out one after another.
    NoneCombined,
    /// The check shares its span with image and text.
    CheckCombined,
    /// Image and text share a span; the check sits beside them.
    TextImageCombined,
    /// All three share one span.
    AllCombined,
}

impl Composition {
    pub fn from_fusion(check_fused: bool, text_image_fused: bool) -> Self {
        match (check_fused, text_image_fused) {
            (false, false) => Composition::NoneCombined,
            (true, false) => Composition::CheckCombined,
            (false, true) => Composition::TextImageCombined,
            (true, true) => Composition::AllCombined,
        }
    }

    /// Derive the mode for `axis` from the check alignment and relation.
    pub fn for_axis(axis: Axis, check_align: ContentAlignment, relation: TextImageRelation) -> Self {
        let check_fused = check_reservation(check_align).map(Edge::axis) != Some(axis);
        let text_image_fused = match axis {
            Axis::Horizontal => !relation.is_horizontal(),
            Axis::Vertical => !relation.is_vertical(),
        };
        Self::from_fusion(check_fused, text_image_fused)
    }

    /// Total extent of check, image and text.
    pub fn compose(self, check: i32, image: i32, text: i32) -> i32 {
        match self {
            Composition::NoneCombined => check + image + text,
            Composition::CheckCombined => check.max(image + text),
            Composition::TextImageCombined => image.max(text) + check,
            Composition::AllCombined => check.max(image).max(text),
        }
    }

    /// Extent left for text once check and image are taken out of `budget`.
    pub fn decompose(self, check: i32, image: i32, budget: i32) -> i32 {
        match self {
            Composition::NoneCombined => budget.saturating_sub(check + image),
            Composition::CheckCombined => budget.saturating_sub(image),
            Composition::TextImageCombined => budget.saturating_sub(check),
            Composition::AllCombined => budget,
        }
    }
}

/// The side of the field a check with `align` carves out, if any.
///
/// Left and right columns reserve a column; top and bottom center reserve a
/// row; a middle-center check floats over the content.
pub fn check_reservation(align: ContentAlignment) -> Option<Edge> {
    use ContentAlignment::*;
    match align {
        TopLeft | MiddleLeft | BottomLeft => Some(Edge::Left),
        TopRight | MiddleRight | BottomRight => Some(Edge::Right),
        TopCenter => Some(Edge::Top),
        BottomCenter => Some(Edge::Bottom),
        MiddleCenter => None,
    }
}

/// Composition modes for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCompositions {
    pub horizontal: Composition,
    pub vertical: Composition,
}

impl AxisCompositions {
    pub fn new(check_align: ContentAlignment, relation: TextImageRelation) -> Self {
        Self {
            horizontal: Composition::for_axis(Axis::Horizontal, check_align, relation),
            vertical: Composition::for_axis(Axis::Vertical, check_align, relation),
        }
    }

    pub fn compose(&self, check: Size, image: Size, text: Size) -> Size {
        Size::new(
            self.horizontal.compose(check.width, image.width, text.width),
            self.vertical.compose(check.height, image.height, text.height),
        )
    }

    pub fn decompose(&self, check: Size, image: Size, budget: Size) -> Size {
        Size::new(
            self.horizontal.decompose(check.width, image.width, budget.width),
            self.vertical.decompose(check.height, image.height, budget.height),
        )
    }
}
