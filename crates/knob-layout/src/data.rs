//! Layout output.

use knob_core::{Point, Rect};

/// Computed rectangles for one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutData {
    /// Bounds of the whole control
    pub client: Rect,
    /// Client bounds inside the border
    pub face: Rect,
    /// Area left for image and text after padding and the check
    pub field: Rect,
    /// The check glyph
    pub check_bounds: Rect,
    /// Area reserved for the check
    pub check_area: Rect,
    pub image_bounds: Rect,
    /// Image origin before clipping; only set with legacy pixel compatibility
    pub image_start: Option<Point>,
    pub text_bounds: Rect,
    /// Where to draw the focus indicator
    pub focus: Rect,
}
