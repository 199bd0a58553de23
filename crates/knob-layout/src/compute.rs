//! Layout entry point.
//!
//! Runs the placement passes in order: reading-direction translation, border
//! and padding, check, image and text, focus.

use knob_core::{LayoutError, Rect};

use crate::checkmark::place_checkmark;
use crate::data::LayoutData;
use crate::focus::focus_rectangle;
use crate::options::LayoutOptions;
use crate::rtl::Orientation;
use crate::text::TextMeasurer;
use crate::text_image::place_text_and_image;

/// Compute every rectangle of the control described by `options`.
///
/// The measurer is consulted at most once.
pub fn compute_layout<M: TextMeasurer + ?Sized>(
    options: &LayoutOptions,
    measurer: &M,
) -> Result<LayoutData, LayoutError> {
    let orientation = Orientation::resolve(options);

    let client = options.client;
    let face = deflate(client, options.full_border_size());
    let content = deflate(face, options.padding_size);
    tracing::trace!(?face, ?content, ?orientation, "layout regions");

    let check = place_checkmark(
        content,
        options.check_size,
        options.check_padding_size,
        orientation.check_align,
    );
    let placement = place_text_and_image(options, &orientation, check.field, measurer)?;
    let focus = focus_rectangle(
        options,
        check.field,
        placement.text_bounds,
        placement.image_bounds,
    );

    let data = LayoutData {
        client,
        face,
        field: check.field,
        check_bounds: check.check_bounds,
        check_area: check.check_area,
        image_bounds: placement.image_bounds,
        image_start: placement.image_start,
        text_bounds: placement.text_bounds,
        focus,
    };
    tracing::debug!(?data, "computed layout");
    Ok(data)
}

/// Shrink by `amount` on every side without going below zero size or
/// leaving `rect`.
fn deflate(rect: Rect, amount: i32) -> Rect {
    let inner = rect.inset(amount);
    Rect::new(
        inner.x.min(rect.right()),
        inner.y.min(rect.bottom()),
        inner.width.max(0),
        inner.height.max(0),
    )
}
