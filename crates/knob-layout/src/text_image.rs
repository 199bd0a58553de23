//! Placement of the image and the text label inside the field.
//!
//! When both elements are present and the relation is not an overlay, the
//! available area is split between them along the relation's axis. Otherwise
//! each element is aligned on its own. A series of clipping passes then keeps
//! the text inside the field, matching the pixel output of both supported
//! text renderers.

use knob_core::{region, ContentAlignment, Edge, MeasureError, Point, Rect, Size, TextImageRelation};

use crate::options::LayoutOptions;
use crate::rtl::Orientation;
use crate::text::{measure_label, TextMeasurer, WordWrap};

/// Result of [`place_text_and_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextImagePlacement {
    pub image_bounds: Rect,
    /// Image origin before clipping to the field, kept on the legacy path.
    pub image_start: Option<Point>,
    pub text_bounds: Rect,
    /// The field inset by the text/image inset.
    pub max_bounds: Rect,
}

/// Which way the available area was divided between image and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Image sits against the edge named by the relation; text takes the rest.
    ImageEdge,
    /// Text sits against its edge; image takes the rest.
    TextEdge,
    /// Neither is at an edge; the centered pair is stretched to fill.
    Centered,
}

impl SplitStrategy {
    /// Pick the split for a coupled pair whose image occupies `image_edge`.
    pub fn choose(orientation: &Orientation, image_edge: Edge) -> Self {
        if orientation.image_align.touches(image_edge) {
            SplitStrategy::ImageEdge
        } else if orientation.text_align.touches(image_edge.opposite()) {
            SplitStrategy::TextEdge
        } else {
            SplitStrategy::Centered
        }
    }
}

/// Place image and text inside `field` (the field left over by the check).
pub fn place_text_and_image<M: TextMeasurer + ?Sized>(
    options: &LayoutOptions,
    orientation: &Orientation,
    field: Rect,
    measurer: &M,
) -> Result<TextImagePlacement, MeasureError> {
    let mut max_bounds = field.inset(options.text_image_inset);
    if options.one_pixel_extra_border() {
        max_bounds = max_bounds.inflate(1, 1);
    }

    let image_size = options.image_size;
    let coupled = options.has_image() && !options.text.is_empty();
    let edge = orientation.relation.image_edge().filter(|_| coupled);

    let (image_bounds, text_bounds) = match edge {
        Some(image_edge) => {
            place_coupled(options, orientation, image_edge, max_bounds, measurer)?
        }
        None => {
            let text_size = measure_label(options, measurer, max_bounds.size(), WordWrap::Allowed)?;

            // The legacy renderer aligned the image as if it were a pixel larger.
            let aligned_image = if options.legacy_pixel_compat && options.has_image() {
                image_size + Size::new(1, 1)
            } else {
                image_size
            };
            (
                orientation.image_align.align(aligned_image, max_bounds),
                orientation.text_align.align(text_size, max_bounds),
            )
        }
    };
    tracing::trace!(?max_bounds, ?image_bounds, ?text_bounds, "split text and image");

    let placement = clip(
        options,
        orientation.relation,
        field,
        max_bounds,
        image_bounds,
        text_bounds,
    );
    Ok(placement)
}

fn place_coupled<M: TextMeasurer + ?Sized>(
    options: &LayoutOptions,
    orientation: &Orientation,
    image_edge: Edge,
    max_bounds: Rect,
    measurer: &M,
) -> Result<(Rect, Rect), MeasureError> {
    let image_size = options.image_size;
    let relation = orientation.relation;

    let max_text_size = if relation.is_vertical() {
        Size::new(max_bounds.width, max_bounds.height - image_size.height)
    } else {
        Size::new(max_bounds.width - image_size.width, max_bounds.height)
    };
    let text_size = measure_label(options, measurer, max_text_size, WordWrap::Allowed)?;

    // Stack text and image along the relation axis.
    let combined_size = if relation.is_vertical() {
        Size::new(
            text_size.width.max(image_size.width),
            text_size.height + image_size.height,
        )
    } else {
        Size::new(
            text_size.width + image_size.width,
            text_size.height.max(image_size.height),
        )
    };
    let max_combined_bounds = max_bounds.with_size(max_bounds.size().union(combined_size));
    let combined_bounds = ContentAlignment::MiddleCenter.align(combined_size, max_combined_bounds);

    let strategy = SplitStrategy::choose(orientation, image_edge);
    tracing::trace!(?strategy, ?text_size, ?combined_bounds, "coupled text and image");

    let (image_region, text_region) = match strategy {
        SplitStrategy::ImageEdge => region::split(max_combined_bounds, image_size, image_edge),
        SplitStrategy::TextEdge => {
            let (text_region, image_region) =
                region::split(max_combined_bounds, text_size, image_edge.opposite());
            (image_region, text_region)
        }
        SplitStrategy::Centered => {
            let (image_region, text_region) = region::split(combined_bounds, image_size, image_edge);
            region::expand_to_fill(max_combined_bounds, image_edge, image_region, text_region)
        }
    };

    Ok((
        orientation.image_align.align(image_size, image_region),
        orientation.text_align.align(text_size, text_region),
    ))
}

/// Corrective clipping applied after the split.
///
/// Text is clipped to the field while the image is left at its size; images
/// that overflow are clipped by the renderer rather than scaled.
fn clip(
    options: &LayoutOptions,
    relation: TextImageRelation,
    field: Rect,
    max_bounds: Rect,
    mut image: Rect,
    mut text: Rect,
) -> TextImagePlacement {
    if relation.is_horizontal() {
        // Keep the text vertically inside the field, favoring the center.
        let bottom = text.bottom().min(field.bottom());
        text.y = text
            .y
            .min(field.y + (field.height - text.height) / 2)
            .max(field.y);
        text.height = bottom - text.y;
    }
    if relation.is_vertical() {
        let right = text.right().min(field.right());
        text.x = text
            .x
            .min(field.x + (field.width - text.width) / 2)
            .max(field.x);
        text.width = right - text.x;
    }

    // Shrink an oversized image so the text stays visible.
    if relation == TextImageRelation::ImageBeforeText && image.width != 0 {
        image.width = (max_bounds.width - text.width).min(image.width).max(0);
        text.x = image.right();
    }
    if relation == TextImageRelation::ImageAboveText && image.height != 0 {
        image.height = (max_bounds.height - text.height).min(image.height).max(0);
        text.y = image.bottom();
    }

    text = text
        .intersect(&field)
        .unwrap_or(Rect::new(field.x, field.y, 0, 0));

    if options.hint_text_up {
        text = text.offset(0, -1);
    }
    if options.text_offset {
        text = text.offset(1, 1);
    }

    let mut image_start = None;
    if options.legacy_pixel_compat {
        image_start = Some(image.location());
        image = image
            .intersect(&field)
            .unwrap_or(Rect::new(image.x, image.y, 0, 0));
    } else if !options.render_with_visual_styles {
        // Unthemed rendering draws text one pixel further left.
        text = text.offset(1, 0);
    }

    // The native renderer may ignore the proposed height, so clip against
    // the inset bounds; the compatible renderer clips against the field.
    let clip_to = if options.use_compatible_text_rendering {
        field
    } else {
        max_bounds
    };
    let bottom = text.bottom().min(clip_to.bottom());
    // Inset bounds of a field thinner than twice the inset start below it.
    text.y = text.y.max(clip_to.y).min(field.bottom());
    text.height = (bottom - text.y).max(0);

    TextImagePlacement {
        image_bounds: image,
        image_start,
        text_bounds: text,
        max_bounds,
    }
}
