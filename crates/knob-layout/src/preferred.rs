//! Preferred size of the composite.

use knob_core::{LayoutError, Size};

use crate::composition::AxisCompositions;
use crate::options::LayoutOptions;
use crate::rtl::Orientation;
use crate::text::{measure_label, TextMeasurer, WordWrap};

/// Compute the smallest size that fits check, image and text without
/// wrapping the label.
///
/// `proposed` is an upper bound; pass [`Size::UNBOUNDED`] when the caller
/// does not care. The label is measured once, with word breaking turned off
/// for that call, so the result reflects the single-line width. Explicit line
/// breaks in the label still produce multiple lines.
pub fn preferred_size<M: TextMeasurer + ?Sized>(
    options: &LayoutOptions,
    measurer: &M,
    proposed: Size,
) -> Result<Size, LayoutError> {
    let orientation = Orientation::resolve(options);

    let mut linear_border_and_padding = options.border_size * 2 + options.padding_size * 2;
    if options.grow_border_by_1px_when_default {
        linear_border_and_padding += 2;
    }
    let border_and_padding = Size::square(linear_border_and_padding);
    let proposed = proposed - border_and_padding;

    // The check column keeps one pixel of separation, as in the carve.
    let check = match options.full_check_size() {
        extent if extent > 0 => Size::new(extent + 1, extent),
        _ => Size::ZERO,
    };

    let inset = Size::square(options.text_image_inset * 2);
    let required_image = if options.has_image() {
        options.image_size + inset
    } else {
        Size::ZERO
    };

    let modes = AxisCompositions::new(orientation.check_align, orientation.relation);
    let text_budget = modes.decompose(check, required_image, proposed - inset);

    let text = if options.text.is_empty() {
        Size::ZERO
    } else {
        measure_label(options, measurer, text_budget, WordWrap::Suppressed)? + inset
    };

    let required = modes.compose(check, options.image_size, text) + border_and_padding;
    tracing::debug!(?modes, ?text_budget, ?text, ?required, "preferred size");
    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{EstimatedMeasurer, MeasureRequest, TextFormatFlags};
    use glam::Vec2;
    use knob_core::{ContentAlignment, MeasureError, TextImageRelation};
    use std::cell::RefCell;

    struct Recording {
        requests: RefCell<Vec<(Size, TextFormatFlags)>>,
    }

    impl TextMeasurer for Recording {
        fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError> {
            self.requests
                .borrow_mut()
                .push((request.proposed, request.flags));
            EstimatedMeasurer.measure(request)
        }
    }

    struct Failing;

    impl TextMeasurer for Failing {
        fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError> {
            Err(MeasureError::FontUnavailable {
                family: request.style.font_family.clone(),
            })
        }
    }

    #[test]
    fn test_text_only() {
        // "OK" at 16px measures 18x20; the inset adds 4 on each axis.
        let options = LayoutOptions::default().with_text("OK");
        let size = preferred_size(&options, &EstimatedMeasurer, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Size::new(22, 24));
    }

    #[test]
    fn test_border_and_padding_footprint() {
        let options = LayoutOptions::default()
            .with_text("OK")
            .with_border(1)
            .with_padding(1);
        let size = preferred_size(&options, &EstimatedMeasurer, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Size::new(26, 28));

        // The grow flag counts even when the control is not the default.
        let grown = options.with_default_border(false, true);
        let size = preferred_size(&grown, &EstimatedMeasurer, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Size::new(28, 30));
    }

    #[test]
    fn test_check_image_and_text_side_by_side() {
        let options = LayoutOptions::default()
            .with_text("OK")
            .with_check(13, 0, ContentAlignment::MiddleLeft)
            .with_image(Size::new(16, 16), ContentAlignment::MiddleLeft)
            .with_relation(TextImageRelation::ImageBeforeText);
        let size = preferred_size(&options, &EstimatedMeasurer, Size::UNBOUNDED).unwrap();
        // 14 (check column) + 16 (raw image) + 22 (text with inset)
        assert_eq!(size, Size::new(52, 24));
    }

    #[test]
    fn test_image_above_text_stacks_vertically() {
        let options = LayoutOptions::default()
            .with_text("OK")
            .with_image(Size::new(16, 16), ContentAlignment::TopCenter)
            .with_relation(TextImageRelation::ImageAboveText);
        let size = preferred_size(&options, &EstimatedMeasurer, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Size::new(22, 40));
    }

    #[test]
    fn test_no_text_skips_measurement() {
        let options = LayoutOptions::default().with_image(Size::new(16, 16), ContentAlignment::MiddleCenter);
        let measurer = Recording {
            requests: RefCell::new(Vec::new()),
        };
        let size = preferred_size(&options, &measurer, Size::UNBOUNDED).unwrap();
        assert_eq!(size, Size::new(16, 16));
        assert!(measurer.requests.borrow().is_empty());
    }

    #[test]
    fn test_explicit_break_is_honoured_without_width_wrapping() {
        let options = LayoutOptions::default().with_text("Line one\nLine two");
        let measurer = Recording {
            requests: RefCell::new(Vec::new()),
        };
        let size = preferred_size(&options, &measurer, Size::new(60, 200)).unwrap();

        // Two lines of 19.2px, each 8 characters of 8.8px, plus the inset.
        // A wrapping measurement would have split each line at 56px.
        assert_eq!(size, Size::new(75, 43));

        let requests = measurer.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Size::new(56, 196));
        assert!(!requests[0].1.contains(TextFormatFlags::WORD_BREAK));
    }

    #[test]
    fn test_suppression_does_not_leak_into_options() {
        let options = LayoutOptions::default().with_text("Label");
        preferred_size(&options, &Failing, Size::UNBOUNDED).unwrap_err();
        assert!(options.text_format.contains(TextFormatFlags::WORD_BREAK));
    }

    #[test]
    fn test_measure_failure_propagates() {
        let options = LayoutOptions::default().with_text("Label");
        let err = preferred_size(&options, &Failing, Size::UNBOUNDED).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Measure(MeasureError::FontUnavailable { .. })
        ));
    }
}
