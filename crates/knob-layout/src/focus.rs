//! Focus indicator placement.

use knob_core::Rect;

use crate::options::LayoutOptions;

/// Derive the focus rectangle from the placed content.
///
/// With `max_focus` the indicator hugs the field; otherwise it surrounds the
/// text (and the image, when there is one). The odd/even fixup makes both
/// dimensions odd so a dotted border starts and ends on a dot.
pub fn focus_rectangle(options: &LayoutOptions, field: Rect, text_bounds: Rect, image_bounds: Rect) -> Rect {
    let mut focus = if options.max_focus {
        field.inset(1).inflate_by(options.focus_padding)
    } else {
        let text = Rect::new(
            text_bounds.x - 1,
            text_bounds.y - 1,
            text_bounds.width + 2,
            text_bounds.height + 3,
        );
        if options.has_image() {
            text.union(&image_bounds)
        } else {
            text
        }
    };

    if options.focus_odd_even_fixup {
        if focus.height % 2 == 0 {
            focus.y += 1;
            focus.height -= 1;
        }
        if focus.width % 2 == 0 {
            focus.x += 1;
            focus.width -= 1;
        }
    }
    focus
}
