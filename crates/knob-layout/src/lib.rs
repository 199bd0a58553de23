//! Check, image and text layout for button-like controls.
//!
//! Given a control's bounds and content, this crate computes where the
//! check glyph, the image and the text label go, where the focus indicator
//! is drawn, and how large the control would like to be.
//!
//! # Architecture
//!
//! 1. **Reading direction**: alignments and relation are mirrored once for RTL
//! 2. **Check placement**: the check carves a column or row out of the field
//! 3. **Text and image**: the remaining field is split between image and text
//! 4. **Focus**: derived from the placed content or the whole field
//! 5. **Preferred size**: the composition algebra run in reverse
//!
//! Text is never shaped here; a [`TextMeasurer`] supplied by the caller
//! reports label extents.
//!
//! # Example
//!
//! ```ignore
//! use knob_layout::{compute_layout, EstimatedMeasurer, LayoutOptions};
//! use knob_core::{ContentAlignment, Rect, Size, TextImageRelation};
//!
//! let options = LayoutOptions::new(Rect::new(0, 0, 120, 32))
//!     .with_text("Submit")
//!     .with_image(Size::new(16, 16), ContentAlignment::MiddleLeft)
//!     .with_relation(TextImageRelation::ImageBeforeText);
//!
//! let layout = compute_layout(&options, &EstimatedMeasurer)?;
//! println!("text at {:?}, focus {:?}", layout.text_bounds, layout.focus);
//! ```

mod checkmark;
mod composition;
mod compute;
mod data;
mod focus;
mod options;
mod preferred;
mod rtl;
mod text;
mod text_image;

pub use checkmark::{place_checkmark, CheckPlacement};
pub use composition::{check_reservation, AxisCompositions, Composition};
pub use compute::compute_layout;
pub use data::LayoutData;
pub use focus::focus_rectangle;
pub use options::LayoutOptions;
pub use preferred::preferred_size;
pub use rtl::{translate_alignment, translate_relation, Orientation};
pub use text::{
    measure_text, EstimatedMeasurer, MeasureRequest, TextBackend, TextFormatFlags, TextMeasurer,
    TextMetrics, TextStyle, WordWrap,
};
pub use text_image::{place_text_and_image, SplitStrategy, TextImagePlacement};
