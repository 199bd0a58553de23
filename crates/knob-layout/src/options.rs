//! Layout configuration.

use knob_core::{ContentAlignment, Padding, Rect, Size, TextImageRelation};

use crate::text::{TextFormatFlags, TextStyle};

/// Everything the layout needs to know about one control.
///
/// Built by the owning control for each layout request and read-only while
/// the layout runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Bounds of the whole control
    pub client: Rect,
    /// Width of the border drawn inside the client area
    pub border_size: i32,
    /// Spacing between border and content
    pub padding_size: i32,
    /// Grow the border by one pixel when the control is the default button
    pub grow_border_by_1px_when_default: bool,
    /// Whether the control is the default button of its window
    pub is_default: bool,

    /// Side length of the check glyph (0 = no check)
    pub check_size: i32,
    /// Space reserved around the check glyph
    pub check_padding_size: i32,
    pub check_align: ContentAlignment,

    pub image_size: Size,
    pub image_align: ContentAlignment,

    pub text: String,
    pub font: TextStyle,
    pub text_align: ContentAlignment,
    pub text_image_relation: TextImageRelation,
    /// Flags handed to the text measurer
    pub text_format: TextFormatFlags,
    /// Extra room around text and image for the 3D text and pushed-button offsets
    pub text_image_inset: i32,

    /// Focus the whole field instead of the content
    pub max_focus: bool,
    /// Force odd focus dimensions so a dotted border lines up
    pub focus_odd_even_fixup: bool,
    /// Applied to the field-sized focus rectangle
    pub focus_padding: Padding,

    pub layout_rtl: bool,
    pub vertical_text: bool,
    /// Nudge the text up one pixel
    pub hint_text_up: bool,
    /// Shift the text down and right one pixel (pressed look)
    pub text_offset: bool,

    /// Legacy one-pixel image alignment and image clipping
    pub legacy_pixel_compat: bool,
    /// Measure and clip for the compatible text renderer
    pub use_compatible_text_rendering: bool,
    /// Whether the host renders with visual styles
    pub render_with_visual_styles: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            client: Rect::default(),
            border_size: 0,
            padding_size: 0,
            grow_border_by_1px_when_default: false,
            is_default: false,
            check_size: 0,
            check_padding_size: 0,
            check_align: ContentAlignment::MiddleLeft,
            image_size: Size::ZERO,
            image_align: ContentAlignment::MiddleCenter,
            text: String::new(),
            font: TextStyle::default(),
            text_align: ContentAlignment::MiddleCenter,
            text_image_relation: TextImageRelation::Overlay,
            text_format: TextFormatFlags::default(),
            text_image_inset: 2,
            max_focus: false,
            focus_odd_even_fixup: false,
            focus_padding: Padding::default(),
            layout_rtl: false,
            vertical_text: false,
            hint_text_up: false,
            text_offset: false,
            legacy_pixel_compat: true,
            use_compatible_text_rendering: false,
            render_with_visual_styles: true,
        }
    }
}

impl LayoutOptions {
    /// Create options for a control occupying `client`.
    pub fn new(client: Rect) -> Self {
        Self {
            client,
            ..Default::default()
        }
    }

    pub fn with_client(mut self, client: Rect) -> Self {
        self.client = client;
        self
    }

    pub fn with_border(mut self, border_size: i32) -> Self {
        self.border_size = border_size;
        self
    }

    pub fn with_padding(mut self, padding_size: i32) -> Self {
        self.padding_size = padding_size;
        self
    }

    /// Mark the control as the default button and opt into the wider border.
    pub fn with_default_border(mut self, is_default: bool, grow: bool) -> Self {
        self.is_default = is_default;
        self.grow_border_by_1px_when_default = grow;
        self
    }

    pub fn with_check(mut self, size: i32, padding: i32, align: ContentAlignment) -> Self {
        self.check_size = size;
        self.check_padding_size = padding;
        self.check_align = align;
        self
    }

    pub fn with_image(mut self, size: Size, align: ContentAlignment) -> Self {
        self.image_size = size;
        self.image_align = align;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font(mut self, font: TextStyle) -> Self {
        self.font = font;
        self
    }

    pub fn with_text_align(mut self, align: ContentAlignment) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_relation(mut self, relation: TextImageRelation) -> Self {
        self.text_image_relation = relation;
        self
    }

    pub fn with_text_format(mut self, flags: TextFormatFlags) -> Self {
        self.text_format = flags;
        self
    }

    pub fn with_text_image_inset(mut self, inset: i32) -> Self {
        self.text_image_inset = inset;
        self
    }

    pub fn with_max_focus(mut self, max_focus: bool, padding: Padding) -> Self {
        self.max_focus = max_focus;
        self.focus_padding = padding;
        self
    }

    pub fn with_focus_odd_even_fixup(mut self, fixup: bool) -> Self {
        self.focus_odd_even_fixup = fixup;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.layout_rtl = rtl;
        self
    }

    pub fn with_vertical_text(mut self, vertical: bool) -> Self {
        self.vertical_text = vertical;
        self
    }

    pub fn with_hint_text_up(mut self, hint: bool) -> Self {
        self.hint_text_up = hint;
        self
    }

    pub fn with_text_offset(mut self, offset: bool) -> Self {
        self.text_offset = offset;
        self
    }

    pub fn with_legacy_pixel_compat(mut self, compat: bool) -> Self {
        self.legacy_pixel_compat = compat;
        self
    }

    pub fn with_compatible_text_rendering(mut self, compatible: bool) -> Self {
        self.use_compatible_text_rendering = compatible;
        self
    }

    pub fn with_visual_styles(mut self, visual_styles: bool) -> Self {
        self.render_with_visual_styles = visual_styles;
        self
    }

    /// Whether the default-button border grows by a pixel on each side.
    pub fn one_pixel_extra_border(&self) -> bool {
        self.grow_border_by_1px_when_default && self.is_default
    }

    /// Border width including the default-button pixel.
    pub fn full_border_size(&self) -> i32 {
        self.border_size + i32::from(self.one_pixel_extra_border())
    }

    /// Check glyph plus its padding; the linear extent reserved for the check.
    pub fn full_check_size(&self) -> i32 {
        self.check_size + self.check_padding_size
    }

    pub fn has_image(&self) -> bool {
        !self.image_size.is_zero()
    }
}
