//! Text measurement for layout.
//!
//! Layout never shapes text itself. It asks a [`TextMeasurer`] for the extent
//! of the label and treats the answer as opaque. [`EstimatedMeasurer`] is a
//! deterministic stand-in for headless use and tests.

use bitflags::bitflags;
use glam::Vec2;
use knob_core::{MeasureError, Size};

use crate::options::LayoutOptions;

/// Font description passed through to the measurer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    /// Font family
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// Font weight (100-900, normal=400, bold=700)
    pub font_weight: u16,
    /// Line height as a multiplier (e.g., 1.5 = 150%)
    pub line_height: f64,
    /// Letter spacing in pixels
    pub letter_spacing: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            font_weight: 400,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }
}

bitflags! {
    /// Formatting requested from the measurement backend.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TextFormatFlags: u32 {
        /// Break lines at word boundaries when the proposed width is exceeded.
        const WORD_BREAK = 0x0010;
        /// Ignore explicit line breaks.
        const SINGLE_LINE = 0x0020;
        /// Render `&` literally instead of as a mnemonic prefix.
        const NO_PREFIX = 0x0800;
        /// Match edit control line metrics.
        const TEXT_BOX_CONTROL = 0x2000;
        /// Truncate overflowing text with an ellipsis.
        const END_ELLIPSIS = 0x8000;
    }
}

impl Default for TextFormatFlags {
    fn default() -> Self {
        TextFormatFlags::WORD_BREAK | TextFormatFlags::TEXT_BOX_CONTROL
    }
}

/// Which rendering stack the text will be drawn with.
///
/// Both stacks measure slightly differently; layout keeps pixel parity with
/// whichever one the caller selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBackend {
    Native,
    Compatible,
}

/// Whether a measurement may wrap at word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWrap {
    Allowed,
    /// Explicit line breaks are still honoured.
    Suppressed,
}

/// A single measurement call.
#[derive(Debug, Clone, Copy)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    pub style: &'a TextStyle,
    /// Upper bound for the measured extent.
    pub proposed: Size,
    pub flags: TextFormatFlags,
    pub backend: TextBackend,
}

/// Measures text extents on behalf of the layout.
///
/// Implementations that need a device context or similar resource should
/// acquire it inside `measure` behind a guard so it is released on every
/// return path.
pub trait TextMeasurer {
    /// Return the extent of `request.text` in fractional pixels.
    fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError>;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError> {
        (**self).measure(request)
    }
}

/// Measure the label of `options` against `proposed`.
///
/// Vertical text swaps the axes on the way in and out. The native backend
/// is skipped for empty text; the compatible backend is always consulted.
pub(crate) fn measure_label<M: TextMeasurer + ?Sized>(
    options: &LayoutOptions,
    measurer: &M,
    proposed: Size,
    wrap: WordWrap,
) -> Result<Size, MeasureError> {
    let proposed = proposed.flip_if(options.vertical_text);
    let backend = if options.use_compatible_text_rendering {
        TextBackend::Compatible
    } else {
        TextBackend::Native
    };

    if backend == TextBackend::Native && options.text.is_empty() {
        return Ok(Size::ZERO);
    }

    let mut flags = options.text_format;
    if wrap == WordWrap::Suppressed {
        flags.remove(TextFormatFlags::WORD_BREAK);
    }

    let request = MeasureRequest {
        text: &options.text,
        style: &options.font,
        proposed,
        flags,
        backend,
    };
    let extent = measurer.measure(&request)?;
    tracing::trace!(?proposed, ?flags, ?backend, ?extent, "measured label");

    Ok(Size::ceil(extent).flip_if(options.vertical_text))
}

/// Measured text metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMetrics {
    /// Width of the text
    pub width: f64,
    /// Height of the text (including line height)
    pub height: f64,
    /// Number of lines
    pub lines: u32,
}

/// Measure text with the given style.
///
/// Character-count estimation rather than real shaping. Explicit `\n` breaks
/// always start a new line; `max_width` additionally wraps at word
/// boundaries.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<f64>) -> TextMetrics {
    if text.is_empty() {
        return TextMetrics::default();
    }

    let avg_char_width = estimate_char_width(style);
    let line_height = style.font_size * style.line_height;

    let mut widths: Vec<f64> = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        match max_width {
            Some(max_w) if max_w > 0.0 => {
                wrap_paragraph(paragraph, max_w, avg_char_width, &mut widths)
            }
            _ => widths.push(paragraph.chars().count() as f64 * avg_char_width),
        }
    }

    let num_lines = widths.len().max(1) as u32;
    let max_line_width = widths.iter().copied().fold(0.0_f64, f64::max);

    TextMetrics {
        width: max_line_width,
        height: num_lines as f64 * line_height,
        lines: num_lines,
    }
}

fn estimate_char_width(style: &TextStyle) -> f64 {
    // Average character width is roughly 0.5-0.6 of font size for proportional fonts
    style.font_size * 0.55 + style.letter_spacing
}

fn wrap_paragraph(paragraph: &str, max_width: f64, avg_char_width: f64, widths: &mut Vec<f64>) {
    let space_width = avg_char_width;
    let mut current_line_width = 0.0;
    let mut words = 0usize;

    for word in paragraph.split_whitespace() {
        let word_width = word.chars().count() as f64 * avg_char_width;

        if words == 0 {
            current_line_width = word_width;
        } else if current_line_width + space_width + word_width <= max_width {
            current_line_width += space_width + word_width;
        } else {
            widths.push(current_line_width);
            current_line_width = word_width;
        }
        words += 1;
    }

    // A blank paragraph still occupies a line.
    widths.push(current_line_width);
}

/// Character-width estimating measurer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasurer;

impl TextMeasurer for EstimatedMeasurer {
    fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError> {
        let folded;
        let text = if request.flags.contains(TextFormatFlags::SINGLE_LINE) {
            folded = request.text.replace(['\r', '\n'], " ");
            folded.as_str()
        } else {
            request.text
        };

        let max_width = request
            .flags
            .contains(TextFormatFlags::WORD_BREAK)
            .then_some(request.proposed.width as f64);
        let metrics = measure_text(text, request.style, max_width);

        Ok(Vec2::new(metrics.width as f32, metrics.height as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_measure_empty_text() {
        let metrics = measure_text("", &TextStyle::default(), None);
        assert!(metrics.width < 0.001);
        assert!(metrics.height < 0.001);
    }

    #[test]
    fn test_measure_single_line() {
        let style = TextStyle {
            font_size: 16.0,
            ..Default::default()
        };
        let metrics = measure_text("Hello", &style, None);
        assert!((metrics.width - 44.0).abs() < 0.001);
        assert_eq!(metrics.lines, 1);
    }

    #[test]
    fn test_measure_wrapped_text() {
        let style = TextStyle::default();
        let text = "Hello world this is a longer piece of text";
        let metrics = measure_text(text, &style, Some(100.0));
        assert!(metrics.lines > 1);
        assert!(metrics.width <= 100.0);
    }

    #[test]
    fn test_explicit_breaks_without_wrapping() {
        let style = TextStyle::default();
        let metrics = measure_text("first line\nsecond", &style, None);
        assert_eq!(metrics.lines, 2);
        assert!((metrics.width - 10.0 * 8.8).abs() < 0.001);
    }

    #[test]
    fn test_single_line_flag_folds_breaks() {
        let style = TextStyle::default();
        let request = MeasureRequest {
            text: "a\nb",
            style: &style,
            proposed: Size::UNBOUNDED,
            flags: TextFormatFlags::SINGLE_LINE,
            backend: TextBackend::Native,
        };
        let extent = EstimatedMeasurer.measure(&request).unwrap();
        assert!((extent.y - 19.2).abs() < 0.001);
    }

    struct Recording {
        calls: RefCell<Vec<(Size, TextFormatFlags, TextBackend)>>,
    }

    impl TextMeasurer for Recording {
        fn measure(&self, request: &MeasureRequest<'_>) -> Result<Vec2, MeasureError> {
            self.calls
                .borrow_mut()
                .push((request.proposed, request.flags, request.backend));
            Ok(Vec2::new(10.5, 4.0))
        }
    }

    fn recording() -> Recording {
        Recording {
            calls: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_native_backend_skips_empty_text() {
        let options = LayoutOptions::default();
        let measurer = recording();
        let size = measure_label(&options, &measurer, Size::new(50, 50), WordWrap::Allowed).unwrap();
        assert_eq!(size, Size::ZERO);
        assert!(measurer.calls.borrow().is_empty());
    }

    #[test]
    fn test_compatible_backend_measures_empty_text() {
        let options = LayoutOptions::default().with_compatible_text_rendering(true);
        let measurer = recording();
        let size = measure_label(&options, &measurer, Size::new(50, 50), WordWrap::Allowed).unwrap();
        assert_eq!(size, Size::new(11, 4));
        assert_eq!(measurer.calls.borrow()[0].2, TextBackend::Compatible);
    }

    #[test]
    fn test_suppressed_wrap_drops_word_break() {
        let options = LayoutOptions::default().with_text("Label");
        let measurer = recording();
        measure_label(&options, &measurer, Size::new(50, 50), WordWrap::Suppressed).unwrap();
        measure_label(&options, &measurer, Size::new(50, 50), WordWrap::Allowed).unwrap();
        let calls = measurer.calls.borrow();
        assert!(!calls[0].1.contains(TextFormatFlags::WORD_BREAK));
        assert!(calls[0].1.contains(TextFormatFlags::TEXT_BOX_CONTROL));
        assert!(calls[1].1.contains(TextFormatFlags::WORD_BREAK));
    }

    #[test]
    fn test_vertical_text_flips_axes() {
        let options = LayoutOptions::default()
            .with_text("Label")
            .with_vertical_text(true);
        let measurer = recording();
        let size = measure_label(&options, &measurer, Size::new(80, 30), WordWrap::Allowed).unwrap();
        assert_eq!(measurer.calls.borrow()[0].0, Size::new(30, 80));
        assert_eq!(size, Size::new(4, 11));
    }
}
