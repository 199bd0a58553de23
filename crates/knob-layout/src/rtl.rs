//! Right-to-left translation of alignments and relation.

use knob_core::{ContentAlignment, TextImageRelation};

use crate::options::LayoutOptions;

/// Alignments and relation after reading-direction translation.
///
/// Resolved once per layout call; placement code only ever sees these
/// values, never the raw ones in [`LayoutOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub check_align: ContentAlignment,
    pub image_align: ContentAlignment,
    pub text_align: ContentAlignment,
    pub relation: TextImageRelation,
}

impl Orientation {
    pub fn resolve(options: &LayoutOptions) -> Self {
        let rtl = options.layout_rtl;
        Self {
            check_align: translate_alignment(options.check_align, rtl),
            image_align: translate_alignment(options.image_align, rtl),
            text_align: translate_alignment(options.text_align, rtl),
            relation: translate_relation(options.text_image_relation, rtl),
        }
    }
}

/// Mirror left/right anchoring when `rtl` is set.
pub fn translate_alignment(align: ContentAlignment, rtl: bool) -> ContentAlignment {
    if rtl {
        align.mirrored()
    } else {
        align
    }
}

/// Swap before/after relations when `rtl` is set. Above/below and overlay
/// do not depend on reading direction.
pub fn translate_relation(relation: TextImageRelation, rtl: bool) -> TextImageRelation {
    if rtl {
        relation.mirrored()
    } else {
        relation
    }
}
