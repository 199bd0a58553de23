//! Content alignment and text/image relation values.

use crate::errors::LayoutError;
use crate::geometry::{Rect, Size};

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// The axis along which this edge is crossed.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Vertical band of a 3x3 alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

/// Horizontal band of a 3x3 alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub fn mirrored(self) -> Column {
        match self {
            Column::Left => Column::Right,
            Column::Center => Column::Center,
            Column::Right => Column::Left,
        }
    }
}

/// Placement of content within a rectangle.
///
/// Discriminants match the numeric values used by persisted control
/// definitions, see [`ContentAlignment::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ContentAlignment {
    TopLeft = 0x001,
    TopCenter = 0x002,
    TopRight = 0x004,
    MiddleLeft = 0x010,
    #[default]
    MiddleCenter = 0x020,
    MiddleRight = 0x040,
    BottomLeft = 0x100,
    BottomCenter = 0x200,
    BottomRight = 0x400,
}

impl ContentAlignment {
    pub const ALL: [ContentAlignment; 9] = [
        ContentAlignment::TopLeft,
        ContentAlignment::TopCenter,
        ContentAlignment::TopRight,
        ContentAlignment::MiddleLeft,
        ContentAlignment::MiddleCenter,
        ContentAlignment::MiddleRight,
        ContentAlignment::BottomLeft,
        ContentAlignment::BottomCenter,
        ContentAlignment::BottomRight,
    ];

    pub fn from_parts(row: Row, column: Column) -> Self {
        use ContentAlignment::*;
        match (row, column) {
            (Row::Top, Column::Left) => TopLeft,
            (Row::Top, Column::Center) => TopCenter,
            (Row::Top, Column::Right) => TopRight,
            (Row::Middle, Column::Left) => MiddleLeft,
            (Row::Middle, Column::Center) => MiddleCenter,
            (Row::Middle, Column::Right) => MiddleRight,
            (Row::Bottom, Column::Left) => BottomLeft,
            (Row::Bottom, Column::Center) => BottomCenter,
            (Row::Bottom, Column::Right) => BottomRight,
        }
    }

    pub fn row(self) -> Row {
        use ContentAlignment::*;
        match self {
            TopLeft | TopCenter | TopRight => Row::Top,
            MiddleLeft | MiddleCenter | MiddleRight => Row::Middle,
            BottomLeft | BottomCenter | BottomRight => Row::Bottom,
        }
    }

    pub fn column(self) -> Column {
        use ContentAlignment::*;
        match self {
            TopLeft | MiddleLeft | BottomLeft => Column::Left,
            TopCenter | MiddleCenter | BottomCenter => Column::Center,
            TopRight | MiddleRight | BottomRight => Column::Right,
        }
    }

    /// True when content with this alignment sits flush against `edge`.
    pub fn touches(self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.row() == Row::Top,
            Edge::Bottom => self.row() == Row::Bottom,
            Edge::Left => self.column() == Column::Left,
            Edge::Right => self.column() == Column::Right,
        }
    }

    /// Swap left and right anchoring within the same row.
    pub fn mirrored(self) -> Self {
        Self::from_parts(self.row(), self.column().mirrored())
    }

    /// Place a box of `size` inside `within`.
    ///
    /// The result takes `size` exactly, even when it is larger than `within`;
    /// centering truncates toward zero.
    pub fn align(self, size: Size, within: Rect) -> Rect {
        let x = match self.column() {
            Column::Left => within.x,
            Column::Center => within.x + (within.width - size.width) / 2,
            Column::Right => within.x + within.width - size.width,
        };
        let y = match self.row() {
            Row::Top => within.y,
            Row::Middle => within.y + (within.height - size.height) / 2,
            Row::Bottom => within.y + within.height - size.height,
        };
        Rect::new(x, y, size.width, size.height)
    }
}

impl TryFrom<u32> for ContentAlignment {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ContentAlignment::ALL
            .into_iter()
            .find(|align| *align as u32 == value)
            .ok_or(LayoutError::InvalidAlignment { value })
    }
}

/// How the image and the text are arranged relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum TextImageRelation {
    /// Image and text are aligned independently and may overlap.
    #[default]
    Overlay = 0x0,
    ImageAboveText = 0x1,
    TextAboveImage = 0x2,
    ImageBeforeText = 0x4,
    TextBeforeImage = 0x8,
}

impl TextImageRelation {
    pub const ALL: [TextImageRelation; 5] = [
        TextImageRelation::Overlay,
        TextImageRelation::ImageAboveText,
        TextImageRelation::TextAboveImage,
        TextImageRelation::ImageBeforeText,
        TextImageRelation::TextBeforeImage,
    ];

    /// The side of the combined region that the image occupies.
    pub fn image_edge(self) -> Option<Edge> {
        match self {
            TextImageRelation::Overlay => None,
            TextImageRelation::ImageAboveText => Some(Edge::Top),
            TextImageRelation::TextAboveImage => Some(Edge::Bottom),
            TextImageRelation::ImageBeforeText => Some(Edge::Left),
            TextImageRelation::TextBeforeImage => Some(Edge::Right),
        }
    }

    /// The side of the combined region that the text occupies.
    pub fn text_edge(self) -> Option<Edge> {
        self.image_edge().map(Edge::opposite)
    }

    /// Swap the roles of image and text.
    pub fn opposite(self) -> Self {
        match self {
            TextImageRelation::Overlay => TextImageRelation::Overlay,
            TextImageRelation::ImageAboveText => TextImageRelation::TextAboveImage,
            TextImageRelation::TextAboveImage => TextImageRelation::ImageAboveText,
            TextImageRelation::ImageBeforeText => TextImageRelation::TextBeforeImage,
            TextImageRelation::TextBeforeImage => TextImageRelation::ImageBeforeText,
        }
    }

    /// Before/after relations.
    pub fn is_horizontal(self) -> bool {
        self.image_edge().map(Edge::axis) == Some(Axis::Horizontal)
    }

    /// Above/below relations.
    pub fn is_vertical(self) -> bool {
        self.image_edge().map(Edge::axis) == Some(Axis::Vertical)
    }

    /// Reading-direction mirror: only the before/after pair swaps.
    pub fn mirrored(self) -> Self {
        if self.is_horizontal() {
            self.opposite()
        } else {
            self
        }
    }
}

impl TryFrom<u32> for TextImageRelation {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        TextImageRelation::ALL
            .into_iter()
            .find(|relation| *relation as u32 == value)
            .ok_or(LayoutError::InvalidRelation { value })
    }
}
