//! Error types for the knob layout engine.

use thiserror::Error;

/// Errors during layout computation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid content alignment value: {value:#05x}")]
    InvalidAlignment { value: u32 },

    #[error("Invalid text/image relation value: {value:#x}")]
    InvalidRelation { value: u32 },

    #[error("Text measurement failed: {0}")]
    Measure(#[from] MeasureError),
}

/// Errors reported by a text measurement backend.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("Measurement backend failed: {reason}")]
    Backend { reason: String },

    #[error("Font unavailable: {family}")]
    FontUnavailable { family: String },
}
