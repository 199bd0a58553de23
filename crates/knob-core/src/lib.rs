//! Core types for the knob layout engine.
//!
//! This crate provides the value types shared by the layout crates:
//! - Integer pixel geometry (points, sizes, rectangles, padding)
//! - Region splitting used to pair an image with a text label
//! - Content alignment and text/image relation enums
//! - Error types

pub mod alignment;
pub mod errors;
pub mod geometry;
pub mod region;

pub use alignment::*;
pub use errors::*;
pub use geometry::*;
