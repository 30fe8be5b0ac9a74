//! Layout calculation for the label sheet
//!
//! This module handles all the geometry shared by the renderers:
//! - Page and grid measurements
//! - Cell positions (linear index to row/column to centimeters)
//! - The layout plan consumed by the screen and PDF renderers

mod grid;
mod plan;
mod types;

pub use grid::*;
pub use plan::*;
pub use types::*;
