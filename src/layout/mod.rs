//! Layout module: box geometry shared by grids and modules.
//!
//! Boxes are always caller-specified; nothing here computes a layout.

mod rect;

pub use rect::{Pos, Rect, Shape};
