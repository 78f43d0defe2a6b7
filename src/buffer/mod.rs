//! Buffer module: the cell storage every display tree renders into.
//!
//! This module contains:
//! - [`CellBuffer`]: parallel code point / color / attribute arrays
//! - [`Rgb`]: True-color representation
//! - [`Attrs`]: Text style bitflags
//! - [`Style`]: optional color/attribute writes for `fill` and `print`
//! - [`diff`]: Diffing engine for generating minimal ANSI sequences

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use cell::{Attrs, CellView, Rgb, SPACE, Style};
pub use buffer::CellBuffer;
