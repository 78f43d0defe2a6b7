//! # cellgrid
//!
//! A character-grid display toolkit.
//!
//! A [`RootGrid`] owns a rectangular buffer of cells (a code point, two
//! colors and attribute flags each) and the [`Backend`] that shows it.
//! [`SubGrid`]s are windows into that buffer with their own coordinates.
//! A [`ModuleTree`] composes widgets over nested sub-grids, routes input
//! events to them and drives their tick/draw lifecycle.
//!
//! ## Core Concepts
//!
//! - **One buffer per display**: every sub-grid write lands in the root buffer
//! - **Relative coordinates**: offsets compose on access, so boxes nest freely
//! - **Front-most first**: later siblings see events first and draw last
//! - **Incremental output**: the terminal backend redraws only changed cells
//!
//! ## Example
//!
//! ```rust
//! use cellgrid::{Grid, ModuleTree, RootGrid};
//! use cellgrid::widget::{BorderModule, TextInputModule};
//!
//! let root = RootGrid::headless((5, 20));
//! let mut tree = ModuleTree::new(&root)?;
//! let top = tree.root();
//! let border = BorderModule::attach(&mut tree, top, None, BorderModule::new(1))?;
//! let inner = BorderModule::inner_box(&tree, border)?;
//! tree.add(top, inner, TextInputModule::new("hello"))?;
//!
//! tree.draw()?;
//! tree.flush()?;
//! assert_eq!(root.row_text(1)?, "│hello             │");
//! # Ok::<(), cellgrid::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod event;
pub mod glyph;
pub mod grid;
pub mod layout;
pub mod module;
pub mod runtime;
pub mod terminal;
pub mod util;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Attrs, CellBuffer, CellView, Rgb, Style};
pub use error::{Error, Result};
pub use event::{Event, Key, KeyEvent, KeyMod, MouseEvent};
pub use glyph::{Glyph, GlyphRegistry};
pub use grid::{Backend, Grid, HeadlessBackend, RootGrid, SubGrid};
pub use layout::{Pos, Rect, Shape};
pub use module::{Blank, ModuleId, ModuleTree, Widget};
pub use runtime::{RunConfig, Runner, StopHandle};
pub use terminal::{TermBackend, TermConfig};
pub use util::format_time;
