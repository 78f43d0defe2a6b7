//! Built-in widgets.
//!
//! Each widget is an ordinary [`Widget`](crate::module::Widget) added to a
//! [`ModuleTree`](crate::module::ModuleTree):
//!
//! - [`KeyTrigger`] / [`ButtonTrigger`]: run a callback on matching input.
//! - [`TabModule`]: keep exactly one of several modules running.
//! - [`TextInputModule`]: single-line text editing.
//! - [`BorderModule`]: box outlines around a region.
//! - [`FpsMeter`]: smoothed frame-rate readout.
//!
//! # Example
//!
//! ```rust
//! use cellgrid::event::{Key, KeyMod};
//! use cellgrid::grid::RootGrid;
//! use cellgrid::layout::Rect;
//! use cellgrid::module::ModuleTree;
//! use cellgrid::widget::{KeyTrigger, TextInputModule};
//!
//! let root = RootGrid::headless((10, 40));
//! let mut tree = ModuleTree::new(&root)?;
//! let input = tree.add(tree.root(), Rect::new(0, 0, 1, 40), TextInputModule::new("hi"))?;
//! tree.add_fill(tree.root(), KeyTrigger::new(Key::Char('q'), KeyMod::CTRL, || {}))?;
//! assert_eq!(tree.widget::<TextInputModule>(input).unwrap().to_string(), "hi");
//! # Ok::<(), cellgrid::Error>(())
//! ```

mod border;
mod fps_meter;
mod tab;
mod text_input;
mod trigger;

pub use border::{BorderChars, BorderConfig, BorderModule, BorderStyle};
pub use fps_meter::{FpsConfig, FpsMeter};
pub use tab::TabModule;
pub use text_input::{TextInputConfig, TextInputModule};
pub use trigger::{ButtonTrigger, KeyTrigger};
