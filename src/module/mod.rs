//! Module tree: composition, lifecycle and event routing.
//!
//! A [`ModuleTree`] owns every node of a display tree. Each node has a
//! [`SubGrid`] into the root buffer, an optional box in its parent's
//! coordinates, a paused flag and a [`Widget`] carrying its behaviour.
//!
//! Nodes are addressed by [`ModuleId`]. Parents own their submodules;
//! the back edge to the parent is only an id.

mod tree;
mod widget;

pub use tree::{ModuleId, ModuleTree};
pub use widget::{Blank, Widget};
