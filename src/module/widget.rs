//! Widget trait: the behaviour carried by a module tree node.

use crate::error::Result;
use crate::event::Event;
use crate::grid::SubGrid;
use std::any::Any;

/// Behaviour attached to a node of a [`ModuleTree`](super::ModuleTree).
///
/// Every hook has a no-op default, so a widget only implements what it
/// needs. The tree calls the hooks only while the node is active, parents
/// before children.
pub trait Widget: Any {
    /// Advance per-frame state.
    fn tick(&mut self) {}

    /// Render into the node's grid.
    fn draw(&mut self, grid: &SubGrid) -> Result<()> {
        let _ = grid;
        Ok(())
    }

    /// React to an event in the node's coordinates.
    ///
    /// Returns `true` if the event was consumed, `false` to let it reach
    /// the next candidate.
    fn handle_event(&mut self, event: &Event) -> bool {
        let _ = event;
        false
    }
}

/// A widget with no behaviour, used for plain grouping nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blank;

impl Widget for Blank {}
