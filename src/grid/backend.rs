//! Backend trait: what a device must provide to sit under a root grid.

use crate::buffer::CellBuffer;
use crate::error::Result;
use crate::event::Event;
use crate::layout::Shape;
use std::collections::VecDeque;

/// A display device behind a [`RootGrid`](super::RootGrid).
///
/// Implementations translate raw input into [`Event`]s and reconcile the
/// logical buffer with what is physically shown. `draw` is expected to be
/// incremental: repaint everything the first time, then only what changed.
pub trait Backend {
    /// Physical size of the device in cells. May exceed the logical shape.
    fn real_shape(&self) -> Result<Shape>;

    /// Input gathered since the last call, in arrival order.
    fn events(&mut self) -> Result<Vec<Event>>;

    /// Show `buffer` on the device.
    fn draw(&mut self, buffer: &CellBuffer) -> Result<()>;
}

/// An in-memory backend.
///
/// It reports a fixed size, hands out events queued with
/// [`push_event`](Self::push_event), and keeps the last drawn frame.
#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    shape: Shape,
    pending: VecDeque<Event>,
    draws: usize,
    last_frame: Option<CellBuffer>,
}

impl HeadlessBackend {
    /// Create a headless backend reporting `shape` as its real size.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Queue an event for the next `events()` call.
    pub fn push_event(&mut self, event: impl Into<crate::event::Event>) {
        self.pending.push_back(event.into());
    }

    /// How many times `draw` was called.
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// The buffer as of the last `draw`.
    pub const fn last_frame(&self) -> Option<&CellBuffer> {
        self.last_frame.as_ref()
    }
}

impl Backend for HeadlessBackend {
    fn real_shape(&self) -> Result<Shape> {
        Ok(self.shape)
    }

    fn events(&mut self) -> Result<Vec<Event>> {
        Ok(self.pending.drain(..).collect())
    }

    fn draw(&mut self, buffer: &CellBuffer) -> Result<()> {
        self.draws += 1;
        match &mut self.last_frame {
            Some(frame) if frame.shape() == buffer.shape() => frame.clone_from(buffer),
            slot => *slot = Some(buffer.clone()),
        }
        Ok(())
    }
}
