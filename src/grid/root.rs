//! Root grid: owns the cell buffer and the backend.

use super::backend::{Backend, HeadlessBackend};
use super::sealed::{Parent, Resolved, RootSurface, Sealed};
use super::Grid;
use crate::buffer::CellBuffer;
use crate::error::Result;
use crate::event::Event;
use crate::layout::{Pos, Rect, Shape};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

struct Root<B> {
    buffer: CellBuffer,
    backend: B,
}

impl<B: Backend> RootSurface for Root<B> {
    fn buffer(&self) -> &CellBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut CellBuffer {
        &mut self.buffer
    }

    fn real_shape(&self) -> Result<Shape> {
        self.backend.real_shape()
    }

    fn events(&mut self) -> Result<Vec<Event>> {
        self.backend.events()
    }

    fn draw(&mut self) -> Result<()> {
        self.backend.draw(&self.buffer)
    }
}

/// The top of a display tree.
///
/// Cloning a `RootGrid` yields another handle to the same buffer and backend.
/// Sub-grids hold only a weak link, so the buffer lives exactly as long as
/// some `RootGrid` handle does.
pub struct RootGrid<B: Backend + 'static = HeadlessBackend> {
    inner: Rc<RefCell<Root<B>>>,
    shape: Shape,
}

impl<B: Backend + 'static> RootGrid<B> {
    /// Create a root grid of `shape` over `backend`, cleared to white-on-black
    /// spaces.
    pub fn new(shape: Shape, backend: B) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Root {
                buffer: CellBuffer::new(shape),
                backend,
            })),
            shape,
        }
    }

    /// Create a root grid sized to the backend's physical shape.
    pub fn fit(backend: B) -> Result<Self> {
        let shape = backend.real_shape()?;
        Ok(Self::new(shape, backend))
    }

    /// Borrow the backend.
    ///
    /// # Panics
    ///
    /// Panics if the backend is currently borrowed mutably.
    pub fn backend(&self) -> Ref<'_, B> {
        Ref::map(self.inner.borrow(), |root| &root.backend)
    }

    /// Borrow the backend mutably.
    ///
    /// # Panics
    ///
    /// Panics if the backend is currently borrowed.
    pub fn backend_mut(&self) -> RefMut<'_, B> {
        RefMut::map(self.inner.borrow_mut(), |root| &mut root.backend)
    }

    /// Borrow the cell buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is currently borrowed mutably.
    pub fn buffer(&self) -> Ref<'_, CellBuffer> {
        Ref::map(self.inner.borrow(), |root| &root.buffer)
    }

    fn surface(&self) -> Rc<RefCell<dyn RootSurface>> {
        self.inner.clone()
    }
}

impl RootGrid<HeadlessBackend> {
    /// Create a root grid over a [`HeadlessBackend`] of the same shape.
    pub fn headless(shape: Shape) -> Self {
        Self::new(shape, HeadlessBackend::new(shape))
    }
}

impl<B: Backend + 'static> Clone for RootGrid<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            shape: self.shape,
        }
    }
}

impl<B: Backend + 'static> std::fmt::Debug for RootGrid<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RootGrid({}x{})", self.shape.0, self.shape.1)
    }
}

impl<B: Backend + 'static> Sealed for RootGrid<B> {
    fn resolve(&self) -> Result<Resolved> {
        Ok(Resolved {
            root: self.surface(),
            rect: Rect::from_shape(self.shape),
        })
    }

    fn link(&self) -> Parent {
        Parent::Root(Rc::downgrade(&self.surface()))
    }
}

impl<B: Backend + 'static> Grid for RootGrid<B> {
    fn shape(&self) -> Shape {
        self.shape
    }

    fn offset(&self) -> Pos {
        (0, 0)
    }

    fn real_shape(&self) -> Result<Shape> {
        self.inner.borrow().real_shape()
    }

    fn events(&self) -> Result<Vec<Event>> {
        self.inner.borrow_mut().events()
    }

    fn draw(&self) -> Result<()> {
        self.inner.borrow_mut().draw()
    }
}
