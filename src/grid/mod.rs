//! Grid module: the rendering-surface contract and its two implementations.
//!
//! - [`RootGrid`] owns the one [`CellBuffer`] of a display tree together with
//!   the [`Backend`] that puts it on a device.
//! - [`SubGrid`] is a windowed view into an ancestor's buffer. It owns no
//!   cells; every write lands in the root's buffer.
//!
//! ```text
//! RootGrid ──owns──▶ CellBuffer + Backend
//!    ▲ Weak
//! SubGrid(1,2,5,10) ◀── SubGrid(0,0,2,2)   (offsets compose on access)
//! ```
//!
//! [`Grid`] is sealed: these are the only two kinds of grid.

mod backend;
mod root;
mod sub;

pub use backend::{Backend, HeadlessBackend};
pub use root::RootGrid;
pub use sub::SubGrid;

use crate::buffer::{CellBuffer, CellView, Style};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::glyph::GlyphRegistry;
use crate::layout::{Pos, Shape};

pub(crate) mod sealed {
    use super::SubGrid;
    use crate::buffer::CellBuffer;
    use crate::error::Result;
    use crate::event::Event;
    use crate::layout::{Rect, Shape};
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    /// The type-erased root a sub-grid resolves to.
    pub trait RootSurface {
        fn buffer(&self) -> &CellBuffer;
        fn buffer_mut(&mut self) -> &mut CellBuffer;
        fn real_shape(&self) -> Result<Shape>;
        fn events(&mut self) -> Result<Vec<Event>>;
        fn draw(&mut self) -> Result<()>;
    }

    /// A grid's root together with its absolute region in the root buffer.
    pub struct Resolved {
        pub root: Rc<RefCell<dyn RootSurface>>,
        pub rect: Rect,
    }

    /// What a sub-grid was sliced from.
    #[derive(Clone)]
    pub enum Parent {
        Root(Weak<RefCell<dyn RootSurface>>),
        Sub(Box<SubGrid>),
    }

    pub trait Sealed {
        /// Find the root buffer and this grid's absolute region in it.
        fn resolve(&self) -> Result<Resolved>;
        /// A non-owning link to this grid, for slicing a child from it.
        fn link(&self) -> Parent;
    }
}

/// The rendering-surface contract shared by [`RootGrid`] and [`SubGrid`].
///
/// All coordinates are `(row, col)` relative to the grid's own top-left cell.
pub trait Grid: sealed::Sealed {
    /// `(rows, cols)` of this grid.
    fn shape(&self) -> Shape;

    /// Top-left of this grid in its parent's coordinates (`(0, 0)` for a root).
    fn offset(&self) -> Pos;

    /// Physical size of the device behind the grid.
    fn real_shape(&self) -> Result<Shape>;

    /// Input events gathered since the last call.
    fn events(&self) -> Result<Vec<Event>>;

    /// Put the buffer on the device.
    fn draw(&self) -> Result<()>;

    /// Broadcast the provided parts to every cell. `None` parts are left as
    /// they are.
    fn fill(&self, ch: Option<char>, style: Style) -> Result<()> {
        let resolved = self.resolve()?;
        resolved
            .root
            .borrow_mut()
            .buffer_mut()
            .fill(resolved.rect, ch.map(u32::from), style);
        Ok(())
    }

    /// Reset every cell to a white-on-black space with no attributes.
    fn clear(&self) -> Result<()> {
        self.fill(Some(' '), Style::RESET)
    }

    /// Write `text` one character per cell from `pos`, wrapping at the right
    /// edge to the next row and at the bottom edge back to the top row.
    ///
    /// Colors apply to the printed cells only. Attributes, when given, are
    /// written to the whole grid.
    fn print(&self, text: &str, pos: Pos, style: Style) -> Result<()> {
        let resolved = self.resolve()?;
        resolved
            .root
            .borrow_mut()
            .buffer_mut()
            .print(resolved.rect, text, pos, style)
    }

    /// Copy the code points of glyph `name` with its top-left at `(i, j)`,
    /// clipped to the grid.
    fn stamp(&self, registry: &GlyphRegistry, name: &str, i: usize, j: usize) -> Result<()> {
        let glyph = registry.get(name)?;
        let resolved = self.resolve()?;
        resolved
            .root
            .borrow_mut()
            .buffer_mut()
            .stamp(resolved.rect, glyph, i, j);
        Ok(())
    }

    /// Copy out the cell at `(i, j)`.
    fn cell(&self, i: usize, j: usize) -> Result<CellView> {
        let (rows, cols) = self.shape();
        Error::check_index("row", i, rows)?;
        Error::check_index("column", j, cols)?;
        let resolved = self.resolve()?;
        let root = resolved.root.borrow();
        let buffer: &CellBuffer = root.buffer();
        buffer
            .cell(resolved.rect.i0 + i, resolved.rect.j0 + j)
            .ok_or(Error::OutOfBounds {
                what: "row",
                value: resolved.rect.i0 + i,
                limit: buffer.shape().0,
            })
    }

    /// Snapshot of this grid's code points, one `Vec` per row.
    fn chars(&self) -> Result<Vec<Vec<u32>>> {
        let resolved = self.resolve()?;
        let root = resolved.root.borrow();
        let chars = root.buffer().chars();
        let cols = root.buffer().shape().1;
        let rect = resolved.rect;
        Ok((rect.i0..rect.i1)
            .map(|i| chars[i * cols + rect.j0..i * cols + rect.j1].to_vec())
            .collect())
    }

    /// Row `i` as a string. Invalid code points become U+FFFD.
    fn row_text(&self, i: usize) -> Result<String> {
        Error::check_index("row", i, self.shape().0)?;
        let rows = self.chars()?;
        Ok(rows[i]
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }
}
