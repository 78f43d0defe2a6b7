//! Sub-grid: a rectangular window into an ancestor grid.

use super::sealed::{Parent, Resolved, Sealed};
use super::Grid;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::layout::{Pos, Rect, Shape};

/// A view of the region `[i0, i1) x [j0, j1)` of a parent grid.
///
/// Writes land in the root's buffer, offset by the composed origins of every
/// grid between this one and the root. A sub-grid whose root has been
/// dropped reports [`Error::Detached`] from every buffer access.
#[derive(Clone)]
pub struct SubGrid {
    parent: Parent,
    bbox: Rect,
}

impl SubGrid {
    /// Slice `[i0, i1) x [j0, j1)` out of `parent`.
    ///
    /// Fails with [`Error::OutOfBounds`] unless
    /// `0 <= i0 <= i1 <= rows` and `0 <= j0 <= j1 <= cols` of the parent.
    pub fn new<G: Grid>(parent: &G, i0: usize, j0: usize, i1: usize, j1: usize) -> Result<Self> {
        Self::from_rect(parent, Rect::new(i0, j0, i1, j1))
    }

    /// Slice `rect` out of `parent`. See [`SubGrid::new`].
    pub fn from_rect<G: Grid>(parent: &G, rect: Rect) -> Result<Self> {
        let (rows, cols) = parent.shape();
        Error::check("box row", rect.i1, rows)?;
        Error::check("box column", rect.j1, cols)?;
        Error::check("box row", rect.i0, rect.i1)?;
        Error::check("box column", rect.j0, rect.j1)?;
        Ok(Self {
            parent: parent.link(),
            bbox: rect,
        })
    }

    /// The region this grid covers, in parent coordinates.
    #[inline]
    pub const fn bbox(&self) -> Rect {
        self.bbox
    }

    /// The parent, when it is itself a sub-grid.
    pub fn parent(&self) -> Option<&Self> {
        match &self.parent {
            Parent::Sub(parent) => Some(parent),
            Parent::Root(_) => None,
        }
    }

    /// Whether the root grid is still alive.
    pub fn is_attached(&self) -> bool {
        match &self.parent {
            Parent::Root(root) => root.strong_count() > 0,
            Parent::Sub(parent) => parent.is_attached(),
        }
    }
}

impl std::fmt::Debug for SubGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubGrid")
            .field("bbox", &self.bbox)
            .field("nested", &self.parent().is_some())
            .finish()
    }
}

impl Sealed for SubGrid {
    fn resolve(&self) -> Result<Resolved> {
        let (root, outer) = match &self.parent {
            Parent::Root(weak) => {
                let root = weak.upgrade().ok_or(Error::Detached)?;
                let shape = root.borrow().buffer().shape();
                (root, Rect::from_shape(shape))
            }
            Parent::Sub(parent) => {
                let resolved = parent.resolve()?;
                (resolved.root, resolved.rect)
            }
        };
        Ok(Resolved {
            root,
            rect: self.bbox.translate(outer.origin()),
        })
    }

    fn link(&self) -> Parent {
        Parent::Sub(Box::new(self.clone()))
    }
}

impl Grid for SubGrid {
    fn shape(&self) -> Shape {
        self.bbox.shape()
    }

    fn offset(&self) -> Pos {
        self.bbox.origin()
    }

    /// A sub-grid's device is its own extent.
    fn real_shape(&self) -> Result<Shape> {
        Ok(self.shape())
    }

    /// Sub-grids never gather input.
    fn events(&self) -> Result<Vec<Event>> {
        Ok(Vec::new())
    }

    /// Forwards to the parent, so drawing any sub-grid draws the whole root.
    fn draw(&self) -> Result<()> {
        match &self.parent {
            Parent::Root(weak) => weak.upgrade().ok_or(Error::Detached)?.borrow_mut().draw(),
            Parent::Sub(parent) => parent.draw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Rgb, Style};
    use crate::glyph::{Glyph, GlyphRegistry};
    use crate::grid::RootGrid;

    #[test]
    fn test_sub_shape_and_offset() {
        let root = RootGrid::headless((5, 10));
        let sub = SubGrid::new(&root, 1, 2, 4, 8).unwrap();
        assert_eq!(sub.shape(), (3, 6));
        assert_eq!(sub.offset(), (1, 2));
        assert_eq!(sub.real_shape().unwrap(), (3, 6));
        assert!(sub.events().unwrap().is_empty());
        assert!(sub.parent().is_none());
    }

    #[test]
    fn test_sub_bounds() {
        let root = RootGrid::headless((5, 10));
        assert!(SubGrid::new(&root, 0, 0, 5, 10).is_ok());
        assert!(SubGrid::new(&root, 0, 0, 0, 0).is_ok());
        assert!(matches!(
            SubGrid::new(&root, 0, 0, 6, 10),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(SubGrid::new(&root, 0, 0, 5, 11).is_err());
        assert!(SubGrid::new(&root, 3, 0, 2, 10).is_err());
        assert!(SubGrid::new(&root, 0, 4, 5, 3).is_err());
    }

    #[test]
    fn test_sub_writes_land_in_root() {
        let root = RootGrid::headless((5, 10));
        let sub = SubGrid::new(&root, 1, 2, 4, 8).unwrap();
        sub.fill(Some('#'), Style::new().bg(Rgb::new(0, 0, 255)))
            .unwrap();

        for i in 0..5 {
            for j in 0..10 {
                let inside = (1..4).contains(&i) && (2..8).contains(&j);
                let cell = root.cell(i, j).unwrap();
                assert_eq!(cell.char() == Some('#'), inside, "cell ({i}, {j})");
            }
        }
        assert_eq!(root.cell(1, 2).unwrap().bg, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_nested_sub_offsets_compose() {
        let root = RootGrid::headless((5, 10));
        let outer = SubGrid::new(&root, 1, 2, 5, 10).unwrap();
        let inner = SubGrid::new(&outer, 1, 1, 3, 3).unwrap();
        assert_eq!(inner.offset(), (1, 1));
        assert!(inner.parent().is_some());

        inner.print("ab", (0, 0), Style::NONE).unwrap();
        assert_eq!(root.cell(2, 3).unwrap().char(), Some('a'));
        assert_eq!(root.cell(2, 4).unwrap().char(), Some('b'));
        assert_eq!(outer.cell(1, 1).unwrap().char(), Some('a'));
    }

    #[test]
    fn test_sub_print_wraps_within_region() {
        let root = RootGrid::headless((4, 6));
        let sub = SubGrid::new(&root, 1, 1, 3, 4).unwrap();
        sub.print("abcdefgh", (0, 0), Style::NONE).unwrap();
        assert_eq!(sub.row_text(0).unwrap(), "ghc");
        assert_eq!(sub.row_text(1).unwrap(), "def");
        assert_eq!(root.row_text(0).unwrap(), "      ");
        assert_eq!(root.row_text(1).unwrap(), " ghc  ");
    }

    #[test]
    fn test_sub_stamp_clips_to_region() {
        let root = RootGrid::headless((4, 6));
        let sub = SubGrid::new(&root, 0, 0, 2, 2).unwrap();
        let mut registry = GlyphRegistry::new();
        registry.insert("big", Glyph::from_lines(&["ABC", "DEF", "GHI"]));

        sub.stamp(&registry, "big", 1, 1).unwrap();
        assert_eq!(root.row_text(1).unwrap(), " A    ");
        assert_eq!(root.row_text(2).unwrap(), "      ");
    }

    #[test]
    fn test_sub_draw_forwards_to_root() {
        let root = RootGrid::headless((5, 10));
        let outer = SubGrid::new(&root, 1, 1, 5, 10).unwrap();
        let inner = SubGrid::new(&outer, 0, 0, 2, 2).unwrap();
        inner.draw().unwrap();
        assert_eq!(root.backend().draws(), 1);
    }

    #[test]
    fn test_sub_detached() {
        let root = RootGrid::headless((2, 2));
        let sub = SubGrid::new(&root, 0, 0, 1, 1).unwrap();
        assert!(sub.is_attached());
        drop(root);
        assert!(!sub.is_attached());
        assert!(matches!(sub.clear(), Err(Error::Detached)));
        assert!(matches!(sub.draw(), Err(Error::Detached)));
    }
}
