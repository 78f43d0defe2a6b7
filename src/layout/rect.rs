//! Rect: a box primitive in (row, column) corner form.

/// Grid dimensions as `(rows, cols)`.
pub type Shape = (usize, usize);

/// A cell position as `(row, col)`.
pub type Pos = (usize, usize);

/// A box `(i0, j0, i1, j1)`: rows `i0..i1`, columns `j0..j1`.
///
/// Coordinates are relative to whatever grid the box is handed to; the
/// bottom and right edges are exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// First row.
    pub i0: usize,
    /// First column.
    pub j0: usize,
    /// One past the last row.
    pub i1: usize,
    /// One past the last column.
    pub j1: usize,
}

impl Rect {
    /// Create a new box from its corners.
    #[inline]
    pub const fn new(i0: usize, j0: usize, i1: usize, j1: usize) -> Self {
        Self { i0, j0, i1, j1 }
    }

    /// Create a box covering a whole grid of the given shape.
    #[inline]
    pub const fn from_shape((rows, cols): Shape) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Zero-sized box.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Pos {
        (self.i0, self.j0)
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.i1.saturating_sub(self.i0)
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.j1.saturating_sub(self.j0)
    }

    /// `(rows, cols)` of the box.
    #[inline]
    pub const fn shape(&self) -> Shape {
        (self.height(), self.width())
    }

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Check if the box is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Check if a point is inside the box.
    #[inline]
    pub const fn contains(&self, (i, j): Pos) -> bool {
        i >= self.i0 && i < self.i1 && j >= self.j0 && j < self.j1
    }

    /// Move the box by `(di, dj)`.
    #[inline]
    #[must_use]
    pub const fn translate(&self, (di, dj): Pos) -> Self {
        Self::new(self.i0 + di, self.j0 + dj, self.i1 + di, self.j1 + dj)
    }

    /// Shrink the box by a margin on all sides.
    ///
    /// Returns an empty box at the centre line when the margin eats the
    /// whole box.
    #[inline]
    #[must_use]
    pub const fn shrink(&self, margin: usize) -> Self {
        let i0 = self.i0 + margin;
        let j0 = self.j0 + margin;
        let i1 = self.i1.saturating_sub(margin);
        let j1 = self.j1.saturating_sub(margin);
        Self::new(
            i0,
            j0,
            if i1 < i0 { i0 } else { i1 },
            if j1 < j0 { j0 } else { j1 },
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.i0, self.j0, self.i1, self.j1)
    }
}

impl From<(usize, usize, usize, usize)> for Rect {
    #[inline]
    fn from((i0, j0, i1, j1): (usize, usize, usize, usize)) -> Self {
        Self::new(i0, j0, i1, j1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_shape() {
        let rect = Rect::new(1, 2, 5, 10);
        assert_eq!(rect.shape(), (4, 8));
        assert_eq!(rect.origin(), (1, 2));
        assert_eq!(rect.area(), 32);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(1, 1, 5, 5);
        assert!(rect.contains((1, 1)));
        assert!(rect.contains((4, 4)));
        assert!(!rect.contains((5, 4)));
        assert!(!rect.contains((0, 3)));
    }

    #[test]
    fn test_rect_shrink() {
        let rect = Rect::new(0, 0, 10, 20);
        assert_eq!(rect.shrink(1), Rect::new(1, 1, 9, 19));
        assert!(rect.shrink(6).is_empty());
    }

    #[test]
    fn test_rect_translate() {
        assert_eq!(Rect::new(0, 0, 2, 3).translate((4, 5)), Rect::new(4, 5, 6, 8));
    }
}
