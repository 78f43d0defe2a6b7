//! `CellBuffer`: the character, color and attribute storage behind a root grid.
//!
//! Storage is three parallel row-major arrays (code points, colors,
//! attributes) over a fixed shape. Every region operation takes an absolute
//! [`Rect`] that the caller has already validated against the buffer.

use super::cell::{Attrs, CellView, Rgb, SPACE, Style};
use crate::error::{Error, Result};
use crate::glyph::Glyph;
use crate::layout::{Pos, Rect, Shape};

/// Parallel per-cell arrays over an immutable `(rows, cols)` shape.
///
/// Access is in row-major order: `index = i * cols + j`.
#[derive(Clone, PartialEq, Eq)]
pub struct CellBuffer {
    rows: usize,
    cols: usize,
    chars: Vec<u32>,
    fg: Vec<Rgb>,
    bg: Vec<Rgb>,
    attrs: Vec<Attrs>,
}

impl CellBuffer {
    /// Create a buffer of the given shape with every cell blank.
    pub fn new((rows, cols): Shape) -> Self {
        let size = rows * cols;
        Self {
            rows,
            cols,
            chars: vec![SPACE; size],
            fg: vec![Rgb::DEFAULT_FG; size],
            bg: vec![Rgb::DEFAULT_BG; size],
            attrs: vec![Attrs::NONE; size],
        }
    }

    /// `(rows, cols)` of the buffer.
    #[inline]
    pub const fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Convert `(i, j)` to a linear index, or `None` when out of bounds.
    #[inline]
    pub const fn index_of(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(i * self.cols + j)
        } else {
            None
        }
    }

    /// Code points in row-major order.
    #[inline]
    pub fn chars(&self) -> &[u32] {
        &self.chars
    }

    /// Foreground colors in row-major order.
    #[inline]
    pub fn fg(&self) -> &[Rgb] {
        &self.fg
    }

    /// Background colors in row-major order.
    #[inline]
    pub fn bg(&self) -> &[Rgb] {
        &self.bg
    }

    /// Attributes in row-major order.
    #[inline]
    pub fn attrs(&self) -> &[Attrs] {
        &self.attrs
    }

    /// Copy out the cell at linear index `idx`.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> CellView {
        CellView {
            ch: self.chars[idx],
            fg: self.fg[idx],
            bg: self.bg[idx],
            attrs: self.attrs[idx],
        }
    }

    /// Copy out the cell at `(i, j)`.
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Option<CellView> {
        self.index_of(i, j).map(|idx| self.cell_at(idx))
    }

    /// Linear indices of every cell in `rect`, row by row.
    fn region_indices(&self, rect: Rect) -> impl Iterator<Item = usize> + use<> {
        let cols = self.cols;
        (rect.i0..rect.i1).flat_map(move |i| (i * cols + rect.j0)..(i * cols + rect.j1))
    }

    /// Broadcast the provided parts to every cell of `rect`.
    pub fn fill(&mut self, rect: Rect, ch: Option<u32>, style: Style) {
        for idx in self.region_indices(rect) {
            if let Some(ch) = ch {
                self.chars[idx] = ch;
            }
            if let Some(fg) = style.fg {
                self.fg[idx] = fg;
            }
            if let Some(bg) = style.bg {
                self.bg[idx] = bg;
            }
            if let Some(attrs) = style.attrs {
                self.attrs[idx] = attrs;
            }
        }
    }

    /// Write `text` into `rect` one character per cell starting at `pos`.
    ///
    /// `pos` is relative to `rect`. Writing runs along the row, wraps to the
    /// next row and from the last row back to the first. Colors are written
    /// per character; attributes go to the whole region.
    pub fn print(&mut self, rect: Rect, text: &str, pos: Pos, style: Style) -> Result<()> {
        let (height, width) = rect.shape();
        if !text.is_empty() {
            Error::check_index("print row", pos.0, height)?;
            Error::check_index("print column", pos.1, width)?;
        }
        if let Some(attrs) = style.attrs {
            self.fill(rect, None, Style::new().attrs(attrs));
        }
        if text.is_empty() {
            return Ok(());
        }

        let (mut i, mut j) = pos;
        for c in text.chars() {
            let idx = (rect.i0 + i) * self.cols + rect.j0 + j;
            self.chars[idx] = c as u32;
            if let Some(fg) = style.fg {
                self.fg[idx] = fg;
            }
            if let Some(bg) = style.bg {
                self.bg[idx] = bg;
            }

            j += 1;
            if j >= width {
                j = 0;
                i += 1;
                if i >= height {
                    i = 0;
                }
            }
        }
        Ok(())
    }

    /// Copy `glyph` into `rect` with its top-left at `(i, j)`, clipped to
    /// `rect`. Only code points are written.
    pub fn stamp(&mut self, rect: Rect, glyph: &Glyph, i: usize, j: usize) {
        let (height, width) = rect.shape();
        for (gi, row) in glyph.rows().enumerate() {
            let ti = i + gi;
            if ti >= height {
                break;
            }
            for (gj, &ch) in row.iter().enumerate() {
                let tj = j + gj;
                if tj >= width {
                    break;
                }
                self.chars[(rect.i0 + ti) * self.cols + rect.j0 + tj] = ch;
            }
        }
    }

    /// Get an iterator over rows of code points.
    pub fn char_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.chars.chunks(self.cols.max(1))
    }
}

impl std::fmt::Debug for CellBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellBuffer")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(buffer: &CellBuffer) -> String {
        buffer
            .chars()
            .iter()
            .map(|&c| char::from_u32(c).unwrap())
            .collect()
    }

    #[test]
    fn test_buffer_new() {
        let buffer = CellBuffer::new((10, 20));
        assert_eq!(buffer.shape(), (10, 20));
        assert_eq!(buffer.len(), 200);
        assert_eq!(buffer.fg().len(), 200);
        assert_eq!(buffer.attrs().len(), 200);
        assert!(buffer.chars().iter().all(|&c| c == SPACE));
    }

    #[test]
    fn test_buffer_bounds() {
        let buffer = CellBuffer::new((24, 80));
        assert!(buffer.cell(23, 79).is_some());
        assert!(buffer.cell(24, 0).is_none());
        assert!(buffer.cell(0, 80).is_none());
        assert_eq!(buffer.index_of(10, 5), Some(10 * 80 + 5));
    }

    #[test]
    fn test_buffer_fill_rect_only() {
        let mut buffer = CellBuffer::new((4, 4));
        buffer.fill(Rect::new(1, 1, 3, 3), Some('X' as u32), Style::new().bg(Rgb::new(9, 9, 9)));

        assert_eq!(buffer.cell(1, 1).unwrap().char(), Some('X'));
        assert_eq!(buffer.cell(2, 2).unwrap().bg, Rgb::new(9, 9, 9));
        assert_eq!(buffer.cell(0, 0).unwrap(), CellView::EMPTY);
        assert_eq!(buffer.cell(3, 3).unwrap(), CellView::EMPTY);
        // fg was not provided
        assert_eq!(buffer.cell(1, 1).unwrap().fg, Rgb::WHITE);
    }

    #[test]
    fn test_buffer_print_wraps_rows_and_back_to_top() {
        let mut buffer = CellBuffer::new((2, 3));
        buffer
            .print(Rect::from_shape((2, 3)), "abcdefgh", (0, 0), Style::new())
            .unwrap();
        // 'g' and 'h' wrap back over 'a' and 'b'
        assert_eq!(text_of(&buffer), "ghcdef");
    }

    #[test]
    fn test_buffer_print_rejects_position() {
        let mut buffer = CellBuffer::new((2, 3));
        let result = buffer.print(Rect::from_shape((2, 3)), "x", (2, 0), Style::new());
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_buffer_failed_print_writes_nothing() {
        let mut buffer = CellBuffer::new((2, 3));
        let style = Style::new().fg(Rgb::new(1, 1, 1)).attrs(Attrs::BOLD);
        assert!(buffer.print(Rect::from_shape((2, 3)), "x", (0, 3), style).is_err());
        assert!(buffer.attrs().iter().all(|&a| a == Attrs::NONE));
        assert_eq!(buffer, CellBuffer::new((2, 3)));
    }

    #[test]
    fn test_buffer_empty_print_applies_attrs_anywhere() {
        let mut buffer = CellBuffer::new((2, 3));
        let style = Style::new().attrs(Attrs::ITALIC);
        buffer.print(Rect::from_shape((2, 3)), "", (7, 7), style).unwrap();
        assert!(buffer.attrs().iter().all(|&a| a == Attrs::ITALIC));
    }

    #[test]
    fn test_buffer_stamp_clips() {
        let mut buffer = CellBuffer::new((3, 3));
        let glyph = Glyph::from_lines(&["ab", "cd"]);
        buffer.stamp(Rect::from_shape((3, 3)), &glyph, 2, 2);
        assert_eq!(text_of(&buffer), "        a");
    }
}
