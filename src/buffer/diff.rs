//! Diffing Engine: Generate minimal ANSI sequences from buffer changes.
//!
//! This module implements the incremental redraw used by the terminal
//! backend:
//! 1. Compare the last rendered buffer with the next one
//! 2. Generate minimal ANSI escape sequences for changed cells
//! 3. Optimize cursor movements (skip if adjacent)
//! 4. Track color state to avoid redundant SGR sequences
//!
//! All output is accumulated in a single buffer and flushed with one syscall.

use super::{Attrs, CellBuffer, CellView, Rgb};
use std::io::Write;
use unicode_width::UnicodeWidthChar;

/// State tracker for the diffing algorithm.
///
/// This tracks the "current" terminal state (cursor position, colors, attributes)
/// to minimize the number of escape sequences we need to emit.
#[derive(Debug, Clone)]
pub struct DiffState {
    /// Last known cursor row (0-indexed).
    cursor_row: usize,
    /// Last known cursor column (0-indexed).
    cursor_col: usize,
    /// Last emitted foreground color.
    fg: Option<Rgb>,
    /// Last emitted background color.
    bg: Option<Rgb>,
    /// Last emitted attributes.
    attrs: Option<Attrs>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with the cursor at home and unknown colors.
    pub const fn new() -> Self {
        Self {
            cursor_row: 0,
            cursor_col: 0,
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Reset the state (e.g., after a full screen repaint).
    pub const fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.attrs = None;
        // Force cursor move on next write
        self.cursor_row = usize::MAX;
        self.cursor_col = usize::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
    /// Number of attribute change sequences emitted.
    pub attr_changes: usize,
}

/// Render the difference between two buffers into an ANSI sequence buffer.
///
/// Only cells that differ between `current` (what is on screen) and `next`
/// produce output.
///
/// # Optimizations
///
/// 1. **Cursor movement**: Skips explicit moves when writing adjacent cells
/// 2. **Color tracking**: Only emits color changes when fg/bg actually differ
/// 3. **Attribute tracking**: Only emits attribute changes when needed
pub fn render_diff(
    current: &CellBuffer,
    next: &CellBuffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.shape(), next.shape());

    let mut result = DiffResult::default();
    let (rows, cols) = next.shape();

    for i in 0..rows {
        for j in 0..cols {
            let idx = i * cols + j;
            let next_cell = next.cell_at(idx);

            // Skip if cells are identical
            if current.cell_at(idx) == next_cell {
                continue;
            }

            result.cells_changed += 1;

            // Emit cursor move if not adjacent to last position
            if state.cursor_row != i || state.cursor_col != j {
                emit_cursor_move(output, i, j);
                state.cursor_row = i;
                state.cursor_col = j;
                result.cursor_moves += 1;
            }

            // Removing any attribute needs a full reset (\x1b[0m), which
            // also clears colors.
            let current_attrs = state.attrs.unwrap_or(Attrs::NONE);
            if !current_attrs.difference(next_cell.attrs).is_empty() {
                output.extend_from_slice(b"\x1b[0m");
                state.fg = None;
                state.bg = None;
                state.attrs = None;
            }

            if state.fg != Some(next_cell.fg) {
                emit_fg_color(output, next_cell.fg);
                state.fg = Some(next_cell.fg);
                result.color_changes += 1;
            }

            if state.bg != Some(next_cell.bg) {
                emit_bg_color(output, next_cell.bg);
                state.bg = Some(next_cell.bg);
                result.color_changes += 1;
            }

            if state.attrs != Some(next_cell.attrs) {
                // Removals were handled above, so only additions remain
                let added = next_cell.attrs.difference(state.attrs.unwrap_or(Attrs::NONE));
                emit_attr_set(output, added);
                state.attrs = Some(next_cell.attrs);
                result.attr_changes += 1;
            }

            // Update cursor position (advances by display width)
            state.cursor_col += emit_char(output, &next_cell);
        }
    }

    result
}

/// Emit a cursor move sequence.
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row};{col}H` for absolute positioning
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, i: usize, j: usize) {
    // ANSI uses 1-indexed positions
    let row = i + 1;
    let col = j + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        // Move to column 1 of row N
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit a foreground color sequence (true color).
#[inline]
fn emit_fg_color(output: &mut Vec<u8>, color: Rgb) {
    let _ = write!(output, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
}

/// Emit a background color sequence (true color).
#[inline]
fn emit_bg_color(output: &mut Vec<u8>, color: Rgb) {
    let _ = write!(output, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
}

/// Emit SGR sequences for a set of attributes.
fn emit_attr_set(output: &mut Vec<u8>, attrs: Attrs) {
    if attrs.contains(Attrs::BOLD) {
        output.extend_from_slice(b"\x1b[1m");
    }
    if attrs.contains(Attrs::ITALIC) {
        output.extend_from_slice(b"\x1b[3m");
    }
    if attrs.contains(Attrs::UNDERLINE) {
        output.extend_from_slice(b"\x1b[4m");
    }
}

/// Emit a cell's character and return how many columns the cursor moved.
///
/// Invalid code points and control characters print as a space.
#[inline]
fn emit_char(output: &mut Vec<u8>, cell: &CellView) -> usize {
    match cell.char().filter(|c| !c.is_control()) {
        Some(c) => {
            let mut bytes = [0u8; 4];
            output.extend_from_slice(c.encode_utf8(&mut bytes).as_bytes());
            c.width().unwrap_or(0).max(1)
        }
        None => {
            output.push(b' ');
            1
        }
    }
}

/// Generate a full redraw sequence (no diffing).
///
/// This is used for the first draw or when the terminal state is unknown.
pub fn render_full(buffer: &CellBuffer, output: &mut Vec<u8>) {
    let (rows, cols) = buffer.shape();

    // Hide cursor during redraw
    output.extend_from_slice(b"\x1b[?25l");

    // Start from clean attributes and home
    output.extend_from_slice(b"\x1b[0m\x1b[H");

    let mut last_fg: Option<Rgb> = None;
    let mut last_bg: Option<Rgb> = None;
    let mut last_attrs = Attrs::NONE;

    for i in 0..rows {
        // Each row starts with an explicit move so wide characters cannot
        // push the rest of the screen out of line.
        emit_cursor_move(output, i, 0);

        for j in 0..cols {
            let cell = buffer.cell_at(i * cols + j);

            if !last_attrs.difference(cell.attrs).is_empty() {
                output.extend_from_slice(b"\x1b[0m");
                last_fg = None;
                last_bg = None;
                last_attrs = Attrs::NONE;
            }
            if last_fg != Some(cell.fg) {
                emit_fg_color(output, cell.fg);
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                emit_bg_color(output, cell.bg);
                last_bg = Some(cell.bg);
            }
            if last_attrs != cell.attrs {
                emit_attr_set(output, cell.attrs.difference(last_attrs));
                last_attrs = cell.attrs;
            }

            emit_char(output, &cell);
        }
    }

    // Reset attributes
    output.extend_from_slice(b"\x1b[0m");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Style;
    use crate::layout::Rect;

    fn put(buffer: &mut CellBuffer, i: usize, j: usize, c: char, style: Style) {
        buffer.fill(Rect::new(i, j, i + 1, j + 1), Some(c as u32), style);
    }

    #[test]
    fn test_diff_identical_buffers() {
        let a = CellBuffer::new((5, 10));
        let b = CellBuffer::new((5, 10));
        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_single_cell_change() {
        let a = CellBuffer::new((5, 10));
        let mut b = CellBuffer::new((5, 10));
        put(&mut b, 2, 5, 'X', Style::new());

        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 1);
        let output_str = String::from_utf8_lossy(&output);
        assert!(output_str.contains("\x1b[3;6H"));
        assert!(output_str.contains('X'));
    }

    #[test]
    fn test_diff_adjacent_cells_no_cursor_move() {
        let a = CellBuffer::new((5, 10));
        let mut b = CellBuffer::new((5, 10));

        // Three adjacent cells on same row
        put(&mut b, 0, 0, 'A', Style::new());
        put(&mut b, 0, 1, 'B', Style::new());
        put(&mut b, 0, 2, 'C', Style::new());

        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 3);
        // No cursor moves needed: cursor starts at (0,0) and cells are adjacent
        assert_eq!(result.cursor_moves, 0);
    }

    #[test]
    fn test_diff_color_tracking() {
        let a = CellBuffer::new((5, 10));
        let mut b = CellBuffer::new((5, 10));

        let red = Style::new().fg(Rgb::new(255, 0, 0));
        put(&mut b, 0, 0, 'A', red);
        put(&mut b, 0, 1, 'B', red);

        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        // Two color changes for first cell (fg and bg), none for second
        assert_eq!(result.color_changes, 2);
    }

    #[test]
    fn test_diff_attr_removal_resets() {
        let a = CellBuffer::new((1, 4));
        let mut b = CellBuffer::new((1, 4));
        put(&mut b, 0, 0, 'A', Style::new().attrs(Attrs::BOLD));
        put(&mut b, 0, 1, 'B', Style::new());

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        let output_str = String::from_utf8_lossy(&output);
        assert!(output_str.contains("\x1b[1mA\x1b[0m"));
        assert_eq!(result.attr_changes, 2);
    }

    #[test]
    fn test_diff_wide_char_advances_cursor() {
        let a = CellBuffer::new((1, 6));
        let mut b = CellBuffer::new((1, 6));
        put(&mut b, 0, 0, '日', Style::new());
        put(&mut b, 0, 2, 'x', Style::new());

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        // The wide char already moved the cursor to column 2
        assert_eq!(result.cursor_moves, 0);
    }

    #[test]
    fn test_cursor_move_optimization() {
        let mut output = Vec::new();

        // Home position uses short sequence
        emit_cursor_move(&mut output, 0, 0);
        assert_eq!(&output, b"\x1b[H");

        output.clear();

        // Column 1 uses shorter sequence
        emit_cursor_move(&mut output, 5, 0);
        assert_eq!(&output, b"\x1b[6H"); // Row 6 (1-indexed)

        output.clear();

        // General position
        emit_cursor_move(&mut output, 5, 10);
        assert_eq!(&output, b"\x1b[6;11H"); // Row 6, Col 11 (1-indexed)
    }

    #[test]
    fn test_render_full() {
        let mut buffer = CellBuffer::new((2, 3));
        put(&mut buffer, 0, 0, 'A', Style::new());
        put(&mut buffer, 0, 1, 'B', Style::new());
        put(&mut buffer, 0, 2, 'C', Style::new());

        let mut output = Vec::new();
        render_full(&buffer, &mut output);

        let output_str = String::from_utf8_lossy(&output);
        assert!(output_str.starts_with("\x1b[?25l\x1b[0m\x1b[H"));
        assert!(output_str.contains("ABC"));
        assert!(output_str.ends_with("\x1b[0m"));
    }
}
