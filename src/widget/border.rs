//! Border widget: concentric box outlines around a module's interior.

use crate::buffer::{Rgb, Style};
use crate::error::{Error, Result};
use crate::grid::{Grid, SubGrid};
use crate::layout::Rect;
use crate::module::{ModuleId, ModuleTree, Widget};
use std::any::type_name;

/// Line style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// ```text
    /// ┌───┐
    /// └───┘
    /// ```
    #[default]
    Single,
    /// ```text
    /// ╔═══╗
    /// ╚═══╝
    /// ```
    Double,
    /// ```text
    /// ╭───╮
    /// ╰───╯
    /// ```
    Rounded,
    /// ```text
    /// ┏━━━┓
    /// ┗━━━┛
    /// ```
    Heavy,
    /// ```text
    /// +---+
    /// +---+
    /// ```
    Ascii,
}

/// The six characters a border is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

impl BorderStyle {
    /// The characters for this style.
    pub const fn chars(self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Self::Single => ('┌', '┐', '└', '┘', '─', '│'),
            Self::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Self::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
            Self::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
            Self::Ascii => ('+', '+', '+', '+', '-', '|'),
        };
        BorderChars {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// Configuration for the border widget.
#[derive(Debug, Clone, Copy)]
pub struct BorderConfig {
    /// Line style.
    pub style: BorderStyle,
    /// Line color.
    pub fg: Rgb,
    /// Background behind the lines.
    pub bg: Rgb,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            style: BorderStyle::Single,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
        }
    }
}

/// Draws `depth` nested outlines just inside its box.
///
/// The box itself belongs to the tree, so [`inner_box`](Self::inner_box)
/// reads it from there however the border was added.
#[derive(Debug, Clone)]
pub struct BorderModule {
    depth: usize,
    config: BorderConfig,
}

impl BorderModule {
    /// A border of thickness `depth` with the default look.
    pub fn new(depth: usize) -> Self {
        Self::with_config(depth, BorderConfig::default())
    }

    /// A border of thickness `depth` drawn with `config`.
    pub const fn with_config(depth: usize, config: BorderConfig) -> Self {
        Self { depth, config }
    }

    /// Add `border` under `parent`, covering `rect` or, when `None`, the
    /// parent's whole grid.
    pub fn attach(
        tree: &mut ModuleTree,
        parent: ModuleId,
        rect: Option<Rect>,
        border: Self,
    ) -> Result<ModuleId> {
        let rect = match rect {
            Some(rect) => rect,
            None => Rect::from_shape(tree.shape(parent)?),
        };
        tree.add(parent, rect, border)
    }

    /// Thickness of the border.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The region inside the border at `id`, in its parent's coordinates.
    ///
    /// For a border at the root of the tree the box is the whole grid.
    pub fn inner_box(tree: &ModuleTree, id: ModuleId) -> Result<Rect> {
        let bbox = match tree.bbox(id)? {
            Some(bbox) => bbox,
            None => Rect::from_shape(tree.shape(id)?),
        };
        let depth = tree
            .widget::<Self>(id)
            .ok_or(Error::WidgetType(type_name::<Self>()))?
            .depth;
        Ok(bbox.shrink(depth))
    }
}

fn put(grid: &SubGrid, pos: (usize, usize), ch: char, style: Style) -> Result<()> {
    let mut buf = [0; 4];
    grid.print(ch.encode_utf8(&mut buf), pos, style)
}

impl Widget for BorderModule {
    fn draw(&mut self, grid: &SubGrid) -> Result<()> {
        let chars = self.config.style.chars();
        let style = Style::new().fg(self.config.fg).bg(self.config.bg);
        let (rows, cols) = grid.shape();

        for k in 0..self.depth {
            if 2 * k >= rows || 2 * k >= cols {
                break;
            }
            let (top, bottom) = (k, rows - 1 - k);
            let (left, right) = (k, cols - 1 - k);

            for j in left + 1..right {
                put(grid, (top, j), chars.horizontal, style)?;
                put(grid, (bottom, j), chars.horizontal, style)?;
            }
            for i in top + 1..bottom {
                put(grid, (i, left), chars.vertical, style)?;
                put(grid, (i, right), chars.vertical, style)?;
            }
            put(grid, (top, left), chars.top_left, style)?;
            put(grid, (top, right), chars.top_right, style)?;
            put(grid, (bottom, left), chars.bottom_left, style)?;
            put(grid, (bottom, right), chars.bottom_right, style)?;
        }
        Ok(())
    }
}
