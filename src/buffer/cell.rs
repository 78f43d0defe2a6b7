//! Cell primitives: colors, attribute flags and a copied cell snapshot.
//!
//! The cell buffer itself stores these in parallel arrays (see
//! [`CellBuffer`](super::CellBuffer)); [`CellView`] is only the value handed
//! out when a caller reads a single cell.

use bitflags::bitflags;

/// True-color RGB representation.
///
/// Uses 3 bytes for 24-bit color depth.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Per-cell text attributes.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use cellgrid::Attrs;
    /// let style = Attrs::BOLD | Attrs::ITALIC;
    /// assert!(style.contains(Attrs::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Italic text
        const ITALIC = 0b0000_0010;
        /// Underlined text
        const UNDERLINE = 0b0000_0100;
    }
}

impl Attrs {
    /// No attributes.
    pub const NONE: Self = Self::empty();
}

impl std::fmt::Debug for Attrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// Optional colors and attributes for `fill` and `print`.
///
/// `None` means "leave what is there".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Style {
    /// Foreground color to write.
    pub fg: Option<Rgb>,
    /// Background color to write.
    pub bg: Option<Rgb>,
    /// Attributes to write.
    pub attrs: Option<Attrs>,
}

impl Style {
    /// A style that writes nothing.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attrs: None,
    };

    /// The style `clear` writes: white on black, no attributes.
    pub const RESET: Self = Self {
        fg: Some(Rgb::DEFAULT_FG),
        bg: Some(Rgb::DEFAULT_BG),
        attrs: Some(Attrs::NONE),
    };

    /// Create a style that writes nothing.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Set the attributes (builder pattern).
    #[inline]
    #[must_use]
    pub const fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }
}

/// The code point of a blank cell.
pub const SPACE: u32 = ' ' as u32;

/// A copy of one cell's contents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellView {
    /// Code point stored in the cell.
    pub ch: u32,
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Attribute flags.
    pub attrs: Attrs,
}

impl CellView {
    /// A blank cell: space, white on black, no attributes.
    pub const EMPTY: Self = Self {
        ch: SPACE,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        attrs: Attrs::NONE,
    };

    /// The stored code point as a `char`, if it is a valid scalar value.
    #[inline]
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.ch)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_attrs_combine() {
        let attrs = Attrs::BOLD | Attrs::UNDERLINE;
        assert!(attrs.contains(Attrs::BOLD));
        assert!(attrs.contains(Attrs::UNDERLINE));
        assert!(!attrs.contains(Attrs::ITALIC));
        assert_eq!(Attrs::NONE.bits(), 0);
    }

    #[test]
    fn test_attrs_debug() {
        assert_eq!(format!("{:?}", Attrs::NONE), "NONE");
        assert_eq!(format!("{:?}", Attrs::BOLD | Attrs::ITALIC), "BOLD | ITALIC");
    }

    #[test]
    fn test_style_builder() {
        let style = Style::new().fg(Rgb::new(1, 2, 3)).attrs(Attrs::BOLD);
        assert_eq!(style.fg, Some(Rgb::new(1, 2, 3)));
        assert_eq!(style.bg, None);
        assert_eq!(style.attrs, Some(Attrs::BOLD));
    }

    #[test]
    fn test_empty_cell() {
        let cell = CellView::default();
        assert_eq!(cell.char(), Some(' '));
        assert_eq!(cell.fg, Rgb::WHITE);
        assert_eq!(cell.bg, Rgb::BLACK);
        assert_eq!(cell.attrs, Attrs::NONE);
    }
}
