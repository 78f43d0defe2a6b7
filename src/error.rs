//! Error types for grid, module and backend operations.

use thiserror::Error;

/// Error type for every fallible cellgrid operation.
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate or box edge lies outside the grid it addresses.
    #[error("{what} {value} out of bounds (limit {limit})")]
    OutOfBounds {
        /// Which coordinate was rejected (e.g. "row", "box column").
        what: &'static str,
        /// The offending value.
        value: usize,
        /// The bound that was violated.
        limit: usize,
    },

    /// `stamp` referenced a glyph that was never registered.
    #[error("unknown glyph: {0}")]
    UnknownGlyph(String),

    /// A `ModuleId` that no longer (or never did) name a node in the tree.
    #[error("unknown module")]
    UnknownModule,

    /// Typed widget access named a widget type the module does not hold.
    #[error("module does not hold a {0}")]
    WidgetType(&'static str),

    /// A sub-grid outlived the root grid that owns its buffer.
    #[error("sub-grid is detached from its root grid")]
    Detached,

    /// A tab container was built without tabs.
    #[error("tab module needs at least one tab")]
    EmptyTabs,

    /// A tab index past the end of the tab list.
    #[error("tab index {index} out of range for {len} tabs")]
    TabIndex {
        /// Requested index.
        index: usize,
        /// Number of tabs.
        len: usize,
    },

    /// An I/O error from the asset loader or a backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check `value <= limit`, naming the coordinate on failure.
    pub(crate) const fn check(what: &'static str, value: usize, limit: usize) -> Result<()> {
        if value > limit {
            Err(Self::OutOfBounds { what, value, limit })
        } else {
            Ok(())
        }
    }

    /// Check `value < len`, naming the coordinate on failure.
    pub(crate) const fn check_index(what: &'static str, value: usize, len: usize) -> Result<()> {
        if value >= len {
            Err(Self::OutOfBounds { what, value, limit: len })
        } else {
            Ok(())
        }
    }
}
