//! Terminal support: a crossterm-driven [`Backend`](crate::grid::Backend).
//!
//! ```rust,no_run
//! use cellgrid::grid::{Grid, RootGrid};
//! use cellgrid::terminal::{TermBackend, TermConfig};
//!
//! let backend = TermBackend::stdout(TermConfig::default())?;
//! let root = RootGrid::fit(backend)?;
//! root.print("hello", (0, 0), Default::default())?;
//! root.draw()?;
//! # Ok::<(), cellgrid::Error>(())
//! ```

mod backend;
pub mod input;

pub use backend::{RenderStats, TermBackend, TermConfig};
