//! Glyph registry: named text-art arrays used by `Grid::stamp`.
//!
//! A registry is an ordinary value. Build one per application context, fill
//! it from a directory of `.txt` assets or by hand, and pass it by reference
//! to whoever stamps.

use crate::buffer::SPACE;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// File extension of glyph assets.
pub const GLYPH_EXTENSION: &str = "txt";

/// A rectangular array of code points.
#[derive(Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: usize,
    cols: usize,
    data: Vec<u32>,
}

impl Glyph {
    /// Build a glyph from row-major code points.
    ///
    /// Returns `None` when `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<u32>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    /// Build a glyph from text lines, padding short lines with spaces.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let cols = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let mut data = Vec::with_capacity(lines.len() * cols);
        for line in lines {
            let start = data.len();
            data.extend(line.as_ref().chars().map(u32::from));
            data.resize(start + cols, SPACE);
        }
        Self {
            rows: lines.len(),
            cols,
            data,
        }
    }

    /// Parse a text asset: one row per line, padded to the widest line.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(&lines)
    }

    /// `(rows, cols)` of the glyph.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get an iterator over rows of code points.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks() rejects 0; a zero-width glyph has no data to yield anyway
        self.data.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Glyph({}x{})", self.rows, self.cols)
    }
}

/// Name → glyph lookup.
#[derive(Debug, Default, Clone)]
pub struct GlyphRegistry {
    glyphs: HashMap<String, Glyph>,
}

impl GlyphRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `glyph` under `name`, returning any glyph it replaced.
    pub fn insert(&mut self, name: impl Into<String>, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(name.into(), glyph)
    }

    /// Remove a glyph.
    pub fn remove(&mut self, name: &str) -> Option<Glyph> {
        self.glyphs.remove(name)
    }

    /// Look up a glyph by name.
    pub fn get(&self, name: &str) -> Result<&Glyph> {
        self.glyphs
            .get(name)
            .ok_or_else(|| Error::UnknownGlyph(name.to_string()))
    }

    /// Check whether a glyph is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Number of registered glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Drop every glyph.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    /// Load every `.txt` file in `dir`, keyed by file stem.
    ///
    /// A missing directory loads nothing. Files with another extension are
    /// skipped. Returns how many glyphs were loaded.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("glyph directory {} does not exist", dir.display());
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            let extension = path.extension().and_then(|e| e.to_str());
            if !path.is_file() || extension != Some(GLYPH_EXTENSION) {
                log::trace!("skipping {}", path.display());
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("skipping glyph with non UTF-8 name: {}", path.display());
                continue;
            };

            let glyph = Glyph::parse(&fs::read_to_string(&path)?);
            log::debug!("loaded glyph {name} ({}x{})", glyph.rows, glyph.cols);
            self.glyphs.insert(name.to_string(), glyph);
            loaded += 1;
        }
        Ok(loaded)
    }
}
