//! Terminal backend: incremental ANSI output through crossterm.
//!
//! The backend keeps a snapshot of what it last put on screen. The first
//! draw (and the first after a resize) repaints everything; later draws emit
//! only the cells that changed. Output for a frame is collected and written
//! with one `write_all`.

use super::input::convert_event;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::CellBuffer;
use crate::error::Result;
use crate::event::Event;
use crate::grid::Backend;
use crate::layout::Shape;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

/// Configuration for the terminal backend.
#[derive(Debug, Clone)]
pub struct TermConfig {
    /// How long `events()` waits for the first event.
    pub poll_timeout: Duration,
    /// Whether to enable mouse capture.
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::ZERO,
            enable_mouse: true,
            alternate_screen: true,
        }
    }
}

/// Render statistics for debugging/profiling.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Frames that repainted the whole screen.
    pub full_redraws: u64,
    /// Total cells changed across incremental frames.
    pub cells_changed: u64,
    /// Total bytes written to the terminal.
    pub bytes_written: u64,
    /// Bytes written by the last frame.
    pub last_frame_bytes: usize,
    /// Last render time in microseconds.
    pub last_render_us: u64,
}

/// A [`Backend`] writing ANSI sequences to a terminal.
pub struct TermBackend<W: Write = Stdout> {
    writer: W,
    /// `None` means ask the terminal.
    fixed_shape: Option<Shape>,
    config: TermConfig,
    /// What is on screen; `None` forces a full repaint.
    current: Option<CellBuffer>,
    diff_state: DiffState,
    output: Vec<u8>,
    stats: RenderStats,
    /// Terminal modes were changed and must be restored on drop.
    interactive: bool,
}

impl TermBackend<Stdout> {
    /// Take over the terminal: raw mode, hidden cursor and, as configured,
    /// the alternate screen and mouse capture. Dropping the backend restores
    /// the terminal.
    pub fn stdout(config: TermConfig) -> Result<Self> {
        let mut backend = Self {
            writer: io::stdout(),
            fixed_shape: None,
            config,
            current: None,
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            stats: RenderStats::default(),
            interactive: true,
        };
        // on failure, Drop undoes whatever was already enabled
        backend.enter()?;
        Ok(backend)
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        if self.config.alternate_screen {
            execute!(self.writer, EnterAlternateScreen)?;
        }
        if self.config.enable_mouse {
            execute!(self.writer, EnableMouseCapture)?;
        }
        execute!(self.writer, cursor::Hide)?;
        log::debug!("terminal backend entered raw mode ({:?})", self.config);
        Ok(())
    }
}

impl<W: Write> TermBackend<W> {
    /// Render into `writer` as if it were a terminal of `shape`.
    ///
    /// Terminal modes are left alone and `events()` yields nothing.
    pub fn with_writer(writer: W, shape: Shape) -> Self {
        Self {
            writer,
            fixed_shape: Some(shape),
            config: TermConfig::default(),
            current: None,
            diff_state: DiffState::new(),
            output: Vec::with_capacity(4096),
            stats: RenderStats::default(),
            interactive: false,
        }
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Render statistics so far.
    pub const fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Repaint everything on the next draw.
    pub fn invalidate(&mut self) {
        self.current = None;
    }
}

impl<W: Write> Backend for TermBackend<W> {
    fn real_shape(&self) -> Result<Shape> {
        if let Some(shape) = self.fixed_shape {
            return Ok(shape);
        }
        let (cols, rows) = terminal::size()?;
        Ok((usize::from(rows), usize::from(cols)))
    }

    fn events(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if !self.interactive {
            return Ok(events);
        }

        let mut timeout = self.config.poll_timeout;
        while event::poll(timeout)? {
            match event::read()? {
                event::Event::Resize(cols, rows) => {
                    log::debug!("terminal resized to {cols}x{rows}");
                    self.invalidate();
                }
                raw => events.extend(convert_event(raw)),
            }
            timeout = Duration::ZERO;
        }
        Ok(events)
    }

    fn draw(&mut self, buffer: &CellBuffer) -> Result<()> {
        let start = Instant::now();
        self.output.clear();

        match &self.current {
            Some(current) if current.shape() == buffer.shape() => {
                let result = render_diff(current, buffer, &mut self.output, &mut self.diff_state);
                self.stats.cells_changed += result.cells_changed as u64;
            }
            _ => {
                render_full(buffer, &mut self.output);
                self.diff_state.reset();
                self.stats.full_redraws += 1;
            }
        }

        if !self.output.is_empty() {
            self.writer.write_all(&self.output)?;
            self.writer.flush()?;
        }

        match &mut self.current {
            Some(current) if current.shape() == buffer.shape() => current.clone_from(buffer),
            slot => *slot = Some(buffer.clone()),
        }

        self.stats.frames += 1;
        self.stats.bytes_written += self.output.len() as u64;
        self.stats.last_frame_bytes = self.output.len();
        self.stats.last_render_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        log::trace!("frame {} wrote {} bytes", self.stats.frames, self.output.len());
        Ok(())
    }
}

impl<W: Write> Drop for TermBackend<W> {
    fn drop(&mut self) {
        if !self.interactive {
            return;
        }
        let _ = execute!(self.writer, cursor::Show);
        if self.config.enable_mouse {
            let _ = execute!(self.writer, DisableMouseCapture);
        }
        if self.config.alternate_screen {
            let _ = execute!(self.writer, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl<W: Write> std::fmt::Debug for TermBackend<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermBackend")
            .field("fixed_shape", &self.fixed_shape)
            .field("interactive", &self.interactive)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
