//! Frame driver: events, tick, draw and flush at a steady rate.
//!
//! Each frame runs, in order:
//!
//! 1. `root.events()`, each routed through `tree.handle_event`
//! 2. `tree.tick()`
//! 3. `tree.draw()`
//! 4. `tree.flush()`, which reaches the backend once
//!
//! [`Runner::run`] repeats this, paced by a [`TickerActor`], until its
//! [`StopHandle`] is triggered.

mod ticker;

pub use ticker::{Tick, TickerActor};

use crate::error::Result;
use crate::grid::Grid;
use crate::module::ModuleTree;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Configuration for the frame driver.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_frames: None,
        }
    }
}

impl RunConfig {
    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

/// Shared flag that ends [`Runner::run`] after the current frame.
///
/// Clone it into callbacks (e.g. a `KeyTrigger`) to stop from inside the
/// tree.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    /// Request a stop.
    pub fn stop(&self) {
        self.0.set(true);
    }

    /// Whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Drives a module tree frame by frame.
#[derive(Debug, Default)]
pub struct Runner {
    config: RunConfig,
    stop: StopHandle,
    frames: u64,
}

impl Runner {
    /// Create a runner.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    /// A handle that stops [`run`](Self::run).
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Frames run so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame.
    pub fn step<G: Grid>(&mut self, tree: &mut ModuleTree, root: &G) -> Result<()> {
        for event in root.events()? {
            if !tree.handle_event(&event) {
                log::trace!("unhandled {event:?}");
            }
        }
        tree.tick();
        tree.draw()?;
        tree.flush()?;
        self.frames += 1;
        Ok(())
    }

    fn done(&self) -> bool {
        self.stop.is_stopped() || self.config.max_frames.is_some_and(|max| self.frames >= max)
    }

    /// Run frames until stopped or `max_frames` is reached.
    pub fn run<G: Grid>(&mut self, tree: &mut ModuleTree, root: &G) -> Result<()> {
        let ticker = TickerActor::spawn(self.config.frame_interval())?;
        log::debug!("running at {} fps", self.config.target_fps);

        while !self.done() {
            self.step(tree, root)?;
            if self.done() || ticker.receiver().recv().is_err() {
                break;
            }
        }

        ticker.join();
        log::debug!("stopped after {} frames", self.frames);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, KeyEvent, KeyMod};
    use crate::grid::RootGrid;
    use crate::layout::Rect;
    use crate::widget::{KeyTrigger, TextInputModule};

    #[test]
    fn test_step_routes_then_draws() {
        let root = RootGrid::headless((2, 8));
        let mut tree = ModuleTree::new(&root).unwrap();
        let input = tree
            .add(tree.root(), Rect::new(0, 0, 1, 8), TextInputModule::new(""))
            .unwrap();
        root.backend_mut().push_event(KeyEvent::plain(Key::Char('h')));
        root.backend_mut().push_event(KeyEvent::plain(Key::Char('i')));

        let mut runner = Runner::default();
        runner.step(&mut tree, &root).unwrap();

        assert_eq!(tree.widget::<TextInputModule>(input).unwrap().to_string(), "hi");
        assert_eq!(runner.frames(), 1);
        let backend = root.backend();
        assert_eq!(backend.draws(), 1);
        let frame = backend.last_frame().unwrap();
        assert_eq!(frame.cell(0, 0).unwrap().char(), Some('h'));
        assert_eq!(frame.cell(0, 1).unwrap().char(), Some('i'));
    }

    #[test]
    fn test_run_until_stopped() {
        let root = RootGrid::headless((2, 2));
        let mut tree = ModuleTree::new(&root).unwrap();
        let mut runner = Runner::new(RunConfig {
            target_fps: 1000,
            max_frames: None,
        });
        let stop = runner.stop_handle();
        let quit = KeyTrigger::new(Key::Char('q'), KeyMod::CTRL, move || stop.stop());
        tree.add_fill(tree.root(), quit).unwrap();
        root.backend_mut()
            .push_event(KeyEvent::new(Key::Char('q'), KeyMod::CTRL));

        runner.run(&mut tree, &root).unwrap();
        assert_eq!(runner.frames(), 1);
        assert!(runner.stop_handle().is_stopped());
    }

    #[test]
    fn test_run_max_frames() {
        let root = RootGrid::headless((2, 2));
        let mut tree = ModuleTree::new(&root).unwrap();
        let mut runner = Runner::new(RunConfig {
            target_fps: 1000,
            max_frames: Some(3),
        });
        runner.run(&mut tree, &root).unwrap();
        assert_eq!(runner.frames(), 3);
        assert_eq!(root.backend().draws(), 3);
    }

    #[test]
    fn test_frame_interval() {
        let config = RunConfig {
            target_fps: 50,
            ..RunConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
        let zero = RunConfig {
            target_fps: 0,
            ..RunConfig::default()
        };
        assert_eq!(zero.frame_interval(), Duration::from_secs(1));
    }
}
