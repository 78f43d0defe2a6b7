//! Widget Demo: Showcases the module tree on a real terminal.
//!
//! Demonstrates:
//! - BorderModule around a TextInputModule
//! - TabModule switching between two pages (Tab key)
//! - FpsMeter in the top row
//! - KeyTrigger stopping the loop (Ctrl+Q or ESC)

use cellgrid::event::{Key, KeyMod};
use cellgrid::runtime::TickerActor;
use cellgrid::widget::{
    BorderModule, FpsMeter, KeyTrigger, TabModule, TextInputConfig, TextInputModule,
};
use cellgrid::{
    format_time, Grid, ModuleTree, Rect, Rgb, RootGrid, RunConfig, Runner, Style, SubGrid,
    TermBackend, TermConfig, Widget,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

const PANEL_BG: Rgb = Rgb::new(20, 20, 30);
const TEXT_FG: Rgb = Rgb::new(180, 180, 180);

/// A page of static lines plus an uptime clock.
struct Page {
    title: &'static str,
    lines: &'static [&'static str],
    started: Instant,
}

impl Widget for Page {
    fn draw(&mut self, grid: &SubGrid) -> cellgrid::Result<()> {
        let style = Style::new().fg(TEXT_FG).bg(PANEL_BG);
        grid.fill(Some(' '), Style::new().bg(PANEL_BG))?;

        let (rows, cols) = grid.shape();
        let uptime = format!("uptime {}", format_time(self.started.elapsed().as_secs()));
        let header: String = format!("{}  {uptime}", self.title).chars().take(cols).collect();
        if rows > 0 && !header.is_empty() {
            grid.print(&header, (0, 0), Style::new().fg(Rgb::WHITE).bg(PANEL_BG))?;
        }
        for (i, line) in self.lines.iter().enumerate() {
            let line: String = line.chars().take(cols).collect();
            if i + 2 < rows && !line.is_empty() {
                grid.print(&line, (i + 2, 0), style)?;
            }
        }
        Ok(())
    }
}

fn main() -> cellgrid::Result<()> {
    let backend = TermBackend::stdout(TermConfig::default())?;
    let root = RootGrid::fit(backend)?;
    let mut tree = ModuleTree::new(&root)?;
    let top = tree.root();
    let (rows, cols) = tree.shape(top)?;

    tree.add(top, Rect::new(0, 0, 1, cols.min(16)), FpsMeter::new())?;

    let frame = Some(Rect::new(1, 0, rows, cols));
    let border = BorderModule::attach(&mut tree, top, frame, BorderModule::new(1))?;
    let inner = BorderModule::inner_box(&tree, border)?;
    let (inner_rows, inner_cols) = inner.shape();
    let body = tree.add(top, inner, cellgrid::Blank)?;

    let page_rect = Rect::new(0, 0, inner_rows.saturating_sub(1), inner_cols);
    let started = Instant::now();
    let help = tree.add(
        body,
        page_rect,
        Page {
            title: "cellgrid widgets",
            lines: &[
                "Type in the field below.",
                "",
                "  Tab      switch page",
                "  Left/Right/Home/End  move cursor",
                "  Ctrl+Q / ESC         exit",
            ],
            started,
        },
    )?;
    let about = tree.add(
        body,
        page_rect,
        Page {
            title: "about",
            lines: &[
                "Every module draws into a window of one shared buffer.",
                "The terminal backend writes only the cells that changed.",
            ],
            started,
        },
    )?;
    let tabs = TabModule::attach(&mut tree, body, vec![help, about])?;

    let input_rect = Rect::new(inner_rows.saturating_sub(1), 0, inner_rows, inner_cols);
    tree.add(
        body,
        input_rect,
        TextInputModule::with_config(
            "",
            TextInputConfig {
                placeholder: "say something".into(),
                prompt: "> ".into(),
                ..TextInputConfig::default()
            },
        ),
    )?;

    let config = RunConfig::default();
    let mut runner = Runner::new(config.clone());
    let stop = runner.stop_handle();
    let esc_stop = stop.clone();
    tree.add_fill(top, KeyTrigger::new(Key::Char('q'), KeyMod::CTRL, move || stop.stop()))?;
    tree.add_fill(top, KeyTrigger::new(Key::Esc, KeyMod::NONE, move || esc_stop.stop()))?;

    let switch = Rc::new(Cell::new(false));
    let flag = Rc::clone(&switch);
    tree.add_fill(top, KeyTrigger::new(Key::Tab, KeyMod::NONE, move || flag.set(true)))?;

    let ticker = TickerActor::spawn(config.frame_interval())?;
    while !runner.stop_handle().is_stopped() {
        runner.step(&mut tree, &root)?;
        if switch.replace(false) {
            let next = tree
                .widget::<TabModule>(tabs)
                .map_or(0, |t| (t.index() + 1) % t.tabs().len());
            TabModule::select(&mut tree, tabs, next)?;
        }
        if ticker.receiver().recv().is_err() {
            break;
        }
    }
    ticker.join();
    Ok(())
}
