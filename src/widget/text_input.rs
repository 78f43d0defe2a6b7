//! Text Input Widget: single-line editable text with a cursor.
//!
//! Printable keys are inserted at the cursor, Backspace and Delete remove
//! around it, and the arrow, Home and End keys move it. The first row of the
//! module's grid shows a window of the text that scrolls to keep the cursor
//! visible.

use crate::buffer::{Rgb, Style};
use crate::error::Result;
use crate::event::{Event, Key, KeyMod};
use crate::grid::{Grid, SubGrid};
use crate::module::Widget;

/// Frames per cursor blink period.
const BLINK_PERIOD: u64 = 30;

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Foreground color for text.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Cursor color.
    pub cursor_fg: Rgb,
    /// Placeholder text shown when empty.
    pub placeholder: String,
    /// Placeholder text color.
    pub placeholder_fg: Rgb,
    /// Prompt prefix (e.g., "> ").
    pub prompt: String,
    /// Prompt color.
    pub prompt_fg: Rgb,
    /// Blink the cursor instead of showing it steadily.
    pub blink: bool,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::new(30, 30, 30),
            cursor_fg: Rgb::new(0, 255, 255),
            placeholder: String::new(),
            placeholder_fg: Rgb::new(100, 100, 100),
            prompt: String::new(),
            prompt_fg: Rgb::new(0, 255, 255),
            blink: false,
        }
    }
}

/// A single-line text input.
///
/// `Display` yields the current text verbatim.
#[derive(Debug, Clone)]
pub struct TextInputModule {
    text: Vec<char>,
    /// Always `<= text.len()`.
    cursor: usize,
    config: TextInputConfig,
    /// Frame counter for cursor blinking.
    frame: u64,
}

impl TextInputModule {
    /// Create an input holding `start_text`, cursor at the end.
    pub fn new(start_text: &str) -> Self {
        Self::with_config(start_text, TextInputConfig::default())
    }

    /// Create an input with custom configuration.
    pub fn with_config(start_text: &str, config: TextInputConfig) -> Self {
        let text: Vec<char> = start_text.chars().collect();
        Self {
            cursor: text.len(),
            text,
            config,
            frame: 0,
        }
    }

    /// Cursor position in characters.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.cursor = self.text.len();
    }

    /// Empty the input.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the input empty.
    pub fn take(&mut self) -> String {
        let text = self.to_string();
        self.clear();
        text
    }

    fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    fn cursor_visible(&self) -> bool {
        !self.config.blink || self.frame % BLINK_PERIOD < BLINK_PERIOD / 2
    }
}

impl std::fmt::Display for TextInputModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl Widget for TextInputModule {
    fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    fn draw(&mut self, grid: &SubGrid) -> Result<()> {
        let width = grid.shape().1;
        grid.fill(Some(' '), Style::new().fg(self.config.fg).bg(self.config.bg))?;
        if width == 0 || grid.shape().0 == 0 {
            return Ok(());
        }

        let prompt: String = self.config.prompt.chars().take(width).collect();
        let prompt_len = prompt.chars().count();
        grid.print(&prompt, (0, 0), Style::new().fg(self.config.prompt_fg))?;

        let text_width = width - prompt_len;
        if text_width == 0 {
            return Ok(());
        }

        if self.text.is_empty() && !self.config.placeholder.is_empty() {
            let placeholder: String = self.config.placeholder.chars().take(text_width).collect();
            return grid.print(
                &placeholder,
                (0, prompt_len),
                Style::new().fg(self.config.placeholder_fg),
            );
        }

        // scroll so the cursor cell (possibly one past the text) stays visible
        let scroll = (self.cursor + 1).saturating_sub(text_width);
        let visible: String = self.text.iter().skip(scroll).take(text_width).collect();
        grid.print(&visible, (0, prompt_len), Style::NONE)?;

        if self.cursor_visible() {
            let under = self.text.get(self.cursor).copied().unwrap_or(' ');
            let mut buf = [0; 4];
            grid.print(
                under.encode_utf8(&mut buf),
                (0, prompt_len + self.cursor - scroll),
                Style::new().fg(self.config.bg).bg(self.config.cursor_fg),
            )?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.key {
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.text.len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.text.len(),
            Key::Char(_) if key.mods.intersects(KeyMod::CTRL | KeyMod::ALT) => return false,
            other => match other.printable() {
                Some(c) => self.insert_char(c),
                None => return false,
            },
        }
        true
    }
}
