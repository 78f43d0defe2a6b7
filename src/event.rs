//! Input events: the normalized vocabulary every backend produces.
//!
//! There are exactly two kinds of event, keys and mouse buttons. Both are
//! plain values; routing through the module tree produces translated copies
//! rather than mutating them.

use crate::layout::Pos;
use bitflags::bitflags;

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

impl Key {
    /// Parse a key name.
    ///
    /// Accepts a single character (`"a"`), `"\n"`, the `KEY_*` names
    /// (`"KEY_BACKSPACE"`, `"KEY_LEFT"`, ...), the lowercase names terminals
    /// report (`"enter"`, `"backspace"`, `"page up"`, ...) and function keys
    /// (`"f1"`..`"f12"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(match c {
                '\n' | '\r' => Self::Enter,
                '\t' => Self::Tab,
                '\u{8}' | '\u{7f}' => Self::Backspace,
                '\u{1b}' => Self::Esc,
                c => Self::Char(c),
            });
        }

        let lower = name.to_ascii_lowercase();
        let bare = lower.strip_prefix("key_").unwrap_or(&lower);
        Some(match bare {
            "backspace" => Self::Backspace,
            "enter" | "return" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "home" => Self::Home,
            "end" => Self::End,
            "page up" | "pageup" | "ppage" => Self::PageUp,
            "page down" | "pagedown" | "npage" => Self::PageDown,
            "tab" => Self::Tab,
            "backtab" | "btab" => Self::BackTab,
            "delete" | "dc" => Self::Delete,
            "insert" | "ic" => Self::Insert,
            "esc" | "escape" => Self::Esc,
            "space" => Self::Char(' '),
            f => {
                let n: u8 = f.strip_prefix('f')?.parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                Self::F(n)
            }
        })
    }

    /// The character a printable key inserts, if any.
    #[inline]
    pub fn printable(&self) -> Option<char> {
        match *self {
            Self::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyMod: u8 {
        /// Shift key held.
        const SHIFT = 0b0000_0001;
        /// Control key held.
        const CTRL = 0b0000_0010;
        /// Alt/Option key held.
        const ALT = 0b0000_0100;
    }
}

impl KeyMod {
    /// No modifiers.
    pub const NONE: Self = Self::empty();
}

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held during the key press.
    pub mods: KeyMod,
}

impl KeyEvent {
    /// Create a key event.
    pub const fn new(key: Key, mods: KeyMod) -> Self {
        Self { key, mods }
    }

    /// A key event without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self::new(key, KeyMod::NONE)
    }
}

/// Left mouse button number.
pub const BUTTON_LEFT: u8 = 1;
/// Middle mouse button number.
pub const BUTTON_MIDDLE: u8 = 2;
/// Right mouse button number.
pub const BUTTON_RIGHT: u8 = 3;

/// A mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    /// Button number (1 = left, 2 = middle, 3 = right), if any.
    pub button: Option<u8>,
    /// `true` when pressed, `false` when released.
    pub pressed: bool,
    /// `(row, col)` in the receiving grid's coordinates.
    pub pos: Pos,
    /// Modifiers held during the event.
    pub mods: KeyMod,
}

impl MouseEvent {
    /// Create a mouse event without modifiers.
    pub const fn new(button: Option<u8>, pressed: bool, pos: Pos) -> Self {
        Self {
            button,
            pressed,
            pos,
            mods: KeyMod::NONE,
        }
    }

    /// Set the modifiers (builder pattern).
    #[must_use]
    pub const fn with_mods(mut self, mods: KeyMod) -> Self {
        self.mods = mods;
        self
    }

    /// A copy with `origin` subtracted from `pos`.
    ///
    /// The caller guarantees `pos` lies at or past `origin`.
    #[must_use]
    pub const fn translated(&self, (di, dj): Pos) -> Self {
        Self {
            pos: (self.pos.0 - di, self.pos.1 - dj),
            ..*self
        }
    }
}

impl Default for MouseEvent {
    fn default() -> Self {
        Self::new(None, true, (0, 0))
    }
}

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse button changed state.
    Mouse(MouseEvent),
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event() {
        let event = KeyEvent::new(Key::Char('a'), KeyMod::SHIFT);
        assert_eq!(event.key, Key::Char('a'));
        assert_eq!(event.mods, KeyMod::SHIFT);
    }

    #[test]
    fn test_mouse_event() {
        let event = MouseEvent::new(Some(1), true, (10, 20)).with_mods(KeyMod::CTRL);
        assert_eq!(event.button, Some(1));
        assert!(event.pressed);
        assert_eq!(event.pos, (10, 20));
        assert_eq!(event.mods, KeyMod::CTRL);
    }

    #[test]
    fn test_mouse_translate_keeps_other_fields() {
        let event = MouseEvent::new(Some(3), false, (2, 3)).with_mods(KeyMod::SHIFT);
        let local = event.translated((1, 1));
        assert_eq!(local.pos, (1, 2));
        assert_eq!(local.button, Some(3));
        assert!(!local.pressed);
        assert_eq!(local.mods, KeyMod::SHIFT);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("a"), Some(Key::Char('a')));
        assert_eq!(Key::from_name("\n"), Some(Key::Enter));
        assert_eq!(Key::from_name("enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("KEY_BACKSPACE"), Some(Key::Backspace));
        assert_eq!(Key::from_name("KEY_LEFT"), Some(Key::Left));
        assert_eq!(Key::from_name("page down"), Some(Key::PageDown));
        assert_eq!(Key::from_name("f1"), Some(Key::F(1)));
        assert_eq!(Key::from_name("f13"), None);
        assert_eq!(Key::from_name("bogus"), None);
    }

    #[test]
    fn test_printable() {
        assert_eq!(Key::Char('x').printable(), Some('x'));
        assert_eq!(Key::Char('\u{7}').printable(), None);
        assert_eq!(Key::Left.printable(), None);
    }

    #[test]
    fn test_keymod_combine() {
        let mods = KeyMod::SHIFT | KeyMod::CTRL;
        assert!(mods.contains(KeyMod::CTRL));
        assert_ne!(mods, KeyMod::CTRL);
    }
}
