//! Conversion from crossterm input events to [`Event`]s.

use crate::event::{
    Event, Key, KeyEvent, KeyMod, MouseEvent, BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT,
};
use crossterm::event::{self as ct, KeyEventKind};

/// Convert a crossterm event.
///
/// Only key presses and mouse button changes map to an [`Event`]; releases,
/// repeats, motion, scrolling, focus, paste and resize yield `None`.
pub fn convert_event(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            let code = convert_key_code(key.code)?;
            Some(KeyEvent::new(code, convert_modifiers(key.modifiers)).into())
        }
        ct::Event::Mouse(mouse) => convert_mouse_event(mouse).map(Event::Mouse),
        _ => None,
    }
}

/// Convert a crossterm key code. Codes with no [`Key`] yield `None`.
pub fn convert_key_code(code: ct::KeyCode) -> Option<Key> {
    Some(match code {
        ct::KeyCode::Char(c) => Key::Char(c),
        ct::KeyCode::F(n) => Key::F(n),
        ct::KeyCode::Backspace => Key::Backspace,
        ct::KeyCode::Enter => Key::Enter,
        ct::KeyCode::Left => Key::Left,
        ct::KeyCode::Right => Key::Right,
        ct::KeyCode::Up => Key::Up,
        ct::KeyCode::Down => Key::Down,
        ct::KeyCode::Home => Key::Home,
        ct::KeyCode::End => Key::End,
        ct::KeyCode::PageUp => Key::PageUp,
        ct::KeyCode::PageDown => Key::PageDown,
        ct::KeyCode::Tab => Key::Tab,
        ct::KeyCode::BackTab => Key::BackTab,
        ct::KeyCode::Delete => Key::Delete,
        ct::KeyCode::Insert => Key::Insert,
        ct::KeyCode::Esc => Key::Esc,
        _ => return None,
    })
}

/// Convert crossterm modifiers. Modifiers other than shift, control and alt
/// are dropped.
pub fn convert_modifiers(mods: ct::KeyModifiers) -> KeyMod {
    let mut out = KeyMod::NONE;
    out.set(KeyMod::SHIFT, mods.contains(ct::KeyModifiers::SHIFT));
    out.set(KeyMod::CTRL, mods.contains(ct::KeyModifiers::CONTROL));
    out.set(KeyMod::ALT, mods.contains(ct::KeyModifiers::ALT));
    out
}

/// Convert a crossterm mouse event. Only button presses and releases map.
pub fn convert_mouse_event(mouse: ct::MouseEvent) -> Option<MouseEvent> {
    let (button, pressed) = match mouse.kind {
        ct::MouseEventKind::Down(button) => (button, true),
        ct::MouseEventKind::Up(button) => (button, false),
        _ => return None,
    };
    let pos = (usize::from(mouse.row), usize::from(mouse.column));
    Some(
        MouseEvent::new(Some(convert_mouse_button(button)), pressed, pos)
            .with_mods(convert_modifiers(mouse.modifiers)),
    )
}

/// Button number of a crossterm mouse button.
pub const fn convert_mouse_button(button: ct::MouseButton) -> u8 {
    match button {
        ct::MouseButton::Left => BUTTON_LEFT,
        ct::MouseButton::Middle => BUTTON_MIDDLE,
        ct::MouseButton::Right => BUTTON_RIGHT,
    }
}
