//! Trigger widgets: run a callback on a matching key or mouse button.

use crate::event::{Event, Key, KeyMod};
use crate::module::Widget;

/// Calls a function when a key is pressed with exactly the given modifiers.
pub struct KeyTrigger {
    key: Key,
    mods: KeyMod,
    callback: Box<dyn FnMut()>,
}

impl KeyTrigger {
    /// Trigger `callback` on `key` held with exactly `mods`.
    pub fn new(key: Key, mods: KeyMod, callback: impl FnMut() + 'static) -> Self {
        Self {
            key,
            mods,
            callback: Box::new(callback),
        }
    }

    /// The key this trigger waits for.
    pub const fn key(&self) -> Key {
        self.key
    }

    /// The modifiers this trigger requires.
    pub const fn mods(&self) -> KeyMod {
        self.mods
    }
}

impl Widget for KeyTrigger {
    fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && key.key == self.key
            && key.mods == self.mods
        {
            (self.callback)();
            return true;
        }
        false
    }
}

impl std::fmt::Debug for KeyTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTrigger")
            .field("key", &self.key)
            .field("mods", &self.mods)
            .finish_non_exhaustive()
    }
}

/// Calls one function when a mouse button goes down and another when it
/// comes back up.
pub struct ButtonTrigger {
    button: u8,
    on_down: Box<dyn FnMut()>,
    on_up: Box<dyn FnMut()>,
}

impl ButtonTrigger {
    /// Trigger on mouse `button` (1 = left, 2 = middle, 3 = right).
    pub fn new(button: u8, on_down: impl FnMut() + 'static, on_up: impl FnMut() + 'static) -> Self {
        Self {
            button,
            on_down: Box::new(on_down),
            on_up: Box::new(on_up),
        }
    }

    /// Trigger only on press.
    pub fn on_press(button: u8, on_down: impl FnMut() + 'static) -> Self {
        Self::new(button, on_down, || {})
    }

    /// The button this trigger waits for.
    pub const fn button(&self) -> u8 {
        self.button
    }
}

impl Widget for ButtonTrigger {
    fn handle_event(&mut self, event: &Event) -> bool {
        let Event::Mouse(mouse) = event else {
            return false;
        };
        if mouse.button != Some(self.button) {
            return false;
        }
        if mouse.pressed {
            (self.on_down)();
        } else {
            (self.on_up)();
        }
        true
    }
}

impl std::fmt::Debug for ButtonTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonTrigger")
            .field("button", &self.button)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyEvent, MouseEvent};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn test_key_trigger_exact_mods() {
        let (count, callback) = counter();
        let mut trigger = KeyTrigger::new(Key::Char('x'), KeyMod::CTRL, callback);

        assert!(!trigger.handle_event(&KeyEvent::plain(Key::Char('x')).into()));
        assert_eq!(count.get(), 0);

        let both = KeyEvent::new(Key::Char('x'), KeyMod::CTRL | KeyMod::SHIFT);
        assert!(!trigger.handle_event(&both.into()));
        assert_eq!(count.get(), 0);

        assert!(trigger.handle_event(&KeyEvent::new(Key::Char('x'), KeyMod::CTRL).into()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_key_trigger_ignores_mouse() {
        let (count, callback) = counter();
        let mut trigger = KeyTrigger::new(Key::Enter, KeyMod::NONE, callback);
        assert!(!trigger.handle_event(&MouseEvent::default().into()));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_button_trigger() {
        let (downs, on_down) = counter();
        let (ups, on_up) = counter();
        let mut trigger = ButtonTrigger::new(1, on_down, on_up);

        assert!(!trigger.handle_event(&MouseEvent::new(Some(2), true, (0, 0)).into()));
        assert_eq!(downs.get(), 0);

        assert!(trigger.handle_event(&MouseEvent::new(Some(1), true, (0, 0)).into()));
        assert_eq!((downs.get(), ups.get()), (1, 0));

        assert!(trigger.handle_event(&MouseEvent::new(Some(1), false, (0, 0)).into()));
        assert_eq!((downs.get(), ups.get()), (1, 1));
    }

    #[test]
    fn test_button_trigger_ignores_keys_and_no_button() {
        let (downs, on_down) = counter();
        let mut trigger = ButtonTrigger::on_press(1, on_down);
        assert!(!trigger.handle_event(&KeyEvent::plain(Key::Char('a')).into()));
        assert!(!trigger.handle_event(&MouseEvent::new(None, true, (0, 0)).into()));
        assert_eq!(downs.get(), 0);
    }
}
