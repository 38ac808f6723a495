//! Keyboard input state for the viewer
//!
//! The viewer is windowless, so keys arrive as plain `KeyCode`s from whatever
//! front end drives it. `InputState` keeps the held set (continuous
//! rotate/translate) apart from the keys pressed this frame (one-shot
//! commands such as switching model).

use std::collections::HashSet;

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    E,
    C,
    R,
    T,
    N,
    P,
    H,
    U,
    Escape,
    LeftShift,
}

impl KeyCode {
    /// Map a character to a key, ignoring case
    pub fn from_char(ch: char) -> Option<Self> {
        let key = match ch.to_ascii_lowercase() {
            'w' => KeyCode::W,
            'a' => KeyCode::A,
            's' => KeyCode::S,
            'd' => KeyCode::D,
            'e' => KeyCode::E,
            'c' => KeyCode::C,
            'r' => KeyCode::R,
            't' => KeyCode::T,
            'n' => KeyCode::N,
            'p' => KeyCode::P,
            'h' => KeyCode::H,
            'u' => KeyCode::U,
            '\u{1b}' => KeyCode::Escape,
            _ => return None,
        };
        Some(key)
    }
}

/// Held and just-pressed key state
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed_this_frame: Vec<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down
    ///
    /// Auto-repeat (pressing an already held key) does not count as a new press.
    pub fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.pressed_this_frame.push(key);
        }
    }

    /// Record a key going up
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Release every held key
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Forget this frame's presses; held keys stay held
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_frame.contains(&key)
    }

    /// Keys pressed this frame, in press order
    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed_this_frame
    }
}
