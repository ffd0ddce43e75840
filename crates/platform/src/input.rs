//! Keyboard state: a pressed-key set consulted once per frame.

use std::collections::HashSet;

use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks which physical keys are currently held. Events update the set and
/// the frame loop polls it, so held-key repetition runs at frame rate rather
/// than the OS key-repeat rate.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event and update the held set.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.set_key(code, event.state.is_pressed());
        }
    }

    pub(crate) fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_down.insert(key);
        } else {
            self.keys_down.remove(&key);
        }
    }

    /// Returns true if the key is currently held down.
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_the_held_set() {
        let mut input = InputState::new();
        assert!(!input.key_down(KeyCode::KeyW));

        input.set_key(KeyCode::KeyW, true);
        assert!(input.key_down(KeyCode::KeyW));

        input.set_key(KeyCode::KeyW, false);
        assert!(!input.key_down(KeyCode::KeyW));
    }

    #[test]
    fn repeated_presses_are_idempotent() {
        let mut input = InputState::new();
        input.set_key(KeyCode::Escape, true);
        input.set_key(KeyCode::Escape, true);
        input.set_key(KeyCode::Escape, false);
        assert!(!input.key_down(KeyCode::Escape));
    }

    #[test]
    fn held_keys_are_independent() {
        let mut input = InputState::new();
        input.set_key(KeyCode::KeyW, true);
        input.set_key(KeyCode::KeyQ, true);
        input.set_key(KeyCode::KeyW, false);
        assert!(!input.key_down(KeyCode::KeyW));
        assert!(input.key_down(KeyCode::KeyQ));
    }
}
