use log::warn;
use std::collections::HashSet;

/// The four directional keys the simulation reads.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

/// Instantaneous key-down state, fed by the shell's press/release edges.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    down: HashSet<Key>,
}

impl InputState {
    pub fn new() -> InputState {
        InputState::default()
    }
    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }
    pub fn release(&mut self, key: Key) {
        if !self.down.remove(&key) {
            warn!("not pressed key released! {:?}", key);
        }
    }
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

#[cfg(test)]
mod input_test {
    use super::*;
    #[test]
    fn press_release() {
        let mut input = InputState::new();
        assert!(!input.is_down(Key::Right));
        input.press(Key::Right);
        assert!(input.is_down(Key::Right));
        assert!(!input.is_down(Key::Left));
        input.release(Key::Right);
        assert!(!input.is_down(Key::Right));
    }
    #[test]
    fn release_without_press_is_harmless() {
        let mut input = InputState::new();
        input.release(Key::Up);
        assert!(!input.is_down(Key::Up));
    }
}
