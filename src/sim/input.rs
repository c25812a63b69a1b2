//! Shared key state
//!
//! Written by the host's keyboard/touch/mouse listeners, read once per frame
//! by the loop. Keys are normalized to lowercase so 'A' and 'a' are the same.

use std::collections::HashMap;

/// Semantic meaning of the keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    Jump,
    Fire,
}

impl GameKey {
    pub const fn as_char(self) -> char {
        match self {
            GameKey::Left => 'a',
            GameKey::Right => 'd',
            GameKey::Jump => 'w',
            GameKey::Fire => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(GameKey::Left),
            'd' => Some(GameKey::Right),
            'w' => Some(GameKey::Jump),
            'p' => Some(GameKey::Fire),
            _ => None,
        }
    }
}

/// Key identifier -> pressed. Last write wins per key.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<char, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: char, down: bool) {
        self.keys.insert(key.to_ascii_lowercase(), down);
    }

    pub fn is_down(&self, key: char) -> bool {
        self.keys
            .get(&key.to_ascii_lowercase())
            .copied()
            .unwrap_or(false)
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.is_down(key.as_char())
    }

    pub fn left(&self) -> bool {
        self.is_held(GameKey::Left)
    }

    pub fn right(&self) -> bool {
        self.is_held(GameKey::Right)
    }

    pub fn jump(&self) -> bool {
        self.is_held(GameKey::Jump)
    }

    pub fn fire_held(&self) -> bool {
        self.is_held(GameKey::Fire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        let mut input = InputState::new();
        input.set('A', true);
        assert!(input.is_down('a'));
        assert!(input.left());

        input.set('a', false);
        assert!(!input.is_down('A'));
    }

    #[test]
    fn test_unknown_keys_are_tracked_but_unmapped() {
        let mut input = InputState::new();
        input.set('x', true);
        assert!(input.is_down('x'));
        assert_eq!(GameKey::from_char('x'), None);
        assert!(!input.left() && !input.right() && !input.jump() && !input.fire_held());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(GameKey::from_char('P'), Some(GameKey::Fire));
        assert_eq!(GameKey::from_char('w'), Some(GameKey::Jump));
        assert_eq!(GameKey::from_char('D'), Some(GameKey::Right));
    }
}
