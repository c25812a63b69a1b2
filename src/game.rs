//! Host-facing game facade
//!
//! Bundles the world state with the shared key state and sprite slot. Input
//! listeners call `key_down`/`key_up`; the frame scheduler calls `frame` and
//! stops once it returns `FrameStatus::Stopped`.

use crate::renderer::{SpriteSlot, Surface};
use crate::sim::{AutopilotCommand, FrameStatus, GameKey, GameState, InputState, fire, tick};
use crate::ui::Hud;

pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub sprite: SpriteSlot,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            sprite: SpriteSlot::Pending,
        }
    }

    /// Key, touch button or mouse button pressed.
    ///
    /// Every press of the fire key is a fire edge (host key-repeat included);
    /// the cooldown decides whether a shot comes out.
    pub fn key_down(&mut self, key: char) {
        self.input.set(key, true);
        if GameKey::from_char(key) == Some(GameKey::Fire) {
            fire(&mut self.state);
        }
    }

    pub fn key_up(&mut self, key: char) {
        self.input.set(key, false);
    }

    /// Install the sprite load result
    pub fn set_sprite(&mut self, sprite: SpriteSlot) {
        if sprite == SpriteSlot::Failed {
            log::warn!("Player sprite failed to load, using placeholder");
        }
        self.sprite = sprite;
    }

    /// Drive the keys from an autopilot command
    pub fn apply(&mut self, command: AutopilotCommand) {
        let keys = [
            (GameKey::Left, command.left),
            (GameKey::Right, command.right),
            (GameKey::Jump, command.jump),
            (GameKey::Fire, command.fire),
        ];
        for (key, held) in keys {
            let c = key.as_char();
            if held {
                self.key_down(c);
            } else {
                self.key_up(c);
            }
        }
    }

    /// One scheduled frame
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface, hud: &mut dyn Hud) -> FrameStatus {
        tick(&mut self.state, &self.input, now_ms, &self.sprite, surface, hud)
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }
}
