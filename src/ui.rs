//! HUD collaborator
//!
//! The simulation only reports; presenting the lives readout and the
//! game-over notice is up to the host.

/// Receives HUD updates from the simulation
pub trait Hud {
    /// Lives count changed
    fn show_lives(&mut self, lives: u8);
    /// Terminal notification: the run is over
    fn show_game_over(&mut self);
}

/// Reports HUD updates through the `log` facade
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn show_lives(&mut self, lives: u8) {
        log::info!("Lives: {}", lives);
    }

    fn show_game_over(&mut self) {
        log::info!("Game Over!");
    }
}

/// Keeps every notification for later inspection
#[derive(Debug, Default, Clone)]
pub struct RecordingHud {
    pub lives: Vec<u8>,
    pub game_over_calls: u32,
}

impl Hud for RecordingHud {
    fn show_lives(&mut self, lives: u8) {
        self.lives.push(lives);
    }

    fn show_game_over(&mut self) {
        self.game_over_calls += 1;
    }
}
