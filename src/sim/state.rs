//! World state and core simulation types
//!
//! Everything the loop mutates lives in one owned `GameState`; nothing is
//! ambient or global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::enemy::Enemy;
use super::player::{DamageOutcome, Player};
use super::projectile::Projectile;
use super::spawner::EnemySpawner;
use crate::ui::Hud;

/// Run state of the loop. One-way: Running -> GameOver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// Frames are being simulated
    #[default]
    Running,
    /// Lives exhausted; the host should stop scheduling frames
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn sides and enemy animation phases
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Host timestamp of the previous frame (ms)
    pub last_time_ms: f64,
    /// Sum of frame deltas (ms), drives enemy speed
    pub elapsed_ms: f64,
    /// Frames simulated so far
    pub frame_count: u64,
    /// Frames until the next shot is allowed
    pub fire_cooldown: u32,
    pub spawner: EnemySpawner,
    pub player: Player,
    /// Active projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Active enemies, oldest first
    pub enemies: Vec<Enemy>,
    /// Enemies destroyed by projectiles
    pub enemies_defeated: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            last_time_ms: 0.0,
            elapsed_ms: 0.0,
            frame_count: 0,
            fire_cooldown: 0,
            spawner: EnemySpawner::default(),
            player: Player::spawn(),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            enemies_defeated: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Hit the player and report the result to the HUD.
    /// Losing the last life ends the run.
    pub fn damage_player(&mut self, hud: &mut dyn Hud) -> DamageOutcome {
        let outcome = self.player.take_damage();
        match outcome {
            DamageOutcome::Ignored => {}
            DamageOutcome::Hurt { lives } => {
                log::debug!("Player hit on frame {}, {} lives left", self.frame_count, lives);
                hud.show_lives(lives);
            }
            DamageOutcome::Defeated => {
                hud.show_lives(0);
                self.phase = GamePhase::GameOver;
                log::info!(
                    "Game over after {} frames ({:.1}s), {} enemies defeated",
                    self.frame_count,
                    self.elapsed_ms / 1000.0,
                    self.enemies_defeated
                );
                hud.show_game_over();
            }
        }
        outcome
    }
}

/// Serializable snapshot of a run, for logs and host summaries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub phase: GamePhase,
    pub frames: u64,
    pub elapsed_ms: f64,
    pub lives: u8,
    pub enemies_defeated: u32,
    pub enemies_active: usize,
    pub projectiles_active: usize,
}

impl From<&GameState> for RunSummary {
    fn from(state: &GameState) -> Self {
        Self {
            seed: state.seed,
            phase: state.phase,
            frames: state.frame_count,
            elapsed_ms: state.elapsed_ms,
            lives: state.player.lives,
            enemies_defeated: state.enemies_defeated,
            enemies_active: state.enemies.len(),
            projectiles_active: state.projectiles.len(),
        }
    }
}
