//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per rendered frame, fixed update/draw order
//! - Seeded RNG only (spawn sides, animation phases)
//! - Newest-first iteration over entity lists
//! - Drawing goes through the abstract `renderer::Surface`

pub mod autopilot;
pub mod collision;
pub mod enemy;
pub mod input;
pub mod player;
pub mod projectile;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::{AutopilotCommand, autopilot};
pub use collision::{Aabb, HasBounds, collides, intersects};
pub use enemy::Enemy;
pub use input::{GameKey, InputState};
pub use player::{DamageOutcome, Facing, Player};
pub use projectile::Projectile;
pub use spawner::EnemySpawner;
pub use state::{GamePhase, GameState, RunSummary};
pub use tick::{FrameStatus, fire, tick};
