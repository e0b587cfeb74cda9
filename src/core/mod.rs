//! Core gameplay simulation: spawner, collision, difficulty, session loop.

pub mod collision;
pub mod constants;
pub mod events;
pub mod session;
pub mod spawner;
pub mod types;

pub use collision::{check_collision, out_of_bounds, CollisionOutcome};
pub use constants::*;
pub use events::{QuestSignal, SimEvent};
pub use session::GameSession;
pub use spawner::{gap_for_level, spacing_for_level, spawn_obstacle};
pub use types::{BirdState, GamePhase, ObstaclePair, PhysicsTuning, Rect};
