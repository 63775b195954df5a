//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `dt`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod pool;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use obstacle::{Footprint, FootprintTable, Obstacle, ObstacleKind};
pub use player::Player;
pub use pool::{
    Contact, Drift, FreeListPool, ObstaclePool, PoolReport, Probe, RingPool, SwapRemovePool,
    Verdict,
};
pub use rect::Rect;
pub use spawner::{SpawnResult, Spawner};
pub use state::{GameState, RoundOutcome, RoundStats, RunPhase};
pub use tick::{InputEvent, Key};
