//! Game state and core simulation types
//!
//! One owned `GameState` holds everything a round needs. The frame loop
//! mutates it through `GameState::update` and the render step only reads it.

use serde::{Deserialize, Serialize};

use super::obstacle::FootprintTable;
use super::player::Player;
use super::pool::{Drift, FreeListPool, ObstaclePool};
use super::rect::Rect;
use super::spawner::Spawner;
use crate::ground_top;
use crate::tuning::Tuning;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    Running,
    /// Player touched a hazard; stays here until `reset`
    Lost,
    /// Player asked to leave
    Quit,
}

/// Result of one update, consumed by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Running,
    Lost,
    Quit,
}

impl From<RunPhase> for RoundOutcome {
    fn from(phase: RunPhase) -> Self {
        match phase {
            RunPhase::Running => RoundOutcome::Running,
            RunPhase::Lost => RoundOutcome::Lost,
            RunPhase::Quit => RoundOutcome::Quit,
        }
    }
}

/// Counters for the current round (logged when it ends)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub ticks: u64,
    pub spawned: u32,
    pub dropped_spawns: u32,
    pub collected: u32,
    pub expired: u32,
}

/// Complete game state, generic over the obstacle storage strategy
#[derive(Debug, Clone)]
pub struct GameState<P: ObstaclePool = FreeListPool> {
    pub tuning: Tuning,
    pub phase: RunPhase,
    pub player: Player,
    /// Static ground strip, computed once from the screen size
    pub ground: Rect,
    pub footprints: FootprintTable,
    pub pool: P,
    pub spawner: Spawner,
    pub drift: Drift,
    pub stats: RoundStats,
    /// Jump key currently held (release triggers the jump cut)
    pub(crate) jump_held: bool,
}

impl GameState<FreeListPool> {
    /// Default strategy (free-list pool)
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self::with_pool(tuning, seed, FreeListPool::new())
    }
}

impl<P: ObstaclePool> GameState<P> {
    /// Start a round with an empty `pool`
    pub fn with_pool(tuning: Tuning, seed: u64, mut pool: P) -> Self {
        pool.clear();
        let size = tuning.screen_size;
        let ground_y = ground_top(size);
        let ground = Rect::new(0, ground_y, size, size / 3 + 2);

        Self {
            phase: RunPhase::Running,
            player: Player::new(tuning.player_x, tuning.player_size, &ground),
            ground,
            footprints: FootprintTable::from_tuning(&tuning),
            pool,
            spawner: Spawner::new(tuning.spawn_interval, tuning.spawn_x, seed),
            drift: Drift::new(tuning.obstacle_speed),
            stats: RoundStats::default(),
            jump_held: false,
            tuning,
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.phase.into()
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Fresh round with the same tuning, pool strategy, and kind sequence
    pub fn reset(&mut self) {
        self.pool.clear();
        self.spawner.reset();
        self.drift.reset();
        self.player = Player::new(self.tuning.player_x, self.tuning.player_size, &self.ground);
        self.stats = RoundStats::default();
        self.jump_held = false;
        self.phase = RunPhase::Running;
    }
}
