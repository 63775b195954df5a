//! Duck Dash - a single-screen jump-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacle pools, collisions)
//! - `renderer`: Read-only render step over the simulation state
//! - `platform`: Renderer/asset/input/clock collaborators and the terminal backend
//! - `app`: Frame loop orchestration
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use app::FrameLoop;
pub use error::{PoolFull, SetupError};
pub use tuning::{JumpCut, Tuning};

/// Game configuration constants
pub mod consts {
    /// Square play field edge length (pixels)
    pub const SCREEN_SIZE: i32 = 512;

    /// Obstacles spawn with their left edge here (just off the right edge)
    pub const SPAWN_EDGE_X: i32 = SCREEN_SIZE;
    /// Leftward obstacle drift (pixels/s)
    pub const OBSTACLE_SPEED: f32 = 200.0;
    /// Seconds between spawn attempts
    pub const SPAWN_INTERVAL: f32 = 2.0;

    /// Downward acceleration on the player (pixels/s²)
    pub const GRAVITY: f32 = 750.0;
    /// Vertical velocity applied on jump press (negative is up)
    pub const JUMP_VELOCITY: f32 = -400.0;
    /// Maximum upward speed kept after the jump key is released
    pub const JUMP_CUT_SPEED: f32 = 200.0;

    /// Player sprite size and fixed horizontal position
    pub const PLAYER_SIZE: i32 = 50;
    pub const PLAYER_X: i32 = 50;

    /// Collectible footprint (coin)
    pub const COLLECTIBLE_SIZE: (i32, i32) = (20, 20);
    pub const COLLECTIBLE_Y: i32 = 310;
    /// Hazard footprint (cactus), sits on the ground
    pub const HAZARD_SIZE: (i32, i32) = (20, 50);

    /// Pool capacities per strategy
    pub const FREE_LIST_CAPACITY: usize = 15;
    pub const SWAP_REMOVE_CAPACITY: usize = 15;
    /// Ring slots; one is reserved so at most 6 obstacles are live
    pub const RING_CAPACITY: usize = 7;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Top edge of the ground strip for a given screen size (two thirds down)
#[inline]
pub fn ground_top(screen_size: i32) -> i32 {
    screen_size / 3 * 2
}
