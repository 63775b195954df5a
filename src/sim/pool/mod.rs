//! Fixed-capacity obstacle pools
//!
//! Three interchangeable storage strategies share one contract:
//! - `FreeListPool`: fixed slots, intrusive index free list, most-recently
//!   freed slot reused first. Stable slot identity, O(N) sweep.
//! - `SwapRemovePool`: dense array, removal moves the last item into the
//!   hole. No order, O(count) sweep.
//! - `RingPool`: circular FIFO. Slots are only reclaimed at the head
//!   (oldest, and therefore leftmost); anything leaving earlier is emptied
//!   in place until it gets there.
//!
//! The per-tick work is split: a shared `Drift` turns `dt` into a whole-pixel
//! step, a `Probe` decides what happens to each obstacle, and the strategy's
//! `sweep` applies those decisions with its own removal policy.

pub mod free_list;
pub mod ring;
pub mod swap_remove;

pub use free_list::FreeListPool;
pub use ring::RingPool;
pub use swap_remove::SwapRemovePool;

use rand::Rng;

use super::collision::rects_overlap;
use super::obstacle::{FootprintTable, Obstacle, ObstacleKind};
use super::rect::Rect;
use crate::error::PoolFull;

/// What a player contact does to an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Collectible picked up, obstacle leaves the pool
    Collect,
    /// Hazard touched, the run is over
    Hit,
}

/// Fate of one obstacle for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Expired,
    Contact(Contact),
}

/// Per-tick classification of obstacles against the player
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
    player: Rect,
    footprints: &'a FootprintTable,
}

impl<'a> Probe<'a> {
    pub fn new(player: Rect, footprints: &'a FootprintTable) -> Self {
        Self { player, footprints }
    }

    /// Fully past the left edge of the screen
    #[inline]
    pub fn is_expired(&self, obstacle: &Obstacle) -> bool {
        obstacle.x + self.footprints.get(obstacle.kind).width <= 0
    }

    /// Player contact, if the obstacle overlaps the player
    pub fn contact(&self, obstacle: &Obstacle) -> Option<Contact> {
        if !rects_overlap(&self.player, &self.footprints.rect_of(obstacle)) {
            return None;
        }
        Some(match obstacle.kind {
            ObstacleKind::Collectible => Contact::Collect,
            ObstacleKind::Hazard => Contact::Hit,
        })
    }

    /// Expiry first, then collision
    pub fn classify(&self, obstacle: &Obstacle) -> Verdict {
        if self.is_expired(obstacle) {
            return Verdict::Expired;
        }
        match self.contact(obstacle) {
            Some(contact) => Verdict::Contact(contact),
            None => Verdict::Keep,
        }
    }
}

/// What one sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    pub expired: u32,
    pub collected: u32,
    /// The hazard the player ran into, if any
    pub hazard: Option<Obstacle>,
}

impl PoolReport {
    pub fn is_terminal(&self) -> bool {
        self.hazard.is_some()
    }

    /// Record one verdict, returns true when the sweep should stop
    pub(crate) fn record(&mut self, obstacle: Obstacle, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Keep => false,
            Verdict::Expired => {
                self.expired += 1;
                false
            }
            Verdict::Contact(Contact::Collect) => {
                self.collected += 1;
                false
            }
            Verdict::Contact(Contact::Hit) => {
                self.hazard = Some(obstacle);
                true
            }
        }
    }
}

/// Whole-pixel leftward drift shared by every obstacle
///
/// Obstacle positions are integers; the fractional remainder of
/// `speed * dt` is carried to the next tick instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    speed: f32,
    carry: f32,
}

impl Drift {
    pub fn new(speed: f32) -> Self {
        Self { speed, carry: 0.0 }
    }

    /// Pixels to move left this tick
    pub fn step(&mut self, dt: f32) -> i32 {
        let travel = self.carry + self.speed * dt.max(0.0);
        let whole = travel.floor();
        self.carry = travel - whole;
        whole as i32
    }

    pub fn reset(&mut self) {
        self.carry = 0.0;
    }
}

/// Storage for live obstacles with a fixed upper bound
pub trait ObstaclePool {
    /// Short strategy name for logs
    const STRATEGY: &'static str;

    /// Most obstacles that can be live at once
    fn capacity(&self) -> usize;

    /// Live obstacles
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `insert` would fail
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Add an obstacle, leaving the pool untouched when full
    fn insert(&mut self, obstacle: Obstacle) -> Result<(), PoolFull>;

    /// Spawn an obstacle of random kind at `spawn_x`
    ///
    /// The RNG is only consulted when there is room.
    fn create(&mut self, rng: &mut impl Rng, spawn_x: i32) -> Result<(), PoolFull> {
        if self.is_full() {
            return Err(PoolFull);
        }
        self.insert(Obstacle::new(ObstacleKind::random(rng), spawn_x))
    }

    /// Move every live obstacle `dx` pixels left, then expire, collect, or
    /// stop at the first hazard contact
    fn sweep(&mut self, dx: i32, probe: &Probe<'_>) -> PoolReport;

    /// Live obstacles for rendering. Order is strategy-specific.
    fn iter(&self) -> impl Iterator<Item = Obstacle> + '_;

    /// Drop everything (new round)
    fn clear(&mut self);
}

/// Advance a pool by one tick: drift, expiry, collision
pub fn update<P: ObstaclePool>(
    pool: &mut P,
    drift: &mut Drift,
    dt: f32,
    player: Rect,
    footprints: &FootprintTable,
) -> PoolReport {
    let dx = drift.step(dt);
    pool.sweep(dx, &Probe::new(player, footprints))
}
