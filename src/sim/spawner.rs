//! Timed obstacle spawning

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::pool::ObstaclePool;

/// Outcome of one spawner tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnResult {
    /// Interval not reached yet
    Idle,
    Spawned,
    /// Interval reached but the pool was full; the spawn is dropped
    Dropped,
}

/// Fires `ObstaclePool::create` every `interval` seconds
///
/// The timer restarts from zero when it fires, so a long frame produces at
/// most one spawn and missed intervals are never made up.
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: f32,
    elapsed: f32,
    spawn_x: i32,
    seed: u64,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(interval: f32, spawn_x: i32, seed: u64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            spawn_x,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn advance<P: ObstaclePool>(&mut self, dt: f32, pool: &mut P) -> SpawnResult {
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return SpawnResult::Idle;
        }
        self.elapsed = 0.0;

        match pool.create(&mut self.rng, self.spawn_x) {
            Ok(()) => SpawnResult::Spawned,
            Err(_) => SpawnResult::Dropped,
        }
    }

    /// Restart the timer and replay the same kind sequence
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pool::{FreeListPool, RingPool};

    #[test]
    fn test_fires_on_interval() {
        let mut pool = FreeListPool::<15>::new();
        let mut spawner = Spawner::new(2.0, 512, 1);

        assert_eq!(spawner.advance(1.0, &mut pool), SpawnResult::Idle);
        assert_eq!(spawner.advance(0.5, &mut pool), SpawnResult::Idle);
        assert_eq!(spawner.advance(0.5, &mut pool), SpawnResult::Spawned);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().next().map(|o| o.x), Some(512));
        assert_eq!(spawner.elapsed(), 0.0);
    }

    #[test]
    fn test_no_catch_up() {
        let mut pool = FreeListPool::<15>::new();
        let mut spawner = Spawner::new(2.0, 512, 1);

        // A 7 second stall yields one spawn, not three
        assert_eq!(spawner.advance(7.0, &mut pool), SpawnResult::Spawned);
        assert_eq!(spawner.advance(0.1, &mut pool), SpawnResult::Idle);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_full_pool_drops_spawn() {
        let mut pool = RingPool::<2>::new();
        let mut spawner = Spawner::new(1.0, 512, 1);

        assert_eq!(spawner.advance(1.0, &mut pool), SpawnResult::Spawned);
        assert_eq!(spawner.advance(1.0, &mut pool), SpawnResult::Dropped);
        assert_eq!(pool.len(), 1);
        // Timer still restarts after a dropped spawn
        assert_eq!(spawner.elapsed(), 0.0);
    }

    #[test]
    fn test_reset_replays_kinds() {
        let mut spawner = Spawner::new(1.0, 512, 42);
        let mut first = FreeListPool::<8>::new();
        for _ in 0..8 {
            spawner.advance(1.0, &mut first);
        }
        spawner.reset();
        let mut second = FreeListPool::<8>::new();
        for _ in 0..8 {
            spawner.advance(1.0, &mut second);
        }
        let kinds = |p: &FreeListPool<8>| p.iter().map(|o| o.kind).collect::<Vec<_>>();
        assert_eq!(kinds(&first), kinds(&second));
    }
}
