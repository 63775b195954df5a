//! Dense pool with swap-remove
//!
//! Live obstacles occupy indices `[0, len)`. Removing index `i` moves the
//! last item into `i`, so removal is O(1) but order is not preserved.

use super::{ObstaclePool, PoolReport, Probe, Verdict};
use crate::consts::SWAP_REMOVE_CAPACITY;
use crate::error::PoolFull;
use crate::sim::obstacle::Obstacle;

#[derive(Debug, Clone)]
pub struct SwapRemovePool<const N: usize = SWAP_REMOVE_CAPACITY> {
    /// Allocated once with room for `N`, never grows past it
    items: Vec<Obstacle>,
}

impl<const N: usize> Default for SwapRemovePool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SwapRemovePool<N> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(N),
        }
    }

    /// Remove index `i`; the former last item now lives at `i`
    pub fn remove(&mut self, index: usize) -> Option<Obstacle> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.swap_remove(index))
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.items
    }
}

impl<const N: usize> ObstaclePool for SwapRemovePool<N> {
    const STRATEGY: &'static str = "swap-remove";

    fn capacity(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, obstacle: Obstacle) -> Result<(), PoolFull> {
        if self.items.len() >= N {
            return Err(PoolFull);
        }
        self.items.push(obstacle);
        Ok(())
    }

    fn sweep(&mut self, dx: i32, probe: &Probe<'_>) -> PoolReport {
        for obstacle in &mut self.items {
            obstacle.x -= dx;
        }

        let mut report = PoolReport::default();
        let mut i = 0;
        while i < self.items.len() {
            let obstacle = self.items[i];
            let verdict = probe.classify(&obstacle);
            if report.record(obstacle, verdict) {
                return report;
            }
            if verdict == Verdict::Keep {
                i += 1;
            } else {
                // The moved-in item still needs a look, keep `i`
                self.items.swap_remove(i);
            }
        }
        report
    }

    fn iter(&self) -> impl Iterator<Item = Obstacle> + '_ {
        self.items.iter().copied()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
