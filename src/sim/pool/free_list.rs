//! Slot pool with an intrusive free list
//!
//! Each slot either holds a live obstacle or is free. Free slots are chained
//! through `next_free` as a stack of indices: freeing pushes, allocating pops,
//! so the most recently freed slot is handed out first.

use super::{ObstaclePool, PoolReport, Probe, Verdict};
use crate::consts::FREE_LIST_CAPACITY;
use crate::error::PoolFull;
use crate::sim::obstacle::Obstacle;

/// Index of a slot in a `FreeListPool`
pub type SlotId = usize;

#[derive(Debug, Clone)]
pub struct FreeListPool<const N: usize = FREE_LIST_CAPACITY> {
    slots: [Option<Obstacle>; N],
    /// Next free slot for each free slot (meaningless for live ones)
    next_free: [Option<SlotId>; N],
    free_head: Option<SlotId>,
    len: usize,
}

impl<const N: usize> Default for FreeListPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FreeListPool<N> {
    /// All slots free, chained in index order
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            next_free: std::array::from_fn(|i| (i + 1 < N).then_some(i + 1)),
            free_head: (N > 0).then_some(0),
            len: 0,
        }
    }

    /// Take the free-list head and store `obstacle` there
    pub fn allocate(&mut self, obstacle: Obstacle) -> Result<SlotId, PoolFull> {
        let slot = self.free_head.ok_or(PoolFull)?;
        self.free_head = self.next_free[slot].take();
        self.slots[slot] = Some(obstacle);
        self.len += 1;
        Ok(slot)
    }

    /// Free a live slot, pushing it onto the free list
    pub fn remove(&mut self, slot: SlotId) -> Option<Obstacle> {
        let obstacle = self.slots.get_mut(slot)?.take()?;
        self.next_free[slot] = self.free_head;
        self.free_head = Some(slot);
        self.len -= 1;
        Some(obstacle)
    }

    pub fn get(&self, slot: SlotId) -> Option<&Obstacle> {
        self.slots.get(slot)?.as_ref()
    }

    /// Live obstacles with their slot ids, in slot order
    pub fn slots(&self) -> impl Iterator<Item = (SlotId, &Obstacle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|o| (i, o)))
    }

    /// Slot the next allocation will use
    pub fn next_slot(&self) -> Option<SlotId> {
        self.free_head
    }
}

impl<const N: usize> ObstaclePool for FreeListPool<N> {
    const STRATEGY: &'static str = "free-list";

    fn capacity(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, obstacle: Obstacle) -> Result<(), PoolFull> {
        self.allocate(obstacle).map(|_| ())
    }

    fn sweep(&mut self, dx: i32, probe: &Probe<'_>) -> PoolReport {
        for obstacle in self.slots.iter_mut().flatten() {
            obstacle.x -= dx;
        }

        let mut report = PoolReport::default();
        // Every slot is visited, free ones skipped
        for slot in 0..N {
            let Some(obstacle) = self.slots[slot] else {
                continue;
            };
            let verdict = probe.classify(&obstacle);
            if report.record(obstacle, verdict) {
                return report;
            }
            if verdict != Verdict::Keep {
                self.remove(slot);
            }
        }
        report
    }

    fn iter(&self) -> impl Iterator<Item = Obstacle> + '_ {
        self.slots.iter().flatten().copied()
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}
