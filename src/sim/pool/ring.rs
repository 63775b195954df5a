//! Circular FIFO pool
//!
//! Obstacles spawn on the right and all drift left at the same speed, so the
//! oldest one is always the leftmost and the first to expire. The ring only
//! ever removes from `head`.
//!
//! Indexing: `head == tail` is empty, `(tail + 1) % N == head` is full. One
//! slot is sacrificed to tell the two apart, so `N` slots hold at most
//! `N - 1` obstacles.
//!
//! An obstacle that leaves away from the head (a collectible picked up, or a
//! narrow kind already off screen behind a wider one) cannot leave the queue
//! early. Its slot is emptied in place and reclaimed once it reaches the head.

use super::{ObstaclePool, PoolReport, Probe, Verdict};
use crate::consts::RING_CAPACITY;
use crate::error::PoolFull;
use crate::sim::obstacle::Obstacle;

#[derive(Debug, Clone)]
pub struct RingPool<const N: usize = RING_CAPACITY> {
    /// `None` inside `[head, tail)` marks a collected obstacle
    slots: [Option<Obstacle>; N],
    head: usize,
    tail: usize,
    live: usize,
}

impl<const N: usize> Default for RingPool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingPool<N> {
    pub fn new() -> Self {
        const { assert!(N >= 2, "ring needs a spare slot") };
        Self {
            slots: [None; N],
            head: 0,
            tail: 0,
            live: 0,
        }
    }

    /// Occupied slots, live or collected
    fn span(&self) -> usize {
        (self.tail + N - self.head) % N
    }

    /// Slot indices from head to tail
    fn queue(&self) -> impl Iterator<Item = usize> + use<N> {
        let head = self.head;
        (0..self.span()).map(move |k| (head + k) % N)
    }

    fn ring_full(&self) -> bool {
        (self.tail + 1) % N == self.head
    }

    /// Drop the head slot
    fn pop_head(&mut self) -> Option<Obstacle> {
        if self.head == self.tail {
            return None;
        }
        let taken = self.slots[self.head].take();
        if taken.is_some() {
            self.live -= 1;
        }
        self.head = (self.head + 1) % N;
        taken
    }

    /// Reclaim collected slots sitting at the head
    fn reclaim_head(&mut self) {
        while self.head != self.tail && self.slots[self.head].is_none() {
            self.head = (self.head + 1) % N;
        }
    }

    /// Oldest live obstacle
    pub fn front(&self) -> Option<&Obstacle> {
        self.queue().find_map(|i| self.slots[i].as_ref())
    }

    /// Remove the oldest obstacle (the only removal the ring allows)
    pub fn pop_front(&mut self) -> Option<Obstacle> {
        self.reclaim_head();
        let popped = self.pop_head();
        self.reclaim_head();
        popped
    }
}

impl<const N: usize> ObstaclePool for RingPool<N> {
    const STRATEGY: &'static str = "ring";

    fn capacity(&self) -> usize {
        N - 1
    }

    fn len(&self) -> usize {
        self.live
    }

    /// Collected slots still waiting to reach the head take up room
    fn is_full(&self) -> bool {
        self.ring_full()
    }

    fn insert(&mut self, obstacle: Obstacle) -> Result<(), PoolFull> {
        if self.ring_full() {
            return Err(PoolFull);
        }
        self.slots[self.tail] = Some(obstacle);
        self.tail = (self.tail + 1) % N;
        self.live += 1;
        Ok(())
    }

    fn sweep(&mut self, dx: i32, probe: &Probe<'_>) -> PoolReport {
        for i in self.queue() {
            if let Some(obstacle) = self.slots[i].as_mut() {
                obstacle.x -= dx;
            }
        }

        let mut report = PoolReport::default();

        // Expiry only looks at the head
        while let Some(front) = self.front().copied() {
            if !probe.is_expired(&front) {
                break;
            }
            report.record(front, Verdict::Expired);
            self.pop_front();
        }

        // Everything behind the head: a narrower kind can be fully off
        // screen before an older, wider one
        for i in self.queue() {
            let Some(obstacle) = self.slots[i] else {
                continue;
            };
            let verdict = probe.classify(&obstacle);
            if verdict == Verdict::Keep {
                continue;
            }
            if report.record(obstacle, verdict) {
                self.reclaim_head();
                return report;
            }
            // Expired or collected: empty the slot, reclaimed at the head
            self.slots[i] = None;
            self.live -= 1;
        }
        self.reclaim_head();
        report
    }

    /// Oldest first
    fn iter(&self) -> impl Iterator<Item = Obstacle> + '_ {
        self.queue().filter_map(|i| self.slots[i])
    }

    fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Footprint, FootprintTable, ObstacleKind};
    use crate::sim::pool::FreeListPool;
    use crate::sim::rect::Rect;

    fn coin(x: i32) -> Obstacle {
        Obstacle::new(ObstacleKind::Collectible, x)
    }

    fn hazard(x: i32) -> Obstacle {
        Obstacle::new(ObstacleKind::Hazard, x)
    }

    #[test]
    fn test_reserved_slot() {
        let mut pool = RingPool::<4>::new();
        assert_eq!(pool.capacity(), 3);
        for x in 0..3 {
            assert!(pool.insert(coin(x)).is_ok());
        }
        assert!(pool.is_full());
        assert_eq!(pool.insert(coin(9)), Err(PoolFull));
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_wraps_around() {
        let mut pool = RingPool::<3>::new();
        for round in 0..5 {
            pool.insert(coin(round)).unwrap();
            pool.insert(coin(round + 100)).unwrap();
            assert_eq!(pool.pop_front(), Some(coin(round)));
            assert_eq!(pool.pop_front(), Some(coin(round + 100)));
            assert!(pool.is_empty());
        }
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut pool = RingPool::<5>::new();
        pool.insert(hazard(100)).unwrap();
        pool.insert(coin(200)).unwrap();
        pool.insert(hazard(300)).unwrap();
        let xs: Vec<i32> = pool.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![100, 200, 300]);
    }

    #[test]
    fn test_expiry_in_spawn_order() {
        // Player out of reach so only expiry happens
        let table = FootprintTable::default();
        let probe = Probe::new(Rect::new(50, 0, 50, 50), &table);
        let mut pool = RingPool::<5>::new();
        pool.insert(hazard(10)).unwrap();
        pool.insert(hazard(20)).unwrap();
        pool.insert(hazard(30)).unwrap();

        let report = pool.sweep(30, &probe);
        assert_eq!(report.expired, 1);
        assert_eq!(pool.front(), Some(&hazard(-10)));

        let report = pool.sweep(20, &probe);
        assert_eq!(report.expired, 2);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_collect_behind_head_leaves_gap() {
        let table = FootprintTable::default();
        let probe = Probe::new(Rect::new(50, 290, 50, 50), &table);
        let mut pool = RingPool::<4>::new();
        // Head is a coin well past the player (still on screen), second is on the player
        pool.insert(coin(10)).unwrap();
        pool.insert(coin(60)).unwrap();
        pool.insert(coin(400)).unwrap();

        let report = pool.sweep(0, &probe);
        assert_eq!(report.collected, 1);
        assert_eq!(pool.len(), 2);
        // The collected slot still occupies the ring
        assert!(pool.is_full());
        assert_eq!(pool.iter().map(|o| o.x).collect::<Vec<_>>(), vec![10, 400]);

        // Head expires, the gap behind it is reclaimed with it
        pool.sweep(30, &probe);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.front(), Some(&coin(370)));
        assert!(!pool.is_full());
    }

    #[test]
    fn test_collect_at_head_is_reclaimed() {
        let table = FootprintTable::default();
        let probe = Probe::new(Rect::new(50, 290, 50, 50), &table);
        let mut pool = RingPool::<3>::new();
        pool.insert(coin(60)).unwrap();
        pool.insert(coin(300)).unwrap();
        assert!(pool.is_full());

        let report = pool.sweep(0, &probe);
        assert_eq!(report.collected, 1);
        assert!(!pool.is_full());
        assert!(pool.insert(hazard(512)).is_ok());
    }

    /// Wide hazard first, narrow coin second, both floating above the player
    fn mixed_widths() -> FootprintTable {
        FootprintTable::new(
            Footprint {
                width: 20,
                height: 20,
                y: 0,
            },
            Footprint {
                width: 60,
                height: 50,
                y: 0,
            },
        )
    }

    #[test]
    fn test_narrow_obstacle_expires_behind_wide_head() {
        let table = mixed_widths();
        let probe = Probe::new(Rect::new(50, 290, 50, 50), &table);
        let mut pool = RingPool::<4>::new();
        pool.insert(hazard(100)).unwrap();
        pool.insert(coin(110)).unwrap();

        // Hazard spans -40..20, coin spans -30..-10
        let report = pool.sweep(140, &probe);
        assert_eq!(report.expired, 1);
        assert_eq!(report.collected, 0);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec![hazard(-40)]);

        // The emptied slot is reclaimed together with the head
        let report = pool.sweep(20, &probe);
        assert_eq!(report.expired, 1);
        assert!(pool.is_empty());
        assert!(pool.insert(coin(512)).is_ok());
        assert!(pool.insert(coin(512)).is_ok());
        assert!(pool.insert(coin(512)).is_ok());
    }

    #[test]
    fn test_expiry_matches_free_list_with_mixed_widths() {
        let table = mixed_widths();
        let probe = Probe::new(Rect::new(50, 290, 50, 50), &table);
        let mut ring = RingPool::<7>::new();
        let mut free = FreeListPool::<15>::new();
        for obstacle in [hazard(100), coin(110), hazard(130), coin(150)] {
            ring.insert(obstacle).unwrap();
            free.insert(obstacle).unwrap();
        }

        for _ in 0..10 {
            let a = ring.sweep(20, &probe);
            let b = free.sweep(20, &probe);
            assert_eq!(a.expired, b.expired);
            assert_eq!(ring.len(), free.len());

            let mut xs: Vec<i32> = free.iter().map(|o| o.x).collect();
            xs.sort();
            assert_eq!(ring.iter().map(|o| o.x).collect::<Vec<_>>(), xs);
        }
    }
}
