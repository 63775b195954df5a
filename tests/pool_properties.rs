//! Property tests shared by every pool strategy

use duck_dash::PoolFull;
use duck_dash::sim::{
    FootprintTable, FreeListPool, Obstacle, ObstacleKind, ObstaclePool, Probe, Rect, RingPool,
    SwapRemovePool, rects_overlap,
};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
enum Op {
    Insert(ObstacleKind, i32),
    Sweep(i32),
}

fn kind() -> impl Strategy<Value = ObstacleKind> {
    prop_oneof![Just(ObstacleKind::Collectible), Just(ObstacleKind::Hazard)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (kind(), -40..600i32).prop_map(|(k, x)| Op::Insert(k, x)),
        (0..60i32).prop_map(Op::Sweep),
    ]
}

/// Player parked far above the play field, so sweeps only expire
fn out_of_reach() -> Rect {
    Rect::new(0, -10_000, 1, 1)
}

fn check_bounds<P: ObstaclePool>(mut pool: P, ops: &[Op]) -> Result<(), TestCaseError> {
    let table = FootprintTable::default();
    let probe = Probe::new(out_of_reach(), &table);

    for op in ops {
        match *op {
            Op::Insert(kind, x) => {
                let before = pool.len();
                let was_full = pool.is_full();
                let result = pool.insert(Obstacle::new(kind, x));
                if was_full {
                    prop_assert_eq!(result, Err(PoolFull));
                    prop_assert_eq!(pool.len(), before);
                } else {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(pool.len(), before + 1);
                }
            }
            Op::Sweep(dx) => {
                let before = pool.len();
                let report = pool.sweep(dx, &probe);
                prop_assert!(report.hazard.is_none());
                prop_assert_eq!(report.collected, 0);
                prop_assert_eq!(pool.len(), before - report.expired as usize);
            }
        }
        prop_assert!(pool.len() <= pool.capacity());
        prop_assert_eq!(pool.iter().count(), pool.len());
    }
    Ok(())
}

fn check_create_when_full<P: ObstaclePool>(mut pool: P, seed: u64) -> Result<(), TestCaseError> {
    let mut rng = Pcg32::seed_from_u64(seed);
    for _ in 0..pool.capacity() {
        prop_assert!(pool.create(&mut rng, 512).is_ok());
    }
    prop_assert!(pool.is_full());

    let mut untouched = rng.clone();
    let before: Vec<Obstacle> = pool.iter().collect();
    prop_assert_eq!(pool.create(&mut rng, 512), Err(PoolFull));
    prop_assert_eq!(pool.iter().collect::<Vec<_>>(), before);
    // A refused spawn does not consume randomness
    prop_assert_eq!(rng.next_u32(), untouched.next_u32());
    Ok(())
}

proptest! {
    #[test]
    fn free_list_stays_within_capacity(ops in prop::collection::vec(op(), 0..80)) {
        check_bounds(FreeListPool::<15>::new(), &ops)?;
    }

    #[test]
    fn swap_remove_stays_within_capacity(ops in prop::collection::vec(op(), 0..80)) {
        check_bounds(SwapRemovePool::<15>::new(), &ops)?;
    }

    #[test]
    fn ring_stays_within_capacity(ops in prop::collection::vec(op(), 0..80)) {
        check_bounds(RingPool::<7>::new(), &ops)?;
    }

    #[test]
    fn create_at_capacity_is_a_no_op(seed in any::<u64>()) {
        check_create_when_full(FreeListPool::<15>::new(), seed)?;
        check_create_when_full(SwapRemovePool::<15>::new(), seed)?;
        check_create_when_full(RingPool::<7>::new(), seed)?;
    }

    #[test]
    fn ring_keeps_spawn_order(
        kinds in prop::collection::vec(kind(), 1..40),
        dx in 1..30i32,
    ) {
        // Spawn at the same edge and drift between spawns, like the game does
        let table = FootprintTable::default();
        let probe = Probe::new(out_of_reach(), &table);
        let mut pool = RingPool::<7>::new();

        for kind in kinds {
            let _ = pool.insert(Obstacle::new(kind, 512));
            pool.sweep(dx, &probe);

            let xs: Vec<i32> = pool.iter().map(|o| o.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
            if let Some(front) = pool.front() {
                prop_assert_eq!(Some(front.x), xs.first().copied());
            }
        }
    }

    #[test]
    fn overlap_is_symmetric(
        (ax, ay, aw, ah) in (-100..100i32, -100..100i32, 1..80i32, 1..80i32),
        (bx, by, bw, bh) in (-100..100i32, -100..100i32, 1..80i32, 1..80i32),
    ) {
        let a = Rect::new(ax, ay, aw, ah);
        let b = Rect::new(bx, by, bw, bh);
        prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
    }

    #[test]
    fn touching_edges_do_not_overlap(
        (x, y, w, h) in (-100..100i32, -100..100i32, 1..80i32, 1..80i32),
        (ow, oh) in (1..80i32, 1..80i32),
        offset in -20..20i32,
    ) {
        let a = Rect::new(x, y, w, h);
        let right = Rect::new(x + w, y + offset, ow, oh);
        let below = Rect::new(x + offset, y + h, ow, oh);
        prop_assert!(!rects_overlap(&a, &right));
        prop_assert!(!rects_overlap(&a, &below));
    }
}
