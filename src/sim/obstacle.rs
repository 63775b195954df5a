//! Obstacles and their per-kind footprints

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::ground_top;
use crate::tuning::{FootprintSpec, Tuning};

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Picked up on contact (coin)
    Collectible,
    /// Ends the run on contact (cactus)
    Hazard,
}

impl ObstacleKind {
    /// Fair coin flip between the two kinds
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            ObstacleKind::Hazard
        } else {
            ObstacleKind::Collectible
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Collectible => "collectible",
            ObstacleKind::Hazard => "hazard",
        }
    }
}

/// A live obstacle. Only the horizontal position is per-instance; size and
/// height come from the kind's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: i32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: i32) -> Self {
        Self { kind, x }
    }
}

/// Shared size and vertical placement for one obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
    pub y: i32,
}

impl Footprint {
    /// Bounding box of an obstacle with this footprint at `x`
    #[inline]
    pub fn rect_at(&self, x: i32) -> Rect {
        Rect::new(x, self.y, self.width, self.height)
    }
}

/// Read-only footprint lookup, built once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintTable {
    collectible: Footprint,
    hazard: Footprint,
}

impl FootprintTable {
    pub fn new(collectible: Footprint, hazard: Footprint) -> Self {
        Self {
            collectible,
            hazard,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        let ground_y = ground_top(tuning.screen_size);
        let resolve = |spec: &FootprintSpec| Footprint {
            width: spec.width,
            height: spec.height,
            y: spec.y.unwrap_or(ground_y - spec.height),
        };
        Self::new(resolve(&tuning.collectible), resolve(&tuning.hazard))
    }

    #[inline]
    pub fn get(&self, kind: ObstacleKind) -> &Footprint {
        match kind {
            ObstacleKind::Collectible => &self.collectible,
            ObstacleKind::Hazard => &self.hazard,
        }
    }

    /// Bounding box of a live obstacle
    #[inline]
    pub fn rect_of(&self, obstacle: &Obstacle) -> Rect {
        self.get(obstacle.kind).rect_at(obstacle.x)
    }
}

impl Default for FootprintTable {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_footprints() {
        let table = FootprintTable::default();
        assert_eq!(
            *table.get(ObstacleKind::Collectible),
            Footprint {
                width: 20,
                height: 20,
                y: 310
            }
        );
        // Ground top is 340 on a 512 screen, cactus stands on it
        assert_eq!(
            *table.get(ObstacleKind::Hazard),
            Footprint {
                width: 20,
                height: 50,
                y: 290
            }
        );
    }

    #[test]
    fn test_rect_of() {
        let table = FootprintTable::default();
        let rect = table.rect_of(&Obstacle::new(ObstacleKind::Hazard, 100));
        assert_eq!(rect, Rect::new(100, 290, 20, 50));
    }

    #[test]
    fn test_random_kind_produces_both() {
        let mut rng = Pcg32::seed_from_u64(3);
        let kinds: Vec<_> = (0..64).map(|_| ObstacleKind::random(&mut rng)).collect();
        assert!(kinds.contains(&ObstacleKind::Collectible));
        assert!(kinds.contains(&ObstacleKind::Hazard));
    }
}
