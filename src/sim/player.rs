//! Player physics
//!
//! The player only moves vertically. Grounded vs. airborne is not stored;
//! it is read off the position relative to the ground each time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::JumpCut;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (pixels)
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels/s, negative is up
    pub vertical_velocity: f32,
}

impl Player {
    /// A player standing on `ground` at horizontal position `x`
    pub fn new(x: i32, size: i32, ground: &Rect) -> Self {
        let size = Vec2::splat(size as f32);
        Self {
            pos: Vec2::new(x as f32, ground.top() as f32 - size.y),
            size,
            vertical_velocity: 0.0,
        }
    }

    /// Integer bounding box used for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x.round() as i32,
            self.pos.y.round() as i32,
            self.size.x as i32,
            self.size.y as i32,
        )
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn is_grounded(&self, ground: &Rect) -> bool {
        self.bottom() >= ground.top() as f32
    }

    /// Start a jump if standing on the ground. Returns whether it jumped.
    pub fn jump(&mut self, ground: &Rect, jump_velocity: f32) -> bool {
        if !self.is_grounded(ground) {
            return false;
        }
        self.vertical_velocity = jump_velocity;
        true
    }

    /// Jump key released: trim the remaining upward speed
    pub fn cut_jump(&mut self, cut: &JumpCut) {
        self.vertical_velocity = cut.apply(self.vertical_velocity);
    }

    /// Apply gravity, move, and clamp to the ground
    pub fn integrate(&mut self, dt: f32, gravity: f32, ground: &Rect) {
        self.vertical_velocity += gravity * dt;
        self.pos.y += self.vertical_velocity * dt;

        if self.is_grounded(ground) {
            self.vertical_velocity = 0.0;
            self.pos.y = ground.top() as f32 - self.size.y;
        }
    }
}
