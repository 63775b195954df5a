//! Integer axis-aligned rectangles
//!
//! Screen space: x grows right, y grows down. A rect covers the half-open
//! spans `[x, x + w)` and `[y, y + h)`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Same size, moved horizontally to `x`
    #[inline]
    pub fn with_x(self, x: i32) -> Self {
        Self { x, ..self }
    }

    /// Intersection with `other`, `None` if they do not share any area
    pub fn clip(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.with_x(-5).right(), 25);
    }

    #[test]
    fn test_clip() {
        let screen = Rect::new(0, 0, 512, 512);
        assert_eq!(
            screen.clip(&Rect::new(500, 10, 20, 20)),
            Some(Rect::new(500, 10, 12, 20))
        );
        assert_eq!(screen.clip(&Rect::new(512, 10, 20, 20)), None);
        assert_eq!(screen.clip(&Rect::new(-20, 0, 20, 20)), None);
    }
}
