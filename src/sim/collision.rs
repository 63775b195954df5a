//! Collision detection between the player and obstacles
//!
//! Everything in the game is an axis-aligned rectangle, so a single
//! separating-axis test covers it: two rects are apart if there is a gap on
//! either axis. Touching edges count as a gap.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Four independent separating conditions; if any holds the rects are apart.
/// Comparisons are inclusive, so rects that only share a boundary line do
/// not collide.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    // b entirely above a
    if b.bottom() <= a.top() {
        return false;
    }
    // b entirely below a
    if b.top() >= a.bottom() {
        return false;
    }
    // b entirely left of a
    if b.right() <= a.left() {
        return false;
    }
    // b entirely right of a
    if b.left() >= a.right() {
        return false;
    }
    true
}
