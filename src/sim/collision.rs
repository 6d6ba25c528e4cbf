//! Axis-aligned rectangle geometry
//!
//! Everything in the game is a rectangle: the paddle, the falling block,
//! and the menu's play button. Overlap and point containment are the only
//! two tests the simulation needs.

/// An axis-aligned rectangle in screen coordinates (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (x + w)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (y + h)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Whether a point lies inside the rectangle.
    ///
    /// The left/top edges are inclusive, the right/bottom edges exclusive.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Check whether two rectangles overlap.
///
/// Standard interval test on both axes:
/// `x1 < x2 + w2 && x2 < x1 + w1 && y1 < y2 + h2 && y2 < y1 + h1`
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}
