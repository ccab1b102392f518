//! Axis-aligned rectangle geometry for bodies and platforms
//!
//! Screen space: x grows to the right, y grows downward. A rectangle is
//! described by its top-left corner and its size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

/// Static level geometry. Platforms never move during a session.
pub type Platform = Rect;

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Point containment, inclusive on the top/left edges and exclusive on
    /// the bottom/right edges.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 40.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Vec2::new(30.0, 45.0));
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut r = Rect::new(0.0, 0.0, 40.0, 50.0);
        r.set_right(100.0);
        assert_eq!(r.left(), 60.0);
        r.set_bottom(550.0);
        assert_eq!(r.top(), 500.0);
        assert_eq!(r.size, Vec2::new(40.0, 50.0));
    }

    #[test]
    fn test_touching_rects_do_not_overlap() {
        let floor = Rect::new(0.0, 550.0, 800.0, 50.0);
        let standing = Rect::new(100.0, 500.0, 40.0, 50.0);
        assert!(!standing.overlaps(&floor));

        let sunk = Rect::new(100.0, 500.5, 40.0, 50.0);
        assert!(sunk.overlaps(&floor));
    }

    #[test]
    fn test_contains_point_half_open() {
        let button = Rect::new(300.0, 200.0, 200.0, 50.0);
        assert!(button.contains_point(Vec2::new(300.0, 200.0)));
        assert!(button.contains_point(Vec2::new(400.0, 225.0)));
        assert!(!button.contains_point(Vec2::new(500.0, 225.0)));
        assert!(!button.contains_point(Vec2::new(400.0, 250.0)));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }
}
