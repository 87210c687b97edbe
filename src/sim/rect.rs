//! Axis-aligned rectangles in world pixels
//!
//! The single overlap primitive every collision query is built from.

use serde::{Deserialize, Serialize};

/// Integer rectangle; `width` and `height` are always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "degenerate rect {width}x{height}");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Same size, moved to `(x, y)`
    pub fn with_position(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// True if `self` lies entirely inside `outer` (edges may coincide)
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }

    /// Overlap test. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Overlap test on both axes with strict edge rejection
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    let above = a.bottom() <= b.y;
    let below = a.y >= b.bottom();
    let left_of = a.right() <= b.x;
    let right_of = a.x >= b.right();
    !(above || below || left_of || right_of)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        // Right neighbour
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        // Bottom neighbour
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
        // Corner touch
        assert!(!a.intersects(&Rect::new(10, 10, 10, 10)));
        // One pixel of overlap is enough
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_containment_counts_as_intersection() {
        let outer = Rect::new(0, 0, 80, 80);
        let inner = Rect::new(30, 30, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
    }

    #[test]
    fn test_translation_keeps_size() {
        let r = Rect::new(5, 5, 20, 10).translated(-5, 15);
        assert_eq!(r, Rect::new(0, 20, 20, 10));
        assert_eq!(r.with_position(1, 2), Rect::new(1, 2, 20, 10));
        assert_eq!(r.right(), 20);
        assert_eq!(r.bottom(), 30);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..100, 1i32..100)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }

        #[test]
        fn rect_always_intersects_itself(a in rect_strategy()) {
            prop_assert!(a.intersects(&a));
        }

        #[test]
        fn adjacent_rects_never_intersect(a in rect_strategy(), h in 1i32..100) {
            let right = Rect::new(a.right(), a.y, 10, h);
            let below = Rect::new(a.x, a.bottom(), 10, h);
            prop_assert!(!a.intersects(&right));
            prop_assert!(!a.intersects(&below));
        }
    }
}
