use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas coordinates: origin top-left,
/// x grows right, y grows down. All values are pixel-equivalent floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// AABB overlap test with strict inequalities: rectangles that only share
/// an edge do not count as colliding.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn separated_rects_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn edge_touching_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn corner_touching_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (
                -500.0f32..500.0,
                -500.0f32..500.0,
                0.1f32..200.0,
                0.1f32..200.0,
            )
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in arb_rect(), b in arb_rect()) {
                prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
            }

            #[test]
            fn rect_overlaps_itself(a in arb_rect()) {
                prop_assert!(overlaps(&a, &a));
            }

            #[test]
            fn shared_vertical_edge_never_overlaps(
                a in arb_rect(),
                h in 0.1f32..200.0,
                dy in -50.0f32..50.0,
            ) {
                let b = Rect::new(a.right(), a.y + dy, 10.0, h);
                prop_assert!(!overlaps(&a, &b));
            }
        }
    }
}
