//! Axis-aligned box geometry: overlap testing, penetration and clamping.
//!
//! Every entity occupies a [`Rect`] in integer world coordinates. Collision
//! detection is a plain AABB test that counts touching edges as contact, and
//! collision response is a position correction along the axis of minimum
//! penetration.
//!
//! # Penetration
//!
//! For two overlapping boxes `r1` and `r2`:
//!
//! ```text
//! dx   = centerX(r1) - centerX(r2)
//! dy   = centerY(r1) - centerY(r2)
//! penX = (halfW(r1) + halfW(r2)) - |dx|
//! penY = (halfH(r1) + halfH(r2)) - |dy|
//! ```
//!
//! The horizontal axis is used only when `penX < penY`; ties resolve
//! vertically. `r1` moves in the direction of the sign of `dx` (or `dy`), `r2`
//! the opposite way. Displacements are truncated toward zero when converted
//! back to integer coordinates.
//!
//! # Example
//!
//! ```
//! use tussle_core::geometry::{separate, Rect};
//!
//! let a = Rect::new(0, 0, 10, 10);
//! let b = Rect::new(5, 0, 10, 10);
//! assert!(a.overlaps(&b));
//!
//! let (a, b) = separate(a, b);
//! assert_eq!(a.x, -2);
//! assert_eq!(b.x, 7);
//! ```

use std::fmt;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// A world axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// Vector of length `amount` along this axis.
    #[must_use]
    pub const fn offset(self, amount: i32) -> IVec2 {
        match self {
            Self::Horizontal => IVec2::new(amount, 0),
            Self::Vertical => IVec2::new(0, amount),
        }
    }
}

/// Integer axis-aligned rectangle: position of the top-left corner and size.
///
/// Width and height are not validated. Zero or negative extents still produce
/// well-defined (if meaningless) overlap and penetration results.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle from its corner and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Centre point in world space.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Half width and half height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.w as f32 / 2.0, self.h as f32 / 2.0)
    }

    /// Returns `true` if the two boxes intersect on both axes.
    ///
    /// Touching edges count as overlap, so `{0,0,10,10}` and `{10,0,10,10}`
    /// overlap. The test is symmetric. A box always overlaps itself; callers
    /// must filter self-pairs by identity before asking.
    #[must_use]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.w
            && other.x <= self.x + self.w
            && self.y <= other.y + other.h
            && other.y <= self.y + self.h
    }

    /// Returns this box moved by `offset`.
    #[must_use]
    pub const fn translated(self, offset: IVec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }

    /// Returns this box pulled inside `[0, width] x [0, height]`.
    ///
    /// Each axis is handled independently: a negative origin snaps to zero,
    /// then a far edge beyond the bound snaps back so the box ends on it.
    /// Applying the clamp twice gives the same box as applying it once.
    #[must_use]
    pub const fn clamped_to(self, width: i32, height: i32) -> Self {
        let mut clamped = self;
        if clamped.x < 0 {
            clamped.x = 0;
        }
        if clamped.x + clamped.w > width {
            clamped.x = width - clamped.w;
        }
        if clamped.y < 0 {
            clamped.y = 0;
        }
        if clamped.y + clamped.h > height {
            clamped.y = height - clamped.h;
        }
        clamped
    }

    /// Returns `true` if the box lies fully within `[0, width] x [0, height]`.
    #[must_use]
    pub const fn is_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect{{{}, {}, {}, {}}}", self.x, self.y, self.w, self.h)
    }
}

/// Overlap depth between two boxes along the axis of minimum penetration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Penetration {
    /// Axis chosen for the correction
    pub axis: Axis,
    /// How far the boxes overlap along `axis`
    pub depth: f32,
    /// Signed centre distance (`r1 - r2`) along `axis`
    pub delta: f32,
}

impl Penetration {
    /// Computes the penetration of `r1` into `r2`.
    ///
    /// Only meaningful when the boxes overlap. Ties between the two axes
    /// resolve vertically.
    #[must_use]
    pub fn between(r1: &Rect, r2: &Rect) -> Self {
        let d = r1.center() - r2.center();
        let reach = r1.half_extents() + r2.half_extents();
        let pen_x = reach.x - d.x.abs();
        let pen_y = reach.y - d.y.abs();

        if pen_x < pen_y {
            Self {
                axis: Axis::Horizontal,
                depth: pen_x,
                delta: d.x,
            }
        } else {
            Self {
                axis: Axis::Vertical,
                depth: pen_y,
                delta: d.y,
            }
        }
    }

    /// Direction `r1` moves in: `+1` when it sits on the positive side of
    /// `r2`, `-1` otherwise (including coincident centres).
    #[must_use]
    pub fn direction(&self) -> i32 {
        if self.delta > 0.0 {
            1
        } else {
            -1
        }
    }

    /// Correction for `r1` when it absorbs the whole penetration.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn full_offset(&self) -> IVec2 {
        self.axis.offset(self.direction() * self.depth as i32)
    }

    /// Correction for `r1` when the penetration is split evenly; `r2` takes
    /// the negation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn half_offset(&self) -> IVec2 {
        self.axis.offset(self.direction() * (self.depth / 2.0) as i32)
    }
}

/// Pushes two overlapping boxes apart, each absorbing half the penetration.
#[must_use]
pub fn separate(r1: Rect, r2: Rect) -> (Rect, Rect) {
    let offset = Penetration::between(&r1, &r2).half_offset();
    (r1.translated(offset), r2.translated(-offset))
}

/// Pushes `movable` fully out of `fixed`; `fixed` never moves.
#[must_use]
pub fn push_out(movable: Rect, fixed: &Rect) -> Rect {
    movable.translated(Penetration::between(&movable, fixed).full_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod overlap_tests {
        use super::*;

        #[test]
        fn touching_edges_overlap() {
            let a = Rect::new(0, 0, 10, 10);
            let b = Rect::new(10, 0, 10, 10);
            assert!(a.overlaps(&b));
            assert!(b.overlaps(&a));
        }

        #[test]
        fn touching_corners_overlap() {
            let a = Rect::new(0, 0, 10, 10);
            let b = Rect::new(10, 10, 5, 5);
            assert!(a.overlaps(&b));
        }

        #[test]
        fn separated_boxes_do_not_overlap() {
            let a = Rect::new(0, 0, 10, 10);
            assert!(!a.overlaps(&Rect::new(11, 0, 10, 10)));
            assert!(!a.overlaps(&Rect::new(0, 11, 10, 10)));
            assert!(!a.overlaps(&Rect::new(-12, -12, 10, 10)));
        }

        #[test]
        fn containment_overlaps() {
            let outer = Rect::new(0, 0, 100, 100);
            let inner = Rect::new(40, 40, 5, 5);
            assert!(outer.overlaps(&inner));
            assert!(inner.overlaps(&outer));
        }

        #[test]
        fn zero_sized_box_on_edge() {
            let point = Rect::new(10, 5, 0, 0);
            assert!(Rect::new(0, 0, 10, 10).overlaps(&point));
        }
    }

    mod penetration_tests {
        use super::*;

        #[test]
        fn horizontal_when_x_is_shallower() {
            let pen = Penetration::between(&Rect::new(0, 0, 10, 10), &Rect::new(5, 0, 10, 10));
            assert_eq!(pen.axis, Axis::Horizontal);
            assert!((pen.depth - 5.0).abs() < f32::EPSILON);
            assert!((pen.delta + 5.0).abs() < f32::EPSILON);
            assert_eq!(pen.direction(), -1);
        }

        #[test]
        fn vertical_when_y_is_shallower() {
            let pen = Penetration::between(&Rect::new(0, 0, 10, 10), &Rect::new(0, 7, 10, 10));
            assert_eq!(pen.axis, Axis::Vertical);
            assert!((pen.depth - 3.0).abs() < f32::EPSILON);
        }

        #[test]
        fn tie_resolves_vertically() {
            let pen = Penetration::between(&Rect::new(0, 0, 10, 10), &Rect::new(4, 4, 10, 10));
            assert_eq!(pen.axis, Axis::Vertical);
            assert!((pen.depth - 6.0).abs() < f32::EPSILON);
        }

        #[test]
        fn coincident_centres_move_negative() {
            let pen = Penetration::between(&Rect::new(0, 0, 10, 10), &Rect::new(0, 0, 10, 10));
            assert_eq!(pen.direction(), -1);
            assert_eq!(pen.full_offset(), IVec2::new(0, -10));
        }

        #[test]
        fn positive_side_moves_positive() {
            let pen = Penetration::between(&Rect::new(8, 0, 10, 10), &Rect::new(0, 0, 10, 10));
            assert_eq!(pen.direction(), 1);
            assert_eq!(pen.full_offset(), IVec2::new(2, 0));
        }

        #[test]
        fn zero_extent_boxes_do_not_panic() {
            let pen = Penetration::between(&Rect::new(0, 0, 0, 0), &Rect::new(0, 0, 0, 0));
            assert_eq!(pen.full_offset(), IVec2::ZERO);
        }
    }

    mod response_tests {
        use super::*;

        #[test]
        fn separate_splits_evenly() {
            let (a, b) = separate(Rect::new(0, 0, 10, 10), Rect::new(5, 0, 10, 10));
            // penX = 5, half truncated to 2
            assert_eq!(a, Rect::new(-2, 0, 10, 10));
            assert_eq!(b, Rect::new(7, 0, 10, 10));
        }

        #[test]
        fn push_out_moves_only_movable() {
            let fixed = Rect::new(9, 0, 10, 10);
            let moved = push_out(Rect::new(0, 0, 10, 10), &fixed);
            assert_eq!(moved, Rect::new(-1, 0, 10, 10));
            assert_eq!(fixed, Rect::new(9, 0, 10, 10));
        }

        #[test]
        fn push_out_leaves_boxes_touching() {
            let fixed = Rect::new(0, 0, 20, 20);
            let moved = push_out(Rect::new(15, 2, 10, 10), &fixed);
            assert_eq!(moved.x, 20);
            assert!(moved.overlaps(&fixed));
            let pen = Penetration::between(&moved, &fixed);
            assert!(pen.depth.abs() < f32::EPSILON);
        }
    }

    mod clamp_tests {
        use super::*;

        #[test]
        fn negative_origin_snaps_to_zero() {
            let r = Rect::new(-5, -3, 10, 10).clamped_to(100, 100);
            assert_eq!(r, Rect::new(0, 0, 10, 10));
        }

        #[test]
        fn far_edge_snaps_back() {
            let r = Rect::new(95, 98, 10, 10).clamped_to(100, 100);
            assert_eq!(r, Rect::new(90, 90, 10, 10));
            assert!(r.is_within(100, 100));
        }

        #[test]
        fn inside_is_unchanged() {
            let r = Rect::new(20, 30, 10, 10);
            assert_eq!(r.clamped_to(100, 100), r);
        }

        #[test]
        fn clamp_is_idempotent() {
            let once = Rect::new(-40, 500, 30, 30).clamped_to(200, 100);
            assert_eq!(once.clamped_to(200, 100), once);
        }
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Rect::new(1, 2, 3, 4)), "Rect{1, 2, 3, 4}");
    }
}
