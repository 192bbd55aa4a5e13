//! Constraint resolution and area splitting.
//!
//! A [`Constraint`] maps an available extent to a resolved extent. The two
//! built-in kinds are [`Percent`] and [`Fixed`]; [`ratio`] is sugar over
//! [`Percent`]. Anything implementing the trait can drive the split
//! functions, so custom constraint kinds plug in without changes here.
//!
//! All resolution is clamping, never failing: out-of-range percentages,
//! oversized fixed values, and zero-denominator ratios resolve to a valid
//! extent within `[0, size]`.

use crate::geometry::{Pos, Rect};

/// A size constraint for layout purposes.
pub trait Constraint {
    /// Resolve the constraint against an available extent.
    fn apply(&self, size: i32) -> i32;
}

/// A percentage of the available extent (0–100).
///
/// Values below 0 resolve to 0; values above 100 resolve to the full extent.
/// Division truncates: `Percent(66).apply(100) == 66`, `Percent(50).apply(3) == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(pub i32);

impl Constraint for Percent {
    fn apply(&self, size: i32) -> i32 {
        if self.0 < 0 {
            return 0;
        }
        if self.0 > 100 {
            return size;
        }
        size * self.0 / 100
    }
}

/// An absolute extent in cells.
///
/// Negative values resolve to 0; values beyond the available extent clamp
/// to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed(pub i32);

impl Constraint for Fixed {
    fn apply(&self, size: i32) -> i32 {
        self.0.clamp(0, size)
    }
}

/// A ratio of the available extent, as sugar for [`Percent`].
///
/// A zero denominator yields `Percent(0)` rather than panicking.
pub fn ratio(numerator: i32, denominator: i32) -> Percent {
    if denominator == 0 {
        return Percent(0);
    }
    Percent(numerator * 100 / denominator)
}

/// Split an area vertically into top and bottom parts.
///
/// The constraint resolves the top height against `area.dy()`; the bottom
/// fills the remainder. The two outputs always partition `area` exactly,
/// including the degenerate cases where the split lands on either edge.
pub fn split_vertical(area: Rect, constraint: impl Constraint) -> (Rect, Rect) {
    let height = constraint.apply(area.dy()).min(area.dy());
    let top = Rect {
        min: area.min,
        max: Pos::new(area.max.x, area.min.y + height),
    };
    let bottom = Rect {
        min: Pos::new(area.min.x, area.min.y + height),
        max: area.max,
    };
    (top, bottom)
}

/// Split an area horizontally into left and right parts.
///
/// Symmetric to [`split_vertical`] along the X axis.
pub fn split_horizontal(area: Rect, constraint: impl Constraint) -> (Rect, Rect) {
    let width = constraint.apply(area.dx()).min(area.dx());
    let left = Rect {
        min: area.min,
        max: Pos::new(area.min.x + width, area.max.y),
    };
    let right = Rect {
        min: Pos::new(area.min.x + width, area.min.y),
        max: area.max,
    };
    (left, right)
}

/// A rectangle of the given size centered within `area`.
///
/// Like all anchored placements, the candidate is intersected with `area`,
/// so the result never exceeds the outer bounds.
pub fn center_rect(area: Rect, width: i32, height: i32) -> Rect {
    let min_x = area.min.x + area.dx() / 2 - width / 2;
    let min_y = area.min.y + area.dy() / 2 - height / 2;
    Rect::new(min_x, min_y, min_x + width, min_y + height).intersect(area)
}

/// A rectangle of the given size at the top-left corner of `area`.
pub fn top_left_rect(area: Rect, width: i32, height: i32) -> Rect {
    Rect::new(
        area.min.x,
        area.min.y,
        area.min.x + width,
        area.min.y + height,
    )
    .intersect(area)
}

/// A rectangle of the given size at the top-center of `area`.
pub fn top_center_rect(area: Rect, width: i32, height: i32) -> Rect {
    let min_x = area.min.x + area.dx() / 2 - width / 2;
    Rect::new(min_x, area.min.y, min_x + width, area.min.y + height).intersect(area)
}

/// A rectangle of the given size at the top-right corner of `area`.
pub fn top_right_rect(area: Rect, width: i32, height: i32) -> Rect {
    Rect::new(
        area.max.x - width,
        area.min.y,
        area.max.x,
        area.min.y + height,
    )
    .intersect(area)
}

/// A rectangle of the given size at the left-center of `area`.
pub fn left_center_rect(area: Rect, width: i32, height: i32) -> Rect {
    let min_y = area.min.y + area.dy() / 2 - height / 2;
    Rect::new(area.min.x, min_y, area.min.x + width, min_y + height).intersect(area)
}

/// A rectangle of the given size at the right-center of `area`.
pub fn right_center_rect(area: Rect, width: i32, height: i32) -> Rect {
    let min_y = area.min.y + area.dy() / 2 - height / 2;
    Rect::new(area.max.x - width, min_y, area.max.x, min_y + height).intersect(area)
}

/// A rectangle of the given size at the bottom-left corner of `area`.
pub fn bottom_left_rect(area: Rect, width: i32, height: i32) -> Rect {
    Rect::new(
        area.min.x,
        area.max.y - height,
        area.min.x + width,
        area.max.y,
    )
    .intersect(area)
}

/// A rectangle of the given size at the bottom-center of `area`.
pub fn bottom_center_rect(area: Rect, width: i32, height: i32) -> Rect {
    let min_x = area.min.x + area.dx() / 2 - width / 2;
    Rect::new(min_x, area.max.y - height, min_x + width, area.max.y).intersect(area)
}

/// A rectangle of the given size at the bottom-right corner of `area`.
pub fn bottom_right_rect(area: Rect, width: i32, height: i32) -> Rect {
    Rect::new(
        area.max.x - width,
        area.max.y - height,
        area.max.x,
        area.max.y,
    )
    .intersect(area)
}
