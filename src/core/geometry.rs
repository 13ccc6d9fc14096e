//=========================================================================
// Geometry Kit
//=========================================================================
//
// Side-effect-free 2D helpers consumed by gameplay entities.
//
// Contents:
// - `Point` / `Rect` value types (surface space, top-left origin)
// - Rectangle tests: inclusive intersection, half-open containment
// - Polar offset and angle helpers
// - Deterministic scalar noise (`noise1`, `noise2`)
// - Range mapping / clamping and RNG-backed picks
//
// Two rectangles whose edges touch DO intersect, but a point lying on a
// rectangle's right or bottom edge is NOT contained.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::Rng;

//=== Point ===============================================================

/// A position in surface space (logical pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Builds a rectangle of the given size centred on `center`.
    pub fn centered(center: Point, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// See [`rects_intersect`].
    pub fn intersects(&self, other: &Rect) -> bool {
        rects_intersect(self, other)
    }

    /// See [`rect_contains_point`].
    pub fn contains(&self, point: Point) -> bool {
        rect_contains_point(self, point)
    }
}

//=== Rectangle Tests =====================================================

/// Axis-aligned overlap test with inclusive boundaries.
///
/// Rectangles whose edges exactly touch are considered intersecting.
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.w && a.x + a.w >= b.x && a.y <= b.y + b.h && a.y + a.h >= b.y
}

/// Half-open containment: `x ∈ [rect.x, rect.x + w)`, `y ∈ [rect.y, rect.y + h)`.
///
/// A point on the right or bottom edge is not contained.
pub fn rect_contains_point(rect: &Rect, p: Point) -> bool {
    p.x >= rect.x && p.x < rect.x + rect.w && p.y >= rect.y && p.y < rect.y + rect.h
}

//=== Polar Helpers =======================================================

/// Offsets `(x, y)` by `radius` along `angle` (radians).
pub fn polar_offset(x: f32, y: f32, radius: f32, angle: f32) -> Point {
    Point::new(x + angle.cos() * radius, y + angle.sin() * radius)
}

/// Angle in radians of the vector from `(x1, y1)` to `(x2, y2)`.
pub fn angle_between(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (y2 - y1).atan2(x2 - x1)
}

//=== Noise ===============================================================

/// Smooth deterministic pseudo-noise in `[0, 1]`.
///
/// Used to vary obstacle placement as a function of distance travelled.
pub fn noise1(i: f32) -> f32 {
    0.5 + 0.5 * (i.cos() * (i / 2.0).sin()).sin()
}

/// Same shape as [`noise1`] but built on `tan`.
///
/// Not bounded to `[0, 1]`: the inner term reaches `-1` (at `i = π`), so the
/// result spans roughly `[-0.28, 0.64]` and is returned unclamped. Callers
/// that need a unit range should pass it through [`clamp`].
pub fn noise2(i: f32) -> f32 {
    0.5 + 0.5 * (i.cos() * (i / 2.0).sin()).tan()
}

//=== Range Helpers =======================================================

/// Clamps `value` between `min` and `max`, accepting the bounds in either order.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min.min(max)).min(min.max(max))
}

/// Linearly remaps `value` from `[min1, max1]` onto `[min2, max2]` (unclamped).
pub fn map_range(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    min2 + (value - min1) / (max1 - min1) * (max2 - min2)
}

/// [`map_range`] followed by [`clamp`] to the output range.
pub fn map_clamped(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    clamp(map_range(value, min1, max1, min2, max2), min2, max2)
}

//=== Random Helpers ======================================================

/// Uniform value in `[a, b)`; `a == b` yields `a`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    a + rng.gen::<f32>() * (b - a)
}

/// Picks one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

//=========================================================================
// Unit Tests
//=========================================================================
