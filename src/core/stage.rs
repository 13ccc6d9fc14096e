//=========================================================================
// Stage
//=========================================================================
//
// Logical dimensions of the drawing surface.
//
// Gameplay code works in logical units (the window's logical size). The
// backing store is `logical × pixel_ratio` physical pixels.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Point, Rect};

//=== Constants ===========================================================

/// Reference resolution that gameplay tuning is expressed against.
pub const REFERENCE_WIDTH: f32 = 960.0;
pub const REFERENCE_HEIGHT: f32 = 540.0;

/// Pixel ratio used when the host does not specify one.
pub const DEFAULT_PIXEL_RATIO: f32 = 2.0;

//=== Stage ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    w: f32,
    h: f32,
    pixel_ratio: f32,
}

impl Stage {
    pub fn new(w: f32, h: f32, pixel_ratio: f32) -> Self {
        Self { w, h, pixel_ratio }
    }

    //--- Mutation ---------------------------------------------------------

    /// Sets the logical size (e.g. after a window resize).
    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
    }

    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) {
        self.pixel_ratio = pixel_ratio;
    }

    //--- Queries ----------------------------------------------------------

    pub fn width(&self) -> f32 {
        self.w
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    /// Centre of the stage.
    pub fn mid(&self) -> Point {
        Point::new(self.w / 2.0, self.h / 2.0)
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Size of the backing store in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.w * self.pixel_ratio).round().max(0.0) as u32,
            (self.h * self.pixel_ratio).round().max(0.0) as u32,
        )
    }

    /// `[0, w) × [0, h)` as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.w, self.h)
    }

    /// Scale of this stage relative to the 960×540 reference, per axis.
    pub fn ratio(&self) -> (f32, f32) {
        (self.w / REFERENCE_WIDTH, self.h / REFERENCE_HEIGHT)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(REFERENCE_WIDTH, REFERENCE_HEIGHT, DEFAULT_PIXEL_RATIO)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
