//=========================================================================
// Input Event Types
//
// Platform-neutral representation of the raw input the tracker consumes.
//
// Responsibilities:
// - Represent keyboard, pointer and touch input in a portable way
// - Carry viewport-relative coordinates (the tracker converts them to
//   surface space)
// - Keep touch input batched: one event per platform touch callback,
//   listing every simultaneous touch point
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputTracker::apply (edge-triggered button states)
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Point;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Only `Left` drives the tracker's pointer button; every variant still
/// updates the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only a single key (the configured primary key) drives gameplay input;
/// the rest exist so the primary key can be rebound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the platform layer.
    Unidentified,
}

//=== TouchPhase ==========================================================

/// Stage of a touch batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Coordinates are viewport-relative (logical pixels, top-left origin of
/// the hosting window), not yet adjusted for the surface's placement.
///
/// # Touch Batches
///
/// `points` lists every touch point involved in the batch, with the most
/// recently changed point LAST. The tracker reads its position from the
/// last point and records `points.len()` as the touch count.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed (also emitted for OS key-repeat).
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Pointer button pressed at a position.
    PointerDown { button: MouseButton, x: f32, y: f32 },

    /// Pointer moved to a position.
    PointerMoved { x: f32, y: f32 },

    /// Pointer button released at a position.
    PointerUp { button: MouseButton, x: f32, y: f32 },

    /// Touch batch.
    Touch { phase: TouchPhase, points: Vec<Point> },
}

impl InputEvent {
    /// Viewport position carried by the event, if any.
    ///
    /// For touch batches this is the most recently changed point.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { x, y, .. }
            | Self::PointerMoved { x, y }
            | Self::PointerUp { x, y, .. } => Some(Point::new(*x, *y)),
            Self::Touch { points, .. } => points.last().copied(),
            Self::KeyDown { .. } | Self::KeyUp { .. } => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
