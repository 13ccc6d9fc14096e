//=========================================================================
// Input System
//
// Edge-triggered input for gameplay code.
//
// Responsibilities:
// - Define the platform-neutral `InputEvent` vocabulary
// - Track three logical buttons (primary key, primary pointer, tap)
// - Track the last pointer position in surface space and the touch count
//
// Notes:
// The tracker is owned by the loop context and reset by the frame runner
// once per frame, after render.
//
//=========================================================================

//=== Submodules ==========================================================

mod button;
pub mod event;
mod tracker;

//=== Public API ==========================================================

pub use button::{Button, ButtonState};
pub use event::{InputEvent, KeyCode, MouseButton, TouchPhase};
pub use tracker::InputTracker;
