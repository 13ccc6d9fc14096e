//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arcade_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine entry point
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Frame loop
pub use crate::core::clock::Clock;
pub use crate::core::lifecycle::{Game, LifecycleEvent, LifecycleManager, LoopContext};
pub use crate::core::runner::{FrameRunner, FrameScheduler, NullSurface, Surface};
pub use crate::core::stage::Stage;

// Input
pub use crate::core::controls::{fly_held, tap, Tap};
pub use crate::core::input::{Button, InputEvent, InputTracker, KeyCode, MouseButton};
pub use crate::core::ui::{ButtonBar, ButtonId};

// Geometry
pub use crate::core::geometry::{Point, Rect};
