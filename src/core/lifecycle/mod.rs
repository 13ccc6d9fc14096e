//=========================================================================
// Lifecycle
//=========================================================================
//
// Start / restart / update / render orchestration.
//
// Architecture:
//   Game (capability trait) ──registers──▶ LifecycleManager
//                                              │ EventBus<LifecycleEvent, LoopContext<G>>
//                                              ▼
//                               listeners(&mut LoopContext<G>)
//
// The manager owns the one-frame restart suspension; the context owns
// everything listeners read or mutate (clock, input, stage, game state).
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod manager;

//=== Public API ==========================================================

pub use context::LoopContext;
pub use manager::{LifecycleManager, LifecycleState};

//=== Internal Dependencies ===============================================

use crate::core::event_bus::EventKind;

//=== LifecycleEvent ======================================================

/// The four events a lifecycle manager fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Once per process, before the first restart.
    Start,

    /// Every time the game (re)initializes its per-run state.
    Restart,

    /// Once per unsuspended frame, before the surface is cleared.
    Update,

    /// Once per unsuspended frame, after the surface is cleared.
    Render,
}

impl EventKind for LifecycleEvent {}

//=== Game ================================================================

/// Capability trait implemented by the game's own state type.
///
/// Each hook is registered as the first listener of its event when a
/// manager is built with [`LifecycleManager::for_game`]; all hooks default
/// to no-ops. Hooks reach the game through [`LoopContext::game`].
pub trait Game: Sized + 'static {
    /// Called once after the four hooks are registered. Use it to attach
    /// auxiliary listeners.
    fn init(_manager: &mut LifecycleManager<Self>) {}

    fn on_start(_ctx: &mut LoopContext<Self>) {}

    fn on_restart(_ctx: &mut LoopContext<Self>) {}

    fn on_update(_ctx: &mut LoopContext<Self>) {}

    fn on_render(_ctx: &mut LoopContext<Self>) {}
}
