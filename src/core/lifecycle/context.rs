//=========================================================================
// Loop Context
//=========================================================================
//
// Long-lived state shared by every lifecycle listener.
//
// One context exists per frame runner. Listeners receive it by mutable
// reference; the game state is a public field so gameplay code can borrow
// it alongside values copied out of the clock or input tracker.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::clock::Clock;
use crate::core::geometry::Rect;
use crate::core::input::InputTracker;
use crate::core::stage::Stage;

//=== LoopContext =========================================================

#[derive(Debug)]
pub struct LoopContext<G> {
    /// Game-owned state.
    pub game: G,

    clock: Clock,
    input: InputTracker,
    stage: Stage,
    restart_requested: bool,
}

impl<G> LoopContext<G> {
    /// Creates a context whose input tracker covers the whole stage.
    pub fn new(game: G, stage: Stage) -> Self {
        Self {
            game,
            clock: Clock::new(),
            input: InputTracker::new(stage.bounds()),
            stage,
            restart_requested: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub(crate) fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    /// Mutable tracker, for hosts feeding platform events.
    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Resizes the stage and the tracker's surface together, keeping the
    /// surface origin.
    pub fn resize_stage(&mut self, w: f32, h: f32) {
        self.stage.resize(w, h);
        let surface = self.input.surface();
        self.input.set_surface(Rect::new(surface.x, surface.y, w, h));
    }

    //--- Restart Requests -------------------------------------------------

    /// Asks the lifecycle manager to restart once the current event's
    /// listeners have all run.
    ///
    /// Meant for listeners. A request made between frames waits for the
    /// next dispatch of any event; hosts outside a dispatch should call
    /// [`LifecycleManager::restart`](super::LifecycleManager::restart).
    pub fn request_restart(&mut self) {
        if !self.restart_requested {
            debug!(target: "lifecycle", "restart requested");
        }
        self.restart_requested = true;
    }

    pub fn restart_requested(&self) -> bool {
        self.restart_requested
    }

    pub(crate) fn take_restart_request(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
