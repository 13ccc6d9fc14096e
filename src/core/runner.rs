//=========================================================================
// Frame Runner
//=========================================================================
//
// Drives the per-frame loop.
//
// Frame order (fixed):
// ```text
//   Clock::update(ts)
//     → LifecycleManager::update
//     → Surface::clear
//     → LifecycleManager::render
//     → InputTracker::reset
//     → FrameScheduler::request_frame   (only while running)
// ```
//
// The host owns the timing source: it calls `run(ts)` once per frame it
// was asked for through `FrameScheduler::request_frame`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::lifecycle::{Game, LifecycleManager, LoopContext};
use crate::core::stage::Stage;

//=== Host Interfaces =====================================================

/// Host-side frame scheduling (e.g. a redraw request).
pub trait FrameScheduler {
    /// Asks the host to call `FrameRunner::run` on its next refresh.
    fn request_frame(&mut self);

    /// Best-effort cancellation of a pending request.
    fn cancel_frame(&mut self);
}

/// Drawing surface, cleared once per frame between update and render.
pub trait Surface {
    fn clear(&mut self);
}

impl<T: Surface + ?Sized> Surface for Box<T> {
    fn clear(&mut self) {
        (**self).clear();
    }
}

/// Surface that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
}

//=== FrameRunner =========================================================

#[derive(Debug)]
pub struct FrameRunner<G, S, D> {
    lifecycle: LifecycleManager<G>,
    context: LoopContext<G>,
    scheduler: S,
    surface: D,
    running: bool,
}

impl<G, S, D> FrameRunner<G, S, D>
where
    G: 'static,
    S: FrameScheduler,
    D: Surface,
{
    pub fn new(
        lifecycle: LifecycleManager<G>,
        context: LoopContext<G>,
        scheduler: S,
        surface: D,
    ) -> Self {
        Self {
            lifecycle,
            context,
            scheduler,
            surface,
            running: false,
        }
    }

    //--- Loop Control -----------------------------------------------------

    /// Starts the loop and runs the first frame. No-op if already running.
    pub fn start(&mut self, timestamp: f64) {
        if self.running {
            return;
        }

        debug!(target: "runner", "start at {:.3} ms", timestamp);
        self.running = true;
        self.context.clock_mut().start(timestamp);
        self.run(timestamp);
    }

    /// Stops rescheduling. A frame already in progress still completes.
    pub fn stop(&mut self) {
        if self.running {
            debug!(target: "runner", "stop after frame {}", self.context.clock().frame_count());
        }
        self.running = false;
        self.scheduler.cancel_frame();
    }

    /// Runs one frame at `timestamp`.
    pub fn run(&mut self, timestamp: f64) {
        self.context.clock_mut().update(timestamp);
        self.lifecycle.update(&mut self.context);
        self.surface.clear();
        self.lifecycle.render(&mut self.context);
        self.context.input_mut().reset();

        if self.running {
            self.scheduler.request_frame();
        }
    }

    /// Process bootstrap: Start, then Restart, then `start(timestamp)`.
    pub fn boot(&mut self, timestamp: f64) {
        self.lifecycle.start(&mut self.context);
        self.lifecycle.restart(&mut self.context);
        self.start(timestamp);
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn context(&self) -> &LoopContext<G> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut LoopContext<G> {
        &mut self.context
    }

    pub fn lifecycle(&self) -> &LifecycleManager<G> {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut LifecycleManager<G> {
        &mut self.lifecycle
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }
}

impl<G, S, D> FrameRunner<G, S, D>
where
    G: Game,
    S: FrameScheduler,
    D: Surface,
{
    /// Builds a runner whose lifecycle carries `game`'s hooks.
    pub fn for_game(game: G, stage: Stage, scheduler: S, surface: D) -> Self {
        Self::new(LifecycleManager::for_game(), LoopContext::new(game, stage), scheduler, surface)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
