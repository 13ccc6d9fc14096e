//=========================================================================
// Lifecycle Manager
//=========================================================================
//
// Fires lifecycle events and owns the restart-suspension state machine.
//
// State machine:
// ```text
//                 restart()
//   ┌─────────┐ ───────────▶ ┌──────────────────┐
//   │ Running │              │ RestartSuspended │
//   └─────────┘ ◀─────────── └──────────────────┘
//                 render()
//
//   Running:           update() fires Update, render() fires Render
//   RestartSuspended:  update() fires nothing, render() fires nothing
// ```
//
// A listener may call `LoopContext::request_restart`; the manager runs
// the restart right after the event that produced the request finishes
// dispatching.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Game, LifecycleEvent, LoopContext};
use crate::core::event_bus::{EventBus, Listener};

//=== LifecycleState ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Running,

    /// The update/render pair following a restart is being skipped.
    RestartSuspended,
}

//=== LifecycleManager ====================================================

pub struct LifecycleManager<G> {
    bus: EventBus<LifecycleEvent, LoopContext<G>>,
    state: LifecycleState,
}

impl<G: 'static> LifecycleManager<G> {
    /// Creates a manager with no listeners.
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
            state: LifecycleState::Running,
        }
    }

    //--- Registration -----------------------------------------------------

    pub fn on(
        &mut self,
        event: LifecycleEvent,
        listener: Listener<LoopContext<G>>,
    ) -> Listener<LoopContext<G>> {
        self.bus.on(event, listener)
    }

    pub fn on_fn<F>(&mut self, event: LifecycleEvent, callback: F) -> Listener<LoopContext<G>>
    where
        F: FnMut(&mut LoopContext<G>) + 'static,
    {
        self.bus.on_fn(event, callback)
    }

    pub fn off(&mut self, event: LifecycleEvent, listener: &Listener<LoopContext<G>>) {
        self.bus.off(event, listener);
    }

    /// Shared handle onto the listener registry.
    ///
    /// Clone it into a listener to register or remove listeners while
    /// events are being dispatched.
    pub fn bus(&self) -> &EventBus<LifecycleEvent, LoopContext<G>> {
        &self.bus
    }

    //--- Lifecycle Events -------------------------------------------------

    /// Fires Start. Does not affect suspension.
    pub fn start(&mut self, ctx: &mut LoopContext<G>) {
        debug!(target: "lifecycle", "start");
        self.dispatch(LifecycleEvent::Start, ctx);
    }

    /// Fires Restart, then suspends the next update/render pair.
    pub fn restart(&mut self, ctx: &mut LoopContext<G>) {
        self.bus.trigger(LifecycleEvent::Restart, ctx);
        if ctx.take_restart_request() {
            debug!(target: "lifecycle", "restart requested while restarting; ignored");
        }

        self.state = LifecycleState::RestartSuspended;
        debug!(target: "lifecycle", "restart: next frame suspended");
    }

    /// Fires Update unless suspended.
    pub fn update(&mut self, ctx: &mut LoopContext<G>) {
        if self.state == LifecycleState::Running {
            self.dispatch(LifecycleEvent::Update, ctx);
        }
    }

    /// Fires Render unless suspended; a suspended render resumes running.
    pub fn render(&mut self, ctx: &mut LoopContext<G>) {
        match self.state {
            LifecycleState::Running => self.dispatch(LifecycleEvent::Render, ctx),
            LifecycleState::RestartSuspended => {
                self.state = LifecycleState::Running;
                debug!(target: "lifecycle", "suspension consumed");
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_suspended(&self) -> bool {
        self.state == LifecycleState::RestartSuspended
    }

    //--- Internal ---------------------------------------------------------

    fn dispatch(&mut self, event: LifecycleEvent, ctx: &mut LoopContext<G>) {
        self.bus.trigger(event, ctx);
        if ctx.take_restart_request() {
            self.restart(ctx);
        }
    }
}

impl<G: Game> LifecycleManager<G> {
    /// Creates a manager with `G`'s hooks registered, then runs `G::init`.
    pub fn for_game() -> Self {
        let mut manager = Self::new();
        manager.on_fn(LifecycleEvent::Start, G::on_start);
        manager.on_fn(LifecycleEvent::Restart, G::on_restart);
        manager.on_fn(LifecycleEvent::Update, G::on_update);
        manager.on_fn(LifecycleEvent::Render, G::on_render);
        G::init(&mut manager);
        manager
    }
}

impl<G: 'static> Default for LifecycleManager<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> std::fmt::Debug for LifecycleManager<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
