//=========================================================================
// Platform Subsystem
//
// Hosts a frame runner inside the Winit event loop.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ├─ Keyboard/Mouse/Touch                    │
//  │   │    ↓ InputProcessor (logical px)         │
//  │   │    ↓ InputTracker::apply (immediately)   │
//  │   │                                          │
//  │   ├─ Resized / ScaleFactorChanged            │
//  │   │    ↓ Stage + tracker surface bounds      │
//  │   │                                          │
//  │   └─ RedrawRequested                         │
//  │        ↓ pending frame? → FrameRunner::run   │
//  │        ↓ runner reschedules via              │
//  │          RedrawScheduler → request_redraw()  │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: one frame per redraw that the
//   runner asked for; redraws initiated by the OS (expose, resize) do not
//   advance the clock
// - **Lazy window**: created in `resumed()`, the first resume boots the
//   game (Start → Restart → runner start)
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::lifecycle::Game;
use crate::core::runner::{FrameRunner, FrameScheduler, Surface};
use crate::engine::EngineError;
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Initial window parameters.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

//=== RedrawScheduler =====================================================

/// [`FrameScheduler`] backed by `Window::request_redraw`.
///
/// The pending flag records that the runner asked for a frame; a request
/// made before the window exists is replayed when it is attached.
#[derive(Debug, Default)]
pub(crate) struct RedrawScheduler {
    window: Option<Arc<Window>>,
    pending: bool,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, window: Arc<Window>) {
        if self.pending {
            window.request_redraw();
        }
        self.window = Some(window);
    }

    /// Returns `true` (and clears the flag) if a frame was requested.
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn cancel_frame(&mut self) {
        // Winit cannot retract a redraw request; dropping the flag makes the
        // resulting RedrawRequested a no-op.
        self.pending = false;
    }
}

//=== Platform ============================================================

/// Window owner and event pump for one game.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(runner, config)`
/// 2. **Execution**: `platform.run()` blocks inside the Winit event loop
/// 3. **First resume**: window created, stage sized, game booted
/// 4. **Shutdown**: close requested → runner stopped → loop exits
pub(crate) struct Platform<G, D> {
    runner: FrameRunner<G, RedrawScheduler, D>,
    config: WindowConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    input_processor: InputProcessor,

    /// Origin of the millisecond timestamps fed to the runner.
    epoch: Instant,

    booted: bool,

    /// Fatal error raised inside the event loop, returned by `run()`.
    error: Option<EngineError>,
}

impl<G, D> Platform<G, D>
where
    G: Game,
    D: Surface,
{
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub fn new(runner: FrameRunner<G, RedrawScheduler, D>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            runner,
            config,
            window: None,
            input_processor: InputProcessor::new(),
            epoch: Instant::now(),
            booted: false,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the event loop cannot be created, fails
    /// while running, or the window cannot be created.
    pub fn run(mut self) -> Result<(), EngineError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(EngineError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(EngineError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Milliseconds since the platform was created.
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1_000.0
    }

    /// First-resume bootstrap: Start → Restart → runner start.
    fn boot(&mut self) {
        if self.booted {
            return;
        }
        self.booted = true;

        let now = self.now();
        info!(target: "platform", "Booting game at {:.3} ms", now);
        self.runner.boot(now);
    }

    /// Runs a frame if the runner requested one.
    fn redraw(&mut self) {
        if !self.runner.scheduler_mut().take_pending() {
            trace!(target: "platform", "Redraw without pending frame ignored");
            return;
        }

        let now = self.now();
        self.runner.run(now);
    }

    fn apply_input(&mut self, event: InputEvent) {
        trace!(target: "platform::input", "{:?}", event);
        self.runner.context_mut().input_mut().apply(&event);
    }

    /// Resizes the stage and the tracker's surface to a physical size.
    fn resize(&mut self, size: PhysicalSize<u32>) {
        let logical: LogicalSize<f32> = size.to_logical(self.input_processor.scale_factor());

        let ctx = self.runner.context_mut();
        ctx.resize_stage(logical.width, logical.height);

        debug!(
            target: "platform",
            "Stage resized to {}x{} (backing {:?})",
            logical.width,
            logical.height,
            ctx.stage().backing_size()
        );
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        debug!(
            target: "platform",
            "Stopping runner (frame pending: {})",
            self.runner.scheduler().is_pending()
        );
        self.runner.stop();
        event_loop.exit();
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl<G, D> ApplicationHandler for Platform<G, D>
where
    G: Game,
    D: Surface,
{
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );

                self.input_processor.set_scale_factor(window.scale_factor());
                self.resize(window.inner_size());
                self.runner.scheduler_mut().attach(Arc::clone(&window));
                self.window = Some(window);

                self.boot();
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.error = Some(EngineError::WindowCreation(e));
                self.shutdown(event_loop);
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(size) => {
                self.resize(size);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input_processor.set_scale_factor(scale_factor);
                if let Some(size) = self.window.as_ref().map(|w| w.inner_size()) {
                    self.resize(size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_cursor_moved(position);
                self.apply_input(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.apply_input(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(&key_event) {
                    self.apply_input(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::Touch(touch) => {
                let event = self
                    .input_processor
                    .process_touch(touch.id, touch.phase, touch.location);
                self.apply_input(event);
                trace!(
                    target: "platform::input",
                    "{} active touches",
                    self.input_processor.active_touches()
                );
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::core::input::KeyCode;
    use crate::core::lifecycle::{LifecycleManager, LoopContext};
    use crate::core::runner::NullSurface;
    use crate::core::stage::Stage;

    #[derive(Debug, Default)]
    struct Ticker {
        updates: u32,
    }

    impl Game for Ticker {
        fn on_update(ctx: &mut LoopContext<Self>) {
            ctx.game.updates += 1;
        }
    }

    fn platform() -> Platform<Ticker, NullSurface> {
        let runner = FrameRunner::new(
            LifecycleManager::for_game(),
            LoopContext::new(Ticker::default(), Stage::default()),
            RedrawScheduler::new(),
            NullSurface,
        );
        let config = WindowConfig {
            title: String::from("test"),
            width: 960.0,
            height: 540.0,
        };
        Platform::new(runner, config)
    }

    //=====================================================================
    // RedrawScheduler Tests
    //=====================================================================

    #[test]
    fn scheduler_tracks_pending_without_window() {
        let mut scheduler = RedrawScheduler::new();
        assert!(!scheduler.is_pending());

        scheduler.request_frame();
        assert!(scheduler.is_pending());
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
    }

    #[test]
    fn cancel_drops_pending_request() {
        let mut scheduler = RedrawScheduler::new();
        scheduler.request_frame();
        scheduler.cancel_frame();
        assert!(!scheduler.is_pending());
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let platform = platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
        assert!(!platform.runner.is_running());
    }

    #[test]
    fn boot_runs_once() {
        let mut platform = platform();
        platform.boot();
        platform.boot();

        assert!(platform.runner.is_running());
        assert_eq!(platform.runner.context().clock().frame_count(), 1);
        assert!(platform.runner.scheduler().is_pending());
    }

    #[test]
    fn unrequested_redraw_does_not_advance() {
        let mut platform = platform();
        platform.redraw();
        assert_eq!(platform.runner.context().clock().frame_count(), 0);
    }

    #[test]
    fn requested_redraw_runs_one_frame() {
        let mut platform = platform();
        platform.boot();

        // Boot frame is suspended by the initial restart
        platform.redraw();
        assert_eq!(platform.runner.context().clock().frame_count(), 2);
        assert_eq!(platform.runner.context().game.updates, 1);
    }

    #[test]
    fn input_is_applied_immediately() {
        let mut platform = platform();
        platform.apply_input(InputEvent::KeyDown { key: KeyCode::Space });
        assert!(platform.runner.context().input().any_pressed());
    }

    #[test]
    fn resize_updates_stage_and_bounds() {
        let mut platform = platform();
        platform.input_processor.set_scale_factor(2.0);
        platform.resize(PhysicalSize::new(1280, 720));

        let ctx = platform.runner.context();
        assert_eq!(ctx.stage().width(), 640.0);
        assert_eq!(ctx.stage().height(), 360.0);
        assert_eq!(ctx.input().surface(), Rect::new(0.0, 0.0, 640.0, 360.0));
    }
}
