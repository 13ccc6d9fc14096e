//=========================================================================
// Arcade Engine
//
// Main entry point: configures the stage and hands the game to the
// platform event loop.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(game)──>  Engine  ──run()──>  [Event Loop]
//         │                              │
//         ├─ with_title()                ├─ init()  (extra listeners)
//         ├─ with_size()                 └─ blocks until the window
//         ├─ with_pixel_ratio()             closes
//         ├─ with_primary_key()
//         └─ with_surface()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;
use crate::core::lifecycle::{Game, LifecycleManager, LoopContext};
use crate::core::runner::{FrameRunner, NullSurface, Surface};
use crate::core::stage::{Stage, DEFAULT_PIXEL_RATIO, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::platform::{Platform, RedrawScheduler, WindowConfig};

//=== EngineError =========================================================

/// Fatal platform errors surfaced by [`Engine::run`].
#[derive(Debug)]
pub enum EngineError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// The event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to create the game window.
    WindowCreation(winit::error::OsError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
        }
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Arcade Engine"
/// - **Size**: 960×540 logical pixels
/// - **Pixel ratio**: 2.0
/// - **Primary key**: Space
/// - **Surface**: [`NullSurface`]
///
/// # Examples
///
/// ```no_run
/// use arcade_engine::EngineBuilder;
/// use arcade_engine::core::lifecycle::{Game, LoopContext};
///
/// #[derive(Default)]
/// struct Pong { ticks: u64 }
///
/// impl Game for Pong {
///     fn on_update(ctx: &mut LoopContext<Self>) {
///         ctx.game.ticks += 1;
///     }
/// }
///
/// EngineBuilder::new()
///     .with_title("Pong")
///     .build(Pong::default())
///     .run()?;
/// # Ok::<(), arcade_engine::EngineError>(())
/// ```
pub struct EngineBuilder {
    title: String,
    width: f32,
    height: f32,
    pixel_ratio: f32,
    primary_key: KeyCode,
    surface: Box<dyn Surface>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: String::from("Arcade Engine"),
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            primary_key: KeyCode::Space,
            surface: Box::new(NullSurface),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial logical window size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Stage size must be positive, got {}x{}",
            width,
            height
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the backing-store pixel ratio.
    ///
    /// # Panics
    ///
    /// Panics if `ratio <= 0.0`.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        assert!(ratio > 0.0, "Pixel ratio must be positive, got {}", ratio);
        self.pixel_ratio = ratio;
        self
    }

    /// Rebinds the key that drives the primary button.
    pub fn with_primary_key(mut self, key: KeyCode) -> Self {
        self.primary_key = key;
        self
    }

    /// Sets the surface cleared between update and render.
    pub fn with_surface(mut self, surface: impl Surface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    /// Builds the engine around `game`, registering its lifecycle hooks.
    pub fn build<G: Game>(self, game: G) -> Engine<G> {
        info!(
            "Building engine ({}x{} @ {}x, primary key {:?})",
            self.width, self.height, self.pixel_ratio, self.primary_key
        );

        let stage = Stage::new(self.width, self.height, self.pixel_ratio);
        let mut context = LoopContext::new(game, stage);
        context.input_mut().set_primary_key(self.primary_key);

        Engine {
            runner: FrameRunner::new(
                LifecycleManager::for_game(),
                context,
                RedrawScheduler::new(),
                self.surface,
            ),
            window: WindowConfig {
                title: self.title,
                width: self.width,
                height: self.height,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Windowed runtime for a [`Game`].
///
/// Create via [`EngineBuilder`].
pub struct Engine<G: Game> {
    runner: FrameRunner<G, RedrawScheduler, Box<dyn Surface>>,
    window: WindowConfig,
}

impl<G: Game> Engine<G> {
    //--- Initialization ---------------------------------------------------

    /// Gives access to the lifecycle manager before the loop starts, e.g.
    /// to attach listeners owned by other collaborators.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut LifecycleManager<G>),
    {
        init_fn(self.runner.lifecycle_mut());
        self
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and runs the game until it is closed.
    ///
    /// Blocks the calling thread, which must be the main thread on
    /// platforms that require it.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime");

        let result = Platform::new(self.runner, self.window).run();

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
