//=========================================================================
// Arcade Engine — Library Root
//
// Runtime substrate for single-screen 2D arcade games.
//
// Responsibilities:
// - Expose the windowed entry point (`EngineBuilder` / `Engine`)
// - Expose the platform-independent core (clock, event bus, input,
//   lifecycle, frame runner, geometry) for hosts that drive their own loop
// - Keep Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use arcade_engine::EngineBuilder;
// use arcade_engine::core::lifecycle::Game;
//
// struct Idle;
// impl Game for Idle {}
//
// fn main() -> Result<(), arcade_engine::EngineError> {
//     EngineBuilder::new().build(Idle).run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every engine system that does not touch the OS. It can be
// driven headlessly through `core::runner::FrameRunner`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit event loop, window and input conversion.
// `engine` defines the builder and the windowed runtime.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
