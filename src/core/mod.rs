//=========================================================================
// Core Systems
//
// Platform-independent engine systems.
//
// Responsibilities:
// - Frame timing (`clock`) and loop driving (`runner`)
// - Lifecycle orchestration with restart suspension (`lifecycle`) on top
//   of a typed listener registry (`event_bus`)
// - Edge-triggered input (`input`) and the one-button policies built on
//   it (`controls`, `ui`)
// - Stage dimensions (`stage`) and gameplay math (`geometry`)
//
// Notes:
// Everything here is single-threaded and free of OS calls; the platform
// layer feeds timestamps and input events in.
//
//=========================================================================

pub mod clock;
pub mod controls;
pub mod event_bus;
pub mod geometry;
pub mod input;
pub mod lifecycle;
pub mod runner;
pub mod stage;
pub mod ui;
