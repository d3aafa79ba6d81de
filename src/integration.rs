//! Host integration
//!
//! The runtime that owns state and the update loop, the renderer and the runner
//! that connects both to a terminal.

pub mod app_runner;
pub mod renderer;
pub mod runtime;
