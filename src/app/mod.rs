// LogSage - app/mod.rs
//
// Application layer: orchestration, state management, upload boundary.
// Dependencies: core, llm layers.
// Must NOT depend on: ui.

pub mod analysis;
pub mod state;
pub mod upload;
