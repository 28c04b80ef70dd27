// LogSage - core/mod.rs
//
// Core business logic layer: extraction and prompt assembly.
// Dependencies: standard library only.
// Must NOT depend on: ui, app, llm, or any I/O crate directly.

pub mod extract;
pub mod model;
pub mod prompt;
