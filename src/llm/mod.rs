// LogSage - llm/mod.rs
//
// Remote AI service layer: configuration, wire types, the Azure OpenAI
// client, and the analysis requester.
// Dependencies: core (models), util. Must NOT depend on: ui, app.

pub mod analyzer;
pub mod api;
pub mod client;
pub mod config;
