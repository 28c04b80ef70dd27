// LogSage - ui/panels/mod.rs

pub mod preview;
pub mod results;
pub mod snippets;
