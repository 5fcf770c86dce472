// LogCellar - core/mod.rs
//
// Core business logic layer: file selection, date matching, archive format.
// Must NOT depend on: app, platform.

pub mod archive;
pub mod matcher;
pub mod model;
pub mod selection;
