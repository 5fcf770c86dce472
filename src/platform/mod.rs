// LogCellar - platform/mod.rs
//
// Platform abstraction layer: config directories, config.toml, and the
// filesystem side effects (directory creation, file removal).

pub mod config;
pub mod fs;
