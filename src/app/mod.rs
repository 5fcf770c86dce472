// LogCellar - app/mod.rs
//
// Application layer: the archive workflow and demo seeding.
// Dependencies: core, platform, util.

pub mod archiver;
pub mod demo;
