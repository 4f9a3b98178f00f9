//! CLI library components for the DSN dictionary builder.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
