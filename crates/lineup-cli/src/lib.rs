//! Library side of the `lineup` binary: logging, configuration, rendering
//! and the interactive session loop.

pub mod config;
pub mod logging;
pub mod repl;
pub mod summary;
