//! Skyroute CLI library.
//!
//! Command handlers and output formatting used by the `skyroute-cli` binary.
//! Kept in a library target so integration tests can exercise the renderers
//! without spawning a process.

pub mod commands;
pub mod output;
