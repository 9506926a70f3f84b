//! Support library for the `mkdigraph` binary.
//!
//! Exposes argument parsing, command execution and logging set-up so tests can
//! drive the generator pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
