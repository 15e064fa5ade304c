//! Support library for the roadnet CLI binary.
//!
//! Re-exports the CLI module so doctests and tests can exercise the command
//! pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
