//! groupcolor - look up the canonical RGB color for a group key.
//!
//! A small library with an optional command-line front end. Group colors are
//! compiled in from `groups.json`; unknown groups resolve to white.

pub mod arith;
pub mod colors;
pub mod config;
pub mod errors;

// Compiled into build.rs; built here only for its tests
#[cfg(test)]
mod table;

#[cfg(feature = "cli")]
pub mod cli;

pub use arith::add;
pub use colors::get_color;
