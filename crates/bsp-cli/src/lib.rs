//! bsp-cli: command-line front end for bsp-core
//!
//! Loads generator settings, and turns a finished dungeon into text.

pub mod preview;
pub mod settings;
