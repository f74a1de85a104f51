//! bsp-core: dungeon layout by binary space partition
//!
//! Splits a rectangular region into rooms joined by doors, moves doors off
//! room corners and labels each room by how connected it is. The crate does
//! no I/O; rendering and pathfinding live downstream.

pub mod config;
pub mod dungeon;
mod error;
mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{generate, Dungeon};
pub use error::{GenerationError, Result};
pub use rng::DungeonRng;
