//! Dungeon layout
//!
//! Contains regions, rooms, doors and the passes that build a dungeon:
//! partition, door placement, corner conflict resolution and classification.

mod classify;
mod conflicts;
mod door;
mod doors;
mod layout;
mod partition;
mod region;
mod room;

pub use classify::RoomClass;
pub use door::{relocate, Door, DoorId, DoorSpan, DOOR_END_OFFSET};
pub use layout::{generate, Dungeon, DungeonStats};
pub use partition::split_region;
pub use region::{Point, Region};
pub use room::{Room, RoomId, SplitOrientation};
