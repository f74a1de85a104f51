//! Room connectivity classes
//!
//! Finished rooms are labelled by how many doors lie on their outline.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::debug;

use super::layout::Dungeon;

/// Connectivity class of a finished room
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoomClass {
    /// No doors
    Isolated,
    /// One door
    DeadEnd,
    /// Two doors
    Corridor,
    /// Three or more doors
    Junction,
}

impl RoomClass {
    pub fn from_door_count(doors: usize) -> Self {
        match doors {
            0 => RoomClass::Isolated,
            1 => RoomClass::DeadEnd,
            2 => RoomClass::Corridor,
            _ => RoomClass::Junction,
        }
    }
}

/// Label every leaf room by its door count
pub(crate) fn classify_rooms(dungeon: &mut Dungeon) {
    for room in dungeon.rooms.iter_mut().filter(|room| room.is_leaf()) {
        room.class = Some(RoomClass::from_door_count(room.doors.len()));
        debug!("{room}");
    }
}
