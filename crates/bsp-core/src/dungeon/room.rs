//! Rooms of the partition tree
//!
//! Every room ever created stays in the dungeon's arena. Rooms that were
//! split keep links to their two children; leaves are the finished rooms.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::classify::RoomClass;
use super::door::DoorId;
use super::region::Region;

/// Stable identifier of a room in the dungeon arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl RoomId {
    /// The room covering the whole region
    pub const ROOT: RoomId = RoomId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Axis a room is cut along when it is split
///
/// Children always take the opposite orientation of their parent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SplitOrientation {
    /// Cut across the width, leaving a vertical shared wall
    #[default]
    Widthwise,
    /// Cut across the height, leaving a horizontal shared wall
    Heightwise,
}

impl SplitOrientation {
    pub fn flipped(self) -> Self {
        match self {
            SplitOrientation::Widthwise => SplitOrientation::Heightwise,
            SplitOrientation::Heightwise => SplitOrientation::Widthwise,
        }
    }
}

/// A rectangular room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub region: Region,
    /// How this room is cut if it is split
    pub orientation: SplitOrientation,
    /// Doors lying on this room's outline
    pub doors: BTreeSet<DoorId>,
    /// Connectivity class, set on leaves once generation finishes
    pub class: Option<RoomClass>,
    pub parent: Option<RoomId>,
    pub children: Option<(RoomId, RoomId)>,
}

impl Room {
    pub fn new(
        id: RoomId,
        region: Region,
        orientation: SplitOrientation,
        parent: Option<RoomId>,
    ) -> Self {
        Self {
            id,
            region,
            orientation,
            doors: BTreeSet::new(),
            class: None,
            parent,
            children: None,
        }
    }

    /// Check if this room was never split
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn has_door(&self, door: DoorId) -> bool {
        self.doors.contains(&door)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.region)?;
        match self.class {
            Some(class) => write!(f, " [{}, {} doors]", class, self.doors.len()),
            None => write!(f, " [{} doors]", self.doors.len()),
        }
    }
}
