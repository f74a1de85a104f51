//! Doors between sibling rooms
//!
//! A door is bound to the two rooms produced by one split for its whole
//! lifetime. Only its location can change, and only along the wall those two
//! rooms share.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::region::{Point, Region};
use super::room::{RoomId, SplitOrientation};
use crate::rng::DungeonRng;

/// Distance a door keeps from either end of its wall
pub const DOOR_END_OFFSET: i32 = 2;

/// Stable identifier of a door in the dungeon arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorId(pub u32);

impl DoorId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// A door on the wall shared by two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Door {
    pub id: DoorId,
    pub location: Point,
    pub room_a: RoomId,
    pub room_b: RoomId,
    /// Orientation of the split that created the shared wall
    pub axis: SplitOrientation,
}

impl Door {
    /// Check if this door is bound to the given room
    pub fn connects(&self, room: RoomId) -> bool {
        self.room_a == room || self.room_b == room
    }

    /// The room on the other side of this door
    pub fn other(&self, room: RoomId) -> Option<RoomId> {
        if self.room_a == room {
            Some(self.room_b)
        } else if self.room_b == room {
            Some(self.room_a)
        } else {
            None
        }
    }
}

/// The stretch of a shared wall a door may occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSpan {
    axis: SplitOrientation,
    /// Column (widthwise) or row (heightwise) of the wall
    line: i32,
    /// First candidate offset along the wall
    start: i32,
    /// One past the last candidate offset
    end: i32,
}

impl DoorSpan {
    /// Span of the wall between the two children of a split along `axis`
    pub fn between(a: &Region, b: &Region, axis: SplitOrientation) -> Self {
        let (line, origin, length) = match axis {
            SplitOrientation::Widthwise => (b.x, a.y, a.height),
            SplitOrientation::Heightwise => (b.y, a.x, a.width),
        };
        Self {
            axis,
            line,
            start: origin + DOOR_END_OFFSET,
            end: origin + length - DOOR_END_OFFSET,
        }
    }

    fn at(&self, offset: i32) -> Point {
        match self.axis {
            SplitOrientation::Widthwise => Point::new(self.line, offset),
            SplitOrientation::Heightwise => Point::new(offset, self.line),
        }
    }

    /// Draw a location uniformly from the span
    pub fn sample(&self, rng: &mut DungeonRng) -> Point {
        self.at(rng.range(self.start, self.end))
    }

    /// Every location `sample` can return
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (self.start..self.end.max(self.start + 1)).map(|offset| self.at(offset))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points().any(|candidate| candidate == p)
    }
}

/// Pick a new location for a door on its span
///
/// Does not look at any blacklist; the caller decides whether the result is
/// acceptable.
pub fn relocate(span: &DoorSpan, rng: &mut DungeonRng) -> Point {
    span.sample(rng)
}
