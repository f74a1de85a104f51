//! Generation errors
//!
//! "Cannot split" is not an error: the partitioner reports it as `None`.
//! Everything here aborts generation.

use thiserror::Error;

use crate::dungeon::{DoorId, Point, RoomId};

/// Errors that abort a generation pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("region must have a positive size, got {width}x{height}")]
    EmptyRegion { width: i32, height: i32 },

    #[error("minimum room size {min_room_size} is below the supported floor of {floor}")]
    MinimumRoomSizeTooSmall { min_room_size: i32, floor: i32 },

    #[error("door relocation budget must be at least one attempt")]
    ZeroRelocationBudget,

    #[error("too many {kind} for 32-bit ids")]
    IdSpaceExhausted { kind: &'static str },

    #[error("door {door} between {room_a} and {room_b} has no position on its wall clear of room corners")]
    NoFreeDoorPosition {
        door: DoorId,
        room_a: RoomId,
        room_b: RoomId,
    },

    #[error(
        "door {door} between {room_a} and {room_b} still sits on corner {location} after {attempts} relocation attempts"
    )]
    RelocationExhausted {
        door: DoorId,
        room_a: RoomId,
        room_b: RoomId,
        location: Point,
        attempts: u32,
    },
}

/// Result alias for generation
pub type Result<T> = std::result::Result<T, GenerationError>;
