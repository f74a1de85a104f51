//! Door placement at split boundaries

use tracing::trace;

use super::door::{Door, DoorId, DoorSpan};
use super::layout::Dungeon;
use super::room::{RoomId, SplitOrientation};
use crate::error::Result;
use crate::rng::DungeonRng;

/// Place a door on the wall between two freshly split rooms
///
/// Both rooms first pick up every existing door that lies inside their
/// outline, then the new door is bound to them.
pub(crate) fn place_door(
    dungeon: &mut Dungeon,
    room_a: RoomId,
    room_b: RoomId,
    axis: SplitOrientation,
    rng: &mut DungeonRng,
) -> Result<DoorId> {
    let span = DoorSpan::between(
        &dungeon.rooms[room_a.index()].region,
        &dungeon.rooms[room_b.index()].region,
        axis,
    );
    let location = span.sample(rng);

    index_boundary_doors(dungeon, room_a);
    index_boundary_doors(dungeon, room_b);

    let id = dungeon.push_door(location, room_a, room_b, axis)?;
    dungeon.rooms[room_a.index()].doors.insert(id);
    dungeon.rooms[room_b.index()].doors.insert(id);
    trace!(door = %id, %location, %room_a, %room_b, "placed door");
    Ok(id)
}

/// Register every existing door inside a room's outline against that room
pub(crate) fn index_boundary_doors(dungeon: &mut Dungeon, room: RoomId) {
    let region = dungeon.rooms[room.index()].region;
    let found: Vec<DoorId> = dungeon
        .doors
        .iter()
        .filter(|door| region.contains(door.location))
        .map(|door: &Door| door.id)
        .collect();
    dungeon.rooms[room.index()].doors.extend(found);
}
