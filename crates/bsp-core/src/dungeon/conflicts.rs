//! Door/corner conflict resolution
//!
//! Doors are placed as soon as a room is split, so a later split can put a
//! room corner right on an earlier door. Such doors are moved along their own
//! wall until they are clear of every leaf corner.

use tracing::debug;

use super::door::{relocate, DoorId, DoorSpan};
use super::layout::Dungeon;
use crate::error::{GenerationError, Result};
use crate::rng::DungeonRng;

/// Move every door that sits on a leaf room corner
///
/// Returns the number of doors that were moved.
pub(crate) fn resolve_conflicts(
    dungeon: &mut Dungeon,
    max_attempts: u32,
    rng: &mut DungeonRng,
) -> Result<usize> {
    let blocked: Vec<DoorId> = dungeon
        .doors
        .iter()
        .filter(|door| dungeon.blacklist.contains(&door.location))
        .map(|door| door.id)
        .collect();

    for &id in &blocked {
        let door = &dungeon.doors[id.index()];
        let span = DoorSpan::between(
            &dungeon.rooms[door.room_a.index()].region,
            &dungeon.rooms[door.room_b.index()].region,
            door.axis,
        );

        if span.points().all(|p| dungeon.blacklist.contains(&p)) {
            return Err(GenerationError::NoFreeDoorPosition {
                door: id,
                room_a: door.room_a,
                room_b: door.room_b,
            });
        }

        let from = door.location;
        let mut location = from;
        let mut attempts = 0;
        while dungeon.blacklist.contains(&location) {
            if attempts == max_attempts {
                return Err(GenerationError::RelocationExhausted {
                    door: id,
                    room_a: door.room_a,
                    room_b: door.room_b,
                    location,
                    attempts,
                });
            }
            location = relocate(&span, rng);
            attempts += 1;
        }

        debug!(door = %id, %from, to = %location, attempts, "moved door off room corner");
        dungeon.doors[id.index()].location = location;
    }

    Ok(blocked.len())
}
