//! Binary space partition of the dungeon region
//!
//! Rooms are split one at a time, picked at random from a worklist of rooms
//! that may still split. Each room is cut along its own orientation and both
//! children are cut along the other axis next, so consecutive generations
//! alternate between vertical and horizontal walls.

use tracing::trace;

use super::doors::place_door;
use super::layout::Dungeon;
use super::region::Region;
use super::room::{RoomId, SplitOrientation};
use crate::error::Result;
use crate::rng::DungeonRng;

/// Split a region along `orientation` into two overlapping children
///
/// The first child is one cell wider (or taller) than the cut so both
/// children include the shared wall. Returns `None` if the region cannot
/// yield two children of at least `min_room_size`.
pub fn split_region(
    region: &Region,
    orientation: SplitOrientation,
    min_room_size: i32,
    rng: &mut DungeonRng,
) -> Option<(Region, Region)> {
    match orientation {
        SplitOrientation::Widthwise => {
            let width = region.width;
            if width - min_room_size < min_room_size {
                return None;
            }
            let cut = width - rng.range(min_room_size, width - min_room_size);
            Some((
                Region::new(region.x, region.y, cut + 1, region.height),
                Region::new(region.x + cut, region.y, width - cut, region.height),
            ))
        }
        SplitOrientation::Heightwise => {
            let height = region.height;
            if height - min_room_size < min_room_size {
                return None;
            }
            let cut = height - rng.range(min_room_size, height - min_room_size);
            Some((
                Region::new(region.x, region.y, region.width, cut + 1),
                Region::new(region.x, region.y + cut, region.width, height - cut),
            ))
        }
    }
}

/// Split rooms until none can be split further
///
/// Every successful split adds a door between the two children. Returns the
/// leaf rooms, sorted by id.
pub(crate) fn partition(dungeon: &mut Dungeon, rng: &mut DungeonRng) -> Result<Vec<RoomId>> {
    let min_room_size = dungeon.min_room_size();
    let mut splittable = vec![RoomId::ROOT];
    let mut settled = Vec::new();

    while !splittable.is_empty() {
        let pick = rng.index(splittable.len());
        let room_id = splittable.swap_remove(pick);
        let (region, orientation) = {
            let room = &dungeon.rooms[room_id.index()];
            (room.region, room.orientation)
        };

        let Some((a, b)) = split_region(&region, orientation, min_room_size, rng) else {
            trace!(room = %room_id, %region, %orientation, "room cannot split further");
            settled.push(room_id);
            continue;
        };

        let next = orientation.flipped();
        let id_a = dungeon.push_room(a, next, Some(room_id))?;
        let id_b = dungeon.push_room(b, next, Some(room_id))?;
        dungeon.rooms[room_id.index()].children = Some((id_a, id_b));
        trace!(room = %room_id, %region, %orientation, left = %a, right = %b, "split room");

        place_door(dungeon, id_a, id_b, orientation, rng)?;

        splittable.push(id_a);
        splittable.push(id_b);
    }

    settled.sort_unstable();
    Ok(settled)
}
