//! The generated dungeon
//!
//! Owns every room and door in two arenas indexed by `RoomId` and `DoorId`.
//! Rooms and doors refer to each other only by id.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::info;

use super::classify::{classify_rooms, RoomClass};
use super::conflicts::resolve_conflicts;
use super::door::{Door, DoorId};
use super::partition::partition;
use super::region::{Point, Region};
use super::room::{Room, RoomId, SplitOrientation};
use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};
use crate::rng::DungeonRng;

/// A partitioned region with rooms, doors and room classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    seed: u64,
    bounds: Region,
    min_room_size: i32,
    pub(crate) rooms: Vec<Room>,
    pub(crate) doors: Vec<Door>,
    leaves: Vec<RoomId>,
    pub(crate) blacklist: BTreeSet<Point>,
    relocated_doors: usize,
}

/// Summary counts of a generated dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DungeonStats {
    pub rooms: usize,
    pub doors: usize,
    pub splits: usize,
    pub relocated_doors: usize,
    pub classes: BTreeMap<RoomClass, usize>,
}

impl Dungeon {
    /// Create an unsplit dungeon whose only room is the root
    pub(crate) fn new(
        bounds: Region,
        min_room_size: i32,
        seed: u64,
        orientation: SplitOrientation,
    ) -> Self {
        Self {
            seed,
            bounds,
            min_room_size,
            rooms: vec![Room::new(RoomId::ROOT, bounds, orientation, None)],
            doors: Vec::new(),
            leaves: vec![RoomId::ROOT],
            blacklist: BTreeSet::new(),
            relocated_doors: 0,
        }
    }

    /// Generate a dungeon from a configuration
    pub fn generate(config: &GeneratorConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => DungeonRng::new(seed),
            None => DungeonRng::from_entropy(),
        };
        Self::generate_with(
            config.region(),
            config.min_room_size,
            config.initial_orientation,
            config.max_relocation_attempts,
            &mut rng,
        )
    }

    /// Run every generation pass with the given RNG
    ///
    /// Checks the parameters the same way `GeneratorConfig::validate` does.
    pub fn generate_with(
        bounds: Region,
        min_room_size: i32,
        orientation: SplitOrientation,
        max_relocation_attempts: u32,
        rng: &mut DungeonRng,
    ) -> Result<Self> {
        GeneratorConfig {
            width: bounds.width,
            height: bounds.height,
            min_room_size,
            seed: Some(rng.seed()),
            initial_orientation: orientation,
            max_relocation_attempts,
        }
        .validate()?;

        let mut dungeon = Self::new(bounds, min_room_size, rng.seed(), orientation);

        dungeon.leaves = partition(&mut dungeon, rng)?;
        dungeon.blacklist = dungeon
            .leaves
            .iter()
            .flat_map(|id| dungeon.rooms[id.index()].region.corners())
            .collect();
        dungeon.relocated_doors =
            resolve_conflicts(&mut dungeon, max_relocation_attempts, rng)?;
        classify_rooms(&mut dungeon);

        info!(
            seed = dungeon.seed,
            bounds = %dungeon.bounds,
            rooms = dungeon.room_count(),
            doors = dungeon.door_count(),
            relocated = dungeon.relocated_doors,
            "generated dungeon"
        );
        Ok(dungeon)
    }

    pub(crate) fn push_room(
        &mut self,
        region: Region,
        orientation: SplitOrientation,
        parent: Option<RoomId>,
    ) -> Result<RoomId> {
        let id = RoomId(next_id(self.rooms.len(), "rooms")?);
        self.rooms.push(Room::new(id, region, orientation, parent));
        Ok(id)
    }

    pub(crate) fn push_door(
        &mut self,
        location: Point,
        room_a: RoomId,
        room_b: RoomId,
        axis: SplitOrientation,
    ) -> Result<DoorId> {
        let id = DoorId(next_id(self.doors.len(), "doors")?);
        self.doors.push(Door {
            id,
            location,
            room_a,
            room_b,
            axis,
        });
        Ok(id)
    }

    /// Seed of the RNG this dungeon was generated with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The partitioned region
    pub fn bounds(&self) -> Region {
        self.bounds
    }

    pub fn min_room_size(&self) -> i32 {
        self.min_room_size
    }

    /// The room covering the whole region, before any split
    pub fn root(&self) -> &Room {
        &self.rooms[RoomId::ROOT.index()]
    }

    /// Look up any room, split or not
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.index())
    }

    /// Finished (leaf) rooms in id order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.leaves.iter().map(|id| &self.rooms[id.index()])
    }

    /// Every room in the partition tree, including split ones
    pub fn all_rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Number of finished rooms
    pub fn room_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Number of successful splits
    pub fn split_count(&self) -> usize {
        self.rooms.iter().filter(|room| !room.is_leaf()).count()
    }

    /// Corners of every finished room
    pub fn blacklisted_points(&self) -> &BTreeSet<Point> {
        &self.blacklist
    }

    /// Number of doors moved off a room corner
    pub fn relocated_doors(&self) -> usize {
        self.relocated_doors
    }

    /// A finished room containing the point, lowest id first
    ///
    /// Wall cells belong to more than one room.
    pub fn room_at(&self, point: Point) -> Option<&Room> {
        self.rooms().find(|room| room.region.contains(point))
    }

    /// Doors on a room's outline
    pub fn doors_of(&self, room: RoomId) -> impl Iterator<Item = &Door> + '_ {
        self.room(room)
            .into_iter()
            .flat_map(|room| room.doors.iter())
            .filter_map(|id| self.door(*id))
    }

    /// Rooms reached through doors bound to this room
    pub fn neighbours(&self, room: RoomId) -> Vec<RoomId> {
        let found: BTreeSet<RoomId> = self
            .doors
            .iter()
            .filter_map(|door| door.other(room))
            .collect();
        found.into_iter().collect()
    }

    pub fn stats(&self) -> DungeonStats {
        let mut classes: BTreeMap<RoomClass, usize> =
            RoomClass::iter().map(|class| (class, 0)).collect();
        for class in self.rooms().filter_map(|room| room.class) {
            *classes.entry(class).or_insert(0) += 1;
        }
        DungeonStats {
            rooms: self.room_count(),
            doors: self.door_count(),
            splits: self.split_count(),
            relocated_doors: self.relocated_doors,
            classes,
        }
    }
}

/// Id for the next entry of an arena holding `len` entries
fn next_id(len: usize, kind: &'static str) -> Result<u32> {
    u32::try_from(len).map_err(|_| GenerationError::IdSpaceExhausted { kind })
}

/// Generate a dungeon over `region` with a fixed seed
pub fn generate(region: Region, min_room_size: i32, seed: u64) -> Result<Dungeon> {
    let defaults = GeneratorConfig::default();
    Dungeon::generate_with(
        region,
        min_room_size,
        defaults.initial_orientation,
        defaults.max_relocation_attempts,
        &mut DungeonRng::new(seed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dungeon_has_root_only() {
        let dungeon = Dungeon::new(
            Region::new(0, 0, 40, 30),
            5,
            1,
            SplitOrientation::Widthwise,
        );
        assert_eq!(dungeon.room_count(), 1);
        assert_eq!(dungeon.door_count(), 0);
        assert_eq!(dungeon.split_count(), 0);
        assert_eq!(dungeon.root().region, Region::new(0, 0, 40, 30));
    }

    #[test]
    fn test_generate_with_rejects_tiny_minimum() {
        let mut rng = DungeonRng::new(1);
        let result = Dungeon::generate_with(
            Region::new(0, 0, 8, 8),
            1,
            SplitOrientation::Widthwise,
            1000,
            &mut rng,
        );
        assert_eq!(
            result.err(),
            Some(GenerationError::MinimumRoomSizeTooSmall {
                min_room_size: 1,
                floor: crate::config::MIN_ROOM_SIZE_FLOOR,
            })
        );
    }

    #[test]
    fn test_generate_with_rejects_empty_region_and_budget() {
        let mut rng = DungeonRng::new(1);
        assert_eq!(
            Dungeon::generate_with(
                Region::new(0, 0, 0, 8),
                5,
                SplitOrientation::Widthwise,
                1000,
                &mut rng,
            )
            .err(),
            Some(GenerationError::EmptyRegion {
                width: 0,
                height: 8
            })
        );
        assert_eq!(
            Dungeon::generate_with(
                Region::new(0, 0, 20, 20),
                5,
                SplitOrientation::Widthwise,
                0,
                &mut rng,
            )
            .err(),
            Some(GenerationError::ZeroRelocationBudget)
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_next_id_refuses_to_truncate() {
        assert_eq!(next_id(0, "rooms"), Ok(0));
        assert_eq!(next_id(u32::MAX as usize, "rooms"), Ok(u32::MAX));
        assert_eq!(
            next_id(u32::MAX as usize + 1, "doors"),
            Err(GenerationError::IdSpaceExhausted { kind: "doors" })
        );
    }

    #[test]
    fn test_generate_counts() {
        let dungeon = generate(Region::new(0, 0, 40, 30), 5, 1234).expect("valid parameters");
        assert_eq!(dungeon.door_count(), dungeon.room_count() - 1);
        assert_eq!(dungeon.split_count(), dungeon.door_count());
        assert_eq!(dungeon.all_rooms().len(), 2 * dungeon.split_count() + 1);
        assert_eq!(dungeon.seed(), 1234);
    }

    #[test]
    fn test_leaves_are_in_id_order() {
        let dungeon = generate(Region::new(0, 0, 50, 50), 5, 8).expect("valid parameters");
        let ids: Vec<_> = dungeon.rooms().map(|room| room.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(dungeon.rooms().all(Room::is_leaf));
    }

    #[test]
    fn test_room_at_finds_leaf() {
        let dungeon = generate(Region::new(0, 0, 40, 30), 5, 55).expect("valid parameters");
        let room = dungeon.room_at(Point::new(20, 15)).expect("inside bounds");
        assert!(room.is_leaf());
        assert!(room.region.contains(Point::new(20, 15)));
        assert!(dungeon.room_at(Point::new(40, 15)).is_none());
    }

    #[test]
    fn test_neighbours_follow_doors() {
        let dungeon = generate(Region::new(0, 0, 40, 30), 5, 99).expect("valid parameters");
        let door = &dungeon.doors()[0];
        assert!(dungeon.neighbours(door.room_a).contains(&door.room_b));
        assert!(dungeon.neighbours(door.room_b).contains(&door.room_a));
    }

    #[test]
    fn test_doors_of_matches_membership() {
        let dungeon = generate(Region::new(0, 0, 40, 30), 5, 3).expect("valid parameters");
        for room in dungeon.rooms() {
            let ids: Vec<_> = dungeon.doors_of(room.id).map(|door| door.id).collect();
            assert_eq!(ids, room.doors.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_stats_histogram_covers_every_room() {
        let dungeon = generate(Region::new(0, 0, 60, 40), 5, 17).expect("valid parameters");
        let stats = dungeon.stats();
        assert_eq!(stats.classes.len(), 4);
        assert_eq!(stats.classes.values().sum::<usize>(), stats.rooms);
        assert_eq!(stats.splits, stats.doors);
    }
}
