//! Text rendering of a generated dungeon
//!
//! Room outlines are drawn with `#`, doors with `+`, floors with `.` and a
//! class glyph at each room's centre.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use bsp_core::dungeon::{Dungeon, RoomClass};

const WALL: char = '#';
const DOOR: char = '+';
const FLOOR: char = '.';

/// Glyph marking a room's connectivity class
pub fn class_glyph(class: RoomClass) -> char {
    match class {
        RoomClass::Isolated => 'o',
        RoomClass::DeadEnd => 'd',
        RoomClass::Corridor => 'c',
        RoomClass::Junction => 'j',
    }
}

/// Draw the dungeon as one line per row
pub fn render(dungeon: &Dungeon) -> String {
    let bounds = dungeon.bounds();
    let width = bounds.width.max(0) as usize;
    let height = bounds.height.max(0) as usize;
    let mut grid = vec![vec![FLOOR; width]; height];

    let mut put = |x: i32, y: i32, glyph: char| {
        let (col, row) = ((x - bounds.x) as usize, (y - bounds.y) as usize);
        if let Some(cell) = grid.get_mut(row).and_then(|line| line.get_mut(col)) {
            *cell = glyph;
        }
    };

    for room in dungeon.rooms() {
        let r = room.region;
        for x in r.x..=r.right() {
            put(x, r.y, WALL);
            put(x, r.bottom(), WALL);
        }
        for y in r.y..=r.bottom() {
            put(r.x, y, WALL);
            put(r.right(), y, WALL);
        }
        if let Some(class) = room.class
            && r.width > 2
            && r.height > 2
        {
            let c = r.center();
            put(c.x, c.y, class_glyph(class));
        }
    }

    for door in dungeon.doors() {
        put(door.location.x, door.location.y, DOOR);
    }

    let mut out = String::with_capacity((width + 1) * height);
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

/// Totals and class histogram, one item per line
pub fn summary(dungeon: &Dungeon) -> String {
    let stats = dungeon.stats();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "seed {}: {} rooms, {} doors ({} moved off corners)",
        dungeon.seed(),
        stats.rooms,
        stats.doors,
        stats.relocated_doors
    );
    for class in RoomClass::iter() {
        let count = stats.classes.get(&class).copied().unwrap_or(0);
        let _ = writeln!(out, "  {} {:<9} {}", class_glyph(class), class, count);
    }
    out
}

/// One line per finished room
pub fn room_list(dungeon: &Dungeon) -> String {
    let mut out = String::new();
    for room in dungeon.rooms() {
        let doors: Vec<String> = room.doors.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "{room} doors: {}", doors.join(" "));
    }
    out
}
