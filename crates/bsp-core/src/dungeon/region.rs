//! Integer points and axis-aligned rectangles
//!
//! A region covers the cells `x..=x + width - 1` by `y..=y + height - 1`.
//! Sibling rooms share their wall cells, so two regions produced by one split
//! overlap by exactly one column or row.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Create a new region
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of cells covered
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Last column covered
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Last row covered
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Top-left, top-right, bottom-left and bottom-right cells
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.x, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Center cell, rounded toward the top-left
    pub fn center(&self) -> Point {
        Point::new(self.x + (self.width - 1) / 2, self.y + (self.height - 1) / 2)
    }

    /// Check if a point lies inside this region, edges included
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Check if a point lies on the outline of this region
    pub fn is_on_edge(&self, p: Point) -> bool {
        self.contains(p)
            && (p.x == self.x || p.x == self.right() || p.y == self.y || p.y == self.bottom())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
