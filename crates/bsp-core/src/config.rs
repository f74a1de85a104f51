//! Generator configuration

use serde::{Deserialize, Serialize};

use crate::dungeon::{Region, SplitOrientation};
use crate::error::{GenerationError, Result};

/// Default region width
pub const DEFAULT_WIDTH: i32 = 40;

/// Default region height
pub const DEFAULT_HEIGHT: i32 = 30;

/// Default minimum width and height of a finished room
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 5;

/// Smallest supported minimum room size
///
/// Door candidates start two cells in from each end of a wall, so shorter
/// walls have no interior cell left.
pub const MIN_ROOM_SIZE_FLOOR: i32 = 4;

/// Default number of draws allowed when moving a door off a corner
pub const DEFAULT_MAX_RELOCATION_ATTEMPTS: u32 = 1000;

/// Parameters of one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: i32,
    pub height: i32,
    pub min_room_size: i32,
    /// Fixed seed; a random one is used when absent
    pub seed: Option<u64>,
    /// Orientation of the first split
    pub initial_orientation: SplitOrientation,
    pub max_relocation_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            seed: None,
            initial_orientation: SplitOrientation::Widthwise,
            max_relocation_attempts: DEFAULT_MAX_RELOCATION_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: i32, height: i32, min_room_size: i32) -> Self {
        Self {
            width,
            height,
            min_room_size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The region to partition, anchored at the origin
    pub fn region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    /// Check the parameters before generating
    ///
    /// A region smaller than `min_room_size` is accepted and simply never
    /// splits.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GenerationError::EmptyRegion {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_room_size < MIN_ROOM_SIZE_FLOOR {
            return Err(GenerationError::MinimumRoomSizeTooSmall {
                min_room_size: self.min_room_size,
                floor: MIN_ROOM_SIZE_FLOOR,
            });
        }
        if self.max_relocation_attempts == 0 {
            return Err(GenerationError::ZeroRelocationBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.region(), Region::new(0, 0, 40, 30));
    }

    #[test]
    fn test_rejects_empty_region() {
        let config = GeneratorConfig::new(0, 30, 5);
        assert_eq!(
            config.validate(),
            Err(GenerationError::EmptyRegion {
                width: 0,
                height: 30
            })
        );
        assert!(GeneratorConfig::new(10, -1, 5).validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_minimum() {
        let config = GeneratorConfig::new(40, 30, 3);
        assert_eq!(
            config.validate(),
            Err(GenerationError::MinimumRoomSizeTooSmall {
                min_room_size: 3,
                floor: MIN_ROOM_SIZE_FLOOR
            })
        );
        assert!(GeneratorConfig::new(40, 30, MIN_ROOM_SIZE_FLOOR).validate().is_ok());
    }

    #[test]
    fn test_small_region_is_valid() {
        assert!(GeneratorConfig::new(3, 3, 5).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_relocation_budget() {
        let config = GeneratorConfig {
            max_relocation_attempts: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.validate(), Err(GenerationError::ZeroRelocationBudget));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "width": 64, "seed": 7, "initial_orientation": "heightwise" }"#)
                .expect("valid config json");
        assert_eq!(config.width, 64);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.min_room_size, DEFAULT_MIN_ROOM_SIZE);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_orientation, SplitOrientation::Heightwise);
    }
}
