//! Core types shared by the region index and the visibility controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::map::TileCode;

/// A region tag. Tag 0 marks cells outside every region; commands accept 1-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u8);

impl RegionId {
    /// Smallest region id a command may target.
    pub const MIN: u8 = 1;
    /// Largest region id a command may target.
    pub const MAX: u8 = 255;

    /// Validate a command argument.
    pub fn new(value: i64) -> Result<Self, CommandError> {
        if value < Self::MIN as i64 || value > Self::MAX as i64 {
            return Err(CommandError::RegionOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Snapshot of one tagged cell, taken when the index is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileRecord {
    pub x: usize,
    pub y: usize,
    /// Tile codes indexed by depth: `layers[z]` is the code that was on layer `z`.
    ///
    /// The store lists a cell topmost-first; this is that listing reversed.
    pub layers: Vec<TileCode>,
}

impl TileRecord {
    /// Build a record from the store's topmost-first listing of the cell.
    pub fn capture(x: usize, y: usize, mut layered: Vec<TileCode>) -> Self {
        layered.reverse();
        Self { x, y, layers: layered }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_id_bounds() {
        assert_eq!(RegionId::new(1), Ok(RegionId(1)));
        assert_eq!(RegionId::new(255), Ok(RegionId(255)));
        assert_eq!(RegionId::new(0), Err(CommandError::RegionOutOfRange(0)));
        assert_eq!(RegionId::new(256), Err(CommandError::RegionOutOfRange(256)));
        assert_eq!(RegionId::new(-3), Err(CommandError::RegionOutOfRange(-3)));
    }

    #[test]
    fn test_capture_reverses_listing() {
        let record = TileRecord::capture(1, 1, vec![7, 3]);
        assert_eq!(record.layers, vec![3, 7]);
    }
}
