//! Region visibility system.
//!
//! Cells carry a region tag (1-255, 0 = none). The [`RegionIndex`] groups tagged
//! cells by region the first time a region is hidden or shown, snapshotting each
//! cell's tile codes. The [`VisibilityController`] blanks or restores those cells
//! and flips the transparency of any event standing on them. [`RegionReveal`]
//! is the session object a host keeps around and feeds commands to.
//!
//! # Example
//!
//! ```ignore
//! use region_reveal::region::{RegionId, RegionReveal};
//!
//! let mut reveal = RegionReveal::default();
//! reveal.on_map_loaded(map.map_id);
//! reveal.hide(&mut map, RegionId(3));
//! reveal.show(&mut map, RegionId(3));
//! ```

mod controller;
mod index;
mod reveal;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{RegionChange, VisibilityController};
pub use index::RegionIndex;
pub use reveal::RegionReveal;
pub use types::{RegionId, TileRecord};
