//! Region reveal library
//!
//! Hides and shows parts of a tile map by region tag. Re-exports modules for
//! use by the command line host and by embedding games.

pub mod ascii;
pub mod commands;
pub mod config;
pub mod error;
pub mod map;
pub mod region;
pub mod synthetic;
pub mod tilemap;

pub use commands::PluginCommand;
pub use config::RevealParams;
pub use map::{GameMap, TileStore};
pub use region::{RegionChange, RegionId, RegionReveal};
