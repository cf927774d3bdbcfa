//! Map tile storage.
//!
//! The region core only talks to maps through the [`TileStore`] trait. [`GameMap`]
//! is the in-memory implementation used by the command line host and the tests;
//! it keeps tile layers in the same flat, layer-major buffer the editor saves.
//!
//! # Example
//!
//! ```ignore
//! use region_reveal::map::{load_map, TileStore};
//!
//! let map = load_map(Path::new("data/Map001.json"), 1)?;
//! println!("{}x{} with {} layers", map.width(), map.height(), map.layer_count());
//! ```

mod event;
mod game_map;
mod loader;
mod store;

pub use event::MapEvent;
pub use game_map::{GameMap, TILE_LAYER_COUNT};
pub use loader::{load_map, map_id_from_path, parse_map, MAP_PLANES, REGION_PLANE, SHADOW_PLANE};
pub use store::{EventId, TileCode, TileStore, EMPTY_TILE};
