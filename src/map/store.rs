//! The narrow contract between region logic and whatever owns the map.

use serde::{Deserialize, Serialize};

/// A tile code as stored in a map layer.
pub type TileCode = u16;

/// Reserved tile code meaning "nothing drawn on this layer".
pub const EMPTY_TILE: TileCode = 0;

/// Identifier of an event placed on the map. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u32);

/// Read/write access to a layered tile map and the events standing on it.
///
/// Layer `z = 0` is the deepest layer; higher layers are drawn on top.
pub trait TileStore {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Number of tile layers per cell.
    fn layer_count(&self) -> usize;

    /// Region tag of a cell. 0 means the cell belongs to no region.
    fn region_at(&self, x: usize, y: usize) -> u8;

    fn layer_code(&self, x: usize, y: usize, z: usize) -> TileCode;

    fn set_layer_code(&mut self, x: usize, y: usize, z: usize, code: TileCode);

    /// The event standing on a cell, if any.
    fn event_at(&self, x: usize, y: usize) -> Option<EventId>;

    /// Toggle whether an event is drawn. The event keeps its identity,
    /// position and running state.
    fn set_event_transparent(&mut self, id: EventId, transparent: bool);

    /// All tile codes of a cell, listed the way the renderer stacks them:
    /// topmost layer first.
    fn layered_codes(&self, x: usize, y: usize) -> Vec<TileCode> {
        (0..self.layer_count())
            .rev()
            .map(|z| self.layer_code(x, y, z))
            .collect()
    }
}
