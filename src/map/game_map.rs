//! In-memory game map.
//!
//! Tile layers live in one flat buffer ordered layer-major: all of layer 0 in
//! row-major order, then all of layer 1, and so on. A cell's code at depth
//! `z` therefore sits at `z * width * height + y * width + x`.

use tracing::trace;

use super::event::MapEvent;
use super::store::{EventId, TileCode, TileStore, EMPTY_TILE};
use crate::tilemap::Tilemap;

/// Number of tile layers in an editor-authored map.
pub const TILE_LAYER_COUNT: usize = 4;

/// A loaded map: layered tile codes, shadow and region planes, and events.
#[derive(Clone, Debug)]
pub struct GameMap {
    /// Identifier of the map this data was loaded from
    pub map_id: u32,
    width: usize,
    height: usize,
    layer_count: usize,
    /// Tile codes, layer-major
    data: Vec<TileCode>,
    /// Shadow bits per cell
    shadows: Tilemap<u8>,
    /// Region tag per cell (0 = none)
    regions: Tilemap<u8>,
    /// Events sorted by id
    events: Vec<MapEvent>,
}

impl GameMap {
    /// Create a blank map with every layer empty and no regions.
    pub fn new(map_id: u32, width: usize, height: usize, layer_count: usize) -> Self {
        Self {
            map_id,
            width,
            height,
            layer_count,
            data: vec![EMPTY_TILE; width * height * layer_count],
            shadows: Tilemap::new(width, height),
            regions: Tilemap::new(width, height),
            events: Vec::new(),
        }
    }

    /// Assemble a map from already-split planes.
    ///
    /// `data` must hold `width * height * layer_count` codes in layer-major order.
    pub(crate) fn from_parts(
        map_id: u32,
        layer_count: usize,
        data: Vec<TileCode>,
        shadows: Tilemap<u8>,
        regions: Tilemap<u8>,
        mut events: Vec<MapEvent>,
    ) -> Self {
        debug_assert_eq!(data.len(), regions.width * regions.height * layer_count);
        events.sort_by_key(|e| e.id);
        Self {
            map_id,
            width: regions.width,
            height: regions.height,
            layer_count,
            data,
            shadows,
            regions,
            events,
        }
    }

    /// Flat storage offset of `(x, y, z)`.
    pub fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.layer_count);
        z * self.width * self.height + y * self.width + x
    }

    /// The raw layer-major tile buffer.
    pub fn data(&self) -> &[TileCode] {
        &self.data
    }

    pub fn regions(&self) -> &Tilemap<u8> {
        &self.regions
    }

    pub fn set_region(&mut self, x: usize, y: usize, region: u8) {
        self.regions.set(x, y, region);
    }

    pub fn shadows(&self) -> &Tilemap<u8> {
        &self.shadows
    }

    pub fn set_shadow(&mut self, x: usize, y: usize, bits: u8) {
        self.shadows.set(x, y, bits);
    }

    /// Set every layer of a cell from a bottom-up list of codes.
    /// Layers beyond the list are cleared.
    pub fn set_cell(&mut self, x: usize, y: usize, codes: &[TileCode]) {
        for z in 0..self.layer_count {
            let code = codes.get(z).copied().unwrap_or(EMPTY_TILE);
            self.set_layer_code(x, y, z, code);
        }
    }

    /// True when nothing is drawn on any layer of the cell.
    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        (0..self.layer_count).all(|z| self.layer_code(x, y, z) == EMPTY_TILE)
    }

    /// Place an event. An event with the same id is replaced.
    pub fn add_event(&mut self, event: MapEvent) {
        match self.events.binary_search_by_key(&event.id, |e| e.id) {
            Ok(pos) => self.events[pos] = event,
            Err(pos) => self.events.insert(pos, event),
        }
    }

    pub fn event(&self, id: EventId) -> Option<&MapEvent> {
        self.events
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|pos| &self.events[pos])
    }

    pub fn events(&self) -> &[MapEvent] {
        &self.events
    }
}

impl TileStore for GameMap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn layer_count(&self) -> usize {
        self.layer_count
    }

    fn region_at(&self, x: usize, y: usize) -> u8 {
        self.regions.try_get(x, y).copied().unwrap_or(0)
    }

    fn layer_code(&self, x: usize, y: usize, z: usize) -> TileCode {
        self.data[self.offset(x, y, z)]
    }

    fn set_layer_code(&mut self, x: usize, y: usize, z: usize, code: TileCode) {
        let idx = self.offset(x, y, z);
        self.data[idx] = code;
    }

    fn event_at(&self, x: usize, y: usize) -> Option<EventId> {
        // Lowest id wins when several events share a cell.
        self.events.iter().find(|e| e.is_at(x, y)).map(|e| e.id)
    }

    fn set_event_transparent(&mut self, id: EventId, transparent: bool) {
        match self.events.binary_search_by_key(&id, |e| e.id) {
            Ok(pos) => self.events[pos].transparent = transparent,
            Err(_) => trace!(event = id.0, "transparency change for missing event ignored"),
        }
    }
}
