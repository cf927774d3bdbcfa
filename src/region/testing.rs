//! Shared fixtures for region tests.

use std::cell::Cell;

use crate::map::{EventId, GameMap, MapEvent, TileCode, TileStore};

/// 3x3 map: cell (1, 1) is region 5 with codes 3 (layer 0) and 7 (layer 1),
/// so the store lists it topmost-first as `[7, 3]`. Event 2 stands on it.
/// Every other cell holds code 1 on layer 0 and no region.
pub fn scenario_map() -> GameMap {
    let mut map = GameMap::new(1, 3, 3, 2);
    for y in 0..3 {
        for x in 0..3 {
            map.set_cell(x, y, &[1]);
        }
    }
    map.set_cell(1, 1, &[3, 7]);
    map.set_region(1, 1, 5);
    map.add_event(MapEvent::new(EventId(2), "Statue", 1, 1));
    map
}

/// Store wrapper that counts region reads and writes.
pub struct CountingStore<'a> {
    inner: &'a mut GameMap,
    region_reads: Cell<usize>,
    writes: usize,
}

impl<'a> CountingStore<'a> {
    pub fn new(inner: &'a mut GameMap) -> Self {
        Self {
            inner,
            region_reads: Cell::new(0),
            writes: 0,
        }
    }

    pub fn region_reads(&self) -> usize {
        self.region_reads.get()
    }

    /// Tile and event writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TileStore for CountingStore<'_> {
    fn width(&self) -> usize {
        self.inner.width()
    }

    fn height(&self) -> usize {
        self.inner.height()
    }

    fn layer_count(&self) -> usize {
        self.inner.layer_count()
    }

    fn region_at(&self, x: usize, y: usize) -> u8 {
        self.region_reads.set(self.region_reads.get() + 1);
        self.inner.region_at(x, y)
    }

    fn layer_code(&self, x: usize, y: usize, z: usize) -> TileCode {
        self.inner.layer_code(x, y, z)
    }

    fn set_layer_code(&mut self, x: usize, y: usize, z: usize, code: TileCode) {
        self.writes += 1;
        self.inner.set_layer_code(x, y, z, code);
    }

    fn event_at(&self, x: usize, y: usize) -> Option<EventId> {
        self.inner.event_at(x, y)
    }

    fn set_event_transparent(&mut self, id: EventId, transparent: bool) {
        self.writes += 1;
        self.inner.set_event_transparent(id, transparent);
    }
}
