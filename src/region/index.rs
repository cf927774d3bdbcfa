//! Region index: which cells belong to which region.
//!
//! Built once per map by scanning every cell. Cells tagged 0 are never indexed,
//! so they can never be hidden or shown.

use std::collections::BTreeMap;

use tracing::debug;

use super::types::{RegionId, TileRecord};
use crate::map::TileStore;

/// Region id -> tile snapshots in row-major discovery order.
#[derive(Clone, Debug, Default)]
pub struct RegionIndex {
    regions: BTreeMap<RegionId, Vec<TileRecord>>,
    built: bool,
}

impl RegionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the store and record every tagged cell.
    ///
    /// Any previous contents are discarded first. A map with no tagged cells
    /// (or zero size) leaves the index empty but still counts as built.
    pub fn build<S: TileStore + ?Sized>(&mut self, store: &S) {
        self.regions.clear();

        let width = store.width();
        let height = store.height();
        for y in 0..height {
            for x in 0..width {
                let tag = store.region_at(x, y);
                if tag == 0 {
                    continue;
                }
                self.regions
                    .entry(RegionId(tag))
                    .or_default()
                    .push(TileRecord::capture(x, y, store.layered_codes(x, y)));
            }
        }
        self.built = true;

        debug!(
            width,
            height,
            regions = self.region_count(),
            tiles = self.tile_count(),
            "region index built"
        );
    }

    /// Tiles of a region in discovery order, or `None` if no cell carries the tag.
    pub fn tiles(&self, region: RegionId) -> Option<&[TileRecord]> {
        self.regions.get(&region).map(Vec::as_slice)
    }

    pub fn contains(&self, region: RegionId) -> bool {
        self.regions.contains_key(&region)
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Total number of indexed cells across all regions.
    pub fn tile_count(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    /// Indexed regions in ascending id order with their tiles.
    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &[TileRecord])> {
        self.regions.iter().map(|(id, tiles)| (*id, tiles.as_slice()))
    }

    /// Forget everything; the next `ensure` will rescan.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.built = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{GameMap, TileStore};
    use crate::region::testing::{scenario_map, CountingStore};
    use proptest::prelude::*;

    #[test]
    fn test_scenario_record_is_reversed() {
        let map = scenario_map();
        let mut index = RegionIndex::new();
        index.build(&map);

        let tiles = index.tiles(RegionId(5)).unwrap();
        assert_eq!(
            tiles,
            &[TileRecord {
                x: 1,
                y: 1,
                layers: vec![3, 7]
            }]
        );
        assert_eq!(index.region_count(), 1);
        assert!(index.tiles(RegionId(9)).is_none());
    }

    #[test]
    fn test_discovery_order_is_row_major() {
        let mut map = GameMap::new(1, 3, 2, 1);
        map.set_region(2, 0, 4);
        map.set_region(0, 1, 4);
        map.set_region(1, 0, 4);

        let mut index = RegionIndex::new();
        index.build(&map);
        let coords: Vec<_> = index
            .tiles(RegionId(4))
            .unwrap()
            .iter()
            .map(|t| (t.x, t.y))
            .collect();
        assert_eq!(coords, vec![(1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_untagged_cells_are_skipped() {
        let mut map = GameMap::new(1, 2, 2, 2);
        map.set_cell(0, 0, &[1, 2]);
        map.set_cell(1, 1, &[3, 4]);
        map.set_region(1, 1, 2);

        let mut index = RegionIndex::new();
        index.build(&map);
        assert_eq!(index.tile_count(), 1);
        assert!(index.tiles(RegionId(0)).is_none());
        assert_eq!(index.tiles(RegionId(2)).unwrap()[0].layers, vec![3, 4]);
    }

    #[test]
    fn test_empty_map_builds_empty_index() {
        let map = GameMap::new(1, 0, 0, 4);
        let mut index = RegionIndex::new();
        index.build(&map);
        assert!(index.is_built());
        assert!(index.is_empty());
    }

    #[test]
    fn test_rebuild_does_not_duplicate() {
        let map = scenario_map();
        let mut index = RegionIndex::new();
        index.build(&map);
        index.build(&map);
        assert_eq!(index.tile_count(), 1);
    }

    #[test]
    fn test_build_reads_each_cell_once() {
        let mut map = scenario_map();
        let mut store = CountingStore::new(&mut map);
        let mut index = RegionIndex::new();
        index.build(&store);
        assert_eq!(store.region_reads(), 9);
        assert_eq!(store.writes(), 0);
        // The store is still usable after the scan
        store.set_layer_code(0, 0, 0, 1);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_clear_resets_built_flag() {
        let map = scenario_map();
        let mut index = RegionIndex::new();
        index.build(&map);
        index.clear();
        assert!(!index.is_built());
        assert!(index.is_empty());
    }

    fn arb_tags() -> impl Strategy<Value = (usize, usize, Vec<u8>)> {
        (0usize..12, 0usize..12).prop_flat_map(|(w, h)| {
            let tag = prop_oneof![3 => Just(0u8), 1 => 1u8..=6, 1 => any::<u8>()];
            (Just(w), Just(h), prop::collection::vec(tag, w * h))
        })
    }

    proptest! {
        #[test]
        fn every_tagged_cell_indexed_once((w, h, tags) in arb_tags()) {
            let mut map = GameMap::new(1, w, h, 2);
            for (i, &tag) in tags.iter().enumerate() {
                map.set_region(i % w, i / w, tag);
            }

            let mut index = RegionIndex::new();
            index.build(&map);

            let tagged = tags.iter().filter(|&&t| t != 0).count();
            prop_assert_eq!(index.tile_count(), tagged);

            for (region, tiles) in index.regions() {
                prop_assert!(region.get() >= 1);
                for tile in tiles {
                    prop_assert_eq!(map.region_at(tile.x, tile.y), region.get());
                    let hits = tiles.iter().filter(|t| t.x == tile.x && t.y == tile.y).count();
                    prop_assert_eq!(hits, 1);
                }
            }
        }
    }
}
