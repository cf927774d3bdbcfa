//! Synthetic map generation
//!
//! Builds random but reproducible maps with rectangular regions and scattered
//! events, for trying commands without an editor project at hand.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::map::{EventId, GameMap, MapEvent, TileCode, TILE_LAYER_COUNT};

/// First code of the ground autotile block
const GROUND_BASE: TileCode = 2816;

/// First code of the decoration tile block
const DECOR_BASE: TileCode = 256;

/// Parameters for synthetic maps
#[derive(Clone, Debug)]
pub struct SyntheticParams {
    pub width: usize,
    pub height: usize,
    /// Number of regions to carve (ids 1..=region_count)
    pub region_count: u8,
    /// Number of events to place
    pub event_count: u32,
    /// Chance that a cell gets a decoration on layer 2
    pub decoration_chance: f64,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        Self {
            width: 24,
            height: 12,
            region_count: 4,
            event_count: 6,
            decoration_chance: 0.15,
        }
    }
}

/// Generate a map. The same parameters and seed always give the same map.
pub fn generate_map(params: &SyntheticParams, seed: u64) -> GameMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (width, height) = (params.width, params.height);
    let mut map = GameMap::new(0, width, height, TILE_LAYER_COUNT);

    if width == 0 || height == 0 {
        return map;
    }

    // Ground everywhere, scattered decorations on top
    for y in 0..height {
        for x in 0..width {
            let ground = GROUND_BASE + rng.gen_range(0..48) * 48;
            let mut codes = vec![ground, 0, 0];
            if rng.gen_bool(params.decoration_chance) {
                codes[2] = DECOR_BASE + rng.gen_range(0..256);
            }
            map.set_cell(x, y, &codes);
        }
    }

    // Later regions overwrite earlier ones where rectangles overlap
    for region in 1..=params.region_count {
        let w = rng.gen_range(1..=(width / 3).max(1));
        let h = rng.gen_range(1..=(height / 3).max(1));
        let x0 = rng.gen_range(0..=width - w);
        let y0 = rng.gen_range(0..=height - h);
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                map.set_region(x, y, region);
            }
        }
    }

    for id in 1..=params.event_count {
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        map.add_event(MapEvent::new(EventId(id), format!("EV{:03}", id), x, y));
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileStore;

    #[test]
    fn test_deterministic() {
        let params = SyntheticParams::default();
        let a = generate_map(&params, 42);
        let b = generate_map(&params, 42);
        assert_eq!(a.data(), b.data());
        assert_eq!(a.regions(), b.regions());
        assert_eq!(a.events(), b.events());
    }

    #[test]
    fn test_every_region_is_placed() {
        let params = SyntheticParams {
            region_count: 3,
            ..SyntheticParams::default()
        };
        let map = generate_map(&params, 7);
        let tags: std::collections::BTreeSet<u8> =
            map.regions().iter().map(|(_, _, &t)| t).filter(|&t| t != 0).collect();
        // The last region is never overwritten
        assert!(tags.contains(&3));
        assert!(tags.iter().all(|&t| (1..=3).contains(&t)));
    }

    #[test]
    fn test_no_blank_cells() {
        let map = generate_map(&SyntheticParams::default(), 1);
        for y in 0..map.height() {
            for x in 0..map.width() {
                assert!(!map.is_blank(x, y));
            }
        }
        assert_eq!(map.events().len(), 6);
    }

    #[test]
    fn test_empty_size() {
        let params = SyntheticParams {
            width: 0,
            height: 0,
            ..SyntheticParams::default()
        };
        let map = generate_map(&params, 3);
        assert_eq!(map.width(), 0);
        assert!(map.events().is_empty());
    }
}
