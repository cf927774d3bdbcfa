//! ASCII rendering and export module for game maps
//!
//! Provides functions to render a map's visible state as ASCII text and export
//! it to a file, so hide/show results can be checked without a renderer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::map::{GameMap, TileStore};
use crate::region::RegionId;

/// Get ASCII character for a region tag
pub fn region_char(tag: u8) -> char {
    match tag {
        0 => '.',
        1..=9 => (b'0' + tag) as char,
        10..=35 => (b'a' + tag - 10) as char,
        _ => '+',
    }
}

/// Character for one cell: events first, then blank cells, then the region tag.
pub fn cell_char(map: &GameMap, x: usize, y: usize) -> char {
    if let Some(id) = map.event_at(x, y) {
        let transparent = map.event(id).map_or(false, |e| e.transparent);
        return if transparent { 'o' } else { '@' };
    }
    if map.is_blank(x, y) {
        return ' ';
    }
    region_char(map.region_at(x, y))
}

/// Render a map to ASCII string
pub fn render_map(map: &GameMap) -> String {
    let width = map.width();
    let height = map.height();
    let mut result = String::with_capacity((width + 1) * height);

    for y in 0..height {
        for x in 0..width {
            result.push(cell_char(map, x, y));
        }
        result.push('\n');
    }

    result
}

/// Generate legend for map characters
pub fn map_legend() -> String {
    "=== LEGEND ===\n\
     . untagged tile   1-9 a-z region tag   + region 36+\n\
     (space) hidden/blank cell   @ event   o transparent event\n"
        .to_string()
}

/// Per-region statistics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegionStats {
    /// Cells carrying the tag
    pub tiles: usize,
    /// Tagged cells with nothing drawn on any layer
    pub blank: usize,
    /// Events standing in the region
    pub events: usize,
}

/// Calculate region statistics from the map's region plane
pub fn calculate_region_stats(map: &GameMap) -> BTreeMap<RegionId, RegionStats> {
    let mut stats: BTreeMap<RegionId, RegionStats> = BTreeMap::new();
    for (x, y, &tag) in map.regions().iter() {
        if tag == 0 {
            continue;
        }
        let entry = stats.entry(RegionId(tag)).or_default();
        entry.tiles += 1;
        if map.is_blank(x, y) {
            entry.blank += 1;
        }
        if map.event_at(x, y).is_some() {
            entry.events += 1;
        }
    }
    stats
}

/// Export map state to ASCII file
pub fn export_map_file(map: &GameMap, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;

    // Header
    writeln!(file, "=== REGION REVEAL MAP FILE ===")?;
    writeln!(file, "Map: {}", map.map_id)?;
    writeln!(file, "Size: {}x{} ({} layers)", map.width(), map.height(), map.layer_count())?;
    writeln!(file, "Events: {}", map.events().len())?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_map(map))?;
    writeln!(file)?;

    write!(file, "{}", map_legend())?;
    writeln!(file)?;

    writeln!(file, "=== REGIONS ===")?;
    writeln!(file, "{:>6} {:>6} {:>6} {:>6}", "region", "tiles", "blank", "events")?;
    for (region, s) in calculate_region_stats(map) {
        writeln!(file, "{:>6} {:>6} {:>6} {:>6}", region, s.tiles, s.blank, s.events)?;
    }

    Ok(())
}

/// Print ASCII map to stdout
pub fn print_map(map: &GameMap) {
    print!("{}", render_map(map));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{EventId, MapEvent};

    fn small_map() -> GameMap {
        let mut map = GameMap::new(1, 3, 2, 2);
        for y in 0..2 {
            for x in 0..3 {
                map.set_cell(x, y, &[1]);
            }
        }
        map.set_region(1, 0, 4);
        map.set_region(2, 0, 12);
        map.set_cell(0, 1, &[]);
        map.add_event(MapEvent::new(EventId(1), "Door", 2, 1));
        map
    }

    #[test]
    fn test_region_chars() {
        assert_eq!(region_char(0), '.');
        assert_eq!(region_char(4), '4');
        assert_eq!(region_char(10), 'a');
        assert_eq!(region_char(35), 'z');
        assert_eq!(region_char(200), '+');
    }

    #[test]
    fn test_render_map() {
        let mut map = small_map();
        assert_eq!(render_map(&map), ".4c\n .@\n");

        map.set_event_transparent(EventId(1), true);
        assert_eq!(render_map(&map), ".4c\n .o\n");
    }

    #[test]
    fn test_region_stats() {
        let mut map = small_map();
        map.set_cell(1, 0, &[]);
        let stats = calculate_region_stats(&map);
        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[&RegionId(4)],
            RegionStats {
                tiles: 1,
                blank: 1,
                events: 0
            }
        );
        assert_eq!(stats[&RegionId(12)].blank, 0);
    }
}
