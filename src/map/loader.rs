//! Editor map file loading.
//!
//! Map files are JSON objects with `width`, `height`, a flat `data` array and a
//! sparse `events` array. `data` holds [`MAP_PLANES`] planes of
//! `width * height` values each: the tile layers first, then the shadow plane,
//! then the region plane.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::event::MapEvent;
use super::game_map::{GameMap, TILE_LAYER_COUNT};
use super::store::{EventId, TileCode};
use crate::error::MapLoadError;
use crate::tilemap::Tilemap;

/// Planes stored per cell in a map file.
pub const MAP_PLANES: usize = TILE_LAYER_COUNT + 2;

/// Plane holding shadow bits.
pub const SHADOW_PLANE: usize = TILE_LAYER_COUNT;

/// Plane holding region tags.
pub const REGION_PLANE: usize = TILE_LAYER_COUNT + 1;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapFile {
    width: usize,
    height: usize,
    data: Vec<u32>,
    /// Index 0 is always null; deleted events leave null holes.
    #[serde(default)]
    events: Vec<Option<EventFile>>,
}

#[derive(Deserialize)]
struct EventFile {
    id: u32,
    #[serde(default)]
    name: String,
    x: usize,
    y: usize,
}

/// Load a map file from disk.
pub fn load_map(path: &Path, map_id: u32) -> Result<GameMap, MapLoadError> {
    let json = fs::read_to_string(path).map_err(|source| MapLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&json, map_id)
}

/// Parse map JSON into a [`GameMap`].
pub fn parse_map(json: &str, map_id: u32) -> Result<GameMap, MapLoadError> {
    let file: MapFile = serde_json::from_str(json)?;
    let (width, height) = (file.width, file.height);
    let plane_size = width
        .checked_mul(height)
        .ok_or(MapLoadError::Dimensions { width, height })?;
    let expected = plane_size
        .checked_mul(MAP_PLANES)
        .ok_or(MapLoadError::Dimensions { width, height })?;
    if file.data.len() != expected {
        return Err(MapLoadError::DataLength {
            expected,
            actual: file.data.len(),
            width,
            height,
            planes: MAP_PLANES,
        });
    }

    let tile_span = plane_size * TILE_LAYER_COUNT;
    let mut tiles = Vec::with_capacity(tile_span);
    for (i, &code) in file.data[..tile_span].iter().enumerate() {
        let code = TileCode::try_from(code).map_err(|_| MapLoadError::TileCode {
            code,
            plane: i / plane_size.max(1),
        })?;
        tiles.push(code);
    }

    let shadows = read_byte_plane(&file.data, SHADOW_PLANE, width, height)?;
    let regions = read_byte_plane(&file.data, REGION_PLANE, width, height)?;

    let mut events = Vec::new();
    for event in file.events.into_iter().flatten() {
        if event.x >= width || event.y >= height {
            return Err(MapLoadError::EventOutOfBounds {
                id: event.id,
                x: event.x,
                y: event.y,
                width,
                height,
            });
        }
        events.push(MapEvent::new(EventId(event.id), event.name, event.x, event.y));
    }

    debug!(
        map_id,
        width,
        height,
        events = events.len(),
        "map parsed"
    );

    Ok(GameMap::from_parts(
        map_id,
        TILE_LAYER_COUNT,
        tiles,
        shadows,
        regions,
        events,
    ))
}

fn read_byte_plane(
    data: &[u32],
    plane: usize,
    width: usize,
    height: usize,
) -> Result<Tilemap<u8>, MapLoadError> {
    let plane_size = width * height;
    let start = plane * plane_size;
    let values = data[start..start + plane_size]
        .iter()
        .map(|&v| {
            u8::try_from(v).map_err(|_| MapLoadError::PlaneValue { code: v, plane })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    // Length is guaranteed by the caller's data length check.
    Ok(Tilemap::from_vec(width, height, values).unwrap_or_else(|| Tilemap::new(width, height)))
}

/// Extract the map id from an editor file name such as `Map012.json`.
pub fn map_id_from_path(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("Map")?.parse().ok()
}
