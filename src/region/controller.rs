//! Hide/show mutation of a region's tiles and events.
//!
//! Both directions are unconditional overwrites: hiding an already hidden
//! region blanks blank cells again, showing a visible one rewrites the same
//! codes. Nothing here tracks the current state.

use tracing::{debug, info};

use super::index::RegionIndex;
use super::types::RegionId;
use crate::config::RevealParams;
use crate::map::{TileCode, TileStore, EMPTY_TILE};

/// Outcome of a visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionChange {
    /// No indexed cell carries the region tag; the store was not touched.
    NotFound,
    /// Cells rewritten and events whose transparency was set.
    Applied { tiles: usize, events: usize },
}

impl RegionChange {
    pub fn is_found(&self) -> bool {
        matches!(self, RegionChange::Applied { .. })
    }
}

/// Owns the region index and applies visibility changes through it.
#[derive(Clone, Debug)]
pub struct VisibilityController {
    index: RegionIndex,
    empty_tile: TileCode,
    sync_events: bool,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self {
            index: RegionIndex::new(),
            empty_tile: EMPTY_TILE,
            sync_events: true,
        }
    }
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: &RevealParams) -> Self {
        Self {
            index: RegionIndex::new(),
            empty_tile: params.empty_tile,
            sync_events: params.sync_events,
        }
    }

    /// Build the index if it has not been built yet.
    /// Returns true when this call performed the scan.
    pub fn ensure_indexed<S: TileStore + ?Sized>(&mut self, store: &S) -> bool {
        if self.index.is_built() {
            return false;
        }
        self.index.build(store);
        true
    }

    /// Hide (`hide = true`) or restore every tile and event of a region.
    ///
    /// Only index membership is checked. A region with no indexed tiles is
    /// reported as [`RegionChange::NotFound`] and nothing is written.
    pub fn set_region_visibility<S: TileStore + ?Sized>(
        &self,
        store: &mut S,
        region: RegionId,
        hide: bool,
    ) -> RegionChange {
        let Some(tiles) = self.index.tiles(region) else {
            debug!(region = region.get(), "region not indexed");
            return RegionChange::NotFound;
        };

        let mut events = 0;
        for record in tiles {
            for (z, &code) in record.layers.iter().enumerate() {
                let code = if hide { self.empty_tile } else { code };
                store.set_layer_code(record.x, record.y, z, code);
            }

            if !self.sync_events {
                continue;
            }
            if let Some(event) = store.event_at(record.x, record.y) {
                store.set_event_transparent(event, hide);
                events += 1;
            }
        }

        info!(
            region = region.get(),
            hide,
            tiles = tiles.len(),
            events,
            "region visibility applied"
        );
        RegionChange::Applied {
            tiles: tiles.len(),
            events,
        }
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    /// Drop the index so the next `ensure_indexed` rescans.
    ///
    /// Show any hidden region first: a rescan snapshots its blanked cells.
    pub fn reset(&mut self) {
        self.index.clear();
    }
}
