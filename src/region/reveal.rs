//! Region reveal session.
//!
//! One session lives for the whole game. It owns the visibility controller and
//! ties the region index to the map it was built from: loading a different map
//! drops the index so stale regions never leak onto the new one.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::controller::{RegionChange, VisibilityController};
use super::index::RegionIndex;
use super::types::RegionId;
use crate::commands::PluginCommand;
use crate::config::RevealParams;
use crate::map::TileStore;

pub struct RegionReveal {
    controller: VisibilityController,
    params: RevealParams,
    /// Map currently loaded in the host, if it has told us
    current_map: Option<u32>,
    /// Regions whose last applied change was a hide. Diagnostic only.
    hidden: BTreeSet<RegionId>,
}

impl Default for RegionReveal {
    fn default() -> Self {
        Self::new(RevealParams::default())
    }
}

impl RegionReveal {
    pub fn new(params: RevealParams) -> Self {
        Self {
            controller: VisibilityController::with_params(&params),
            params,
            current_map: None,
            hidden: BTreeSet::new(),
        }
    }

    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    /// Notify the session that the host finished loading a map.
    pub fn on_map_loaded(&mut self, map_id: u32) {
        let changed = self.current_map != Some(map_id);
        if changed || self.params.rebuild_on_map_load {
            debug!(map_id, "map loaded, region index dropped");
            self.controller.reset();
            self.hidden.clear();
        }
        self.current_map = Some(map_id);
    }

    /// Hide all tiles and events of a region.
    pub fn hide<S: TileStore + ?Sized>(&mut self, store: &mut S, region: RegionId) -> RegionChange {
        self.controller.ensure_indexed(&*store);
        self.apply(store, region, true)
    }

    /// Restore all tiles and events of a region.
    pub fn show<S: TileStore + ?Sized>(&mut self, store: &mut S, region: RegionId) -> RegionChange {
        if self.params.index_on_show {
            self.controller.ensure_indexed(&*store);
        }
        self.apply(store, region, false)
    }

    /// Run a parsed plugin command.
    pub fn execute<S: TileStore + ?Sized>(
        &mut self,
        store: &mut S,
        command: PluginCommand,
    ) -> RegionChange {
        match command {
            PluginCommand::Hide(region) => self.hide(store, region),
            PluginCommand::Show(region) => self.show(store, region),
        }
    }

    fn apply<S: TileStore + ?Sized>(
        &mut self,
        store: &mut S,
        region: RegionId,
        hide: bool,
    ) -> RegionChange {
        let change = self.controller.set_region_visibility(store, region, hide);
        match change {
            RegionChange::NotFound => {
                warn!(region = region.get(), "no tiles tagged with region");
            }
            RegionChange::Applied { .. } if hide => {
                self.hidden.insert(region);
            }
            RegionChange::Applied { .. } => {
                self.hidden.remove(&region);
            }
        }
        change
    }

    pub fn is_indexed(&self) -> bool {
        self.controller.index().is_built()
    }

    /// Force a fresh scan of the store, e.g. after the host edited region tags.
    ///
    /// Hidden regions are restored before the scan and hidden again after it,
    /// so their snapshots hold the original codes rather than blanks.
    pub fn rebuild<S: TileStore + ?Sized>(&mut self, store: &mut S) {
        let hidden: Vec<RegionId> = self.hidden.iter().copied().collect();
        for &region in &hidden {
            self.controller.set_region_visibility(store, region, false);
        }

        self.controller.reset();
        self.hidden.clear();
        self.controller.ensure_indexed(&*store);

        for region in hidden {
            self.apply(store, region, true);
        }
    }

    pub fn index(&self) -> &RegionIndex {
        self.controller.index()
    }

    /// Whether the last change applied to the region was a hide.
    pub fn is_hidden(&self, region: RegionId) -> bool {
        self.hidden.contains(&region)
    }

    pub fn hidden_regions(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.hidden.iter().copied()
    }
}
