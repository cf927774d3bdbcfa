use serde::{Deserialize, Serialize};

use super::store::EventId;

/// An event instance placed on a map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEvent {
    pub id: EventId,
    pub name: String,
    pub x: usize,
    pub y: usize,
    /// Transparent events are skipped by the renderer but keep running.
    pub transparent: bool,
}

impl MapEvent {
    pub fn new(id: EventId, name: impl Into<String>, x: usize, y: usize) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            transparent: false,
        }
    }

    pub fn is_at(&self, x: usize, y: usize) -> bool {
        self.x == x && self.y == y
    }
}
