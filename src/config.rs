//! Configuration parameters for region reveal

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::map::{TileCode, EMPTY_TILE};

/// Tunables for a region reveal session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealParams {
    /// Build the index on `show` as well as `hide`.
    /// When false, `show` before any `hide` on a fresh map finds nothing.
    pub index_on_show: bool,
    /// Drop the index whenever a map is loaded, even if it is the same map
    pub rebuild_on_map_load: bool,
    /// Toggle transparency of events standing in a region
    pub sync_events: bool,
    /// Code written to every layer of a hidden cell
    pub empty_tile: TileCode,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            index_on_show: true,
            rebuild_on_map_load: false,
            sync_events: true,
            empty_tile: EMPTY_TILE,
        }
    }
}

impl RevealParams {
    /// Read parameters from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RevealParams::default();
        assert!(params.index_on_show);
        assert!(!params.rebuild_on_map_load);
        assert!(params.sync_events);
        assert_eq!(params.empty_tile, 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params = RevealParams::from_json(r#"{"index_on_show": false}"#).unwrap();
        assert!(!params.index_on_show);
        assert!(params.sync_events);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            RevealParams::from_json("{index_on_show"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = RevealParams::load(Path::new("/nonexistent/reveal.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
