//! Error types for the host-facing edges of the crate.
//!
//! The region core itself has no error type: a region with no tiles is a
//! normal outcome (`RegionChange::NotFound`), not a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading a map file.
#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map json is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("map size {width}x{height} is too large")]
    Dimensions { width: usize, height: usize },

    #[error(
        "map data has {actual} entries, expected {expected} ({width}x{height}x{planes} planes)"
    )]
    DataLength {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
        planes: usize,
    },

    #[error("tile code {code} at plane {plane} does not fit in 16 bits")]
    TileCode { code: u32, plane: usize },

    #[error("value {code} at plane {plane} does not fit in 8 bits")]
    PlaneValue { code: u32, plane: usize },

    #[error("event {id} is placed at ({x}, {y}), outside the {width}x{height} map")]
    EventOutOfBounds {
        id: u32,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Failure while parsing a plugin command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (expected 'hide' or 'show')")]
    UnknownCommand(String),

    #[error("region id '{0}' is not a number")]
    InvalidArgument(String),

    #[error("region id {0} is out of range (1-255)")]
    RegionOutOfRange(i64),

    #[error("unexpected trailing argument '{0}'")]
    TrailingArgument(String),

    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<CommandError>,
    },
}

/// Failure while reading a parameter file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config json is malformed: {0}")]
    Json(#[from] serde_json::Error),
}
