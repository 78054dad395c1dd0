use std::path::PathBuf;

use common::FileExtensionError;
use thiserror::Error;

use crate::geometry::Dims4;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by zone labeling and its configuration layer.
///
/// Every labeling error is detected before the scan starts, so no partially
/// labeled output ever escapes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Image is empty: dimensions {dims}")]
    EmptyImage { dims: Dims4 },

    #[error(
        "Image data has {actual} samples, but {dims} with {channels} channel(s) requires {expected}"
    )]
    DimensionMismatch {
        dims: Dims4,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Image extent {dims} with {channels} channel(s) overflows addressable memory")]
    ExtentOverflow { dims: Dims4, channels: usize },

    #[error("Neighborhood has no offsets")]
    EmptyNeighborhood,

    #[error("Alpha must be non-negative, got {0}")]
    AlphaOutOfRange(i32),

    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FileExtensionError),

    #[error("Invalid config: {0:#}")]
    Config(anyhow::Error),

    #[error("Frame {index}: {source}")]
    Frame { index: usize, source: Box<Error> },
}

impl Error {
    /// True for the invalid-input family: empty or oversized images, empty
    /// neighborhoods and extent mismatches.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::EmptyImage { .. }
            | Error::ExtentOverflow { .. }
            | Error::DimensionMismatch { .. }
            | Error::EmptyNeighborhood => true,
            Error::Frame { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}
