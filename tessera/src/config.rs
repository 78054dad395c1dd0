//! Configuration types for zone labeling.
//!
//! [`Config`] is a flat struct; parameters are grouped by comments into
//! logical sections. It can be read from YAML or JSON, and missing fields
//! take their defaults.

use std::path::Path;

use common::SerdeFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::Offset4;
use crate::neighborhood::{unit_box_offsets, Neighborhood};

// ============================================================================
// Enums
// ============================================================================

/// Which relative positions count as adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connectivity {
    /// Horizontal and vertical neighbors within a plane: (x±1, y), (x, y±1).
    #[default]
    Four,
    /// All 8 in-plane neighbors, diagonals included.
    Eight,
    /// The 6 face neighbors of a voxel in (x, y, z).
    Six,
    /// All 26 neighbors in the surrounding (x, y, z) cube.
    TwentySix,
    /// All 80 neighbors in the surrounding (x, y, z, t) hypercube.
    /// Already spans time, so the `temporal` flag has no effect.
    Eighty,
    /// Caller-supplied offsets, used as given.
    Custom(Vec<Offset4>),
}

impl Connectivity {
    /// Builds the offset set. `temporal` appends the previous and next frame
    /// at the same position to the planar and volumetric presets.
    pub fn neighborhood(&self, temporal: bool) -> Result<Neighborhood> {
        let mut offsets = match self {
            Connectivity::Four => unit_box_offsets(2, true),
            Connectivity::Eight => unit_box_offsets(2, false),
            Connectivity::Six => unit_box_offsets(3, true),
            Connectivity::TwentySix => unit_box_offsets(3, false),
            Connectivity::Eighty => return Neighborhood::new(unit_box_offsets(4, false)),
            Connectivity::Custom(offsets) => return Neighborhood::new(offsets.iter().copied()),
        };

        if temporal {
            offsets.push(Offset4::new(0, 0, 0, -1));
            offsets.push(Offset4::new(0, 0, 0, 1));
        }

        Neighborhood::new(offsets)
    }
}

/// Order in which the labeler looks for seed pixels.
///
/// Only affects which id each zone receives, never the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// x fastest, then y, z, t, all ascending from the origin.
    #[default]
    Forward,
    /// x fastest, then y, z, t, all descending from the far corner.
    Reverse,
}

impl ScanOrder {
    /// Linear storage indices in scan order.
    pub(crate) fn indices(self, len: usize) -> impl Iterator<Item = usize> {
        let reverse = self == ScanOrder::Reverse;
        (0..len).map(move |i| if reverse { len - 1 - i } else { i })
    }
}

// ============================================================================
// Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // -- Tolerance ----------------------------------------------------------
    /// Largest L∞ channel difference allowed between chain-adjacent pixels,
    /// on the 0-255 sample scale. Values above 255 merge every connected
    /// region.
    pub alpha: i32,

    // -- Adjacency ----------------------------------------------------------
    pub connectivity: Connectivity,
    /// Also connect each pixel to the same position in the neighboring frames.
    pub temporal: bool,

    // -- Traversal ----------------------------------------------------------
    pub scan_order: ScanOrder,

    // -- Batching -----------------------------------------------------------
    /// Frames labeled at once by `ZoneLabeler::label_frames`.
    /// `None` uses the rayon pool size.
    pub max_concurrent_frames: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 0,
            connectivity: Connectivity::Four,
            temporal: false,
            scan_order: ScanOrder::Forward,
            max_concurrent_frames: None,
        }
    }
}

impl Config {
    pub fn with_alpha(alpha: i32) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.alpha < 0 {
            return Err(Error::AlphaOutOfRange(self.alpha));
        }
        self.neighborhood().map(|_| ())
    }

    pub fn neighborhood(&self) -> Result<Neighborhood> {
        self.connectivity.neighborhood(self.temporal)
    }

    /// Parses YAML or JSON text. The result is not validated.
    pub fn parse(text: &str, format: SerdeFormat) -> Result<Self> {
        common::serde::deserialize(text.as_bytes(), format).map_err(Error::Config)
    }

    pub fn to_text(&self, format: SerdeFormat) -> Result<String> {
        let bytes = common::serde::serialize(self, format).map_err(Error::Config)?;
        String::from_utf8(bytes).map_err(|e| Error::Config(e.into()))
    }

    /// Reads and validates a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SerdeFormat::from_file_name(&path.to_string_lossy())?;
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&text, format)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), ?config, "Loaded zone labeling config");

        Ok(config)
    }
}
