//! Tessera - quasi-flat-zone segmentation of multi-dimensional color images.
//!
//! Partitions a 4-D (x, y, z, t) image into maximal zones in which every
//! pixel is reachable from every other through a chain of adjacent pixels
//! whose L∞ color difference never exceeds α (α-connected components).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tessera::{Config, Connectivity, RgbImage, Dims4, ZoneLabeler};
//!
//! let image = RgbImage::from_raw(Dims4::planar(640, 480), samples)?;
//!
//! let config = Config {
//!     alpha: 8,
//!     connectivity: Connectivity::Eight,
//!     ..Config::default()
//! };
//! let labeler = ZoneLabeler::from_config(config)?;
//! let zones = labeler.label(&image)?;
//!
//! println!("Found {} zones", zones.num_zones());
//! ```

mod color_image;
mod config;
mod distance;
mod error;
mod geometry;
mod labeler;
mod labeling;
mod neighborhood;
mod zone_map;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod prelude;

// ============================================================================
// Image model
// ============================================================================

pub use color_image::{ColorImage, RgbImage};
pub use distance::linf_distance;
pub use geometry::{Dims4, Offset4, Point4};
pub use neighborhood::Neighborhood;

// ============================================================================
// Labeling
// ============================================================================

pub use config::{Config, Connectivity, ScanOrder};
pub use labeler::ZoneLabeler;
pub use labeling::{label, label_with_order, PixelState};
pub use zone_map::ZoneMap;

// ============================================================================
// Errors
// ============================================================================

pub use error::{Error, Result};
