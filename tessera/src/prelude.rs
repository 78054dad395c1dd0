//! Common imports for labeling images.
//!
//! ```rust,ignore
//! use tessera::prelude::*;
//! ```

pub use crate::{
    label, ColorImage, Config, Connectivity, Dims4, Neighborhood, Offset4, Point4, RgbImage,
    ScanOrder, ZoneLabeler, ZoneMap,
};
