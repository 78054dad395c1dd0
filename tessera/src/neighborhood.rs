//! Adjacency as an ordered set of relative offsets.

use std::ops::Deref;

use crate::error::{Error, Result};
use crate::geometry::Offset4;

/// Validated, ordered, duplicate-free set of non-zero offsets.
///
/// Derefs to `[Offset4]`, so it can be passed wherever the labeler takes a
/// raw offset slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    offsets: Vec<Offset4>,
}

impl Neighborhood {
    /// Keeps the first occurrence of each offset and drops the zero offset.
    pub fn new<I>(offsets: I) -> Result<Self>
    where
        I: IntoIterator<Item = Offset4>,
    {
        let mut unique: Vec<Offset4> = Vec::new();
        for offset in offsets {
            if !offset.is_zero() && !unique.contains(&offset) {
                unique.push(offset);
            }
        }

        if unique.is_empty() {
            return Err(Error::EmptyNeighborhood);
        }

        Ok(Self { offsets: unique })
    }

    #[inline]
    pub fn offsets(&self) -> &[Offset4] {
        &self.offsets
    }

    /// Whether every offset's negation is also present. Only symmetric
    /// neighborhoods make adjacency a symmetric relation.
    pub fn is_symmetric(&self) -> bool {
        self.offsets
            .iter()
            .all(|o| self.offsets.contains(&o.negated()))
    }
}

impl Deref for Neighborhood {
    type Target = [Offset4];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.offsets
    }
}

impl AsRef<[Offset4]> for Neighborhood {
    #[inline]
    fn as_ref(&self) -> &[Offset4] {
        &self.offsets
    }
}

/// Offsets in `{-1, 0, 1}` over the first `axes` axes (x, then y, z, t),
/// zero offset excluded. `faces_only` keeps offsets that move along a
/// single axis.
pub(crate) fn unit_box_offsets(axes: usize, faces_only: bool) -> Vec<Offset4> {
    debug_assert!((1..=4).contains(&axes));

    let range = |axis: usize| if axis < axes { -1..=1 } else { 0..=0 };

    let mut offsets = Vec::new();
    for t in range(3) {
        for z in range(2) {
            for y in range(1) {
                for x in range(0) {
                    let offset = Offset4::new(x, y, z, t);
                    let moved_axes = [x, y, z, t].iter().filter(|&&c| c != 0).count();
                    if moved_axes == 0 || (faces_only && moved_axes != 1) {
                        continue;
                    }
                    offsets.push(offset);
                }
            }
        }
    }
    offsets
}
