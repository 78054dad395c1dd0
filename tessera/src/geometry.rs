//! Coordinates, offsets and extents of the 4-D image domain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A pixel coordinate `(x, y, z, t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point4 {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub t: usize,
}

impl Point4 {
    pub const fn new(x: usize, y: usize, z: usize, t: usize) -> Self {
        Self { x, y, z, t }
    }
}

impl From<(usize, usize, usize, usize)> for Point4 {
    #[inline]
    fn from((x, y, z, t): (usize, usize, usize, usize)) -> Self {
        Self { x, y, z, t }
    }
}

impl From<Point4> for (usize, usize, usize, usize) {
    #[inline]
    fn from(p: Point4) -> Self {
        (p.x, p.y, p.z, p.t)
    }
}

/// A relative position between two pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset4 {
    #[serde(default)]
    pub x: isize,
    #[serde(default)]
    pub y: isize,
    #[serde(default)]
    pub z: isize,
    #[serde(default)]
    pub t: isize,
}

impl Offset4 {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: isize, y: isize, z: isize, t: isize) -> Self {
        Self { x, y, z, t }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.t)
    }
}

/// Per-axis extent of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dims4 {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub t: usize,
}

impl Dims4 {
    pub const fn new(x: usize, y: usize, z: usize, t: usize) -> Self {
        Self { x, y, z, t }
    }

    /// A single-frame 2-D extent.
    pub const fn planar(width: usize, height: usize) -> Self {
        Self::new(width, height, 1, 1)
    }

    /// Number of pixels. Only meaningful for extents that passed
    /// [`Dims4::checked_voxel_count`], which every image constructor enforces.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.x * self.y * self.z * self.t
    }

    /// `None` when the product does not fit in `usize`.
    #[inline]
    pub fn checked_voxel_count(&self) -> Option<usize> {
        self.x
            .checked_mul(self.y)?
            .checked_mul(self.z)?
            .checked_mul(self.t)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x == 0 || self.y == 0 || self.z == 0 || self.t == 0
    }

    #[inline]
    pub fn as_array(&self) -> [usize; 4] {
        [self.x, self.y, self.z, self.t]
    }

    #[inline]
    pub fn contains(&self, p: Point4) -> bool {
        p.x < self.x && p.y < self.y && p.z < self.z && p.t < self.t
    }

    /// `p + offset` if it stays inside the extent on every axis.
    #[inline]
    pub fn shift(&self, p: Point4, offset: Offset4) -> Option<Point4> {
        let shifted = Point4 {
            x: p.x.checked_add_signed(offset.x)?,
            y: p.y.checked_add_signed(offset.y)?,
            z: p.z.checked_add_signed(offset.z)?,
            t: p.t.checked_add_signed(offset.t)?,
        };
        self.contains(shifted).then_some(shifted)
    }
}

impl From<[usize; 4]> for Dims4 {
    #[inline]
    fn from([x, y, z, t]: [usize; 4]) -> Self {
        Self { x, y, z, t }
    }
}

impl fmt::Display for Dims4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}x{}", self.x, self.y, self.z, self.t)
    }
}
