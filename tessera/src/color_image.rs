//! Read-only multi-channel 4-D color image.

use common::Buffer4;

use crate::error::{Error, Result};
use crate::geometry::{Dims4, Point4};

/// 4-D image with `C` unsigned 8-bit channels per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage<const C: usize> {
    pixels: Buffer4<[u8; C]>,
}

/// Three-channel red/green/blue image.
pub type RgbImage = ColorImage<3>;

impl<const C: usize> ColorImage<C> {
    pub const CHANNELS: usize = C;

    /// Builds an image from interleaved samples, x-fastest then y, z, t.
    pub fn from_raw(dims: Dims4, samples: Vec<u8>) -> Result<Self> {
        let voxels = checked_extent::<C>(dims)?;

        let expected = voxels * C;
        if samples.len() != expected {
            return Err(Error::DimensionMismatch {
                dims,
                channels: C,
                expected,
                actual: samples.len(),
            });
        }

        let pixels = (0..voxels)
            .map(|i| {
                let mut px = [0u8; C];
                px.copy_from_slice(&samples[i * C..(i + 1) * C]);
                px
            })
            .collect();

        Ok(Self {
            pixels: Buffer4::new(dims.as_array(), pixels),
        })
    }

    pub fn from_pixels(dims: Dims4, pixels: Vec<[u8; C]>) -> Result<Self> {
        let voxels = checked_extent::<C>(dims)?;

        if pixels.len() != voxels {
            return Err(Error::DimensionMismatch {
                dims,
                channels: C,
                expected: voxels * C,
                actual: pixels.len() * C,
            });
        }

        Ok(Self {
            pixels: Buffer4::new(dims.as_array(), pixels),
        })
    }

    pub fn from_fn<F>(dims: Dims4, mut f: F) -> Result<Self>
    where
        F: FnMut(Point4) -> [u8; C],
    {
        checked_extent::<C>(dims)?;

        let mut pixels = Buffer4::new_filled(dims.as_array(), [0u8; C]);
        for idx in 0..pixels.len() {
            let p = Point4::from(pixels.coords(idx));
            pixels[idx] = f(p);
        }

        Ok(Self { pixels })
    }

    #[inline]
    pub fn dims(&self) -> Dims4 {
        self.pixels.dims().into()
    }

    #[inline]
    pub fn channels(&self) -> usize {
        C
    }

    /// Channel vector at `p`. Panics if `p` is outside the image.
    #[inline]
    pub fn pixel(&self, p: Point4) -> [u8; C] {
        *self.pixels.get(p.x, p.y, p.z, p.t)
    }

    #[inline]
    pub fn pixels(&self) -> &[[u8; C]] {
        self.pixels.cells()
    }

    #[inline]
    pub(crate) fn buffer(&self) -> &Buffer4<[u8; C]> {
        &self.pixels
    }

    /// Interleaved samples in storage order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

/// Pixel count of `dims`, provided it is non-empty and its sample count fits
/// in `usize`.
fn checked_extent<const C: usize>(dims: Dims4) -> Result<usize> {
    if dims.is_empty() {
        return Err(Error::EmptyImage { dims });
    }
    dims.checked_voxel_count()
        .filter(|voxels| voxels.checked_mul(C).is_some())
        .ok_or(Error::ExtentOverflow { dims, channels: C })
}
