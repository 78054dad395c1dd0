//! Zone labels produced by the labeler, plus per-zone summaries for
//! downstream coloring and statistics.

use common::Buffer4;

use crate::color_image::ColorImage;
use crate::error::{Error, Result};
use crate::geometry::{Dims4, Point4};

/// One zone id per pixel, ids contiguous in `0..num_zones()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneMap {
    labels: Buffer4<u32>,
    num_zones: usize,
}

impl ZoneMap {
    pub(crate) fn new(labels: Buffer4<u32>, num_zones: usize) -> Self {
        debug_assert!(labels.iter().all(|&l| (l as usize) < num_zones));
        Self { labels, num_zones }
    }

    #[inline]
    pub fn num_zones(&self) -> usize {
        self.num_zones
    }

    #[inline]
    pub fn dims(&self) -> Dims4 {
        self.labels.dims().into()
    }

    /// Labels in storage order (x fastest, then y, z, t).
    #[inline]
    pub fn labels(&self) -> &[u32] {
        self.labels.cells()
    }

    #[inline]
    pub fn label_at(&self, p: Point4) -> u32 {
        *self.labels.get(p.x, p.y, p.z, p.t)
    }

    pub fn into_labels(self) -> Vec<u32> {
        self.labels.into_vec()
    }

    /// Pixel count of every zone, indexed by zone id.
    pub fn zone_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.num_zones];
        for &label in self.labels.iter() {
            sizes[label as usize] += 1;
        }
        sizes
    }

    /// Per-channel mean color of every zone, rounded to nearest.
    pub fn mean_colors<const C: usize>(&self, image: &ColorImage<C>) -> Result<Vec<[u8; C]>> {
        self.ensure_same_dims(image)?;

        let mut sums = vec![[0u64; C]; self.num_zones];
        let mut counts = vec![0u64; self.num_zones];
        for (&label, pixel) in self.labels.iter().zip(image.pixels()) {
            let zone = label as usize;
            counts[zone] += 1;
            for (sum, &sample) in sums[zone].iter_mut().zip(pixel) {
                *sum += u64::from(sample);
            }
        }

        Ok(sums
            .iter()
            .zip(&counts)
            .map(|(sum, &count)| {
                let mut mean = [0u8; C];
                for (m, &s) in mean.iter_mut().zip(sum) {
                    *m = ((s + count / 2) / count.max(1)) as u8;
                }
                mean
            })
            .collect())
    }

    /// Copy of `image` where every pixel takes its zone's mean color.
    pub fn to_mean_color_image<const C: usize>(
        &self,
        image: &ColorImage<C>,
    ) -> Result<ColorImage<C>> {
        let means = self.mean_colors(image)?;
        let pixels = self.labels.iter().map(|&l| means[l as usize]).collect();
        ColorImage::from_pixels(self.dims(), pixels)
    }

    fn ensure_same_dims<const C: usize>(&self, image: &ColorImage<C>) -> Result<()> {
        let dims = self.dims();
        if image.dims() != dims {
            return Err(Error::DimensionMismatch {
                dims,
                channels: C,
                expected: dims.voxel_count() * C,
                actual: image.dims().voxel_count() * C,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_zone_map() -> (ZoneMap, ColorImage<3>) {
        // 3x2 image:
        //   A A B
        //   A B B
        let labels = Buffer4::new([3, 2, 1, 1], vec![0, 0, 1, 0, 1, 1]);
        let image = ColorImage::from_pixels(
            Dims4::planar(3, 2),
            vec![
                [10, 0, 0],
                [11, 0, 0],
                [200, 50, 1],
                [12, 1, 0],
                [201, 50, 2],
                [202, 51, 2],
            ],
        )
        .unwrap();
        (ZoneMap::new(labels, 2), image)
    }

    #[test]
    fn accessors() {
        let (map, _) = two_zone_map();
        assert_eq!(map.num_zones(), 2);
        assert_eq!(map.dims(), Dims4::planar(3, 2));
        assert_eq!(map.label_at(Point4::new(2, 0, 0, 0)), 1);
        assert_eq!(map.label_at(Point4::new(0, 1, 0, 0)), 0);
        assert_eq!(map.clone().into_labels(), map.labels().to_vec());
    }

    #[test]
    fn zone_sizes_count_pixels() {
        let (map, _) = two_zone_map();
        assert_eq!(map.zone_sizes(), vec![3, 3]);
    }

    #[test]
    fn mean_colors_round_to_nearest() {
        let (map, image) = two_zone_map();
        // zone 0: (10+11+12)/3 = 11, (0+0+1)/3 = 0.33 -> 0
        // zone 1: (200+201+202)/3 = 201, (50+50+51)/3 = 50.33 -> 50, (1+2+2)/3 = 1.67 -> 2
        assert_eq!(map.mean_colors(&image).unwrap(), vec![[11, 0, 0], [201, 50, 2]]);
    }

    #[test]
    fn mean_color_image_paints_zones() {
        let (map, image) = two_zone_map();
        let painted = map.to_mean_color_image(&image).unwrap();

        assert_eq!(painted.dims(), image.dims());
        assert_eq!(painted.pixel(Point4::new(0, 0, 0, 0)), [11, 0, 0]);
        assert_eq!(painted.pixel(Point4::new(1, 1, 0, 0)), [201, 50, 2]);
    }

    #[test]
    fn mean_colors_reject_other_extent() {
        let (map, _) = two_zone_map();
        let other = ColorImage::<3>::from_pixels(Dims4::planar(2, 3), vec![[0; 3]; 6]).unwrap();

        let err = map.mean_colors(&other).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
