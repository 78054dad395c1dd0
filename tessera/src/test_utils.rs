//! Shared helpers for the crate's tests.

use std::sync::Once;

use common::{LogConfig, LogSetupError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color_image::{ColorImage, RgbImage};
use crate::geometry::{Dims4, Offset4, Point4};
use crate::zone_map::ZoneMap;

/// Routes `tracing` output to the console for tests. Honors `RUST_LOG`.
pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        match common::setup_logging_with(&LogConfig::console_only("warn")) {
            Ok(()) | Err(LogSetupError::AlreadyInitialized) => {}
            Err(e) => panic!("failed to set up test logging: {e}"),
        }
    });
}

/// A single-row RGB image, one pixel per entry.
pub fn row_image(pixels: &[[u8; 3]]) -> RgbImage {
    RgbImage::from_pixels(Dims4::planar(pixels.len(), 1), pixels.to_vec()).unwrap()
}

/// A 2-D RGB image from rows of pixels.
pub fn grid_image(rows: &[&[[u8; 3]]]) -> RgbImage {
    let width = rows[0].len();
    assert!(rows.iter().all(|r| r.len() == width), "ragged rows");
    let pixels = rows.iter().flat_map(|r| r.iter().copied()).collect();
    RgbImage::from_pixels(Dims4::planar(width, rows.len()), pixels).unwrap()
}

/// Seeded random RGB image. Samples are drawn from `levels` evenly spaced
/// values so that flat and near-flat regions actually occur.
pub fn random_image(dims: Dims4, seed: u64, levels: u16) -> RgbImage {
    assert!((1..=256).contains(&levels));
    let step = 256 / levels;
    let mut rng = StdRng::seed_from_u64(seed);
    RgbImage::from_fn(dims, |_| {
        std::array::from_fn(|_| (rng.random_range(0..levels) * step) as u8)
    })
    .unwrap()
}

/// Every coordinate of the domain in storage order.
pub fn all_points(dims: Dims4) -> Vec<Point4> {
    let mut points = Vec::with_capacity(dims.voxel_count());
    for t in 0..dims.t {
        for z in 0..dims.z {
            for y in 0..dims.y {
                for x in 0..dims.x {
                    points.push(Point4::new(x, y, z, t));
                }
            }
        }
    }
    points
}

/// Every in-bounds pair `(p, p + offset)` of the image domain.
pub fn adjacent_pairs(dims: Dims4, neighborhood: &[Offset4]) -> Vec<(Point4, Point4)> {
    all_points(dims)
        .into_iter()
        .flat_map(|p| {
            neighborhood
                .iter()
                .filter_map(move |&offset| dims.shift(p, offset).map(|q| (p, q)))
        })
        .collect()
}

/// Reference α-connected components: union-find over every adjacent pair
/// within α. Returns a root id per pixel in storage order.
pub fn reference_components<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
) -> Vec<usize> {
    let dims = image.dims();
    let index = |p: Point4| ((p.t * dims.z + p.z) * dims.y + p.y) * dims.x + p.x;

    let mut parent: Vec<usize> = (0..dims.voxel_count()).collect();
    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for (p, q) in adjacent_pairs(dims, neighborhood) {
        if crate::distance::within_alpha(&image.pixel(p), &image.pixel(q), alpha) {
            let a = find(&mut parent, index(p));
            let b = find(&mut parent, index(q));
            if a != b {
                parent[a.max(b)] = a.min(b);
            }
        }
    }

    (0..parent.len()).map(|i| find(&mut parent, i)).collect()
}

/// Whether `labels` and `other` describe the same partition, ignoring ids.
pub fn same_partition<A: Copy + Eq + std::hash::Hash, B: Copy + Eq + std::hash::Hash>(
    labels: &[A],
    other: &[B],
) -> bool {
    use std::collections::HashMap;

    assert_eq!(labels.len(), other.len());
    let mut forward: HashMap<A, B> = HashMap::new();
    let mut backward: HashMap<B, A> = HashMap::new();
    labels.iter().zip(other).all(|(&a, &b)| {
        *forward.entry(a).or_insert(b) == b && *backward.entry(b).or_insert(a) == a
    })
}

/// Asserts ids are exactly `0..num_zones` and each id is used.
pub fn assert_contiguous_ids(map: &ZoneMap) {
    let sizes = map.zone_sizes();
    assert!(map.num_zones() >= 1);
    assert_eq!(sizes.len(), map.num_zones());
    assert!(sizes.iter().all(|&s| s > 0), "unused zone id: {sizes:?}");
    assert_eq!(sizes.iter().sum::<usize>(), map.labels().len());
}
