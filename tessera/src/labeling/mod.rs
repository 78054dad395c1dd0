//! Quasi-flat-zone labeling by breadth-first region growing.
//!
//! Two adjacent pixels belong to the same zone when their L∞ channel distance
//! is at most α; zones are the transitive closure of that relation. Each
//! candidate is compared to the pixel that discovered it, never to the seed,
//! so colors may drift across a zone as long as every single step stays
//! within α.
//!
//! Per-pixel state moves monotonically `Unvisited -> Pending -> Labeled(id)`.
//! A pixel becomes `Pending` when it is queued, which keeps it from being
//! queued twice; it becomes `Labeled` when it is dequeued and expanded.


use std::collections::VecDeque;

use common::Buffer4;

use crate::color_image::ColorImage;
use crate::config::ScanOrder;
use crate::distance::within_alpha;
use crate::error::{Error, Result};
use crate::geometry::{Offset4, Point4};
use crate::zone_map::ZoneMap;

/// Labeling status of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelState {
    #[default]
    Unvisited,
    /// Queued for the zone currently being grown.
    Pending,
    Labeled(u32),
}

impl PixelState {
    #[inline]
    pub fn label(self) -> Option<u32> {
        match self {
            PixelState::Labeled(id) => Some(id),
            _ => None,
        }
    }
}

/// Labels the quasi-flat zones of `image`, seeding in [`ScanOrder::Forward`].
///
/// `neighborhood` lists the offsets that count as adjacent; offsets leading
/// outside the image are skipped per pixel.
pub fn label<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
) -> Result<ZoneMap> {
    label_with_order(image, alpha, neighborhood, ScanOrder::Forward)
}

/// Like [`label`], with an explicit seed scan order.
pub fn label_with_order<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
    order: ScanOrder,
) -> Result<ZoneMap> {
    validate_inputs(image, alpha, neighborhood)?;

    let dims = image.dims();
    let mut states = Buffer4::new_filled(dims.as_array(), PixelState::Unvisited);
    let mut worklist = VecDeque::new();
    let mut num_zones = 0u32;

    for idx in order.indices(states.len()) {
        if states[idx] != PixelState::Unvisited {
            continue;
        }

        let zone = num_zones;
        num_zones += 1;

        let seed = Point4::from(states.coords(idx));
        let size = grow_zone(
            image,
            alpha,
            neighborhood,
            &mut states,
            &mut worklist,
            seed,
            zone,
        );
        tracing::trace!(zone, size, ?seed, "Grew zone");
    }

    tracing::debug!(
        %dims,
        alpha,
        neighbors = neighborhood.len(),
        ?order,
        zones = num_zones,
        "Labeled quasi-flat zones"
    );

    let labels = states.map(|state| {
        state
            .label()
            .expect("every pixel is labeled once the scan completes")
    });

    Ok(ZoneMap::new(labels, num_zones as usize))
}

fn validate_inputs<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
) -> Result<()> {
    let dims = image.dims();
    if dims.is_empty() {
        return Err(Error::EmptyImage { dims });
    }
    if neighborhood.is_empty() {
        return Err(Error::EmptyNeighborhood);
    }
    if alpha < 0 {
        return Err(Error::AlphaOutOfRange(alpha));
    }
    Ok(())
}

/// Grows zone `zone` from `seed` until the worklist drains. Returns the
/// number of pixels committed to the zone.
fn grow_zone<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
    states: &mut Buffer4<PixelState>,
    worklist: &mut VecDeque<Point4>,
    seed: Point4,
    zone: u32,
) -> usize {
    debug_assert!(worklist.is_empty());

    let mut size = 0;
    let mut next = Some(seed);
    while let Some(p) = next {
        *states.get_mut(p.x, p.y, p.z, p.t) = PixelState::Labeled(zone);
        size += 1;
        enqueue_similar_neighbors(image, alpha, neighborhood, states, worklist, p);
        next = worklist.pop_front();
    }
    size
}

/// Queues every unvisited in-bounds neighbor of `source` whose color is
/// within α of `source`'s color.
fn enqueue_similar_neighbors<const C: usize>(
    image: &ColorImage<C>,
    alpha: i32,
    neighborhood: &[Offset4],
    states: &mut Buffer4<PixelState>,
    worklist: &mut VecDeque<Point4>,
    source: Point4,
) {
    let dims = image.dims();
    let pixels = image.buffer();
    let source_color = image.pixel(source);

    for &offset in neighborhood {
        let Some(neighbor) = dims.shift(source, offset) else {
            continue;
        };

        let idx = states.index(neighbor.x, neighbor.y, neighbor.z, neighbor.t);
        if states[idx] != PixelState::Unvisited {
            continue;
        }

        if within_alpha(&source_color, &pixels[idx], alpha) {
            states[idx] = PixelState::Pending;
            worklist.push_back(neighbor);
        }
    }
}
