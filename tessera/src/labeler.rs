use crate::color_image::ColorImage;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::labeling::label_with_order;
use crate::neighborhood::Neighborhood;
use crate::zone_map::ZoneMap;

/// Zone labeler bound to a validated [`Config`].
///
/// Holds no per-call state: a single instance can label any number of
/// images, from any number of threads.
#[derive(Debug, Clone)]
pub struct ZoneLabeler {
    config: Config,
    neighborhood: Neighborhood,
}

impl ZoneLabeler {
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        let neighborhood = config.neighborhood()?;
        Ok(Self {
            config,
            neighborhood,
        })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn label<const C: usize>(&self, image: &ColorImage<C>) -> Result<ZoneMap> {
        label_with_order(
            image,
            self.config.alpha,
            &self.neighborhood,
            self.config.scan_order,
        )
    }

    /// Labels independent images in parallel, each in its own single-threaded
    /// pass. Results keep input order; any failing frame fails the batch.
    pub fn label_frames<const C: usize>(&self, frames: &[ColorImage<C>]) -> Result<Vec<ZoneMap>> {
        let max_concurrent = common::resolve_concurrency(self.config.max_concurrent_frames);

        tracing::info!(
            frames = frames.len(),
            max_concurrent,
            alpha = self.config.alpha,
            "Labeling frames"
        );

        common::try_par_map_limited(frames, max_concurrent, |index, frame| {
            self.label(frame).map_err(|e| Error::Frame {
                index,
                source: Box::new(e),
            })
        })
    }
}
