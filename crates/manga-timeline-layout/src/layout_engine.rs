//! Public layout facade.
//!
//! One engine instance holds the tunable width constants; every entry point
//! is a pure function of `(data, index, mode)`. The shell calls these once
//! per band per render and maps the returned scalar widths to viewport
//! units.

use manga_timeline::{ChapterRange, TimelineData};

use crate::band_width::{band_width, sharing_from_neighbors, sharing_in_list, BoundarySharing};
use crate::episode_width::episode_width;
use crate::error::LayoutError;
use crate::width_policy::{chapter_policy_width, LayoutConfig, SizingMode};

/// Proportional band-width engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine with the given width constants.
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    /// The width constants this engine computes with.
    pub fn config(&self) -> LayoutConfig {
        self.cfg
    }

    /// Width of one chapter, never split.
    ///
    /// Split-chapter fractions only exist from the perspective of the groups
    /// claiming the chapter; the chapter band itself always renders whole.
    pub fn chapter_width(
        &self,
        data: &TimelineData,
        chapter_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        let count = data.chapters.chapter_count();
        if chapter_index >= count {
            return Err(LayoutError::IndexOutOfRange {
                kind: "chapter",
                index: chapter_index,
                count,
            });
        }
        chapter_policy_width(&data.chapters, self.cfg, chapter_index, mode)
    }

    /// Width of one volume.
    ///
    /// Bounded mode is the nominal constant by definition; unbounded mode
    /// aggregates the volume's own chapter partition, which no neighbor ever
    /// shares.
    pub fn volume_width(
        &self,
        data: &TimelineData,
        volume_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        let count = data.chapters.volume_count();
        if volume_index >= count {
            return Err(LayoutError::IndexOutOfRange {
                kind: "volume",
                index: volume_index,
                count,
            });
        }
        if mode == SizingMode::Bounded {
            return Ok(self.cfg.nominal_volume_width);
        }
        let chapters = data.chapters.volume_chapters(volume_index)?;
        let range = ChapterRange::new(chapters.start as u32 + 1, chapters.end as u32 + 1);
        band_width(
            data,
            self.cfg,
            range,
            BoundarySharing::default(),
            mode,
            "volume",
        )
    }

    /// Width of one story arc.
    pub fn arc_width(
        &self,
        data: &TimelineData,
        arc_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        if arc_index >= data.arcs.len() {
            return Err(LayoutError::IndexOutOfRange {
                kind: "arc",
                index: arc_index,
                count: data.arcs.len(),
            });
        }
        let sharing = sharing_in_list(&data.arcs, arc_index, data.chapters.chapter_count());
        band_width(data, self.cfg, data.arcs[arc_index], sharing, mode, "arc")
    }

    /// Width of one saga.
    pub fn saga_width(
        &self,
        data: &TimelineData,
        saga_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        if saga_index >= data.sagas.len() {
            return Err(LayoutError::IndexOutOfRange {
                kind: "saga",
                index: saga_index,
                count: data.sagas.len(),
            });
        }
        let sharing = sharing_in_list(&data.sagas, saga_index, data.chapters.chapter_count());
        band_width(data, self.cfg, data.sagas[saga_index], sharing, mode, "saga")
    }

    /// Width of one season.
    pub fn season_width(
        &self,
        data: &TimelineData,
        season_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        if season_index >= data.seasons.len() {
            return Err(LayoutError::IndexOutOfRange {
                kind: "season",
                index: season_index,
                count: data.seasons.len(),
            });
        }
        let chapter_count = data.chapters.chapter_count();
        let range = data.seasons[season_index].range;
        let prev = season_index
            .checked_sub(1)
            .and_then(|prev| data.seasons.get(prev))
            .map(|season| season.range);
        let next = data.seasons.get(season_index + 1).map(|season| season.range);
        let sharing = sharing_from_neighbors(prev, range, next, chapter_count);
        band_width(data, self.cfg, range, sharing, mode, "season")
    }

    /// Width of one episode of a season.
    pub fn episode_width(
        &self,
        data: &TimelineData,
        season_index: usize,
        episode_index: usize,
        mode: SizingMode,
    ) -> Result<f32, LayoutError> {
        let season = data
            .seasons
            .get(season_index)
            .ok_or(LayoutError::IndexOutOfRange {
                kind: "season",
                index: season_index,
                count: data.seasons.len(),
            })?;
        let episode =
            season
                .episodes
                .get(episode_index)
                .ok_or(LayoutError::IndexOutOfRange {
                    kind: "episode",
                    index: episode_index,
                    count: season.episodes.len(),
                })?;
        episode_width(data, self.cfg, season, *episode, mode)
    }
}
