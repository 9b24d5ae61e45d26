//! Computed band strips.
//!
//! A render pass wants every band of one kind at once: the widths plus
//! their running x-offsets, and a cursor-to-band lookup for hover and
//! tooltip targeting. `BandMap` computes that in a single pass over the
//! engine. It is a plain value; nothing is cached beyond what the caller
//! keeps.

use manga_timeline::{GroupKind, TimelineData};

use crate::error::LayoutError;
use crate::layout_engine::LayoutEngine;
use crate::width_policy::SizingMode;

/// One positioned band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSpan {
    /// Unit index within its kind (chapter, volume, arc, saga, season, or
    /// episode-within-season).
    pub index: usize,
    /// Left edge, as a running sum of preceding widths.
    pub x: f32,
    /// Band width.
    pub width: f32,
}

impl BandSpan {
    /// Half-open horizontal containment test.
    pub fn contains(&self, x: f32) -> bool {
        if self.width <= 0.0 {
            return false;
        }
        x >= self.x && x < self.x + self.width
    }
}

/// All bands of one kind, positioned left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandMap {
    spans: Vec<BandSpan>,
    total_width: f32,
}

impl BandMap {
    /// Lay out every unit of `kind` under the given mode.
    pub fn for_kind(
        engine: &LayoutEngine,
        data: &TimelineData,
        kind: GroupKind,
        mode: SizingMode,
    ) -> Result<Self, LayoutError> {
        let count = match kind {
            GroupKind::Chapter => data.chapters.chapter_count(),
            GroupKind::Volume => data.chapters.volume_count(),
            GroupKind::Arc => data.arcs.len(),
            GroupKind::Saga => data.sagas.len(),
            GroupKind::Season => data.seasons.len(),
        };
        Self::build(count, |index| match kind {
            GroupKind::Chapter => engine.chapter_width(data, index, mode),
            GroupKind::Volume => engine.volume_width(data, index, mode),
            GroupKind::Arc => engine.arc_width(data, index, mode),
            GroupKind::Saga => engine.saga_width(data, index, mode),
            GroupKind::Season => engine.season_width(data, index, mode),
        })
    }

    /// Lay out one season's episodes under the given mode.
    pub fn for_episodes(
        engine: &LayoutEngine,
        data: &TimelineData,
        season_index: usize,
        mode: SizingMode,
    ) -> Result<Self, LayoutError> {
        let count = data
            .seasons
            .get(season_index)
            .ok_or(LayoutError::IndexOutOfRange {
                kind: "season",
                index: season_index,
                count: data.seasons.len(),
            })?
            .episodes
            .len();
        Self::build(count, |index| {
            engine.episode_width(data, season_index, index, mode)
        })
    }

    fn build(
        count: usize,
        width_of: impl Fn(usize) -> Result<f32, LayoutError>,
    ) -> Result<Self, LayoutError> {
        let mut spans = Vec::with_capacity(count);
        let mut x = 0.0f32;
        for index in 0..count {
            let width = width_of(index)?;
            spans.push(BandSpan { index, x, width });
            x += width;
        }
        log::debug!("band map built: {} spans, total width {}", spans.len(), x);
        Ok(Self {
            spans,
            total_width: x,
        })
    }

    /// The positioned spans, in unit order.
    pub fn spans(&self) -> &[BandSpan] {
        &self.spans
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the strip holds no bands.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sum of all band widths.
    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// One span by unit index.
    pub fn get(&self, index: usize) -> Option<&BandSpan> {
        self.spans.get(index)
    }

    /// The band under a horizontal position, if any.
    pub fn span_at(&self, x: f32) -> Option<&BandSpan> {
        let position = self.spans.partition_point(|span| span.x <= x);
        let span = self.spans.get(position.checked_sub(1)?)?;
        span.contains(x).then_some(span)
    }
}
