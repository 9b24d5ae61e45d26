//! Per-title timeline data.
//!
//! `TimelineData` is the in-memory structure the presentation shell hands
//! the layout engine: chapters with their volume partition, the range-defined
//! groupings, and the split-chapter table. The shell owns parsing whatever
//! source format the tables ship in; this crate only defines the shape and
//! checks the model invariants.

use serde::{Deserialize, Serialize};

use crate::chapters::ChapterTable;
use crate::error::TitleError;
use crate::groups::{ChapterRange, Season};
use crate::splits::SplitChapterMap;

/// Everything the layout engine needs to know about one title.
///
/// Loaded once per title, queried many times, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineData {
    /// Chapter page counts and the volume partition.
    pub chapters: ChapterTable,
    /// Story arcs, in reading order.
    #[serde(default)]
    pub arcs: Vec<ChapterRange>,
    /// Sagas (arc groupings), in reading order.
    #[serde(default)]
    pub sagas: Vec<ChapterRange>,
    /// Broadcast seasons with their episode ranges.
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Chapters whose pages are divided between two adjacent groups.
    #[serde(default)]
    pub splits: SplitChapterMap,
}

impl TimelineData {
    /// Check the cross-table invariants.
    ///
    /// Every group range must stay inside the chapter sequence and every
    /// split point must leave both claimants at least one page. A split
    /// entry that no range in any grouping could ever consume fractionally
    /// is tolerated but logged, since it is almost certainly a stale table
    /// entry.
    pub fn validate(&self) -> Result<(), TitleError> {
        let count = self.chapters.chapter_count();
        for (kind, ranges) in [("arc", &self.arcs), ("saga", &self.sagas)] {
            for range in ranges {
                if range.resolve(count).is_none() {
                    return Err(TitleError::RangeOutOfSequence {
                        kind,
                        from: range.from,
                    });
                }
            }
        }
        for season in &self.seasons {
            if season.range.resolve(count).is_none() {
                return Err(TitleError::RangeOutOfSequence {
                    kind: "season",
                    from: season.range.from,
                });
            }
            for episode in &season.episodes {
                if episode.resolve(count).is_none() {
                    return Err(TitleError::RangeOutOfSequence {
                        kind: "episode",
                        from: episode.from,
                    });
                }
            }
        }
        self.splits.validate(|number| {
            let index = (number as usize).checked_sub(1)?;
            self.chapters.pages_of(index).ok()
        })?;
        for entry in self.splits.iter() {
            if !self.is_group_edge(entry.chapter) {
                log::warn!(
                    "split entry for chapter {} is not a boundary of any group",
                    entry.chapter
                );
            }
        }
        Ok(())
    }

    /// Whether any range in any grouping starts or ends at this chapter.
    fn is_group_edge(&self, chapter_number: u32) -> bool {
        let count = self.chapters.chapter_count();
        let edges = |range: &ChapterRange| {
            range.from == chapter_number || range.last_number(count) == Some(chapter_number)
        };
        self.arcs.iter().any(edges)
            || self.sagas.iter().any(edges)
            || self.seasons.iter().any(|season| {
                edges(&season.range) || season.episodes.iter().any(edges)
            })
    }
}
