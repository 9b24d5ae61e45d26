//! Episode width aggregation.
//!
//! Episodes subdivide a season at finer granularity than any other grouping:
//! consecutive episodes routinely each claim a fragment of the same chapter.
//! The boundary rule therefore keys on the season's edges rather than on
//! neighbor ranges: an episode's last chapter yields its tail to the next
//! episode whenever a split exists and the season continues past it, and an
//! episode's first chapter skips the head a previous episode already claimed
//! whenever a split exists and the season started earlier. The last-chapter
//! rule is checked first, so a single-chapter episode split mid-season takes
//! the earlier portion.

use manga_timeline::{ChapterRange, Season, TimelineData};

use crate::error::LayoutError;
use crate::width_policy::{chapter_policy_width, LayoutConfig, SizingMode};

/// Total width of one episode of a season under the given mode.
pub(crate) fn episode_width(
    data: &TimelineData,
    cfg: LayoutConfig,
    season: &Season,
    episode: ChapterRange,
    mode: SizingMode,
) -> Result<f32, LayoutError> {
    let chapter_count = data.chapters.chapter_count();
    let indices = episode
        .resolve(chapter_count)
        .ok_or(LayoutError::MissingGroupData {
            kind: "episode",
            from: episode.from,
            chapter_count,
        })?;
    let season_first = season.range.from;
    let season_last = season.range.last_number(chapter_count);

    let mut total = 0.0f32;
    for index in indices.clone() {
        let pages = data.chapters.pages_of(index)?;
        let full = chapter_policy_width(&data.chapters, cfg, index, mode)?;
        let number = (index + 1) as u32;
        let split = data.splits.split_of(number, pages);
        let portion = match split {
            Some(split) if index + 1 == indices.end && Some(number) != season_last => {
                Some(split.earlier)
            }
            Some(split) if index == indices.start && number != season_first => Some(split.later),
            _ => None,
        };
        total += match portion {
            Some(owned) => full * owned as f32 / pages as f32,
            None => full,
        };
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manga_timeline::{ChapterTable, SplitChapterMap, SplitEntry};

    fn data() -> TimelineData {
        let season = Season {
            range: ChapterRange::new(1, 6),
            episodes: vec![
                ChapterRange::new(1, 3),
                ChapterRange::new(2, 4),
                ChapterRange::new(4, 6),
            ],
        };
        TimelineData {
            chapters: ChapterTable::new(vec![10, 20, 16, 30, 14], vec![0]).unwrap(),
            arcs: Vec::new(),
            sagas: Vec::new(),
            seasons: vec![season],
            splits: SplitChapterMap::from_entries([SplitEntry {
                chapter: 2,
                earlier_pages: 12,
            }]),
        }
    }

    fn unit_cfg() -> LayoutConfig {
        LayoutConfig {
            page_width_ratio: 1.0,
            nominal_volume_width: 1000.0,
        }
    }

    #[test]
    fn adjacent_episodes_divide_a_split_chapter() {
        let data = data();
        let season = &data.seasons[0];
        let a = episode_width(&data, unit_cfg(), season, season.episodes[0], SizingMode::Unbounded)
            .unwrap();
        let b = episode_width(&data, unit_cfg(), season, season.episodes[1], SizingMode::Unbounded)
            .unwrap();
        // Chapter 2 (20 pages, split 12/8): episode 1 ends mid-chapter with
        // 12 pages, episode 2 opens on the remaining 8.
        assert!((a - (10.0 + 12.0)).abs() < 1e-4);
        assert!((b - (8.0 + 16.0)).abs() < 1e-4);
        assert!((a + b - (10.0 + 20.0 + 16.0)).abs() < 1e-4);
    }

    #[test]
    fn unsplit_boundaries_stay_whole() {
        let data = data();
        let season = &data.seasons[0];
        let c = episode_width(&data, unit_cfg(), season, season.episodes[2], SizingMode::Unbounded)
            .unwrap();
        assert!((c - (30.0 + 14.0)).abs() < 1e-4);
    }

    #[test]
    fn season_edges_never_trim() {
        // A split on the season's final chapter belongs to another grouping
        // dimension; the closing episode still takes the whole chapter.
        let mut data = data();
        data.splits = SplitChapterMap::from_entries([SplitEntry {
            chapter: 5,
            earlier_pages: 6,
        }]);
        let season = data.seasons[0].clone();
        let c = episode_width(&data, unit_cfg(), &season, season.episodes[2], SizingMode::Unbounded)
            .unwrap();
        assert!((c - (30.0 + 14.0)).abs() < 1e-4);
    }

    #[test]
    fn single_chapter_episode_takes_the_earlier_portion() {
        let mut data = data();
        data.seasons[0].episodes = vec![
            ChapterRange::new(1, 2),
            ChapterRange::new(2, 3),
            ChapterRange::new(2, 6),
        ];
        let season = data.seasons[0].clone();
        let solo = episode_width(&data, unit_cfg(), &season, season.episodes[1], SizingMode::Unbounded)
            .unwrap();
        assert!((solo - 12.0).abs() < 1e-4);
    }
}
