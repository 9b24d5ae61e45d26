//! Uniform range-to-width aggregation.
//!
//! Arcs, sagas, seasons, and (in unbounded mode) volumes are all the same
//! computation: walk a chapter range, sum each chapter's policy width, and
//! let only the range's boundary chapters contribute fractionally. A
//! boundary chapter is trimmed when two conditions meet: the neighboring
//! group in the *same list* structurally shares it, and the split table
//! records where the pages divide. A split entry alone never trims; the
//! entry may belong to a different grouping dimension (an episode split
//! interior to a season must not shrink the season).
//!
//! Tie-break: a range's start boundary consumes the chapter's *later*
//! portion (the range opens mid-chapter), its end boundary the *earlier*
//! portion (the range closes mid-chapter). A single-chapter range with both
//! endpoints shared resolves end-first.

use manga_timeline::{ChapterRange, TimelineData};

use crate::error::LayoutError;
use crate::width_policy::{chapter_policy_width, LayoutConfig, SizingMode};

/// Structural boundary-sharing hint for one range within its group list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BoundarySharing {
    /// The previous group's range still covers this range's first chapter.
    pub start_shared: bool,
    /// The next group's range starts at or before this range's last chapter.
    pub end_shared: bool,
}

/// Derive the sharing hint for a range from its neighbors in a group list.
pub(crate) fn sharing_from_neighbors(
    prev: Option<ChapterRange>,
    range: ChapterRange,
    next: Option<ChapterRange>,
    chapter_count: usize,
) -> BoundarySharing {
    let start_shared = prev
        .and_then(|prev| prev.last_number(chapter_count))
        .is_some_and(|prev_last| prev_last >= range.from);
    let end_shared = match (next, range.last_number(chapter_count)) {
        (Some(next), Some(last)) => next.from <= last,
        _ => false,
    };
    BoundarySharing {
        start_shared,
        end_shared,
    }
}

/// Derive the sharing hint for `list[index]` from its neighbors.
pub(crate) fn sharing_in_list(
    list: &[ChapterRange],
    index: usize,
    chapter_count: usize,
) -> BoundarySharing {
    let Some(range) = list.get(index) else {
        return BoundarySharing::default();
    };
    let prev = index.checked_sub(1).and_then(|prev| list.get(prev));
    sharing_from_neighbors(prev.copied(), *range, list.get(index + 1).copied(), chapter_count)
}

/// Total width of one chapter range under the given mode.
///
/// `kind` names the grouping for error reporting. Empty ranges sum to zero;
/// ranges that leave the chapter sequence are `MissingGroupData`.
pub(crate) fn band_width(
    data: &TimelineData,
    cfg: LayoutConfig,
    range: ChapterRange,
    sharing: BoundarySharing,
    mode: SizingMode,
    kind: &'static str,
) -> Result<f32, LayoutError> {
    let chapter_count = data.chapters.chapter_count();
    let indices = range
        .resolve(chapter_count)
        .ok_or(LayoutError::MissingGroupData {
            kind,
            from: range.from,
            chapter_count,
        })?;
    let mut total = 0.0f32;
    for index in indices.clone() {
        let pages = data.chapters.pages_of(index)?;
        let full = chapter_policy_width(&data.chapters, cfg, index, mode)?;
        let number = (index + 1) as u32;
        let portion = if index + 1 == indices.end && sharing.end_shared {
            data.splits.split_of(number, pages).map(|split| split.earlier)
        } else if index == indices.start && sharing.start_shared {
            data.splits.split_of(number, pages).map(|split| split.later)
        } else {
            None
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
        TimelineData {
            chapters: ChapterTable::new(vec![10, 20, 20, 30], vec![0, 2]).unwrap(),
            arcs: vec![ChapterRange::new(1, 4), ChapterRange::new(3, 5)],
            sagas: Vec::new(),
            seasons: Vec::new(),
            splits: SplitChapterMap::from_entries([SplitEntry {
                chapter: 3,
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
    fn interior_chapters_contribute_full_width() {
        let data = data();
        let width = band_width(
            &data,
            unit_cfg(),
            ChapterRange::new(1, 3),
            BoundarySharing::default(),
            SizingMode::Unbounded,
            "arc",
        )
        .unwrap();
        assert!((width - 30.0).abs() < 1e-4);
    }

    #[test]
    fn shared_boundaries_split_the_chapter() {
        let data = data();
        let first = sharing_in_list(&data.arcs, 0, 4);
        let second = sharing_in_list(&data.arcs, 1, 4);
        assert!(first.end_shared && !first.start_shared);
        assert!(second.start_shared && !second.end_shared);

        let head = band_width(
            &data,
            unit_cfg(),
            data.arcs[0],
            first,
            SizingMode::Unbounded,
            "arc",
        )
        .unwrap();
        let tail = band_width(
            &data,
            unit_cfg(),
            data.arcs[1],
            second,
            SizingMode::Unbounded,
            "arc",
        )
        .unwrap();
        // Chapter 3 (20 pages, split 12/8) is divided between the two arcs.
        assert!((head - (10.0 + 20.0 + 12.0)).abs() < 1e-4);
        assert!((tail - (8.0 + 30.0)).abs() < 1e-4);
    }

    #[test]
    fn unshared_split_chapter_stays_whole() {
        // The split entry exists, but this list has no neighbor claiming
        // the tail, so the full chapter belongs to the range.
        let data = data();
        let width = band_width(
            &data,
            unit_cfg(),
            ChapterRange::new(1, 4),
            BoundarySharing::default(),
            SizingMode::Unbounded,
            "saga",
        )
        .unwrap();
        assert!((width - 50.0).abs() < 1e-4);
    }

    #[test]
    fn range_leaving_the_sequence_is_missing_data() {
        let data = data();
        let err = band_width(
            &data,
            unit_cfg(),
            ChapterRange::new(2, 9),
            BoundarySharing::default(),
            SizingMode::Unbounded,
            "arc",
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingGroupData {
                kind: "arc",
                from: 2,
                chapter_count: 4
            }
        );
    }

    #[test]
    fn empty_range_sums_to_zero() {
        let data = data();
        let width = band_width(
            &data,
            unit_cfg(),
            ChapterRange::new(3, 3),
            BoundarySharing::default(),
            SizingMode::Bounded,
            "arc",
        )
        .unwrap();
        assert_eq!(width, 0.0);
    }
}
