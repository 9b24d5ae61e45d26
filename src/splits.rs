//! Split-chapter lookup.
//!
//! A split chapter is one whose pages are adapted across two adjacent
//! groups: the tail of one episode (or arc) covers the chapter's opening
//! pages and the next group opens mid-chapter. The map records, per chapter
//! number, how many pages the earlier claimant consumes. Most chapters are
//! never split; absence is the normal case, not an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::TitleError;

/// One split record: `earlier_pages` pages belong to the earlier claimant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    /// 1-based chapter number.
    pub chapter: u32,
    /// Pages consumed by the earlier of the two claiming groups.
    pub earlier_pages: u32,
}

/// A chapter's page split between its two claiming groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSplit {
    /// Pages owned by the group the chapter ends in.
    pub earlier: u32,
    /// Pages owned by the group the chapter starts the tail of.
    pub later: u32,
}

/// Sorted table of split chapters, keyed by 1-based chapter number.
///
/// Split tables are tiny in practice (a handful of entries per title), so
/// the entries live inline until they outgrow the stack buffer.
/// Deserialization funnels through [`SplitChapterMap::from_entries`], which
/// keeps the table sorted for lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SplitTableData", into = "SplitTableData")]
pub struct SplitChapterMap {
    entries: SmallVec<[SplitEntry; 8]>,
}

/// Wire form of [`SplitChapterMap`]: entries in any order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct SplitTableData {
    entries: Vec<SplitEntry>,
}

impl From<SplitTableData> for SplitChapterMap {
    fn from(data: SplitTableData) -> Self {
        Self::from_entries(data.entries)
    }
}

impl From<SplitChapterMap> for SplitTableData {
    fn from(map: SplitChapterMap) -> Self {
        Self {
            entries: map.entries.into_iter().collect(),
        }
    }
}

impl SplitChapterMap {
    /// Empty map: no chapter is split.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(chapter number, earlier pages)` records.
    ///
    /// Entries are sorted by chapter number; duplicates keep the last record.
    pub fn from_entries(entries: impl IntoIterator<Item = SplitEntry>) -> Self {
        let mut collected: SmallVec<[SplitEntry; 8]> = entries.into_iter().collect();
        collected.sort_by_key(|entry| entry.chapter);
        collected.dedup_by(|next, prev| {
            if next.chapter == prev.chapter {
                prev.earlier_pages = next.earlier_pages;
                true
            } else {
                false
            }
        });
        Self { entries: collected }
    }

    /// Number of split chapters recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no chapter is split.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the recorded entries in chapter order.
    pub fn iter(&self) -> impl Iterator<Item = &SplitEntry> {
        self.entries.iter()
    }

    /// Pages the earlier claimant consumes, if the chapter is split.
    pub fn earlier_pages(&self, chapter_number: u32) -> Option<u32> {
        self.entries
            .binary_search_by_key(&chapter_number, |entry| entry.chapter)
            .ok()
            .map(|position| self.entries[position].earlier_pages)
    }

    /// Resolve a chapter's split against its full page count.
    ///
    /// `None` means the chapter is unsplit and whichever single group
    /// requests it owns the whole page count. When present, the claimant
    /// side is decided structurally by the caller: the group the chapter
    /// *ends* in takes `earlier`, the group opening mid-chapter takes
    /// `later`.
    pub fn split_of(&self, chapter_number: u32, full_pages: u32) -> Option<PageSplit> {
        let earlier = self.earlier_pages(chapter_number)?;
        Some(PageSplit {
            earlier,
            later: full_pages.saturating_sub(earlier),
        })
    }

    /// Check every entry against the page count its chapter actually has.
    ///
    /// A split must leave both claimants at least one page.
    pub fn validate(
        &self,
        pages_of: impl Fn(u32) -> Option<u32>,
    ) -> Result<(), TitleError> {
        for entry in &self.entries {
            let Some(full) = pages_of(entry.chapter) else {
                return Err(TitleError::InvalidSplit {
                    chapter: entry.chapter,
                });
            };
            if entry.earlier_pages == 0 || entry.earlier_pages >= full {
                return Err(TitleError::InvalidSplit {
                    chapter: entry.chapter,
                });
            }
        }
        Ok(())
    }
}
