//! Ordered chapter sequence with its volume partition.
//!
//! A title's chapters are a single flat sequence measured in pages. Volumes
//! partition that sequence exhaustively and without overlap: volume `i` owns
//! the chapter indices `[volume_starts[i], volume_starts[i + 1])`. Per-volume
//! page totals are computed once at construction so repeated queries always
//! agree.

use core::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::TitleError;

/// Per-chapter page counts plus the volume partition over them.
///
/// Indices are 0-based throughout; chapter *numbers* (1-based, as printed on
/// the spines) live in [`crate::groups::ChapterRange`] and convert via
/// `number - 1`. Deserialization goes through [`ChapterTable::new`], so a
/// table that exists always satisfies the partition invariants and carries a
/// consistent per-volume total cache.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChapterTableData", into = "ChapterTableData")]
pub struct ChapterTable {
    pages: Vec<u32>,
    volume_starts: Vec<u32>,
    volume_pages: Vec<u32>,
}

/// Wire form of [`ChapterTable`]: the two source columns, no cache.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ChapterTableData {
    pages: Vec<u32>,
    volume_starts: Vec<u32>,
}

impl TryFrom<ChapterTableData> for ChapterTable {
    type Error = TitleError;

    fn try_from(data: ChapterTableData) -> Result<Self, TitleError> {
        Self::new(data.pages, data.volume_starts)
    }
}

impl From<ChapterTable> for ChapterTableData {
    fn from(table: ChapterTable) -> Self {
        Self {
            pages: table.pages,
            volume_starts: table.volume_starts,
        }
    }
}

impl ChapterTable {
    /// Build a table from per-chapter page counts and volume start indices.
    ///
    /// `volume_starts[i]` is the 0-based index of volume `i`'s first chapter;
    /// the table must begin with `0`, increase strictly, and stay below the
    /// chapter count. Every chapter must have at least one page.
    pub fn new(pages: Vec<u32>, volume_starts: Vec<u32>) -> Result<Self, TitleError> {
        if let Some(index) = pages.iter().position(|&p| p == 0) {
            return Err(TitleError::EmptyChapter { index });
        }
        validate_partition(&volume_starts, pages.len())?;
        let volume_pages = roll_up_volume_pages(&pages, &volume_starts);
        Ok(Self {
            pages,
            volume_starts,
            volume_pages,
        })
    }

    /// Number of chapters in the sequence.
    pub fn chapter_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of volumes in the partition.
    pub fn volume_count(&self) -> usize {
        self.volume_starts.len()
    }

    /// Page count of one chapter.
    pub fn pages_of(&self, chapter_index: usize) -> Result<u32, TitleError> {
        self.pages
            .get(chapter_index)
            .copied()
            .ok_or(TitleError::ChapterOutOfRange {
                index: chapter_index,
                count: self.pages.len(),
            })
    }

    /// Volume owning a chapter, by binary search over the start table.
    pub fn volume_of(&self, chapter_index: usize) -> Result<usize, TitleError> {
        if chapter_index >= self.pages.len() {
            return Err(TitleError::ChapterOutOfRange {
                index: chapter_index,
                count: self.pages.len(),
            });
        }
        let position = self
            .volume_starts
            .partition_point(|&start| start as usize <= chapter_index);
        Ok(position - 1)
    }

    /// Cached total page count of one volume.
    pub fn volume_pages(&self, volume_index: usize) -> Result<u32, TitleError> {
        self.volume_pages
            .get(volume_index)
            .copied()
            .ok_or(TitleError::VolumeOutOfRange {
                index: volume_index,
                count: self.volume_starts.len(),
            })
    }

    /// Half-open 0-based chapter index range one volume owns.
    pub fn volume_chapters(&self, volume_index: usize) -> Result<Range<usize>, TitleError> {
        let start = self
            .volume_starts
            .get(volume_index)
            .copied()
            .ok_or(TitleError::VolumeOutOfRange {
                index: volume_index,
                count: self.volume_starts.len(),
            })?;
        let end = self
            .volume_starts
            .get(volume_index + 1)
            .map_or(self.pages.len(), |&next| next as usize);
        Ok(start as usize..end)
    }
}

fn validate_partition(volume_starts: &[u32], chapter_count: usize) -> Result<(), TitleError> {
    if chapter_count == 0 {
        return Err(TitleError::InvalidVolumePartition {
            detail: "no chapters",
        });
    }
    match volume_starts.first() {
        Some(&0) => {}
        _ => {
            return Err(TitleError::InvalidVolumePartition {
                detail: "first volume must start at chapter 0",
            })
        }
    }
    for pair in volume_starts.windows(2) {
        if pair[1] <= pair[0] {
            return Err(TitleError::InvalidVolumePartition {
                detail: "volume starts must increase strictly",
            });
        }
    }
    if volume_starts
        .last()
        .is_some_and(|&last| last as usize >= chapter_count)
    {
        return Err(TitleError::InvalidVolumePartition {
            detail: "volume start past final chapter",
        });
    }
    Ok(())
}

fn roll_up_volume_pages(pages: &[u32], volume_starts: &[u32]) -> Vec<u32> {
    let mut totals = Vec::with_capacity(volume_starts.len());
    for (volume, &start) in volume_starts.iter().enumerate() {
        let end = volume_starts
            .get(volume + 1)
            .map_or(pages.len(), |&next| next as usize);
        let total = pages[start as usize..end].iter().sum();
        totals.push(total);
    }
    totals
}
