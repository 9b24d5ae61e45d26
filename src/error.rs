//! Error types for the timeline data model.

/// Data-model error.
///
/// Construction-time variants (`InvalidVolumePartition`, `InvalidSplit`,
/// `EmptyChapter`) indicate a per-title table that violates the model
/// invariants; access-time variants indicate a caller passed an index
/// outside the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TitleError {
    /// Chapter index outside `[0, chapter_count)`.
    ChapterOutOfRange { index: usize, count: usize },
    /// Volume index outside `[0, volume_count)`.
    VolumeOutOfRange { index: usize, count: usize },
    /// Volume start table is empty, unsorted, or points past the chapters.
    InvalidVolumePartition { detail: &'static str },
    /// Split entry whose page count is not strictly inside its chapter.
    InvalidSplit { chapter: u32 },
    /// Chapter with a zero page count.
    EmptyChapter { index: usize },
    /// Group range referencing chapter numbers outside the sequence.
    RangeOutOfSequence { kind: &'static str, from: u32 },
}

impl core::fmt::Display for TitleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ChapterOutOfRange { index, count } => {
                write!(f, "chapter index out of range: {} (count={})", index, count)
            }
            Self::VolumeOutOfRange { index, count } => {
                write!(f, "volume index out of range: {} (count={})", index, count)
            }
            Self::InvalidVolumePartition { detail } => {
                write!(f, "invalid volume partition: {}", detail)
            }
            Self::InvalidSplit { chapter } => {
                write!(f, "invalid split for chapter {}", chapter)
            }
            Self::EmptyChapter { index } => {
                write!(f, "chapter {} has zero pages", index)
            }
            Self::RangeOutOfSequence { kind, from } => {
                write!(f, "{} range starting at chapter {} leaves the sequence", kind, from)
            }
        }
    }
}

impl std::error::Error for TitleError {}
