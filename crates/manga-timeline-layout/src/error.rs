//! Layout engine errors.

use manga_timeline::TitleError;

/// Width computation error.
///
/// Every failure is deterministic: the same inputs fail the same way, so
/// nothing here is worth retrying. `IndexOutOfRange` is a caller bug;
/// `DivisionByZero` means the title data violates the non-empty-volume
/// invariant and layout for that title should be abandoned rather than
/// rendered zero-width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Unit index outside the valid unit count for its kind.
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        count: usize,
    },
    /// A volume with zero total pages reached the bounded policy.
    DivisionByZero { volume: usize },
    /// A group range references chapters outside the known sequence.
    MissingGroupData {
        kind: &'static str,
        from: u32,
        chapter_count: usize,
    },
    /// Data-model access failed underneath the engine.
    Title(TitleError),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange { kind, index, count } => {
                write!(f, "{} index out of range: {} (count={})", kind, index, count)
            }
            Self::DivisionByZero { volume } => {
                write!(f, "volume {} has zero pages; bounded width undefined", volume)
            }
            Self::MissingGroupData {
                kind,
                from,
                chapter_count,
            } => write!(
                f,
                "{} range starting at chapter {} references chapters beyond count {}",
                kind, from, chapter_count
            ),
            Self::Title(err) => write!(f, "title data error: {}", err),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<TitleError> for LayoutError {
    fn from(value: TitleError) -> Self {
        Self::Title(value)
    }
}
