//! Timeline data model for serialized manga/anime works.
//!
//! A title is a flat chapter sequence measured in pages, partitioned into
//! volumes and grouped by overlapping arc/saga/season/episode ranges. This
//! crate owns that data model; the proportional width engine that turns it
//! into renderable band widths lives in `manga-timeline-layout`.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod chapters;
pub mod error;
pub mod groups;
pub mod splits;
pub mod title;

pub use chapters::ChapterTable;
pub use error::TitleError;
pub use groups::{ChapterRange, GroupKind, Season};
pub use splits::{PageSplit, SplitChapterMap, SplitEntry};
pub use title::TimelineData;
