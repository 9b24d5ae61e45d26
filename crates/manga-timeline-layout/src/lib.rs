//! Proportional band-width layout engine for `manga-timeline`.
//!
//! Turns a title's chapter/volume/arc/saga/season/episode description into
//! deterministic band widths under two sizing policies: bounded (every
//! volume spans the same nominal width, chapters sized by page share) and
//! unbounded (every chapter sized by an absolute page-to-width ratio).
//! Chapters adapted across two adjacent groups contribute fractionally to
//! each, and parts always sum back to the whole.

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

mod band_map;
mod band_width;
mod episode_width;
mod error;
mod layout_engine;
mod width_policy;

pub use band_map::{BandMap, BandSpan};
pub use error::LayoutError;
pub use layout_engine::LayoutEngine;
pub use width_policy::{LayoutConfig, SizingMode};
