//! The two sizing policies.
//!
//! Unbounded width is an absolute page-to-width ratio, so long volumes take
//! more room than short ones. Bounded width gives every volume the same
//! nominal span and sizes each chapter by its page share of its own volume.
//! Both are total pure functions; the only failure is a zero-page volume
//! reaching the bounded divisor, which means the title data is corrupt.

use manga_timeline::ChapterTable;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Global sizing policy toggle, chosen per render call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingMode {
    /// Every volume spans the same nominal width.
    Bounded,
    /// Every chapter spans width proportional to its absolute page count.
    Unbounded,
}

/// Tunable width constants.
///
/// The scalar widths produced under this config are abstract; the shell maps
/// them to viewport units when styling bands.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Unbounded mode: width contributed per page.
    pub page_width_ratio: f32,
    /// Bounded mode: the fixed width every volume occupies.
    pub nominal_volume_width: f32,
}

impl LayoutConfig {
    /// Convenience for a bounded nominal width with the default page ratio.
    pub fn for_nominal_width(nominal_volume_width: f32) -> Self {
        Self {
            nominal_volume_width,
            ..Self::default()
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_ratio: 4.0,
            nominal_volume_width: 1000.0,
        }
    }
}

/// Full (unsplit) policy width of one chapter, in its own volume context.
pub(crate) fn chapter_policy_width(
    table: &ChapterTable,
    cfg: LayoutConfig,
    chapter_index: usize,
    mode: SizingMode,
) -> Result<f32, LayoutError> {
    let pages = table.pages_of(chapter_index)?;
    match mode {
        SizingMode::Unbounded => Ok(pages as f32 * cfg.page_width_ratio),
        SizingMode::Bounded => {
            let volume = table.volume_of(chapter_index)?;
            let total = table.volume_pages(volume)?;
            if total == 0 {
                return Err(LayoutError::DivisionByZero { volume });
            }
            Ok(pages as f32 * cfg.nominal_volume_width / total as f32)
        }
    }
}
