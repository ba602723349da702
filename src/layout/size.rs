use log::debug;

use crate::error::LayoutError;
use crate::font::{FontProvider, TextMetrics};
use crate::units::Px;
use crate::wrap::wrap_text;

use super::{block_height, line_spacing};

/// First font size the search attempts; nothing smaller is ever tried.
const MIN_FONT_SIZE: u32 = 10;

/// Hard cap on the search, bounding iteration for pathological inputs.
const MAX_FONT_SIZE: u32 = 300;

/// Safety inflation applied to the measured block height while searching.
const SEARCH_HEIGHT_MARGIN: f32 = 1.10;

/// Find the largest font size at which the word-wrapped `text` fits within
/// `max_width` × `max_height`.
///
/// The scan walks sizes upward from [MIN_FONT_SIZE] and returns the last
/// size whose inflated block height still fit, stopping at the first size
/// that overflows or at [MAX_FONT_SIZE]. When even the smallest size
/// overflows it is returned anyway: a result of 10 means "no smaller size
/// was attempted", not "guaranteed to fit", so callers needing a hard
/// guarantee must re-check the resulting layout's total height.
pub fn find_fitting_size<P: FontProvider>(
    text: &str,
    max_width: Px,
    max_height: Px,
    provider: &P,
    family: &str,
) -> Result<u32, LayoutError> {
    let mut best = MIN_FONT_SIZE;

    for size in MIN_FONT_SIZE..=MAX_FONT_SIZE {
        let font = provider.load(family, size)?;
        let line_height = font.line_height();
        let lines = wrap_text(text, &font, max_width);
        let total = block_height(
            lines.len(),
            line_height,
            line_spacing(size),
            SEARCH_HEIGHT_MARGIN,
        );

        if total > max_height {
            debug!("font size {size} needs {total}px of {max_height}px; settling on {best}");
            return Ok(best);
        }
        best = size;
    }

    debug!("font size search for {family:?} hit the {MAX_FONT_SIZE} cap");
    Ok(best)
}
