//! Utility functions and structures to lay out colour-tagged message text
//! within a pixel bounding box.

mod position;
mod remap;
mod size;

pub use position::*;
pub use size::*;

use log::debug;

use crate::colour::Colour;
use crate::error::LayoutError;
use crate::font::{FontProvider, TextMetrics};
use crate::markup::{clean_text, parse_markup};
use crate::units::Px;
use crate::wrap::wrap_text;

/// Fraction of the font size inserted as vertical spacing between
/// consecutive lines.
const LINE_SPACING_FACTOR: f32 = 0.2;

/// Safety inflation applied to the measured block height in the final layout
/// pass, absorbing panel-to-panel rendering variation.
const LAYOUT_HEIGHT_MARGIN: f32 = 1.05;

/// A run of same-coloured text within one wrapped line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    pub text: String,
    pub colour: Colour,
}

/// One wrapped line: an ordered list of coloured segments whose texts
/// concatenate to the line's string, with no gaps or overlaps and no segment
/// spanning a line boundary.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    /// The line's full text, all segments concatenated.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A finished layout: wrapped, colour-tagged lines plus the vertical metrics
/// needed to place the block on a canvas. Immutable; built fresh per layout
/// request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Layout {
    pub lines: Vec<Line>,
    pub font_size: u32,
    pub line_height: Px,
    /// Block height including inter-line spacing and the safety margin.
    pub total_height: Px,
}

impl Layout {
    /// Vertical gap inserted between consecutive lines (never after the
    /// last).
    pub fn line_spacing(&self) -> Px {
        line_spacing(self.font_size)
    }
}

pub(crate) fn line_spacing(font_size: u32) -> Px {
    Px((font_size as f32 * LINE_SPACING_FACTOR) as i32)
}

/// Height of a block of `line_count` lines including inter-line spacing,
/// inflated by `margin`.
pub(crate) fn block_height(line_count: usize, line_height: Px, spacing: Px, margin: f32) -> Px {
    if line_count == 0 {
        return Px::ZERO;
    }
    let mut height = line_height * line_count as i32;
    if line_count > 1 {
        height += spacing * (line_count as i32 - 1);
    }
    height.scaled(margin)
}

/// Lay out `raw` (possibly containing `RED{…}` markup) at a known font size,
/// measuring with `metrics`: parse the markup, word-wrap the markup-stripped
/// text to `max_width`, and reunite the colour spans with the wrapped lines.
///
/// Never fails: malformed markup degrades to literal text and empty input
/// yields a layout with no lines and zero height. Fit is best-effort — a
/// layout taller than the caller's box is returned as-is, so callers needing
/// a hard guarantee must check `total_height` themselves.
pub fn layout_text<M: TextMetrics>(raw: &str, metrics: &M, font_size: u32, max_width: Px) -> Layout {
    let spans = parse_markup(raw);
    let clean = clean_text(&spans);
    let wrapped = wrap_text(&clean, metrics, max_width);
    let lines = remap::remap_spans(&spans, &wrapped);

    let line_height = metrics.line_height();
    let total_height = block_height(
        lines.len(),
        line_height,
        line_spacing(font_size),
        LAYOUT_HEIGHT_MARGIN,
    );
    debug!(
        "laid out {} line(s) at size {font_size}: line_height={line_height}px, total_height={total_height}px",
        lines.len()
    );

    Layout {
        lines,
        font_size,
        line_height,
        total_height,
    }
}

/// Lay out `raw` at a caller-chosen font size, loading the font from
/// `provider`.
pub fn layout_text_fixed<P: FontProvider>(
    raw: &str,
    font_size: u32,
    max_width: Px,
    provider: &P,
    family: &str,
) -> Result<Layout, LayoutError> {
    let font = provider.load(family, font_size)?;
    Ok(layout_text(raw, &font, font_size, max_width))
}

/// Search for the largest font size whose wrapped layout fits within
/// `max_width` × `max_height`, then lay out `raw` at that size.
pub fn layout_text_auto<P: FontProvider>(
    raw: &str,
    max_width: Px,
    max_height: Px,
    provider: &P,
    family: &str,
) -> Result<Layout, LayoutError> {
    let spans = parse_markup(raw);
    let clean = clean_text(&spans);
    let font_size = find_fitting_size(&clean, max_width, max_height, provider, family)?;
    layout_text_fixed(raw, font_size, max_width, provider, family)
}
