use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::font::TextMetrics;
use crate::units::Px;

use super::Layout;

/// Minimum distance kept between the top of the canvas and the first line,
/// even when the block is too tall to centre.
const MIN_TOP_MARGIN: Px = Px(10);

/// One drawable run of same-coloured text with its final canvas position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PositionedSegment {
    pub x: Px,
    pub y: Px,
    pub text: String,
    pub colour: Colour,
}

/// A wrapped line placed on the canvas; `x`/`y` is the line's top-left
/// corner, and every segment in the line shares the `y`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PositionedLine {
    pub x: Px,
    pub y: Px,
    pub segments: Vec<PositionedSegment>,
}

/// Place a layout's lines on `canvas` as a centred block.
///
/// The block is centred vertically, never closer than [MIN_TOP_MARGIN] to
/// the top. Each line is centred horizontally on the sum of its segments'
/// individually measured widths — deliberately not one whole-line
/// measurement, so centring matches how the segments will actually be drawn,
/// each advancing x by its own width.
pub fn position_layout<M: TextMetrics>(
    layout: &Layout,
    metrics: &M,
    canvas: Canvas,
) -> Vec<PositionedLine> {
    let start_y = MIN_TOP_MARGIN.max((canvas.height - layout.total_height) / 2);
    let spacing = layout.line_spacing();

    let mut positioned = Vec::with_capacity(layout.lines.len());
    let mut y = start_y;
    for (i, line) in layout.lines.iter().enumerate() {
        if i > 0 {
            y += layout.line_height + spacing;
        }

        let widths: Vec<Px> = line
            .segments
            .iter()
            .map(|segment| metrics.text_width(&segment.text))
            .collect();
        let line_width: Px = widths.iter().copied().sum();
        // a line wider than the canvas (forced single-character lines can be)
        // centres at a negative x; the division truncates toward zero, so odd
        // overflows land one pixel right of a flooring division
        let line_x = (canvas.width - line_width) / 2;

        let mut x = line_x;
        let mut segments = Vec::with_capacity(line.segments.len());
        for (segment, width) in line.segments.iter().zip(widths) {
            segments.push(PositionedSegment {
                x,
                y,
                text: segment.text.clone(),
                colour: segment.colour,
            });
            x += width;
        }

        positioned.push(PositionedLine {
            x: line_x,
            y,
            segments,
        });
    }
    positioned
}

/// Sink for draw calls. The engine computes `(x, y, text, colour)` tuples;
/// implementors own the pixels.
pub trait Renderer {
    fn draw_segment(&mut self, x: Px, y: Px, text: &str, colour: Colour);
}

/// Walk positioned lines top-to-bottom, segments left-to-right, handing each
/// segment to `renderer`.
pub fn render<R: Renderer>(lines: &[PositionedLine], renderer: &mut R) {
    for line in lines {
        for segment in &line.segments {
            renderer.draw_segment(segment.x, segment.y, &segment.text, segment.colour);
        }
    }
}
