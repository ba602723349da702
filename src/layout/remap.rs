use crate::colour::Colour;
use crate::markup::ColourSpan;
use crate::wrap::WrapLine;

use super::{Line, Segment};

/// Reunite parsed colour spans with the wrapper's line boundaries.
///
/// The wrapper consumes markup-stripped text, so each span's char range and
/// each line's wrapper-emitted word ranges live in the same coordinate space.
/// Only word-covered ranges are sliced out of the span texts; between
/// consecutive words a single literal space is emitted, coloured like the
/// span covering the gap, so each line's segments concatenate to exactly the
/// wrapper's line text even when the source held a wider whitespace run.
/// Adjacent same-colour segments are merged, and a line whose words intersect
/// no span is dropped from the result.
pub(crate) fn remap_spans(spans: &[ColourSpan], wrapped: &[WrapLine]) -> Vec<Line> {
    // char offsets of each span within the markup-stripped text
    let mut ranges: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    let mut pos = 0;
    for span in spans {
        let len = span.text.chars().count();
        ranges.push((pos, pos + len));
        pos += len;
    }

    let mut lines: Vec<Line> = Vec::new();
    for line in wrapped {
        let mut segments: Vec<Segment> = Vec::new();
        for (i, &(word_start, word_end)) in line.words.iter().enumerate() {
            if i > 0 {
                let gap = line.words[i - 1].1;
                if let Some(colour) = colour_at(spans, &ranges, gap) {
                    push_segment(&mut segments, " ".to_string(), colour);
                }
            }
            for (span, &(span_start, span_end)) in spans.iter().zip(&ranges) {
                if span_end <= word_start || span_start >= word_end {
                    continue;
                }
                let overlap_start = span_start.max(word_start);
                let overlap_end = span_end.min(word_end);
                let text: String = span
                    .text
                    .chars()
                    .skip(overlap_start - span_start)
                    .take(overlap_end - overlap_start)
                    .collect();
                if !text.is_empty() {
                    push_segment(&mut segments, text, span.colour);
                }
            }
        }
        if !segments.is_empty() {
            lines.push(Line { segments });
        }
    }
    lines
}

/// The colour of the span covering char offset `pos`, if any span does.
fn colour_at(spans: &[ColourSpan], ranges: &[(usize, usize)], pos: usize) -> Option<Colour> {
    spans
        .iter()
        .zip(ranges)
        .find(|(_, &(start, end))| start <= pos && pos < end)
        .map(|(span, _)| span.colour)
}

/// Append a segment, merging it into the previous one when the colour
/// matches so each span still yields one contiguous segment per line.
fn push_segment(segments: &mut Vec<Segment>, text: String, colour: Colour) {
    if let Some(last) = segments.last_mut() {
        if last.colour == colour {
            last.text.push_str(&text);
            return;
        }
    }
    segments.push(Segment { text, colour });
}
