use crate::colour::Colour;

/// A maximal run of text sharing one colour tag. The spans produced by
/// [parse_markup] partition the input exactly: concatenating their texts
/// yields the input with every `RED{…}` tag replaced by its inner text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ColourSpan {
    pub text: String,
    pub colour: Colour,
}

impl ColourSpan {
    fn new(text: impl Into<String>, colour: Colour) -> ColourSpan {
        ColourSpan {
            text: text.into(),
            colour,
        }
    }
}

/// Scanner states for [parse_markup].
enum ScanState {
    /// Accumulating plain black text, watching for a `RED{` opener.
    Outside,
    /// Between a `RED{` opener and its closing `}`.
    Inside,
}

/// Split raw message text into colour-tagged spans.
///
/// The only markup recognized is `RED{…}` (non-nested, shortest match
/// between an opener and the next `}`). Text outside tags becomes black
/// spans; zero-length spans are never emitted. Malformed markup never fails:
/// an unterminated `RED{` is not a tag and stays in the output as literal
/// black text, and input containing no usable markup at all comes back as a
/// single black span, even when empty.
pub fn parse_markup(raw: &str) -> Vec<ColourSpan> {
    const OPENER: [char; 4] = ['R', 'E', 'D', '{'];

    let chars: Vec<char> = raw.chars().collect();
    let mut spans: Vec<ColourSpan> = Vec::new();
    let mut black = String::new();
    let mut inner = String::new();
    let mut state = ScanState::Outside;

    let mut i = 0;
    while i < chars.len() {
        match state {
            ScanState::Outside => {
                if chars[i..].starts_with(&OPENER) {
                    state = ScanState::Inside;
                    i += OPENER.len();
                } else {
                    black.push(chars[i]);
                    i += 1;
                }
            }
            ScanState::Inside => {
                if chars[i] == '}' {
                    if !black.is_empty() {
                        spans.push(ColourSpan::new(std::mem::take(&mut black), Colour::Black));
                    }
                    if !inner.is_empty() {
                        spans.push(ColourSpan::new(std::mem::take(&mut inner), Colour::Red));
                    }
                    state = ScanState::Outside;
                } else {
                    inner.push(chars[i]);
                }
                i += 1;
            }
        }
    }

    // an opener with no closing brace is not a tag; flush it back as literal text
    if let ScanState::Inside = state {
        black.push_str("RED{");
        black.push_str(&inner);
    }
    if !black.is_empty() {
        spans.push(ColourSpan::new(black, Colour::Black));
    }

    if spans.is_empty() {
        // nothing survived (no markup, or only empty tags): the whole input
        // is one black span, even when empty
        return vec![ColourSpan::new(raw, Colour::Black)];
    }
    spans
}

/// The input with markup syntax removed: all span texts concatenated.
pub fn clean_text(spans: &[ColourSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black(text: &str) -> ColourSpan {
        ColourSpan::new(text, Colour::Black)
    }

    fn red(text: &str) -> ColourSpan {
        ColourSpan::new(text, Colour::Red)
    }

    #[test]
    fn plain_text_is_a_single_black_span() {
        assert_eq!(parse_markup("plain text"), vec![black("plain text")]);
    }

    #[test]
    fn empty_input_is_a_single_empty_black_span() {
        assert_eq!(parse_markup(""), vec![black("")]);
    }

    #[test]
    fn single_tag_splits_into_two_spans() {
        assert_eq!(
            parse_markup("Hello RED{World}"),
            vec![black("Hello "), red("World")]
        );
    }

    #[test]
    fn multiple_tags_keep_interleaved_black_runs() {
        assert_eq!(
            parse_markup("Hello RED{World} from RED{Bot}"),
            vec![black("Hello "), red("World"), black(" from "), red("Bot")]
        );
    }

    #[test]
    fn whitespace_only_runs_between_tags_are_kept() {
        assert_eq!(
            parse_markup("RED{a} RED{b}"),
            vec![red("a"), black(" "), red("b")]
        );
    }

    #[test]
    fn unterminated_opener_stays_literal() {
        assert_eq!(parse_markup("oops RED{missing"), vec![black("oops RED{missing")]);
    }

    #[test]
    fn empty_tag_falls_back_to_the_raw_input() {
        assert_eq!(parse_markup("RED{}"), vec![black("RED{}")]);
    }

    #[test]
    fn shortest_match_takes_the_first_closing_brace() {
        assert_eq!(
            parse_markup("RED{a RED{b}c"),
            vec![red("a RED{b"), black("c")]
        );
    }

    #[test]
    fn stray_closing_brace_is_ordinary_text() {
        assert_eq!(
            parse_markup("a} RED{b}"),
            vec![black("a} "), red("b")]
        );
    }

    #[test]
    fn spans_cover_the_detagged_input() {
        let raw = "one RED{two} three RED{four} five";
        let spans = parse_markup(raw);
        assert_eq!(clean_text(&spans), "one two three four five");
        assert!(spans.iter().all(|span| !span.text.is_empty()));
    }
}
