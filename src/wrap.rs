use crate::font::TextMetrics;
use crate::units::Px;

/// One wrapped line of markup-stripped text, along with the half-open char
/// ranges its words occupy in the text the wrapper consumed. The ranges are
/// emitted here, alongside the line itself, so downstream span re-mapping
/// never has to reconstruct global offsets; they are tracked per word rather
/// than as one interval per line because interior whitespace runs collapse
/// to single joining spaces and must not be sliced back out of the source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WrapLine {
    pub text: String,
    pub words: Vec<(usize, usize)>,
}

impl WrapLine {
    /// Char offset of the line's first word in the source text.
    pub fn start(&self) -> usize {
        self.words.first().map_or(0, |&(start, _)| start)
    }

    /// Char offset just past the line's last word in the source text.
    pub fn end(&self) -> usize {
        self.words.last().map_or(0, |&(_, end)| end)
    }
}

/// A word and its char offsets within the source text.
struct Word {
    text: String,
    start: usize,
    end: usize,
}

/// A line still accumulating words.
struct PartialLine {
    text: String,
    words: Vec<(usize, usize)>,
}

impl From<Word> for PartialLine {
    fn from(word: Word) -> PartialLine {
        PartialLine {
            text: word.text,
            words: vec![(word.start, word.end)],
        }
    }
}

impl From<PartialLine> for WrapLine {
    fn from(line: PartialLine) -> WrapLine {
        WrapLine {
            text: line.text,
            words: line.words,
        }
    }
}

fn split_words(text: &str) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    let mut current: Option<Word> = None;
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            if let Some(word) = current.take() {
                words.push(word);
            }
        } else {
            match current.as_mut() {
                Some(word) => {
                    word.text.push(ch);
                    word.end = i + 1;
                }
                None => {
                    current = Some(Word {
                        text: ch.to_string(),
                        start: i,
                        end: i + 1,
                    })
                }
            }
        }
    }
    if let Some(word) = current {
        words.push(word);
    }
    words
}

/// Greedily pack whitespace-separated words into lines measuring at most
/// `max_width`, joining words within a line by single spaces.
///
/// A word that cannot fit even on a line of its own is broken character by
/// character: the longest fitting prefix becomes its own line, repeatedly,
/// and when not even one character fits a single character is forced out
/// anyway so the wrap always makes progress. Forced single-character lines
/// are the only lines allowed to exceed `max_width`.
///
/// Empty or whitespace-only input produces an empty list, which callers must
/// treat distinctly from one empty line.
pub fn wrap_text<M: TextMetrics>(text: &str, metrics: &M, max_width: Px) -> Vec<WrapLine> {
    let mut lines: Vec<WrapLine> = Vec::new();
    let mut line: Option<PartialLine> = None;

    for word in split_words(text) {
        match line.take() {
            None => line = begin_line(word, metrics, max_width, &mut lines),
            Some(mut current) => {
                let trial = format!("{} {}", current.text, word.text);
                if metrics.text_width(&trial) <= max_width {
                    current.text = trial;
                    current.words.push((word.start, word.end));
                    line = Some(current);
                } else {
                    lines.push(current.into());
                    line = begin_line(word, metrics, max_width, &mut lines);
                }
            }
        }
    }

    if let Some(current) = line {
        lines.push(current.into());
    }
    lines
}

/// Start a fresh line from `word`, char-packing it first when it cannot fit
/// on a line of its own. Returns the still-accumulating remainder, if any.
fn begin_line<M: TextMetrics>(
    word: Word,
    metrics: &M,
    max_width: Px,
    lines: &mut Vec<WrapLine>,
) -> Option<PartialLine> {
    if metrics.text_width(&word.text) <= max_width {
        return Some(word.into());
    }
    pack_chars(word, metrics, max_width, lines).map(PartialLine::from)
}

/// Character-level packing for a word wider than the line budget: repeatedly
/// emit the longest prefix that fits (at least one character) until what is
/// left fits on a line of its own.
fn pack_chars<M: TextMetrics>(
    word: Word,
    metrics: &M,
    max_width: Px,
    lines: &mut Vec<WrapLine>,
) -> Option<Word> {
    let mut chars: Vec<char> = word.text.chars().collect();
    let mut offset = word.start;

    while !chars.is_empty() && metrics.text_width(&chars.iter().collect::<String>()) > max_width {
        // longest fitting prefix; the scan stops at the first prefix that no
        // longer fits
        let mut fitting = 0;
        for i in 1..=chars.len() {
            let prefix: String = chars[..i].iter().collect();
            if metrics.text_width(&prefix) <= max_width {
                fitting = i;
            } else {
                break;
            }
        }
        // nothing fits: force one character out so the loop always advances
        let take = fitting.max(1);

        let prefix: String = chars[..take].iter().collect();
        lines.push(WrapLine {
            text: prefix,
            words: vec![(offset, offset + take)],
        });
        chars.drain(..take);
        offset += take;
    }

    if chars.is_empty() {
        None
    } else {
        Some(Word {
            text: chars.into_iter().collect(),
            start: offset,
            end: word.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fixtures::MonoMetrics;

    const CELL: MonoMetrics = MonoMetrics { advance: 10 };

    fn texts(lines: &[WrapLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn words_pack_onto_one_line_while_they_fit() {
        let lines = wrap_text("a bb ccc", &CELL, Px(80));
        assert_eq!(texts(&lines), vec!["a bb ccc"]);
        assert_eq!(lines[0].words, vec![(0, 1), (2, 4), (5, 8)]);
    }

    #[test]
    fn rejected_word_starts_the_next_line() {
        // 50px fits exactly five cells: "Hello" but not "Hello World"
        let lines = wrap_text("Hello World", &CELL, Px(50));
        assert_eq!(texts(&lines), vec!["Hello", "World"]);
        assert_eq!((lines[0].start(), lines[0].end()), (0, 5));
        assert_eq!((lines[1].start(), lines[1].end()), (6, 11));
    }

    #[test]
    fn every_line_fits_the_budget() {
        let lines = wrap_text(
            "the quick brown fox jumps over the lazy dog",
            &CELL,
            Px(100),
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(CELL.text_width(&line.text) <= Px(100), "{:?}", line.text);
        }
    }

    #[test]
    fn joining_lines_reproduces_the_input() {
        let input = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_text(input, &CELL, Px(100));
        assert_eq!(texts(&lines).join(" "), input);
    }

    #[test]
    fn oversize_word_breaks_into_fitting_prefixes() {
        let lines = wrap_text("abcdefghij", &CELL, Px(30));
        assert_eq!(texts(&lines), vec!["abc", "def", "ghi", "j"]);
        assert_eq!((lines[0].start(), lines[0].end()), (0, 3));
        assert_eq!((lines[3].start(), lines[3].end()), (9, 10));
        let rejoined: String = texts(&lines).concat();
        assert_eq!(rejoined, "abcdefghij");
    }

    #[test]
    fn oversize_word_after_accepted_words_is_still_broken() {
        let lines = wrap_text("ab cdefghijkl", &CELL, Px(40));
        for line in &lines {
            assert!(CELL.text_width(&line.text) <= Px(40), "{:?}", line.text);
        }
        assert_eq!(texts(&lines).concat().replace(' ', ""), "abcdefghijkl");
    }

    #[test]
    fn one_character_is_forced_when_nothing_fits() {
        let lines = wrap_text("xyz", &CELL, Px(5));
        assert_eq!(texts(&lines), vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_and_whitespace_input_produce_no_lines() {
        assert!(wrap_text("", &CELL, Px(100)).is_empty());
        assert!(wrap_text("   \t  ", &CELL, Px(100)).is_empty());
    }

    #[test]
    fn interior_space_runs_collapse_to_single_spaces() {
        let lines = wrap_text("a  b", &CELL, Px(100));
        assert_eq!(texts(&lines), vec!["a b"]);
        // the word ranges skip the collapsed run rather than spanning it
        assert_eq!(lines[0].words, vec![(0, 1), (3, 4)]);
        assert_eq!((lines[0].start(), lines[0].end()), (0, 4));
    }
}
