//! Block comment removal.
//!
//! A comment starts at `#=` and ends at the nearest following `=#`, possibly several lines
//! later. Comments are removed before any line is classified, so they may appear anywhere,
//! including inside what looks like a quoted string. Markers are matched on code points: a
//! combining mark after `#=` does not hide it.
//!
//! An opener without a matching closer is not a comment: it and the rest of the text are kept
//! as-is and left for the line parser to reject.

// internal imports
use crate::constants::{COMMENT_CLOSE, COMMENT_OPEN};

/// Comment-free text plus the source line each of its lines starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    text: String,
    spans: Vec<(usize, usize)>, // byte range of each output line, terminator excluded
    line_origins: Vec<usize>,   // 1-based source line for each output line
}
impl Stripped {
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Original line number of the `index`-th (0-based) line of the stripped text.
    pub fn origin(&self, index: usize) -> Option<usize> {
        self.line_origins.get(index).copied()
    }

    /// Iterates over `(source_line, line)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.spans
            .iter()
            .zip(self.line_origins.iter())
            .map(|(&(start, end), &origin)| (origin, &self.text[start..end]))
    }
}

/// Removes every `#= ... =#` region from `text`.
pub fn strip_comments(text: &str) -> String {
    strip(text).into_text()
}

/// Removes every `#= ... =#` region, remembering where each surviving line came from.
pub fn strip(text: &str) -> Stripped {
    let mut out = String::with_capacity(text.len());
    // (output offset, source offset) at the start of each kept run of text
    let mut kept: Vec<(usize, usize)> = Vec::new();
    let mut keep = |out: &mut String, src_offset: usize, run: &str| {
        if !run.is_empty() {
            kept.push((out.len(), src_offset));
            out.push_str(run);
        }
    };

    let mut pos = 0;
    while let Some(open) = text[pos..].find(COMMENT_OPEN).map(|n| pos + n) {
        keep(&mut out, pos, &text[pos..open]);
        let body = open + COMMENT_OPEN.len();
        match text[body..].find(COMMENT_CLOSE) {
            Some(close) => pos = body + close + COMMENT_CLOSE.len(),
            None => {
                // Unterminated: the opener is plain text.
                pos = open;
                break;
            }
        }
    }
    keep(&mut out, pos, &text[pos..]);

    let src_starts = line_spans(text)
        .into_iter()
        .map(|(start, _)| start)
        .collect::<Vec<_>>();
    let spans = line_spans(out.as_str());
    let line_origins = spans
        .iter()
        .map(|&(start, _)| {
            // every output line starts on a kept byte
            let run = kept.partition_point(|&(out_start, _)| out_start <= start) - 1;
            let (out_start, src_start) = kept[run];
            let src_offset = src_start + (start - out_start);
            src_starts.partition_point(|&s| s <= src_offset)
        })
        .collect();

    Stripped {
        text: out,
        spans,
        line_origins,
    }
}

/// Byte ranges of the lines of `s`, terminators excluded.
///
/// `\r\n` is one break; a lone `\r` and the other Unicode line separators are breaks too. A
/// break at the very end does not start an extra empty line.
pub fn line_spans(s: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut iter = s.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        if !is_line_break(ch) {
            continue;
        }
        spans.push((start, i));
        start = i + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(j, '\n')) = iter.peek() {
                iter.next();
                start = j + 1;
            }
        }
    }
    if start < s.len() {
        spans.push((start, s.len()));
    }
    spans
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{001C}'
            | '\u{001D}'
            | '\u{001E}'
            | '\u{0085}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
