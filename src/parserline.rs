//! Line-level grammar of the dialect.
//!
//! Every comment-free line is classified into a [`LineKind`] before anything is evaluated.
//! Which kinds are possible depends on the [`Scope`]: at the top level a line declares a
//! constant or opens a dictionary, inside `$[ ... ]` it is an entry or the closing `]`.

// internal imports
use crate::comments::Stripped;
use crate::constants::{DECL_SEP, DICT_CLOSE, DICT_OPEN, ENTRY_DELIM, KEY_VAL_SEP};

/// A trimmed source line and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLine<'a> {
    text: &'a str,
    line_num: usize,
}
impl<'a> ParserLine<'a> {
    pub fn new(text: &'a str, line_num: usize) -> Self {
        Self {
            text: text.trim(),
            line_num,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn line_num(&self) -> usize {
        self.line_num
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn classify(&self, scope: Scope) -> LineKind<'a> {
        classify(self.text, scope)
    }
}

/// Where the parser currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    TopLevel,
    Dictionary,
}

/// The shape of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `name := expr`
    ConstantDecl { name: &'a str, expr: &'a str },
    /// `$[`
    DictStart,
    /// `]`
    DictEnd,
    /// `key : expr` with an optional trailing comma
    DictEntry { key: &'a str, expr: &'a str },
    Invalid,
}

/// Classifies an already-trimmed line.
pub fn classify(line: &str, scope: Scope) -> LineKind<'_> {
    match scope {
        Scope::TopLevel => {
            if line.is_empty() {
                LineKind::Blank
            } else if let Some((name, expr)) = split_binding(line, DECL_SEP) {
                LineKind::ConstantDecl { name, expr }
            } else if line.starts_with(DICT_OPEN) {
                // anything after the marker on the same line is ignored
                LineKind::DictStart
            } else {
                LineKind::Invalid
            }
        }
        Scope::Dictionary => {
            if line == DICT_CLOSE {
                return LineKind::DictEnd;
            }
            let line = match line.strip_suffix(ENTRY_DELIM) {
                Some(rest) => rest.trim(),
                None => line,
            };
            match split_binding(line, KEY_VAL_SEP) {
                Some((key, expr)) => LineKind::DictEntry { key, expr },
                None => LineKind::Invalid,
            }
        }
    }
}

/// Splits `ident <sep> expr`. The identifier must start the line, whitespace may surround
/// the separator and the expression must not be empty.
fn split_binding<'a>(line: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let ident_len = identifier_len(line);
    if ident_len == 0 {
        return None;
    }
    let (ident, rest) = line.split_at(ident_len);
    let expr = rest.trim_start().strip_prefix(sep)?.trim();
    if expr.is_empty() {
        None
    } else {
        Some((ident, expr))
    }
}

/// Length in bytes of the leading `[_a-z]+` run.
fn identifier_len(s: &str) -> usize {
    s.bytes().take_while(|&b| is_ident_byte(b)).count()
}

fn is_ident_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_lowercase()
}

/// Whether the whole of `s` is an identifier (`[_a-z]+`).
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_ident_byte)
}

/// Forward-only cursor over the lines of one input.
///
/// Lines are consumed front to back; nothing is re-read once passed.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<ParserLine<'a>>,
    pos: usize,
}
impl<'a> LineCursor<'a> {
    pub fn new(stripped: &'a Stripped) -> Self {
        let lines = stripped
            .lines()
            .map(|(line_num, text)| ParserLine::new(text, line_num))
            .collect();
        Self { lines, pos: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.lines.len()
    }

    /// Number of lines consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}
impl<'a> Iterator for LineCursor<'a> {
    type Item = ParserLine<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }
}
