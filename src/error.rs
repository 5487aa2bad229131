use std::path::PathBuf;

use thiserror::Error;

/// What went wrong while reading the dialect. Every variant carries the offending text verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A top-level line that is neither a constant declaration nor a dictionary opener.
    #[error("Invalid syntax: {0}")]
    InvalidLine(String),

    /// A line inside `$[ ... ]` that is not `key: value` or `]`.
    #[error("Invalid dictionary syntax: {0}")]
    InvalidEntry(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Undefined constant: {0}")]
    UndefinedConstant(String),

    /// A digit string that does not fit into a TOML (64-bit signed) integer.
    #[error("Integer overflow: {0}")]
    IntegerOverflow(String),
}

/// A grammar or evaluation error. Aborts the whole parse.
///
/// `line` is the 1-based line of the original source, or `None` when a value expression was
/// evaluated on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{kind}", location(.line))]
pub struct SyntaxError {
    pub line: Option<usize>,
    pub kind: ErrorKind,
}
impl SyntaxError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { line: None, kind }
    }

    pub fn at(line: usize, kind: ErrorKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    /// Attaches a line number unless one is already present.
    pub(crate) fn on_line(self, line: usize) -> Self {
        Self {
            line: self.line.or(Some(line)),
            ..self
        }
    }

    /// The offending source text.
    pub fn text(&self) -> &str {
        match &self.kind {
            ErrorKind::InvalidLine(s)
            | ErrorKind::InvalidEntry(s)
            | ErrorKind::InvalidValue(s)
            | ErrorKind::UndefinedConstant(s)
            | ErrorKind::IntegerOverflow(s) => s.as_str(),
        }
    }
}
impl From<ErrorKind> for SyntaxError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

fn location(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("Line {}: ", n),
        None => String::new(),
    }
}

/// The crate-level error for operations that also touch the filesystem.
///
/// Keeps "bad input text" ([`Error::Syntax`]) apart from "bad input source"
/// ([`Error::FileError`]).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Could not read {}: {source}", .path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_when_known() {
        let err = SyntaxError::at(3, ErrorKind::InvalidLine("invalid_line".into()));
        assert_eq!(err.to_string(), "Line 3: Invalid syntax: invalid_line");

        let bare = SyntaxError::new(ErrorKind::UndefinedConstant("port".into()));
        assert_eq!(bare.to_string(), "Undefined constant: port");
        assert_eq!(bare.text(), "port");
    }

    #[test]
    fn on_line_keeps_existing_location() {
        let err = SyntaxError::at(2, ErrorKind::InvalidValue("x".into())).on_line(9);
        assert_eq!(err.line, Some(2));
        let err = SyntaxError::new(ErrorKind::InvalidValue("x".into())).on_line(9);
        assert_eq!(err.line, Some(9));
    }
}
