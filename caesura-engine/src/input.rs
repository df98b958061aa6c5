//! Input abstraction for line splitting
//!
//! Provides a unified interface over the shapes subtitle text arrives in:
//! a whole text block, a single line, or an already-separated line list.

/// Unified input abstraction
#[derive(Debug, Clone)]
pub enum Input {
    /// A text block; lines are separated on `\n` and blank lines dropped
    Text(String),
    /// A single line, processed as-is
    Line(String),
    /// An already-separated list of lines
    Lines(Vec<String>),
}

impl Input {
    /// Create input from a text block
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a single line
    pub fn from_line<S: Into<String>>(line: S) -> Self {
        Input::Line(line.into())
    }

    /// Create input from a list of lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Lines(lines.into_iter().map(Into::into).collect())
    }

    /// Flatten the input into the lines to split, preserving order
    ///
    /// Text blocks are separated on newlines with blank lines dropped; a
    /// single line and a line list pass through unchanged.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Input::Text(text) => text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
            Input::Line(line) => vec![line],
            Input::Lines(lines) => lines,
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<String>> for Input {
    fn from(lines: Vec<String>) -> Self {
        Input::Lines(lines)
    }
}
