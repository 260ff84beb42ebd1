//! Error type reported when a grammar does not match its input.

use std::fmt;

const EXCERPT_CHARS: usize = 40;

/// Location of a failed evaluation.
///
/// The offset is the furthest byte the engine reached before every
/// alternative gave up, which is usually where the document stops looking
/// like the grammar.
///
/// # Examples
/// ```
/// use capriccio_grammar::SyntaxError;
/// let err = SyntaxError::at("Feature: F\nnonsense\n", 11);
/// assert_eq!((err.line, err.column), (2, 1));
/// assert_eq!(err.excerpt, "nonsense");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Zero-based byte offset into the input.
    pub offset: usize,
    /// One-based line number.
    pub line: usize,
    /// One-based column, counted in characters.
    pub column: usize,
    /// Start of the input at `offset`, up to the end of its line.
    pub excerpt: String,
    /// Whether `offset` is the end of the input.
    pub at_end: bool,
}

impl SyntaxError {
    /// Describe a failure at byte `offset` of `input`.
    ///
    /// Offsets past the end, or inside a multi-byte character, are moved back
    /// to the nearest character boundary.
    #[must_use]
    pub fn at(input: &str, offset: usize) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset = offset.saturating_sub(1);
        }
        let before = input.get(..offset).unwrap_or_default();
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before
            .get(line_start..)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        let excerpt = input
            .get(offset..)
            .unwrap_or_default()
            .chars()
            .take_while(|ch| !matches!(ch, '\n' | '\r'))
            .take(EXCERPT_CHARS)
            .collect();
        Self {
            offset,
            line,
            column,
            excerpt,
            at_end: offset == input.len(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected input at line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )?;
        if self.at_end {
            write!(f, ": end of document")
        } else if self.excerpt.is_empty() {
            write!(f, ": end of line")
        } else {
            write!(f, ": `{}`", self.excerpt)
        }
    }
}

impl std::error::Error for SyntaxError {}
