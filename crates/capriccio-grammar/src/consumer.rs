//! The primitive algebra grammars are composed from.
//!
//! Every primitive either consumes input and yields zero or more
//! [`Matched`](crate::Matched) values, or fails. Failure is a local
//! backtracking signal: the enclosing primitive decides whether to try
//! something else at the same position.

use std::ops::BitOr;

use crate::charset::CharSet;

/// A grammar expression over labels of type `L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consumer<L> {
    /// Exact text. With `ignore_case`, ASCII letters match either case and the
    /// input's spelling is yielded.
    Literal {
        /// Text to match.
        text: String,
        /// Compare ASCII letters case-insensitively.
        ignore_case: bool,
    },
    /// One character belonging to the set.
    Charset(CharSet),
    /// One character outside the set.
    AnyExcept(CharSet),
    /// Every expression in order; fails as a whole if any fails.
    Sequence(Vec<Consumer<L>>),
    /// First alternative that matches at the current position.
    Choice(Vec<Consumer<L>>),
    /// Greedy repetition, zero or more times.
    ZeroOrMore(Box<Consumer<L>>),
    /// Greedy repetition, at least once.
    OneOrMore(Box<Consumer<L>>),
    /// The expression, or nothing.
    Optional(Box<Consumer<L>>),
    /// Zero-width negative lookahead.
    Not(Box<Consumer<L>>),
    /// Match and drop the produced values.
    Discard(Box<Consumer<L>>),
    /// Match and collapse every produced text into one value.
    Flatten(Box<Consumer<L>>),
    /// Match and wrap the produced values in a labeled node.
    Label(L, Box<Consumer<L>>),
    /// Match and yield the replacement text instead.
    Replace(Box<Consumer<L>>, String),
    /// One or more items separated by a separator whose values are dropped.
    Interleaved {
        /// Expression between two items.
        separator: Box<Consumer<L>>,
        /// Repeated expression.
        item: Box<Consumer<L>>,
    },
}

/// Match `text` exactly.
#[must_use]
pub fn literal<L>(text: impl Into<String>) -> Consumer<L> {
    Consumer::Literal {
        text: text.into(),
        ignore_case: false,
    }
}

/// Match `text` comparing ASCII letters case-insensitively.
#[must_use]
pub fn literal_ignore_case<L>(text: impl Into<String>) -> Consumer<L> {
    Consumer::Literal {
        text: text.into(),
        ignore_case: true,
    }
}

/// Match one character contained in `set`.
#[must_use]
pub fn charset<L>(set: CharSet) -> Consumer<L> {
    Consumer::Charset(set)
}

/// Match one character not contained in `set`.
#[must_use]
pub fn any_except<L>(set: CharSet) -> Consumer<L> {
    Consumer::AnyExcept(set)
}

/// Match `items` one after the other.
#[must_use]
pub fn sequence<L>(items: impl IntoIterator<Item = Consumer<L>>) -> Consumer<L> {
    Consumer::Sequence(items.into_iter().collect())
}

/// Try `alternatives` in order and keep the first match.
#[must_use]
pub fn choice<L>(alternatives: impl IntoIterator<Item = Consumer<L>>) -> Consumer<L> {
    Consumer::Choice(alternatives.into_iter().collect())
}

/// Match `inner` as many times as possible, possibly never.
#[must_use]
pub fn zero_or_more<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::ZeroOrMore(Box::new(inner))
}

/// Match `inner` as many times as possible, at least once.
#[must_use]
pub fn one_or_more<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::OneOrMore(Box::new(inner))
}

/// Match `inner` if possible without failing otherwise.
#[must_use]
pub fn optional<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::Optional(Box::new(inner))
}

/// Succeed without consuming input only where `inner` fails.
#[must_use]
pub fn not<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::Not(Box::new(inner))
}

/// Match `inner` and drop what it produced.
#[must_use]
pub fn discard<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::Discard(Box::new(inner))
}

/// Match `inner` and join everything it produced into one text value.
#[must_use]
pub fn flatten<L>(inner: Consumer<L>) -> Consumer<L> {
    Consumer::Flatten(Box::new(inner))
}

/// Match `inner` and wrap its values in a node labeled `tag`.
#[must_use]
pub fn label<L>(tag: L, inner: Consumer<L>) -> Consumer<L> {
    Consumer::Label(tag, Box::new(inner))
}

/// Match `from` and yield `to` in its place.
#[must_use]
pub fn replace<L>(from: Consumer<L>, to: impl Into<String>) -> Consumer<L> {
    Consumer::Replace(Box::new(from), to.into())
}

/// Match a non-empty list of `item` separated by `separator`.
#[must_use]
pub fn interleaved<L>(separator: Consumer<L>, item: Consumer<L>) -> Consumer<L> {
    Consumer::Interleaved {
        separator: Box::new(separator),
        item: Box::new(item),
    }
}

impl<L> From<&str> for Consumer<L> {
    fn from(text: &str) -> Self {
        literal(text)
    }
}

/// `a | b` is ordered choice. Chains flatten into one [`Consumer::Choice`].
impl<L> BitOr for Consumer<L> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match self {
            Self::Choice(mut alternatives) => {
                alternatives.push(rhs);
                Self::Choice(alternatives)
            }
            lhs => Self::Choice(vec![lhs, rhs]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitor_chains_into_single_choice() {
        let grammar: Consumer<()> = literal("a") | literal("b") | literal("c");
        assert_eq!(
            grammar,
            Consumer::Choice(vec![literal("a"), literal("b"), literal("c")])
        );
    }

    #[test]
    fn str_converts_into_case_sensitive_literal() {
        let grammar: Consumer<()> = "Feature:".into();
        assert_eq!(
            grammar,
            Consumer::Literal {
                text: "Feature:".into(),
                ignore_case: false,
            }
        );
    }
}
