//! Errors reported when a document cannot be turned into a [`Feature`](crate::Feature).

use capriccio_grammar::SyntaxError;
use thiserror::Error;

use crate::grammar::GherkinLabel;

/// Failure to parse a feature document. No partial tree is ever returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text does not follow the grammar.
    #[error("feature document is not parseable: {0}")]
    Syntax(#[from] SyntaxError),
    /// The text follows the grammar but a value cannot be interpreted.
    #[error("feature document is not parseable: {0}")]
    Semantic(#[from] SemanticError),
    /// Raw input bytes are not valid UTF-8.
    #[error("feature document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// A value the transform cannot turn into part of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// A step line starts with a word outside the keyword vocabulary.
    #[error("unknown step keyword `{0}`")]
    UnknownStepKeyword(String),
    /// An Examples header names the same column twice, or names the
    /// reserved tag column.
    #[error("duplicate Examples column `{0}`")]
    DuplicateExampleColumn(String),
    /// A labeled node holds a value of the wrong shape.
    #[error("unexpected {child} inside {parent:?}")]
    UnexpectedNode {
        /// Label of the node being built.
        parent: GherkinLabel,
        /// Description of the offending child value.
        child: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display_includes_location() {
        let err = ParseError::from(SyntaxError::at("Feature:", 8));
        assert_eq!(
            err.to_string(),
            "feature document is not parseable: unexpected input at line 1, column 9 (byte 8): end of document"
        );
    }

    #[test]
    fn semantic_error_display_names_value() {
        let err = ParseError::from(SemanticError::UnknownStepKeyword("Whence".into()));
        assert_eq!(
            err.to_string(),
            "feature document is not parseable: unknown step keyword `Whence`"
        );
    }

    #[test]
    fn unexpected_node_names_parent_label() {
        let err = SemanticError::UnexpectedNode {
            parent: GherkinLabel::Step,
            child: "tag",
        };
        assert_eq!(err.to_string(), "unexpected tag inside Step");
    }
}
