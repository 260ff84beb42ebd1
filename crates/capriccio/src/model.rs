//! The document tree produced by a successful parse.
//!
//! Every value is built once, bottom-up, while transforming the parse tree and
//! owned by the enclosing [`Feature`].

mod example;
mod scenario;

pub use example::{EXAMPLE_TAGS_KEY, Example};
pub use scenario::{Scenario, ScenarioOutline, ScenarioSimple};

use crate::keyword::StepKeyword;

/// Label attached to a feature, scenario or examples block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Tag {
    /// Text after the `@`, trimmed.
    pub name: String,
}

impl Tag {
    /// Create a tag, trimming surrounding whitespace from `name`.
    ///
    /// # Examples
    /// ```
    /// use capriccio::Tag;
    /// assert_eq!(Tag::new(" smoke ").name, "smoke");
    /// ```
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
        }
    }
}

/// One instruction line of a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Keyword the line starts with.
    pub keyword: StepKeyword,
    /// Rest of the line.
    pub text: String,
}

/// Root of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Feature {
    /// Text following `Feature:`.
    pub name: String,
    /// Free text between the header and the first scenario, on one line.
    pub description: Option<String>,
    /// Scenarios in document order; never empty.
    pub scenarios: Vec<Scenario>,
    /// Tags written above `Feature:`.
    pub tags: Vec<Tag>,
}

impl Feature {
    /// Parse a feature document.
    ///
    /// # Errors
    /// See [`crate::parse`].
    pub fn parse(text: &str) -> Result<Self, crate::ParseError> {
        crate::parse(text)
    }

    /// Parse a feature document from raw bytes.
    ///
    /// # Errors
    /// Returns [`crate::ParseError::Encoding`] when `bytes` is not UTF-8, and
    /// otherwise the errors of [`crate::parse`].
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, crate::ParseError> {
        let text = std::str::from_utf8(bytes)?;
        crate::parse(text)
    }

    /// Scenarios written with `Scenario:`.
    pub fn simple_scenarios(&self) -> impl Iterator<Item = &ScenarioSimple> {
        self.scenarios.iter().filter_map(Scenario::as_simple)
    }

    /// Scenarios written with `Scenario Outline:`.
    pub fn outlines(&self) -> impl Iterator<Item = &ScenarioOutline> {
        self.scenarios.iter().filter_map(Scenario::as_outline)
    }
}

impl std::str::FromStr for Feature {
    type Err = crate::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::parse(text)
    }
}
