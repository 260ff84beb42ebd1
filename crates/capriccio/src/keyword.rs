//! Step keyword vocabulary.
//!
//! Conjunctions keep their own kind: an `And` step following a `Given` is
//! reported as `And`, and resolving it is left to whoever consumes the tree.

use std::fmt;
use std::str::FromStr;

/// Keyword that introduces a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKeyword {
    /// Precondition.
    Given,
    /// Action.
    When,
    /// Expected outcome.
    Then,
    /// Continuation of the previous step.
    And,
    /// Contrasting continuation of the previous step.
    But,
}

impl StepKeyword {
    /// Every keyword, in the order the grammar tries them.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use capriccio::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Return `true` for `And` and `But`.
    #[must_use]
    pub const fn is_conjunction(&self) -> bool {
        matches!(self, Self::And | Self::But)
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
///
/// Contains the unrecognised keyword text for diagnostic purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|keyword| trimmed.eq_ignore_ascii_case(keyword.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

impl TryFrom<&str> for StepKeyword {
    type Error = StepKeywordParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
    fn parse_kw(input: &str) -> StepKeyword {
        input
            .parse()
            .expect("test input should parse to a valid keyword")
    }

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case("given", StepKeyword::Given)]
    #[case(" WhEn ", StepKeyword::When)]
    #[case("THEN", StepKeyword::Then)]
    #[case("AND", StepKeyword::And)]
    #[case(" but ", StepKeyword::But)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: StepKeyword) {
        assert_eq!(parse_kw(input), expected);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "test verifies error case with descriptive failure")]
    fn rejects_invalid_keyword() {
        let err = "Whence"
            .parse::<StepKeyword>()
            .expect_err("expected parse error for invalid keyword");
        assert_eq!(err.0, "Whence");
        assert_eq!(err.to_string(), "invalid step keyword: Whence");
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for keyword in StepKeyword::ALL {
            assert_eq!(StepKeyword::try_from(keyword.as_str()), Ok(keyword));
        }
    }

    #[test]
    fn only_and_but_are_conjunctions() {
        let conjunctions: Vec<_> = StepKeyword::ALL
            .into_iter()
            .filter(StepKeyword::is_conjunction)
            .collect();
        assert_eq!(conjunctions, vec![StepKeyword::And, StepKeyword::But]);
    }
}
