//! Parse Gherkin-style feature documents into a typed document tree.
//!
//! The parser accepts `Feature`, `Scenario`, `Scenario Outline` and
//! `Examples` blocks with tags, and produces a [`Feature`] whose outlines are
//! already expanded into one [`Example`] per table row.
//!
//! ```
//! use capriccio::{Scenario, StepKeyword};
//!
//! let feature = capriccio::parse("Feature: F\nScenario: S\nGiven x\n")
//!     .unwrap_or_else(|err| panic!("{err}"));
//! assert_eq!(feature.name, "F");
//! let Some(Scenario::Simple(scenario)) = feature.scenarios.first() else {
//!     panic!("expected a simple scenario");
//! };
//! assert_eq!(scenario.steps.first().map(|step| step.keyword), Some(StepKeyword::Given));
//! ```
//!
//! Tags written above a scenario replace the feature's tags for that
//! scenario; only a scenario without tags of its own takes the feature's.
//! Each example row carries the tags of its Examples block in the
//! [`EXAMPLE_TAGS_KEY`] column.

mod errors;
mod grammar;
mod keyword;
mod model;
mod transform;

pub use errors::{ParseError, SemanticError};
pub use grammar::GherkinLabel;
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use model::{
    EXAMPLE_TAGS_KEY, Example, Feature, Scenario, ScenarioOutline, ScenarioSimple, Step, Tag,
};

use transform::TransformContext;

/// Parse one feature document.
///
/// Each call owns its transform state, so concurrent parses never observe
/// each other.
///
/// # Errors
/// Returns [`ParseError::Syntax`] when the text does not follow the grammar
/// and [`ParseError::Semantic`] when a matched value cannot be interpreted.
pub fn parse(text: &str) -> Result<Feature, ParseError> {
    let tree = capriccio_grammar::evaluate(grammar::gherkin(), text)?;
    let feature = TransformContext::default().build_feature(tree)?;
    log::debug!(
        "parsed feature `{}` with {} scenario(s)",
        feature.name,
        feature.scenarios.len()
    );
    Ok(feature)
}
