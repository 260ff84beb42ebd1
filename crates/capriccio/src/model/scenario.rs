//! The two shapes a scenario can take.

use super::{Example, Step, Tag};

/// Scenario written with `Scenario:`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioSimple {
    /// Text following the keyword.
    pub name: String,
    /// Free text between the header and the first step, on one line.
    pub description: Option<String>,
    /// Steps in document order; never empty.
    pub steps: Vec<Step>,
    /// Own tags, or the feature's tags when the scenario has none.
    pub tags: Vec<Tag>,
}

/// Scenario written with `Scenario Outline:`, expanded over its examples.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScenarioOutline {
    /// Text following the keyword.
    pub name: String,
    /// Free text between the header and the first step, on one line.
    pub description: Option<String>,
    /// Steps in document order; never empty.
    pub steps: Vec<Step>,
    /// Rows of every Examples block, in block order then row order.
    pub examples: Vec<Example>,
    /// Own tags, or the feature's tags when the scenario has none.
    pub tags: Vec<Tag>,
}

/// A scenario of either shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Scenario {
    /// `Scenario:`.
    Simple(ScenarioSimple),
    /// `Scenario Outline:`.
    Outline(ScenarioOutline),
}

impl Scenario {
    /// Scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Simple(scenario) => &scenario.name,
            Self::Outline(outline) => &outline.name,
        }
    }

    /// Scenario description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Simple(scenario) => scenario.description.as_deref(),
            Self::Outline(outline) => outline.description.as_deref(),
        }
    }

    /// Steps in document order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Simple(scenario) => &scenario.steps,
            Self::Outline(outline) => &outline.steps,
        }
    }

    /// Tags applying to the scenario.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Simple(scenario) => &scenario.tags,
            Self::Outline(outline) => &outline.tags,
        }
    }

    /// The simple scenario, if this is one.
    #[must_use]
    pub fn as_simple(&self) -> Option<&ScenarioSimple> {
        match self {
            Self::Simple(scenario) => Some(scenario),
            Self::Outline(_) => None,
        }
    }

    /// The outline, if this is one.
    #[must_use]
    pub fn as_outline(&self) -> Option<&ScenarioOutline> {
        match self {
            Self::Simple(_) => None,
            Self::Outline(outline) => Some(outline),
        }
    }

    /// Give an untagged scenario the feature's tags.
    ///
    /// A scenario carrying any tag of its own keeps exactly those tags; the
    /// feature's tags are not added to them.
    #[must_use]
    pub(crate) fn inherit_tags(self, feature_tags: &[Tag]) -> Self {
        if !self.tags().is_empty() {
            return self;
        }
        match self {
            Self::Simple(scenario) => Self::Simple(ScenarioSimple {
                tags: feature_tags.to_vec(),
                ..scenario
            }),
            Self::Outline(outline) => Self::Outline(ScenarioOutline {
                tags: feature_tags.to_vec(),
                ..outline
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepKeyword;

    fn simple(tags: &[&str]) -> Scenario {
        Scenario::Simple(ScenarioSimple {
            name: "S".into(),
            description: None,
            steps: vec![Step {
                keyword: StepKeyword::Given,
                text: "x".into(),
            }],
            tags: tags.iter().map(|name| Tag::new(name)).collect(),
        })
    }

    #[test]
    fn untagged_scenario_inherits_feature_tags() {
        let scenario = simple(&[]).inherit_tags(&[Tag::new("f")]);
        assert_eq!(scenario.tags(), &[Tag::new("f")]);
    }

    #[test]
    fn tagged_scenario_keeps_only_own_tags() {
        let scenario = simple(&["a", "b"]).inherit_tags(&[Tag::new("f")]);
        assert_eq!(scenario.tags(), &[Tag::new("a"), Tag::new("b")]);
    }

    #[test]
    fn accessors_expose_variant() {
        let scenario = simple(&[]);
        assert_eq!(scenario.name(), "S");
        assert_eq!(scenario.description(), None);
        assert_eq!(scenario.steps().len(), 1);
        assert!(scenario.as_simple().is_some());
        assert!(scenario.as_outline().is_none());
    }
}
