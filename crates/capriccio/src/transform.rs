//! Bottom-up conversion of the labeled parse tree into the document tree.
//!
//! Children are converted before their parent, so every builder receives
//! already-typed [`Value`]s and picks out the ones its label may contain.
//! Anything else is reported as [`SemanticError::UnexpectedNode`].

use capriccio_grammar::Matched;

use crate::errors::SemanticError;
use crate::grammar::GherkinLabel;
use crate::keyword::StepKeyword;
use crate::model::{
    EXAMPLE_TAGS_KEY, Example, Feature, Scenario, ScenarioOutline, ScenarioSimple, Step, Tag,
};

/// Output of one parse-tree value.
#[derive(Debug)]
enum Value {
    Text(String),
    Name(String),
    Description(String),
    Tag(Tag),
    Step(Step),
    ExampleKeys(Vec<String>),
    ExampleValues(Vec<String>),
    Examples(Vec<Example>),
    Scenario(Scenario),
    Feature(Feature),
}

impl Value {
    fn describe(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Name(_) => "name",
            Self::Description(_) => "description",
            Self::Tag(_) => "tag",
            Self::Step(_) => "step",
            Self::ExampleKeys(_) => "example header row",
            Self::ExampleValues(_) => "example data rows",
            Self::Examples(_) => "examples block",
            Self::Scenario(_) => "scenario",
            Self::Feature(_) => "feature",
        }
    }
}

fn unexpected(parent: GherkinLabel, value: &Value) -> SemanticError {
    SemanticError::UnexpectedNode {
        parent,
        child: value.describe(),
    }
}

/// Tags, name and description shared by every block header.
struct Heading {
    tags: Vec<Tag>,
    name: String,
    description: Option<String>,
}

impl Heading {
    /// Take the heading values out of `values`, returning the rest in order.
    fn split(parent: GherkinLabel, values: Vec<Value>) -> Result<(Self, Vec<Value>), SemanticError> {
        let mut tags = Vec::new();
        let mut name = None;
        let mut description = None;
        let mut rest = Vec::new();
        for value in values {
            match value {
                Value::Tag(tag) => tags.push(tag),
                Value::Name(text) if name.is_none() => name = Some(text),
                Value::Description(text) if description.is_none() => description = Some(text),
                other => rest.push(other),
            }
        }
        let name = name.ok_or(SemanticError::UnexpectedNode {
            parent,
            child: "header without a name",
        })?;
        Ok((
            Self {
                tags,
                name,
                description,
            },
            rest,
        ))
    }
}

/// State of one transform pass.
///
/// The only carried state is the most recent non-empty Examples header seen
/// inside the current Scenario Outline. It is cleared when an outline starts
/// and when it finishes, so it never reaches a sibling outline or another
/// parse.
#[derive(Debug, Default)]
pub(crate) struct TransformContext {
    last_example_keys: Option<Vec<String>>,
}

impl TransformContext {
    /// Convert the engine output for the root rule into a [`Feature`].
    pub(crate) fn build_feature(
        &mut self,
        tree: Vec<Matched<GherkinLabel>>,
    ) -> Result<Feature, SemanticError> {
        let mut values = tree
            .into_iter()
            .map(|value| self.transform(value))
            .collect::<Result<Vec<_>, _>>()?;
        match (values.pop(), values.is_empty()) {
            (Some(Value::Feature(feature)), true) => Ok(feature),
            (Some(other), _) => Err(unexpected(GherkinLabel::Feature, &other)),
            (None, _) => Err(SemanticError::UnexpectedNode {
                parent: GherkinLabel::Feature,
                child: "empty document",
            }),
        }
    }

    fn transform(&mut self, value: Matched<GherkinLabel>) -> Result<Value, SemanticError> {
        let (label, children) = match value {
            Matched::Text(text) => return Ok(Value::Text(text)),
            Matched::Node { label, children } => (label, children),
        };
        if label == GherkinLabel::ScenarioOutline {
            self.last_example_keys = None;
        }
        let values = children
            .into_iter()
            .map(|child| self.transform(child))
            .collect::<Result<Vec<_>, _>>()?;
        match label {
            GherkinLabel::Tag => single_text(label, values).map(|text| Value::Tag(Tag::new(&text))),
            GherkinLabel::Name => {
                single_text(label, values).map(|text| Value::Name(text.trim().to_owned()))
            }
            GherkinLabel::Description => single_text(label, values)
                .map(|text| Value::Description(text.trim().to_owned())),
            GherkinLabel::Step => build_step(values).map(Value::Step),
            GherkinLabel::ExampleKeys => cells(label, values).map(Value::ExampleKeys),
            GherkinLabel::ExampleValues => cells(label, values).map(Value::ExampleValues),
            GherkinLabel::Examples => self.build_examples(values).map(Value::Examples),
            GherkinLabel::Scenario => build_scenario(values).map(Value::Scenario),
            GherkinLabel::ScenarioOutline => {
                let outline = build_outline(values);
                self.last_example_keys = None;
                outline.map(Value::Scenario)
            }
            GherkinLabel::Feature => build_feature(values).map(Value::Feature),
        }
    }

    /// Expand one Examples block into one [`Example`] per data row.
    ///
    /// An empty header row reuses the last non-empty header of the same
    /// outline. Without any usable header the block yields no examples.
    fn build_examples(&mut self, values: Vec<Value>) -> Result<Vec<Example>, SemanticError> {
        let mut tags = Vec::new();
        let mut keys = Vec::new();
        let mut cells = Vec::new();
        for value in values {
            match value {
                Value::Tag(tag) => tags.push(tag),
                Value::ExampleKeys(row) => keys = row,
                Value::ExampleValues(rows) => cells = rows,
                other => return Err(unexpected(GherkinLabel::Examples, &other)),
            }
        }

        if keys.is_empty() {
            let Some(inherited) = self.last_example_keys.clone() else {
                log::warn!(
                    "Examples block has an empty header and no earlier header to reuse; \
                     its {} cell(s) are ignored",
                    cells.len()
                );
                return Ok(Vec::new());
            };
            keys = inherited;
        } else {
            ensure_unique_columns(&keys)?;
            self.last_example_keys = Some(keys.clone());
        }

        let block_tags = render_example_tags(&tags);
        Ok(cells
            .chunks(keys.len())
            .map(|row| Example::new(&keys, row, &block_tags))
            .collect())
    }
}

fn single_text(parent: GherkinLabel, values: Vec<Value>) -> Result<String, SemanticError> {
    let mut values = values.into_iter();
    match (values.next(), values.next()) {
        (Some(Value::Text(text)), None) => Ok(text),
        (Some(Value::Text(_)), Some(other)) | (Some(other), _) => Err(unexpected(parent, &other)),
        (None, _) => Err(SemanticError::UnexpectedNode {
            parent,
            child: "missing text",
        }),
    }
}

fn cells(parent: GherkinLabel, values: Vec<Value>) -> Result<Vec<String>, SemanticError> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Text(text) => Ok(text.trim().to_owned()),
            other => Err(unexpected(parent, &other)),
        })
        .collect()
}

fn build_step(values: Vec<Value>) -> Result<Step, SemanticError> {
    let mut values = values.into_iter();
    match (values.next(), values.next(), values.next()) {
        (Some(Value::Text(keyword)), Some(Value::Text(text)), None) => {
            let keyword = keyword
                .parse::<StepKeyword>()
                .map_err(|err| SemanticError::UnknownStepKeyword(err.0))?;
            Ok(Step {
                keyword,
                text: text.trim().to_owned(),
            })
        }
        (_, _, Some(other)) | (_, Some(other), _) | (Some(other), _, _) => {
            Err(unexpected(GherkinLabel::Step, &other))
        }
        (None, _, _) => Err(SemanticError::UnexpectedNode {
            parent: GherkinLabel::Step,
            child: "missing keyword",
        }),
    }
}

fn collect_steps(parent: GherkinLabel, values: Vec<Value>) -> Result<Vec<Step>, SemanticError> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Step(step) => Ok(step),
            other => Err(unexpected(parent, &other)),
        })
        .collect()
}

fn build_scenario(values: Vec<Value>) -> Result<Scenario, SemanticError> {
    let (heading, rest) = Heading::split(GherkinLabel::Scenario, values)?;
    let steps = collect_steps(GherkinLabel::Scenario, rest)?;
    Ok(Scenario::Simple(ScenarioSimple {
        name: heading.name,
        description: heading.description,
        steps,
        tags: heading.tags,
    }))
}

fn build_outline(values: Vec<Value>) -> Result<Scenario, SemanticError> {
    let (heading, rest) = Heading::split(GherkinLabel::ScenarioOutline, values)?;
    let mut steps = Vec::new();
    let mut examples = Vec::new();
    for value in rest {
        match value {
            Value::Step(step) => steps.push(step),
            Value::Examples(block) => examples.extend(block),
            other => return Err(unexpected(GherkinLabel::ScenarioOutline, &other)),
        }
    }
    Ok(Scenario::Outline(ScenarioOutline {
        name: heading.name,
        description: heading.description,
        steps,
        examples,
        tags: heading.tags,
    }))
}

fn build_feature(values: Vec<Value>) -> Result<Feature, SemanticError> {
    let (heading, rest) = Heading::split(GherkinLabel::Feature, values)?;
    let scenarios = rest
        .into_iter()
        .map(|value| match value {
            Value::Scenario(scenario) => Ok(scenario.inherit_tags(&heading.tags)),
            other => Err(unexpected(GherkinLabel::Feature, &other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Feature {
        name: heading.name,
        description: heading.description,
        scenarios,
        tags: heading.tags,
    })
}

fn ensure_unique_columns(keys: &[String]) -> Result<(), SemanticError> {
    for (index, key) in keys.iter().enumerate() {
        let repeated = keys.iter().take(index).any(|earlier| earlier == key);
        if repeated || key == EXAMPLE_TAGS_KEY {
            return Err(SemanticError::DuplicateExampleColumn(key.clone()));
        }
    }
    Ok(())
}

/// `[smoke, slow]` renders as `"smoke @slow"`.
fn render_example_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.name.as_str())
        .collect::<Vec<_>>()
        .join(" @")
}
